use actix_web::HttpResponse;
use common::responses::PluginInfo;

pub const PLUGIN_ID: &str = "7f766bcf-d759-4037-96bf-47a4115b12b5";
pub const PLUGIN_NAME: &str = "Watchplanner Section";
pub const PLUGIN_DESCRIPTION: &str =
    "Global watch planner injected on the home screen; admin-editable, persisted server side.";

pub async fn process() -> HttpResponse {
    HttpResponse::Ok().json(PluginInfo {
        id: PLUGIN_ID.to_string(),
        name: PLUGIN_NAME.to_string(),
        description: PLUGIN_DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
