use crate::host::identity::Principal;
use crate::store::PresetStore;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use common::responses::ErrorResponse;
use log::error;

/// Actix web handler for `GET /plugins/watchplanner/presets`.
///
/// The file is read on the blocking pool. The store already turns every
/// filesystem problem into the default document, so the only error left is
/// the blocking task itself failing.
///
/// # Returns
/// - `200 OK` with the document text and `Content-Type: application/json`.
/// - `401 Unauthorized` with `{"error":"unauthorized"}` for anonymous callers.
/// - `500 Internal Server Error` with `{"error":"read_failed"}`.
pub async fn process(principal: Principal, store: web::Data<PresetStore>) -> HttpResponse {
    if !principal.is_authenticated() {
        return HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized"));
    }

    let store = store.into_inner();
    match tokio::task::spawn_blocking(move || store.read()).await {
        Ok(text) => HttpResponse::Ok().content_type(ContentType::json()).body(text),
        Err(e) => {
            error!("[watchplanner] error reading preset: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("read_failed"))
        }
    }
}
