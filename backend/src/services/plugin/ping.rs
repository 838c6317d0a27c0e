use actix_web::HttpResponse;
use common::responses::PingResponse;

pub async fn process() -> HttpResponse {
    HttpResponse::Ok().json(PingResponse { ok: true })
}
