use crate::host::identity::Principal;
use crate::store::{PresetStore, StoreError};
use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use common::responses::{ErrorResponse, StatusResponse};
use log::{debug, error, info};

/// Actix web handler for `POST /plugins/watchplanner/presets`.
///
/// Authorization is checked before the body is read, so refused callers never
/// have their payload buffered. The body is then collected under the app's
/// `PayloadConfig` limit and stored as-is once it is known to be non-blank UTF-8.
///
/// # Returns
/// - `200 OK` with `{"status":"ok"}` once the new document is on disk.
/// - `403 Forbidden` with `{"error":"forbidden"}` unless the caller is an administrator.
/// - `413 Payload Too Large` when an administrator's body exceeds the limit.
/// - `400 Bad Request` with `{"error":"empty_payload"}` or `{"error":"invalid_encoding"}`.
/// - `500 Internal Server Error` with `{"error":"write_failed"}`; the previous
///   document is still in place.
pub async fn process(
    req: HttpRequest,
    principal: Principal,
    store: web::Data<PresetStore>,
    payload: web::Payload,
) -> HttpResponse {
    if !principal.is_administrator() {
        debug!(
            "[watchplanner] preset write refused for {}",
            principal.name.as_deref().unwrap_or("anonymous")
        );
        return HttpResponse::Forbidden().json(ErrorResponse::new("forbidden"));
    }

    let body = match web::Bytes::from_request(&req, &mut payload.into_inner()).await {
        Ok(body) => body,
        Err(e) => {
            debug!("[watchplanner] preset body rejected: {}", e);
            return HttpResponse::from_error(e);
        }
    };

    let text = match String::from_utf8(body.to_vec()) {
        Ok(text) => text,
        Err(_) => return HttpResponse::BadRequest().json(ErrorResponse::new("invalid_encoding")),
    };
    if text.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("empty_payload"));
    }

    let store = store.into_inner();
    let written = tokio::task::spawn_blocking(move || store.write(&text)).await;
    match written {
        Ok(Ok(())) => {
            info!(
                "[watchplanner] preset updated by {}",
                principal.name.as_deref().unwrap_or("unknown")
            );
            HttpResponse::Ok().json(StatusResponse::ok())
        }
        Ok(Err(StoreError::EmptyPayload)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("empty_payload"))
        }
        Ok(Err(StoreError::Io(e))) => {
            error!("[watchplanner] error saving preset: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("write_failed"))
        }
        Err(e) => {
            error!("[watchplanner] preset write task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("write_failed"))
        }
    }
}
