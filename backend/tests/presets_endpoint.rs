use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use common::model::preset::DEFAULT_PRESET;
use std::path::Path;
use std::sync::Arc;
use watchplanner::host::identity::{TokenIdentityProvider, UserRecord};
use watchplanner::store::{PresetStore, PRESET_FILE_NAME, STORAGE_DIR_NAME};
use watchplanner::AppState;

const PRESETS: &str = "/plugins/watchplanner/presets";
const ADMIN: &str = "Bearer admin-token";
const VIEWER: &str = "Bearer viewer-token";

fn users() -> TokenIdentityProvider {
    TokenIdentityProvider::from_users(vec![
        UserRecord {
            name: "admin".into(),
            token: "admin-token".into(),
            roles: vec!["Administrator".into()],
            claims: vec![],
        },
        UserRecord {
            name: "viewer".into(),
            token: "viewer-token".into(),
            roles: vec!["User".into()],
            claims: vec![],
        },
        UserRecord {
            name: "flagged".into(),
            token: "flagged-token".into(),
            roles: vec![],
            claims: vec![("IsAdministrator".into(), "true".into())],
        },
    ])
}

fn state_for(store: PresetStore) -> AppState {
    AppState::new(store, Arc::new(users()), 4096)
}

fn state_in(dir: &Path) -> AppState {
    state_for(PresetStore::open(dir.join(STORAGE_DIR_NAME), PRESET_FILE_NAME))
}

macro_rules! service {
    ($state:expr) => {{
        let state = $state;
        test::init_service(App::new().configure(move |cfg| state.configure(cfg))).await
    }};
}

fn get(auth: Option<&str>) -> test::TestRequest {
    let req = test::TestRequest::get().uri(PRESETS);
    match auth {
        Some(auth) => req.insert_header((AUTHORIZATION, auth)),
        None => req,
    }
}

fn post(auth: Option<&str>, body: impl Into<actix_web::web::Bytes>) -> test::TestRequest {
    let req = test::TestRequest::post()
        .uri(PRESETS)
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload(body.into());
    match auth {
        Some(auth) => req.insert_header((AUTHORIZATION, auth)),
        None => req,
    }
}

#[actix_web::test]
async fn weekly_schedule_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(state_in(dir.path()));

    let resp = test::call_service(&app, get(Some(VIEWER)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(test::read_body(resp).await, DEFAULT_PRESET);

    let schedule = r#"{"serverWeekGrid":{"Mon":[{"Id":"abc","Name":"Show A"}]}}"#;
    let resp = test::call_service(&app, post(Some(ADMIN), schedule).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, r#"{"status":"ok"}"#);

    let resp = test::call_service(&app, get(Some(VIEWER)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, schedule);

    let resp = test::call_service(&app, post(Some(VIEWER), r#"{"serverWeekGrid":{}}"#).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(test::read_body(resp).await, r#"{"error":"forbidden"}"#);

    let resp = test::call_service(&app, get(Some(VIEWER)).to_request()).await;
    assert_eq!(test::read_body(resp).await, schedule);
}

#[actix_web::test]
async fn anonymous_callers_are_turned_away() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let preset_path = state.store.path().to_path_buf();
    let app = service!(state);

    let resp = test::call_service(&app, get(None).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(test::read_body(resp).await, r#"{"error":"unauthorized"}"#);

    let resp = test::call_service(&app, get(Some("Bearer stolen")).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, post(None, r#"{"serverWeekGrid":{}}"#).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(!preset_path.exists());
}

#[actix_web::test]
async fn non_admin_body_is_not_inspected() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(state_in(dir.path()));

    let resp = test::call_service(&app, post(Some(VIEWER), "").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn blank_or_garbled_bodies_are_bad_requests() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let preset_path = state.store.path().to_path_buf();
    let app = service!(state);

    let resp = test::call_service(&app, post(Some(ADMIN), "").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, r#"{"error":"empty_payload"}"#);

    let resp = test::call_service(&app, post(Some(ADMIN), " \r\n ").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(&app, post(Some(ADMIN), vec![0xc3u8, 0x28]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, r#"{"error":"invalid_encoding"}"#);

    assert!(!preset_path.exists());
}

#[actix_web::test]
async fn body_is_stored_opaquely() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(state_in(dir.path()));

    let resp = test::call_service(&app, post(Some(ADMIN), "{ this is not json").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, get(Some(ADMIN)).to_request()).await;
    assert_eq!(test::read_body(resp).await, "{ this is not json");
}

#[actix_web::test]
async fn admin_flag_claim_grants_write() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(state_in(dir.path()));

    let req = test::TestRequest::post()
        .uri(PRESETS)
        .insert_header(("X-Emby-Token", "flagged-token"))
        .set_payload(r#"{"serverWeekGrid":{"Fri":[]}}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn legacy_singular_path_serves_the_same_document() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(state_in(dir.path()));

    let schedule = r#"{"serverWeekGrid":{"Sat":[{"Id":"x","Name":"X"}]}}"#;
    let req = test::TestRequest::post()
        .uri("/plugins/watchplanner/preset")
        .insert_header((AUTHORIZATION, ADMIN))
        .set_payload(schedule)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let resp = test::call_service(&app, get(Some(VIEWER)).to_request()).await;
    assert_eq!(test::read_body(resp).await, schedule);
}

#[actix_web::test]
async fn failed_write_reports_500_and_keeps_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    // The temporary sibling of this file name exceeds the file name limit.
    let file_name = format!("{}.json", "p".repeat(220));
    let store = PresetStore::open(dir.path(), &file_name);
    let previous = r#"{"serverWeekGrid":{"Thu":[]}}"#;
    std::fs::write(store.path(), previous).unwrap();
    let app = service!(state_for(store));

    let resp = test::call_service(&app, post(Some(ADMIN), r#"{"serverWeekGrid":{}}"#).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(test::read_body(resp).await, r#"{"error":"write_failed"}"#);

    let resp = test::call_service(&app, get(Some(VIEWER)).to_request()).await;
    assert_eq!(test::read_body(resp).await, previous);
}

#[actix_web::test]
async fn oversized_bodies_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let preset_path = state.store.path().to_path_buf();
    let app = service!(state);

    let body = format!(r#"{{"serverWeekGrid":{{"Mon":[{{"Id":"{}"}}]}}}}"#, "x".repeat(8192));
    let resp = test::call_service(&app, post(Some(ADMIN), body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!preset_path.exists());
}

#[actix_web::test]
async fn oversized_bodies_from_non_admins_are_forbidden() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let preset_path = state.store.path().to_path_buf();
    let app = service!(state);

    let body = "x".repeat(16 * 1024);
    for auth in [Some(VIEWER), None] {
        let resp = test::call_service(&app, post(auth, body.clone()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "auth {auth:?}");
        assert_eq!(test::read_body(resp).await, r#"{"error":"forbidden"}"#);
    }
    assert!(!preset_path.exists());
}

#[actix_web::test]
async fn anonymous_read_is_unauthorized_but_anonymous_write_is_forbidden() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(state_in(dir.path()));

    let read = test::call_service(&app, get(None).to_request()).await;
    let write = test::call_service(&app, post(None, r#"{"serverWeekGrid":{}}"#).to_request()).await;
    assert_eq!(read.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(write.status(), StatusCode::FORBIDDEN);
}
