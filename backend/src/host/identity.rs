//! # Caller Identity
//!
//! Every request is resolved to a `Principal` by the `IdentityProvider`
//! registered as app data. Handlers take `Principal` as an extractor; when no
//! provider is registered the caller is anonymous.
//!
//! `TokenIdentityProvider` is the provider used by the standalone server. It
//! maps API tokens to users described in a JSON file:
//!
//! ```json
//! [
//!   { "name": "admin", "token": "s3cret", "roles": ["Administrator"] },
//!   { "name": "viewer", "token": "v13wer", "claims": [["IsAdministrator", "false"]] }
//! ]
//! ```
//!
//! Tokens are read from `Authorization: Bearer <token>`, from the host's
//! `Authorization: MediaBrowser Token="<token>", ...` scheme, or from the
//! `X-Emby-Token` / `X-MediaBrowser-Token` headers.

use crate::config::ConfigError;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::future::{ready, Ready};
use std::path::Path;

const ADMIN_ROLES: [&str; 2] = ["Administrator", "Admin"];
const ADMIN_ROLE_VALUES: [&str; 2] = ["administrator", "admin"];
const ROLE_CLAIM_TYPES: [&str; 3] = [
    "role",
    "roles",
    "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
];
const TOKEN_HEADERS: [&str; 2] = ["X-Emby-Token", "X-MediaBrowser-Token"];

/// Resolves the caller of a request.
pub trait IdentityProvider: Send + Sync {
    fn principal(&self, req: &HttpRequest) -> Principal;
}

/// The caller of a single request. Recomputed for every request, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Principal {
    pub authenticated: bool,
    pub name: Option<String>,
    pub roles: HashSet<String>,
    pub claims: Vec<(String, String)>,
}

impl Principal {
    pub fn anonymous() -> Self {
        Principal::default()
    }

    pub fn authenticated<I, S>(name: &str, roles: I, claims: Vec<(String, String)>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Principal {
            authenticated: true,
            name: Some(name.to_string()),
            roles: roles.into_iter().map(Into::into).collect(),
            claims,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the caller may modify the preset.
    ///
    /// Checked in order: an `Administrator`/`Admin` role, a role-type claim
    /// valued `administrator`/`admin`, then an `IsAdministrator`-like flag
    /// claim valued `true`/`1`. Anonymous callers are never administrators.
    pub fn is_administrator(&self) -> bool {
        if !self.authenticated {
            return false;
        }
        self.has_admin_role() || self.has_admin_role_claim() || self.has_admin_flag_claim()
    }

    fn has_admin_role(&self) -> bool {
        ADMIN_ROLES.iter().any(|role| self.roles.contains(*role))
    }

    fn has_admin_role_claim(&self) -> bool {
        self.claims.iter().any(|(name, value)| {
            ROLE_CLAIM_TYPES
                .iter()
                .any(|claim_type| name.eq_ignore_ascii_case(claim_type))
                && ADMIN_ROLE_VALUES
                    .iter()
                    .any(|admin| value.trim().eq_ignore_ascii_case(admin))
        })
    }

    fn has_admin_flag_claim(&self) -> bool {
        self.claims.iter().any(|(name, value)| {
            let normalized: String = name
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase())
                .collect();
            let value = value.trim();
            normalized.contains("isadmin") && (value == "1" || value.eq_ignore_ascii_case("true"))
        })
    }
}

impl FromRequest for Principal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let principal = match req.app_data::<web::Data<dyn IdentityProvider>>() {
            Some(provider) => provider.principal(req),
            None => Principal::anonymous(),
        };
        ready(Ok(principal))
    }
}

/// One entry of the users file.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub claims: Vec<(String, String)>,
}

/// Token → user lookup loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct TokenIdentityProvider {
    users: HashMap<String, UserRecord>,
}

impl TokenIdentityProvider {
    pub fn from_users(users: Vec<UserRecord>) -> Self {
        TokenIdentityProvider {
            users: users
                .into_iter()
                .filter(|user| !user.token.is_empty())
                .map(|user| (user.token.clone(), user))
                .collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::UsersFile {
            path: path.to_path_buf(),
            source,
        })?;
        let users: Vec<UserRecord> =
            serde_json::from_str(&text).map_err(|source| ConfigError::UsersJson {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_users(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityProvider for TokenIdentityProvider {
    fn principal(&self, req: &HttpRequest) -> Principal {
        request_token(req)
            .and_then(|token| self.users.get(&token))
            .map(|user| Principal::authenticated(&user.name, user.roles.clone(), user.claims.clone()))
            .unwrap_or_else(Principal::anonymous)
    }
}

fn request_token(req: &HttpRequest) -> Option<String> {
    let headers = req.headers();
    for name in TOKEN_HEADERS {
        if let Some(token) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    let authorization = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, rest) = authorization.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = rest.trim();
        return (!token.is_empty()).then(|| token.to_string());
    }
    media_browser_token(rest)
}

/// Extracts `Token="..."` from the parameter list of a `MediaBrowser`/`Emby`
/// authorization header.
fn media_browser_token(params: &str) -> Option<String> {
    params.split(',').find_map(|param| {
        let (key, value) = param.trim().split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("token") {
            return None;
        }
        let value = value.trim().trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}
