//! Auth endpoints: credential check, login and logout.
//!
//! ERROR HANDLING
//! ==============
//! The startup credential check returns `ResolutionFailure`, which the auth
//! provider swallows into "no identity". Login and logout are explicit user
//! actions and return `RequestError` so the page can show what went wrong.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::transport::{AdminTransport, ApiRequest};
use super::types::{AdminIdentity, LoginRequest, LoginResponse};
use crate::error::{RequestError, ResolutionFailure};
use crate::util::credential::CredentialStore;

const ME_PATH: &str = "auth/me";
const LOGIN_PATH: &str = "auth/login";
const LOGOUT_PATH: &str = "auth/logout";

/// Validate the stored credential and fetch the identity it belongs to.
///
/// Without a stored credential no request is made and the result is
/// `Ok(None)`. A credential the backend refuses is removed from storage.
///
/// # Errors
///
/// Returns `ResolutionFailure` when the check could not confirm an identity.
pub async fn resolve_identity<T, C>(transport: &T, credentials: &C) -> Result<Option<AdminIdentity>, ResolutionFailure>
where
    T: AdminTransport + ?Sized,
    C: CredentialStore + ?Sized,
{
    if credentials.load().is_none() {
        log::debug!("no stored admin credential");
        return Ok(None);
    }

    let response = transport
        .send(ApiRequest::get(ME_PATH))
        .await
        .map_err(|e| ResolutionFailure::Transport(e.to_string()))?;
    if !response.is_success() {
        let failure = ResolutionFailure::Rejected(response.status);
        if failure.invalidates_credential() {
            credentials.clear();
        }
        return Err(failure);
    }
    serde_json::from_str::<AdminIdentity>(&response.body)
        .map(Some)
        .map_err(|e| ResolutionFailure::Malformed(e.to_string()))
}

/// Exchange username and password for a bearer credential.
///
/// Stores the credential on success.
///
/// # Errors
///
/// Returns `RequestError` if the request fails, the backend refuses the
/// login, or the response cannot be decoded.
pub async fn login<T, C>(transport: &T, credentials: &C, username: &str, password: &str) -> Result<AdminIdentity, RequestError>
where
    T: AdminTransport + ?Sized,
    C: CredentialStore + ?Sized,
{
    let body = serde_json::to_value(LoginRequest { username, password })
        .map_err(|e| RequestError::Malformed(e.to_string()))?;
    let response = transport.send(ApiRequest::post(LOGIN_PATH, Some(body))).await?;
    if !response.is_success() {
        return Err(RequestError::Status {
            status: response.status,
            message: login_failed_message(response.status),
        });
    }
    let login: LoginResponse =
        serde_json::from_str(&response.body).map_err(|e| RequestError::Malformed(e.to_string()))?;
    credentials.save(&login.token);
    log::info!("admin {} signed in", login.admin.username);
    Ok(login.admin)
}

/// End the backend session and forget the stored credential.
///
/// The local credential is cleared even when the backend call fails.
///
/// # Errors
///
/// Returns `RequestError` if the backend could not be told.
pub async fn logout<T, C>(transport: &T, credentials: &C) -> Result<(), RequestError>
where
    T: AdminTransport + ?Sized,
    C: CredentialStore + ?Sized,
{
    let outcome = transport.send(ApiRequest::post(LOGOUT_PATH, None)).await;
    credentials.clear();
    let response = outcome?;
    if !response.is_success() {
        return Err(RequestError::Status {
            status: response.status,
            message: format!("logout failed: {}", response.status),
        });
    }
    Ok(())
}

fn login_failed_message(status: u16) -> String {
    match status {
        401 | 403 => "Invalid username or password.".to_owned(),
        429 => "Too many attempts. Try again later.".to_owned(),
        other => format!("login failed: {other}"),
    }
}
