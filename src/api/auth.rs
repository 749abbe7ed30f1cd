//! Auth Endpoint

use gloo_net::http::Request;

use super::{ApiError, ApiResult, HttpApi};
use crate::models::{Credentials, LoginResponse};

impl HttpApi {
    pub(super) async fn post_login(&self, credentials: &Credentials) -> ApiResult<String> {
        log::debug!("POST /api/login");
        let response = Request::post(&self.url("/api/login"))
            .json(credentials)?
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        decode_login(response.ok(), status, &body)
    }
}

/// Turn a login response into a token or the reason there is none
pub(crate) fn decode_login(ok: bool, status: u16, body: &str) -> ApiResult<String> {
    // Any body that is not JSON is a decode failure, whatever the status
    let response = serde_json::from_str::<LoginResponse>(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if !ok {
        return Err(ApiError::Rejected {
            status,
            message: response.message,
        });
    }

    match response.token.filter(|token| !token.is_empty()) {
        Some(token) => Ok(token),
        None => Err(ApiError::MissingToken {
            message: response.message,
        }),
    }
}
