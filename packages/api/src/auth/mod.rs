//! Login and registration against `/user`.
//!
//! The service issues no token: a login succeeds when the envelope's `data` is
//! JSON-truthy, and the console then flips its own session flag.

use crate::envelope::{decode_envelope, decode_unit, is_truthy};
use crate::error::ApiError;
use crate::models::{LoginRequest, UserDraft};
use crate::transport::{ApiRequest, Method, Transport};

pub const LOGIN_PATH: &str = "/user/login";
pub const REGISTER_PATH: &str = "/user";

#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    transport: T,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// `Ok(true)` when the service accepted the credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::new(Method::Post, LOGIN_PATH).with_json(&body)?;
        tracing::debug!("POST {LOGIN_PATH}");
        let response = self.transport.send(request).await?;
        let envelope = decode_envelope::<serde_json::Value>(response.status, &response.body)?;
        let accepted = envelope.data.as_ref().is_some_and(is_truthy);
        if !accepted {
            tracing::info!("login rejected for {email}");
        }
        Ok(accepted)
    }

    pub async fn register(&self, draft: &UserDraft) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Post, REGISTER_PATH).with_json(draft)?;
        tracing::debug!("POST {REGISTER_PATH}");
        let response = self.transport.send(request).await?;
        decode_unit(response.status, &response.body)
    }
}
