//! Authentication operations.

use crate::error::{ClientError, Result};
use crate::http::{parse_json, response_error, transport_error};
use crate::session::{PersistedSession, SessionStore};
use crate::types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ResendVerificationRequest,
};
use resonate_core::UserType;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client: login, registration, verification, logout.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    session: &'a SessionStore,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, session: &'a SessionStore) -> Self {
        Self {
            http,
            base_url,
            session,
        }
    }

    /// Login with email and password.
    ///
    /// On success the session `{token, userId, userType}` is persisted.
    /// Rejected credentials surface as [`ClientError::InvalidCredentials`],
    /// an unverified account as [`ClientError::EmailNotVerified`]; in both
    /// cases existing session state is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let login: LoginResponse = parse_json(response, "login response").await?;

            if !login.email_verified {
                warn!(email = %email, "Login refused: email not verified");
                return Err(ClientError::EmailNotVerified);
            }

            self.session.establish(PersistedSession {
                token: login.token.clone(),
                user_id: login.user_id.clone(),
                user_type: login.user_type,
            })?;

            info!(user_id = %login.user_id, "Login successful");
            Ok(login)
        } else if status.as_u16() == 401 {
            warn!(email = %email, "Login failed: invalid credentials");
            Err(ClientError::InvalidCredentials)
        } else {
            Err(response_error(response).await)
        }
    }

    /// Register a new account.
    ///
    /// Creates a pending account; no session is established. The account
    /// becomes usable once the emailed verification link is followed.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
        bio: Option<&str>,
    ) -> Result<RegisterResponse> {
        let url = format!("{}/auth/register", self.base_url);
        debug!(url = %url, email = %email, user_type = %user_type, "Registering account");

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            user_type,
            bio: bio.map(str::to_string),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            let registered: RegisterResponse = parse_json(response, "register response").await?;

            self.session.mark_pending(email, user_type);

            info!(
                user_id = %registered.user_id,
                user_type = %user_type,
                "Account registered, verification email sent"
            );
            Ok(registered)
        } else {
            Err(response_error(response).await)
        }
    }

    /// Resend the verification email for a pending account.
    ///
    /// Idempotent from the client's perspective; no local state change.
    pub async fn resend_verification_email(&self, email: &str) -> Result<()> {
        let url = format!("{}/auth/resend-verification", self.base_url);
        debug!(url = %url, email = %email, "Resending verification email");

        let response = self
            .http
            .post(&url)
            .json(&ResendVerificationRequest {
                email: email.to_string(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(response_error(response).await)
        }
    }

    /// Clear the session. Synchronous, no network call, works from any
    /// state.
    pub fn logout(&self) {
        self.session.logout();
    }
}
