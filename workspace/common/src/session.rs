//! Identity provider boundary: whether a user is signed in, sign-in and
//! sign-out. Only the boolean outcome gates pages; the provider keeps its own
//! session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::error::Result;

/// Body of `GET /check-auth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user_email: String,
}

impl AuthStatus {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn email(&self) -> Option<&str> {
        (self.logged_in && !self.user_email.is_empty()).then_some(self.user_email.as_str())
    }
}

/// Body of `POST /login` and `POST /logout` responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email and password are required")]
    Missing,
}

/// Login form payload, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> std::result::Result<Self, CredentialsError> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CredentialsError::Missing);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn status(&self) -> Result<AuthStatus>;
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthReply>;
    async fn sign_out(&self) -> Result<AuthReply>;
}

/// Current session; any failure counts as signed out.
pub async fn current_status<P>(provider: &P) -> AuthStatus
where
    P: IdentityProvider + ?Sized,
{
    match provider.status().await {
        Ok(status) => status,
        Err(err) => {
            error!(%err, "Error checking auth");
            AuthStatus::signed_out()
        }
    }
}

/// Signs in and returns the signed-in email, or the message to show.
pub async fn sign_in<P>(provider: &P, credentials: &Credentials) -> std::result::Result<String, String>
where
    P: IdentityProvider + ?Sized,
{
    match provider.sign_in(credentials).await {
        Ok(reply) if reply.success => {
            info!(email = %credentials.email, "Login successful");
            Ok(credentials.email.clone())
        }
        Ok(reply) => Err(reply
            .error
            .or(reply.message)
            .unwrap_or_else(|| "Login failed".to_string())),
        Err(err) => {
            error!(%err, "Login error");
            Err(err
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| "Network error".to_string()))
        }
    }
}

/// Signs out. The caller leaves the page either way, so failures are only
/// logged.
pub async fn sign_out<P>(provider: &P) -> bool
where
    P: IdentityProvider + ?Sized,
{
    match provider.sign_out().await {
        Ok(reply) => reply.success,
        Err(err) => {
            error!(%err, "Logout error");
            false
        }
    }
}

/// The navbar is hidden on the landing page even for signed-in users.
pub fn navbar_visible(logged_in: bool, path: &str) -> bool {
    logged_in && path != "/" && !path.contains("index.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    struct FakeProvider {
        status: Result<AuthStatus>,
        login: Result<AuthReply>,
    }

    #[async_trait(?Send)]
    impl IdentityProvider for FakeProvider {
        async fn status(&self) -> Result<AuthStatus> {
            self.status.clone()
        }

        async fn sign_in(&self, _credentials: &Credentials) -> Result<AuthReply> {
            self.login.clone()
        }

        async fn sign_out(&self) -> Result<AuthReply> {
            Err(ClientError::Network("offline".to_string()))
        }
    }

    fn provider(status: Result<AuthStatus>, login: Result<AuthReply>) -> FakeProvider {
        FakeProvider { status, login }
    }

    fn credentials() -> Credentials {
        Credentials::new("  asha@example.com ", "secret").unwrap()
    }

    #[test]
    fn test_credentials_are_trimmed_and_required() {
        assert_eq!(credentials().email, "asha@example.com");
        assert_eq!(Credentials::new("asha@example.com", "   "), Err(CredentialsError::Missing));
        assert_eq!(
            Credentials::new("", "secret").unwrap_err().to_string(),
            "Email and password are required"
        );
    }

    #[tokio::test]
    async fn test_status_failure_counts_as_signed_out() {
        let offline = provider(Err(ClientError::Network("offline".to_string())), Ok(AuthReply::default()));
        assert!(!current_status(&offline).await.logged_in);

        let signed_in = provider(
            Ok(AuthStatus { logged_in: true, user_email: "asha@example.com".to_string() }),
            Ok(AuthReply::default()),
        );
        let status = current_status(&signed_in).await;
        assert_eq!(status.email(), Some("asha@example.com"));
    }

    #[tokio::test]
    async fn test_sign_in_outcomes() {
        let accepted = provider(
            Ok(AuthStatus::default()),
            Ok(AuthReply { success: true, message: Some("Login successful".to_string()), error: None }),
        );
        assert_eq!(sign_in(&accepted, &credentials()).await, Ok("asha@example.com".to_string()));

        let rejected = provider(
            Ok(AuthStatus::default()),
            Err(ClientError::Status {
                status: 400,
                message: Some("Email and password are required".to_string()),
            }),
        );
        assert_eq!(
            sign_in(&rejected, &credentials()).await,
            Err("Email and password are required".to_string())
        );

        let offline = provider(Ok(AuthStatus::default()), Err(ClientError::Network("refused".to_string())));
        assert_eq!(sign_in(&offline, &credentials()).await, Err("Network error".to_string()));
    }

    #[tokio::test]
    async fn test_sign_out_failure_is_not_fatal() {
        let offline = provider(Ok(AuthStatus::default()), Ok(AuthReply::default()));
        assert!(!sign_out(&offline).await);
    }

    #[test]
    fn test_navbar_visibility() {
        assert!(navbar_visible(true, "/prediction"));
        assert!(!navbar_visible(true, "/"));
        assert!(!navbar_visible(true, "/index.html"));
        assert!(!navbar_visible(false, "/contact"));
    }
}
