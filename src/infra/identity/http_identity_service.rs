use crate::domain::models::user::CurrentUser;
use crate::domain::ports::IdentityProvider;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::error;

/// Resolves bearer tokens against the hosted identity service. The service
/// owns sign-up, sessions and token lifetimes; we only ask "who is this
/// token".
pub struct HttpIdentityService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpIdentityService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityService {
    async fn resolve(&self, access_token: &str) -> Result<Option<CurrentUser>, AppError> {
        let res = self.client.get(format!("{}/user", self.api_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Identity service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        // Expired or garbage tokens come back as 401/403; that is an
        // anonymous caller, not a failure of ours.
        if res.status() == StatusCode::UNAUTHORIZED || res.status() == StatusCode::FORBIDDEN {
            return Ok(None);
        }

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Identity service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        let user = res.json::<CurrentUser>().await.map_err(|e| {
            let msg = format!("Identity service returned malformed user: {}", e);
            error!("{}", msg);
            AppError::InternalWithMsg(msg)
        })?;

        Ok(Some(user))
    }
}
