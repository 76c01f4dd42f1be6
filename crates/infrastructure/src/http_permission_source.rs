use async_trait::async_trait;
use dealerdesk_application::PermissionSource;
use dealerdesk_core::{AppError, AppResult, DealerId};
use dealerdesk_domain::DealerPermissionSnapshot;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Permission source backed by the dealer permission REST endpoint.
pub struct HttpPermissionSource {
    http_client: reqwest::Client,
    base_url: Url,
    api_token: Option<String>,
}

impl HttpPermissionSource {
    /// Creates a new HTTP permission source rooted at `base_url`.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: Url, api_token: Option<String>) -> Self {
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(path.as_str());
        }

        Self {
            http_client,
            base_url,
            api_token: api_token.filter(|value| !value.trim().is_empty()),
        }
    }

    fn permissions_url(&self, dealer_id: DealerId) -> AppResult<Url> {
        self.base_url
            .join(format!("dealers/{dealer_id}/permissions").as_str())
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to build permission URL for dealer '{dealer_id}': {error}"
                ))
            })
    }
}

#[async_trait]
impl PermissionSource for HttpPermissionSource {
    async fn fetch_dealer_permissions(
        &self,
        dealer_id: DealerId,
    ) -> AppResult<DealerPermissionSnapshot> {
        let url = self.permissions_url(dealer_id)?;
        debug!(%dealer_id, %url, "fetching dealer permissions");

        let mut request = self.http_client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|error| {
            AppError::Internal(format!(
                "permission request for dealer '{dealer_id}' failed: {error}"
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, dealer_id));
        }

        response
            .json::<DealerPermissionSnapshot>()
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "invalid permission payload for dealer '{dealer_id}': {error}"
                ))
            })
    }
}

fn status_error(status: StatusCode, dealer_id: DealerId) -> AppError {
    let message = format!("permission backend returned {status} for dealer '{dealer_id}'");
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        _ => AppError::Internal(message),
    }
}

#[cfg(test)]
mod tests {
    use dealerdesk_core::{AppError, DealerId};
    use reqwest::StatusCode;
    use url::Url;

    use super::{HttpPermissionSource, status_error};

    fn source(base_url: &str) -> Option<HttpPermissionSource> {
        Url::parse(base_url)
            .ok()
            .map(|url| HttpPermissionSource::new(reqwest::Client::new(), url, None))
    }

    #[test]
    fn permissions_url_keeps_base_path() {
        let dealer_id = DealerId::new();
        let url = source("https://backend.example.com/api/v1")
            .and_then(|source| source.permissions_url(dealer_id).ok());

        assert_eq!(
            url.map(String::from),
            Some(format!(
                "https://backend.example.com/api/v1/dealers/{dealer_id}/permissions"
            ))
        );
    }

    #[test]
    fn permissions_url_accepts_trailing_slash() {
        let dealer_id = DealerId::new();
        let url = source("https://backend.example.com/")
            .and_then(|source| source.permissions_url(dealer_id).ok());

        assert_eq!(
            url.map(String::from),
            Some(format!(
                "https://backend.example.com/dealers/{dealer_id}/permissions"
            ))
        );
    }

    #[test]
    fn blank_token_is_ignored() {
        let source = Url::parse("https://backend.example.com").ok().map(|url| {
            HttpPermissionSource::new(reqwest::Client::new(), url, Some("  ".to_owned()))
        });
        assert!(source.is_some_and(|source| source.api_token.is_none()));
    }

    #[test]
    fn status_codes_map_to_error_categories() {
        let dealer_id = DealerId::new();
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, dealer_id),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, dealer_id),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, dealer_id),
            AppError::Internal(_)
        ));
    }
}
