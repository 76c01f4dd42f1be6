use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use dealerdesk_core::AppError;
use dealerdesk_domain::MissingAllowListPolicy;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionBackendConfig {
    pub base_url: Url,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub permission_backend: Option<PermissionBackendConfig>,
    pub missing_allow_list_policy: MissingAllowListPolicy,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match lookup("API_PORT") {
            Some(value) => value.parse::<u16>().map_err(|error| {
                AppError::Validation(format!("invalid API_PORT value '{value}': {error}"))
            })?,
            None => 3001,
        };
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());

        let timeout_ms = match lookup("PERMISSION_API_TIMEOUT_MS") {
            Some(value) => value.parse::<u64>().map_err(|error| {
                AppError::Validation(format!(
                    "invalid PERMISSION_API_TIMEOUT_MS value '{value}': {error}"
                ))
            })?,
            None => 5000,
        };
        if timeout_ms == 0 {
            return Err(AppError::Validation(
                "PERMISSION_API_TIMEOUT_MS must be greater than zero".to_owned(),
            ));
        }

        let permission_backend = lookup("PERMISSION_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                Url::parse(value.trim()).map_err(|error| {
                    AppError::Validation(format!("invalid PERMISSION_API_BASE_URL: {error}"))
                })
            })
            .transpose()?
            .map(|base_url| PermissionBackendConfig {
                base_url,
                api_token: lookup("PERMISSION_API_TOKEN").filter(|value| !value.trim().is_empty()),
                timeout: Duration::from_millis(timeout_ms),
            });

        let missing_allow_list_policy = lookup("MISSING_ALLOW_LIST_POLICY")
            .map(|value| MissingAllowListPolicy::from_str(value.trim()))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            permission_backend,
            missing_allow_list_policy,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use dealerdesk_domain::MissingAllowListPolicy;

    use super::ApiConfig;

    fn load(values: &[(&str, &str)]) -> Result<ApiConfig, dealerdesk_core::AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = load(&[]);
        assert!(matches!(
            config,
            Ok(ref value) if value.api_port == 3001
                && value.permission_backend.is_none()
                && value.missing_allow_list_policy == MissingAllowListPolicy::AllowAll
        ));
    }

    #[test]
    fn permission_backend_is_parsed() {
        let config = load(&[
            ("PERMISSION_API_BASE_URL", "https://backend.example.com/api"),
            ("PERMISSION_API_TOKEN", "secret"),
            ("PERMISSION_API_TIMEOUT_MS", "1500"),
            ("MISSING_ALLOW_LIST_POLICY", "deny_all"),
        ]);

        let Ok(config) = config else {
            panic!("expected valid config");
        };
        let backend = config.permission_backend;
        assert_eq!(
            backend.as_ref().map(|value| value.timeout),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(
            backend.and_then(|value| value.api_token),
            Some("secret".to_owned())
        );
        assert_eq!(
            config.missing_allow_list_policy,
            MissingAllowListPolicy::DenyAll
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load(&[("API_PORT", "http")]).is_err());
        assert!(load(&[("PERMISSION_API_TIMEOUT_MS", "0")]).is_err());
        assert!(load(&[("PERMISSION_API_BASE_URL", "not a url")]).is_err());
        assert!(load(&[("MISSING_ALLOW_LIST_POLICY", "maybe")]).is_err());
    }

    #[test]
    fn socket_address_requires_ip_host() {
        let config = load(&[("API_HOST", "localhost")]);
        assert!(config.is_ok_and(|value| value.socket_address().is_err()));
    }
}
