use std::env;

use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::provider::{LocalProvider, RemoteProvider};
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::util::rate_limit::Limiter;

#[derive(Debug)]
pub enum RoutingConfig {
    Remote {
        api_key: String,
        base_url: Option<String>,
    },
    Local {
        base_url: String,
    },
}

impl RoutingConfig {
    /// Reads provider selection from the environment. `MTROUTE_API_KEY`
    /// selects the hosted API (`MTROUTE_BASE_URL` optionally overrides its
    /// endpoint); without a key, `MTROUTE_BASE_URL` must point at a
    /// self-hosted instance.
    pub fn from_env() -> Result<Self, RoutingError> {
        if let Ok(api_key) = env::var("MTROUTE_API_KEY") {
            return Ok(Self::Remote {
                api_key,
                base_url: env::var("MTROUTE_BASE_URL").ok(),
            });
        }
        if let Ok(base_url) = env::var("MTROUTE_BASE_URL") {
            return Ok(Self::Local { base_url });
        }
        Err(RoutingError::Generic(
            "set MTROUTE_API_KEY or MTROUTE_BASE_URL to configure a routing provider".to_string(),
        ))
    }

    pub fn build_provider(self, limiter: Limiter) -> Box<dyn RoutingProvider> {
        match self {
            Self::Remote { api_key, base_url } => {
                let mut provider = RemoteProvider::new(api_key, limiter);
                if let Some(base_url) = base_url {
                    provider = provider.with_base_url(base_url);
                }
                Box::new(provider)
            }
            Self::Local { base_url } => Box::new(LocalProvider::new(base_url)),
        }
    }
}
