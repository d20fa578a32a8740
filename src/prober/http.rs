use crate::prober::{Probe, Reachability};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("check_webservers/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[from] reqwest::Error),
}

pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        // One client for the whole run; `timeout` bounds the entire request.
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, target: &str) -> Reachability {
        match self.client.get(target).send().await {
            Ok(response) if response.status() == StatusCode::OK => Reachability::Reachable,
            Ok(response) => {
                tracing::debug!(url = target, status = %response.status(), "unexpected status");
                Reachability::Unreachable
            }
            Err(e) => {
                if e.is_timeout() {
                    tracing::debug!(url = target, "request timed out");
                } else {
                    tracing::debug!(url = target, error = %e, "request failed");
                }
                Reachability::Unreachable
            }
        }
    }
}
