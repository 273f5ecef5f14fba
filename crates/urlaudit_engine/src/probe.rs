use std::time::Duration;

use audit_logging::audit_debug;
use reqwest::header::LOCATION;
use urlaudit_core::Probe;

use crate::{FailureKind, ProbeError};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: Option<String>,
    /// Extra attempts after a transport error. HTTP responses are never retried.
    pub retries: u32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            user_agent: None,
            retries: 0,
        }
    }
}

/// Issues a single GET and reports what came back, without following redirects.
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> Result<Probe, ProbeError>;
}

/// [`Prober`] backed by one shared `reqwest::Client`.
///
/// The client is built once with redirects disabled and is safe to share
/// between all dispatch workers.
#[derive(Debug, Clone)]
pub struct ReqwestProber {
    client: reqwest::Client,
    retries: u32,
}

impl ReqwestProber {
    pub fn new(settings: ProbeSettings) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(agent) = settings.user_agent.as_deref() {
            builder = builder.user_agent(agent);
        }
        let client = builder
            .build()
            .map_err(|err| ProbeError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            retries: settings.retries,
        })
    }

    async fn probe_once(&self, url: reqwest::Url) -> Result<Probe, ProbeError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        Ok(Probe::new(response.status().as_u16(), location))
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, url: &str) -> Result<Probe, ProbeError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| ProbeError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let mut attempt = 0;
        loop {
            match self.probe_once(parsed.clone()).await {
                Err(err) if attempt < self.retries && err.kind != FailureKind::InvalidUrl => {
                    attempt += 1;
                    audit_debug!("Retrying {} (attempt {}) after {}", url, attempt + 1, err);
                }
                result => return result,
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ProbeError::new(FailureKind::InvalidUrl, err.to_string());
    }
    if err.is_connect() {
        return ProbeError::new(FailureKind::Connect, err.to_string());
    }
    ProbeError::new(FailureKind::Network, err.to_string())
}
