//! HEAD-request availability checks.
//!
//! Every URL produces a [`ProbeResult`]; request errors are captured as
//! [`ProbeOutcome::Failed`] so one unreachable host never stops the batch.

use std::{fmt, time::Duration};

use anyhow::{Context, Result};
use reqwest::{
    Client, Response,
    header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable {
        status: u16,
        content_type: Option<String>,
        content_length: Option<String>,
    },
    Failed {
        error: String,
    },
}

impl ProbeOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeOutcome::Failed { .. })
    }

    fn from_response(response: &Response) -> Self {
        let headers = response.headers();
        ProbeOutcome::Reachable {
            status: response.status().as_u16(),
            content_type: header_value(headers, CONTENT_TYPE),
            content_length: header_value(headers, CONTENT_LENGTH),
        }
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

/// Outcome of probing a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Reachable {
                status,
                content_type,
                content_length,
            } => write!(
                f,
                "{}: Status {}, Type {}, Size {}",
                self.url,
                status,
                content_type.as_deref().unwrap_or_default(),
                content_length.as_deref().unwrap_or_default()
            ),
            ProbeOutcome::Failed { error } => write!(f, "{}: Failed - {}", self.url, error),
        }
    }
}

pub struct Prober {
    client: Client,
}

impl Prober {
    /// Build a prober. Without a timeout, requests wait as long as the
    /// underlying connection does.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub async fn probe(&self, url: &str) -> ProbeResult {
        let outcome = match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::from_response(&response),
            Err(err) => ProbeOutcome::Failed {
                error: format!("{:#}", anyhow::Error::new(err)),
            },
        };
        ProbeResult {
            url: url.to_string(),
            outcome,
        }
    }
}
