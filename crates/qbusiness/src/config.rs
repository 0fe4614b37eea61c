//! Configuration for the Amazon Q Business client.

use std::env;

use serde::{Deserialize, Serialize};

/// Region used when neither `QBUSINESS_REGION` nor `AWS_REGION` is set.
const DEFAULT_REGION: &str = "us-west-2";

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Configuration for the Amazon Q Business client.
///
/// Everything comes from environment variables. In a deployed function the
/// region and credentials are injected by the platform; static credentials
/// and the endpoint override exist for local development against a stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QBusinessConfig {
    /// AWS region for Q Business calls.
    pub region: String,
    /// Static access key id, when configured explicitly.
    pub access_key_id: Option<String>,
    /// Static secret access key, when configured explicitly.
    pub secret_access_key: Option<String>,
    /// Session token accompanying static credentials.
    pub session_token: Option<String>,
    /// Endpoint override (local stubs); unset in production.
    pub endpoint_url: Option<String>,
}

impl QBusinessConfig {
    /// Build config from environment variables.
    ///
    /// `QBUSINESS_REGION` takes precedence over `AWS_REGION`; when neither
    /// is set the default region is used.
    pub fn from_env() -> Self {
        let region = env_opt("QBUSINESS_REGION")
            .or_else(|| env_opt("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            region,
            access_key_id: env_opt("AWS_ACCESS_KEY_ID"),
            secret_access_key: env_opt("AWS_SECRET_ACCESS_KEY"),
            session_token: env_opt("AWS_SESSION_TOKEN"),
            endpoint_url: env_opt("QBUSINESS_ENDPOINT_URL"),
        }
    }

    /// The static credential pair, when both halves were provided.
    ///
    /// A key without a secret (or the reverse) is ignored and the SDK's
    /// default provider chain takes over.
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (self.access_key_id.as_deref(), self.secret_access_key.as_deref()) {
            (Some(key_id), Some(secret)) => Some((key_id, secret)),
            _ => None,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────
