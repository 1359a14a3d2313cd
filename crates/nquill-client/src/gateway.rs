//! # Gateway Client
//!
//! HTTP client for the NebulaGraph HTTP gateway.
//!
//! The gateway exposes three endpoints: `/api/db/connect` opens a graph
//! session (tracked by a cookie), `/api/db/exec` runs one nGQL statement in
//! that session, `/api/db/disconnect` closes it. Every response carries a
//! `code`/`message`/`data` envelope; a non-zero code is surfaced as
//! [`Error::Graph`].

use crate::error::{Error, Result};
use crate::result::{ExecData, ResultSet};
use nquill_core::Statement;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and target address for the graph service behind the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectConfig {
    pub address: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl ConnectConfig {
    pub fn new(
        address: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Response envelope shared by all gateway endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i64,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// Non-zero codes become [`Error::Graph`].
    fn into_data(self) -> Result<Option<T>> {
        if self.code != 0 {
            return Err(Error::Graph {
                code: self.code,
                message: self.message,
            });
        }
        Ok(self.data)
    }
}

/// Entry point: connects to a gateway and opens sessions.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Create a client for the given gateway base URL.
    ///
    /// The underlying HTTP client keeps a cookie store; the gateway uses a
    /// session cookie, so one `GatewayClient` backs one live session at a
    /// time. Clone the client before connecting again if two sessions must
    /// coexist.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Open a graph session.
    pub async fn connect(&self, config: &ConnectConfig) -> Result<GatewaySession> {
        let url = format!("{}/api/db/connect", self.base_url);
        let envelope: Envelope<String> = self
            .http
            .post(&url)
            .json(config)
            .send()
            .await?
            .json()
            .await?;
        let nsid = envelope.into_data()?.unwrap_or_default();
        tracing::debug!(gateway = %self.base_url, %nsid, "session opened");

        Ok(GatewaySession {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            nsid,
        })
    }
}

/// An open graph session. Executes statements until dropped or disconnected.
#[derive(Debug, Clone)]
pub struct GatewaySession {
    base_url: String,
    http: reqwest::Client,
    nsid: String,
}

#[derive(Debug, Serialize)]
struct ExecRequest<'a> {
    gql: &'a str,
}

impl GatewaySession {
    /// The gateway's session id, as reported at connect time.
    #[must_use]
    pub fn nsid(&self) -> &str {
        &self.nsid
    }

    /// Execute one nGQL statement and parse the result tables.
    pub async fn execute(&self, gql: &str) -> Result<ResultSet> {
        tracing::debug!(statement = %gql, "executing");
        let url = format!("{}/api/db/exec", self.base_url);
        let envelope: Envelope<ExecData> = self
            .http
            .post(&url)
            .json(&ExecRequest { gql })
            .send()
            .await?
            .json()
            .await?;

        let data = envelope.into_data().inspect_err(|err| {
            tracing::warn!(statement = %gql, %err, "statement rejected");
        })?;
        let data = data.ok_or(Error::EmptyResult)?;
        Ok(ResultSet::from_wire(data))
    }

    /// Execute a typed statement.
    pub async fn execute_stmt(&self, stmt: &impl Statement) -> Result<ResultSet> {
        self.execute(&stmt.render()).await
    }

    /// Close the session on the gateway.
    pub async fn disconnect(self) -> Result<()> {
        let url = format!("{}/api/db/disconnect", self.base_url);
        let envelope: Envelope<serde_json::Value> =
            self.http.post(&url).send().await?.json().await?;
        envelope.into_data()?;
        tracing::debug!(nsid = %self.nsid, "session closed");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn connect_config_serializes_for_the_gateway() {
        let config = ConnectConfig::new("graphd", 9669, "root", "nebula");
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["address"], "graphd");
        assert_eq!(json["port"], 9669);
        assert_eq!(json["username"], "root");
        assert_eq!(json["password"], "nebula");
    }

    #[test]
    fn envelope_zero_code_yields_data() {
        let envelope: Envelope<String> =
            serde_json::from_str(r#"{"code": 0, "message": "", "data": "nsid-1"}"#)
                .expect("deserialize");
        assert_eq!(
            envelope.into_data().expect("ok"),
            Some("nsid-1".to_string())
        );
    }

    #[test]
    fn envelope_nonzero_code_is_a_graph_error() {
        let envelope: Envelope<String> =
            serde_json::from_str(r#"{"code": -1, "message": "semantic error", "data": null}"#)
                .expect("deserialize");
        match envelope.into_data() {
            Err(Error::Graph { code, message }) => {
                assert_eq!(code, -1);
                assert_eq!(message, "semantic error");
            }
            other => panic!("expected graph error, got {other:?}"),
        }
    }
}
