//! # CLI Commands
//!
//! Argument types and the `cmd_*` functions behind each subcommand. The
//! functions return their output instead of printing, so the test suite can
//! drive them directly; `main` does the printing.

use crate::manifest::Manifest;
use clap::{Args, Parser, Subcommand};
use nquill_client::{ConnectConfig, GatewayClient, GatewaySession, SyncOutcome};
use nquill_core::{Identifier, Statement, UseSpace};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// How long to keep retrying `USE` after creating a space.
const USE_ATTEMPTS: u32 = 30;

const USE_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Errors surfaced by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Client(#[from] nquill_client::Error),

    #[error(transparent)]
    Schema(#[from] nquill_core::Error),

    #[error("{0}")]
    Usage(String),
}

/// Schema manifest tool for NebulaGraph.
#[derive(Debug, Parser)]
#[command(name = "nquill", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the DDL a manifest implies, without touching any service.
    Render {
        /// Path to the JSON schema manifest.
        manifest: PathBuf,
    },

    /// Converge a live graph onto a manifest.
    Apply {
        /// Path to the JSON schema manifest.
        manifest: PathBuf,

        #[command(flatten)]
        conn: ConnArgs,

        /// Target space; defaults to the manifest's space declaration.
        #[arg(long)]
        space: Option<String>,
    },

    /// Introspect one tag in a space.
    Describe {
        /// Tag name.
        tag: String,

        #[command(flatten)]
        conn: ConnArgs,

        /// Space to look in.
        #[arg(long)]
        space: String,

        /// Emit JSON instead of DDL fragments.
        #[arg(long)]
        json: bool,
    },
}

/// Connection flags, shared by the networked subcommands.
#[derive(Debug, Args)]
pub struct ConnArgs {
    /// Base URL of the HTTP gateway.
    #[arg(long, env = "NQUILL_GATEWAY")]
    pub gateway: String,

    /// Graph service address, as seen from the gateway.
    #[arg(long, env = "NQUILL_GRAPH_ADDR", default_value = "127.0.0.1")]
    pub graph_addr: String,

    /// Graph service port.
    #[arg(long, env = "NQUILL_GRAPH_PORT", default_value_t = 9669)]
    pub graph_port: u16,

    /// Graph user.
    #[arg(long, env = "NQUILL_USER", default_value = "root")]
    pub user: String,

    /// Graph password.
    #[arg(long, env = "NQUILL_PASSWORD", default_value = "nebula")]
    pub password: String,
}

impl ConnArgs {
    fn connect_config(&self) -> ConnectConfig {
        ConnectConfig::new(
            self.graph_addr.clone(),
            self.graph_port,
            self.user.clone(),
            self.password.clone(),
        )
    }

    async fn open_session(&self) -> Result<GatewaySession, CliError> {
        let client = GatewayClient::new(self.gateway.clone())?;
        Ok(client.connect(&self.connect_config()).await?)
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Render every statement a manifest implies, one per line.
pub fn cmd_render(manifest_path: &Path) -> Result<String, CliError> {
    let manifest = Manifest::load(manifest_path)?;

    let mut out = String::new();
    if let Some(space) = &manifest.space {
        out.push_str(&space.create_stmt().render());
        out.push('\n');
        out.push_str(&UseSpace::new(space.name.clone()).render());
        out.push('\n');
    }
    for tag in &manifest.tags {
        out.push_str(&tag.create_stmt().render());
        out.push('\n');
    }
    Ok(out)
}

/// Apply a manifest to a live graph. Returns one summary line per step.
pub async fn cmd_apply(
    manifest_path: &Path,
    conn: &ConnArgs,
    space_override: Option<String>,
) -> Result<Vec<String>, CliError> {
    let manifest = Manifest::load(manifest_path)?;
    tracing::info!(manifest = %manifest_path.display(), tags = manifest.tags.len(), "applying");
    let mut lines = Vec::new();

    let target = match (&space_override, &manifest.space) {
        (Some(name), _) => Identifier::new(name.clone())?,
        (None, Some(space)) => space.name.clone(),
        (None, None) => {
            return Err(CliError::Usage(
                "no target space: pass --space or declare one in the manifest".to_string(),
            ));
        }
    };

    let session = conn.open_session().await?;

    // Create the declared space unless the caller redirected elsewhere
    if let Some(space) = &manifest.space {
        if space_override.is_none() {
            session.create_space(&space.create_stmt()).await?;
            lines.push(format!("space {}: ensured", space.name.as_str()));
        }
    }
    use_space_with_retry(&session, &target).await?;

    for tag in &manifest.tags {
        let outcome = session
            .sync_tag(&tag.name, &tag.fields, tag.ttl.clone())
            .await?;
        lines.push(format!(
            "tag {}: {}",
            tag.name.as_str(),
            outcome_label(outcome)
        ));
    }

    session.disconnect().await?;
    Ok(lines)
}

/// Introspect a tag; DDL fragments per line, or a JSON array with `json`.
pub async fn cmd_describe(
    conn: &ConnArgs,
    space: &str,
    tag: &str,
    json: bool,
) -> Result<String, CliError> {
    let session = conn.open_session().await?;
    session.use_space(&Identifier::new(space)?).await?;
    let fields = session.describe_tag(&Identifier::new(tag)?).await?;
    session.disconnect().await?;

    if json {
        Ok(serde_json::to_string_pretty(&fields)?)
    } else {
        let mut out = String::new();
        for field in &fields {
            out.push_str(&field.to_string());
            out.push('\n');
        }
        Ok(out)
    }
}

fn outcome_label(outcome: SyncOutcome) -> &'static str {
    match outcome {
        SyncOutcome::Created => "created",
        SyncOutcome::Altered => "altered",
        SyncOutcome::Unchanged => "unchanged",
    }
}

/// A freshly created space needs a heartbeat cycle before USE succeeds.
async fn use_space_with_retry(
    session: &GatewaySession,
    space: &Identifier,
) -> Result<(), CliError> {
    let mut last_err = None;
    for _ in 0..USE_ATTEMPTS {
        match session.use_space(space).await {
            Ok(()) => return Ok(()),
            Err(err) => {
                last_err = Some(err);
                tokio::time::sleep(USE_RETRY_DELAY).await;
            }
        }
    }
    Err(last_err.map_or_else(
        || CliError::Usage(format!("space `{}` never became usable", space.as_str())),
        CliError::Client,
    ))
}
