//! # nquill-client - The Kit
//!
//! Client for running nquill schema operations against a live graph.
//!
//! The graph service sits behind the NebulaGraph HTTP gateway; this crate
//! opens a session there, executes the statements built by `nquill-core`,
//! and maps result tables back into typed schema records.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nquill_client::{ConnectConfig, GatewayClient};
//! use nquill_core::{tag_schema, DataType, PropSpec, Identifier, TagSchema};
//!
//! tag_schema! {
//!     pub struct Player => "player" {
//!         name: PropSpec::new(DataType::FixedString(30)).not_null(),
//!         age: DataType::Int64,
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nquill_client::Error> {
//!     let client = GatewayClient::new("http://localhost:8080")?;
//!     let session = client
//!         .connect(&ConnectConfig::new("graphd", 9669, "root", "nebula"))
//!         .await?;
//!
//!     session.use_space(&Identifier::new("basketball")?).await?;
//!     session.create_tag(&Player::create_stmt()?).await?;
//!
//!     for field in session.describe_tag(&Identifier::new("player")?).await? {
//!         println!("{field}");
//!     }
//!
//!     session.disconnect().await
//! }
//! ```
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────┐          HTTP           ┌─────────────────────┐
//! │   Your code         │ ◄───────────────────►   │   HTTP gateway      │
//! │                     │                         │   + graph service   │
//! │  ┌───────────────┐  │  POST /api/db/connect   │                     │
//! │  │ nquill-client │  │  POST /api/db/exec      │   (external         │
//! │  │ nquill-core   │  │  POST /api/db/disconnect│    processes)       │
//! │  └───────────────┘  │                         │                     │
//! └─────────────────────┘                         └─────────────────────┘
//! ```

pub mod error;
pub mod fixture;
pub mod gateway;
pub mod result;
pub mod schema_ops;

pub use error::{Error, Result};
pub use fixture::ScratchSpace;
pub use gateway::{ConnectConfig, GatewayClient, GatewaySession};
pub use result::ResultSet;
pub use schema_ops::SyncOutcome;
