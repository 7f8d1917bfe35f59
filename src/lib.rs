//! invidious_relay library: upstream-fetch, extraction, and serving logic.
//!
//! A stateless HTTP relay in front of a single Invidious instance. Each
//! request performs one outbound GET, runs the body through a fixed
//! extraction step (CSS selectors for markup, field mapping for JSON), and
//! answers with a flat JSON record - or a generic 500 when anything along
//! that path fails.
//!
//! # Example
//!
//! ```no_run
//! use invidious_relay::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     instance: "https://yewtu.be".to_string(),
//!     port: 3000,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod error;
pub mod extract;
mod logging;
pub mod models;
mod server;
mod upstream;
mod urls;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error::{InitializationError, RelayError};
pub use logging::init_logger_with;
pub use models::{Comment, DownloadFormat, VideoDetail, VideoSummary};
pub use server::{router, run_server, AppState};
pub use upstream::UpstreamClient;
pub use urls::absolute_url;
