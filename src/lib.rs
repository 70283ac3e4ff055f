pub mod agents;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ingest;
pub mod llm;
pub mod outlet;
pub mod pipeline;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::launch;
pub use session::ComparisonSession;
