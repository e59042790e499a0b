//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated, immutable)
//!     → registry construction (handlers/processors/channels built once)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require restarting the process
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::ChannelConfig;
pub use schema::HandlerConfig;
pub use schema::LoggingConfig;
pub use schema::ProcessorConfig;
