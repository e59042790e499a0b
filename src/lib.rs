//! Channel-based logging registry.
//!
//! A process owns one [`Registry`], built once at startup from a TOML
//! configuration file. The registry maps channel names to [`Channel`]s;
//! each channel fans records out to its configured handlers after running
//! its processors.
//!
//! # Data Flow
//! ```text
//! logger.toml
//!     → config (parse & validate)
//!     → Registry::initialize (build handlers/processors/channels,
//!       ensure baseline channels db/auth/cli)
//!     → Channel::log (stamp record in configured timezone,
//!       run processors, dispatch to handlers above threshold)
//! ```
//!
//! # Usage
//! ```no_run
//! use log_registry::{install_panic_hook, Registry};
//!
//! let registry = Registry::initialize(std::path::Path::new("logger.toml"))
//!     .expect("logging must be configured before anything else runs");
//!
//! // Wire uncaught panics to the app channel.
//! install_panic_hook(registry.get_channel("app").unwrap());
//!
//! // Ad-hoc channels inherit handlers/processors from `app`.
//! let ldap = registry.create_channel("ldap", None, None);
//! ldap.error("ldap bind failed");
//! ```

pub mod channel;
pub mod config;
pub mod error;
pub mod handler;
pub mod panic_hook;
pub mod processor;
pub mod record;
pub mod registry;

pub use channel::Channel;
pub use config::LoggingConfig;
pub use error::{ConfigError, RegistryError};
pub use handler::{Format, Handler};
pub use panic_hook::install_panic_hook;
pub use processor::Processor;
pub use record::{Level, Record};
pub use registry::{ChannelDefaults, Registry, APP_CHANNEL, BASELINE_CHANNELS};
