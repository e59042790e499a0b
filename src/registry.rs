//! The channel registry.
//!
//! # Responsibilities
//! - Build channels, handlers and processors from a validated config
//! - Guarantee the baseline channels exist after initialization
//! - Create-or-get ad-hoc channels with defaults inherited from `app`
//!
//! # Design Decisions
//! - The registry is an explicitly constructed value the application owns
//!   and threads to its components; there is no global static
//! - Defaults are captured once from `app` at initialization, not looked up
//!   by name on every create
//! - Lazy creation goes through DashMap's entry API so at most one channel
//!   per name exists even under concurrent first use

use std::path::Path;
use std::sync::Arc;

use chrono_tz::Tz;
use dashmap::DashMap;

use crate::channel::Channel;
use crate::config::loader::load_config;
use crate::config::schema::LoggingConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::error::{ConfigError, RegistryError};
use crate::handler::{build_handler, Handler};
use crate::processor::{build_processor, Processor};

/// The channel every other channel inherits defaults from.
pub const APP_CHANNEL: &str = "app";

/// Channels guaranteed to exist after initialization.
pub const BASELINE_CHANNELS: [&str; 3] = ["db", "auth", "cli"];

/// Handler/processor defaults for channels created without explicit wiring.
///
/// Captured once from the `app` channel when the registry is built; lists
/// are shared by reference (`Arc` clones), never rebuilt.
#[derive(Clone)]
pub struct ChannelDefaults {
    pub handlers: Vec<Arc<dyn Handler>>,
    pub processors: Vec<Arc<dyn Processor>>,
    pub timezone: Tz,
}

/// Name → channel mapping for one application.
///
/// Once initialized the registry only grows, and only through
/// [`Registry::create_channel`]; existing channels are never replaced.
pub struct Registry {
    channels: DashMap<String, Arc<Channel>>,
    defaults: ChannelDefaults,
}

impl Registry {
    /// Load the configuration file at `path` and build the registry.
    ///
    /// Fails before any channel is registered if the file is missing,
    /// malformed, semantically invalid, or a handler cannot be constructed.
    /// Callers should treat an error as fatal and abort startup.
    pub fn initialize(path: &Path) -> Result<Self, ConfigError> {
        let config = load_config(path)?;
        Self::from_config(&config)
    }

    /// Build the registry from an already-parsed configuration.
    ///
    /// Runs the same semantic validation as [`Registry::initialize`].
    pub fn from_config(config: &LoggingConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let timezone: Tz = config.timezone.parse().map_err(|_| {
            ConfigError::Validation(vec![ValidationError::UnknownTimezone(
                config.timezone.clone(),
            )])
        })?;

        let mut handlers: Vec<(String, Arc<dyn Handler>)> = Vec::new();
        for (name, handler_config) in &config.handlers {
            handlers.push((name.clone(), build_handler(name, handler_config)?));
        }
        let processors: Vec<(String, Arc<dyn Processor>)> = config
            .processors
            .iter()
            .map(|(name, processor_config)| (name.clone(), build_processor(processor_config)))
            .collect();

        // References were checked by validate_config above, so resolution
        // cannot come up empty for a validated config.
        let resolve_handler = |name: &String| -> Option<Arc<dyn Handler>> {
            handlers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, h)| h.clone())
        };
        let resolve_processor = |name: &String| -> Option<Arc<dyn Processor>> {
            processors
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, p)| p.clone())
        };

        let channels: DashMap<String, Arc<Channel>> = DashMap::new();
        for (name, definition) in &config.channels {
            let channel = Channel::new(
                name.clone(),
                definition.handlers.iter().filter_map(&resolve_handler).collect(),
                definition
                    .processors
                    .iter()
                    .filter_map(&resolve_processor)
                    .collect(),
                timezone,
            );
            channels.insert(name.clone(), Arc::new(channel));
        }

        let app = channels
            .get(APP_CHANNEL)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ConfigError::Validation(vec![ValidationError::MissingAppChannel]))?;

        let registry = Self {
            channels,
            defaults: ChannelDefaults {
                handlers: app.handlers().to_vec(),
                processors: app.processors().to_vec(),
                timezone,
            },
        };

        for name in BASELINE_CHANNELS {
            registry.create_channel(name, None, None);
        }

        Ok(registry)
    }

    /// Create-or-get a channel by name.
    ///
    /// If the channel already exists it is returned unchanged; the handler
    /// and processor arguments are ignored. Otherwise a new channel is
    /// registered, with omitted handlers/processors taken from the defaults
    /// captured from `app` at initialization.
    pub fn create_channel(
        &self,
        name: &str,
        handlers: Option<Vec<Arc<dyn Handler>>>,
        processors: Option<Vec<Arc<dyn Processor>>>,
    ) -> Arc<Channel> {
        if let Some(existing) = self.channels.get(name) {
            return existing.value().clone();
        }

        // Entry-level locking: under a racing first use only one caller
        // constructs the channel, the rest get that instance.
        self.channels
            .entry(name.to_string())
            .or_insert_with(|| {
                let handlers = handlers.unwrap_or_else(|| self.defaults.handlers.clone());
                let processors = processors.unwrap_or_else(|| self.defaults.processors.clone());
                Arc::new(Channel::new(
                    name,
                    handlers,
                    processors,
                    self.defaults.timezone,
                ))
            })
            .value()
            .clone()
    }

    /// Look up a channel by name.
    pub fn get_channel(&self, name: &str) -> Result<Arc<Channel>, RegistryError> {
        self.channels
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::UnknownChannel(name.to_string()))
    }

    /// Returns true if a channel with this name is registered.
    pub fn has_channel(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Names of all registered channels, unordered.
    pub fn channel_names(&self) -> Vec<String> {
        self.channels.iter().map(|entry| entry.key().clone()).collect()
    }

    /// The defaults ad-hoc channels are created with.
    pub fn defaults(&self) -> &ChannelDefaults {
        &self.defaults
    }
}

impl std::fmt::Debug for ChannelDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelDefaults")
            .field("handlers", &self.handlers.len())
            .field("processors", &self.processors.len())
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("channels", &self.channels)
            .field("defaults", &self.defaults)
            .finish()
    }
}
