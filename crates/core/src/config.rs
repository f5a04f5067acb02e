use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::outcome::Locale;

/// Which "empty" payloads count as absent at serialization time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresencePolicy {
    /// Only a missing value is absent. An empty list or `0` payload is emitted.
    #[default]
    NullOnly,
    /// `null`, `false`, `0`, `""`, `[]` and `{}` are all absent.
    Falsy,
}

/// Where pagination metadata is placed on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// A nested `pagination` object.
    #[default]
    Nested,
    /// Top-level `totalRows`, `currentPage`, `totalPages`, `pageSize`.
    Flat,
}

/// Envelope settings, loaded from environment variables.
///
/// All fields default to the behavior of the plain constructors and
/// serializer, so an empty environment changes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvelopeConfig {
    /// Language of default messages (default: `en`).
    pub locale: Locale,
    /// Presence rule for `data` and `errors` (default: `null-only`).
    pub presence: PresencePolicy,
    /// Pagination placement (default: `nested`).
    pub layout: Layout,
}

impl EnvelopeConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default     |
    /// |---------------------|-------------|
    /// | `ENVELOPE_LOCALE`   | `en`        |
    /// | `ENVELOPE_PRESENCE` | `null-only` |
    /// | `ENVELOPE_LAYOUT`   | `nested`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = setting(&lookup, "ENVELOPE_LOCALE", "en, es", |v| match v {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        })?;

        let presence = setting(&lookup, "ENVELOPE_PRESENCE", "null-only, falsy", |v| match v {
            "null-only" => Some(PresencePolicy::NullOnly),
            "falsy" => Some(PresencePolicy::Falsy),
            _ => None,
        })?;

        let layout = setting(&lookup, "ENVELOPE_LAYOUT", "nested, flat", |v| match v {
            "nested" => Some(Layout::Nested),
            "flat" => Some(Layout::Flat),
            _ => None,
        })?;

        let config = Self {
            locale,
            presence,
            layout,
        };
        tracing::debug!(?locale, ?presence, ?layout, "Loaded envelope configuration");
        Ok(config)
    }
}

/// Read one setting, falling back to the default when unset.
///
/// Values are trimmed and lowercased before `parse` sees them.
fn setting<F, T>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: Default,
{
    let Some(value) = lookup(key) else {
        return Ok(T::default());
    };

    let normalized = value.trim().to_ascii_lowercase();
    parse(&normalized).ok_or(ConfigError::InvalidValue {
        key,
        value,
        expected,
    })
}
