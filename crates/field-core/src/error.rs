use thiserror::Error;

/// Rejected `configure` input. Out-of-range numbers are clamped instead, so
/// this only covers keys we do not know and values we cannot parse.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    /// The presentation target was torn down; the driver stops.
    #[error("presentation surface detached")]
    Detached,
    #[error("commit failed: {0}")]
    Commit(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("frame scheduling failed: {0}")]
    Schedule(String),
    #[error("event subscription failed: {0}")]
    Subscribe(String),
}
