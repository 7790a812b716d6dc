// Error types for the portfolio shell
use std::path::PathBuf;

/// Problems loading or validating `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("navigation needs at least one target")]
    EmptyTargets,

    #[error("navigation target `{0}` is declared more than once")]
    DuplicateTarget(String),

    #[error("navigation target id `{0}` is not a valid fragment")]
    InvalidTargetId(String),

    #[error("`{value}` is not a hex color (for theme.{field})")]
    InvalidColor { field: &'static str, value: String },

    #[error("unknown theme preset `{0}`")]
    UnknownTheme(String),
}

/// Problems loading the content tree.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("content region `{0}` is declared more than once")]
    DuplicateRegion(String),
}

/// A navigation request that could not be carried out. Never fatal: state,
/// fragment and scroll position are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("`{0}` is not a navigation target")]
    UnknownTarget(String),

    #[error("no content region is registered for `{0}`")]
    MissingRegion(String),
}
