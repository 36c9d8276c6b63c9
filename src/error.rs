//! Error types for feed parsing and configuration loading.
//!
//! Only fatal conditions are represented here. Anything that goes wrong at
//! the level of a single element or value is absorbed by the parser and
//! reported through [`Diagnostics`](crate::parse::Diagnostics) instead.

use thiserror::Error;

/// Fatal errors that abort the parse of a whole document.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The root element is neither RSS nor Atom.
    #[error("not a podcast feed: unrecognized root element <{root}>")]
    NotAFeed { root: String },

    /// The input contains no element at all.
    #[error("document contains no root element")]
    EmptyDocument,

    /// The input ended while elements were still open.
    #[error("document ended inside <{element}>")]
    UnexpectedEof { element: String },

    /// The input exceeds the configured size limit.
    #[error("feed document is {size} bytes (max {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    /// Reading the input failed.
    #[error("Failed to read feed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a [`ParserConfig`](crate::config::ParserConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Result alias used throughout the parser.
pub type Result<T, E = FeedError> = std::result::Result<T, E>;
