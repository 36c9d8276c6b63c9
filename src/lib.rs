//! Lenient streaming parser for podcast feeds.
//!
//! Reads RSS 2.0 / RSS 1.0 and Atom 1.0 documents, together with the vendor
//! extensions podcast feeds carry (iTunes, Google Play, Media RSS, Dublin
//! Core, GeoRSS, Podcast Index, ...), into one normalized [`Feed`].
//!
//! ```
//! let xml = br#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
//!   <channel>
//!     <title>Example Show</title>
//!     <item><title>Pilot</title><itunes:duration>1:02:03</itunes:duration></item>
//!   </channel>
//! </rss>"#;
//!
//! let feed = podfeed::parse_feed(xml).unwrap();
//! assert_eq!(feed.title.as_deref(), Some("Example Show"));
//! assert_eq!(feed.items[0].duration.map(|d| d.as_secs()), Some(3723));
//! ```
//!
//! Malformed values and unknown elements never fail a parse; use
//! [`FeedParser::parse_with_diagnostics`] to see what was dropped.

pub mod config;
pub mod error;
pub mod lenient;
pub mod model;
pub mod namespace;
pub mod parse;

pub use config::ParserConfig;
pub use error::{ConfigError, FeedError};
pub use model::{Feed, Item};
pub use namespace::{NamespaceHandler, NamespaceRegistry};
pub use parse::{parse_feed, Diagnostic, Diagnostics, FeedParser, ParseOutput, RootFormat};
