//! Feed parsing: root detection, the RSS and Atom state machines, and the
//! cursor and dispatch engine they share.

mod atom;
mod context;
mod diagnostics;
mod engine;
mod rss;

use std::io::Read;
use std::sync::Arc;

use serde::Serialize;

pub use atom::{AtomHandler, ATOM_NAMESPACE};
pub use context::{Attribute, ParseContext, StartTag, XML_NAMESPACE};
pub use diagnostics::{Diagnostic, Diagnostics, Level};
pub use rss::{RssHandler, RDF_NAMESPACE, RSS_NAMESPACE};

use crate::config::ParserConfig;
use crate::error::{FeedError, Result};
use crate::model::Feed;
use crate::namespace::{NamespaceHandler, NamespaceRegistry};

/// The dialect a document's root element selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootFormat {
    Rss,
    Atom,
}

/// Picks the root state machine for a document's outermost element.
pub fn detect_root(tag: &StartTag) -> Option<RootFormat> {
    let namespace = tag.namespace().trim();
    match tag.local_name() {
        "rss" => Some(RootFormat::Rss),
        "RDF" if namespace == RDF_NAMESPACE => Some(RootFormat::Rss),
        "feed" if namespace.is_empty() || AtomHandler.recognizes(namespace) => {
            Some(RootFormat::Atom)
        }
        _ => None,
    }
}

/// A parsed feed together with what the parser had to recover from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    pub format: RootFormat,
    pub feed: Feed,
    pub diagnostics: Diagnostics,
}

/// Reusable, thread-safe feed parser.
///
/// Holds only immutable state: the namespace registry and the
/// configuration. Clone it freely or share it behind an `Arc`; every call
/// to [`parse`](Self::parse) gets its own cursor and its own [`Feed`].
#[derive(Debug, Clone)]
pub struct FeedParser {
    registry: Arc<NamespaceRegistry>,
    config: ParserConfig,
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedParser {
    /// Parser with the standard registry and default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self::with_registry(NamespaceRegistry::standard(), config)
    }

    pub fn with_registry(registry: Arc<NamespaceRegistry>, config: ParserConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// Parses one document, discarding diagnostics.
    pub fn parse(&self, input: &[u8]) -> Result<Feed> {
        self.parse_with_diagnostics(input).map(|output| output.feed)
    }

    /// Parses one document and reports what was skipped or rejected.
    pub fn parse_with_diagnostics(&self, input: &[u8]) -> Result<ParseOutput> {
        if let Some((size, limit)) = self.config.check_size(input.len() as u64) {
            return Err(FeedError::TooLarge { size, limit });
        }

        let mut cx = ParseContext::new(input, &self.registry, &self.config);
        let root = cx.root()?.ok_or(FeedError::EmptyDocument)?;
        let format = detect_root(&root).ok_or_else(|| FeedError::NotAFeed {
            root: root.qualified_name().to_string(),
        })?;

        let feed = match format {
            RootFormat::Rss => rss::parse_document(&mut cx, &root)?,
            RootFormat::Atom => atom::parse_document(&mut cx, &root)?,
        };
        let diagnostics = cx.into_diagnostics();

        tracing::debug!(
            ?format,
            items = feed.items.len(),
            unknown_elements = diagnostics.unknown_elements(),
            invalid_values = diagnostics.invalid_values(),
            "Parsed feed"
        );
        Ok(ParseOutput {
            format,
            feed,
            diagnostics,
        })
    }

    /// Reads a whole document from `reader`, enforcing the size limit
    /// while reading, then parses it.
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<ParseOutput> {
        let limit = self.config.max_document_bytes;
        let mut buf = Vec::new();
        if limit > 0 {
            reader
                .by_ref()
                .take(limit.saturating_add(1))
                .read_to_end(&mut buf)?;
        } else {
            reader.read_to_end(&mut buf)?;
        }
        self.parse_with_diagnostics(&buf)
    }
}

/// Parses a document with the standard registry and default configuration.
pub fn parse_feed(input: &[u8]) -> Result<Feed> {
    FeedParser::new().parse(input)
}
