//! Namespace handlers and the registry that routes elements to them.
//!
//! Every XML namespace the parser understands has one [`NamespaceHandler`].
//! The RSS and Atom root handlers live in [`crate::parse`]; vendor extensions
//! (iTunes, Google Play, GeoRSS, Media RSS, Podcast Index, ...) live here.
//! Handlers are stateless and shared across threads; all per-document state
//! is in the [`ParseContext`] they are handed.

mod registry;
mod standard;

pub mod comments;
pub mod content;
pub mod creative_commons;
pub mod dublin_core;
pub mod feedburner;
pub mod georss;
pub mod google_play;
pub mod itunes;
pub mod media;
pub mod podcast_index;
pub mod rawvoice;
pub mod syndication;

pub use registry::NamespaceRegistry;
pub use standard::create_standard_registry;

use crate::error::Result;
use crate::model::{Feed, Item};
use crate::parse::{ParseContext, StartTag};

/// Lowercased, trimmed form used for tolerant namespace comparison.
pub(crate) fn fold_uri(uri: &str) -> String {
    uri.trim().to_ascii_lowercase()
}

/// Interprets the elements of one XML namespace.
///
/// A handler is called with the start tag of an element in its namespace
/// and must consume that element completely before returning, whether it
/// reads the text, walks the children, or skips it. Child elements from
/// other namespaces go back through [`ParseContext::dispatch_feed`] or
/// [`ParseContext::dispatch_item`] with `self` as the current handler.
///
/// Both processing methods default to recording the element as unknown,
/// so a handler only implements the level it has elements for.
pub trait NamespaceHandler: Send + Sync {
    /// Conventional prefix, e.g. `itunes`. Used to recover elements whose
    /// prefix was never declared.
    fn prefix(&self) -> &'static str;

    /// Canonical namespace URI.
    fn namespace(&self) -> &'static str;

    /// Other URIs published for the same vocabulary.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether `uri` names this handler's namespace, ignoring case and
    /// surrounding whitespace.
    fn recognizes(&self, uri: &str) -> bool {
        let uri = uri.trim();
        if uri == self.namespace() || self.aliases().contains(&uri) {
            return true;
        }
        let folded = fold_uri(uri);
        std::iter::once(self.namespace())
            .chain(self.aliases().iter().copied())
            .any(|known| fold_uri(known) == folded)
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        _feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        cx.skip_unknown(tag)
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        _item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        cx.skip_unknown(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl NamespaceHandler for Sample {
        fn prefix(&self) -> &'static str {
            "s"
        }

        fn namespace(&self) -> &'static str {
            "http://example.com/Sample"
        }

        fn aliases(&self) -> &'static [&'static str] {
            &["http://example.com/sample-old"]
        }
    }

    #[test]
    fn test_recognizes_canonical_and_alias() {
        assert!(Sample.recognizes("http://example.com/Sample"));
        assert!(Sample.recognizes("http://example.com/sample-old"));
        assert!(!Sample.recognizes("http://example.com/other"));
    }

    #[test]
    fn test_recognizes_case_and_whitespace_variants() {
        assert!(Sample.recognizes("  HTTP://EXAMPLE.COM/SAMPLE "));
        assert!(Sample.recognizes("http://example.com/SAMPLE-OLD"));
    }
}
