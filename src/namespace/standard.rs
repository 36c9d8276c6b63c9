//! The compiled-in registry of every namespace the parser understands.

use std::sync::{Arc, LazyLock};

use super::comments::{SlashHandler, WellFormedWebHandler};
use super::content::ContentHandler;
use super::creative_commons::{CcHandler, CreativeCommonsHandler};
use super::dublin_core::DublinCoreHandler;
use super::feedburner::FeedBurnerHandler;
use super::georss::GeoRssHandler;
use super::google_play::GooglePlayHandler;
use super::itunes::ItunesHandler;
use super::media::MediaHandler;
use super::podcast_index::PodcastIndexHandler;
use super::rawvoice::RawVoiceHandler;
use super::registry::NamespaceRegistry;
use super::syndication::SyndicationHandler;
use crate::parse::{AtomHandler, RssHandler};

static STANDARD: LazyLock<Arc<NamespaceRegistry>> =
    LazyLock::new(|| Arc::new(create_standard_registry()));

/// Create a registry with handlers for all supported namespaces.
///
/// The root formats are registered too, so an RSS or Atom element met
/// inside a vendor element is routed back to its own vocabulary.
#[must_use]
pub fn create_standard_registry() -> NamespaceRegistry {
    let mut registry = NamespaceRegistry::new();

    // Root formats
    registry.register(RssHandler);
    registry.register(AtomHandler);

    // Podcast directories
    registry.register(ItunesHandler);
    registry.register(GooglePlayHandler);
    registry.register(PodcastIndexHandler);
    registry.register(RawVoiceHandler);

    // General-purpose RSS modules
    registry.register(DublinCoreHandler::ELEMENTS);
    registry.register(DublinCoreHandler::TERMS);
    registry.register(ContentHandler);
    registry.register(MediaHandler);
    registry.register(SyndicationHandler);
    registry.register(WellFormedWebHandler);
    registry.register(SlashHandler);
    registry.register(GeoRssHandler);

    // Licensing and publisher extensions
    registry.register(CreativeCommonsHandler);
    registry.register(CcHandler);
    registry.register(FeedBurnerHandler);

    registry
}

impl NamespaceRegistry {
    /// The process-wide standard registry, built on first use.
    pub fn standard() -> Arc<NamespaceRegistry> {
        Arc::clone(&STANDARD)
    }
}
