//! Every registered vocabulary must consume exactly the element it is handed,
//! whatever that element contains.
//!
//! Each known element name is placed at channel and at item level with mixed
//! text and a nested foreign subtree, then followed by a sibling whose value
//! is checked. Debug builds additionally assert the cursor depth after every
//! routed element.

use podfeed::namespace::create_standard_registry;
use podfeed::{Feed, FeedParser};
use pretty_assertions::assert_eq;

/// Element names per conventional prefix. The root containers (`channel`,
/// `item`, `entry`) are left out since they add episodes by design.
const VOCABULARY: &[(&str, &[&str])] = &[
    (
        "rss",
        &[
            "title", "link", "description", "language", "copyright", "managingEditor",
            "webMaster", "pubDate", "lastBuildDate", "category", "generator", "docs", "ttl",
            "image", "skipHours", "skipDays", "cloud", "textInput", "rating", "items", "author",
            "comments", "enclosure", "guid", "source",
        ],
    ),
    (
        "atom",
        &[
            "id", "title", "subtitle", "tagline", "updated", "modified", "link", "author",
            "contributor", "category", "generator", "icon", "logo", "rights", "copyright",
            "published", "issued", "summary", "content", "source",
        ],
    ),
    (
        "itunes",
        &[
            "author", "subtitle", "summary", "title", "keywords", "block", "explicit", "image",
            "category", "owner", "new-feed-url", "type", "complete", "duration", "episode",
            "season", "episodeType", "isClosedCaptioned", "order",
        ],
    ),
    (
        "googleplay",
        &[
            "author", "description", "block", "explicit", "image", "category", "owner", "email",
            "new-feed-url",
        ],
    ),
    (
        "podcast",
        &[
            "person", "location", "license", "locked", "funding", "guid", "medium", "transcript",
            "chapters", "season", "episode", "images", "value", "soundbite",
        ],
    ),
    (
        "rawvoice",
        &["rating", "location", "poster", "frequency", "embed", "subscribe"],
    ),
    ("dc", DUBLIN_CORE),
    ("dcterms", DUBLIN_CORE),
    ("content", &["encoded"]),
    (
        "media",
        &[
            "thumbnail", "title", "description", "keywords", "rating", "credit", "category",
            "copyright", "license", "group", "content", "player", "hash",
        ],
    ),
    ("sy", &["updatePeriod", "updateFrequency", "updateBase"]),
    ("wfw", &["comment", "commentRss", "commentRSS"]),
    ("slash", &["comments", "section", "department"]),
    (
        "georss",
        &[
            "point", "box", "elev", "radius", "featurename", "featureName", "featuretypetag",
            "relationshiptag", "line", "polygon", "where",
        ],
    ),
    ("creativeCommons", &["license"]),
    ("cc", &["license"]),
    (
        "feedburner",
        &[
            "info", "browserFriendly", "emailServiceId", "feedburnerHostname", "feedFlare",
            "origLink", "origEnclosureLink",
        ],
    ),
];

const DUBLIN_CORE: &[&str] = &[
    "title", "description", "abstract", "creator", "contributor", "publisher", "subject",
    "rights", "date", "created", "issued", "available", "modified", "license", "language",
    "identifier", "type", "format",
];

const SENTINEL_ENCLOSURE: &str = "https://example.com/after.mp3";

fn element(name: &str) -> String {
    format!(
        r#"<x:{name} kind="plain">lead <u:deep xmlns:u="urn:example:unknown" a="1">inner<u:deeper><u:deepest/></u:deeper>more</u:deep> tail</x:{name}>"#
    )
}

fn channel_level(namespace: &str, name: &str) -> String {
    format!(
        r#"<rss version="2.0" xmlns:x="{namespace}"><channel>
            {}
            <ttl>42</ttl>
            <item><title>One</title></item>
            <item><title>Two</title></item>
        </channel></rss>"#,
        element(name)
    )
}

fn item_level(namespace: &str, name: &str) -> String {
    format!(
        r#"<rss version="2.0" xmlns:x="{namespace}"><channel>
            <item>{}<enclosure url="{SENTINEL_ENCLOSURE}"/></item>
            <item><title>Two</title></item>
        </channel></rss>"#,
        element(name)
    )
}

fn parse(xml: &str) -> Feed {
    FeedParser::new()
        .parse(xml.as_bytes())
        .unwrap_or_else(|e| panic!("parse failed: {e}\n{xml}"))
}

fn vocabulary(prefix: &str) -> &'static [&'static str] {
    VOCABULARY
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, names)| *names)
        .unwrap_or_else(|| panic!("no element table for prefix {prefix:?}"))
}

#[test]
fn test_table_covers_every_registered_namespace() {
    let registry = create_standard_registry();
    for namespace in registry.namespaces() {
        let handler = registry.resolve(namespace).unwrap();
        assert!(!vocabulary(handler.prefix()).is_empty());
    }
    assert_eq!(VOCABULARY.len(), registry.len());
}

#[test]
fn test_channel_level_elements_consume_their_subtree() {
    let registry = create_standard_registry();
    for namespace in registry.namespaces() {
        let prefix = registry.resolve(namespace).unwrap().prefix();
        for name in vocabulary(prefix) {
            let feed = parse(&channel_level(namespace, name));
            assert_eq!(feed.ttl, Some(42), "sibling after {prefix}:{name}");
            let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_deref()).collect();
            assert_eq!(titles, vec![Some("One"), Some("Two")], "items after {prefix}:{name}");
        }
    }
}

#[test]
fn test_item_level_elements_consume_their_subtree() {
    let registry = create_standard_registry();
    for namespace in registry.namespaces() {
        let prefix = registry.resolve(namespace).unwrap().prefix();
        for name in vocabulary(prefix) {
            let feed = parse(&item_level(namespace, name));
            assert_eq!(feed.items.len(), 2, "items after {prefix}:{name}");
            assert_eq!(
                feed.items[0].enclosure.as_ref().map(|e| e.url.as_str()),
                Some(SENTINEL_ENCLOSURE),
                "sibling after {prefix}:{name}"
            );
            assert_eq!(feed.items[1].title.as_deref(), Some("Two"));
        }
    }
}
