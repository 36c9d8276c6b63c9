//! End-to-end tests for RSS documents and the vendor extensions podcast
//! feeds mix into them.
//!
//! Every test goes through the public `FeedParser` API only.

use std::time::Duration;

use podfeed::lenient::DurationOverflow;
use podfeed::model::GeoPoint;
use podfeed::{parse_feed, Diagnostic, FeedError, FeedParser, ParserConfig, RootFormat};
use pretty_assertions::assert_eq;

const ITUNES: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

fn channel(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:itunes="{ITUNES}"
     xmlns:googleplay="http://www.google.com/schemas/play-podcasts/1.0"
     xmlns:georss="http://www.georss.org/georss">
  <channel>{body}</channel>
</rss>"#
    )
}

fn item(body: &str) -> String {
    channel(&format!("<item>{body}</item>"))
}

// ============================================================================
// Channel fields
// ============================================================================

#[test]
fn test_full_channel() {
    let xml = channel(
        r#"
        <title>Example Show</title>
        <link>https://example.com/</link>
        <description>All about examples.</description>
        <language>en-us</language>
        <copyright>2024 Example</copyright>
        <pubDate>Tue, 10 Jun 2003 04:00:00 GMT</pubDate>
        <lastBuildDate>Sat, 13 Dec 2003 18:30:02 GMT</lastBuildDate>
        <ttl>60</ttl>
        <image><url>https://example.com/art.png</url><title>Art</title></image>
        <itunes:author>Jane Doe</itunes:author>
        <itunes:owner><itunes:name>Jane</itunes:name><itunes:email>jane@example.com</itunes:email></itunes:owner>
        <itunes:category text="Technology"><itunes:category text="Podcasting"/></itunes:category>
        <itunes:type>Serial</itunes:type>
        <item><title>Pilot</title></item>
        <item><title>Second</title></item>
        "#,
    );
    let output = FeedParser::new()
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    assert_eq!(output.format, RootFormat::Rss);
    assert!(output.diagnostics.is_clean());

    let feed = output.feed;
    assert_eq!(feed.title.as_deref(), Some("Example Show"));
    assert_eq!(feed.link.as_deref(), Some("https://example.com/"));
    assert_eq!(feed.language.as_deref(), Some("en"));
    assert_eq!(feed.ttl, Some(60));
    assert_eq!(feed.pub_date.map(|d| d.timestamp()), Some(1_055_217_600));
    assert_eq!(
        feed.last_build_date.map(|d| d.timestamp()),
        Some(1_071_340_202)
    );
    assert_eq!(feed.images[0].url, "https://example.com/art.png");
    assert_eq!(feed.author.as_deref(), Some("Jane Doe"));
    assert_eq!(
        feed.owner.as_ref().and_then(|o| o.email.as_deref()),
        Some("jane@example.com")
    );
    assert_eq!(feed.categories[0].term, "Technology");
    assert_eq!(feed.categories[0].subcategories, vec!["Podcasting"]);
    assert_eq!(feed.show_type.as_deref(), Some("serial"));
    let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_deref()).collect();
    assert_eq!(titles, vec![Some("Pilot"), Some("Second")]);
}

#[test]
fn test_ttl_not_a_number() {
    let xml = channel("<ttl>abc</ttl>");
    let output = FeedParser::new()
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    assert_eq!(output.feed.ttl, None);
    assert_eq!(output.diagnostics.invalid_values(), 1);
    assert!(matches!(
        &output.diagnostics.entries()[0],
        Diagnostic::InvalidValue { local_name, raw, .. } if local_name == "ttl" && raw == "abc"
    ));
}

#[test]
fn test_first_non_blank_title_wins_across_namespaces() {
    let xml = channel(
        r#"<title>  </title><itunes:title>From iTunes</itunes:title><title>Late RSS title</title>"#,
    );
    let feed = parse_feed(xml.as_bytes()).unwrap();
    assert_eq!(feed.title.as_deref(), Some("From iTunes"));
}

// ============================================================================
// Episode fields
// ============================================================================

#[test]
fn test_enclosure_and_guid() {
    let xml = item(
        r#"<enclosure url="https://cdn.example.com/1.mp3" length="12345" type="audio/mpeg"/>
           <enclosure url="https://cdn.example.com/1.ogg" length="999" type="audio/ogg"/>
           <guid isPermaLink="false">ep-1</guid>"#,
    );
    let feed = parse_feed(xml.as_bytes()).unwrap();
    let item = &feed.items[0];
    let enclosure = item.enclosure.as_ref().unwrap();
    assert_eq!(enclosure.url, "https://cdn.example.com/1.mp3");
    assert_eq!(enclosure.length, Some(12345));
    assert_eq!(enclosure.mime_type.as_deref(), Some("audio/mpeg"));
    let guid = item.guid.as_ref().unwrap();
    assert_eq!(guid.value, "ep-1");
    assert!(!guid.is_permalink);
}

#[test]
fn test_durations() {
    let cases = [
        ("1:02:03", Some(3723)),
        ("02:03", Some(123)),
        ("90", Some(90)),
        ("3600", Some(3600)),
        ("1:2:3:4", Some(7384)),
        ("", None),
        ("abc", None),
    ];
    for (raw, expected) in cases {
        let xml = item(&format!("<itunes:duration>{raw}</itunes:duration>"));
        let feed = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(
            feed.items[0].duration,
            expected.map(Duration::from_secs),
            "duration {raw:?}"
        );
    }
}

#[test]
fn test_duration_overflow_can_be_rejected() {
    let config = ParserConfig {
        duration_overflow: DurationOverflow::Reject,
        ..ParserConfig::default()
    };
    let xml = item("<itunes:duration>1:2:3:4</itunes:duration>");
    let output = FeedParser::with_config(config)
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    assert_eq!(output.feed.items[0].duration, None);
    assert_eq!(output.diagnostics.invalid_values(), 1);
}

#[test]
fn test_explicit_merges_blank_then_value() {
    let xml = item(
        r#"<itunes:explicit></itunes:explicit><googleplay:explicit>Yes</googleplay:explicit>"#,
    );
    let feed = parse_feed(xml.as_bytes()).unwrap();
    let rating = feed.items[0].rating.as_ref().unwrap();
    assert_eq!(rating.explicit.as_deref(), Some("yes"));
    assert_eq!(rating.is_explicit(), Some(true));
}

#[test]
fn test_owner_merges_across_namespaces() {
    let xml = channel(
        r#"<googleplay:owner>gp@example.com</googleplay:owner>
           <itunes:owner><itunes:name>Jane</itunes:name><itunes:email>jane@example.com</itunes:email></itunes:owner>
           <podcast:locked xmlns:podcast="https://podcastindex.org/namespace/1.0"
                           owner="locked@example.com">yes</podcast:locked>"#,
    );
    let feed = parse_feed(xml.as_bytes()).unwrap();
    let owner = feed.owner.unwrap();
    assert_eq!(owner.name.as_deref(), Some("Jane"));
    assert_eq!(owner.email.as_deref(), Some("gp@example.com"));
    assert_eq!(feed.locked, Some(true));
}

#[test]
fn test_blank_explicit_adds_no_rating() {
    let xml = item("<itunes:explicit>  </itunes:explicit><title>Plain</title>");
    let feed = parse_feed(xml.as_bytes()).unwrap();
    assert_eq!(feed.items[0].rating, None);
}

#[test]
fn test_georss_point_on_item() {
    let xml = item("<georss:point>45.256 -71.92</georss:point>");
    let feed = parse_feed(xml.as_bytes()).unwrap();
    assert_eq!(
        feed.items[0].geo.as_ref().and_then(|g| g.point),
        Some(GeoPoint {
            lat: 45.256,
            lon: -71.92
        })
    );
}

#[test]
fn test_malformed_date_is_skipped_not_fatal() {
    let xml = item("<title>Still here</title><pubDate>sometime last week</pubDate>");
    let output = FeedParser::new()
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    let item = &output.feed.items[0];
    assert_eq!(item.title.as_deref(), Some("Still here"));
    assert_eq!(item.pub_date, None);
    assert_eq!(output.diagnostics.invalid_values(), 1);
}

// ============================================================================
// Document shapes
// ============================================================================

#[test]
fn test_rss_1_0_items_beside_channel() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                        xmlns="http://purl.org/rss/1.0/">
        <channel rdf:about="https://example.com/"><title>RDF Show</title></channel>
        <item rdf:about="https://example.com/1"><title>One</title></item>
        <item rdf:about="https://example.com/2"><title>Two</title></item>
    </rdf:RDF>"#;
    let output = FeedParser::new()
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    assert_eq!(output.format, RootFormat::Rss);
    assert_eq!(output.feed.title.as_deref(), Some("RDF Show"));
    assert_eq!(output.feed.items.len(), 2);
    assert_eq!(
        output.feed.items[1].guid.as_ref().map(|g| g.value.as_str()),
        Some("https://example.com/2")
    );
}

#[test]
fn test_undeclared_itunes_prefix_is_recovered() {
    let xml = r#"<rss><channel><itunes:author>Jane</itunes:author></channel></rss>"#;
    let feed = parse_feed(xml.as_bytes()).unwrap();
    assert_eq!(feed.author.as_deref(), Some("Jane"));
}

#[test]
fn test_miscased_namespace_uri_is_recognized() {
    let xml = r#"<rss xmlns:itunes="HTTP://WWW.ITUNES.COM/DTDS/PODCAST-1.0.DTD"><channel>
        <itunes:author>Jane</itunes:author>
    </channel></rss>"#;
    let feed = parse_feed(xml.as_bytes()).unwrap();
    assert_eq!(feed.author.as_deref(), Some("Jane"));
}

#[test]
fn test_not_a_feed() {
    let err = parse_feed(b"<html><body/></html>").unwrap_err();
    assert!(matches!(err, FeedError::NotAFeed { ref root } if root == "html"));
}

#[test]
fn test_empty_document() {
    let err = parse_feed(b"  <?xml version=\"1.0\"?>  ").unwrap_err();
    assert!(matches!(err, FeedError::EmptyDocument));
}

#[test]
fn test_truncated_document() {
    let err = parse_feed(b"<rss><channel><title>Cut off").unwrap_err();
    assert!(matches!(
        err,
        FeedError::UnexpectedEof { .. } | FeedError::Xml(_)
    ));
}

#[test]
fn test_document_size_limit() {
    let config = ParserConfig {
        max_document_bytes: 16,
        ..ParserConfig::default()
    };
    let xml = channel("<title>Too long for the limit</title>");
    let err = FeedParser::with_config(config)
        .parse(xml.as_bytes())
        .unwrap_err();
    assert!(matches!(err, FeedError::TooLarge { limit: 16, .. }));
}

#[test]
fn test_parse_reader_matches_parse() {
    let xml = channel("<title>Reader</title><item><title>One</title></item>");
    let parser = FeedParser::new();
    let from_reader = parser.parse_reader(xml.as_bytes()).unwrap();
    let from_slice = parser.parse_with_diagnostics(xml.as_bytes()).unwrap();
    assert_eq!(from_reader, from_slice);
}
