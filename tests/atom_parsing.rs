//! End-to-end tests for Atom documents, including podcast extensions
//! hosted inside Atom feeds.

use podfeed::model::Link;
use podfeed::{parse_feed, FeedParser, RootFormat};
use pretty_assertions::assert_eq;

const PODCAST_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"
      xmlns:media="http://search.yahoo.com/mrss/"
      xml:lang="en">
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <title type="text">Atom Cast</title>
  <subtitle>Episodes in Atom</subtitle>
  <updated>2003-12-13T18:30:02Z</updated>
  <link href="https://example.org/"/>
  <link rel="self" type="application/atom+xml" href="https://example.org/feed.atom"/>
  <author><name>Mark</name><email>mark@example.org</email></author>
  <category term="technology" scheme="urn:topics" label="Technology"/>
  <logo>https://example.org/logo.png</logo>
  <itunes:explicit>no</itunes:explicit>
  <entry>
    <id>tag:example.org,2003:3.2397</id>
    <title>Atom-Powered Episode</title>
    <link rel="alternate" type="text/html" href="https://example.org/2003/12/13/atom03"/>
    <link rel="enclosure" type="audio/mpeg" length="1337" href="https://example.org/audio/ep1.mp3"/>
    <published>2003-06-10T04:00:00Z</published>
    <updated>2003-12-13T18:30:02Z</updated>
    <summary>Short notes</summary>
    <content type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml"><p>Long notes</p></div></content>
    <itunes:duration>45:00</itunes:duration>
    <media:thumbnail url="https://example.org/ep1.jpg"/>
  </entry>
</feed>"#;

#[test]
fn test_podcast_in_atom() {
    let output = FeedParser::new()
        .parse_with_diagnostics(PODCAST_FEED.as_bytes())
        .unwrap();
    assert_eq!(output.format, RootFormat::Atom);

    let feed = &output.feed;
    assert_eq!(
        feed.id.as_deref(),
        Some("urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6")
    );
    assert_eq!(feed.title.as_deref(), Some("Atom Cast"));
    assert_eq!(feed.subtitle.as_deref(), Some("Episodes in Atom"));
    assert_eq!(feed.language.as_deref(), Some("en"));
    assert_eq!(feed.updated.map(|d| d.timestamp()), Some(1_071_340_202));
    assert_eq!(feed.link.as_deref(), Some("https://example.org/"));
    assert_eq!(feed.links.len(), 2);
    assert_eq!(feed.authors[0].name.as_deref(), Some("Mark"));
    assert_eq!(feed.categories[0].label.as_deref(), Some("Technology"));
    assert_eq!(feed.images[0].url, "https://example.org/logo.png");
    assert_eq!(
        feed.rating.as_ref().and_then(|r| r.is_explicit()),
        Some(false)
    );

    let entry = &feed.items[0];
    assert_eq!(entry.title.as_deref(), Some("Atom-Powered Episode"));
    assert_eq!(
        entry.link.as_deref(),
        Some("https://example.org/2003/12/13/atom03")
    );
    let enclosure = entry.enclosure.as_ref().unwrap();
    assert_eq!(enclosure.url, "https://example.org/audio/ep1.mp3");
    assert_eq!(enclosure.length, Some(1337));
    assert_eq!(entry.links.len(), 1);
    assert_eq!(entry.pub_date.map(|d| d.timestamp()), Some(1_055_217_600));
    assert_eq!(entry.description.as_deref(), Some("Short notes"));
    assert_eq!(entry.content.as_deref(), Some("Long notes"));
    assert_eq!(entry.duration.map(|d| d.as_secs()), Some(2700));
    assert_eq!(entry.images[0].url, "https://example.org/ep1.jpg");
    let guid = entry.guid.as_ref().unwrap();
    assert_eq!(guid.value, "tag:example.org,2003:3.2397");
    assert!(!guid.is_permalink);
}

#[test]
fn test_duplicate_links_collapse() {
    let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <link rel="self" href="https://example.org/feed"/>
        <link rel="self" href="https://example.org/feed"/>
        <link rel="hub" href="https://hub.example.org/"/>
    </feed>"#;
    let feed = parse_feed(xml.as_bytes()).unwrap();
    assert_eq!(
        feed.links,
        vec![
            Link::with_rel("https://example.org/feed", "self"),
            Link::with_rel("https://hub.example.org/", "hub"),
        ]
    );
    assert_eq!(feed.link, None);
}

#[test]
fn test_atom_0_3_vocabulary() {
    let xml = r#"<feed version="0.3" xmlns="http://purl.org/atom/ns#">
        <title>Old Atom</title>
        <tagline>Legacy tagline</tagline>
        <modified>2003-12-13T18:30:02Z</modified>
        <entry><title>Old entry</title><issued>2003-06-10T04:00:00Z</issued></entry>
    </feed>"#;
    let output = FeedParser::new()
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    assert_eq!(output.format, RootFormat::Atom);
    let feed = output.feed;
    assert_eq!(feed.description.as_deref(), Some("Legacy tagline"));
    assert_eq!(feed.updated.map(|d| d.timestamp()), Some(1_071_340_202));
    assert_eq!(
        feed.items[0].pub_date.map(|d| d.timestamp()),
        Some(1_055_217_600)
    );
    assert!(output.diagnostics.is_clean());
}

#[test]
fn test_unknown_atom_extension_is_reported() {
    let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="urn:example:ext">
        <entry><x:rating stars="5">great</x:rating><title>Rated</title></entry>
    </feed>"#;
    let output = FeedParser::new()
        .parse_with_diagnostics(xml.as_bytes())
        .unwrap();
    assert_eq!(output.feed.items[0].title.as_deref(), Some("Rated"));
    let diagnostic = &output.diagnostics.entries()[0];
    assert_eq!(diagnostic.namespace(), "urn:example:ext");
    assert_eq!(diagnostic.local_name(), "rating");
}
