//! FeedBurner (`feedburner:`) leaves the publisher's URLs behind when it
//! rewrites links through its own redirector.

use super::NamespaceHandler;
use crate::error::Result;
use crate::model::{Feed, Item, Link};
use crate::parse::{ParseContext, StartTag};

pub const FEEDBURNER_NAMESPACE: &str = "http://rssnamespace.org/feedburner/ext/1.0";

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedBurnerHandler;

impl NamespaceHandler for FeedBurnerHandler {
    fn prefix(&self) -> &'static str {
        "feedburner"
    }

    fn namespace(&self) -> &'static str {
        FEEDBURNER_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["http://rssnamespace.org/feedburner/ext/1.0/"]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        _feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "info" | "browserFriendly" | "emailServiceId" | "feedburnerHostname" | "feedFlare" => {
                cx.skip(tag)
            }
            _ => cx.skip_unknown(tag),
        }
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "origLink" => item.add_link(Link::with_rel(cx.read_text(tag)?, "original")),
            "origEnclosureLink" => {
                item.add_link(Link::with_rel(cx.read_text(tag)?, "original-enclosure"))
            }
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Link;
    use crate::parse::FeedParser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_original_links() {
        let xml = r#"<rss xmlns:feedburner="http://rssnamespace.org/feedburner/ext/1.0"><channel>
            <feedburner:info uri="myshow"/>
            <item>
                <link>https://feeds.feedburner.com/~r/myshow/~3/abc</link>
                <feedburner:origLink>https://example.com/episodes/1</feedburner:origLink>
                <feedburner:origEnclosureLink>https://example.com/1.mp3</feedburner:origEnclosureLink>
            </item>
        </channel></rss>"#;
        let output = FeedParser::new().parse_with_diagnostics(xml.as_bytes()).unwrap();
        assert_eq!(
            output.feed.items[0].links,
            vec![
                Link::with_rel("https://feeds.feedburner.com/~r/myshow/~3/abc", "alternate"),
                Link::with_rel("https://example.com/episodes/1", "original"),
                Link::with_rel("https://example.com/1.mp3", "original-enclosure"),
            ]
        );
        assert!(output.diagnostics.is_clean());
    }
}
