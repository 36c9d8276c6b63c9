//! RSS 1.0 content module: `content:encoded` carries the full episode notes.

use super::NamespaceHandler;
use crate::error::Result;
use crate::model::Item;
use crate::parse::{ParseContext, StartTag};

pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHandler;

impl NamespaceHandler for ContentHandler {
    fn prefix(&self) -> &'static str {
        "content"
    }

    fn namespace(&self) -> &'static str {
        CONTENT_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "http://purl.org/rss/1.0/modules/content",
            "https://purl.org/rss/1.0/modules/content/",
        ]
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "encoded" => item.set_content(&cx.read_text(tag)?),
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::FeedParser;

    #[test]
    fn test_encoded_cdata() {
        let xml = r#"<rss xmlns:content="http://purl.org/rss/1.0/modules/content/"><channel>
            <content:encoded>channel level</content:encoded>
            <item><content:encoded><![CDATA[<p>Show <b>notes</b></p>]]></content:encoded></item>
        </channel></rss>"#;
        let output = FeedParser::new().parse_with_diagnostics(xml.as_bytes()).unwrap();
        assert_eq!(
            output.feed.items[0].content.as_deref(),
            Some("<p>Show <b>notes</b></p>")
        );
        // Only meaningful on items.
        assert_eq!(output.diagnostics.unknown_elements(), 1);
    }
}
