//! Dublin Core elements (`dc:`) and terms (`dcterms:`).
//!
//! The two vocabularies overlap almost entirely, so one handler type serves
//! both namespaces; terms adds the refined dates and `license`.

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::{parse_date, parse_language};
use crate::model::{Aggregate, Category, Feed, Item, Person};
use crate::parse::{ParseContext, StartTag};

pub const DC_ELEMENTS_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
pub const DC_TERMS_NAMESPACE: &str = "http://purl.org/dc/terms/";

/// Elements that are part of the vocabulary but have no place in the model.
const IGNORED: &[&str] = &[
    "type",
    "format",
    "source",
    "relation",
    "coverage",
    "audience",
    "accessRights",
    "extent",
    "medium",
    "hasPart",
    "isPartOf",
    "hasVersion",
    "isVersionOf",
    "references",
    "isReferencedBy",
    "requires",
    "conformsTo",
];

#[derive(Debug, Clone, Copy)]
pub struct DublinCoreHandler {
    prefix: &'static str,
    namespace: &'static str,
    aliases: &'static [&'static str],
}

impl DublinCoreHandler {
    pub const ELEMENTS: Self = Self {
        prefix: "dc",
        namespace: DC_ELEMENTS_NAMESPACE,
        aliases: &[
            "http://purl.org/dc/elements/1.1",
            "https://purl.org/dc/elements/1.1/",
            "http://purl.org/dc/elements/1.0/",
        ],
    };

    pub const TERMS: Self = Self {
        prefix: "dcterms",
        namespace: DC_TERMS_NAMESPACE,
        aliases: &["http://purl.org/dc/terms", "https://purl.org/dc/terms/"],
    };

    fn process_common<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<bool> {
        match tag.local_name() {
            "title" => target.set_title(&cx.read_text(tag)?),
            "description" => target.set_description(&cx.read_text(tag)?),
            "abstract" => target.set_summary(&cx.read_text(tag)?),
            "creator" => {
                let creator = cx.read_text(tag)?;
                target.set_author(&creator);
                target.add_author(Person::named(&creator));
            }
            "contributor" => target.add_contributor(Person::named(&cx.read_text(tag)?)),
            "publisher" => {
                let mut publisher = Person::named(&cx.read_text(tag)?);
                publisher.set_role("publisher");
                target.add_contributor(publisher);
            }
            "subject" => {
                let subject = cx.read_text(tag)?;
                target.add_category(Category::new(subject).with_scheme(self.namespace));
            }
            "rights" => target.set_copyright(&cx.read_text(tag)?),
            "date" | "created" | "issued" | "available" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    target.set_pub_date(date);
                }
            }
            "modified" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    target.set_updated(date);
                }
            }
            "license" => {
                let resource = tag.attr_trimmed("resource").map(str::to_string);
                let text = cx.read_text(tag)?;
                let url = resource.unwrap_or(text);
                if !url.is_empty() {
                    target.license_mut().set_url(&url);
                }
            }
            name if IGNORED.contains(&name) => cx.skip(tag)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl NamespaceHandler for DublinCoreHandler {
    fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn namespace(&self) -> &'static str {
        self.namespace
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        if self.process_common(cx, feed, tag)? {
            return Ok(());
        }
        match tag.local_name() {
            "language" => {
                if let Some(code) = cx.read_value(tag, parse_language)? {
                    feed.set_language(code);
                }
            }
            "identifier" => feed.set_id(&cx.read_text(tag)?),
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        if self.process_common(cx, item, tag)? {
            return Ok(());
        }
        match tag.local_name() {
            "identifier" => {
                let id = cx.read_text(tag)?;
                item.set_guid(&id, false);
            }
            "language" => cx.skip(tag)?,
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::{parse_feed, FeedParser};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_elements_and_terms_share_vocabulary() {
        let xml = r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/">
            <channel>
                <dc:language>de-DE</dc:language>
                <dc:rights>CC-BY</dc:rights>
                <dcterms:modified>2003-06-10T04:00:00Z</dcterms:modified>
                <item>
                    <dc:creator>Jane</dc:creator>
                    <dc:date>2003-06-10T04:00:00Z</dc:date>
                    <dc:subject>Rust</dc:subject>
                    <dcterms:license rdf:resource="https://creativecommons.org/licenses/by/4.0/"
                        xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>
                </item>
            </channel></rss>"#;
        let feed = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(feed.language.as_deref(), Some("de"));
        assert_eq!(feed.copyright.as_deref(), Some("CC-BY"));
        assert_eq!(feed.updated.map(|d| d.timestamp()), Some(1_055_217_600));

        let item = &feed.items[0];
        assert_eq!(item.author.as_deref(), Some("Jane"));
        assert_eq!(item.authors[0].name.as_deref(), Some("Jane"));
        assert_eq!(item.pub_date.map(|d| d.timestamp()), Some(1_055_217_600));
        assert_eq!(item.categories[0].term, "Rust");
        assert_eq!(
            item.license.as_ref().and_then(|l| l.url.as_deref()),
            Some("https://creativecommons.org/licenses/by/4.0/")
        );
    }

    #[test]
    fn test_rss_date_wins_over_dc_date_when_first() {
        let xml = r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/"><channel><item>
            <pubDate>Tue, 10 Jun 2003 04:00:00 GMT</pubDate>
            <dc:date>2010-01-01T00:00:00Z</dc:date>
        </item></channel></rss>"#;
        let feed = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(
            feed.items[0].pub_date.map(|d| d.timestamp()),
            Some(1_055_217_600)
        );
    }

    #[test]
    fn test_ignored_terms_are_not_diagnosed() {
        let xml = r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/"><channel>
            <dc:format>audio/mpeg</dc:format><dc:type>Sound</dc:type>
        </channel></rss>"#;
        let output = FeedParser::new().parse_with_diagnostics(xml.as_bytes()).unwrap();
        assert!(output.diagnostics.is_clean());
    }
}
