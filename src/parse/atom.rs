//! Atom 1.0 (and 0.3) root state machine.
//!
//! `feed` → `entry`, symmetric to the RSS walk. Atom links carry everything
//! in attributes, so a `link` is read from its start tag and then consumed
//! whole; `rel="enclosure"` links become the item's [`Enclosure`].

use super::{Level, ParseContext, StartTag};
use crate::error::Result;
use crate::lenient::{parse_date, parse_language, parse_u64};
use crate::model::{Category, Enclosure, Feed, Image, Item, Link, Person};
use crate::namespace::NamespaceHandler;

pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

#[derive(Debug, Clone, Copy, Default)]
pub struct AtomHandler;

impl AtomHandler {
    fn owns(&self, tag: &StartTag) -> bool {
        tag.namespace().trim().is_empty() || self.recognizes(tag.namespace())
    }
}

// ============================================================================
// State machine
// ============================================================================

pub(crate) fn parse_document(cx: &mut ParseContext<'_>, root: &StartTag) -> Result<Feed> {
    let mut feed = Feed::new();
    if let Some(code) = root.xml_lang().and_then(parse_language) {
        feed.set_language(code);
    }
    while let Some(tag) = cx.next_child(root)? {
        match tag.local_name() {
            "entry" if AtomHandler.owns(&tag) => walk_entry(cx, &mut feed, &tag)?,
            _ => cx.dispatch_feed(&AtomHandler, &mut feed, &tag)?,
        }
    }
    Ok(feed)
}

fn walk_entry(cx: &mut ParseContext<'_>, feed: &mut Feed, tag: &StartTag) -> Result<()> {
    let mut item = Item::new();
    cx.with_level(Level::Item, |cx| {
        while let Some(child) = cx.next_child(tag)? {
            cx.dispatch_item(&AtomHandler, &mut item, &child)?;
        }
        Ok(())
    })?;
    feed.add_item(item);
    Ok(())
}

// ============================================================================
// Element table
// ============================================================================

impl NamespaceHandler for AtomHandler {
    fn prefix(&self) -> &'static str {
        "atom"
    }

    fn namespace(&self) -> &'static str {
        ATOM_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "http://purl.org/atom/ns#",
            "https://www.w3.org/2005/Atom",
            "http://www.w3.org/2005/Atom/",
            "http://www.w3.org/2005/atom",
        ]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "id" => feed.set_id(&cx.read_text(tag)?),
            "title" => feed.set_title(&cx.read_text(tag)?),
            "subtitle" | "tagline" => {
                let subtitle = cx.read_text(tag)?;
                feed.set_subtitle(&subtitle);
                feed.set_description(&subtitle);
            }
            "updated" | "modified" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    feed.set_updated(date);
                }
            }
            "link" => {
                let link = read_link(cx, tag);
                cx.skip(tag)?;
                if let Some(link) = link {
                    if is_alternate(&link) {
                        feed.set_link(&link.href);
                    }
                    feed.add_link(link);
                }
            }
            "author" => feed.add_author(read_person(cx, tag)?),
            "contributor" => feed.add_contributor(read_person(cx, tag)?),
            "category" => {
                let category = read_category(tag);
                cx.skip(tag)?;
                feed.add_category(category);
            }
            "generator" => feed.set_generator(&cx.read_text(tag)?),
            "icon" | "logo" => feed.add_image(Image::new(cx.read_text(tag)?)),
            "rights" | "copyright" => feed.set_copyright(&cx.read_text(tag)?),
            "entry" => walk_entry(cx, feed, tag)?,
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
        match tag.local_name() {
            "id" => {
                let id = cx.read_text(tag)?;
                item.set_guid(&id, false);
            }
            "title" => item.set_title(&cx.read_text(tag)?),
            "link" => {
                let link = read_link(cx, tag);
                cx.skip(tag)?;
                match link {
                    Some(link) if link.rel.as_deref() == Some("enclosure") => {
                        item.set_enclosure(Enclosure {
                            url: link.href,
                            mime_type: link.mime_type,
                            length: link.length,
                        });
                    }
                    Some(link) => {
                        if is_alternate(&link) {
                            item.set_link(&link.href);
                        }
                        item.add_link(link);
                    }
                    None => {}
                }
            }
            "published" | "issued" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    item.set_pub_date(date);
                }
            }
            "updated" | "modified" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    item.set_updated(date);
                }
            }
            "summary" => item.set_description(&cx.read_text(tag)?),
            "content" => item.set_content(&cx.read_text(tag)?),
            "author" => item.add_author(read_person(cx, tag)?),
            "contributor" => item.add_contributor(read_person(cx, tag)?),
            "category" => {
                let category = read_category(tag);
                cx.skip(tag)?;
                item.add_category(category);
            }
            "rights" => item.set_copyright(&cx.read_text(tag)?),
            "source" => cx.skip(tag)?,
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

// ============================================================================
// Constructs
// ============================================================================

/// Reads a link from its attributes. Does not move past the element.
fn read_link(cx: &mut ParseContext<'_>, tag: &StartTag) -> Option<Link> {
    let href = tag.attr_trimmed("href")?;
    let mut link = Link::with_rel(href, tag.attr_trimmed("rel").unwrap_or("alternate"));
    link.mime_type = tag.attr_trimmed("type").map(str::to_string);
    link.title = tag.attr_trimmed("title").map(str::to_string);
    link.hreflang = tag.attr_trimmed("hreflang").map(str::to_string);
    link.length = cx.attr_value(tag, "length", parse_u64);
    Some(link)
}

fn is_alternate(link: &Link) -> bool {
    link.rel.as_deref() == Some("alternate")
}

fn read_category(tag: &StartTag) -> Category {
    Category {
        term: tag.attr_trimmed("term").unwrap_or_default().to_string(),
        scheme: tag.attr_trimmed("scheme").map(str::to_string),
        label: tag.attr_trimmed("label").map(str::to_string),
        subcategories: Vec::new(),
    }
}

/// Person construct: `name`, `email` and `uri` children.
fn read_person(cx: &mut ParseContext<'_>, tag: &StartTag) -> Result<Person> {
    let mut person = Person::default();
    while let Some(child) = cx.next_child(tag)? {
        if !AtomHandler.owns(&child) {
            cx.skip_unknown(&child)?;
            continue;
        }
        match child.local_name() {
            "name" => person.set_name(&cx.read_text(&child)?),
            "email" => person.set_email(&cx.read_text(&child)?),
            "uri" | "url" => person.set_uri(&cx.read_text(&child)?),
            _ => cx.skip_unknown(&child)?,
        }
    }
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::FeedParser;
    use pretty_assertions::assert_eq;

    fn parse(xml: &str) -> Feed {
        FeedParser::new().parse(xml.as_bytes()).expect("feed parses")
    }

    #[test]
    fn test_feed_level_fields() {
        let feed = parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="fr-CA">
                <id>urn:uuid:60a76c80</id>
                <title>Atom Show</title>
                <subtitle>Talk</subtitle>
                <updated>2003-12-13T18:30:02Z</updated>
                <link href="https://example.com/"/>
                <link rel="self" href="https://example.com/feed.atom"/>
                <author><name>Jane</name><email>jane@example.com</email></author>
                <category term="tech" scheme="urn:s" label="Technology"/>
                <logo>https://example.com/logo.png</logo>
            </feed>"#,
        );
        assert_eq!(feed.id.as_deref(), Some("urn:uuid:60a76c80"));
        assert_eq!(feed.title.as_deref(), Some("Atom Show"));
        assert_eq!(feed.subtitle.as_deref(), Some("Talk"));
        assert_eq!(feed.description.as_deref(), Some("Talk"));
        assert_eq!(feed.language.as_deref(), Some("fr"));
        assert_eq!(feed.updated.map(|d| d.timestamp()), Some(1_071_340_202));
        assert_eq!(feed.link.as_deref(), Some("https://example.com/"));
        assert_eq!(feed.links.len(), 2);
        assert_eq!(feed.authors[0].name.as_deref(), Some("Jane"));
        assert_eq!(feed.authors[0].email.as_deref(), Some("jane@example.com"));
        assert_eq!(feed.categories[0].label.as_deref(), Some("Technology"));
        assert_eq!(feed.images, vec![Image::new("https://example.com/logo.png")]);
    }

    #[test]
    fn test_entry_enclosure_link() {
        let feed = parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry>
                <id>tag:example.com,2003:1</id>
                <link rel="enclosure" href="http://x/a.mp3" type="audio/mpeg" length="123"/>
                <link href="https://example.com/1"/>
                <published>2003-12-13T08:29:29-04:00</published>
                <summary>Short</summary>
                <content type="html">&lt;p&gt;Long&lt;/p&gt;</content>
            </entry></feed>"#,
        );
        let item = &feed.items[0];
        assert_eq!(
            item.enclosure,
            Some(Enclosure {
                url: "http://x/a.mp3".to_string(),
                mime_type: Some("audio/mpeg".to_string()),
                length: Some(123),
            })
        );
        assert_eq!(item.links, vec![Link::with_rel("https://example.com/1", "alternate")]);
        assert_eq!(item.link.as_deref(), Some("https://example.com/1"));
        assert_eq!(item.guid.as_ref().map(|g| g.is_permalink), Some(false));
        assert_eq!(item.description.as_deref(), Some("Short"));
        assert_eq!(item.content.as_deref(), Some("<p>Long</p>"));
        assert!(item.pub_date.is_some());
    }

    #[test]
    fn test_atom_0_3_namespace() {
        let feed = parse(
            r#"<feed xmlns="http://purl.org/atom/ns#" version="0.3"><title>Old</title>
               <tagline>Legacy</tagline><entry><issued>2004-01-01T00:00:00Z</issued></entry></feed>"#,
        );
        assert_eq!(feed.title.as_deref(), Some("Old"));
        assert_eq!(feed.subtitle.as_deref(), Some("Legacy"));
        assert!(feed.items[0].pub_date.is_some());
    }

    #[test]
    fn test_link_without_href_ignored() {
        let feed = parse(r#"<feed xmlns="http://www.w3.org/2005/Atom"><link rel="self"/></feed>"#);
        assert!(feed.links.is_empty());
        assert!(feed.link.is_none());
    }

    #[test]
    fn test_entry_source_is_skipped() {
        let feed = parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry>
                <source><title>Elsewhere</title></source><title>Mine</title>
            </entry></feed>"#,
        );
        assert_eq!(feed.items[0].title.as_deref(), Some("Mine"));
    }
}
