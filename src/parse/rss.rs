//! RSS 0.9x / 1.0 / 2.0 root state machine.
//!
//! `<rss>` (or `<rdf:RDF>`) → `channel` → `item`. Everything that is not
//! part of the item loop goes through the dispatch engine with
//! [`RssHandler`] as the current handler, which is also what a foreign
//! handler reaches when it meets an RSS element.

use chrono::Weekday;

use super::{Level, ParseContext, StartTag};
use crate::error::Result;
use crate::lenient::{parse_date, parse_language, parse_u32, parse_u64, parse_yes_no};
use crate::model::{merge_text, merge_value, Category, Enclosure, Feed, Image, Item, Link};
use crate::namespace::NamespaceHandler;

pub const RSS_NAMESPACE: &str = "http://backend.userland.com/rss2";
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Element vocabulary of RSS in all its versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RssHandler;

impl RssHandler {
    /// Unqualified elements, or elements in one of the RSS namespaces.
    fn owns(&self, tag: &StartTag) -> bool {
        tag.namespace().trim().is_empty() || self.recognizes(tag.namespace())
    }
}

// ============================================================================
// State machine
// ============================================================================

/// Walks the children of the root element.
///
/// RSS 1.0 places `item` (and `image`) next to `channel` rather than inside
/// it, so both shapes are accepted here.
pub(crate) fn parse_document(cx: &mut ParseContext<'_>, root: &StartTag) -> Result<Feed> {
    let mut feed = Feed::new();
    while let Some(tag) = cx.next_child(root)? {
        match tag.local_name() {
            "channel" if RssHandler.owns(&tag) => walk_channel(cx, &mut feed, &tag)?,
            "item" if RssHandler.owns(&tag) => walk_item(cx, &mut feed, &tag)?,
            _ => cx.dispatch_feed(&RssHandler, &mut feed, &tag)?,
        }
    }
    Ok(feed)
}

fn walk_channel(cx: &mut ParseContext<'_>, feed: &mut Feed, channel: &StartTag) -> Result<()> {
    if let Some(code) = channel.xml_lang().and_then(parse_language) {
        feed.set_language(code);
    }
    while let Some(tag) = cx.next_child(channel)? {
        match tag.local_name() {
            "item" if RssHandler.owns(&tag) => walk_item(cx, feed, &tag)?,
            _ => cx.dispatch_feed(&RssHandler, feed, &tag)?,
        }
    }
    Ok(())
}

fn walk_item(cx: &mut ParseContext<'_>, feed: &mut Feed, tag: &StartTag) -> Result<()> {
    let mut item = Item::new();
    cx.with_level(Level::Item, |cx| {
        while let Some(child) = cx.next_child(tag)? {
            cx.dispatch_item(&RssHandler, &mut item, &child)?;
        }
        Ok(())
    })?;
    if let Some(about) = tag.attr_ns(RDF_NAMESPACE, "about") {
        item.set_guid(about, true);
    }
    feed.add_item(item);
    Ok(())
}

// ============================================================================
// Element table
// ============================================================================

impl NamespaceHandler for RssHandler {
    fn prefix(&self) -> &'static str {
        "rss"
    }

    fn namespace(&self) -> &'static str {
        RSS_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "http://purl.org/rss/1.0/",
            "http://my.netscape.com/rdf/simple/0.9/",
            "http://blogs.law.harvard.edu/tech/rss",
            "http://purl.org/net/rss1.1#",
        ]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "title" => feed.set_title(&cx.read_text(tag)?),
            "link" => {
                let href = cx.read_text(tag)?;
                feed.set_link(&href);
                feed.add_link(Link::with_rel(href, "alternate"));
            }
            "description" => feed.set_description(&cx.read_text(tag)?),
            "language" => {
                if let Some(code) = cx.read_value(tag, parse_language)? {
                    feed.set_language(code);
                }
            }
            "copyright" => feed.set_copyright(&cx.read_text(tag)?),
            "managingEditor" => feed.set_managing_editor(&cx.read_text(tag)?),
            "webMaster" => feed.set_web_master(&cx.read_text(tag)?),
            "pubDate" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    feed.set_pub_date(date);
                }
            }
            "lastBuildDate" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    feed.set_last_build_date(date);
                }
            }
            "category" => feed.add_category(read_category(cx, tag)?),
            "generator" => feed.set_generator(&cx.read_text(tag)?),
            "docs" => feed.set_docs(&cx.read_text(tag)?),
            "ttl" => {
                if let Some(ttl) = cx.read_value(tag, parse_u32)? {
                    feed.set_ttl(ttl);
                }
            }
            "image" => {
                if let Some(image) = read_image(cx, tag)? {
                    feed.add_image(image);
                }
            }
            "skipHours" => read_skip_hours(cx, feed, tag)?,
            "skipDays" => read_skip_days(cx, feed, tag)?,
            "item" => walk_item(cx, feed, tag)?,
            "cloud" | "textInput" | "textinput" | "rating" | "items" => cx.skip(tag)?,
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
            "title" => item.set_title(&cx.read_text(tag)?),
            "link" => {
                let href = cx.read_text(tag)?;
                item.set_link(&href);
                item.add_link(Link::with_rel(href, "alternate"));
            }
            "description" => item.set_description(&cx.read_text(tag)?),
            "author" => item.set_author(&cx.read_text(tag)?),
            "category" => item.add_category(read_category(cx, tag)?),
            "comments" => {
                let url = cx.read_text(tag)?;
                if !url.is_empty() {
                    item.comments_mut().set_url(&url);
                }
            }
            "enclosure" => {
                let enclosure = Enclosure {
                    url: tag.attr_trimmed("url").unwrap_or_default().to_string(),
                    mime_type: tag.attr_trimmed("type").map(str::to_string),
                    length: cx.attr_value(tag, "length", parse_u64),
                };
                cx.skip(tag)?;
                item.set_enclosure(enclosure);
            }
            "guid" => {
                let is_permalink = tag
                    .attr("isPermaLink")
                    .and_then(parse_yes_no)
                    .unwrap_or(true);
                let value = cx.read_text(tag)?;
                item.set_guid(&value, is_permalink);
            }
            "pubDate" => {
                if let Some(date) = cx.read_value(tag, parse_date)? {
                    item.set_pub_date(date);
                }
            }
            "source" => {
                let url = tag.attr_trimmed("url").map(str::to_string);
                let title = cx.read_text(tag)?;
                if let Some(url) = url {
                    let mut source = Link::new(url);
                    merge_text(&mut source.title, &title);
                    item.set_source(source);
                }
            }
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

// ============================================================================
// Sub-walks
// ============================================================================

fn read_category(cx: &mut ParseContext<'_>, tag: &StartTag) -> Result<Category> {
    let domain = tag.attr_trimmed("domain").map(str::to_string);
    let mut category = Category::new(cx.read_text(tag)?);
    if let Some(domain) = domain {
        category = category.with_scheme(domain);
    }
    Ok(category)
}

/// Returns `None` when the image has no URL.
fn read_image(cx: &mut ParseContext<'_>, tag: &StartTag) -> Result<Option<Image>> {
    let mut image = Image::default();
    let mut url = None;
    while let Some(child) = cx.next_child(tag)? {
        if !RssHandler.owns(&child) {
            cx.skip_unknown(&child)?;
            continue;
        }
        match child.local_name() {
            "url" => merge_text(&mut url, &cx.read_text(&child)?),
            "title" => merge_text(&mut image.title, &cx.read_text(&child)?),
            "link" => merge_text(&mut image.link, &cx.read_text(&child)?),
            "description" => merge_text(&mut image.description, &cx.read_text(&child)?),
            "width" => {
                if let Some(width) = cx.read_value(&child, parse_u32)? {
                    merge_value(&mut image.width, width);
                }
            }
            "height" => {
                if let Some(height) = cx.read_value(&child, parse_u32)? {
                    merge_value(&mut image.height, height);
                }
            }
            _ => cx.skip_unknown(&child)?,
        }
    }
    // RSS 1.0 channels point at the image with rdf:resource.
    let url = url.or_else(|| {
        tag.attr_ns(RDF_NAMESPACE, "resource")
            .or_else(|| tag.attr_ns(RDF_NAMESPACE, "about"))
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
    });
    Ok(url.map(|url| Image { url, ..image }))
}

fn read_skip_hours(cx: &mut ParseContext<'_>, feed: &mut Feed, tag: &StartTag) -> Result<()> {
    while let Some(child) = cx.next_child(tag)? {
        if child.local_name() == "hour" && RssHandler.owns(&child) {
            let hour = cx.read_value(&child, |raw| parse_u32(raw).filter(|h| *h < 24))?;
            if let Some(hour) = hour.and_then(|h| u8::try_from(h).ok()) {
                feed.add_skip_hour(hour);
            }
        } else {
            cx.skip_unknown(&child)?;
        }
    }
    Ok(())
}

fn read_skip_days(cx: &mut ParseContext<'_>, feed: &mut Feed, tag: &StartTag) -> Result<()> {
    while let Some(child) = cx.next_child(tag)? {
        if child.local_name() == "day" && RssHandler.owns(&child) {
            let day = cx.read_value(&child, |raw| raw.trim().parse::<Weekday>().ok())?;
            if let Some(day) = day {
                feed.add_skip_day(day);
            }
        } else {
            cx.skip_unknown(&child)?;
        }
    }
    Ok(())
}
