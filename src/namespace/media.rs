//! Media RSS (`media:`).
//!
//! `media:content` and `media:group` are containers: their optional
//! children (`media:thumbnail`, `media:title`, ...) describe the enclosing
//! episode and are dispatched back through the engine one by one, so a
//! foreign element nested inside a group still reaches its own handler.

use std::time::Duration;

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::{parse_f64, parse_language, parse_u32, parse_u64, parse_yes_no};
use crate::model::{Aggregate, Category, Feed, Image, Item, MediaContent, Person};
use crate::parse::{ParseContext, StartTag};

pub const MEDIA_NAMESPACE: &str = "http://search.yahoo.com/mrss/";

/// Part of the vocabulary, not part of the model.
const IGNORED: &[&str] = &[
    "player",
    "hash",
    "restriction",
    "community",
    "comments",
    "embed",
    "responses",
    "backLinks",
    "status",
    "price",
    "subTitle",
    "peerLink",
    "location",
    "rights",
    "scenes",
    "text",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaHandler;

impl MediaHandler {
    fn process_common<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<bool> {
        match tag.local_name() {
            "thumbnail" => {
                let image = tag.attr_trimmed("url").map(|url| Image {
                    width: cx.attr_value(tag, "width", parse_u32),
                    height: cx.attr_value(tag, "height", parse_u32),
                    ..Image::new(url)
                });
                cx.skip(tag)?;
                if let Some(image) = image {
                    target.add_image(image);
                }
            }
            "title" => target.set_title(&cx.read_text(tag)?),
            "description" => target.set_description(&cx.read_text(tag)?),
            "keywords" => target.add_keywords(&cx.read_text(tag)?),
            "rating" => {
                let scheme = tag.attr_trimmed("scheme").map(str::to_string);
                let rating = cx.read_text(tag)?;
                if !rating.is_empty() {
                    let target = target.rating_mut();
                    target.set_media(&rating);
                    if let Some(scheme) = scheme {
                        target.set_scheme(&scheme);
                    }
                }
            }
            "credit" => {
                let role = tag.attr_trimmed("role").map(str::to_string);
                let mut person = Person::named(&cx.read_text(tag)?);
                if let Some(role) = role {
                    person.set_role(&role);
                }
                target.add_contributor(person);
            }
            "category" => {
                let scheme = tag.attr_trimmed("scheme").map(str::to_string);
                let label = tag.attr_trimmed("label").map(str::to_string);
                let category = Category {
                    scheme,
                    label,
                    ..Category::new(cx.read_text(tag)?)
                };
                target.add_category(category);
            }
            "copyright" => target.set_copyright(&cx.read_text(tag)?),
            "license" => {
                let href = tag.attr_trimmed("href").map(str::to_string);
                let text = cx.read_text(tag)?;
                if href.is_some() || !text.is_empty() {
                    let license = target.license_mut();
                    license.set_url(href.as_deref().unwrap_or_default());
                    license.set_text(&text);
                }
            }
            name if IGNORED.contains(&name) => cx.skip(tag)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn read_content(&self, cx: &mut ParseContext<'_>, tag: &StartTag) -> MediaContent {
        let attr = |name: &str| tag.attr_trimmed(name).map(str::to_string);
        MediaContent {
            url: attr("url"),
            mime_type: attr("type"),
            medium: attr("medium"),
            language: cx.attr_value(tag, "lang", parse_language),
            file_size: cx.attr_value(tag, "fileSize", parse_u64),
            duration: cx.attr_value(tag, "duration", |raw| {
                parse_f64(raw).and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            }),
            bitrate: cx.attr_value(tag, "bitrate", parse_f64),
            width: cx.attr_value(tag, "width", parse_u32),
            height: cx.attr_value(tag, "height", parse_u32),
            is_default: cx.attr_value(tag, "isDefault", parse_yes_no),
        }
    }
}

impl NamespaceHandler for MediaHandler {
    fn prefix(&self) -> &'static str {
        "media"
    }

    fn namespace(&self) -> &'static str {
        MEDIA_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "http://search.yahoo.com/mrss",
            "https://search.yahoo.com/mrss/",
            "http://search.yahoo.com/rss/",
            "http://tools.search.yahoo.com/mrss/",
        ]
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
            "group" | "content" => {
                while let Some(child) = cx.next_child(tag)? {
                    cx.dispatch_feed(self, feed, &child)?;
                }
            }
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
            "content" => {
                let content = self.read_content(cx, tag);
                while let Some(child) = cx.next_child(tag)? {
                    cx.dispatch_item(self, item, &child)?;
                }
                item.add_media(content);
            }
            "group" => {
                while let Some(child) = cx.next_child(tag)? {
                    cx.dispatch_item(self, item, &child)?;
                }
            }
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}
