//! Google Podcasts (`googleplay:`) tags.

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::parse_yes_no;
use crate::model::{Aggregate, Category, Feed, Image, Item};
use crate::parse::{ParseContext, StartTag};

pub const GOOGLE_PLAY_NAMESPACE: &str = "http://www.google.com/schemas/play-podcasts/1.0";

#[derive(Debug, Clone, Copy, Default)]
pub struct GooglePlayHandler;

impl GooglePlayHandler {
    fn process_common<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<bool> {
        match tag.local_name() {
            "author" => target.set_author(&cx.read_text(tag)?),
            "description" => target.set_description(&cx.read_text(tag)?),
            "block" => {
                if let Some(block) = cx.read_value(tag, parse_yes_no)? {
                    target.set_block(block);
                }
            }
            "explicit" => target.set_explicit(&cx.read_text(tag)?),
            "image" => {
                let href = tag.attr_trimmed("href").map(str::to_string);
                cx.skip(tag)?;
                if let Some(href) = href {
                    target.add_image(Image::new(href));
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl NamespaceHandler for GooglePlayHandler {
    fn prefix(&self) -> &'static str {
        "googleplay"
    }

    fn namespace(&self) -> &'static str {
        GOOGLE_PLAY_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "https://www.google.com/schemas/play-podcasts/1.0",
            "http://www.google.com/schemas/play-podcasts/1.0/",
            "https://www.google.com/schemas/play-podcasts/1.0/",
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
            "category" => {
                let term = tag.attr_trimmed("text").map(str::to_string);
                cx.skip(tag)?;
                if let Some(term) = term {
                    feed.add_category(Category::new(term).with_scheme(GOOGLE_PLAY_NAMESPACE));
                }
            }
            "owner" | "email" => {
                let email = cx.read_text(tag)?;
                if !email.is_empty() {
                    feed.owner_mut().set_email(&email);
                }
            }
            "new-feed-url" => feed.set_new_feed_url(&cx.read_text(tag)?),
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
        if !self.process_common(cx, item, tag)? {
            cx.skip_unknown(tag)?;
        }
        Ok(())
    }
}
