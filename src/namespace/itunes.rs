//! Apple Podcasts (`itunes:`) tags.

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::{parse_duration_with, parse_u32, parse_yes_no};
use crate::model::{Aggregate, Category, Feed, Image, Item, Person};
use crate::parse::{ParseContext, StartTag};

pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

#[derive(Debug, Clone, Copy, Default)]
pub struct ItunesHandler;

impl ItunesHandler {
    fn owns(&self, tag: &StartTag) -> bool {
        tag.namespace().trim().is_empty() || self.recognizes(tag.namespace())
    }

    /// Elements with the same meaning on channels and episodes. Returns
    /// `false` without touching the cursor when `tag` is not one of them.
    fn process_common<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<bool> {
        match tag.local_name() {
            "author" => target.set_author(&cx.read_text(tag)?),
            "subtitle" => target.set_subtitle(&cx.read_text(tag)?),
            "summary" => target.set_summary(&cx.read_text(tag)?),
            "title" => target.set_title(&cx.read_text(tag)?),
            "keywords" => target.add_keywords(&cx.read_text(tag)?),
            "block" => {
                if let Some(block) = cx.read_value(tag, parse_yes_no)? {
                    target.set_block(block);
                }
            }
            "explicit" => target.set_explicit(&cx.read_text(tag)?),
            "image" => {
                let href = tag.attr_trimmed("href").or_else(|| tag.attr_trimmed("url"));
                let href = href.map(str::to_string);
                let text = cx.read_text(tag)?;
                // Some publishers put the URL in the text instead.
                if let Some(url) = href.or_else(|| (!text.is_empty()).then_some(text)) {
                    target.add_image(Image::new(url));
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// `itunes:category` with its nested subcategories.
    fn read_category(
        &self,
        cx: &mut ParseContext<'_>,
        tag: &StartTag,
    ) -> Result<Option<Category>> {
        let term = tag.attr_trimmed("text").map(str::to_string);
        let mut subcategories = Vec::new();
        while let Some(child) = cx.next_child(tag)? {
            if child.local_name() == "category" && self.owns(&child) {
                if let Some(sub) = child.attr_trimmed("text") {
                    subcategories.push(sub.to_string());
                }
                cx.skip(&child)?;
            } else {
                cx.skip_unknown(&child)?;
            }
        }
        Ok(term.map(|term| Category {
            subcategories,
            ..Category::new(term).with_scheme(ITUNES_NAMESPACE)
        }))
    }

    fn read_owner(&self, cx: &mut ParseContext<'_>, tag: &StartTag) -> Result<Person> {
        let mut owner = Person::default();
        while let Some(child) = cx.next_child(tag)? {
            if !self.owns(&child) {
                cx.skip_unknown(&child)?;
                continue;
            }
            match child.local_name() {
                "name" => owner.set_name(&cx.read_text(&child)?),
                "email" => owner.set_email(&cx.read_text(&child)?),
                _ => cx.skip_unknown(&child)?,
            }
        }
        Ok(owner)
    }
}

impl NamespaceHandler for ItunesHandler {
    fn prefix(&self) -> &'static str {
        "itunes"
    }

    fn namespace(&self) -> &'static str {
        ITUNES_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "https://www.itunes.com/dtds/podcast-1.0.dtd",
            "http://www.itunes.com/dtds/podcast-1.0.dtd/",
            "http://www.itunes.com/dtds/podcast.dtd",
            "http://itunes.apple.com/dtds/podcast-1.0.dtd",
            "https://itunes.apple.com/dtds/podcast-1.0.dtd",
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
                if let Some(category) = self.read_category(cx, tag)? {
                    feed.add_category(category);
                }
            }
            "owner" => {
                let owner = self.read_owner(cx, tag)?;
                feed.set_owner(owner);
            }
            "new-feed-url" => feed.set_new_feed_url(&cx.read_text(tag)?),
            "type" => feed.set_show_type(&cx.read_text(tag)?.to_ascii_lowercase()),
            "complete" => {
                if let Some(complete) = cx.read_value(tag, parse_yes_no)? {
                    feed.set_complete(complete);
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
            "duration" => {
                let overflow = cx.config().duration_overflow;
                let duration = cx.read_value(tag, |raw| parse_duration_with(raw, overflow))?;
                if let Some(duration) = duration {
                    item.set_duration(duration);
                }
            }
            "episode" => {
                if let Some(episode) = cx.read_value(tag, parse_u32)? {
                    item.set_episode(episode);
                }
            }
            "season" => {
                if let Some(season) = cx.read_value(tag, parse_u32)? {
                    item.set_season(season);
                }
            }
            "episodeType" => item.set_episode_type(&cx.read_text(tag)?.to_ascii_lowercase()),
            "isClosedCaptioned" | "order" => cx.skip(tag)?,
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}
