//! Blubrry PowerPress / RawVoice (`rawvoice:`).

use super::NamespaceHandler;
use crate::error::Result;
use crate::model::{Aggregate, Feed, Image, Item};
use crate::parse::{ParseContext, StartTag};

pub const RAWVOICE_NAMESPACE: &str = "http://www.rawvoice.com/rawvoiceRssModule/";

#[derive(Debug, Clone, Copy, Default)]
pub struct RawVoiceHandler;

impl RawVoiceHandler {
    fn process_common<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<bool> {
        match tag.local_name() {
            "rating" => {
                let tv = tag.attr_trimmed("tv").map(str::to_string);
                let movie = tag.attr_trimmed("movie").map(str::to_string);
                let text = cx.read_text(tag)?;
                if tv.is_some() || movie.is_some() || !text.is_empty() {
                    let rating = target.rating_mut();
                    rating.set_tv(tv.as_deref().unwrap_or_default());
                    rating.set_movie(movie.as_deref().unwrap_or_default());
                    rating.set_media(&text);
                }
            }
            "location" => {
                let location = cx.read_text(tag)?;
                if !location.is_empty() {
                    target.geo_mut().set_feature_name(&location);
                }
            }
            "poster" => {
                let url = tag.attr_trimmed("url").map(str::to_string);
                let text = cx.read_text(tag)?;
                if let Some(url) = url.or_else(|| (!text.is_empty()).then_some(text)) {
                    target.add_image(Image::new(url));
                }
            }
            "embed" | "webm" | "mp4" | "isHd" | "metamark" | "subscribe" | "donate" => {
                cx.skip(tag)?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl NamespaceHandler for RawVoiceHandler {
    fn prefix(&self) -> &'static str {
        "rawvoice"
    }

    fn namespace(&self) -> &'static str {
        RAWVOICE_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "http://www.rawvoice.com/rawvoiceRssModule",
            "https://www.rawvoice.com/rawvoiceRssModule/",
            "http://blubrry.com/developer/rawvoice-rss/",
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
            "frequency" => {
                let frequency = cx.read_text(tag)?;
                if !frequency.is_empty() {
                    feed.update_info_mut().set_description(&frequency);
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
        cx.skip_unknown(tag)
    }
}
