//! Comment discovery: Well-Formed Web (`wfw:`) and Slash (`slash:`).

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::parse_u64;
use crate::model::Item;
use crate::parse::{ParseContext, StartTag};

pub const WFW_NAMESPACE: &str = "http://wellformedweb.org/CommentAPI/";
pub const SLASH_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/slash/";

#[derive(Debug, Clone, Copy, Default)]
pub struct WellFormedWebHandler;

impl NamespaceHandler for WellFormedWebHandler {
    fn prefix(&self) -> &'static str {
        "wfw"
    }

    fn namespace(&self) -> &'static str {
        WFW_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["http://wellformedweb.org/CommentAPI"]
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "commentRss" | "commentRSS" => {
                let url = cx.read_text(tag)?;
                if !url.is_empty() {
                    item.comments_mut().set_feed_url(&url);
                }
            }
            "comment" => {
                let url = cx.read_text(tag)?;
                if !url.is_empty() {
                    item.comments_mut().set_url(&url);
                }
            }
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SlashHandler;

impl NamespaceHandler for SlashHandler {
    fn prefix(&self) -> &'static str {
        "slash"
    }

    fn namespace(&self) -> &'static str {
        SLASH_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["http://purl.org/rss/1.0/modules/slash"]
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "comments" => {
                if let Some(count) = cx.read_value(tag, parse_u64)? {
                    item.comments_mut().set_count(count);
                }
            }
            "section" | "department" | "hit_parade" => cx.skip(tag)?,
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}
