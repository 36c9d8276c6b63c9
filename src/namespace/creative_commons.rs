//! Creative Commons license references.
//!
//! Two vocabularies are in use: the Userland RSS module puts the license URL
//! in the element text, the RDF one in an `rdf:resource` attribute.

use super::NamespaceHandler;
use crate::error::Result;
use crate::model::{Aggregate, Feed, Item};
use crate::parse::{ParseContext, StartTag, RDF_NAMESPACE};

pub const CREATIVE_COMMONS_NAMESPACE: &str =
    "http://backend.userland.com/creativeCommonsRssModule";
pub const CC_NAMESPACE: &str = "http://web.resource.org/cc/";

fn read_license<T: Aggregate>(
    cx: &mut ParseContext<'_>,
    target: &mut T,
    tag: &StartTag,
) -> Result<()> {
    let resource = tag
        .attr_ns(RDF_NAMESPACE, "resource")
        .or_else(|| tag.attr("resource"))
        .map(|url| url.trim().to_string());
    let text = cx.read_text(tag)?;
    let url = resource.filter(|url| !url.is_empty()).unwrap_or(text);
    if !url.is_empty() {
        target.license_mut().set_url(&url);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreativeCommonsHandler;

impl NamespaceHandler for CreativeCommonsHandler {
    fn prefix(&self) -> &'static str {
        "creativeCommons"
    }

    fn namespace(&self) -> &'static str {
        CREATIVE_COMMONS_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["http://backend.userland.com/creativeCommonsRssModule/"]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "license" => read_license(cx, feed, tag),
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
            "license" => read_license(cx, item, tag),
            _ => cx.skip_unknown(tag),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CcHandler;

impl NamespaceHandler for CcHandler {
    fn prefix(&self) -> &'static str {
        "cc"
    }

    fn namespace(&self) -> &'static str {
        CC_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["http://web.resource.org/cc", "http://creativecommons.org/ns#"]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "license" => read_license(cx, feed, tag),
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
            "license" => read_license(cx, item, tag),
            _ => cx.skip_unknown(tag),
        }
    }
}
