//! GeoRSS-Simple (`georss:`) location tags.
//!
//! Coordinates are all-or-nothing: a `point` or `box` with the wrong number
//! of tokens leaves the geo fields untouched and is reported as an invalid
//! value. `line`, `polygon` and GML `where` are recognised but not modelled.

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::{parse_box, parse_f64, parse_point};
use crate::model::{Aggregate, Feed, Item};
use crate::parse::{ParseContext, StartTag};

pub const GEORSS_NAMESPACE: &str = "http://www.georss.org/georss";

#[derive(Debug, Clone, Copy, Default)]
pub struct GeoRssHandler;

impl GeoRssHandler {
    fn process<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "point" => {
                if let Some(point) = cx.read_value(tag, parse_point)? {
                    target.geo_mut().set_point(point);
                }
            }
            "box" => {
                if let Some(bounds) = cx.read_value(tag, parse_box)? {
                    target.geo_mut().set_bounding_box(bounds);
                }
            }
            "elev" => {
                if let Some(elevation) = cx.read_value(tag, parse_f64)? {
                    target.geo_mut().set_elevation(elevation);
                }
            }
            "radius" => {
                if let Some(radius) = cx.read_value(tag, parse_f64)? {
                    target.geo_mut().set_radius(radius);
                }
            }
            "featurename" | "featureName" => {
                let name = cx.read_text(tag)?;
                if !name.is_empty() {
                    target.geo_mut().set_feature_name(&name);
                }
            }
            "featuretypetag" | "featureTypeTag" => {
                let kind = cx.read_text(tag)?;
                if !kind.is_empty() {
                    target.geo_mut().set_feature_type(&kind);
                }
            }
            "relationshiptag" | "relationshipTag" => {
                let relationship = cx.read_text(tag)?;
                if !relationship.is_empty() {
                    target.geo_mut().set_relationship(&relationship);
                }
            }
            "line" | "polygon" | "where" => cx.skip(tag)?,
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

impl NamespaceHandler for GeoRssHandler {
    fn prefix(&self) -> &'static str {
        "georss"
    }

    fn namespace(&self) -> &'static str {
        GEORSS_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "http://www.georss.org/georss/",
            "https://www.georss.org/georss",
            "http://www.georss.org/georss/10",
        ]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        self.process(cx, feed, tag)
    }

    fn process_item(
        &self,
        cx: &mut ParseContext<'_>,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        self.process(cx, item, tag)
    }
}
