//! RSS 1.0 syndication module (`sy:`): how often the feed is updated.

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::{parse_date, parse_u32};
use crate::model::Feed;
use crate::parse::{ParseContext, StartTag};

pub const SYNDICATION_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/syndication/";

const PERIODS: &[&str] = &["hourly", "daily", "weekly", "monthly", "yearly"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SyndicationHandler;

impl NamespaceHandler for SyndicationHandler {
    fn prefix(&self) -> &'static str {
        "sy"
    }

    fn namespace(&self) -> &'static str {
        SYNDICATION_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["http://purl.org/rss/1.0/modules/syndication"]
    }

    fn process_feed(
        &self,
        cx: &mut ParseContext<'_>,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match tag.local_name() {
            "updatePeriod" => {
                let period = cx.read_value(tag, |raw| {
                    let period = raw.trim().to_ascii_lowercase();
                    PERIODS.contains(&period.as_str()).then_some(period)
                })?;
                if let Some(period) = period {
                    feed.update_info_mut().set_period(&period);
                }
            }
            "updateFrequency" => {
                if let Some(frequency) = cx.read_value(tag, parse_u32)? {
                    feed.update_info_mut().set_frequency(frequency);
                }
            }
            "updateBase" => {
                if let Some(base) = cx.read_value(tag, parse_date)? {
                    feed.update_info_mut().set_base(base);
                }
            }
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}
