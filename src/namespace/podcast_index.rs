//! Podcasting 2.0 (`podcast:`) tags from the Podcast Index namespace.

use super::NamespaceHandler;
use crate::error::Result;
use crate::lenient::{parse_language, parse_u32, parse_yes_no};
use crate::model::{Aggregate, Feed, Item, Link, Person, Transcript};
use crate::parse::{ParseContext, StartTag};

pub const PODCAST_INDEX_NAMESPACE: &str = "https://podcastindex.org/namespace/1.0";

#[derive(Debug, Clone, Copy, Default)]
pub struct PodcastIndexHandler;

impl PodcastIndexHandler {
    fn process_common<T: Aggregate>(
        &self,
        cx: &mut ParseContext<'_>,
        target: &mut T,
        tag: &StartTag,
    ) -> Result<bool> {
        match tag.local_name() {
            "person" => {
                let role = tag.attr_trimmed("role").unwrap_or("host").to_ascii_lowercase();
                let href = tag.attr_trimmed("href").map(str::to_string);
                let mut person = Person::named(&cx.read_text(tag)?);
                person.set_role(&role);
                if let Some(href) = href {
                    person.set_uri(&href);
                }
                target.add_contributor(person);
            }
            "location" => {
                let location = cx.read_text(tag)?;
                if !location.is_empty() {
                    target.geo_mut().set_feature_name(&location);
                }
            }
            "license" => {
                let url = tag.attr_trimmed("url").map(str::to_string);
                let text = cx.read_text(tag)?;
                if url.is_some() || !text.is_empty() {
                    let license = target.license_mut();
                    license.set_url(url.as_deref().unwrap_or_default());
                    license.set_text(&text);
                }
            }
            "images" | "value" | "socialInteract" | "txt" | "podroll" | "liveItem"
            | "updateFrequency" | "podping" | "trailer" | "alternateEnclosure" | "soundbite" => {
                cx.skip(tag)?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl NamespaceHandler for PodcastIndexHandler {
    fn prefix(&self) -> &'static str {
        "podcast"
    }

    fn namespace(&self) -> &'static str {
        PODCAST_INDEX_NAMESPACE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "https://podcastindex.org/namespace/1.0/",
            "http://podcastindex.org/namespace/1.0",
            "https://github.com/Podcastindex-org/podcast-namespace/blob/main/docs/1.0.md",
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
            "locked" => {
                let owner = tag.attr_trimmed("owner").map(str::to_string);
                if let Some(locked) = cx.read_value(tag, parse_yes_no)? {
                    feed.set_locked(locked);
                }
                if let Some(owner) = owner {
                    feed.owner_mut().set_email(&owner);
                }
            }
            "funding" => {
                let url = tag.attr_trimmed("url").map(str::to_string);
                let title = cx.read_text(tag)?;
                if let Some(url) = url {
                    let mut link = Link::with_rel(url, "payment");
                    link.title = (!title.is_empty()).then_some(title);
                    feed.add_link(link);
                }
            }
            "guid" => feed.set_id(&cx.read_text(tag)?),
            "medium" => feed.set_medium(&cx.read_text(tag)?.to_ascii_lowercase()),
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
            "transcript" => {
                let transcript = tag.attr_trimmed("url").map(|url| Transcript {
                    url: url.to_string(),
                    mime_type: tag.attr_trimmed("type").map(str::to_string),
                    language: cx.attr_value(tag, "language", parse_language),
                    rel: tag.attr_trimmed("rel").map(str::to_string),
                });
                cx.skip(tag)?;
                if let Some(transcript) = transcript {
                    item.add_transcript(transcript);
                }
            }
            "chapters" => {
                if let Some(url) = tag.attr_trimmed("url").map(str::to_string) {
                    item.set_chapters_url(&url);
                }
                cx.skip(tag)?;
            }
            "season" => {
                if let Some(season) = cx.read_value(tag, parse_u32)? {
                    item.set_season(season);
                }
            }
            "episode" => {
                // Fractional episode numbers exist; only whole ones are kept.
                if let Some(episode) = cx.read_value(tag, parse_u32)? {
                    item.set_episode(episode);
                }
            }
            _ => cx.skip_unknown(tag)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Transcript;
    use crate::parse::{FeedParser, Level};
    use pretty_assertions::assert_eq;

    fn channel_xml(body: &str) -> String {
        format!(
            r#"<rss xmlns:podcast="https://podcastindex.org/namespace/1.0"><channel>{body}</channel></rss>"#
        )
    }

    #[test]
    fn test_channel_tags() {
        let xml = channel_xml(
            r#"<podcast:locked owner="jane@example.com">yes</podcast:locked>
               <podcast:funding url="https://example.com/donate">Support the show</podcast:funding>
               <podcast:guid>917393e3-1b1e-5cef-ace4-edaa54e1f810</podcast:guid>
               <podcast:medium>Music</podcast:medium>
               <podcast:person role="Host" href="https://example.com/jane">Jane</podcast:person>"#,
        );
        let feed = FeedParser::new().parse(xml.as_bytes()).unwrap();
        assert_eq!(feed.locked, Some(true));
        assert_eq!(
            feed.owner.as_ref().and_then(|o| o.email.as_deref()),
            Some("jane@example.com")
        );
        assert_eq!(feed.links[0].rel.as_deref(), Some("payment"));
        assert_eq!(feed.links[0].title.as_deref(), Some("Support the show"));
        assert_eq!(feed.id.as_deref(), Some("917393e3-1b1e-5cef-ace4-edaa54e1f810"));
        assert_eq!(feed.medium.as_deref(), Some("music"));
        assert_eq!(feed.contributors[0].role.as_deref(), Some("host"));
        assert_eq!(feed.contributors[0].uri.as_deref(), Some("https://example.com/jane"));
    }

    #[test]
    fn test_item_tags() {
        let xml = channel_xml(
            r#"<item>
                <podcast:transcript url="https://example.com/1.vtt" type="text/vtt" language="en"/>
                <podcast:chapters url="https://example.com/1.json" type="application/json+chapters"/>
                <podcast:season>2</podcast:season>
                <podcast:episode>3</podcast:episode>
            </item>"#,
        );
        let feed = FeedParser::new().parse(xml.as_bytes()).unwrap();
        let item = &feed.items[0];
        assert_eq!(
            item.transcripts,
            vec![Transcript {
                url: "https://example.com/1.vtt".to_string(),
                mime_type: Some("text/vtt".to_string()),
                language: Some("en".to_string()),
                rel: None,
            }]
        );
        assert_eq!(item.chapters_url.as_deref(), Some("https://example.com/1.json"));
        assert_eq!(item.season, Some(2));
        assert_eq!(item.episode, Some(3));
    }

    #[test]
    fn test_fractional_episode_is_diagnosed_at_item_level() {
        let xml = channel_xml("<item><podcast:episode>3.5</podcast:episode></item>");
        let output = FeedParser::new().parse_with_diagnostics(xml.as_bytes()).unwrap();
        assert_eq!(output.feed.items[0].episode, None);
        let diagnostic = &output.diagnostics.entries()[0];
        assert_eq!(diagnostic.local_name(), "episode");
        assert!(matches!(
            diagnostic,
            crate::parse::Diagnostic::InvalidValue { level: Level::Item, .. }
        ));
    }
}
