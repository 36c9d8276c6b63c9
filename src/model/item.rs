use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{
    insert_unique, merge_value, text_setters, value_setters, Category, Comments, Enclosure, Geo,
    Guid, Image, License, Link, MediaContent, Person, Rating, Transcript,
};

/// Episode-level aggregate, structurally parallel to [`Feed`](super::Feed).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    /// Full body (`content:encoded`, Atom `content`).
    pub content: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub copyright: Option<String>,
    /// `full`, `trailer` or `bonus`.
    pub episode_type: Option<String>,
    pub chapters_url: Option<String>,

    pub guid: Option<Guid>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub duration: Option<Duration>,
    pub episode: Option<u32>,
    pub season: Option<u32>,
    pub block: Option<bool>,

    pub enclosure: Option<Enclosure>,
    pub source: Option<Link>,
    pub rating: Option<Rating>,
    pub comments: Option<Comments>,
    pub geo: Option<Geo>,
    pub license: Option<License>,

    pub links: Vec<Link>,
    pub categories: Vec<Category>,
    pub keywords: Vec<String>,
    pub images: Vec<Image>,
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,
    pub media: Vec<MediaContent>,
    pub transcripts: Vec<Transcript>,
}

text_setters!(Item {
    title => set_title,
    link => set_link,
    description => set_description,
    content => set_content,
    subtitle => set_subtitle,
    summary => set_summary,
    author => set_author,
    copyright => set_copyright,
    episode_type => set_episode_type,
    chapters_url => set_chapters_url,
});

value_setters!(Item {
    pub_date: DateTime<FixedOffset> => set_pub_date,
    updated: DateTime<FixedOffset> => set_updated,
    duration: Duration => set_duration,
    episode: u32 => set_episode,
    season: u32 => set_season,
    block: bool => set_block,
    source: Link => set_source,
});

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_guid(&mut self, value: &str, is_permalink: bool) {
        let value = value.trim();
        if !value.is_empty() {
            merge_value(
                &mut self.guid,
                Guid {
                    value: value.to_string(),
                    is_permalink,
                },
            );
        }
    }

    /// The first enclosure with a URL wins; podcast clients play one file.
    pub fn set_enclosure(&mut self, enclosure: Enclosure) {
        if enclosure.url.trim().is_empty() {
            return;
        }
        if self.enclosure.is_some() {
            tracing::debug!(url = %enclosure.url, "Ignoring additional enclosure");
            return;
        }
        self.enclosure = Some(enclosure);
    }

    /// Records the explicit flag, leaving `rating` untouched for blank input.
    pub fn set_explicit(&mut self, value: &str) {
        if !value.trim().is_empty() {
            self.rating_mut().set_explicit(value);
        }
    }

    pub fn rating_mut(&mut self) -> &mut Rating {
        self.rating.get_or_insert_with(Rating::default)
    }

    pub fn comments_mut(&mut self) -> &mut Comments {
        self.comments.get_or_insert_with(Comments::default)
    }

    pub fn geo_mut(&mut self) -> &mut Geo {
        self.geo.get_or_insert_with(Geo::default)
    }

    pub fn license_mut(&mut self) -> &mut License {
        self.license.get_or_insert_with(License::default)
    }

    pub fn add_link(&mut self, link: Link) {
        if !link.href.trim().is_empty() {
            insert_unique(&mut self.links, link);
        }
    }

    pub fn add_category(&mut self, category: Category) {
        if !category.term.trim().is_empty() {
            insert_unique(&mut self.categories, category);
        }
    }

    pub fn add_keywords(&mut self, raw: &str) {
        for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            insert_unique(&mut self.keywords, keyword.to_string());
        }
    }

    pub fn add_image(&mut self, image: Image) {
        if !image.url.trim().is_empty() {
            self.images.push(image);
        }
    }

    pub fn add_author(&mut self, person: Person) {
        if !person.is_empty() {
            self.authors.push(person);
        }
    }

    pub fn add_contributor(&mut self, person: Person) {
        if !person.is_empty() {
            self.contributors.push(person);
        }
    }

    pub fn add_media(&mut self, media: MediaContent) {
        self.media.push(media);
    }

    pub fn add_transcript(&mut self, transcript: Transcript) {
        if !transcript.url.trim().is_empty() {
            self.transcripts.push(transcript);
        }
    }
}
