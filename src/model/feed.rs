use chrono::{DateTime, FixedOffset, Weekday};
use serde::Serialize;

use super::{
    insert_unique, text_setters, value_setters, Category, Geo, Image, Item, License, Link, Person,
    Rating, UpdateInfo,
};

/// Channel-level aggregate: one per parsed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feed {
    pub title: Option<String>,
    /// Primary website of the show.
    pub link: Option<String>,
    pub description: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    /// Validated ISO 639-1 code.
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub managing_editor: Option<String>,
    pub web_master: Option<String>,
    pub generator: Option<String>,
    pub docs: Option<String>,
    /// Free-text author credit (`itunes:author` and friends).
    pub author: Option<String>,
    /// Stable identifier: Atom `id` or `podcast:guid`.
    pub id: Option<String>,
    pub new_feed_url: Option<String>,
    /// `episodic` or `serial`.
    pub show_type: Option<String>,
    pub medium: Option<String>,

    pub pub_date: Option<DateTime<FixedOffset>>,
    pub last_build_date: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    /// Minutes a client may cache the feed.
    pub ttl: Option<u32>,
    pub block: Option<bool>,
    pub complete: Option<bool>,
    pub locked: Option<bool>,
    pub skip_hours: Vec<u8>,
    pub skip_days: Vec<Weekday>,

    pub owner: Option<Person>,
    pub rating: Option<Rating>,
    pub update_info: Option<UpdateInfo>,
    pub geo: Option<Geo>,
    pub license: Option<License>,

    pub links: Vec<Link>,
    pub categories: Vec<Category>,
    pub keywords: Vec<String>,
    pub images: Vec<Image>,
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,

    /// Episodes in document order.
    pub items: Vec<Item>,
}

text_setters!(Feed {
    title => set_title,
    link => set_link,
    description => set_description,
    subtitle => set_subtitle,
    summary => set_summary,
    copyright => set_copyright,
    managing_editor => set_managing_editor,
    web_master => set_web_master,
    generator => set_generator,
    docs => set_docs,
    author => set_author,
    id => set_id,
    new_feed_url => set_new_feed_url,
    show_type => set_show_type,
    medium => set_medium,
});

value_setters!(Feed {
    pub_date: DateTime<FixedOffset> => set_pub_date,
    last_build_date: DateTime<FixedOffset> => set_last_build_date,
    updated: DateTime<FixedOffset> => set_updated,
    ttl: u32 => set_ttl,
    block: bool => set_block,
    complete: bool => set_complete,
    locked: bool => set_locked,
});

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already validated language code (see
    /// [`parse_language`](crate::lenient::parse_language)).
    pub fn set_language(&mut self, code: String) {
        super::merge_value(&mut self.language, code);
    }

    /// Merges `owner` into the current owner field by field, so each
    /// source can contribute what the others left out.
    pub fn set_owner(&mut self, owner: Person) {
        if !owner.is_empty() {
            self.owner_mut().merge(owner);
        }
    }

    pub fn owner_mut(&mut self) -> &mut Person {
        self.owner.get_or_insert_with(Person::default)
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

    pub fn update_info_mut(&mut self) -> &mut UpdateInfo {
        self.update_info.get_or_insert_with(UpdateInfo::default)
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

    /// Adds each comma-separated keyword once.
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

    pub fn add_skip_hour(&mut self, hour: u8) {
        if hour < 24 {
            insert_unique(&mut self.skip_hours, hour);
        }
    }

    pub fn add_skip_day(&mut self, day: Weekday) {
        insert_unique(&mut self.skip_days, day);
    }

    /// Appends a finished episode.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}
