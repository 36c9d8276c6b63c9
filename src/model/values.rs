use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{merge_text, merge_value, text_setters, value_setters};
use crate::lenient::{GeoBox, GeoPoint};

/// A hyperlink. Atom `link` elements map here one-to-one; RSS and vendor
/// elements fill in what they have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: Option<String>,
    pub mime_type: Option<String>,
    pub title: Option<String>,
    pub hreflang: Option<String>,
    pub length: Option<u64>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// A link with the given relation.
    pub fn with_rel(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            rel: Some(rel.into()),
            ..Self::new(href)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    pub term: String,
    /// RSS `domain`, Atom `scheme`, or the namespace a vendor category came from.
    pub scheme: Option<String>,
    pub label: Option<String>,
    /// Nested iTunes-style subcategories, outermost first.
    pub subcategories: Vec<String>,
}

impl Category {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }
}

/// An Atom person construct, iTunes owner, or any named credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: Option<String>,
    pub email: Option<String>,
    pub uri: Option<String>,
    pub role: Option<String>,
}

text_setters!(Person {
    name => set_name,
    email => set_email,
    uri => set_uri,
    role => set_role,
});

impl Person {
    pub fn named(name: &str) -> Self {
        let mut person = Self::default();
        person.set_name(name);
        person
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.uri.is_none()
    }

    /// Fills the fields still unset from `other`.
    pub fn merge(&mut self, other: Person) {
        let Person {
            name,
            email,
            uri,
            role,
        } = other;
        for (slot, value) in [
            (&mut self.name, name),
            (&mut self.email, email),
            (&mut self.uri, uri),
            (&mut self.role, role),
        ] {
            if let Some(value) = value {
                merge_value(slot, value);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// The media file attached to an episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enclosure {
    pub url: String,
    pub mime_type: Option<String>,
    pub length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guid {
    pub value: String,
    pub is_permalink: bool,
}

/// A Media RSS `media:content` rendition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaContent {
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub medium: Option<String>,
    pub file_size: Option<u64>,
    pub duration: Option<Duration>,
    pub bitrate: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub language: Option<String>,
    pub is_default: Option<bool>,
}

/// A Podcast Index `podcast:transcript` reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub url: String,
    pub mime_type: Option<String>,
    pub language: Option<String>,
    pub rel: Option<String>,
}

/// Content advisories gathered from iTunes, Google Play, Media RSS and
/// RawVoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rating {
    /// Normalized (trimmed, lowercase) explicit flag as published.
    pub explicit: Option<String>,
    pub media: Option<String>,
    pub scheme: Option<String>,
    pub tv: Option<String>,
    pub movie: Option<String>,
}

text_setters!(Rating {
    media => set_media,
    scheme => set_scheme,
    tv => set_tv,
    movie => set_movie,
});

impl Rating {
    pub fn set_explicit(&mut self, value: &str) {
        merge_text(&mut self.explicit, &value.trim().to_ascii_lowercase());
    }

    /// Interprets the explicit flag, if it uses a known spelling.
    pub fn is_explicit(&self) -> Option<bool> {
        match self.explicit.as_deref()? {
            "yes" | "true" | "explicit" => Some(true),
            "no" | "false" | "clean" => Some(false),
            _ => None,
        }
    }
}

/// Publishing schedule hints (`sy:*`, `rawvoice:frequency`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateInfo {
    pub period: Option<String>,
    pub frequency: Option<u32>,
    pub base: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
}

text_setters!(UpdateInfo {
    period => set_period,
    description => set_description,
});

value_setters!(UpdateInfo {
    frequency: u32 => set_frequency,
    base: DateTime<FixedOffset> => set_base,
});

/// GeoRSS location data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Geo {
    pub point: Option<GeoPoint>,
    pub bounding_box: Option<GeoBox>,
    pub elevation: Option<f64>,
    pub radius: Option<f64>,
    pub feature_name: Option<String>,
    pub feature_type: Option<String>,
    pub relationship: Option<String>,
}

text_setters!(Geo {
    feature_name => set_feature_name,
    feature_type => set_feature_type,
    relationship => set_relationship,
});

value_setters!(Geo {
    point: GeoPoint => set_point,
    bounding_box: GeoBox => set_bounding_box,
    elevation: f64 => set_elevation,
    radius: f64 => set_radius,
});

/// Discussion metadata (`comments`, `wfw:*`, `slash:comments`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comments {
    pub url: Option<String>,
    pub feed_url: Option<String>,
    pub count: Option<u64>,
}

text_setters!(Comments {
    url => set_url,
    feed_url => set_feed_url,
});

value_setters!(Comments {
    count: u64 => set_count,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct License {
    pub url: Option<String>,
    pub text: Option<String>,
}

text_setters!(License {
    url => set_url,
    text => set_text,
});
