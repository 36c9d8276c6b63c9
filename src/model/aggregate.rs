use chrono::{DateTime, FixedOffset};

use super::{Category, Feed, Geo, Image, Item, License, Link, Person, Rating};

/// Fields shared by [`Feed`] and [`Item`].
///
/// Lets a namespace handler map an element once when it means the same
/// thing at channel and episode level (`itunes:author`, `media:thumbnail`,
/// `dc:creator`, ...). Every method keeps the merge rules of the concrete
/// setter it forwards to.
pub trait Aggregate {
    fn set_title(&mut self, value: &str);
    fn set_description(&mut self, value: &str);
    fn set_subtitle(&mut self, value: &str);
    fn set_summary(&mut self, value: &str);
    fn set_author(&mut self, value: &str);
    fn set_copyright(&mut self, value: &str);
    fn set_pub_date(&mut self, value: DateTime<FixedOffset>);
    fn set_updated(&mut self, value: DateTime<FixedOffset>);
    fn set_block(&mut self, value: bool);
    fn add_link(&mut self, link: Link);
    fn add_category(&mut self, category: Category);
    fn add_keywords(&mut self, raw: &str);
    fn add_image(&mut self, image: Image);
    fn add_author(&mut self, person: Person);
    fn add_contributor(&mut self, person: Person);
    fn set_explicit(&mut self, value: &str);
    fn rating_mut(&mut self) -> &mut Rating;
    fn geo_mut(&mut self) -> &mut Geo;
    fn license_mut(&mut self) -> &mut License;
}

macro_rules! forward_aggregate {
    ($($ty:ty),*) => {
        $(
            impl Aggregate for $ty {
                fn set_title(&mut self, value: &str) {
                    <$ty>::set_title(self, value)
                }
                fn set_description(&mut self, value: &str) {
                    <$ty>::set_description(self, value)
                }
                fn set_subtitle(&mut self, value: &str) {
                    <$ty>::set_subtitle(self, value)
                }
                fn set_summary(&mut self, value: &str) {
                    <$ty>::set_summary(self, value)
                }
                fn set_author(&mut self, value: &str) {
                    <$ty>::set_author(self, value)
                }
                fn set_copyright(&mut self, value: &str) {
                    <$ty>::set_copyright(self, value)
                }
                fn set_pub_date(&mut self, value: DateTime<FixedOffset>) {
                    <$ty>::set_pub_date(self, value)
                }
                fn set_updated(&mut self, value: DateTime<FixedOffset>) {
                    <$ty>::set_updated(self, value)
                }
                fn set_block(&mut self, value: bool) {
                    <$ty>::set_block(self, value)
                }
                fn add_link(&mut self, link: Link) {
                    <$ty>::add_link(self, link)
                }
                fn add_category(&mut self, category: Category) {
                    <$ty>::add_category(self, category)
                }
                fn add_keywords(&mut self, raw: &str) {
                    <$ty>::add_keywords(self, raw)
                }
                fn add_image(&mut self, image: Image) {
                    <$ty>::add_image(self, image)
                }
                fn add_author(&mut self, person: Person) {
                    <$ty>::add_author(self, person)
                }
                fn add_contributor(&mut self, person: Person) {
                    <$ty>::add_contributor(self, person)
                }
                fn set_explicit(&mut self, value: &str) {
                    <$ty>::set_explicit(self, value)
                }
                fn rating_mut(&mut self) -> &mut Rating {
                    <$ty>::rating_mut(self)
                }
                fn geo_mut(&mut self) -> &mut Geo {
                    <$ty>::geo_mut(self)
                }
                fn license_mut(&mut self) -> &mut License {
                    <$ty>::license_mut(self)
                }
            }
        )*
    };
}

forward_aggregate!(Feed, Item);
