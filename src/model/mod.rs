//! Normalized in-memory representation of a podcast feed.
//!
//! The model is a plain tree of attributes. Its only behavior is the merge
//! rule every namespace handler relies on when several sources describe the
//! same logical field:
//!
//! - scalar setters ignore blank or whitespace-only input and never replace
//!   a value that is already set (first non-blank wins)
//! - set-like collections (links, categories, keywords) drop structurally
//!   equal duplicates
//! - nested value objects ([`Rating`], [`UpdateInfo`], [`Geo`], [`Comments`],
//!   [`License`]) are created on first write through a `*_mut` accessor and
//!   merged in place afterwards

mod aggregate;
mod feed;
mod item;
mod values;

pub use aggregate::Aggregate;
pub use feed::Feed;
pub use item::Item;
pub use values::{
    Category, Comments, Enclosure, Geo, Guid, Image, License, Link, MediaContent, Person, Rating,
    Transcript, UpdateInfo,
};

pub use crate::lenient::{GeoBox, GeoPoint};

/// Stores the trimmed `value` unless it is blank or the slot is already set.
pub(crate) fn merge_text(slot: &mut Option<String>, value: &str) {
    if slot.is_some() {
        return;
    }
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        *slot = Some(trimmed.to_string());
    }
}

/// Stores `value` unless the slot is already set.
pub(crate) fn merge_value<T>(slot: &mut Option<T>, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

/// Appends `value` unless an equal member is already present.
pub(crate) fn insert_unique<T: PartialEq>(set: &mut Vec<T>, value: T) -> bool {
    if set.contains(&value) {
        return false;
    }
    set.push(value);
    true
}

/// Generates first-non-blank-wins setters for `Option<String>` fields.
macro_rules! text_setters {
    ($ty:ty { $($field:ident => $setter:ident),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Sets `", stringify!($field), "` unless blank or already set.")]
                pub fn $setter(&mut self, value: &str) {
                    $crate::model::merge_text(&mut self.$field, value);
                }
            )*
        }
    };
}

/// Generates first-wins setters for typed `Option<T>` fields.
macro_rules! value_setters {
    ($ty:ty { $($field:ident: $value:ty => $setter:ident),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Sets `", stringify!($field), "` unless already set.")]
                pub fn $setter(&mut self, value: $value) {
                    $crate::model::merge_value(&mut self.$field, value);
                }
            )*
        }
    };
}

pub(crate) use text_setters;
pub(crate) use value_setters;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_text_ignores_blank() {
        let mut slot = None;
        merge_text(&mut slot, "   ");
        assert_eq!(slot, None);
        merge_text(&mut slot, " yes ");
        assert_eq!(slot.as_deref(), Some("yes"));
        merge_text(&mut slot, "");
        assert_eq!(slot.as_deref(), Some("yes"));
    }

    #[test]
    fn test_merge_text_first_non_blank_wins() {
        let mut slot = None;
        merge_text(&mut slot, "first");
        merge_text(&mut slot, "second");
        assert_eq!(slot.as_deref(), Some("first"));
    }

    #[test]
    fn test_insert_unique() {
        let mut set = Vec::new();
        assert!(insert_unique(&mut set, "a"));
        assert!(!insert_unique(&mut set, "a"));
        assert!(insert_unique(&mut set, "b"));
        assert_eq!(set, vec!["a", "b"]);
    }
}
