//! Best-effort conversion of raw feed text into typed values.
//!
//! Every parser in this module follows the same contract: it returns `None`
//! for input it cannot interpret and never panics, guesses, or substitutes a
//! default. Callers decide whether an absent value deserves a diagnostic.
//!
//! - [`date`] - RFC 822 / ISO 8601 timestamps plus common malformed variants
//! - [`duration`] - `SS`, `MM:SS`, `HH:MM:SS` episode lengths
//! - [`geo`] - GeoRSS `point` and `box` coordinates
//! - [`language`] - ISO 639-1 primary language subtags
//! - [`number`] - integer and yes/no flags

pub mod date;
pub mod duration;
pub mod geo;
pub mod language;
pub mod number;

pub use date::parse_date;
pub use duration::{parse_duration, parse_duration_with, DurationOverflow};
pub use geo::{parse_box, parse_point, GeoBox, GeoPoint};
pub use language::parse_language;
pub use number::{parse_f64, parse_u32, parse_u64, parse_yes_no};
