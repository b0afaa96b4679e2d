//! jpselect - Japanese date/time select localization
//!
//! This crate decides how a multi-field date/time chooser reads in Japanese:
//! era (wareki) year captions, the 年月日時分秒 unit suffixes, separator and
//! ordering rules for assembling the fields, and relative time phrases.
//! Markup is produced by a caller-supplied renderer; everything here is a
//! pure function over the configuration and the datetime.

pub mod compose;
pub mod distance;
pub mod era;
pub mod error;
pub mod options;

mod cache;
mod formatter;

pub use compose::{compose, compose_date, compose_time, FieldSpec};
pub use distance::{distance_of_time_in_words, distance_words};
pub use era::{lookup, Era, EraYear, ERAS};
pub use error::{ComposeError, OptionError};
pub use formatter::{era_year_label, separator_before, unit_glyph, year_caption, year_captions};
pub use options::{ComponentKind, EraFormat, SelectorOptions};
