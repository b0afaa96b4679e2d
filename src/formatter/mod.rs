//! Year caption and unit suffix formatting.

mod era;
mod unit;

pub use era::{era_year_label, year_caption, year_captions};
pub use unit::{separator_before, unit_glyph};
