//! Selector options and configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::OptionError;

/// How a year caption spells its era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EraFormat {
    /// Full kanji era name with the 年 suffix, e.g. "明治45年".
    #[default]
    JaLong,
    /// Single-kanji abbreviation, e.g. "明45".
    JaShort,
    /// Latin initial, e.g. "M45".
    Alphabet,
}

impl FromStr for EraFormat {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja_long" => Ok(EraFormat::JaLong),
            "ja_short" => Ok(EraFormat::JaShort),
            "alphabet" => Ok(EraFormat::Alphabet),
            _ => Err(OptionError::UnknownEraFormat(s.to_string())),
        }
    }
}

/// One field of a date/time selector, in default assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl ComponentKind {
    /// All six kinds in default assembly order.
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Year,
        ComponentKind::Month,
        ComponentKind::Day,
        ComponentKind::Hour,
        ComponentKind::Minute,
        ComponentKind::Second,
    ];

    /// 1-based slot used to derive field ids and names (year is 1, second is 6).
    pub fn position(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Year => "year",
            ComponentKind::Month => "month",
            ComponentKind::Day => "day",
            ComponentKind::Hour => "hour",
            ComponentKind::Minute => "minute",
            ComponentKind::Second => "second",
        };
        f.write_str(name)
    }
}

impl FromStr for ComponentKind {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(ComponentKind::Year),
            "month" => Ok(ComponentKind::Month),
            "day" => Ok(ComponentKind::Day),
            "hour" => Ok(ComponentKind::Hour),
            "minute" => Ok(ComponentKind::Minute),
            "second" => Ok(ComponentKind::Second),
            _ => Err(OptionError::UnknownComponent(s.to_string())),
        }
    }
}

/// Options for composing a date/time selector.
///
/// One value configures a single composition and is never mutated by it;
/// per-field variations (hidden value-carriers, folded-in implicit discards)
/// are derived as fresh copies.
#[derive(Debug, Clone)]
pub struct SelectorOptions {
    /// Caption years with their era name instead of the plain numeral.
    pub use_era_name: bool,
    /// Era spelling, only consulted when `use_era_name` is set.
    pub era_format: EraFormat,

    /// Append 年 after the year chooser (suppressed by the long era format,
    /// whose captions already end in 年).
    pub use_jp_year: bool,
    /// Append 月 after the month chooser.
    pub use_jp_month: bool,
    /// Append 日 after the day chooser.
    pub use_jp_day: bool,
    /// Append 時 after the hour chooser.
    pub use_jp_hour: bool,
    /// Append 分 after the minute chooser.
    pub use_jp_minute: bool,
    /// Append 秒 after the second chooser.
    pub use_jp_second: bool,

    /// Drop the year from interactive rendering.
    pub discard_year: bool,
    /// Drop the month; the day is dropped with it.
    pub discard_month: bool,
    /// Drop the day.
    pub discard_day: bool,
    /// Drop the hour; the minute is dropped with it.
    pub discard_hour: bool,
    /// Drop the minute.
    pub discard_minute: bool,

    /// Offer a second chooser after the minute.
    pub include_seconds: bool,

    /// Which of year/month/day appear and in what relative order. Missing
    /// date parts still ride along as hidden value-carriers; hour, minute
    /// and second always trail in fixed order.
    pub order: Vec<ComponentKind>,

    /// Literal between the date fields.
    pub date_separator: String,
    /// Literal between the date and time groups when 時 is suppressed.
    pub datetime_separator: String,
    /// Literal between the time fields when their glyphs are suppressed.
    pub time_separator: String,

    /// Render fields as non-interactive value carriers. The composer derives
    /// this per field; hidden fields never take a unit glyph.
    pub use_hidden: bool,

    /// Offer an empty leading choice.
    pub include_blank: bool,
    /// Render choosers disabled.
    pub disabled: bool,

    /// First year a year chooser offers; defaults to five before the value.
    pub start_year: Option<i32>,
    /// Last year a year chooser offers; defaults to five after the value.
    pub end_year: Option<i32>,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        SelectorOptions {
            use_era_name: false,
            era_format: EraFormat::default(),
            use_jp_year: true,
            use_jp_month: true,
            use_jp_day: true,
            use_jp_hour: true,
            use_jp_minute: true,
            use_jp_second: true,
            discard_year: false,
            discard_month: false,
            discard_day: false,
            discard_hour: false,
            discard_minute: false,
            include_seconds: false,
            order: vec![ComponentKind::Year, ComponentKind::Month, ComponentKind::Day],
            date_separator: String::new(),
            datetime_separator: " — ".to_string(),
            time_separator: " : ".to_string(),
            use_hidden: false,
            include_blank: false,
            disabled: false,
            start_year: None,
            end_year: None,
        }
    }
}

impl SelectorOptions {
    /// Month choosers show plain numbers whenever the 月 suffix is on;
    /// "3月" reads as a month name on its own.
    pub fn month_numbers(&self) -> bool {
        self.use_jp_month
    }
}
