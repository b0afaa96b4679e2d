//! Unit glyph suffixes and inter-field separators.

use crate::options::{ComponentKind, EraFormat, SelectorOptions};

/// The unit glyph appended after a field's chooser, or `""` when suppressed.
///
/// Hidden value-carriers never take a glyph. A year captioned through the
/// long era format already ends in 年, so its suffix is dropped there; the
/// compact formats carry no suffix of their own and keep it.
pub fn unit_glyph(kind: ComponentKind, options: &SelectorOptions) -> &'static str {
    if options.use_hidden {
        return "";
    }
    match kind {
        ComponentKind::Year => {
            if !options.use_jp_year {
                ""
            } else if options.use_era_name && options.era_format == EraFormat::JaLong {
                ""
            } else {
                "年"
            }
        }
        ComponentKind::Month => {
            if options.use_jp_month {
                "月"
            } else {
                ""
            }
        }
        ComponentKind::Day => {
            if options.use_jp_day {
                "日"
            } else {
                ""
            }
        }
        ComponentKind::Hour => {
            if options.use_jp_hour {
                "時"
            } else {
                ""
            }
        }
        ComponentKind::Minute => {
            if options.use_jp_minute {
                "分"
            } else {
                ""
            }
        }
        ComponentKind::Second => {
            if options.include_seconds && options.use_jp_second {
                "秒"
            } else {
                ""
            }
        }
    }
}

/// The literal inserted ahead of a field when fields are strung together.
///
/// The hour rule reads the discard flags, so callers composing a selector
/// must pass options with implicit (not-in-order) discards folded in.
pub fn separator_before<'a>(kind: ComponentKind, options: &'a SelectorOptions) -> &'a str {
    match kind {
        ComponentKind::Year => "",
        ComponentKind::Month | ComponentKind::Day => &options.date_separator,
        ComponentKind::Hour => {
            if options.discard_year && options.discard_day {
                ""
            } else if !options.use_jp_hour {
                &options.datetime_separator
            } else {
                " "
            }
        }
        ComponentKind::Minute => {
            if !options.use_jp_hour {
                &options.time_separator
            } else {
                ""
            }
        }
        ComponentKind::Second => {
            if options.include_seconds && !options.use_jp_minute {
                &options.time_separator
            } else {
                ""
            }
        }
    }
}
