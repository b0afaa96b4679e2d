//! Era-name year captions.

use crate::cache;
use crate::era::{lookup, Era, EraYear};
use crate::options::{EraFormat, SelectorOptions};

/// Format a calendar year under the given era format.
///
/// Years before the first era carry no era name and come back as plain
/// decimal numerals. An accession year is reported in its dual-era form
/// ("明治45年/大正1年") since the cutover day within that year is not
/// tracked; the very first accession year has no predecessor and uses the
/// gannen form instead ("明治元年").
pub fn era_year_label(year: i32, format: EraFormat) -> String {
    match lookup(year) {
        EraYear::PreEra => year.to_string(),
        EraYear::Accession { era, prev: None } => foundation_label(era, format),
        EraYear::Accession { era, prev: Some(prev) } => {
            let last = year - prev.start_year + 1;
            transition_label(prev, last, era, format)
        }
        EraYear::Within { era, nth } => numbered_label(era, nth, format),
    }
}

fn numbered_label(era: &Era, nth: i32, format: EraFormat) -> String {
    match format {
        EraFormat::JaLong => format!("{}{}年", era.name, nth),
        EraFormat::JaShort => format!("{}{}", era.abbrev, nth),
        EraFormat::Alphabet => format!("{}{}", era.initial, nth),
    }
}

fn foundation_label(era: &Era, format: EraFormat) -> String {
    match format {
        // The opening year of an era is "元年", not "1年".
        EraFormat::JaLong => format!("{}元年", era.name),
        EraFormat::JaShort => format!("{}1", era.abbrev),
        EraFormat::Alphabet => format!("{}1", era.initial),
    }
}

fn transition_label(prev: &Era, last: i32, era: &Era, format: EraFormat) -> String {
    match format {
        EraFormat::JaLong => format!("{}{}年/{}1年", prev.name, last, era.name),
        EraFormat::JaShort => format!("{}{}/{}1", prev.abbrev, last, era.abbrev),
        EraFormat::Alphabet => format!("{}{}/{}1", prev.initial, last, era.initial),
    }
}

/// Caption for one year entry of a year chooser: the era label when era
/// names are on, otherwise the plain numeral.
pub fn year_caption(year: i32, options: &SelectorOptions) -> String {
    if options.use_era_name {
        cache::era_caption(year, options.era_format)
    } else {
        year.to_string()
    }
}

/// Captions for every year a chooser offers, centered on `base` unless the
/// options pin an explicit span. A reversed span counts downward.
pub fn year_captions(base: i32, options: &SelectorOptions) -> Vec<(i32, String)> {
    let start = options.start_year.unwrap_or(base - 5);
    let end = options.end_year.unwrap_or(base + 5);

    let years: Vec<i32> = if start <= end {
        (start..=end).collect()
    } else {
        (end..=start).rev().collect()
    };

    years
        .into_iter()
        .map(|year| (year, year_caption(year, options)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_labels_per_format() {
        assert_eq!(era_year_label(1945, EraFormat::JaLong), "昭和20年");
        assert_eq!(era_year_label(1945, EraFormat::JaShort), "昭20");
        assert_eq!(era_year_label(1945, EraFormat::Alphabet), "S20");
    }

    #[test]
    fn test_foundation_year_is_gannen() {
        assert_eq!(era_year_label(1868, EraFormat::JaLong), "明治元年");
        assert_eq!(era_year_label(1868, EraFormat::JaShort), "明1");
        assert_eq!(era_year_label(1868, EraFormat::Alphabet), "M1");
    }

    #[test]
    fn test_transition_years_are_dual() {
        assert_eq!(era_year_label(1912, EraFormat::JaLong), "明治45年/大正1年");
        assert_eq!(era_year_label(1912, EraFormat::JaShort), "明45/大1");
        assert_eq!(era_year_label(1912, EraFormat::Alphabet), "M45/T1");
    }

    #[test]
    fn test_pre_era_is_plain() {
        assert_eq!(era_year_label(1867, EraFormat::JaLong), "1867");
        assert_eq!(era_year_label(1867, EraFormat::Alphabet), "1867");
    }
}
