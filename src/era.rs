//! Japanese era (gengo) table and lookup.
//!
//! Covers the four modern eras. An accession year is simultaneously the last
//! year of the preceding era and the first of the new one; which era a given
//! day of that year belongs to is not tracked, so such years are reported in
//! their dual-era form by the formatter.

/// One era of the modern Japanese calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    /// Full kanji name, e.g. "明治".
    pub name: &'static str,
    /// Single-kanji abbreviation used by the compact caption format.
    pub abbrev: &'static str,
    /// Latin initial used by the alphabet caption format.
    pub initial: &'static str,
    /// First calendar year of the era, inclusive.
    pub start_year: i32,
}

/// Eras in ascending order of accession, strictly increasing by start year.
///
/// The last entry is open-ended: every year from its start onward maps into
/// it until a new era is appended here. Years after the table's last known
/// accession therefore keep counting in that era, which is a table
/// maintenance concern rather than a lookup failure.
pub static ERAS: [Era; 4] = [
    Era { name: "明治", abbrev: "明", initial: "M", start_year: 1868 },
    Era { name: "大正", abbrev: "大", initial: "T", start_year: 1912 },
    Era { name: "昭和", abbrev: "昭", initial: "S", start_year: 1926 },
    Era { name: "平成", abbrev: "平", initial: "H", start_year: 1989 },
];

/// Where a calendar year falls in the era table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraYear {
    /// Before the first era; no era name applies.
    PreEra,
    /// Exactly an accession year. `prev` is `None` only for the first era,
    /// which has no predecessor to share the year with.
    Accession {
        era: &'static Era,
        prev: Option<&'static Era>,
    },
    /// Inside an era. `nth` is the 1-based year count, so "明治2年" has
    /// `nth` 2.
    Within { era: &'static Era, nth: i32 },
}

/// Look up the era a calendar year falls in.
///
/// Total over all integers: pre-era years come back as [`EraYear::PreEra`]
/// rather than an error.
pub fn lookup(year: i32) -> EraYear {
    for (i, era) in ERAS.iter().enumerate().rev() {
        if year < era.start_year {
            continue;
        }
        if year == era.start_year {
            let prev = if i > 0 { Some(&ERAS[i - 1]) } else { None };
            return EraYear::Accession { era, prev };
        }
        return EraYear::Within {
            era,
            nth: year - era.start_year + 1,
        };
    }
    EraYear::PreEra
}
