//! Date/time selector composition.
//!
//! Decides which fields appear, in what order, with which separators and
//! unit suffixes, and hands each field to a caller-supplied renderer. The
//! renderer owns all markup; this module only decides values, ordering,
//! captions, glyphs and separators.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::ComposeError;
use crate::formatter::{separator_before, unit_glyph, year_caption};
use crate::options::{ComponentKind, SelectorOptions};

/// Everything a renderer needs to produce one field.
#[derive(Debug, Clone)]
pub struct FieldSpec<'a> {
    pub kind: ComponentKind,
    /// 1-based slot for field id/name derivation.
    pub position: u8,
    /// Component value taken from the datetime, when one was given.
    pub value: Option<i32>,
    /// Era-substituted caption for the year field's own value.
    pub caption: Option<String>,
    /// Render as a non-interactive value carrier instead of a chooser.
    pub hidden: bool,
    /// Effective options for this field: implicit discards folded in,
    /// `use_hidden` already set. The caller's options are never mutated.
    pub options: &'a SelectorOptions,
}

/// Compose a date-and-time selector.
///
/// Fields are assembled in the normalized order with their separators and
/// unit glyphs; each one is rendered by `render_field`. Discarded fields at
/// the tail of the display order are dropped entirely, while discarded
/// fields ahead of an emitted one still render hidden so the composite
/// value round-trips.
///
/// A missing datetime flows through as `None` values; choosing a default
/// or rendering blanks is the caller's policy.
pub fn compose<F>(
    datetime: Option<NaiveDateTime>,
    options: &SelectorOptions,
    mut render_field: F,
) -> Result<String, ComposeError>
where
    F: FnMut(&FieldSpec<'_>) -> String,
{
    validate_order(&options.order)?;

    let discard = discard_set(options);

    // A hidden day is pinned to the 1st so year/month edits keep the
    // underlying date valid.
    let datetime = if discard.get(ComponentKind::Day) && !discard.get(ComponentKind::Month) {
        datetime.map(|dt| dt.with_day(1).unwrap_or(dt))
    } else {
        datetime
    };

    // Implicit (not-in-order) discards folded in so the separator rules
    // see them.
    let effective = SelectorOptions {
        discard_year: discard.get(ComponentKind::Year),
        discard_month: discard.get(ComponentKind::Month),
        discard_day: discard.get(ComponentKind::Day),
        ..options.clone()
    };

    let mut out = String::new();
    for &kind in normalize_order(&options.order).iter().rev() {
        let hidden = discard.get(kind);
        if hidden && out.is_empty() {
            continue;
        }

        let field_options = SelectorOptions {
            use_hidden: hidden,
            ..effective.clone()
        };
        let value = component_value(datetime, kind);
        let caption = match (kind, value) {
            (ComponentKind::Year, Some(year)) => Some(year_caption(year, &field_options)),
            _ => None,
        };
        let spec = FieldSpec {
            kind,
            position: kind.position(),
            value,
            caption,
            hidden,
            options: &field_options,
        };

        let rendered = render_field(&spec);
        let glyph = unit_glyph(kind, &field_options);
        let separator = separator_before(kind, &field_options);

        let mut segment =
            String::with_capacity(separator.len() + rendered.len() + glyph.len());
        segment.push_str(separator);
        segment.push_str(&rendered);
        segment.push_str(glyph);
        out.insert_str(0, &segment);
    }

    Ok(out)
}

/// Compose a date-only selector: the hour is discarded, and the minute and
/// second are dropped with it.
pub fn compose_date<F>(
    date: Option<NaiveDateTime>,
    options: &SelectorOptions,
    render_field: F,
) -> Result<String, ComposeError>
where
    F: FnMut(&FieldSpec<'_>) -> String,
{
    let options = SelectorOptions {
        discard_hour: true,
        ..options.clone()
    };
    compose(date, &options, render_field)
}

/// Compose a time-only selector: the date parts ride along as hidden value
/// carriers ahead of the visible time fields.
pub fn compose_time<F>(
    datetime: Option<NaiveDateTime>,
    options: &SelectorOptions,
    render_field: F,
) -> Result<String, ComposeError>
where
    F: FnMut(&FieldSpec<'_>) -> String,
{
    let options = SelectorOptions {
        discard_year: true,
        discard_month: true,
        ..options.clone()
    };
    compose(datetime, &options, render_field)
}

/// Which fields are dropped from interactive rendering.
#[derive(Debug, Clone, Copy)]
struct DiscardSet([bool; 6]);

impl DiscardSet {
    fn get(&self, kind: ComponentKind) -> bool {
        self.0[kind as usize]
    }
}

fn discard_set(options: &SelectorOptions) -> DiscardSet {
    let in_order = |kind| options.order.contains(&kind);

    let year = options.discard_year || !in_order(ComponentKind::Year);
    let month = options.discard_month || !in_order(ComponentKind::Month);
    let day = options.discard_day || month || !in_order(ComponentKind::Day);
    let hour = options.discard_hour;
    let minute = options.discard_minute || hour;
    let second = !(options.include_seconds && !minute);

    DiscardSet([year, month, day, hour, minute, second])
}

/// Force missing date parts in at the front (keeping the year, month, day
/// mutual order) and move the time parts to the tail in fixed order,
/// whatever the caller listed.
fn normalize_order(order: &[ComponentKind]) -> Vec<ComponentKind> {
    let mut order = order.to_vec();

    for kind in [ComponentKind::Day, ComponentKind::Month, ComponentKind::Year] {
        if !order.contains(&kind) {
            order.insert(0, kind);
        }
    }
    for kind in [ComponentKind::Hour, ComponentKind::Minute, ComponentKind::Second] {
        order.retain(|&k| k != kind);
        order.push(kind);
    }

    order
}

fn validate_order(order: &[ComponentKind]) -> Result<(), ComposeError> {
    let mut seen = [false; 6];
    for &kind in order {
        if seen[kind as usize] {
            return Err(ComposeError::DuplicateComponent(kind));
        }
        seen[kind as usize] = true;
    }
    Ok(())
}

fn component_value(datetime: Option<NaiveDateTime>, kind: ComponentKind) -> Option<i32> {
    let dt = datetime?;
    Some(match kind {
        ComponentKind::Year => dt.year(),
        ComponentKind::Month => dt.month() as i32,
        ComponentKind::Day => dt.day() as i32,
        ComponentKind::Hour => dt.hour() as i32,
        ComponentKind::Minute => dt.minute() as i32,
        ComponentKind::Second => dt.second() as i32,
    })
}
