use std::str::FromStr;

use jpselect::{ComponentKind, EraFormat, OptionError, SelectorOptions};

#[test]
fn test_default_options() {
    let options = SelectorOptions::default();
    assert!(!options.use_era_name);
    assert_eq!(options.era_format, EraFormat::JaLong);
    assert!(options.use_jp_year);
    assert!(options.use_jp_second);
    assert!(!options.discard_year);
    assert!(!options.include_seconds);
    assert!(!options.use_hidden);
    assert_eq!(
        options.order,
        vec![ComponentKind::Year, ComponentKind::Month, ComponentKind::Day]
    );
    assert_eq!(options.date_separator, "");
    assert_eq!(options.datetime_separator, " — ");
    assert_eq!(options.time_separator, " : ");
    assert_eq!(options.start_year, None);
    assert_eq!(options.end_year, None);
}

#[test]
fn test_era_format_from_str() {
    assert_eq!(EraFormat::from_str("ja_long"), Ok(EraFormat::JaLong));
    assert_eq!(EraFormat::from_str("ja_short"), Ok(EraFormat::JaShort));
    assert_eq!(EraFormat::from_str("alphabet"), Ok(EraFormat::Alphabet));
}

#[test]
fn test_era_format_rejects_unknown() {
    // No silent fallback to the default variant.
    assert_eq!(
        EraFormat::from_str("gregorian"),
        Err(OptionError::UnknownEraFormat("gregorian".to_string()))
    );
    assert_eq!(
        EraFormat::from_str(""),
        Err(OptionError::UnknownEraFormat(String::new()))
    );
}

#[test]
fn test_component_kind_from_str_roundtrip() {
    for kind in ComponentKind::ALL {
        assert_eq!(ComponentKind::from_str(&kind.to_string()), Ok(kind));
    }
}

#[test]
fn test_component_kind_rejects_unknown() {
    assert_eq!(
        ComponentKind::from_str("week"),
        Err(OptionError::UnknownComponent("week".to_string()))
    );
}

#[test]
fn test_component_positions() {
    assert_eq!(ComponentKind::Year.position(), 1);
    assert_eq!(ComponentKind::Month.position(), 2);
    assert_eq!(ComponentKind::Day.position(), 3);
    assert_eq!(ComponentKind::Hour.position(), 4);
    assert_eq!(ComponentKind::Minute.position(), 5);
    assert_eq!(ComponentKind::Second.position(), 6);
}

#[test]
fn test_month_numbers_follows_month_glyph() {
    let options = SelectorOptions::default();
    assert!(options.month_numbers());

    let options = SelectorOptions {
        use_jp_month: false,
        ..SelectorOptions::default()
    };
    assert!(!options.month_numbers());
}

#[test]
fn test_error_messages_identify_the_value() {
    let err = EraFormat::from_str("showa").unwrap_err();
    assert!(err.to_string().contains("showa"));

    let err = ComponentKind::from_str("decade").unwrap_err();
    assert!(err.to_string().contains("decade"));
}
