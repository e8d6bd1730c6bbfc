use log::{Level, LevelFilter};

use crate::{ColorMode, ParseColorModeError, ParseSeverityError, Severity};

#[test]
fn test_order_follows_ordinal() {
    assert!(Severity::Fatal < Severity::Error);
    assert!(Severity::Error < Severity::Warning);
    assert!(Severity::Warning < Severity::Info);
    assert!(Severity::Info < Severity::Debug);

    let mut shuffled = vec![
        Severity::Info,
        Severity::Fatal,
        Severity::Debug,
        Severity::Warning,
        Severity::Error,
    ];
    shuffled.sort();
    assert_eq!(shuffled, Severity::ALL);
    assert_eq!(Severity::default(), Severity::Debug);
}

#[test]
fn test_ordinal_round_trip_saturates() {
    for severity in Severity::ALL {
        assert_eq!(Severity::from_u8(severity as u8), severity);
    }
    assert_eq!(Severity::from_u8(200), Severity::Debug);
}

#[test]
fn test_parse() {
    assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Fatal));
    assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
    assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!(" info ".parse::<Severity>(), Ok(Severity::Info));
    assert_eq!("debug".parse::<Severity>(), Ok(Severity::Debug));

    let err = "trace".parse::<Severity>().unwrap_err();
    assert_eq!(err, ParseSeverityError("trace".to_owned()));
    assert!(err.to_string().contains("`trace`"));
}

#[test]
fn test_display_is_tag() {
    let tags: Vec<String> = Severity::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(tags, vec!["FATAL", "ERROR", "WARNING", "INFO", "DEBUG"]);
}

#[test]
fn test_log_level_mapping() {
    assert_eq!(Severity::from(Level::Error), Severity::Error);
    assert_eq!(Severity::from(Level::Warn), Severity::Warning);
    assert_eq!(Severity::from(Level::Info), Severity::Info);
    assert_eq!(Severity::from(Level::Debug), Severity::Debug);
    assert_eq!(Severity::from(Level::Trace), Severity::Debug);

    assert_eq!(LevelFilter::from(Severity::Fatal), LevelFilter::Error);
    assert_eq!(LevelFilter::from(Severity::Warning), LevelFilter::Warn);
    assert_eq!(LevelFilter::from(Severity::Debug), LevelFilter::Trace);
}

#[test]
fn test_parse_color_mode() {
    assert_eq!("".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("Always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!(
        "sometimes".parse::<ColorMode>(),
        Err(ParseColorModeError("sometimes".to_owned()))
    );
}
