//! Property-based tests for rust_module_logger using proptest

use proptest::prelude::*;
use rust_module_logger::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL_LEVELS.to_vec())
}

fn message_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::EMITTABLE.to_vec())
}

// ============================================================================
// Level name and rank conversion
// ============================================================================

proptest! {
    /// Names and ranks roundtrip over the defined ranks
    #[test]
    fn test_rank_name_roundtrip(rank in 0i32..=7) {
        prop_assert_eq!(level_rank(level_name(rank)), rank);
    }

    /// Out-of-range ranks render as ALL
    #[test]
    fn test_out_of_range_rank_is_all(rank in prop_oneof![i32::MIN..0, 8..i32::MAX]) {
        prop_assert_eq!(level_name(rank), "ALL");
    }

    /// Lookup ignores ASCII case
    #[test]
    fn test_name_case_insensitive(level in any_level(), mask in prop::collection::vec(any::<bool>(), 5)) {
        let mixed: String = level
            .to_str()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, lower)| if *lower { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(level_rank(&mixed), level.rank());
    }

    /// Anything that is not a level name maps to the invalid rank
    #[test]
    fn test_unknown_names_invalid(name in "[a-z]{1,10}") {
        let known = ["off", "fatal", "error", "warn", "info", "debug", "trace", "all"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert_eq!(level_rank(&name), INVALID_RANK);
    }

    /// Ordering matches rank ordering
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a < b, a.rank() < b.rank());
    }
}

// ============================================================================
// Logger behavior
// ============================================================================

proptest! {
    /// One line when the level passes the threshold, none otherwise
    #[test]
    fn test_console_gate(threshold in any_level(), level in message_level(), message in "[ -~]{0,40}") {
        let sink = Arc::new(MemoryAppender::new());
        let config = LoggerConfig::default()
            .with_log_level(threshold.to_str())
            .with_timestamp(false);
        let logger = Logger::new(sink.clone(), config);

        match level {
            LogLevel::Fatal => logger.fatalln(&message),
            LogLevel::Error => logger.errorln(&message),
            LogLevel::Warn => logger.warnln(&message),
            LogLevel::Info => logger.infoln(&message),
            LogLevel::Debug => logger.debugln(&message),
            _ => logger.traceln(&message),
        }

        if level.rank() <= threshold.rank() {
            prop_assert_eq!(sink.lines(), vec![format!("{} | service | {}\n", level, message)]);
        } else {
            prop_assert!(sink.is_empty());
        }
    }

    /// Derived prefixes are plain concatenations
    #[test]
    fn test_derived_prefix_concatenates(base in "[a-z]{0,8}", parts in prop::collection::vec("[a-z./:]{0,6}", 0..5)) {
        let root = Logger::new(
            Arc::new(MemoryAppender::new()),
            LoggerConfig::default().with_prefix(base.clone()),
        );

        let derived = parts.iter().fold(root.clone(), |logger, part| logger.new_module(part));
        prop_assert_eq!(derived.prefix(), format!("{}{}", base, parts.concat()));
        prop_assert_eq!(root.prefix(), base.as_str());
    }

    /// Formatted messages reach the forwarder exactly as rendered
    #[test]
    fn test_forwarded_description(value in any::<i64>(), word in "[a-z]{1,12}") {
        let events = Arc::new(MemoryForwarder::new());
        let mut logger = Logger::new(Arc::new(MemoryAppender::new()), LoggerConfig::default());
        logger.attach_forwarder(Some(events.clone())).unwrap();

        logger.infof(format_args!("{} -> {}", word, value));
        let submitted = events.events();
        prop_assert_eq!(submitted.len(), 1);
        prop_assert_eq!(&submitted[0].description, &format!("{} -> {}", word, value));
        prop_assert_eq!(&submitted[0].service, "service");
    }
}
