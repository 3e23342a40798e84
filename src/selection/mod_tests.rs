use super::*;

fn totals(entries: &[(&str, i64)]) -> LanguageTotals {
    entries.iter().copied().collect()
}

fn open_config() -> SelectionConfig {
    SelectionConfig {
        deny: Vec::new(),
        min_bytes: 0,
        min_pct: 0,
        top_n: 8,
    }
}

fn pairs(selected: &[SelectedLanguage]) -> Vec<(&str, u32)> {
    selected.iter().map(|l| (l.name.as_str(), l.pct)).collect()
}

fn pct_sum(selected: &[SelectedLanguage]) -> u32 {
    selected.iter().map(|l| l.pct).sum()
}

mod rounding_tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(rounded_percent(1, 8), 13); // 12.5
        assert_eq!(rounded_percent(3, 8), 38); // 37.5
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
    }

    #[test]
    fn whole_and_zero() {
        assert_eq!(rounded_percent(5, 5), 100);
        assert_eq!(rounded_percent(0, 5), 0);
        assert_eq!(rounded_percent(5, 0), 0);
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        assert_eq!(rounded_percent(u64::MAX / 2, u64::MAX), 50);
    }
}

#[test]
fn deny_listed_language_is_removed_before_ranking() {
    let mut config = open_config();
    config.deny = vec!["Shell".to_string()];

    let selected = select_languages(
        &totals(&[("Go", 700), ("TypeScript", 200), ("Shell", 100)]),
        &config,
    )
    .unwrap();

    assert_eq!(pairs(&selected), vec![("Go", 78), ("TypeScript", 22)]);
}

#[test]
fn deny_list_is_case_sensitive() {
    let mut config = open_config();
    config.deny = vec!["shell".to_string()];

    let selected = select_languages(&totals(&[("Shell", 10), ("Go", 10)]), &config).unwrap();

    assert!(selected.iter().any(|l| l.name == "Shell"));
}

#[test]
fn denied_language_never_appears_even_when_dominant() {
    let mut config = open_config();
    config.deny = vec!["HTML".to_string()];

    let selected = select_languages(
        &totals(&[("HTML", 1_000_000), ("Rust", 10), ("Go", 5)]),
        &config,
    )
    .unwrap();

    assert!(selected.iter().all(|l| l.name != "HTML"));
    assert_eq!(pct_sum(&selected), 100);
}

#[test]
fn equal_thirds_correct_the_first_discovered() {
    let selected =
        select_languages(&totals(&[("A", 1), ("B", 1), ("C", 1)]), &open_config()).unwrap();

    assert_eq!(pairs(&selected), vec![("A", 34), ("B", 33), ("C", 33)]);
}

#[test]
fn ties_keep_discovery_order() {
    let selected = select_languages(
        &totals(&[("Zig", 50), ("Ada", 100), ("Lua", 50), ("Go", 100)]),
        &open_config(),
    )
    .unwrap();

    let names: Vec<_> = selected.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Go", "Zig", "Lua"]);
}

#[test]
fn truncates_to_top_n_sorted_descending() {
    let mut config = open_config();
    config.top_n = 3;

    let selected = select_languages(
        &totals(&[("A", 10), ("B", 40), ("C", 30), ("D", 20), ("E", 50)]),
        &config,
    )
    .unwrap();

    assert_eq!(selected.len(), 3);
    let bytes: Vec<_> = selected.iter().map(|l| l.bytes).collect();
    assert_eq!(bytes, vec![50, 40, 30]);
    assert_eq!(pct_sum(&selected), 100);
}

#[test]
fn percentages_use_truncated_sum() {
    let mut config = open_config();
    config.top_n = 2;

    let selected =
        select_languages(&totals(&[("A", 300), ("B", 100), ("C", 600)]), &config).unwrap();

    assert_eq!(pairs(&selected), vec![("C", 67), ("A", 33)]);
}

#[test]
fn min_bytes_filters_small_languages() {
    let mut config = open_config();
    config.min_bytes = 1000;

    let selected = select_languages(
        &totals(&[("Rust", 6000), ("Go", 2000), ("Lua", 999)]),
        &config,
    )
    .unwrap();

    assert_eq!(pairs(&selected), vec![("Rust", 75), ("Go", 25)]);
}

#[test]
fn min_bytes_falls_back_when_everything_is_small() {
    let mut config = open_config();
    config.min_bytes = 10_000;

    let selected =
        select_languages(&totals(&[("Rust", 300), ("Go", 100)]), &config).unwrap();

    assert_eq!(pairs(&selected), vec![("Rust", 75), ("Go", 25)]);
}

#[test]
fn min_pct_applies_to_rounded_values() {
    let mut config = open_config();
    config.min_pct = 1;

    // Tiny is 0.6% -> rounds to 1 and survives; Dust is 0.4% -> rounds to 0 and is dropped.
    let selected = select_languages(
        &totals(&[("Big", 990), ("Tiny", 6), ("Dust", 4)]),
        &config,
    )
    .unwrap();

    assert_eq!(pairs(&selected), vec![("Big", 99), ("Tiny", 1)]);
}

#[test]
fn correction_after_min_pct_goes_to_top_entry_only() {
    let mut config = open_config();
    config.min_pct = 5;

    // 60 / 36 / 4 -> C dropped, 60 + 36 = 96, top absorbs +4.
    let selected =
        select_languages(&totals(&[("A", 600), ("B", 360), ("C", 40)]), &config).unwrap();

    assert_eq!(pairs(&selected), vec![("A", 64), ("B", 36)]);
}

#[test]
fn overshoot_is_subtracted_from_top_entry() {
    // 6 x 1/6 -> 16.67 -> 17 each = 102; top becomes 15.
    let selected = select_languages(
        &totals(&[
            ("A", 1),
            ("B", 1),
            ("C", 1),
            ("D", 1),
            ("E", 1),
            ("F", 1),
        ]),
        &open_config(),
    )
    .unwrap();

    assert_eq!(selected[0].pct, 15);
    assert!(selected[1..].iter().all(|l| l.pct == 17));
    assert_eq!(pct_sum(&selected), 100);
}

#[test]
fn huge_byte_counts_do_not_overflow_the_sum() {
    let totals = totals(&[
        ("Rust", i64::MAX),
        ("Go", i64::MAX),
        ("Rust", i64::MAX),
        ("Rust", i64::MAX),
    ]);

    let selected = select_languages(&totals, &open_config()).unwrap();

    assert_eq!(selected[0].name, "Rust");
    assert_eq!(selected[0].bytes, u64::MAX);
    assert_eq!(pct_sum(&selected), 100);
}

#[test]
fn single_language_is_one_hundred_percent() {
    let selected = select_languages(&totals(&[("Rust", 42)]), &open_config()).unwrap();
    assert_eq!(pairs(&selected), vec![("Rust", 100)]);
}

#[test]
fn empty_totals_is_fatal() {
    let err = select_languages(&LanguageTotals::new(), &open_config()).unwrap_err();
    assert_eq!(err.error_type(), "EmptyInput");
}

#[test]
fn everything_denied_is_fatal() {
    let mut config = open_config();
    config.deny = vec!["Shell".to_string()];

    let err = select_languages(&totals(&[("Shell", 100)]), &config).unwrap_err();

    assert_eq!(err.error_type(), "EmptyInput");
}

#[test]
fn everything_below_min_pct_is_fatal() {
    let mut config = open_config();
    config.min_pct = 60;

    let err = select_languages(&totals(&[("A", 50), ("B", 50)]), &config).unwrap_err();

    assert_eq!(err.error_type(), "EmptyInput");
}

#[test]
fn sums_to_one_hundred_across_many_shapes() {
    let shapes: &[&[(&str, i64)]] = &[
        &[("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5), ("F", 6), ("G", 7)],
        &[("A", 999_999), ("B", 1), ("C", 1)],
        &[("A", 13), ("B", 13), ("C", 13), ("D", 13), ("E", 13), ("F", 13), ("G", 13), ("H", 13)],
        &[("A", 7), ("B", 11)],
        &[("A", 1_234_567), ("B", 7_654_321), ("C", 42), ("D", 99_999)],
    ];

    for shape in shapes {
        for top_n in 1..=MAX_TOP_N {
            let mut config = open_config();
            config.top_n = top_n;
            let selected = select_languages(&totals(shape), &config).unwrap();
            assert_eq!(pct_sum(&selected), 100, "shape {shape:?}, top_n {top_n}");
            assert!(selected.len() <= top_n);
        }
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.top_n, 8);
        assert_eq!(config.min_pct, 1);
        assert_eq!(config.min_bytes, 1000);
        assert!(config.deny.iter().any(|d| d == "Dockerfile"));
        assert!(config.deny.iter().any(|d| d == "Shell"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_top_n() {
        let config = SelectionConfig {
            top_n: 0,
            ..SelectionConfig::default()
        };
        assert!(matches!(config.validate(), Err(CardError::Config(_))));
    }

    #[test]
    fn rejects_top_n_above_max() {
        let config = SelectionConfig {
            top_n: MAX_TOP_N + 1,
            ..SelectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_min_pct_above_hundred() {
        let config = SelectionConfig {
            min_pct: 101,
            ..SelectionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
