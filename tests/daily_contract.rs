//! Daily selection contract, driven through the public API.

use chrono::NaiveDate;

use kanjimatch::content::{STORY_SEGMENTS, VOCABULARY_PAIRS, WORDLE_WORDS};
use kanjimatch::daily::{self, DailyCycle, SelectionError};

#[test]
fn same_date_always_selects_the_same_item() {
    let letters = ["a", "b", "c"];
    let first = *daily::select_one(&letters, Some("2024-01-01")).unwrap();
    for _ in 0..100 {
        assert_eq!(*daily::select_one(&letters, Some("2024-01-01")).unwrap(), first);
    }
    // hash("2024-01-01") = 484, 484 % 3 = 1
    assert_eq!(first, "b");
}

#[test]
fn selection_index_is_hash_modulo_length() {
    let words: Vec<u32> = (0..7).collect();
    for key in ["2024-01-01", "2024-06-15", "2025-12-31"] {
        let expected = daily::date_hash(key) as usize % words.len();
        assert_eq!(*daily::select_one(&words, Some(key)).unwrap(), words[expected]);
    }
}

#[test]
fn empty_sequence_fails_for_any_date() {
    let empty: [u8; 0] = [];
    for key in ["2024-01-01", "1970-01-01", "2099-12-31"] {
        assert_eq!(
            daily::select_one(&empty, Some(key)).unwrap_err(),
            SelectionError::EmptySequence
        );
    }
}

#[test]
fn multi_selection_is_stable_and_returns_exactly_count_items() {
    let seq = ["x", "y", "z"];
    let first = daily::select_many(&seq, 3, Some("2024-01-01")).unwrap();
    for _ in 0..10 {
        assert_eq!(daily::select_many(&seq, 3, Some("2024-01-01")).unwrap(), first);
    }
    assert_eq!(first.len(), 3);
}

#[test]
fn refresh_flips_on_date_change() {
    assert!(!daily::should_refresh(&daily::today_key()));
    assert!(daily::should_refresh(&daily::date_key_days_ago(1)));
}

#[test]
fn built_in_tables_produce_a_full_daily_bundle() {
    let cycle = DailyCycle::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    let story = cycle.story_for(&STORY_SEGMENTS, date).unwrap();
    assert!(STORY_SEGMENTS.iter().any(|s| s.id == story.id));

    let vocabulary = cycle.vocabulary_for(&VOCABULARY_PAIRS, date).unwrap();
    assert!(!vocabulary.is_empty());
    assert!(vocabulary.len() <= 5);

    let word = cycle.wordle_for(&WORDLE_WORDS, date).unwrap();
    assert!(WORDLE_WORDS.contains(&word));
}

#[test]
fn wordle_rotation_advances_daily_and_wraps() {
    let cycle = DailyCycle::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let day0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let day1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let day30 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

    assert_eq!(cycle.wordle_for(&WORDLE_WORDS, day0).unwrap(), WORDLE_WORDS[0]);
    assert_eq!(cycle.wordle_for(&WORDLE_WORDS, day1).unwrap(), WORDLE_WORDS[1]);
    // 30-word table: day 30 wraps back to the first word
    assert_eq!(cycle.wordle_for(&WORDLE_WORDS, day30).unwrap(), WORDLE_WORDS[0]);
}
