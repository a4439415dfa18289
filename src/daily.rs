//! Deterministic daily content selection.
//!
//! Every user sees the same content on a given calendar day: a date key
//! (`YYYY-MM-DD`) is hashed to an integer and reduced modulo the content
//! table length. The hash is a plain sum of character codes — reproducible
//! and cheap, with no claim to uniform distribution. Content authors balance
//! the tables by hand instead.

use chrono::{Duration, Local, NaiveDate};
use thiserror::Error;

/// Date key format shared by every selection operation.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Pairs shown on the first day of a vocabulary cycle.
const STARTER_PAIR_COUNT: usize = 5;
/// New pairs introduced on every later day of the cycle.
const NEW_PAIRS_PER_DAY: usize = 3;
/// Pairs carried over from the previous day's window.
const CARRIED_PAIRS: usize = 2;
/// Length of the vocabulary cycle in days.
const VOCABULARY_CYCLE_DAYS: i64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cannot select from an empty content sequence")]
    EmptySequence,
}

/// Sum of the character codes of a date key.
///
/// Stable for a given key, not cryptographic, tolerant of clustering.
pub fn date_hash(date_key: &str) -> u32 {
    date_key.chars().map(|c| c as u32).sum()
}

/// Today's date key from the local clock.
pub fn today_key() -> String {
    Local::now().format(DATE_KEY_FORMAT).to_string()
}

/// Date key for `days_ago` days before today.
pub fn date_key_days_ago(days_ago: i64) -> String {
    (Local::now().date_naive() - Duration::days(days_ago))
        .format(DATE_KEY_FORMAT)
        .to_string()
}

/// Index into a sequence of `len` items for the given date key.
fn daily_index(len: usize, date_key: &str) -> usize {
    date_hash(date_key) as usize % len
}

/// Pick the item for `date_key` (today when `None`).
pub fn select_one<'a, T>(seq: &'a [T], date_key: Option<&str>) -> Result<&'a T, SelectionError> {
    if seq.is_empty() {
        return Err(SelectionError::EmptySequence);
    }
    let key = date_key.map(str::to_string).unwrap_or_else(today_key);
    Ok(&seq[daily_index(seq.len(), &key)])
}

/// Pick `count` items for `date_key`, offsetting each pick's hash by
/// `i * 1000` before the modulo.
///
/// Picks are not de-duplicated: a short sequence can repeat items. Callers
/// that need distinct items must use a table longer than `count`.
pub fn select_many<'a, T>(
    seq: &'a [T],
    count: usize,
    date_key: Option<&str>,
) -> Result<Vec<&'a T>, SelectionError> {
    if seq.is_empty() {
        return Err(SelectionError::EmptySequence);
    }
    let key = date_key.map(str::to_string).unwrap_or_else(today_key);
    let hash = date_hash(&key) as usize;
    Ok((0..count)
        .map(|i| &seq[(hash + i * 1000) % seq.len()])
        .collect())
}

/// True when `last_seen` is not today's date key, i.e. cached daily content
/// should be replaced.
pub fn should_refresh(last_seen: &str) -> bool {
    last_seen != today_key()
}

/// Day-cycle selection anchored at an explicit start date.
///
/// Story segments, vocabulary windows, and the puzzle word all advance once
/// per calendar day relative to the cycle start.
#[derive(Debug, Clone, Copy)]
pub struct DailyCycle {
    start: NaiveDate,
}

impl DailyCycle {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Cycle starting today.
    pub fn starting_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Days elapsed since the cycle start. Dates before the start clamp to 0.
    pub fn day_number(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days().max(0)
    }

    /// The story segment for `date`.
    pub fn story_for<'a, T>(&self, stories: &'a [T], date: NaiveDate) -> Result<&'a T, SelectionError> {
        if stories.is_empty() {
            return Err(SelectionError::EmptySequence);
        }
        let idx = self.day_number(date) as usize % stories.len();
        Ok(&stories[idx])
    }

    /// The vocabulary window for `date` over a 30-day cycle.
    ///
    /// Day 0 returns the first five pairs. Every later day returns three new
    /// pairs starting at `day * 3 - 1` plus the two pairs kept from the
    /// previous day's window, so learners see a mix of fresh and familiar
    /// material.
    pub fn vocabulary_for<'a, T>(
        &self,
        pairs: &'a [T],
        date: NaiveDate,
    ) -> Result<Vec<&'a T>, SelectionError> {
        if pairs.is_empty() {
            return Err(SelectionError::EmptySequence);
        }
        let day = (self.day_number(date) % VOCABULARY_CYCLE_DAYS) as usize;
        if day == 0 {
            return Ok(pairs.iter().take(STARTER_PAIR_COUNT).collect());
        }

        let new_start = day * NEW_PAIRS_PER_DAY - 1;
        let mut window: Vec<&T> = clamped_slice(pairs, new_start, NEW_PAIRS_PER_DAY);

        let kept_start = ((day - 1) * NEW_PAIRS_PER_DAY).saturating_sub(1);
        window.extend(clamped_slice(pairs, kept_start, CARRIED_PAIRS));
        Ok(window)
    }

    /// The puzzle word for `date`.
    pub fn wordle_for<'a>(&self, words: &'a [&'a str], date: NaiveDate) -> Result<&'a str, SelectionError> {
        if words.is_empty() {
            return Err(SelectionError::EmptySequence);
        }
        let idx = self.day_number(date) as usize % words.len();
        Ok(words[idx])
    }
}

/// Global phrase rotation: the window of `count` phrases introduced on day
/// `day_offset`, after `starter` phrases were handed out on day 0. Wraps
/// around the dataset so long-running users keep receiving content.
pub fn rotation_window<T>(dataset: &[T], starter: usize, day_offset: usize, count: usize) -> Vec<&T> {
    if dataset.is_empty() {
        return Vec::new();
    }
    let start = (starter + day_offset * count) % dataset.len();
    (0..count).map(|i| &dataset[(start + i) % dataset.len()]).collect()
}

fn clamped_slice<T>(seq: &[T], start: usize, count: usize) -> Vec<&T> {
    let start = start.min(seq.len());
    let end = (start + count).min(seq.len());
    seq[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn hash_is_sum_of_character_codes() {
        // '2'+'0'+'2'+'4' + '-' + '0'+'1' + '-' + '0'+'1'
        assert_eq!(date_hash("2024-01-01"), 484);
        assert_eq!(date_hash(""), 0);
    }

    #[test]
    fn selection_is_deterministic() {
        let first = *select_one(&LETTERS, Some("2024-01-01")).unwrap();
        for _ in 0..100 {
            assert_eq!(*select_one(&LETTERS, Some("2024-01-01")).unwrap(), first);
        }
        // 484 % 3 == 1
        assert_eq!(first, "b");
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let empty: [&str; 0] = [];
        assert_eq!(
            select_one(&empty, Some("2024-01-01")).unwrap_err(),
            SelectionError::EmptySequence
        );
        assert_eq!(
            select_many(&empty, 3, Some("2024-01-01")).unwrap_err(),
            SelectionError::EmptySequence
        );
    }

    #[test]
    fn select_many_is_stable_and_sized() {
        let a = select_many(&LETTERS, 3, Some("2024-01-01")).unwrap();
        let b = select_many(&LETTERS, 3, Some("2024-01-01")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        // hash + i*1000 per pick: 484 % 3, 1484 % 3, 2484 % 3
        assert_eq!(
            a.iter().map(|s| **s).collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );
    }

    #[test]
    fn refresh_only_on_new_day() {
        assert!(!should_refresh(&today_key()));
        assert!(should_refresh(&date_key_days_ago(1)));
    }

    #[test]
    fn day_number_counts_from_cycle_start() {
        let cycle = DailyCycle::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cycle.day_number(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 0);
        assert_eq!(cycle.day_number(NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()), 3);
        // before the start clamps rather than going negative
        assert_eq!(cycle.day_number(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()), 0);
    }

    #[test]
    fn vocabulary_window_day_zero_is_starter_set() {
        let pairs: Vec<u32> = (0..90).collect();
        let cycle = DailyCycle::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let day0 = cycle
            .vocabulary_for(&pairs, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        assert_eq!(day0.iter().map(|p| **p).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn vocabulary_window_mixes_new_and_carried_pairs() {
        let pairs: Vec<u32> = (0..90).collect();
        let cycle = DailyCycle::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        // day 2: new pairs start at 2*3-1 = 5, carried start at 3-1 = 2
        let day2 = cycle
            .vocabulary_for(&pairs, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
            .unwrap();
        assert_eq!(day2.iter().map(|p| **p).collect::<Vec<_>>(), vec![5, 6, 7, 2, 3]);
    }

    #[test]
    fn story_and_wordle_wrap_modulo_table_length() {
        let stories = ["intro", "market", "station"];
        let words = ["みず", "ねこ"];
        let cycle = DailyCycle::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let day4 = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(*cycle.story_for(&stories, day4).unwrap(), "market");
        assert_eq!(cycle.wordle_for(&words, day4).unwrap(), "みず");
    }

    #[test]
    fn rotation_window_wraps_past_dataset_end() {
        let dataset: Vec<u32> = (0..10).collect();
        // starter 5, day 2, count 3: start = (5 + 6) % 10 = 1
        let window = rotation_window(&dataset, 5, 2, 3);
        assert_eq!(window.iter().map(|p| **p).collect::<Vec<_>>(), vec![1, 2, 3]);
        // day 3: start = (5 + 9) % 10 = 4 ... and day 5 wraps: (5 + 15) % 10 = 0
        let wrapped = rotation_window(&dataset, 5, 3, 4);
        assert_eq!(wrapped.iter().map(|p| **p).collect::<Vec<_>>(), vec![4, 5, 6, 7]);
        let around = rotation_window(&dataset, 8, 0, 4);
        assert_eq!(around.iter().map(|p| **p).collect::<Vec<_>>(), vec![8, 9, 0, 1]);
    }
}
