//! Built-in sample content tables.
//!
//! The production game ships much larger authored tables from its content
//! pipeline; this module embeds a working subset so the daily endpoints are
//! self-contained. The selector never inspects item fields, only positions,
//! so table order is how authors balance what each day serves.

use serde::Serialize;

/// An English/Japanese vocabulary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VocabularyPair {
    pub id: &'static str,
    pub english: &'static str,
    pub japanese: &'static str,
    pub category: &'static str,
}

/// One branching-story segment: a titled scene with its opening line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorySegment {
    pub id: &'static str,
    pub title: &'static str,
    pub title_jp: &'static str,
    pub opening_line: &'static str,
}

/// Puzzle words, one per day over a 30-day rotation.
pub const WORDLE_WORDS: [&str; 30] = [
    "こんにちは",
    "ありがとう",
    "おはよう",
    "さようなら",
    "おやすみ",
    "すみません",
    "どういたしまして",
    "おねがいします",
    "はい",
    "いいえ",
    "わかりました",
    "おいしい",
    "たべもの",
    "のみもの",
    "みず",
    "おちゃ",
    "ごはん",
    "いぬ",
    "ねこ",
    "とり",
    "うみ",
    "やま",
    "かわ",
    "そら",
    "つき",
    "ほし",
    "あめ",
    "ゆき",
    "かぜ",
    "はな",
];

// Sized to the 30-day vocabulary cycle: 5 starter pairs plus 3 new pairs per
// remaining day never run past the end of the table.
pub const VOCABULARY_PAIRS: [VocabularyPair; 90] = [
    VocabularyPair { id: "vocab-1", english: "Apple", japanese: "りんご", category: "Food" },
    VocabularyPair { id: "vocab-2", english: "Water", japanese: "水", category: "Essential" },
    VocabularyPair { id: "vocab-3", english: "House", japanese: "家", category: "Place" },
    VocabularyPair { id: "vocab-4", english: "Dog", japanese: "いぬ", category: "Animals" },
    VocabularyPair { id: "vocab-5", english: "Cat", japanese: "ねこ", category: "Animals" },
    VocabularyPair { id: "vocab-6", english: "Tea", japanese: "おちゃ", category: "Food" },
    VocabularyPair { id: "vocab-7", english: "Rice", japanese: "ごはん", category: "Food" },
    VocabularyPair { id: "vocab-8", english: "Sea", japanese: "うみ", category: "Nature" },
    VocabularyPair { id: "vocab-9", english: "Mountain", japanese: "やま", category: "Nature" },
    VocabularyPair { id: "vocab-10", english: "River", japanese: "かわ", category: "Nature" },
    VocabularyPair { id: "vocab-11", english: "Sky", japanese: "そら", category: "Nature" },
    VocabularyPair { id: "vocab-12", english: "Moon", japanese: "つき", category: "Nature" },
    VocabularyPair { id: "vocab-13", english: "Rain", japanese: "あめ", category: "Weather" },
    VocabularyPair { id: "vocab-14", english: "Snow", japanese: "ゆき", category: "Weather" },
    VocabularyPair { id: "vocab-15", english: "Flower", japanese: "はな", category: "Nature" },
    VocabularyPair { id: "vocab-16", english: "Bird", japanese: "とり", category: "Animals" },
    VocabularyPair { id: "vocab-17", english: "Fish", japanese: "さかな", category: "Animals" },
    VocabularyPair { id: "vocab-18", english: "Book", japanese: "ほん", category: "Objects" },
    VocabularyPair { id: "vocab-19", english: "Car", japanese: "くるま", category: "Transport" },
    VocabularyPair { id: "vocab-20", english: "Train", japanese: "でんしゃ", category: "Transport" },
    VocabularyPair { id: "vocab-21", english: "Station", japanese: "えき", category: "Place" },
    VocabularyPair { id: "vocab-22", english: "School", japanese: "がっこう", category: "Place" },
    VocabularyPair { id: "vocab-23", english: "Teacher", japanese: "せんせい", category: "People" },
    VocabularyPair { id: "vocab-24", english: "Student", japanese: "がくせい", category: "People" },
    VocabularyPair { id: "vocab-25", english: "Friend", japanese: "ともだち", category: "People" },
    VocabularyPair { id: "vocab-26", english: "Family", japanese: "かぞく", category: "People" },
    VocabularyPair { id: "vocab-27", english: "Mother", japanese: "おかあさん", category: "People" },
    VocabularyPair { id: "vocab-28", english: "Father", japanese: "おとうさん", category: "People" },
    VocabularyPair { id: "vocab-29", english: "Older sister", japanese: "おねえさん", category: "People" },
    VocabularyPair { id: "vocab-30", english: "Older brother", japanese: "おにいさん", category: "People" },
    VocabularyPair { id: "vocab-31", english: "Child", japanese: "こども", category: "People" },
    VocabularyPair { id: "vocab-32", english: "Hand", japanese: "て", category: "Body" },
    VocabularyPair { id: "vocab-33", english: "Eye", japanese: "め", category: "Body" },
    VocabularyPair { id: "vocab-34", english: "Ear", japanese: "みみ", category: "Body" },
    VocabularyPair { id: "vocab-35", english: "Mouth", japanese: "くち", category: "Body" },
    VocabularyPair { id: "vocab-36", english: "Foot", japanese: "あし", category: "Body" },
    VocabularyPair { id: "vocab-37", english: "Head", japanese: "あたま", category: "Body" },
    VocabularyPair { id: "vocab-38", english: "Morning", japanese: "あさ", category: "Time" },
    VocabularyPair { id: "vocab-39", english: "Noon", japanese: "ひる", category: "Time" },
    VocabularyPair { id: "vocab-40", english: "Night", japanese: "よる", category: "Time" },
    VocabularyPair { id: "vocab-41", english: "Today", japanese: "きょう", category: "Time" },
    VocabularyPair { id: "vocab-42", english: "Tomorrow", japanese: "あした", category: "Time" },
    VocabularyPair { id: "vocab-43", english: "Yesterday", japanese: "きのう", category: "Time" },
    VocabularyPair { id: "vocab-44", english: "Week", japanese: "しゅう", category: "Time" },
    VocabularyPair { id: "vocab-45", english: "Month", japanese: "つき", category: "Time" },
    VocabularyPair { id: "vocab-46", english: "Year", japanese: "とし", category: "Time" },
    VocabularyPair { id: "vocab-47", english: "Money", japanese: "おかね", category: "Essential" },
    VocabularyPair { id: "vocab-48", english: "Shop", japanese: "みせ", category: "Place" },
    VocabularyPair { id: "vocab-49", english: "Hospital", japanese: "びょういん", category: "Place" },
    VocabularyPair { id: "vocab-50", english: "Bank", japanese: "ぎんこう", category: "Place" },
    VocabularyPair { id: "vocab-51", english: "Post office", japanese: "ゆうびんきょく", category: "Place" },
    VocabularyPair { id: "vocab-52", english: "Library", japanese: "としょかん", category: "Place" },
    VocabularyPair { id: "vocab-53", english: "Park", japanese: "こうえん", category: "Place" },
    VocabularyPair { id: "vocab-54", english: "Bread", japanese: "パン", category: "Food" },
    VocabularyPair { id: "vocab-55", english: "Egg", japanese: "たまご", category: "Food" },
    VocabularyPair { id: "vocab-56", english: "Meat", japanese: "にく", category: "Food" },
    VocabularyPair { id: "vocab-57", english: "Vegetable", japanese: "やさい", category: "Food" },
    VocabularyPair { id: "vocab-58", english: "Fruit", japanese: "くだもの", category: "Food" },
    VocabularyPair { id: "vocab-59", english: "Milk", japanese: "ぎゅうにゅう", category: "Food" },
    VocabularyPair { id: "vocab-60", english: "Coffee", japanese: "コーヒー", category: "Food" },
    VocabularyPair { id: "vocab-61", english: "Umbrella", japanese: "かさ", category: "Objects" },
    VocabularyPair { id: "vocab-62", english: "Bag", japanese: "かばん", category: "Objects" },
    VocabularyPair { id: "vocab-63", english: "Shoes", japanese: "くつ", category: "Objects" },
    VocabularyPair { id: "vocab-64", english: "Clothes", japanese: "ふく", category: "Objects" },
    VocabularyPair { id: "vocab-65", english: "Hat", japanese: "ぼうし", category: "Objects" },
    VocabularyPair { id: "vocab-66", english: "Watch", japanese: "とけい", category: "Objects" },
    VocabularyPair { id: "vocab-67", english: "Phone", japanese: "でんわ", category: "Objects" },
    VocabularyPair { id: "vocab-68", english: "Desk", japanese: "つくえ", category: "Objects" },
    VocabularyPair { id: "vocab-69", english: "Chair", japanese: "いす", category: "Objects" },
    VocabularyPair { id: "vocab-70", english: "Door", japanese: "ドア", category: "Objects" },
    VocabularyPair { id: "vocab-71", english: "Window", japanese: "まど", category: "Objects" },
    VocabularyPair { id: "vocab-72", english: "Room", japanese: "へや", category: "Place" },
    VocabularyPair { id: "vocab-73", english: "Big", japanese: "おおきい", category: "Adjectives" },
    VocabularyPair { id: "vocab-74", english: "Small", japanese: "ちいさい", category: "Adjectives" },
    VocabularyPair { id: "vocab-75", english: "New", japanese: "あたらしい", category: "Adjectives" },
    VocabularyPair { id: "vocab-76", english: "Old", japanese: "ふるい", category: "Adjectives" },
    VocabularyPair { id: "vocab-77", english: "Hot", japanese: "あつい", category: "Adjectives" },
    VocabularyPair { id: "vocab-78", english: "Cold", japanese: "さむい", category: "Adjectives" },
    VocabularyPair { id: "vocab-79", english: "Fun", japanese: "たのしい", category: "Adjectives" },
    VocabularyPair { id: "vocab-80", english: "Difficult", japanese: "むずかしい", category: "Adjectives" },
    VocabularyPair { id: "vocab-81", english: "Easy", japanese: "やさしい", category: "Adjectives" },
    VocabularyPair { id: "vocab-82", english: "To eat", japanese: "たべる", category: "Verbs" },
    VocabularyPair { id: "vocab-83", english: "To drink", japanese: "のむ", category: "Verbs" },
    VocabularyPair { id: "vocab-84", english: "To go", japanese: "いく", category: "Verbs" },
    VocabularyPair { id: "vocab-85", english: "To come", japanese: "くる", category: "Verbs" },
    VocabularyPair { id: "vocab-86", english: "To see", japanese: "みる", category: "Verbs" },
    VocabularyPair { id: "vocab-87", english: "To hear", japanese: "きく", category: "Verbs" },
    VocabularyPair { id: "vocab-88", english: "To read", japanese: "よむ", category: "Verbs" },
    VocabularyPair { id: "vocab-89", english: "To write", japanese: "かく", category: "Verbs" },
    VocabularyPair { id: "vocab-90", english: "To speak", japanese: "はなす", category: "Verbs" },
];

pub const STORY_SEGMENTS: [StorySegment; 3] = [
    StorySegment {
        id: "airport-arrival",
        title: "Airport Arrival",
        title_jp: "空港到着",
        opening_line: "ようこそ日本へ！ゆきです。よろしくおねがいします。",
    },
    StorySegment {
        id: "first-meal",
        title: "First Meal",
        title_jp: "はじめての食事",
        opening_line: "おなかがすきましたか。ラーメンはどうですか。",
    },
    StorySegment {
        id: "train-station",
        title: "Train Station",
        title_jp: "駅",
        opening_line: "すみません、しんじゅくえきはどこですか。",
    },
];
