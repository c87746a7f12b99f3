// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::answer::alternates;
use crate::hangul::to_hangul;
use crate::syllabary::Script;
use crate::syllabary::SyllabaryEntry;
use crate::syllabary::entries;

/// The default number of cards in a session.
pub const DEFAULT_COUNT: usize = 20;

/// The default per-card time limit in seconds.
pub const DEFAULT_LIMIT_SECONDS: u32 = 7;

/// What a session shows on each card, and what it expects back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Mode {
    /// Show the kana character; cards advance on the timer.
    Kana,
    /// Show the Hangul pronunciation with a script label.
    Pronunciation,
    /// Show the kana character; the learner types the reading.
    Typed,
    /// Show the Hangul pronunciation; the learner types the reading.
    Listening,
}

impl Mode {
    /// Whether this mode takes typed answers.
    pub fn accepts_answers(self) -> bool {
        matches!(self, Mode::Typed | Mode::Listening)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// Both scripts excluded, or no cards survived filtering.
    EmptySelection,
    /// A target card count of zero.
    InvalidCount,
    /// A per-card time limit of zero seconds.
    InvalidLimit,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigError::EmptySelection => write!(f, "select at least one script."),
            ConfigError::InvalidCount => write!(f, "the card count must be at least one."),
            ConfigError::InvalidLimit => {
                write!(f, "the per-card time limit must be at least one second.")
            }
        }
    }
}

impl Error for ConfigError {}

/// The options behind a session: which tables feed the pool, the card shape,
/// and the timing.
#[derive(Clone, Copy, Debug)]
pub struct DrillConfig {
    pub include_hiragana: bool,
    pub include_katakana: bool,
    pub include_voiced: bool,
    pub mode: Mode,
    pub count: usize,
    pub limit_seconds: u32,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            include_hiragana: true,
            include_katakana: true,
            include_voiced: true,
            mode: Mode::Kana,
            count: DEFAULT_COUNT,
            limit_seconds: DEFAULT_LIMIT_SECONDS,
        }
    }
}

/// A single flashcard. Every card carries the romanized reading it drills.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Card {
    Kana {
        character: &'static str,
        reading: &'static str,
    },
    Pronunciation {
        pronunciation: &'static str,
        reading: &'static str,
        /// Which script the learner should recall the character in.
        label: Script,
    },
    Typed {
        character: &'static str,
        reading: &'static str,
        accepted: &'static [&'static str],
    },
    Listening {
        pronunciation: &'static str,
        character: &'static str,
        reading: &'static str,
        accepted: &'static [&'static str],
    },
}

impl Card {
    pub fn reading(&self) -> &'static str {
        match self {
            Card::Kana { reading, .. } => reading,
            Card::Pronunciation { reading, .. } => reading,
            Card::Typed { reading, .. } => reading,
            Card::Listening { reading, .. } => reading,
        }
    }

    /// The alternate accepted spellings, for cards that take answers.
    pub fn accepted(&self) -> &'static [&'static str] {
        match self {
            Card::Typed { accepted, .. } => accepted,
            Card::Listening { accepted, .. } => accepted,
            _ => &[],
        }
    }
}

/// The shuffled, size-bounded card sequence for one session. Immutable once
/// built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[cfg(test)]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Union of the selected tables. Empty if both scripts are excluded.
pub fn build_pool(
    include_hiragana: bool,
    include_katakana: bool,
    include_voiced: bool,
) -> Vec<SyllabaryEntry> {
    let mut pool = Vec::new();
    if include_hiragana {
        pool.extend(entries(Script::Hiragana, include_voiced));
    }
    if include_katakana {
        pool.extend(entries(Script::Katakana, include_voiced));
    }
    pool
}

/// Validate a configuration and build its deck. The one entry point the host
/// goes through before starting a session.
pub fn configure(config: &DrillConfig, rng: &mut impl Rng) -> Result<Deck, ConfigError> {
    if config.count == 0 {
        return Err(ConfigError::InvalidCount);
    }
    if config.limit_seconds == 0 {
        return Err(ConfigError::InvalidLimit);
    }
    let pool = build_pool(
        config.include_hiragana,
        config.include_katakana,
        config.include_voiced,
    );
    let cards = match config.mode {
        Mode::Kana => build_kana_deck(&pool, config.count, rng),
        Mode::Pronunciation => build_pronunciation_deck(&pool, config.count, rng),
        Mode::Typed => build_typed_deck(&pool, config.count, rng),
        Mode::Listening => build_listening_deck(&pool, config.count, rng),
    };
    if cards.is_empty() {
        return Err(ConfigError::EmptySelection);
    }
    Ok(Deck { cards })
}

/// Shuffle the pool and truncate. Characters are unique across the tables, so
/// no dedup is needed here; a pool smaller than `count` just yields a shorter
/// deck.
fn build_kana_deck(pool: &[SyllabaryEntry], count: usize, rng: &mut impl Rng) -> Vec<Card> {
    let mut entries: Vec<&SyllabaryEntry> = pool.iter().collect();
    entries.shuffle(rng);
    entries
        .into_iter()
        .take(count)
        .map(|entry| Card::Kana {
            character: entry.character,
            reading: entry.reading,
        })
        .collect()
}

/// One card per distinct reading, labelled with the script it came from. When
/// both scripts contribute the reading, the label is a coin flip per card.
fn build_pronunciation_deck(
    pool: &[SyllabaryEntry],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Card> {
    let mut readings = distinct_readings(pool);
    readings.shuffle(rng);
    let mut cards = Vec::new();
    for reading in readings {
        let in_hiragana = pool
            .iter()
            .any(|e| e.script == Script::Hiragana && e.reading == reading);
        let in_katakana = pool
            .iter()
            .any(|e| e.script == Script::Katakana && e.reading == reading);
        let label = match (in_hiragana, in_katakana) {
            (true, true) => {
                if rng.random_bool(0.5) {
                    Script::Hiragana
                } else {
                    Script::Katakana
                }
            }
            (true, false) => Script::Hiragana,
            (false, true) => Script::Katakana,
            // A reading with no source script: cannot happen for readings
            // drawn from the pool, but skipping is cheaper than unreachable.
            (false, false) => continue,
        };
        cards.push(Card::Pronunciation {
            pronunciation: to_hangul(reading),
            reading,
            label,
        });
        if cards.len() >= count {
            break;
        }
    }
    cards
}

fn build_typed_deck(pool: &[SyllabaryEntry], count: usize, rng: &mut impl Rng) -> Vec<Card> {
    dedup_by_reading(pool, rng)
        .into_iter()
        .take(count)
        .map(|entry| Card::Typed {
            character: entry.character,
            reading: entry.reading,
            accepted: alternates(entry.reading),
        })
        .collect()
}

fn build_listening_deck(pool: &[SyllabaryEntry], count: usize, rng: &mut impl Rng) -> Vec<Card> {
    dedup_by_reading(pool, rng)
        .into_iter()
        .take(count)
        .map(|entry| Card::Listening {
            pronunciation: to_hangul(entry.reading),
            character: entry.character,
            reading: entry.reading,
            accepted: alternates(entry.reading),
        })
        .collect()
}

/// Distinct readings in pool order. を/ヲ collapse into the vowel "o", and the
/// two scripts collapse into one reading each.
fn distinct_readings(pool: &[SyllabaryEntry]) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    pool.iter()
        .map(|e| e.reading)
        .filter(|reading| seen.insert(*reading))
        .collect()
}

/// Shuffle the pool, then keep the first entry per reading.
fn dedup_by_reading<'a>(pool: &'a [SyllabaryEntry], rng: &mut impl Rng) -> Vec<&'a SyllabaryEntry> {
    let mut entries: Vec<&SyllabaryEntry> = pool.iter().collect();
    entries.shuffle(rng);
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.reading))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    fn config(mode: Mode) -> DrillConfig {
        DrillConfig {
            mode,
            ..DrillConfig::default()
        }
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(build_pool(true, true, true).len(), 142);
        assert_eq!(build_pool(true, true, false).len(), 92);
        assert_eq!(build_pool(true, false, false).len(), 46);
        assert_eq!(build_pool(false, true, true).len(), 71);
        assert!(build_pool(false, false, true).is_empty());
    }

    #[test]
    fn test_kana_deck_is_truncated() {
        let deck = configure(&config(Mode::Kana), &mut rng()).unwrap();
        assert_eq!(deck.len(), DEFAULT_COUNT);
    }

    #[test]
    fn test_small_pool_yields_short_deck() {
        // Hiragana base only has 46 characters; asking for 100 is fine.
        let config = DrillConfig {
            include_katakana: false,
            include_voiced: false,
            count: 100,
            ..DrillConfig::default()
        };
        let deck = configure(&config, &mut rng()).unwrap();
        assert_eq!(deck.len(), 46);
    }

    #[test]
    fn test_empty_selection() {
        let config = DrillConfig {
            include_hiragana: false,
            include_katakana: false,
            ..DrillConfig::default()
        };
        assert_eq!(
            configure(&config, &mut rng()),
            Err(ConfigError::EmptySelection)
        );
    }

    #[test]
    fn test_invalid_count() {
        let config = DrillConfig {
            count: 0,
            ..DrillConfig::default()
        };
        assert_eq!(
            configure(&config, &mut rng()),
            Err(ConfigError::InvalidCount)
        );
    }

    #[test]
    fn test_invalid_limit() {
        let config = DrillConfig {
            limit_seconds: 0,
            ..DrillConfig::default()
        };
        assert_eq!(
            configure(&config, &mut rng()),
            Err(ConfigError::InvalidLimit)
        );
    }

    #[test]
    fn test_readings_are_unique_in_answered_decks() {
        for mode in [Mode::Pronunciation, Mode::Typed, Mode::Listening] {
            let config = DrillConfig {
                count: 1000,
                ..config(mode)
            };
            let deck = configure(&config, &mut rng()).unwrap();
            let readings: HashSet<&str> = deck.iter().map(|card| card.reading()).collect();
            assert_eq!(readings.len(), deck.len(), "duplicate reading in {mode:?}");
        }
    }

    #[test]
    fn test_pronunciation_label_is_forced_with_one_script() {
        let config = DrillConfig {
            include_katakana: false,
            mode: Mode::Pronunciation,
            count: 1000,
            ..DrillConfig::default()
        };
        let deck = configure(&config, &mut rng()).unwrap();
        for card in deck.iter() {
            match card {
                Card::Pronunciation { label, .. } => assert_eq!(*label, Script::Hiragana),
                _ => panic!("expected a pronunciation card"),
            }
        }
    }

    #[test]
    fn test_pronunciation_cards_carry_hangul() {
        let deck = configure(&config(Mode::Pronunciation), &mut rng()).unwrap();
        for card in deck.iter() {
            match card {
                Card::Pronunciation {
                    pronunciation,
                    reading,
                    ..
                } => {
                    assert_eq!(*pronunciation, to_hangul(reading));
                    assert_ne!(pronunciation, reading);
                }
                _ => panic!("expected a pronunciation card"),
            }
        }
    }

    #[test]
    fn test_typed_cards_carry_equivalence_classes() {
        let config = DrillConfig {
            mode: Mode::Typed,
            count: 1000,
            ..DrillConfig::default()
        };
        let deck = configure(&config, &mut rng()).unwrap();
        let shi = deck.iter().find(|card| card.reading() == "shi").unwrap();
        assert_eq!(shi.accepted(), &["si", "ci"][..]);
        let ka = deck.iter().find(|card| card.reading() == "ka").unwrap();
        assert!(ka.accepted().is_empty());
    }

    #[test]
    fn test_decks_are_shuffled() {
        // Two different seeds should disagree on the order of a full deck.
        let config = DrillConfig {
            count: 1000,
            ..DrillConfig::default()
        };
        let a = configure(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = configure(&config, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.len(), b.len());
        let a: Vec<&Card> = a.iter().collect();
        let b: Vec<&Card> = b.iter().collect();
        assert_ne!(a, b);
    }
}
