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

use crate::answer::is_accepted;
use crate::deck::Card;
use crate::deck::ConfigError;
use crate::deck::Deck;
use crate::deck::Mode;
use crate::timestamp::Timestamp;

/// The recorded result of a single card.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Correct { given: String },
    Incorrect { given: String, expected: String },
    Skipped,
    TimedOut,
}

/// One-shot event returned by an advancing transition. The host reacts to it
/// exactly once (e.g. playing a transition sound); it is never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Progress {
    /// Moved to the next card.
    Advanced,
    /// Moved past the last card; the session is over.
    Completed,
}

/// The final report of a completed session.
pub struct Summary<'a> {
    pub score: usize,
    pub total: usize,
    /// One outcome per card, in deck order.
    pub outcomes: Vec<(&'a Card, &'a Outcome)>,
}

/// A running drill session: the deck, the cursor, the per-card timer origin,
/// and the outcomes recorded so far.
///
/// A session is a plain value owned by its caller. It is not internally
/// synchronized; a host sharing it across threads must wrap it in a mutex and
/// perform one operation per lock acquisition.
pub struct Session {
    deck: Deck,
    mode: Mode,
    limit_seconds: u32,
    position: usize,
    card_started_at: Timestamp,
    score: usize,
    outcomes: Vec<Outcome>,
    /// Whether the current card already has a recorded answer, pending
    /// advance. Makes `submit_answer` idempotent per card.
    answered: bool,
}

impl Session {
    /// Begin a session at the first card. Fails on an empty deck, which would
    /// otherwise masquerade as instantly completed.
    pub fn start(
        deck: Deck,
        mode: Mode,
        limit_seconds: u32,
        now: Timestamp,
    ) -> Result<Session, ConfigError> {
        if deck.is_empty() {
            return Err(ConfigError::EmptySelection);
        }
        Ok(Session {
            deck,
            mode,
            limit_seconds,
            position: 0,
            card_started_at: now,
            score: 0,
            outcomes: Vec::new(),
            answered: false,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Zero-based position of the current card.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.position >= self.deck.len()
    }

    /// The card under the cursor, or `None` once the session is completed.
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.position)
    }

    /// The outcome already recorded for the current card, if any.
    pub fn current_outcome(&self) -> Option<&Outcome> {
        if self.answered {
            self.outcomes.get(self.position)
        } else {
            None
        }
    }

    /// Seconds left on the current card, clamped to zero. A pure query: safe
    /// to call on any cadence, with arbitrarily large gaps in `now`.
    pub fn remaining_seconds(&self, now: Timestamp) -> i64 {
        let elapsed = now.seconds_since(self.card_started_at);
        (self.limit_seconds as i64 - elapsed).max(0)
    }

    /// Time out the current card. Records `TimedOut` unless an answer was
    /// already recorded, then advances exactly one position, no matter how
    /// much real time has passed. The caller is responsible for only invoking
    /// this when `remaining_seconds` is zero.
    pub fn expire(&mut self, now: Timestamp) -> Option<Progress> {
        self.advance(Outcome::TimedOut, now)
    }

    /// Learner-initiated advance without an answer. Records `Skipped` unless
    /// an answer was already recorded.
    pub fn skip(&mut self, now: Timestamp) -> Option<Progress> {
        self.advance(Outcome::Skipped, now)
    }

    fn advance(&mut self, fallback: Outcome, now: Timestamp) -> Option<Progress> {
        if self.is_completed() {
            return None;
        }
        if !self.answered {
            self.outcomes.push(fallback);
        }
        self.position += 1;
        self.answered = false;
        self.card_started_at = now;
        if self.is_completed() {
            Some(Progress::Completed)
        } else {
            Some(Progress::Advanced)
        }
    }

    /// Check a typed response against the current card. Only meaningful in
    /// the typed/listening modes; a no-op (returning `None`) in display
    /// modes, after completion, or when the card was already answered, so a
    /// re-rendering host can re-issue the event without double-counting.
    ///
    /// Does not advance: the host follows up with `skip` or `expire`.
    pub fn submit_answer(&mut self, given: &str) -> Option<&Outcome> {
        if !self.mode.accepts_answers() || self.answered {
            return None;
        }
        let card = self.deck.get(self.position)?;
        let outcome = if is_accepted(given, card.reading()) {
            self.score += 1;
            Outcome::Correct {
                given: given.trim().to_string(),
            }
        } else {
            Outcome::Incorrect {
                given: given.trim().to_string(),
                expected: card.reading().to_string(),
            }
        };
        self.outcomes.push(outcome);
        self.answered = true;
        self.outcomes.last()
    }

    /// The final report. `None` until the session is completed.
    pub fn summary(&self) -> Option<Summary<'_>> {
        if !self.is_completed() {
            return None;
        }
        Some(Summary {
            score: self.score,
            total: self.deck.len(),
            outcomes: self.deck.iter().zip(self.outcomes.iter()).collect(),
        })
    }
}
