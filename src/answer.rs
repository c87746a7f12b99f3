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

/// Alternate accepted romanizations, keyed by the Hepburn reading used in the
/// syllabary tables. Mostly Kunrei-shiki spellings, plus the common keyboard
/// inputs "nn" and "wo".
const ALTERNATES: &[(&str, &[&str])] = &[
    ("shi", &["si", "ci"]),
    ("chi", &["ti"]),
    ("tsu", &["tu"]),
    ("fu", &["hu"]),
    ("ji", &["zi", "di"]),
    ("zu", &["du"]),
    ("n", &["nn"]),
    ("o", &["wo"]),
];

/// The equivalence class of a reading. Readings with a single common
/// romanization have an empty class.
pub fn alternates(reading: &str) -> &'static [&'static str] {
    ALTERNATES
        .iter()
        .find(|(r, _)| *r == reading)
        .map(|(_, alts)| *alts)
        .unwrap_or(&[])
}

/// Whether a typed response matches the expected reading, after trimming and
/// case-folding, either exactly or through the equivalence table.
pub fn is_accepted(given: &str, expected: &str) -> bool {
    let given = given.trim().to_lowercase();
    given == expected || alternates(expected).contains(&given.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_accepted("ka", "ka"));
        assert!(!is_accepted("ki", "ka"));
    }

    #[test]
    fn test_normalization() {
        assert!(is_accepted("  KA ", "ka"));
        assert!(is_accepted("Shi", "shi"));
    }

    #[test]
    fn test_alternate_spellings() {
        assert!(is_accepted("si", "shi"));
        assert!(is_accepted("ci", "shi"));
        assert!(is_accepted("ti", "chi"));
        assert!(is_accepted("tu", "tsu"));
        assert!(is_accepted("hu", "fu"));
        assert!(is_accepted("zi", "ji"));
        assert!(is_accepted("di", "ji"));
        assert!(is_accepted("du", "zu"));
        assert!(is_accepted("nn", "n"));
        assert!(is_accepted("wo", "o"));
        assert!(!is_accepted("xx", "shi"));
    }

    #[test]
    fn test_equivalence_is_directed() {
        // "shi" accepts "si", but an expected "si" does not exist in the
        // tables and has no class of its own.
        assert!(alternates("si").is_empty());
        assert!(!is_accepted("shi", "si"));
    }

    #[test]
    fn test_unlisted_reading_has_empty_class() {
        assert!(alternates("ka").is_empty());
        assert!(alternates("").is_empty());
    }
}
