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

/// Approximate Hangul renderings of the romanized readings. Covers every
/// reading in the syllabary tables.
const ROMAJI_TO_HANGUL: &[(&str, &str)] = &[
    ("a", "아"),
    ("i", "이"),
    ("u", "우"),
    ("e", "에"),
    ("o", "오"),
    ("ka", "카"),
    ("ki", "키"),
    ("ku", "쿠"),
    ("ke", "케"),
    ("ko", "코"),
    ("sa", "사"),
    ("shi", "시"),
    ("su", "스"),
    ("se", "세"),
    ("so", "소"),
    ("ta", "타"),
    ("chi", "치"),
    ("tsu", "쓰"),
    ("te", "테"),
    ("to", "토"),
    ("na", "나"),
    ("ni", "니"),
    ("nu", "누"),
    ("ne", "네"),
    ("no", "노"),
    ("ha", "하"),
    ("hi", "히"),
    ("fu", "후"),
    ("he", "헤"),
    ("ho", "호"),
    ("ma", "마"),
    ("mi", "미"),
    ("mu", "무"),
    ("me", "메"),
    ("mo", "모"),
    ("ya", "야"),
    ("yu", "유"),
    ("yo", "요"),
    ("ra", "라"),
    ("ri", "리"),
    ("ru", "루"),
    ("re", "레"),
    ("ro", "로"),
    ("wa", "와"),
    ("n", "응"),
    ("ga", "가"),
    ("gi", "기"),
    ("gu", "구"),
    ("ge", "게"),
    ("go", "고"),
    ("za", "자"),
    ("ji", "지"),
    ("zu", "즈"),
    ("ze", "제"),
    ("zo", "조"),
    ("da", "다"),
    ("de", "데"),
    ("do", "도"),
    ("ba", "바"),
    ("bi", "비"),
    ("bu", "부"),
    ("be", "베"),
    ("bo", "보"),
    ("pa", "파"),
    ("pi", "피"),
    ("pu", "푸"),
    ("pe", "페"),
    ("po", "포"),
];

/// Transliterate a romanized reading into its approximate Hangul form.
/// Readings without a table entry come back unchanged, so this never fails.
pub fn to_hangul(reading: &str) -> &str {
    ROMAJI_TO_HANGUL
        .iter()
        .find(|(romaji, _)| *romaji == reading)
        .map(|(_, hangul)| *hangul)
        .unwrap_or(reading)
}

#[cfg(test)]
mod tests {
    use crate::syllabary::Script;
    use crate::syllabary::entries;

    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(to_hangul("a"), "아");
        assert_eq!(to_hangul("tsu"), "쓰");
        assert_eq!(to_hangul("n"), "응");
        assert_eq!(to_hangul("po"), "포");
    }

    #[test]
    fn test_fallback_is_identity() {
        assert_eq!(to_hangul("kya"), "kya");
        assert_eq!(to_hangul(""), "");
    }

    #[test]
    fn test_covers_every_reading() {
        for script in [Script::Hiragana, Script::Katakana] {
            for entry in entries(script, true) {
                assert_ne!(
                    to_hangul(entry.reading),
                    entry.reading,
                    "no Hangul form for reading {:?}",
                    entry.reading
                );
            }
        }
    }
}
