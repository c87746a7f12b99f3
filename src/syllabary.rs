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

use std::fmt::Display;
use std::fmt::Formatter;

/// One of the two kana scripts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Display for Script {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Script::Hiragana => write!(f, "hiragana"),
            Script::Katakana => write!(f, "katakana"),
        }
    }
}

/// A single character of a syllabary, with its romanized reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SyllabaryEntry {
    pub character: &'static str,
    pub reading: &'static str,
    pub script: Script,
    pub voiced: bool,
}

/// The base hiragana set: vowels, the consonant rows, and the syllabic nasal.
///
/// Note that を shares the reading "o" with お: readings are not unique across
/// a table, only characters are.
const HIRAGANA_BASE: &[(&str, &str)] = &[
    ("あ", "a"),
    ("い", "i"),
    ("う", "u"),
    ("え", "e"),
    ("お", "o"),
    ("か", "ka"),
    ("き", "ki"),
    ("く", "ku"),
    ("け", "ke"),
    ("こ", "ko"),
    ("さ", "sa"),
    ("し", "shi"),
    ("す", "su"),
    ("せ", "se"),
    ("そ", "so"),
    ("た", "ta"),
    ("ち", "chi"),
    ("つ", "tsu"),
    ("て", "te"),
    ("と", "to"),
    ("な", "na"),
    ("に", "ni"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("は", "ha"),
    ("ひ", "hi"),
    ("ふ", "fu"),
    ("へ", "he"),
    ("ほ", "ho"),
    ("ま", "ma"),
    ("み", "mi"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("や", "ya"),
    ("ゆ", "yu"),
    ("よ", "yo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("わ", "wa"),
    ("を", "o"),
    ("ん", "n"),
];

/// The hiragana dakuten/handakuten extension. ぢ and づ share the readings
/// "ji" and "zu" with じ and ず.
const HIRAGANA_VOICED: &[(&str, &str)] = &[
    ("が", "ga"),
    ("ぎ", "gi"),
    ("ぐ", "gu"),
    ("げ", "ge"),
    ("ご", "go"),
    ("ざ", "za"),
    ("じ", "ji"),
    ("ず", "zu"),
    ("ぜ", "ze"),
    ("ぞ", "zo"),
    ("だ", "da"),
    ("ぢ", "ji"),
    ("づ", "zu"),
    ("で", "de"),
    ("ど", "do"),
    ("ば", "ba"),
    ("び", "bi"),
    ("ぶ", "bu"),
    ("べ", "be"),
    ("ぼ", "bo"),
    ("ぱ", "pa"),
    ("ぴ", "pi"),
    ("ぷ", "pu"),
    ("ぺ", "pe"),
    ("ぽ", "po"),
];

const KATAKANA_BASE: &[(&str, &str)] = &[
    ("ア", "a"),
    ("イ", "i"),
    ("ウ", "u"),
    ("エ", "e"),
    ("オ", "o"),
    ("カ", "ka"),
    ("キ", "ki"),
    ("ク", "ku"),
    ("ケ", "ke"),
    ("コ", "ko"),
    ("サ", "sa"),
    ("シ", "shi"),
    ("ス", "su"),
    ("セ", "se"),
    ("ソ", "so"),
    ("タ", "ta"),
    ("チ", "chi"),
    ("ツ", "tsu"),
    ("テ", "te"),
    ("ト", "to"),
    ("ナ", "na"),
    ("ニ", "ni"),
    ("ヌ", "nu"),
    ("ネ", "ne"),
    ("ノ", "no"),
    ("ハ", "ha"),
    ("ヒ", "hi"),
    ("フ", "fu"),
    ("ヘ", "he"),
    ("ホ", "ho"),
    ("マ", "ma"),
    ("ミ", "mi"),
    ("ム", "mu"),
    ("メ", "me"),
    ("モ", "mo"),
    ("ヤ", "ya"),
    ("ユ", "yu"),
    ("ヨ", "yo"),
    ("ラ", "ra"),
    ("リ", "ri"),
    ("ル", "ru"),
    ("レ", "re"),
    ("ロ", "ro"),
    ("ワ", "wa"),
    ("ヲ", "o"),
    ("ン", "n"),
];

const KATAKANA_VOICED: &[(&str, &str)] = &[
    ("ガ", "ga"),
    ("ギ", "gi"),
    ("グ", "gu"),
    ("ゲ", "ge"),
    ("ゴ", "go"),
    ("ザ", "za"),
    ("ジ", "ji"),
    ("ズ", "zu"),
    ("ゼ", "ze"),
    ("ゾ", "zo"),
    ("ダ", "da"),
    ("ヂ", "ji"),
    ("ヅ", "zu"),
    ("デ", "de"),
    ("ド", "do"),
    ("バ", "ba"),
    ("ビ", "bi"),
    ("ブ", "bu"),
    ("ベ", "be"),
    ("ボ", "bo"),
    ("パ", "pa"),
    ("ピ", "pi"),
    ("プ", "pu"),
    ("ペ", "pe"),
    ("ポ", "po"),
];

/// The entries of a script: the base set, plus the voiced extension if
/// requested. Order follows the gojūon tables.
pub fn entries(script: Script, include_voiced: bool) -> Vec<SyllabaryEntry> {
    let (base, voiced) = match script {
        Script::Hiragana => (HIRAGANA_BASE, HIRAGANA_VOICED),
        Script::Katakana => (KATAKANA_BASE, KATAKANA_VOICED),
    };
    let mut entries: Vec<SyllabaryEntry> = base
        .iter()
        .map(|&(character, reading)| SyllabaryEntry {
            character,
            reading,
            script,
            voiced: false,
        })
        .collect();
    if include_voiced {
        entries.extend(voiced.iter().map(|&(character, reading)| SyllabaryEntry {
            character,
            reading,
            script,
            voiced: true,
        }));
    }
    entries
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(entries(Script::Hiragana, false).len(), 46);
        assert_eq!(entries(Script::Hiragana, true).len(), 71);
        assert_eq!(entries(Script::Katakana, false).len(), 46);
        assert_eq!(entries(Script::Katakana, true).len(), 71);
    }

    #[test]
    fn test_characters_are_unique() {
        for script in [Script::Hiragana, Script::Katakana] {
            let entries = entries(script, true);
            let characters: HashSet<&str> = entries.iter().map(|e| e.character).collect();
            assert_eq!(characters.len(), entries.len());
        }
    }

    #[test]
    fn test_particle_shares_the_vowel_reading() {
        // Both を and お read "o": consumers must dedup by reading where the
        // deck requires unique readings.
        let hiragana = entries(Script::Hiragana, false);
        let count = hiragana.iter().filter(|e| e.reading == "o").count();
        assert_eq!(count, 2);
        let katakana = entries(Script::Katakana, false);
        let count = katakana.iter().filter(|e| e.reading == "o").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_voiced_flag() {
        let entries = entries(Script::Hiragana, true);
        let ga = entries.iter().find(|e| e.character == "が").unwrap();
        assert!(ga.voiced);
        assert_eq!(ga.reading, "ga");
        let ka = entries.iter().find(|e| e.character == "か").unwrap();
        assert!(!ka.voiced);
    }
}
