/// A drillable kana character set.
///
/// The string keys are stable: they are what gets persisted when the user
/// picks a set, so renaming a variant must not change its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaSet {
    Hiragana,
    Katakana,
    VoicedHiragana,
    VoicedKatakana,
}

impl Default for KanaSet {
    fn default() -> Self {
        KanaSet::Hiragana
    }
}

impl KanaSet {
    pub const ALL: [KanaSet; 4] =
        [KanaSet::Hiragana, KanaSet::Katakana, KanaSet::VoicedHiragana, KanaSet::VoicedKatakana];

    pub fn as_key(&self) -> &'static str {
        match self {
            KanaSet::Hiragana => "hiragana",
            KanaSet::Katakana => "katakana",
            KanaSet::VoicedHiragana => "voicedHiragana",
            KanaSet::VoicedKatakana => "voicedKatakana",
        }
    }

    pub fn from_key(key: &str) -> Option<KanaSet> {
        KanaSet::ALL.iter().copied().find(|set| set.as_key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            KanaSet::Hiragana => "Hiragana",
            KanaSet::Katakana => "Katakana",
            KanaSet::VoicedHiragana => "Voiced Hiragana",
            KanaSet::VoicedKatakana => "Voiced Katakana",
        }
    }

    pub fn definition(&self) -> &'static SetDefinition {
        match self {
            KanaSet::Hiragana => &HIRAGANA,
            KanaSet::Katakana => &KATAKANA,
            KanaSet::VoicedHiragana => &VOICED_HIRAGANA,
            KanaSet::VoicedKatakana => &VOICED_KATAKANA,
        }
    }
}

/// Symbols and their romanizations, grouped by phonetic row.
///
/// The two tables are positionally aligned: `romaji[i][j]` is the expected
/// answer for `symbols[i][j]`.
pub struct SetDefinition {
    pub symbols: &'static [&'static [char]],
    pub romaji: &'static [&'static [&'static str]],
}

impl SetDefinition {
    /// All symbols in row-major order.
    pub fn flat_symbols(&self) -> Vec<char> {
        self.symbols.iter().flat_map(|row| row.iter().copied()).collect()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.iter().map(|row| row.len()).sum()
    }
}

static HIRAGANA: SetDefinition = SetDefinition {
    symbols: &[
        &['あ', 'い', 'う', 'え', 'お'],
        &['か', 'き', 'く', 'け', 'こ'],
        &['さ', 'し', 'す', 'せ', 'そ'],
        &['た', 'ち', 'つ', 'て', 'と'],
        &['な', 'に', 'ぬ', 'ね', 'の'],
        &['は', 'ひ', 'ふ', 'へ', 'ほ'],
        &['ま', 'み', 'む', 'め', 'も'],
        &['や', 'ゆ', 'よ'],
        &['ら', 'り', 'る', 'れ', 'ろ'],
        &['わ', 'を', 'ん'],
    ],
    romaji: &[
        &["a", "i", "u", "e", "o"],
        &["ka", "ki", "ku", "ke", "ko"],
        &["sa", "shi", "su", "se", "so"],
        &["ta", "chi", "tsu", "te", "to"],
        &["na", "ni", "nu", "ne", "no"],
        &["ha", "hi", "fu", "he", "ho"],
        &["ma", "mi", "mu", "me", "mo"],
        &["ya", "yu", "yo"],
        &["ra", "ri", "ru", "re", "ro"],
        &["wa", "wo", "n"],
    ],
};

static KATAKANA: SetDefinition = SetDefinition {
    symbols: &[
        &['ア', 'イ', 'ウ', 'エ', 'オ'],
        &['カ', 'キ', 'ク', 'ケ', 'コ'],
        &['サ', 'シ', 'ス', 'セ', 'ソ'],
        &['タ', 'チ', 'ツ', 'テ', 'ト'],
        &['ナ', 'ニ', 'ヌ', 'ネ', 'ノ'],
        &['ハ', 'ヒ', 'フ', 'ヘ', 'ホ'],
        &['マ', 'ミ', 'ム', 'メ', 'モ'],
        &['ヤ', 'ユ', 'ヨ'],
        &['ラ', 'リ', 'ル', 'レ', 'ロ'],
        &['ワ', 'ヲ', 'ン'],
    ],
    romaji: &[
        &["a", "i", "u", "e", "o"],
        &["ka", "ki", "ku", "ke", "ko"],
        &["sa", "shi", "su", "se", "so"],
        &["ta", "chi", "tsu", "te", "to"],
        &["na", "ni", "nu", "ne", "no"],
        &["ha", "hi", "fu", "he", "ho"],
        &["ma", "mi", "mu", "me", "mo"],
        &["ya", "yu", "yo"],
        &["ra", "ri", "ru", "re", "ro"],
        &["wa", "wo", "n"],
    ],
};

// づ is accepted as "zu" but ヅ as "du", mirroring how the drill has always
// romanized them. Same for じ/ジ as "zi" rather than Hepburn "ji".
static VOICED_HIRAGANA: SetDefinition = SetDefinition {
    symbols: &[
        &['が', 'ぎ', 'ぐ', 'げ', 'ご'],
        &['だ', 'ぢ', 'づ', 'で', 'ど'],
        &['ざ', 'じ', 'ず', 'ぜ', 'ぞ'],
        &['ば', 'び', 'ぶ', 'べ', 'ぼ'],
        &['ぱ', 'ぴ', 'ぷ', 'ぺ', 'ぽ'],
    ],
    romaji: &[
        &["ga", "gi", "gu", "ge", "go"],
        &["da", "di", "zu", "de", "do"],
        &["za", "zi", "zu", "ze", "zo"],
        &["ba", "bi", "bu", "be", "bo"],
        &["pa", "pi", "pu", "pe", "po"],
    ],
};

static VOICED_KATAKANA: SetDefinition = SetDefinition {
    symbols: &[
        &['ガ', 'ギ', 'グ', 'ゲ', 'ゴ'],
        &['ダ', 'ヂ', 'ヅ', 'デ', 'ド'],
        &['ザ', 'ジ', 'ズ', 'ゼ', 'ゾ'],
        &['バ', 'ビ', 'ブ', 'ベ', 'ボ'],
        &['パ', 'ピ', 'プ', 'ペ', 'ポ'],
    ],
    romaji: &[
        &["ga", "gi", "gu", "ge", "go"],
        &["da", "di", "du", "de", "do"],
        &["za", "zi", "zu", "ze", "zo"],
        &["ba", "bi", "bu", "be", "bo"],
        &["pa", "pi", "pu", "pe", "po"],
    ],
};
