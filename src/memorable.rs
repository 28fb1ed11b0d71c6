//! Memorable password generation: word-pool passphrases with a mnemonic
//! story and emoji hints.

use rand::Rng;

pub const ADJECTIVES: &[&str] = &[
    "Happy", "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Cosmic", "Wild", "Fierce",
    "Noble", "Mystic", "Royal", "Shadow", "Thunder", "Crystal",
];

pub const NOUNS: &[&str] = &[
    "Tiger", "Eagle", "Dragon", "Phoenix", "Wolf", "Falcon", "Lion", "Panther", "Hawk", "Cobra",
    "Shark", "Raven", "Fox", "Bear", "Owl", "Jaguar",
];

pub const VERBS: &[&str] = &[
    "Runs", "Flies", "Jumps", "Dances", "Rides", "Swims", "Climbs", "Soars",
];

pub const PLACES: &[&str] = &[
    "Moon", "Mars", "Ocean", "Mountain", "Forest", "Desert", "Galaxy", "Island",
];

pub const SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '&', '*', '?'];

/// Composition style for a memorable password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorableStyle {
    /// `Adjective-Noun-NN<symbol>`
    Phrase,
    /// `NounVerbToPlaceNN<symbol>`, concatenated without separators
    Story,
    /// Three words joined by `-`, then a number and a symbol
    Pattern,
}

/// A memorable password with its mnemonic aids. The story and emoji hint
/// exist purely to help the user remember the password; they play no part
/// in strength or breach evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorablePassword {
    pub password: String,
    pub story: String,
    pub emoji_hint: String,
}

/// Generates a memorable password in the given style.
///
/// Selection uses the thread-local generator rather than the OS CSPRNG: the
/// output space is small and displayed to the user as a mnemonic, not a
/// security boundary.
pub fn generate_memorable(style: MemorableStyle) -> MemorablePassword {
    generate_memorable_with(style, &mut rand::thread_rng())
}

/// Injectable-RNG core of [`generate_memorable`]; a fixed random sequence
/// yields a fixed output.
pub fn generate_memorable_with<R: Rng>(style: MemorableStyle, rng: &mut R) -> MemorablePassword {
    match style {
        MemorableStyle::Phrase => {
            let adj = pick(rng, ADJECTIVES);
            let noun = pick(rng, NOUNS);
            let num = pick_number(rng);
            let symbol = pick_symbol(rng);

            MemorablePassword {
                password: format!("{}-{}-{}{}", adj, noun, num, symbol),
                story: format!(
                    "A {} {} appeared in the year '{}!",
                    adj.to_lowercase(),
                    noun.to_lowercase(),
                    num
                ),
                emoji_hint: format!("{} {} 🔢", word_emoji(adj), word_emoji(noun)),
            }
        }
        MemorableStyle::Story => {
            let noun = pick(rng, NOUNS);
            let verb = pick(rng, VERBS);
            let place = pick(rng, PLACES);
            let num = pick_number(rng);
            let symbol = pick_symbol(rng);

            MemorablePassword {
                password: format!("{}{}To{}{}{}", noun, verb, place, num, symbol),
                story: format!(
                    "The {} {} to the {} in {}!",
                    noun.to_lowercase(),
                    verb.to_lowercase(),
                    place.to_lowercase(),
                    num
                ),
                emoji_hint: format!("{} ➡️ {}", word_emoji(noun), word_emoji(place)),
            }
        }
        MemorableStyle::Pattern => {
            let adj = pick(rng, ADJECTIVES);
            let noun = pick(rng, NOUNS);
            let place = pick(rng, PLACES);
            let num = pick_number(rng);
            let symbol = pick_symbol(rng);

            MemorablePassword {
                password: format!("{}-{}-{}{}{}", adj, noun, place, num, symbol),
                story: format!(
                    "{} {} on {}, chapter {}",
                    adj,
                    noun.to_lowercase(),
                    place.to_lowercase(),
                    num
                ),
                emoji_hint: format!(
                    "{} {} {}",
                    word_emoji(adj),
                    word_emoji(noun),
                    word_emoji(place)
                ),
            }
        }
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Two-digit number, 10-99.
fn pick_number<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(10..100)
}

fn pick_symbol<R: Rng>(rng: &mut R) -> char {
    SYMBOLS[rng.gen_range(0..SYMBOLS.len())]
}

/// Fixed word-to-emoji table; unmapped words (all verbs) get a generic mark.
fn word_emoji(word: &str) -> &'static str {
    match word {
        // Adjectives
        "Happy" => "😊",
        "Swift" => "⚡",
        "Brave" => "💪",
        "Clever" => "🧠",
        "Mighty" => "🦸",
        "Silent" => "🤫",
        "Golden" => "✨",
        "Cosmic" => "🌌",
        "Wild" => "🌿",
        "Fierce" => "🔥",
        "Noble" => "👑",
        "Mystic" => "🔮",
        "Royal" => "🏰",
        "Shadow" => "👤",
        "Thunder" => "⛈️",
        "Crystal" => "💎",
        // Nouns
        "Tiger" => "🐅",
        "Eagle" => "🦅",
        "Dragon" => "🐉",
        "Phoenix" => "🔥",
        "Wolf" => "🐺",
        "Falcon" => "🦅",
        "Lion" => "🦁",
        "Panther" => "🐆",
        "Hawk" => "🦅",
        "Cobra" => "🐍",
        "Shark" => "🦈",
        "Raven" => "🐦‍⬛",
        "Fox" => "🦊",
        "Bear" => "🐻",
        "Owl" => "🦉",
        "Jaguar" => "🐆",
        // Places
        "Moon" => "🌙",
        "Mars" => "🔴",
        "Ocean" => "🌊",
        "Mountain" => "🏔️",
        "Forest" => "🌲",
        "Desert" => "🏜️",
        "Galaxy" => "🌌",
        "Island" => "🏝️",
        _ => "✨",
    }
}
