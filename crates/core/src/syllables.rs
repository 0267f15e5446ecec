//! English syllable estimation.
//!
//! The estimate counts runs of vowels (`y` included) and then discounts a
//! silent ending:
//!
//! - a trailing `e` after a consonant (`make`), except consonant + `le` (`table`)
//! - a trailing `ed` after a consonant other than `t` or `d` (`jumped`, not `wanted`)
//! - a trailing `es` after a consonant other than `s x z c g h` (`makes`, not `boxes`)
//!
//! Any word containing a letter has at least one syllable. Tokens without
//! ASCII letters (punctuation, numbers) have none.

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

fn has_silent_ending(letters: &[u8]) -> bool {
    match letters {
        [.., c, b'l', b'e'] if !is_vowel(*c) => false,
        [.., c, b'e'] => !is_vowel(*c),
        [.., c, b'e', b'd'] => !is_vowel(*c) && !matches!(c, b't' | b'd'),
        [.., c, b'e', b's'] => !is_vowel(*c) && !b"sxzcgh".contains(c),
        _ => false,
    }
}

/// Estimates the number of syllables in `word`.
///
/// ```rust
/// use lexis_core::syllables::estimate;
///
/// assert_eq!(estimate("readability"), 5);
/// assert_eq!(estimate("table"), 2);
/// assert_eq!(estimate("make"), 1);
/// assert_eq!(estimate("."), 0);
/// ```
pub fn estimate(word: &str) -> usize {
    let letters: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for &b in &letters {
        let vowel = is_vowel(b);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && has_silent_ending(&letters) {
        count -= 1;
    }

    count.max(1)
}

/// A word is complex when it is longer than two characters and has more than
/// two syllables.
pub fn is_complex(word: &str) -> bool {
    word.chars().count() > 2 && estimate(word) > 2
}
