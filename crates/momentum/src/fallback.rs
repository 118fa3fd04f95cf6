//! Built-in offline quotes
//!
//! The fixed list the resolver falls back to when every remote attempt
//! fails. Non-empty by construction, so a quote is always available.

use crate::data::types::Quote;

/// `(content, author)` pairs
pub const FALLBACK_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "It always seems impossible until it's done.",
        "Nelson Mandela",
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "You miss 100% of the shots you don't take.",
        "Wayne Gretzky",
    ),
    (
        "Whether you think you can or you think you can't, you're right.",
        "Henry Ford",
    ),
    (
        "Do what you can, with what you have, where you are.",
        "Theodore Roosevelt",
    ),
    (
        "Everything you've ever wanted is on the other side of fear.",
        "George Addair",
    ),
    (
        "Start where you are. Use what you have. Do what you can.",
        "Arthur Ashe",
    ),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
];

/// Pick one fallback quote uniformly at random
pub fn random_fallback() -> Quote {
    use rand::Rng;
    let idx = rand::thread_rng().gen_range(0..FALLBACK_QUOTES.len());
    let (content, author) = FALLBACK_QUOTES[idx];
    Quote::new(content, author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_well_formed() {
        assert!(!FALLBACK_QUOTES.is_empty());
        for (content, author) in FALLBACK_QUOTES {
            assert!(!content.trim().is_empty());
            assert!(!author.trim().is_empty());
        }
    }

    #[test]
    fn test_random_fallback_comes_from_list() {
        for _ in 0..20 {
            let quote = random_fallback();
            assert!(FALLBACK_QUOTES
                .iter()
                .any(|(c, a)| *c == quote.content && *a == quote.author));
        }
    }

    #[test]
    fn test_no_duplicate_content() {
        for (i, (c1, _)) in FALLBACK_QUOTES.iter().enumerate() {
            for (c2, _) in &FALLBACK_QUOTES[i + 1..] {
                assert_ne!(c1, c2);
            }
        }
    }
}
