pub const MAX_POST_CHARS: usize = 140;

const BANNED_WORDS: &[&str] = &["kerfuffle", "sharbert", "fornax"];
const REPLACEMENT: &str = "****";

fn is_banned(word: &str) -> bool {
    BANNED_WORDS.contains(&word.to_lowercase().as_str())
}

/// Masks banned words. Matching is per whitespace-separated word and
/// ignores case; a word with punctuation attached is left alone.
/// A body with nothing to mask comes back untouched; otherwise runs of
/// whitespace collapse to a single space.
pub fn clean_body(body: &str) -> String {
    if !body.split_whitespace().any(is_banned) {
        return body.to_string();
    }

    body.split_whitespace()
        .map(|word| if is_banned(word) { REPLACEMENT } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}
