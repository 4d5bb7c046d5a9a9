// Output formatting — terminal display of profiles, ranks and relevance.

pub mod terminal;

/// Shorten `text` to `max_chars` chars plus "..." when it is longer.
///
/// Used for the input preview in `VocabularyError::NoTokens`, where the input
/// is arbitrary user text; cuts on char boundaries so it never splits a char.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render a score in [0, 1] as a fixed-width bar, e.g. `[=====     ]`.
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
