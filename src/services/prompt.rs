use crate::constants::prompts::EXAM_QUESTION_TEMPLATE;

/// Character budget for the source material embedded in a prompt.
pub const MAX_SOURCE_CHARS: usize = 10_000;

/// Clips extracted text to the first [`MAX_SOURCE_CHARS`] characters.
/// No boundary awareness; a word or sentence may be cut mid-way.
pub fn truncate_source(text: &str) -> &str {
    match text.char_indices().nth(MAX_SOURCE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Renders the fixed instruction template around the (already truncated)
/// source text. The source is embedded verbatim, without escaping.
pub fn build_prompt(source: &str, question_count: i64) -> String {
    EXAM_QUESTION_TEMPLATE
        .replace("{count}", &question_count.to_string())
        .replace("{source}", source)
}
