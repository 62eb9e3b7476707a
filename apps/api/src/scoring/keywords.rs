use std::collections::BTreeSet;

use super::normalizer::tokens;

/// Tokens of the cleaned job description that never appear in the cleaned resume,
/// deduplicated and sorted ascending.
pub fn missing_keywords(resume_clean: &str, jd_clean: &str) -> Vec<String> {
    let resume_tokens: BTreeSet<&str> = tokens(resume_clean).collect();
    let jd_tokens: BTreeSet<&str> = tokens(jd_clean).collect();

    jd_tokens
        .difference(&resume_tokens)
        .map(|token| token.to_string())
        .collect()
}
