/// Fixed autocomplete vocabulary
pub const TAG_VOCABULARY: [&str; 7] = [
    "nature",
    "animals",
    "landscape",
    "city",
    "travel",
    "art",
    "technology",
];

/// Vocabulary entries containing `query` case-insensitively, in vocabulary order
pub fn suggest_tags(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    TAG_VOCABULARY
        .iter()
        .copied()
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .collect()
}
