use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `<name> (<category>)` with the parenthetical anchored at the end
/// of the string. The greedy prefix means the *last* trailing group wins:
/// `"Model (v2) (FC)"` splits into `"Model (v2)"` and `"FC"`.
static MODEL_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\s+\((.*)\)$").expect("model label pattern should be valid"));

/// Split a raw `Model` cell into entity name and category label.
///
/// Strings without a trailing parenthetical come back whole (trimmed) with
/// the `"Unknown"` category. Every input has a valid decomposition.
pub fn split_model_label(raw: &str) -> (String, String) {
    match MODEL_LABEL.captures(raw) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (raw.trim().to_string(), "Unknown".to_string()),
    }
}

/// Collapse category variants: anything mentioning FC is function calling,
/// anything mentioning Prompt is prompt mode, the rest passes through as-is.
pub fn normalize_category(category: &str) -> String {
    if category.contains("FC") {
        "FC".to_string()
    } else if category.contains("Prompt") {
        "Prompt".to_string()
    } else {
        category.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_category() {
        let (name, category) = split_model_label("Claude-Sonnet-4-5-20250929 (FC)");
        assert_eq!(name, "Claude-Sonnet-4-5-20250929");
        assert_eq!(category, "FC");
    }

    #[test]
    fn no_parenthetical_means_unknown() {
        let (name, category) = split_model_label("SomeModel");
        assert_eq!(name, "SomeModel");
        assert_eq!(category, "Unknown");
    }

    #[test]
    fn last_trailing_group_wins() {
        let (name, category) = split_model_label("Model (v2) (FC)");
        assert_eq!(name, "Model (v2)");
        assert_eq!(category, "FC");
    }

    #[test]
    fn group_must_be_anchored_at_the_end() {
        let (name, category) = split_model_label("Model (FC) beta");
        assert_eq!(name, "Model (FC) beta");
        assert_eq!(category, "Unknown");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let (name, category) = split_model_label("  My Model  (Prompt)");
        assert_eq!(name, "My Model");
        assert_eq!(category, "Prompt");
    }

    #[test]
    fn category_variants_collapse() {
        assert_eq!(normalize_category("FC"), "FC");
        assert_eq!(normalize_category("FC thinking"), "FC");
        assert_eq!(normalize_category("Prompt"), "Prompt");
        assert_eq!(normalize_category("Prompt strict"), "Prompt");
        assert_eq!(normalize_category("Oracle"), "Oracle");
    }
}
