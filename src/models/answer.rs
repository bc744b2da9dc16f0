//! Answer checking for typed quiz responses.

/// Accepts `typed` when it equals the whole definition ignoring case, or when
/// it appears verbatim inside the definition (so "放弃" matches "放弃、抛弃").
///
/// The substring rule has no length floor, so even an empty answer passes.
// TODO: a minimum substring length or a match against whole "、"-separated
// senses would stop empty and single-character answers from passing.
pub fn matches_definition(typed: &str, definition: &str) -> bool {
    typed.to_lowercase() == definition.to_lowercase() || definition.contains(typed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_definition_accepted() {
        assert!(matches_definition("放弃", "放弃、抛弃"));
    }

    #[test]
    fn test_exact_definition_accepted() {
        assert!(matches_definition("放弃、抛弃", "放弃、抛弃"));
    }

    #[test]
    fn test_unrelated_answer_rejected() {
        assert!(!matches_definition("xyz", "放弃、抛弃"));
    }

    #[test]
    fn test_case_insensitive_only_for_whole_match() {
        assert!(matches_definition("ABSTRACT", "abstract"));
        // substring check is case-sensitive
        assert!(!matches_definition("ABS", "abstract"));
        assert!(matches_definition("abs", "abstract"));
    }

    #[test]
    fn test_empty_answer_accepted_as_substring() {
        assert!(matches_definition("", "放弃、抛弃"));
    }
}
