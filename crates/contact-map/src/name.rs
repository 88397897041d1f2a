//! Name splitting.

/// Split a full name at the first whitespace boundary.
///
/// A string with no internal whitespace is all first name.
pub fn split_full_name(full: &str) -> (String, String) {
    let trimmed = full.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

/// Join separately resolved first/last columns, then re-split.
///
/// The re-split means a multi-word first-name column pushes its tail into
/// the last name ("Jane Marie" + "Doe" becomes "Jane" / "Marie Doe"), and
/// a last-name-only row lands in the first-name slot. Both follow from the
/// join-then-split rule and are kept as-is.
pub fn combine_and_split(first: &str, last: &str) -> (String, String) {
    let combined = format!("{} {}", first.trim(), last.trim());
    split_full_name(&combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_whitespace() {
        assert_eq!(split_full_name("Jane Doe"), ("Jane".to_string(), "Doe".to_string()));
        assert_eq!(
            split_full_name("Mary Anne van Dyke"),
            ("Mary".to_string(), "Anne van Dyke".to_string())
        );
    }

    #[test]
    fn single_token_is_all_first_name() {
        assert_eq!(split_full_name("Madonna"), ("Madonna".to_string(), String::new()));
        assert_eq!(split_full_name("  Madonna  "), ("Madonna".to_string(), String::new()));
        assert_eq!(split_full_name(""), (String::new(), String::new()));
    }

    #[test]
    fn join_then_resplit_behavior() {
        assert_eq!(combine_and_split("Jane", "Doe"), ("Jane".to_string(), "Doe".to_string()));
        assert_eq!(
            combine_and_split("Jane Marie", "Doe"),
            ("Jane".to_string(), "Marie Doe".to_string())
        );
        assert_eq!(combine_and_split("", "Doe"), ("Doe".to_string(), String::new()));
        assert_eq!(combine_and_split("Jane", ""), ("Jane".to_string(), String::new()));
    }
}
