//! Header resolution: find the source column feeding a target field.

use contact_model::RawRow;

use crate::profile::FieldStrategy;

/// A resolved source column: the header that matched and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub header: &'a str,
    pub value: &'a str,
}

/// First header containing `keyword` as a case-insensitive substring, in
/// the row's own column order.
pub fn find_keyword<'a>(row: &'a RawRow, keyword: &str) -> Option<Match<'a>> {
    let needle = keyword.to_lowercase();
    row.iter()
        .find(|(header, _)| header.to_lowercase().contains(&needle))
        .map(|(header, value)| Match { header, value })
}

/// Try each keyword in order; the first keyword matching any header wins.
pub fn find_keywords<'a>(row: &'a RawRow, keywords: &[&str]) -> Option<Match<'a>> {
    keywords.iter().find_map(|keyword| find_keyword(row, keyword))
}

/// Whole-header match, ignoring ASCII case.
pub fn find_exact<'a>(row: &'a RawRow, name: &str) -> Option<Match<'a>> {
    row.iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(header, value)| Match { header, value })
}

/// The n-th column of the row, whatever its header.
pub fn find_position(row: &RawRow, index: usize) -> Option<Match<'_>> {
    let header = row.header_at(index)?;
    let value = row.value_at(index)?;
    Some(Match { header, value })
}

/// Evaluate an ordered strategy list top-down; the first strategy that
/// resolves anything wins.
pub fn resolve<'a>(row: &'a RawRow, strategies: &[FieldStrategy]) -> Option<Match<'a>> {
    strategies.iter().find_map(|strategy| match strategy {
        FieldStrategy::ExactHeader(name) => find_exact(row, name),
        FieldStrategy::Keywords(keywords) => find_keywords(row, keywords),
        FieldStrategy::Position(index) => find_position(row, *index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RawRow {
        RawRow::from_pairs(vec![
            ("Home Phone Number".to_string(), "555-0100".to_string()),
            ("Phone Extension".to_string(), "x12".to_string()),
            ("Email Address".to_string(), "a@b.c".to_string()),
        ])
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let row = row();
        let found = find_keyword(&row, "phone").unwrap();
        assert_eq!(found.header, "Home Phone Number");
        assert_eq!(found.value, "555-0100");
    }

    #[test]
    fn first_header_in_column_order_wins() {
        // "Phone Extension" also contains "phone"; the earlier column is kept.
        let row = row();
        let found = find_keyword(&row, "PHONE").unwrap();
        assert_eq!(found.header, "Home Phone Number");
    }

    #[test]
    fn missing_keyword_resolves_to_none() {
        assert!(find_keyword(&row(), "campaign").is_none());
    }

    #[test]
    fn strategies_evaluate_top_down() {
        let row = row();
        let strategies = [
            FieldStrategy::ExactHeader("Email Address"),
            FieldStrategy::Keywords(&["phone"]),
        ];
        let found = resolve(&row, &strategies).unwrap();
        assert_eq!(found.header, "Email Address");

        let strategies = [
            FieldStrategy::ExactHeader("No Such Column"),
            FieldStrategy::Keywords(&["phone"]),
            FieldStrategy::Position(2),
        ];
        let found = resolve(&row, &strategies).unwrap();
        assert_eq!(found.header, "Home Phone Number");
    }

    #[test]
    fn positional_strategy_reads_by_index() {
        let row = row();
        let found = find_position(&row, 1).unwrap();
        assert_eq!(found.header, "Phone Extension");
        assert!(find_position(&row, 9).is_none());
    }
}
