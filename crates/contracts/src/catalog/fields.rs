//! Delimited multi-value fields of the catalog API.
//!
//! Multi-valued text fields (instructors, prerequisites, notes, ...) arrive
//! as a single string whose items are joined with `";;"`. This module owns
//! that delimiter contract; nothing else in the workspace splits on it.

/// Separator the catalog API uses to join multi-valued fields into one string.
pub const LIST_DELIMITER: &str = ";;";

/// Split a delimited field into its items.
///
/// A plain split with no trimming or filtering: `"A;;B"` yields two items,
/// `"A"` yields one, and `""` yields a single empty item (callers that want
/// empty-field suppression go through [`FieldValue`] instead).
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER).map(str::to_string).collect()
}

/// A detail-row value classified for rendering.
///
/// `Empty` rows are suppressed entirely, `Single` renders as plain text and
/// `Many` as a bulleted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Empty,
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Classify a delimited text field. Empty input suppresses the row.
    pub fn from_text(raw: &str) -> Self {
        if raw.is_empty() {
            return FieldValue::Empty;
        }
        let mut items = split_list(raw);
        if items.len() == 1 {
            FieldValue::Single(items.remove(0))
        } else {
            FieldValue::Many(items)
        }
    }

    /// Classify a numeric field. Zero suppresses the row.
    pub fn from_count(n: u32) -> Self {
        if n == 0 {
            FieldValue::Empty
        } else {
            FieldValue::Single(n.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("A;;B"), vec!["A", "B"]);
        assert_eq!(split_list("A"), vec!["A"]);
        assert_eq!(split_list("A; B"), vec!["A; B"]);
    }

    #[test]
    fn test_empty_values_suppress_row() {
        assert_eq!(FieldValue::from_text(""), FieldValue::Empty);
        assert_eq!(FieldValue::from_count(0), FieldValue::Empty);
    }

    #[test]
    fn test_single_item_renders_plain() {
        assert_eq!(
            FieldValue::from_text("Lecture"),
            FieldValue::Single("Lecture".to_string())
        );
        assert_eq!(FieldValue::from_count(30), FieldValue::Single("30".to_string()));
    }

    #[test]
    fn test_multiple_items_render_as_list() {
        assert_eq!(
            FieldValue::from_text("A;;B"),
            FieldValue::Many(vec!["A".to_string(), "B".to_string()])
        );
    }
}
