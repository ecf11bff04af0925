//! # Formula Tag List Module
//!
//! This module holds the state behind the formula builder: an ordered list of
//! text tags that always contains at least one entry. Every operation returns a
//! new list and leaves the receiver untouched, so a view can swap its state in
//! one step.
use crate::structs::{FormulaError, Operator};

/// Separator placed between tags when the formula string is produced.
pub const TAG_SEPARATOR: &str = " ";

/// An ordered, never-empty list of formula tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList {
    /// Tags in left-to-right formula order
    tags: Vec<String>,
}

impl Default for TagList {
    fn default() -> Self {
        Self::new()
    }
}

impl TagList {
    /// Creates a list holding a single empty tag.
    pub fn new() -> Self {
        Self {
            tags: vec![String::new()],
        }
    }

    /// Builds a list from existing tags. An empty input yields `[""]`.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            Self::new()
        } else {
            Self { tags }
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false: a list holds at least one tag.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Whether a delete control should be offered at all.
    pub fn can_delete(&self) -> bool {
        self.tags.len() > 1
    }

    /// Returns a copy with an empty tag appended.
    pub fn with_blank_tag(&self) -> Self {
        self.appended(String::new())
    }

    /// Returns a copy with `op` appended as its own tag.
    pub fn with_operator(&self, op: Operator) -> Self {
        self.appended(op.symbol().to_string())
    }

    /// Returns a copy with the tag at `index` replaced by `value`.
    ///
    /// Any text is accepted, including the empty string.
    pub fn with_tag(&self, index: usize, value: impl Into<String>) -> Result<Self, FormulaError> {
        self.check_index(index)?;
        let mut tags = self.tags.clone();
        tags[index] = value.into();
        Ok(Self { tags })
    }

    /// Returns a copy without the tag at `index`; later tags shift left by one.
    pub fn without_tag(&self, index: usize) -> Result<Self, FormulaError> {
        self.check_index(index)?;
        if !self.can_delete() {
            return Err(FormulaError::LastTag);
        }
        let mut tags = self.tags.clone();
        tags.remove(index);
        Ok(Self { tags })
    }

    /// Joins every tag with a single space. Empty tags are kept, so they show
    /// up as consecutive spaces.
    pub fn formula(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    /// Text shown to the user when the formula is calculated.
    pub fn display_message(&self) -> String {
        format!("Formula: {}", self.formula())
    }

    fn appended(&self, tag: String) -> Self {
        let mut tags = Vec::with_capacity(self.tags.len() + 1);
        tags.extend(self.tags.iter().cloned());
        tags.push(tag);
        Self { tags }
    }

    fn check_index(&self, index: usize) -> Result<(), FormulaError> {
        if index < self.tags.len() {
            Ok(())
        } else {
            Err(FormulaError::IndexOutOfRange {
                index,
                len: self.tags.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &TagList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_new_list_has_one_empty_tag() {
        let list = TagList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(""));
        assert!(!list.can_delete());
        assert!(!list.is_empty());
        assert_eq!(TagList::default(), list);
    }

    #[test]
    fn test_from_tags() {
        let list = TagList::from_tags(["3", "*", "4"]);
        assert_eq!(tags(&list), vec!["3", "*", "4"]);
        assert_eq!(list.as_slice()[1], "*");

        let empty: Vec<String> = Vec::new();
        assert_eq!(TagList::from_tags(empty), TagList::new());
    }

    #[test]
    fn test_appends_grow_by_one_in_call_order() {
        let mut list = TagList::new();
        let steps: [Option<Operator>; 5] = [
            Some(Operator::OpenParen),
            None,
            Some(Operator::Minus),
            None,
            Some(Operator::CloseParen),
        ];
        for (i, step) in steps.iter().enumerate() {
            let before = list.len();
            list = match step {
                Some(op) => list.with_operator(*op),
                None => list.with_blank_tag(),
            };
            assert_eq!(list.len(), before + 1);
            assert_eq!(list.len(), i + 2);
        }
        assert_eq!(tags(&list), vec!["", "(", "", "-", "", ")"]);
    }

    #[test]
    fn test_mutations_leave_original_untouched() {
        let original = TagList::from_tags(["a", "b"]);
        let _ = original.with_blank_tag();
        let _ = original.with_operator(Operator::Plus);
        let _ = original.with_tag(0, "z").unwrap();
        let _ = original.without_tag(1).unwrap();
        assert_eq!(tags(&original), vec!["a", "b"]);
    }

    #[test]
    fn test_edit_changes_only_one_position() {
        let list = TagList::from_tags(["1", "+", "2", "*", "3"]);
        let edited = list.with_tag(2, "x y").unwrap();
        assert_eq!(edited.len(), list.len());
        for i in 0..list.len() {
            if i == 2 {
                assert_eq!(edited.get(i), Some("x y"));
            } else {
                assert_eq!(edited.get(i), list.get(i));
            }
        }
    }

    #[test]
    fn test_edit_accepts_any_text() {
        let list = TagList::from_tags(["a"]);
        assert_eq!(list.with_tag(0, "").unwrap().get(0), Some(""));
        assert_eq!(list.with_tag(0, "^").unwrap().get(0), Some("^"));
        assert_eq!(list.with_tag(0, "  ").unwrap().get(0), Some("  "));
    }

    #[test]
    fn test_edit_out_of_range() {
        let list = TagList::new();
        assert_eq!(
            list.with_tag(1, "4"),
            Err(FormulaError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_delete_shifts_later_tags_left() {
        let list = TagList::from_tags(["a", "b", "c", "d"]);
        let deleted = list.without_tag(1).unwrap();
        assert_eq!(tags(&deleted), vec!["a", "c", "d"]);

        let deleted = deleted.without_tag(2).unwrap();
        assert_eq!(tags(&deleted), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_until_one_remains() {
        let list = TagList::from_tags(["a", "b"]);
        let list = list.without_tag(0).unwrap();
        assert_eq!(tags(&list), vec!["b"]);
        assert!(!list.can_delete());
        assert_eq!(list.without_tag(0), Err(FormulaError::LastTag));
    }

    #[test]
    fn test_delete_out_of_range() {
        let list = TagList::from_tags(["a", "b"]);
        assert_eq!(
            list.without_tag(5),
            Err(FormulaError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_formula_keeps_empty_tags() {
        let list = TagList::new().with_operator(Operator::Plus);
        assert_eq!(tags(&list), vec!["", "+"]);
        assert_eq!(list.formula(), " +");
        assert_eq!(list.display_message(), "Formula:  +");
    }

    #[test]
    fn test_formula_is_idempotent() {
        let list = TagList::from_tags(["2", "^", "", "8"]);
        assert_eq!(list.formula(), "2 ^  8");
        assert_eq!(list.formula(), list.formula());
        assert_eq!(list.display_message(), list.display_message());
    }

    #[test]
    fn test_build_three_times_four() {
        let list = TagList::new()
            .with_tag(0, "3")
            .unwrap()
            .with_operator(Operator::Multiply)
            .with_blank_tag()
            .with_tag(2, "4")
            .unwrap();
        assert_eq!(tags(&list), vec!["3", "*", "4"]);
        assert_eq!(list.display_message(), "Formula: 3 * 4");
    }
}
