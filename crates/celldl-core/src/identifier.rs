//! Identifier assignment for diagram elements.
//!
//! SBGN-ML labels are human readable but not unique, and source ids are
//! unique but opaque. [`IdAssigner`] turns a label (or, failing that, a
//! source id) into a readable identifier and guarantees that no identifier
//! is issued twice within one conversion run.
//!
//! The set of issued identifiers is kept in a [`string_interner`] owned by
//! the assigner, so every conversion starts from a fresh namespace.

use std::fmt;

use string_interner::DefaultStringInterner;

/// Prefix used when a candidate identifier does not start with a letter.
const ID_PREFIX: &str = "ID_";

/// Token rewrites applied to labels, in order.
///
/// The `+`/`-` suffix convention used for ion pumps and charged species
/// would otherwise be lost or produce invalid selectors.
const LABEL_REWRITES: [(&str, &str); 4] = [
    (" (+)", "_plus"),
    ("Pump-", "Pump-minus"),
    ("Pump+", "Pump-plus"),
    (" ", "_"),
];

/// Issues unique, human readable identifiers.
///
/// # Examples
///
/// ```
/// use celldl_core::identifier::IdAssigner;
///
/// let mut ids = IdAssigner::new();
///
/// assert_eq!(ids.assign("Na Pump+", Some("glyph1")), "Na_Pump-plus");
/// assert_eq!(ids.assign("Na Pump+", Some("glyph2")), "Na_Pump-plus-1");
/// assert_eq!(ids.assign("", Some("glyph3")), "ID_glyph3");
/// ```
pub struct IdAssigner {
    issued: DefaultStringInterner,
}

impl IdAssigner {
    /// Creates an assigner with no identifiers issued.
    pub fn new() -> Self {
        Self {
            issued: DefaultStringInterner::new(),
        }
    }

    /// Issues a new identifier for an element.
    ///
    /// A non-empty `label` takes precedence over `source_id`. When the
    /// derived candidate has already been issued, `-1`, `-2`, ... is
    /// appended until the result is unused.
    ///
    /// # Arguments
    ///
    /// * `label` - The element's label, possibly empty.
    /// * `source_id` - The element's id in the source document, if any.
    pub fn assign(&mut self, label: &str, source_id: Option<&str>) -> String {
        let candidate = candidate(label, source_id);

        let mut unique = candidate.clone();
        let mut suffix = 1;
        while self.issued.get(&unique).is_some() {
            unique = format!("{candidate}-{suffix}");
            suffix += 1;
        }

        self.issued.get_or_intern(&unique);
        unique
    }

    /// Returns `true` if `id` has already been issued by this assigner.
    pub fn contains(&self, id: &str) -> bool {
        self.issued.get(id).is_some()
    }

    /// Returns the number of identifiers issued so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// Returns `true` if no identifier has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

impl Default for IdAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdAssigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAssigner")
            .field("issued", &self.issued.len())
            .finish()
    }
}

/// Derives the candidate identifier before collision handling.
fn candidate(label: &str, source_id: Option<&str>) -> String {
    if !label.is_empty() {
        let cleaned = LABEL_REWRITES
            .iter()
            .fold(label.to_string(), |acc, (from, to)| acc.replace(from, to));
        if cleaned.chars().next().is_some_and(char::is_alphabetic) {
            cleaned
        } else {
            format!("{ID_PREFIX}{cleaned}")
        }
    } else if let Some(source_id) = source_id {
        format!("{ID_PREFIX}{source_id}")
    } else {
        "ID".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_label_spaces_become_underscores() {
        let mut ids = IdAssigner::new();
        assert_eq!(ids.assign("ATP synthase", None), "ATP_synthase");
    }

    #[test]
    fn test_label_rewrites() {
        let mut ids = IdAssigner::new();
        assert_eq!(ids.assign("Ca (+)", None), "Ca_plus");
        assert_eq!(ids.assign("Pump-", None), "Pump-minus");
        assert_eq!(ids.assign("K Pump+", None), "K_Pump-plus");
    }

    #[test]
    fn test_non_alphabetic_label_is_prefixed() {
        let mut ids = IdAssigner::new();
        assert_eq!(ids.assign("5-HT", None), "ID_5-HT");
        assert_eq!(ids.assign("+ve", None), "ID_+ve");
    }

    #[test]
    fn test_empty_label_uses_source_id() {
        let mut ids = IdAssigner::new();
        assert_eq!(ids.assign("", Some("glyph_12")), "ID_glyph_12");
        assert_eq!(ids.assign("", None), "ID");
    }

    #[test]
    fn test_same_label_twice_yields_distinct_ids() {
        let mut ids = IdAssigner::new();
        let first = ids.assign("Glucose", Some("a"));
        let second = ids.assign("Glucose", Some("b"));
        let third = ids.assign("Glucose", Some("c"));

        assert_eq!(first, "Glucose");
        assert_eq!(second, "Glucose-1");
        assert_eq!(third, "Glucose-2");
    }

    #[test]
    fn test_suffixed_label_does_not_collide() {
        let mut ids = IdAssigner::new();
        ids.assign("X", None);
        ids.assign("X", None);
        // "X-1" is already taken by the second "X"
        assert_eq!(ids.assign("X-1", None), "X-1-1");
    }

    #[test]
    fn test_fresh_assigner_has_no_history() {
        let mut first_run = IdAssigner::new();
        first_run.assign("Glucose", None);

        let mut second_run = IdAssigner::new();
        assert!(second_run.is_empty());
        assert_eq!(second_run.assign("Glucose", None), "Glucose");
    }

    #[test]
    fn test_contains_and_len() {
        let mut ids = IdAssigner::new();
        let id = ids.assign("Insulin", None);

        assert!(ids.contains(&id));
        assert!(!ids.contains("Glucagon"));
        assert_eq!(ids.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_never_issues_duplicates(
            labels in proptest::collection::vec("[a-z +()-]{0,6}", 1..40)
        ) {
            let mut ids = IdAssigner::new();
            let mut seen = HashSet::new();
            for (i, label) in labels.iter().enumerate() {
                let source_id = format!("g{i}");
                let id = ids.assign(label, Some(&source_id));
                prop_assert!(seen.insert(id));
            }
            prop_assert_eq!(ids.len(), labels.len());
        }
    }
}
