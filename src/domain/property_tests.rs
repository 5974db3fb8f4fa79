//! Property-based tests for domain logic
//!
//! These tests use proptest to verify invariants across many random inputs.

#[cfg(test)]
mod tests {
    use crate::domain::validation::{check_preflight, validate_branch_name};
    use crate::git::parse_porcelain_status;
    use crate::schemas::StatusEntry;
    use proptest::prelude::*;

    // ===== STRATEGY HELPERS =====

    /// Generate an index code that means nothing is staged
    fn unstaged_index_code() -> impl Strategy<Value = char> {
        prop_oneof![Just(' '), Just('?')]
    }

    /// Generate an index code for a staged change
    fn staged_index_code() -> impl Strategy<Value = char> {
        prop_oneof![Just('M'), Just('A'), Just('D'), Just('R'), Just('C'), Just('U'), Just('T')]
    }

    fn work_tree_code() -> impl Strategy<Value = char> {
        prop_oneof![Just(' '), Just('M'), Just('D'), Just('?')]
    }

    /// Generate a plausible repository-relative path
    fn any_path() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_. -]{1,12}(/[a-zA-Z0-9_.-]{1,12}){0,3}"
    }

    fn unstaged_entry() -> impl Strategy<Value = StatusEntry> {
        (unstaged_index_code(), work_tree_code(), any_path())
            .prop_map(|(x, y, path)| StatusEntry::new(x, y, path))
    }

    // ===== PREFLIGHT PROPERTIES =====

    proptest! {
        #[test]
        fn prop_unstaged_entries_pass_preflight(
            entries in prop::collection::vec(unstaged_entry(), 0..10)
        ) {
            prop_assert!(check_preflight(&entries).is_ok());
        }

        #[test]
        fn prop_any_staged_entry_fails_preflight(
            mut entries in prop::collection::vec(unstaged_entry(), 0..10),
            x in staged_index_code(),
            y in work_tree_code(),
            path in any_path(),
            position in any::<prop::sample::Index>(),
        ) {
            let at = position.index(entries.len() + 1);
            entries.insert(at, StatusEntry::new(x, y, path));
            prop_assert!(check_preflight(&entries).is_err());
        }
    }

    // ===== BRANCH NAME PROPERTIES =====

    proptest! {
        #[test]
        fn prop_lowercase_and_hyphens_are_valid(name in "[a-z-]{1,30}") {
            prop_assert!(validate_branch_name(&name).valid);
        }

        #[test]
        fn prop_digits_and_uppercase_are_invalid(
            prefix in "[a-z-]{0,10}",
            bad in "[A-Z0-9_/ ]",
            suffix in "[a-z-]{0,10}",
        ) {
            let name = format!("{}{}{}", prefix, bad, suffix);
            let result = validate_branch_name(&name);
            prop_assert!(!result.valid);
        }
    }

    // ===== STATUS PARSING PROPERTIES =====

    proptest! {
        #[test]
        fn prop_parse_preserves_order_and_paths(
            entries in prop::collection::vec(unstaged_entry(), 0..10)
        ) {
            let output: String = entries
                .iter()
                .map(|e| format!("{}{} {}\0", e.x, e.y, e.path))
                .collect();

            let parsed = parse_porcelain_status(&output);
            prop_assert_eq!(parsed, entries);
        }
    }
}
