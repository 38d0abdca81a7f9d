//! Property-based tests for name derivation and message traversal
//!
//! Checks that the identifier transforms are deterministic, directory
//! independent and idempotent on PascalCase input, and that generated method
//! counts track the non-map nodes of arbitrary message trees.

use jsonshim_core::naming::{camel_case, file_name_prefix};
use jsonshim_core::{MessageType, SchemaFile, eligible_messages, generate_file};
use proptest::prelude::*;

// Strategy: file stems built from identifier characters plus separators
fn arb_stem() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_.-]{0,24}"
}

// Strategy: directory prefixes such as "a/b/"
fn arb_dir() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_]{1,8}", 0..4).prop_map(|parts| {
        parts
            .into_iter()
            .map(|p| format!("{p}/"))
            .collect::<String>()
    })
}

// Strategy: PascalCase words without underscores
fn arb_pascal() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{0,6}[0-9]{0,2}", 1..5).prop_map(|words| words.concat())
}

// Strategy: message trees with a bounded depth and fan-out
fn arb_message() -> impl Strategy<Value = MessageType> {
    let leaf = ("[A-Z][a-z]{0,5}", any::<bool>()).prop_map(|(name, map_entry)| MessageType {
        go_name: name,
        map_entry,
        nested: Vec::new(),
    });
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            "[A-Z][a-z]{0,5}",
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, map_entry, nested)| MessageType {
                go_name: name,
                map_entry,
                nested,
            })
    })
}

/// Reference count: non-map nodes whose ancestors are all non-map.
fn count_reachable(messages: &[MessageType]) -> usize {
    messages
        .iter()
        .filter(|m| !m.map_entry)
        .map(|m| 1 + count_reachable(&m.nested))
        .sum()
}

proptest! {
    /// Property: the directory part of a schema path never affects the prefix
    #[test]
    fn proptest_prefix_ignores_directory(dir in arb_dir(), stem in arb_stem()) {
        let base = format!("{stem}.proto");
        let nested = format!("{dir}{base}");

        prop_assert_eq!(file_name_prefix(&nested), file_name_prefix(&base));
    }

    /// Property: the transform is a pure function of its input
    #[test]
    fn proptest_camel_case_deterministic(input in ".{0,32}") {
        prop_assert_eq!(camel_case(&input), camel_case(&input));
    }

    /// Property: PascalCase without underscores is a fixed point
    #[test]
    fn proptest_camel_case_idempotent_on_pascal(input in arb_pascal()) {
        let once = camel_case(&input);
        let twice = camel_case(&once);

        prop_assert_eq!(&once, &input);
        prop_assert_eq!(twice, once);
    }

    /// Property: output never starts with an underscore
    #[test]
    fn proptest_camel_case_never_leads_with_underscore(input in "[a-z_][a-z0-9_]{0,16}") {
        prop_assert!(!camel_case(&input).starts_with('_'));
    }

    /// Property: one method pair per reachable non-map message
    #[test]
    fn proptest_method_pairs_match_reachable_messages(
        messages in prop::collection::vec(arb_message(), 0..4)
    ) {
        let expected = count_reachable(&messages);
        let mut schema = SchemaFile::new("tree.proto", "tree");
        schema.messages = messages;

        let content = generate_file(&schema).content();

        prop_assert_eq!(eligible_messages(&schema.messages).len(), expected);
        prop_assert_eq!(content.matches(") MarshalJSON() ([]byte, error) {").count(), expected);
        prop_assert_eq!(content.matches(") UnmarshalJSON(b []byte) error {").count(), expected);
        prop_assert_eq!(content.matches("var (").count(), 1);
        prop_assert!(content.trim_end().ends_with(')'));
    }
}
