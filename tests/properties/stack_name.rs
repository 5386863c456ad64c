//! Property tests for stack name validation.

use proptest::prelude::*;

use samvars::StackName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whitespace-only input never becomes a stack name.
    #[test]
    fn property_blank_names_are_rejected(blank in "[ \t\r\n]{0,8}") {
        prop_assert!(StackName::new(&blank).is_err());
    }

    /// PROPERTY: surrounding whitespace is trimmed and the rest kept verbatim.
    #[test]
    fn property_names_are_trimmed(
        name in "[A-Za-z][A-Za-z0-9-]{0,30}",
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let stack = StackName::new(&format!("{left}{name}{right}")).unwrap();
        prop_assert_eq!(stack.as_str(), name.as_str());
    }
}
