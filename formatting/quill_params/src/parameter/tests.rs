//! Tests for the parameter identity and value model.

use rustc_hash::FxHashSet;

use super::*;

/// A formatter-specific parameter kind: fully constructed before a
/// parameter is derived from it.
struct IndentStyle {
    spaces: usize,
}

impl ParameterValue for IndentStyle {
    fn to_value_string(&self) -> String {
        self.spaces.to_string()
    }
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_derives_value_from_source() {
        let source = IndentStyle { spaces: 4 };
        let parameter = FormattingParameter::new(&source);
        assert_eq!(parameter.value(), "4");
    }

    #[test]
    fn new_accepts_common_value_types() {
        assert_eq!(FormattingParameter::new(&true).value(), "true");
        assert_eq!(FormattingParameter::new(&80usize).value(), "80");
        assert_eq!(FormattingParameter::new(&-2i32).value(), "-2");
        assert_eq!(FormattingParameter::new(&'\t').value(), "\t");
        assert_eq!(FormattingParameter::new("lf").value(), "lf");
        assert_eq!(FormattingParameter::new(&"crlf").value(), "crlf");
        assert_eq!(FormattingParameter::new(&"x".to_owned()).value(), "x");
    }

    #[test]
    fn from_value_stores_verbatim() {
        let parameter = FormattingParameter::from_value("  Mixed Case  ");
        assert_eq!(parameter.value(), "  Mixed Case  ");
    }

    #[test]
    fn from_parameter_copies_value_under_fresh_identity() {
        let original = FormattingParameter::from_value("80");
        let copy = FormattingParameter::from_parameter(&original);

        assert_eq!(copy.value(), original.value());
        assert_ne!(copy.id(), original.id());
        assert!(copy != original);
    }

    #[test]
    fn identifiers_are_unique_per_instance() {
        let ids: FxHashSet<ParameterId> = (0..128)
            .map(|_| FormattingParameter::from_value("same").id())
            .collect();
        assert_eq!(ids.len(), 128);
    }
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_string_yields_exactly_the_value() {
        let derived = FormattingParameter::new(&IndentStyle { spaces: 2 });
        assert_eq!(derived.to_string(), derived.value());

        let verbatim = FormattingParameter::from_value("  spaced  ");
        assert_eq!(verbatim.to_string(), "  spaced  ");

        let copied = FormattingParameter::from_parameter(&verbatim);
        assert_eq!(copied.to_string(), "  spaced  ");
    }

    #[test]
    fn parameter_id_displays_as_text() {
        let parameter = FormattingParameter::from_value("x");
        assert!(!parameter.id().to_string().is_empty());
    }
}

mod identity_equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn a_parameter_equals_itself_and_its_clone() {
        let parameter = FormattingParameter::from_value("4");
        let clone = parameter.clone();
        assert_eq!(parameter, clone);
        assert_eq!(parameter.id(), clone.id());
    }

    #[test]
    fn equal_values_do_not_make_parameters_equal() {
        let first = FormattingParameter::from_value("4");
        let second = FormattingParameter::from_value("4");
        assert_eq!(first.value(), second.value());
        assert!(first != second);
    }

    #[test]
    fn hashing_follows_identity() {
        let parameter = FormattingParameter::from_value("4");
        let twin = FormattingParameter::from_value("4");

        let mut set = FxHashSet::default();
        set.insert(parameter.clone());
        set.insert(parameter.clone());
        assert_eq!(set.len(), 1);

        set.insert(twin);
        assert_eq!(set.len(), 2);
    }
}

mod value_equality {
    use super::*;

    #[test]
    fn parameter_equals_its_exact_text() {
        let parameter = FormattingParameter::from_value("4");
        assert!(parameter == "4");
        assert!(parameter == *"4");
        assert!(parameter == "4".to_owned());
    }

    #[test]
    fn comparison_is_exact_with_no_normalization() {
        let parameter = FormattingParameter::from_value("True");
        assert!(parameter != "true");
        assert!(parameter != "True ");
        assert!(parameter != " True");
        assert!(parameter != "");
    }

    #[test]
    fn string_side_comparison_matches() {
        let parameter = FormattingParameter::from_value("80");
        assert!("80" == parameter);
        assert!(*"80" == parameter);
        assert!("80".to_owned() == parameter);
        assert!("81" != parameter);
    }
}
