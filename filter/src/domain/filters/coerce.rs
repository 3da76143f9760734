//! Value coercion by declared field type

use crate::data::predicate::FilterValue;
use crate::data::schema::FieldType;

/// Parse a filter token as a boolean.
///
/// Only the exact string `"true"` is true. `"false"`, `""`, `"TRUE"`, `"1"`
/// and anything else are false.
pub fn to_bool(value: &str) -> bool {
    value == "true"
}

/// Coerce list values for a field of the given type.
///
/// Boolean fields go through [`to_bool`]. Every other type, `Unknown`
/// included, binds the text unchanged, tagged with the column type where
/// the backend may need a cast (see [`FilterValue::for_field`]).
pub fn coerce_values(field_type: FieldType, values: Vec<String>) -> Vec<FilterValue> {
    match field_type {
        FieldType::Boolean => values
            .iter()
            .map(|v| FilterValue::Bool(to_bool(v)))
            .collect(),
        _ => values
            .into_iter()
            .map(|v| FilterValue::for_field(field_type, v))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bool_exact_true_only() {
        assert!(to_bool("true"));
        assert!(!to_bool("false"));
        assert!(!to_bool(""));
        assert!(!to_bool("anything"));
    }

    // Asymmetric on purpose: case variants and numeric truthiness are false
    #[test]
    fn to_bool_non_intuitive_cases() {
        assert!(!to_bool("TRUE"));
        assert!(!to_bool("True"));
        assert!(!to_bool("1"));
        assert!(!to_bool("yes"));
        assert!(!to_bool(" true"));
    }

    #[test]
    fn boolean_fields_are_coerced() {
        let values = vec!["true".to_string(), "false".to_string(), "x".to_string()];
        assert_eq!(
            coerce_values(FieldType::Boolean, values),
            vec![
                FilterValue::Bool(true),
                FilterValue::Bool(false),
                FilterValue::Bool(false)
            ]
        );
    }

    #[test]
    fn unknown_type_passes_text_through() {
        let values = vec!["true".to_string(), "nope".to_string()];
        assert_eq!(
            coerce_values(FieldType::Unknown, values),
            vec![FilterValue::text("true"), FilterValue::text("nope")]
        );
    }

    #[test]
    fn other_types_pass_text_through() {
        assert_eq!(
            coerce_values(FieldType::String, vec!["42".to_string()]),
            vec![FilterValue::text("42")]
        );
        for field_type in [
            FieldType::Integer,
            FieldType::Float,
            FieldType::Date,
            FieldType::DateTime,
        ] {
            let values = coerce_values(field_type, vec!["42".to_string(), "abc".to_string()]);
            assert_eq!(
                values,
                vec![
                    FilterValue::Typed("42".to_string(), field_type),
                    FilterValue::Typed("abc".to_string(), field_type)
                ]
            );
            assert_eq!(values[1].to_string(), "abc");
        }
    }
}
