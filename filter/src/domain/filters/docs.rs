//! Human-readable description of the `filter` parameter

use crate::core::constants::FILTER_PARAM;

/// (condition syntax, meaning) for every supported form
const CONDITIONS: &[(&str, &str)] = &[
    ("a,b", "equals one of the listed values"),
    ("not(a,b)", "equals none of the listed values"),
    ("greater_than(v)", "greater than v"),
    ("less_than(v)", "less than v"),
    ("greater_than_or_equal(v)", "greater than or equal to v"),
    ("less_than_or_equal(v)", "less than or equal to v"),
    ("between(lo,hi)", "between lo and hi, both inclusive"),
    ("like(pattern)", "case-insensitive LIKE; use % as wildcard"),
    ("contains(text)", "case-insensitive substring match"),
    ("null()", "is null"),
    ("blank()", "is null or an empty string"),
];

/// Describe the filter parameter, optionally for a single field
pub fn describe_filter_param(field: Option<&str>) -> String {
    let name = field.unwrap_or("<field>");
    let param = format!("{}[{}]", FILTER_PARAM, name);

    let mut out = match field {
        Some(field) => format!("Filter results by `{}` with {}=<condition>.\n", field, param),
        None => format!(
            "Filter results with {}=<condition>. Conditions on several fields are combined with AND.\n",
            param
        ),
    };
    out.push_str("Values are compared as given; boolean fields treat only `true` as true.\n\n");
    out.push_str("Conditions:\n");

    let width = CONDITIONS
        .iter()
        .map(|(syntax, _)| param.len() + 1 + syntax.len())
        .max()
        .unwrap_or(0);
    for (syntax, meaning) in CONDITIONS {
        let example = format!("{}={}", param, syntax);
        out.push_str(&format!("  {:<width$}  {}\n", example, meaning, width = width));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_description_lists_every_operator() {
        let text = describe_filter_param(None);
        assert!(text.starts_with("Filter results with filter[<field>]=<condition>."));
        assert!(text.contains("combined with AND"));
        for op in [
            "not(", "greater_than(", "less_than(", "greater_than_or_equal(",
            "less_than_or_equal(", "between(", "like(", "contains(", "null()", "blank()",
        ] {
            assert!(text.contains(op), "missing {}", op);
        }
    }

    #[test]
    fn field_scoped_description() {
        let text = describe_filter_param(Some("price"));
        assert!(text.starts_with("Filter results by `price` with filter[price]=<condition>."));
        assert!(text.contains("filter[price]=between(lo,hi)"));
        assert!(!text.contains("<field>"));
    }

    #[test]
    fn description_is_pure() {
        assert_eq!(describe_filter_param(Some("a")), describe_filter_param(Some("a")));
    }
}
