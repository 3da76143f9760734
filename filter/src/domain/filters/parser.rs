//! Condition parsing
//!
//! A condition is either a function call such as `between(1000,2000)` or a
//! plain comma-separated value list such as `red,blue`.

use std::sync::OnceLock;

use regex::Regex;

use crate::data::predicate::Comparison;

/// Raw shape of one condition string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCondition {
    FunctionCall { operator: String, raw_args: String },
    ValueList { values: Vec<String> },
}

/// A recognised filter operator with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    In(Vec<String>),
    Not(Vec<String>),
    Compare(Comparison, String),
    Between { low: String, high: String },
    Like(String),
    Contains(String),
    Null,
    Blank,
}

fn function_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // No parentheses inside the argument list
    RE.get_or_init(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\(([^()]*)\)$").expect("Invalid regex"))
}

pub fn parse_condition(condition: &str) -> ParsedCondition {
    match function_call_regex().captures(condition) {
        Some(caps) => ParsedCondition::FunctionCall {
            operator: caps[1].to_string(),
            raw_args: caps[2].to_string(),
        },
        None => ParsedCondition::ValueList {
            values: split_values(condition),
        },
    }
}

/// Split on commas, keeping empty tokens (`""` is one empty value)
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

impl FilterOp {
    /// Resolve a parsed condition; `None` for unrecognised functions
    pub fn from_condition(condition: ParsedCondition) -> Option<Self> {
        match condition {
            ParsedCondition::ValueList { values } => Some(FilterOp::In(values)),
            ParsedCondition::FunctionCall { operator, raw_args } => {
                Self::from_call(&operator, raw_args)
            }
        }
    }

    fn from_call(operator: &str, raw_args: String) -> Option<Self> {
        let op = match operator {
            "not" => FilterOp::Not(split_values(&raw_args)),
            "greater_than" => FilterOp::Compare(Comparison::Gt, raw_args),
            "less_than" => FilterOp::Compare(Comparison::Lt, raw_args),
            "greater_than_or_equal" => FilterOp::Compare(Comparison::Gte, raw_args),
            "less_than_or_equal" => FilterOp::Compare(Comparison::Lte, raw_args),
            "between" => {
                // Only the outermost bounds count; middle tokens are dropped
                let mut bounds = split_values(&raw_args);
                let high = bounds.pop().unwrap_or_default();
                let low = if bounds.is_empty() {
                    high.clone()
                } else {
                    bounds.swap_remove(0)
                };
                FilterOp::Between { low, high }
            }
            "like" => FilterOp::Like(raw_args),
            "contains" => FilterOp::Contains(raw_args),
            "null" => FilterOp::Null,
            "blank" => FilterOp::Blank,
            _ => return None,
        };
        Some(op)
    }
}
