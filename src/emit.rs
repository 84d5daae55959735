use crate::enumerate::Combination;

/// The always-false statement that opens every artifact, allowing every
/// generated clause to begin with `else if`.
pub const OPENING_STATEMENT: &str = "if (0) {}";

/// Produce the dispatch clause for one combination of field values, e.g.
/// `else if (link == 1) {return arm_branch<1>;}`.  The field names are tested
/// against their values in field order, and the same values are passed in the
/// same order as template arguments of `target_name`.  A combination without
/// any fields yields an unconditional clause.  No trailing newline is
/// included.
#[must_use]
pub fn emit_clause(combination: &Combination, target_name: &str) -> String {
    let condition = if combination.is_empty() {
        "1".to_owned()
    } else {
        combination
            .pairs()
            .iter()
            .map(|(name, value)| format!("{} == {}", name, value))
            .collect::<Vec<_>>()
            .join(" && ")
    };
    let arguments = combination.values().map(|value| value.to_string()).collect::<Vec<_>>().join(",");

    format!("else if ({}) {{return {}<{}>;}}", condition, target_name, arguments)
}
