use itertools::Itertools;

/// Lowercases, turns `,` and `.` into spaces and collapses whitespace runs.
/// `"St. Albert,"` becomes `"st albert"`.
pub(super) fn normalize_text(value: &str) -> String {
    value
        .to_lowercase()
        .replace(['.', ','], " ")
        .split_whitespace()
        .join(" ")
}

/// Strips all whitespace and uppercases. `"t8n 1x1"` becomes `"T8N1X1"`.
pub(super) fn normalize_postal_code(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
