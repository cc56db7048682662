//! Schema name validation.
//!
//! Type, field, and argument names share the same lexical rule: they must
//! match `[_A-Za-z][_0-9A-Za-z]*`. Reflection subsystems routinely surface
//! class names that violate it (e.g. names containing hyphens or dots), so
//! the model validates names before they reach a registry.

/// Checks whether a name is a valid schema identifier.
///
/// Valid names start with an underscore or an ASCII letter and continue
/// with underscores, ASCII letters, or digits.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
