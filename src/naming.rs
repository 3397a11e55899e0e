/// Exported (public) form of an identifier: first character upper-cased, rest untouched.
///
/// Operates on the first `char`, not the first byte, so multi-byte leads work.
/// A character whose upper-case form expands (e.g. `ß` → `SS`) keeps the full expansion.
pub fn export(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Name for structure hoisted out of `prefix`: `prefix + export(local)`.
pub fn synthesize(prefix: &str, local: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + local.len());
    out.push_str(prefix);
    out.push_str(&export(local));
    out
}

/// Field identifier for an exported name.
///
/// Characters that are neither alphanumeric nor `_` become `_`. A result that is
/// empty, starts with a digit, or is all underscores gets an `X` prefix.
pub fn field_ident(name: &str) -> String {
    let ident: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    let needs_prefix = ident.chars().all(|c| c == '_')
        || ident.starts_with(|c: char| c.is_ascii_digit());
    if needs_prefix { format!("X{ident}") } else { ident }
}
