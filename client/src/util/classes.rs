//! Utility-class string composition.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Join class fragments with single spaces, dropping empty ones.
///
/// Fragments may themselves contain several classes; surrounding whitespace
/// is trimmed so callers can pass `""` for disabled options.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
