/// Canonicalize an argument name for snapshot lookup.
///
/// Removes the first character that is not an ASCII letter, then lowercases
/// the result. Only the first such character is removed: `build_dir` becomes
/// `builddir`, but `build--dir` keeps its second hyphen and becomes
/// `build-dir`. Every lookup goes through the same canonicalization, so names
/// with a single separator collapse consistently on both sides.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut stripped = false;
    for ch in raw.chars() {
        if !stripped && !ch.is_ascii_alphabetic() {
            stripped = true;
            continue;
        }
        out.extend(ch.to_lowercase());
    }
    out
}
