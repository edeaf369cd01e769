/// Normalizes a user-supplied name into the relative form used as a key by
/// the allocation ledger.
///
/// The result never starts with `/` or `./`, so `notes.txt`, `./notes.txt`
/// and `.//notes.txt` all name the same entry.
///
/// Examples:
/// - "a/b.txt" -> "a/b.txt"
/// - "./a//b.txt" -> "a/b.txt"
/// - "a\\b.txt" -> "a/b.txt"
/// - "docs/" -> "docs"
pub fn normalize_entry_name(name: &str) -> String {
    let unified = name.replace('\\', "/");
    let parts: Vec<&str> = unified
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    parts.join("/")
}

/// Returns `true` if `name` lies inside the directory `dir` (both normalized).
pub fn is_inside(name: &str, dir: &str) -> bool {
    if dir.is_empty() {
        return true;
    }
    name.strip_prefix(dir)
        .is_some_and(|rest| rest.starts_with('/'))
}
