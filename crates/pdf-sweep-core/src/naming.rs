use std::path::Path;

/// True when any character of `name` is an uppercase letter.
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// Final path component, lossily converted to UTF-8. Empty for paths ending in `..` or root.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}
