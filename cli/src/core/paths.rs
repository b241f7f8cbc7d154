use std::path::Path;

/// Path as shown to users: relative to the working directory when possible,
/// without the Windows verbatim prefix.
pub fn clean_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf());

    let s = relative.display().to_string();
    match s.strip_prefix(r"\\?\") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_keeps_relative_paths() {
        assert_eq!(clean_path(Path::new("tests/fixtures/a.json")), "tests/fixtures/a.json");
    }

    #[test]
    fn test_clean_path_strips_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(clean_path(&cwd.join("collection.json")), "collection.json");
    }
}
