use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;

/// Classifies a leaf item into a type tag based on its extension.
///
/// Tags are the extension in lowercase with a leading dot (e.g. ".rs"),
/// or "(no ext)" when the item has none. Extensions longer than 10
/// characters are treated as noise rather than a real type.
pub fn type_tag(path: &Path) -> Cow<'static, str> {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) if !ext.is_empty() && ext.len() <= 10 => {
            Cow::Owned(format!(".{}", ext.to_ascii_lowercase()))
        }
        _ => Cow::Borrowed("(no ext)"),
    }
}

/// Renders `path` relative to `root` for display, falling back to the
/// full path when it lies outside the root (e.g. through a symlink).
pub fn display_rel(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_simple_extension() {
        assert_eq!(type_tag(Path::new("main.rs")), ".rs");
        assert_eq!(type_tag(Path::new("dir/logo.png")), ".png");
        assert_eq!(type_tag(Path::new("README.md")), ".md");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(type_tag(Path::new("Makefile")), "(no ext)");
        assert_eq!(type_tag(Path::new("LICENSE")), "(no ext)");
        // Path::extension treats dotfiles as extension-less
        assert_eq!(type_tag(Path::new(".gitignore")), "(no ext)");
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(type_tag(Path::new("file.test.rs")), ".rs");
        assert_eq!(type_tag(Path::new("app.config.json")), ".json");
    }

    #[test]
    fn test_case_normalization() {
        assert_eq!(type_tag(Path::new("IMAGE.PNG")), ".png");
        assert_eq!(type_tag(Path::new("Script.JS")), ".js");
    }

    #[test]
    fn test_long_extension_rejected() {
        assert_eq!(type_tag(Path::new("file.verylongextension")), "(no ext)");
    }

    #[test]
    fn test_display_rel() {
        let root = PathBuf::from("/data/projects");
        assert_eq!(
            display_rel(&root, Path::new("/data/projects/a/b.rs")),
            "a/b.rs"
        );
        assert_eq!(display_rel(&root, Path::new("/elsewhere/c.rs")), "/elsewhere/c.rs");
    }
}
