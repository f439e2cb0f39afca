use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::html::render_document;
use crate::parsing::{ParseOptions, parse_with};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
}

/// Read a markdown file relative to the docs root
pub fn read_file(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write converted output under the output root
pub fn write_file(
    relative_path: &RelativePath,
    out_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(out_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the docs directory
pub fn scan_markdown_files(docs_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !docs_root.exists() {
        return Err(IoError::InvalidDocsDir(
            "docs directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(docs_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Convert every markdown file under `docs_root` into an `.html` file at the
/// same relative path under `out_root`. Returns the number of files written.
pub fn convert_tree(
    docs_root: &Path,
    out_root: &Path,
    options: ParseOptions,
) -> Result<usize, IoError> {
    let files = scan_markdown_files(docs_root)?;

    let mut converted = 0;
    for path in &files {
        let stripped = path
            .strip_prefix(docs_root)
            .map_err(|_| IoError::InvalidDocsDir(format!("file outside root: {}", path.display())))?;
        let relative = RelativePathBuf::from_path(stripped).map_err(|_| {
            IoError::InvalidDocsDir(format!("unrepresentable path: {}", path.display()))
        })?;

        let source = fs::read_to_string(path).map_err(IoError::Io)?;
        let rendered = render_document(&parse_with(&source, options));
        write_file(&relative.with_extension("html"), out_root, &rendered)?;
        converted += 1;
    }
    Ok(converted)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_docs_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    fn create_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn scan_finds_markdown_files() {
        let docs = create_docs_dir();
        create_file(&docs, "index.md", "# Index");
        create_file(&docs, "guide/setup.md", "# Setup");
        create_file(&docs, "logo.png", "binary");

        let files = scan_markdown_files(docs.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "md"));
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("docs directory"));
    }

    #[test]
    fn read_file_not_found() {
        let docs = create_docs_dir();
        let result = read_file(RelativePath::new("missing.md"), docs.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn write_file_creates_parent_directories() {
        let out = create_docs_dir();
        write_file(RelativePath::new("a/b/page.html"), out.path(), "<p>x</p>\n").unwrap();
        assert!(out.path().join("a/b/page.html").exists());
    }

    #[test]
    fn convert_tree_mirrors_layout() {
        let docs = create_docs_dir();
        let out = create_docs_dir();
        create_file(&docs, "index.md", "# Home");
        create_file(&docs, "notes/first.md", "!!! note\n    Hi.");

        let count = convert_tree(docs.path(), out.path(), ParseOptions::default()).unwrap();
        assert_eq!(count, 2);

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert_eq!(index, "<h1>Home</h1>\n");

        let first = fs::read_to_string(out.path().join("notes/first.html")).unwrap();
        assert!(first.starts_with("<div class=\"admonition note\">"));
    }

    #[test]
    fn validate_docs_dir_rejects_files_and_missing_paths() {
        let docs = create_docs_dir();
        let file = create_file(&docs, "page.md", "x");

        assert!(validate_docs_dir(docs.path()).is_ok());
        assert!(validate_docs_dir(&file).is_err());
        assert!(validate_docs_dir(Path::new("/nonexistent/path")).is_err());
    }
}
