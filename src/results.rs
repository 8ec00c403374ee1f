use crate::error::{BrochureError, Result};
use crate::utils::brochure_filename;
use std::fs;
use std::path::{Path, PathBuf};

/// A generated brochure for one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrochureDocument {
    /// Company the brochure describes
    pub company_name: String,
    /// Raw markdown returned by the model
    pub body_markdown: String,
}

/// A brochure together with the file it was written to
#[derive(Debug, Clone)]
pub struct SavedBrochure {
    pub document: BrochureDocument,
    pub path: PathBuf,
}

impl BrochureDocument {
    /// Create a new brochure document
    pub fn new(company_name: String, body_markdown: String) -> Self {
        Self {
            company_name,
            body_markdown,
        }
    }

    /// Write the brochure into `dir`, overwriting any previous file
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        write_brochure_in(dir, &self.company_name, &self.body_markdown)
    }
}

/// Write a brochure as UTF-8 into `dir`; an empty `dir` means the working directory
pub fn write_brochure_in(dir: &Path, company_name: &str, body_markdown: &str) -> Result<PathBuf> {
    let path = dir.join(brochure_filename(company_name));

    fs::write(&path, body_markdown.as_bytes()).map_err(|source| BrochureError::FileWrite {
        path: path.clone(),
        source,
    })?;

    ::log::info!("Brochure has been saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_brochure_in(dir.path(), "Acme Corp", "# Hi").unwrap();

        assert_eq!(path, dir.path().join("acme_corp_brochure.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Hi");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("acme_corp_brochure.md"), "old content that is longer").unwrap();

        let path = write_brochure_in(dir.path(), "Acme Corp", "# Hi").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "# Hi");
    }

    #[test]
    fn test_write_preserves_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let body = "# Ahoy ☠️\n\nZürich, 東京, ¡sí!";
        let document = BrochureDocument::new("Café Co".to_string(), body.to_string());

        let path = document.save_in(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "café_co_brochure.md");
        assert_eq!(fs::read_to_string(path).unwrap(), body);
    }

    #[test]
    fn test_unwritable_destination_is_file_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        match write_brochure_in(&missing, "Acme", "# Hi") {
            Err(BrochureError::FileWrite { path, .. }) => {
                assert_eq!(path, missing.join("acme_brochure.md"));
            }
            other => panic!("expected file write error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_to_working_directory() {
        let path = write_brochure_in(Path::new(""), "Results Cwd Check", "# Hi").unwrap();
        let contents = fs::read_to_string(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(path, PathBuf::from("results_cwd_check_brochure.md"));
        assert_eq!(contents.unwrap(), "# Hi");
    }

    #[test]
    fn test_default_directory_is_bare_filename() {
        assert_eq!(
            Path::new("").join(brochure_filename("Acme Corp")),
            PathBuf::from("acme_corp_brochure.md")
        );
    }
}
