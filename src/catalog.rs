//! Play catalogs and on-disk discovery.
//!
//! A catalog is a plain text file with one `<display name>,<slug>` pair per
//! line. The slug names the markup file (`<slug>.xml`) inside a play directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{FolioError, FolioResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Reads and parses a catalog file.
    pub fn load<P: AsRef<Path>>(path: P) -> FolioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
        Self::parse(&text)
    }

    /// Parses catalog text. Blank lines are skipped.
    pub fn parse(text: &str) -> FolioResult<Self> {
        let mut entries = Vec::new();
        for (offset, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = offset + 1;
            let Some((name, slug)) = line.split_once(',') else {
                return Err(FolioError::Catalog {
                    line: line_number,
                    message: "missing ',' between name and slug".into(),
                });
            };
            let (name, slug) = (name.trim(), slug.trim());
            if name.is_empty() || slug.is_empty() {
                return Err(FolioError::Catalog {
                    line: line_number,
                    message: "name and slug must both be non-empty".into(),
                });
            }
            entries.push(CatalogEntry {
                name: name.to_string(),
                slug: slug.to_string(),
            });
        }
        tracing::debug!(entries = entries.len(), "parsed play catalog");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at 0-based `index`.
    pub fn get(&self, index: usize) -> FolioResult<&CatalogEntry> {
        self.entries.get(index).ok_or(FolioError::PlayIndex {
            index,
            len: self.entries.len(),
        })
    }

    /// Path of the markup file for entry `index` inside `dir`.
    pub fn play_path<P: AsRef<Path>>(&self, dir: P, index: usize) -> FolioResult<PathBuf> {
        let entry = self.get(index)?;
        Ok(dir.as_ref().join(format!("{}.xml", entry.slug)))
    }
}

/// Recursively finds `.xml` files under `root`, sorted for a stable listing.
pub fn discover_plays<P: AsRef<Path>>(root: P) -> FolioResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| FolioError::Walk {
            path: root.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_markup_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

fn is_markup_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
