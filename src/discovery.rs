use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::package::CONTROL_FILE;
use crate::error::BuildDependsError;

/// A directory holding a Debian source package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDirectory {
    /// Directory id used for graph nodes
    pub id: String,
    pub path: PathBuf,
}

impl PackageDirectory {
    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_FILE)
    }
}

pub struct PackageDiscovery {
    base: PathBuf,
}

impl Default for PackageDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageDiscovery {
    /// Discovery relative to the current directory
    pub fn new() -> Self {
        Self::with_base(".")
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Find package directories among `entries`, or among the immediate
    /// children of the base directory when `entries` is empty
    ///
    /// Symlinks are never followed, neither for the entry itself nor for its
    /// control file. Results are sorted by id.
    pub fn discover(
        &self,
        entries: &[PathBuf],
    ) -> Result<Vec<PackageDirectory>, BuildDependsError> {
        let candidates = if entries.is_empty() {
            self.list_base()?
        } else {
            self.explicit_entries(entries)?
        };

        let mut found = BTreeMap::new();
        for candidate in candidates {
            if is_package_directory(&candidate.path)? {
                found.entry(candidate.id.clone()).or_insert(candidate);
            }
        }

        Ok(found.into_values().collect())
    }

    fn list_base(&self) -> Result<Vec<PackageDirectory>, BuildDependsError> {
        let mut candidates = Vec::new();

        for entry in WalkDir::new(&self.base)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| BuildDependsError::DirectoryReadError {
                path: self.base.clone(),
                source: io::Error::from(e),
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            candidates.push(PackageDirectory {
                id: entry.file_name().to_string_lossy().to_string(),
                path: entry.into_path(),
            });
        }

        Ok(candidates)
    }

    fn explicit_entries(
        &self,
        entries: &[PathBuf],
    ) -> Result<Vec<PackageDirectory>, BuildDependsError> {
        let mut candidates = Vec::new();

        for entry in entries {
            let path = self.base.join(entry);
            let metadata = path
                .symlink_metadata()
                .map_err(|e| BuildDependsError::DirectoryReadError {
                    path: entry.clone(),
                    source: e,
                })?;

            if !metadata.is_dir() {
                continue;
            }

            candidates.push(PackageDirectory {
                id: directory_id(entry),
                path,
            });
        }

        Ok(candidates)
    }
}

/// Id for a user-supplied path: the path as given, minus trailing separators
fn directory_id(entry: &Path) -> String {
    let normalized: PathBuf = entry.components().collect();
    let id = normalized.to_string_lossy().to_string();
    if id.is_empty() {
        entry.to_string_lossy().to_string()
    } else {
        id
    }
}

fn is_package_directory(path: &Path) -> Result<bool, BuildDependsError> {
    let control = path.join(CONTROL_FILE);
    match control.symlink_metadata() {
        Ok(metadata) => Ok(metadata.file_type().is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BuildDependsError::DirectoryReadError {
            path: control,
            source: e,
        }),
    }
}
