//! Core type definitions
//!
//! Package descriptors and the lookup tables built from them, with minimal
//! logic - focusing on data representation.

use std::collections::HashMap;

use crate::common::ConfigBuilder;
use crate::error::BuildDependsError;

/// Descriptors keyed by their own directory id
///
/// The key is always taken from [`Descriptor::directory`], so a node in the
/// graph can never name a directory that no descriptor owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorStore {
    descriptors: HashMap<String, Descriptor>,
}

impl DescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor under its directory id, returning the descriptor it
    /// replaced
    pub fn insert(&mut self, descriptor: Descriptor) -> Option<Descriptor> {
        self.descriptors
            .insert(descriptor.directory.clone(), descriptor)
    }

    pub fn get(&self, directory: &str) -> Option<&Descriptor> {
        self.descriptors.get(directory)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in the map's native iteration order
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.values()
    }

    /// Descriptors in ascending directory order
    pub fn sorted(&self) -> Vec<&Descriptor> {
        let mut ordered: Vec<&Descriptor> = self.iter().collect();
        ordered.sort_by(|a, b| a.directory.cmp(&b.directory));
        ordered
    }
}

impl FromIterator<Descriptor> for DescriptorStore {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<Descriptor> for DescriptorStore {
    fn extend<I: IntoIterator<Item = Descriptor>>(&mut self, iter: I) {
        for descriptor in iter {
            self.insert(descriptor);
        }
    }
}

/// Binary package name to the directory id that produces it
pub type BinaryIndex = HashMap<String, String>;

/// Parsed metadata for one source package directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    directory: String,
    source: String,
    binaries: Vec<String>,
    build_depends: String,
}

impl Descriptor {
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::new()
    }

    /// Directory id, the key of this descriptor in a [`DescriptorStore`]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Source package name
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the binary packages built from this source
    pub fn binaries(&self) -> &[String] {
        &self.binaries
    }

    /// Build-Depends relations joined with `", "`
    pub fn build_depends(&self) -> &str {
        &self.build_depends
    }
}

#[derive(Default)]
pub struct DescriptorBuilder {
    directory: Option<String>,
    source: Option<String>,
    binaries: Vec<String>,
    build_depends: Option<String>,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_binaries<I, S>(mut self, binaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binaries = binaries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_build_depends(mut self, build_depends: impl Into<String>) -> Self {
        self.build_depends = Some(build_depends.into());
        self
    }
}

impl ConfigBuilder for DescriptorBuilder {
    type Config = Descriptor;

    fn build(self) -> Result<Self::Config, BuildDependsError> {
        let directory = self
            .directory
            .ok_or_else(|| BuildDependsError::ConfigurationError {
                message: "Missing required field: directory".to_string(),
            })?;

        Ok(Descriptor {
            // Packages without an explicit source name are named after their directory
            source: self.source.unwrap_or_else(|| directory.clone()),
            directory,
            binaries: self.binaries,
            build_depends: self.build_depends.unwrap_or_default(),
        })
    }
}
