use std::path::Path;
use std::str::FromStr;

use deb822_lossless::{Deb822, Paragraph};
use debian_control::lossy::Relations;
use miette::NamedSource;

use crate::common::ConfigBuilder;
use crate::constants::dot::DEPENDENCY_SEPARATOR;
use crate::constants::package::{BUILD_DEPENDS_FIELD, PACKAGE_FIELD, SOURCE_FIELD};
use crate::core::Descriptor;
use crate::error::{BuildDependsError, ControlParseError};

/// The fields of a `debian/control` file the graph needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFile {
    pub source: String,
    pub binaries: Vec<String>,
    pub build_depends: String,
}

impl ControlFile {
    pub fn parse_file(path: &Path) -> Result<Self, BuildDependsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BuildDependsError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    /// Parse control file text; `name` only labels diagnostics
    pub fn parse_str(name: &str, content: &str) -> Result<Self, BuildDependsError> {
        let control = Deb822::from_str(content)
            .map_err(|e| parse_error(name, content, e.to_string()))?;
        let mut paragraphs = control.paragraphs();

        let Some(source_paragraph) = paragraphs.next() else {
            return Err(missing_field(name, SOURCE_FIELD));
        };

        let source = field(&source_paragraph, SOURCE_FIELD)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| missing_field(name, SOURCE_FIELD))?;

        let binaries = paragraphs
            .filter_map(|paragraph| field(&paragraph, PACKAGE_FIELD))
            .filter(|package| !package.is_empty())
            .collect();

        let build_depends = match field(&source_paragraph, BUILD_DEPENDS_FIELD) {
            Some(value) => normalize_relations(&value)
                .map_err(|reason| parse_error(name, content, reason))?,
            None => String::new(),
        };

        Ok(Self {
            source,
            binaries,
            build_depends,
        })
    }

    pub fn into_descriptor(self, directory: &str) -> Result<Descriptor, BuildDependsError> {
        Descriptor::builder()
            .with_directory(directory)
            .with_source(self.source)
            .with_binaries(self.binaries)
            .with_build_depends(self.build_depends)
            .build()
    }
}

/// Field value with continuation lines kept; names compare case-insensitively
fn field(paragraph: &Paragraph, name: &str) -> Option<String> {
    paragraph
        .items()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.trim().to_string())
}

/// Re-serialize a relationship field as single-line relations joined by `", "`
///
/// The relations are parsed and written back by `debian-control`, which puts
/// one space between a package name and its version, architecture or profile
/// restrictions, so the package name is always the text before the first
/// space.
pub fn normalize_relations(value: &str) -> Result<String, String> {
    let folded = value
        .split(',')
        .map(|relation| relation.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|relation| !relation.is_empty())
        .collect::<Vec<_>>()
        .join(DEPENDENCY_SEPARATOR);

    if folded.is_empty() {
        return Ok(folded);
    }

    let relations = Relations::from_str(&folded)
        .map_err(|e| format!("invalid Build-Depends relation: {e}"))?;

    Ok(relations.to_string())
}

fn parse_error(name: &str, content: &str, reason: String) -> BuildDependsError {
    BuildDependsError::ControlParseError(Box::new(ControlParseError {
        file: name.to_string(),
        reason: reason.trim().to_string(),
        source_code: NamedSource::new(name, content.to_string()),
        span: None,
    }))
}

fn missing_field(name: &str, field: &str) -> BuildDependsError {
    BuildDependsError::MissingField {
        file: name.to_string(),
        field: field.to_string(),
    }
}
