use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid control file syntax in '{file}': {reason}")]
#[diagnostic(
    code(builddepends::control_parse_error),
    help("Check the deb822 syntax and that Build-Depends is a valid relation list")
)]
pub struct ControlParseError {
    pub file: String,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum BuildDependsError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(builddepends::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to inspect '{path}'")]
    #[diagnostic(
        code(builddepends::directory_error),
        help("Check that the path exists and is readable")
    )]
    DirectoryReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ControlParseError(Box<ControlParseError>),

    #[error("Missing required field '{field}' in '{file}'")]
    #[diagnostic(
        code(builddepends::missing_field),
        help("The first paragraph of debian/control must declare the source package")
    )]
    MissingField { file: String, field: String },

    #[error("IO error")]
    #[diagnostic(
        code(builddepends::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(builddepends::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
