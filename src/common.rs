//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments for commands that scan package directories
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Package directories to graph (defaults to every directory in the
    /// current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Suppress status messages on stderr
    #[arg(short, long, env = "BD_QUIET")]
    pub quiet: bool,
}

impl CommonArgs {
    /// Explicit paths; empty means "scan the current directory"
    pub fn get_paths(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::BuildDependsError>;
}

/// Trait for configurations that can be created from the parsed CLI
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Cli) -> Result<Self, crate::error::BuildDependsError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::BuildDependsError;

            fn try_from(command: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
