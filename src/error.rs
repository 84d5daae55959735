use derive_more::{Display, From};
use std::{error::Error, fmt, io, path::PathBuf};

/// An invalid declaration in the group catalogue.  Configuration errors are
/// detected before any artifact is opened, so they never leave partial output
/// behind.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum ConfigError {
    /// A `Range` domain was declared with a size of zero.
    #[display(fmt = "field `{}` declares an empty range", field)]
    EmptyRange { field: String },
    /// An `Explicit` domain was declared without any values.
    #[display(fmt = "field `{}` declares an empty explicit value set", field)]
    EmptyExplicit { field: String },
    /// An `Explicit` domain lists the same value more than once.
    #[display(fmt = "field `{}` lists value {} more than once", field, value)]
    DuplicateValue { field: String, value: u32 },
    /// A field or target name cannot be emitted verbatim as a C++ identifier.
    #[display(fmt = "`{}` is not a valid identifier", name)]
    InvalidIdentifier { name: String },
    /// Two fields of the same group share a name.
    #[display(fmt = "group `{}` declares field `{}` more than once", output, field)]
    DuplicateField { output: String, field: String },
    /// An output name is empty or reaches outside of the output directory.
    #[display(fmt = "`{}` is not a valid output name", output)]
    InvalidOutputName { output: String },
    /// Two groups would write to the same artifact.
    #[display(fmt = "output `{}` is declared by more than one group", output)]
    DuplicateOutput { output: String },
    /// The product of the field sizes of a group does not fit in a `usize`.
    #[display(fmt = "group `{}` has too many combinations to enumerate", output)]
    TooManyCombinations { output: String },
}

impl ConfigError {
    /// The name of the field, identifier or output that the error concerns.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::EmptyRange { field } | Self::EmptyExplicit { field } | Self::DuplicateValue { field, .. } => field,
            Self::InvalidIdentifier { name } => name,
            Self::DuplicateField { output, .. }
            | Self::InvalidOutputName { output }
            | Self::DuplicateOutput { output }
            | Self::TooManyCombinations { output } => output,
        }
    }
}

impl Error for ConfigError {}

/// A failure to generate the artifact of a single group.
#[derive(Debug, From)]
pub enum GenerateError {
    /// The group or catalogue was declared incorrectly.
    Config(ConfigError),
    /// The artifact could not be created, written or read back.
    #[from(ignore)]
    Io { path: PathBuf, source: io::Error },
}

impl GenerateError {
    /// Attach the path of the artifact being processed to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(error) => write!(f, "configuration error: {}", error),
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(error) => Some(error),
            Self::Io { source, .. } => Some(source),
        }
    }
}
