use std::fmt;
use std::path::PathBuf;

/// All fallible operations in the theme generator funnel through this type.
#[derive(Debug)]
pub enum ThemeError {
    Io(std::io::Error),
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    TomlDeserialize(toml::de::Error),
    EmptyName,
    UnsafeName(String),
    UnknownRole {
        palette: String,
        role: String,
    },
    InvalidColor {
        palette: String,
        role: String,
        value: String,
    },
    UnknownBasePalette {
        palette: String,
        base: String,
    },
    DuplicateVariant(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "IO error: {error}"),
            Self::Write { path, source } => {
                write!(formatter, "failed to write {}: {source}", path.display())
            }
            Self::Json(error) => write!(formatter, "JSON error: {error}"),
            Self::TomlDeserialize(error) => write!(formatter, "TOML parse error: {error}"),
            Self::EmptyName => write!(formatter, "palette name must not be empty"),
            Self::UnsafeName(name) => {
                write!(formatter, "palette name {name:?} cannot be used in a file name")
            }
            Self::UnknownRole { palette, role } => {
                write!(formatter, "unknown role {role} in palette {palette}")
            }
            Self::InvalidColor {
                palette,
                role,
                value,
            } => write!(
                formatter,
                "role {role} in palette {palette} is not a hex color: {value:?}"
            ),
            Self::UnknownBasePalette { palette, base } => {
                write!(formatter, "palette {palette} derives from unknown palette {base}")
            }
            Self::DuplicateVariant(file_name) => {
                write!(formatter, "more than one variant would be written to {file_name}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(error: toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}
