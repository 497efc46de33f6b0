use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emitter::slug;
use crate::error::ThemeError;
use crate::palette::{builtin_palettes, Palette, PaletteOverrides};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DIGITALISS_CONFIG";

/// Config file picked up from the working directory when the variable is unset.
pub const CONFIG_FILE: &str = "digitaliss.toml";

/// Build settings, read from `digitaliss.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Emit the shipped palettes alongside any configured ones.
    #[serde(default = "default_builtin_palettes")]
    pub builtin_palettes: bool,
    #[serde(default, rename = "palette")]
    pub palettes: Vec<PaletteDefinition>,
}

/// A palette derived from a built-in or earlier configured palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteDefinition {
    /// Name or file slug of the palette to start from.
    pub base: String,
    #[serde(flatten)]
    pub overrides: PaletteOverrides,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("themes")
}

fn default_builtin_palettes() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            builtin_palettes: default_builtin_palettes(),
            palettes: Vec::new(),
        }
    }
}

impl BuildConfig {
    /// Resolves the palettes to emit, in generation order.
    ///
    /// Configured palettes are derived in file order, so a definition may build on any
    /// built-in palette or on one defined above it.
    pub fn palettes(&self) -> Result<Vec<Palette>, ThemeError> {
        let mut known = builtin_palettes();
        let mut emitted = if self.builtin_palettes {
            known.clone()
        } else {
            Vec::new()
        };

        for definition in &self.palettes {
            let base = find_palette(&known, &definition.base).ok_or_else(|| {
                ThemeError::UnknownBasePalette {
                    palette: definition.overrides.name.clone(),
                    base: definition.base.clone(),
                }
            })?;
            let derived = base.derive(&definition.overrides)?;
            known.push(derived.clone());
            emitted.push(derived);
        }

        Ok(emitted)
    }
}

fn find_palette<'a>(palettes: &'a [Palette], key: &str) -> Option<&'a Palette> {
    let wanted = slug(key);
    palettes
        .iter()
        .rev()
        .find(|palette| palette.name == key || slug(&palette.name) == wanted)
}

/// Loads the build config, returning defaults if no config file exists.
///
/// `$DIGITALISS_CONFIG` wins when set and must point at a readable file; otherwise
/// `./digitaliss.toml` is used if present.
pub fn load_build_config() -> Result<BuildConfig, ThemeError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return load_from(Path::new(&path));
    }

    let local = Path::new(CONFIG_FILE);
    if local.exists() {
        return load_from(local);
    }

    log::debug!("No {CONFIG_FILE} found, using defaults");
    Ok(BuildConfig::default())
}

/// Parses a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<BuildConfig, ThemeError> {
    let contents = std::fs::read_to_string(path)?;
    let config: BuildConfig = toml::from_str(&contents)?;
    log::debug!(
        "Loaded build config from {} ({} extra palettes)",
        path.display(),
        config.palettes.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ThemeKind, UiTheme};
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_config_emits_builtin_palettes_into_themes() {
        let config = BuildConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("themes"));
        assert_eq!(config.palettes().unwrap(), builtin_palettes());
    }

    #[test]
    fn empty_file_means_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");
        assert_eq!(load_from(&path).unwrap(), BuildConfig::default());
    }

    #[test]
    fn configured_palettes_follow_builtins() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r##"
output_dir = "out/themes"

[[palette]]
base = "digitaliss"
name = "digitaliss Midnight"

[palette.colors]
editorBg = "#0d0c14"

[[palette]]
base = "digitaliss-midnight"
name = "digitaliss Paper"
type = "light"
"##,
        );

        let config = load_from(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out/themes"));

        let palettes = config.palettes().unwrap();
        let names: Vec<&str> = palettes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "digitaliss",
                "digitaliss Pastel",
                "digitaliss Light",
                "digitaliss Midnight",
                "digitaliss Paper",
            ]
        );
        assert_eq!(palettes[3].editor_bg, "#0d0c14");
        assert_eq!(palettes[4].editor_bg, "#0d0c14");
        assert_eq!(palettes[4].kind, ThemeKind::Light);
        assert_eq!(palettes[4].ui_theme, UiTheme::Vs);
    }

    #[test]
    fn builtins_can_be_left_out() {
        let config: BuildConfig = toml::from_str(
            r#"
builtin_palettes = false

[[palette]]
base = "digitaliss Pastel"
name = "soft"
"#,
        )
        .unwrap();

        let palettes = config.palettes().unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].pink, crate::palette::pastel().pink);
    }

    #[test]
    fn unknown_base_is_an_error() {
        let config: BuildConfig = toml::from_str(
            r#"
[[palette]]
base = "solarized"
name = "nope"
"#,
        )
        .unwrap();

        let error = config.palettes().unwrap_err();
        assert_eq!(
            error.to_string(),
            "palette nope derives from unknown palette solarized"
        );
    }

    #[test]
    fn malformed_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "output_dir = [");
        assert!(matches!(
            load_from(&path),
            Err(ThemeError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let result = load_from(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ThemeError::Io(_))));
    }
}
