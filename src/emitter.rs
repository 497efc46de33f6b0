use std::collections::HashSet;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::palette::{Palette, UiTheme};
use crate::theme::assemble;

const FILE_SUFFIX: &str = "-color-theme.json";

/// One `contributes.themes` entry for the extension manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub label: String,
    pub ui_theme: UiTheme,
    pub path: String,
}

/// Lowercases a display name and collapses each whitespace run into `-`.
pub fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn file_name(palette: &Palette, italic: bool) -> String {
    let italic = if italic { "-italic" } else { "" };
    format!("{}{italic}{FILE_SUFFIX}", slug(&palette.name))
}

/// Writes a regular and an italic theme file for every palette.
///
/// Nothing is written unless every palette validates and every variant maps to its own
/// file. Existing files are overwritten.
pub fn generate_all(
    palettes: &[Palette],
    output_dir: &Path,
) -> Result<Vec<ManifestEntry>, ThemeError> {
    for palette in palettes {
        palette.validate()?;
    }

    let mut seen = HashSet::new();
    for palette in palettes {
        for italic in [false, true] {
            let file = file_name(palette, italic);
            if !seen.insert(file.clone()) {
                return Err(ThemeError::DuplicateVariant(file));
            }
        }
    }

    std::fs::create_dir_all(output_dir)?;
    let manifest_dir = manifest_dir(output_dir);

    let mut entries = Vec::with_capacity(palettes.len() * 2);
    for palette in palettes {
        for italic in [false, true] {
            let document = assemble(palette, italic);
            let file = file_name(palette, italic);
            let path = output_dir.join(&file);

            let json = serde_json::to_string_pretty(&document)?;
            std::fs::write(&path, json).map_err(|source| ThemeError::Write {
                path: path.clone(),
                source,
            })?;
            println!("Generated: {file}");
            log::debug!(
                "Wrote {} ({} token rules, {} workbench colors)",
                path.display(),
                document.token_colors.len(),
                document.colors.len()
            );

            entries.push(ManifestEntry {
                label: document.name,
                ui_theme: palette.ui_theme,
                path: format!("{manifest_dir}/{file}"),
            });
        }
    }

    Ok(entries)
}

/// Renders the output directory the way extension manifests reference files.
fn manifest_dir(output_dir: &Path) -> String {
    if output_dir.is_absolute() {
        let rendered = output_dir.display().to_string();
        return rendered.trim_end_matches('/').to_string();
    }

    let parts: Vec<String> = output_dir
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        format!("./{}", parts.join("/"))
    }
}

pub fn manifest_text(entries: &[ManifestEntry]) -> Result<String, ThemeError> {
    let json = serde_json::to_string_pretty(entries)?;
    Ok(format!(
        "\nAll themes generated. Update package.json contributes.themes with:\n{json}"
    ))
}

pub fn print_manifest(entries: &[ManifestEntry]) -> Result<(), ThemeError> {
    println!("{}", manifest_text(entries)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{builtin_palettes, dark, PaletteOverrides};
    use crate::theme::ThemeDocument;
    use tempfile::TempDir;

    #[test]
    fn slug_lowercases_and_joins_words() {
        assert_eq!(slug("digitaliss"), "digitaliss");
        assert_eq!(slug("digitaliss Pastel"), "digitaliss-pastel");
        assert_eq!(slug("  My   Night\tTheme "), "my-night-theme");
    }

    #[test]
    fn builtin_palettes_produce_six_named_files() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("themes");
        generate_all(&builtin_palettes(), &output).unwrap();

        let mut files: Vec<String> = std::fs::read_dir(&output)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        assert_eq!(
            files,
            [
                "digitaliss-color-theme.json",
                "digitaliss-italic-color-theme.json",
                "digitaliss-light-color-theme.json",
                "digitaliss-light-italic-color-theme.json",
                "digitaliss-pastel-color-theme.json",
                "digitaliss-pastel-italic-color-theme.json",
            ]
        );
    }

    #[test]
    fn manifest_lists_variants_in_generation_order() {
        let temp = TempDir::new().unwrap();
        let entries = generate_all(&builtin_palettes(), &temp.path().join("themes")).unwrap();

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "digitaliss",
                "digitaliss Italic",
                "digitaliss Pastel",
                "digitaliss Pastel Italic",
                "digitaliss Light",
                "digitaliss Light Italic",
            ]
        );
        assert_eq!(entries[0].ui_theme, UiTheme::VsDark);
        assert_eq!(entries[3].ui_theme, UiTheme::VsDark);
        assert_eq!(entries[5].ui_theme, UiTheme::Vs);
        assert!(entries[1]
            .path
            .ends_with("/themes/digitaliss-italic-color-theme.json"));
    }

    #[test]
    fn relative_output_dir_is_rendered_with_dot_prefix() {
        assert_eq!(manifest_dir(Path::new("themes")), "./themes");
        assert_eq!(manifest_dir(Path::new("./out/themes")), "./out/themes");
        assert_eq!(manifest_dir(Path::new(".")), ".");
    }

    #[test]
    fn written_file_is_the_assembled_document() {
        let temp = TempDir::new().unwrap();
        let palette = dark();
        generate_all(std::slice::from_ref(&palette), temp.path()).unwrap();

        let path = temp.path().join("digitaliss-italic-color-theme.json");
        let contents = std::fs::read_to_string(path).unwrap();
        let parsed: ThemeDocument = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, assemble(&palette, true));
        assert!(contents.starts_with("{\n  \"name\": \"digitaliss Italic\",\n  \"type\": \"dark\","));
    }

    #[test]
    fn rerunning_overwrites_with_identical_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("digitaliss-color-theme.json");
        std::fs::write(&path, "stale").unwrap();

        generate_all(&[dark()], temp.path()).unwrap();
        let first = std::fs::read(&path).unwrap();
        generate_all(&[dark()], temp.path()).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_ne!(first, b"stale");
        assert_eq!(first, second);
    }

    #[test]
    fn colliding_file_names_fail_before_writing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("themes");
        let twin = dark()
            .derive(&PaletteOverrides {
                name: "Digitaliss".to_string(),
                ..PaletteOverrides::default()
            })
            .unwrap();

        let error = generate_all(&[dark(), twin], &output).unwrap_err();
        assert!(matches!(
            error,
            ThemeError::DuplicateVariant(ref file) if file == "digitaliss-color-theme.json"
        ));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_palette_fails_before_writing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("themes");
        let mut broken = dark();
        broken.name = "broken".to_string();
        broken.cyan = "cyan".to_string();

        let error = generate_all(&[dark(), broken], &output).unwrap_err();
        assert!(matches!(error, ThemeError::InvalidColor { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn names_leaving_the_output_dir_fail_before_writing() {
        for name in ["../escaped", "a/b"] {
            let temp = TempDir::new().unwrap();
            let output = temp.path().join("themes");
            let escaping = dark()
                .derive(&PaletteOverrides {
                    name: name.to_string(),
                    ..PaletteOverrides::default()
                })
                .unwrap();

            let error = generate_all(&[dark(), escaping], &output).unwrap_err();
            assert!(matches!(error, ThemeError::UnsafeName(_)), "{name}");
            assert!(!output.exists());
            assert!(!temp.path().join("escaped-color-theme.json").exists());
        }
    }

    #[test]
    fn manifest_text_is_a_json_array_after_the_banner() {
        let entries = vec![ManifestEntry {
            label: "digitaliss".to_string(),
            ui_theme: UiTheme::VsDark,
            path: "./themes/digitaliss-color-theme.json".to_string(),
        }];
        let text = manifest_text(&entries).unwrap();
        assert_eq!(
            text,
            "\nAll themes generated. Update package.json contributes.themes with:\n[\n  {\n    \"label\": \"digitaliss\",\n    \"uiTheme\": \"vs-dark\",\n    \"path\": \"./themes/digitaliss-color-theme.json\"\n  }\n]"
        );
    }
}
