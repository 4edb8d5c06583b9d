use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[path = "src/hex.rs"]
mod hex;

use hex::is_hex_color;

const SCHEMA_VERSION: u32 = 1;
const CUSTOM_STYLE: &str = "custom";
const SURPRISE_ME: &str = "surprise-me";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OptionEntry {
    label: String,
    prompt: String,
    icon: String,
}

#[derive(Debug, Clone, Deserialize)]
struct OptionManifest {
    schema_version: u32,
    #[serde(default)]
    option: Vec<OptionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteEntry {
    name: String,
    #[serde(alias = "prompt_value")]
    prompt_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
struct PaletteManifest {
    schema_version: u32,
    #[serde(default)]
    palette: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelEntry {
    name: String,
    id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ModelManifest {
    schema_version: u32,
    #[serde(default)]
    model: Vec<ModelEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    room_types: Vec<OptionEntry>,
    building_types: Vec<OptionEntry>,
    interior_styles: Vec<OptionEntry>,
    exterior_styles: Vec<OptionEntry>,
    color_palettes: Vec<PaletteEntry>,
    ai_models: Vec<ModelEntry>,
}

fn read_manifest<T: for<'de> Deserialize<'de>>(root: &Path, name: &str) -> (PathBuf, T) {
    let path = root.join("catalog").join(name);
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    (path, manifest)
}

fn check_schema(path: &Path, found: u32) {
    if found != SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {}: expected {SCHEMA_VERSION} found {found}",
            path.display()
        );
    }
}

fn check_unique<'a>(path: &Path, field: &str, values: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for value in values {
        if value.trim().is_empty() {
            panic!("empty {field} in {}", path.display());
        }
        if !seen.insert(value) {
            panic!("duplicate {field} `{value}` in {}", path.display());
        }
    }
}

fn option_table(root: &Path, name: &str, allows_custom: bool) -> Vec<OptionEntry> {
    let (path, manifest): (PathBuf, OptionManifest) = read_manifest(root, name);
    check_schema(&path, manifest.schema_version);
    check_unique(&path, "label", manifest.option.iter().map(|e| e.label.as_str()));
    check_unique(&path, "prompt", manifest.option.iter().map(|e| e.prompt.as_str()));
    for entry in &manifest.option {
        if entry.prompt == CUSTOM_STYLE && !allows_custom {
            panic!(
                "`{CUSTOM_STYLE}` sentinel is only valid in style tables ({})",
                path.display()
            );
        }
        if entry.icon.trim().is_empty() {
            panic!("`{}` has no icon in {}", entry.label, path.display());
        }
    }
    manifest.option
}

fn palette_table(root: &Path) -> Vec<PaletteEntry> {
    let (path, manifest): (PathBuf, PaletteManifest) = read_manifest(root, "color_palettes.toml");
    check_schema(&path, manifest.schema_version);
    check_unique(&path, "name", manifest.palette.iter().map(|e| e.name.as_str()));
    check_unique(
        &path,
        "prompt_value",
        manifest.palette.iter().map(|e| e.prompt_value.as_str()),
    );
    for entry in &manifest.palette {
        match (entry.prompt_value == SURPRISE_ME, entry.colors.as_deref()) {
            (true, Some(_)) => panic!(
                "`{SURPRISE_ME}` palette must not declare colors in {}",
                path.display()
            ),
            (false, None) | (false, Some([])) => {
                panic!("palette `{}` has no colors in {}", entry.name, path.display())
            }
            (false, Some(colors)) => {
                if let Some(bad) = colors.iter().find(|color| !is_hex_color(color)) {
                    panic!(
                        "palette `{}` has invalid color `{bad}` in {}",
                        entry.name,
                        path.display()
                    );
                }
            }
            (true, None) => {}
        }
    }
    manifest.palette
}

fn model_table(root: &Path) -> Vec<ModelEntry> {
    let (path, manifest): (PathBuf, ModelManifest) = read_manifest(root, "ai_models.toml");
    check_schema(&path, manifest.schema_version);
    check_unique(&path, "name", manifest.model.iter().map(|e| e.name.as_str()));
    check_unique(&path, "id", manifest.model.iter().map(|e| e.id.as_str()));
    manifest.model
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    println!("cargo:rerun-if-changed=src/hex.rs");

    let document = CatalogDocument {
        room_types: option_table(&crate_root, "room_types.toml", false),
        building_types: option_table(&crate_root, "building_types.toml", false),
        interior_styles: option_table(&crate_root, "interior_styles.toml", true),
        exterior_styles: option_table(&crate_root, "exterior_styles.toml", true),
        color_palettes: palette_table(&crate_root),
        ai_models: model_table(&crate_root),
    };

    let json = serde_json::to_string_pretty(&document).expect("serialize option catalog");
    let generated = format!(
        "/// Build-time generated option catalog JSON.\n\
pub const CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
