use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATEGORIES: [&str; 4] = ["System", "Info", "Games", "Fun"];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    apps: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogEntry {
    key: String,
    name: String,
    category: String,
    desktop_label: String,
    show_on_desktop: bool,
    pinned: bool,
    width: i32,
    height: i32,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.apps {
        if !seen.insert(entry.key.as_str()) {
            panic!("duplicate app `{}` in {}", entry.key, path.display());
        }
        if !CATEGORIES.contains(&entry.category.as_str()) {
            panic!(
                "app `{}` has unknown category `{}` (expected one of {CATEGORIES:?})",
                entry.key, entry.category
            );
        }
        if entry.width <= 0 || entry.height <= 0 {
            panic!("app `{}` has a non-positive window size", entry.key);
        }
    }

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON, in launcher order.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
