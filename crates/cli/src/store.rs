use anyhow::{Context, Result};
use ndollar::library::strokes_from_json;
use ndollar::{parse_templates, Recognizer, RecognizerCfg, Stroke, StrokeSet};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Tuning from a JSON file (missing fields take defaults), or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<RecognizerCfg> {
    let Some(path) = path else {
        return Ok(RecognizerCfg::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: RecognizerCfg = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validating config {}", path.display()))?;
    Ok(cfg)
}

/// Recognizer with every gesture of the library file learned; empty when the file is absent.
pub fn load_library(path: &Path, cfg: RecognizerCfg) -> Result<Recognizer> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "library file absent, starting empty");
        return Ok(Recognizer::new(cfg)?);
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("reading library {}", path.display()))?;
    let templates =
        parse_templates(&text).with_context(|| format!("parsing library {}", path.display()))?;
    let rec = Recognizer::from_templates(cfg, templates)
        .with_context(|| format!("learning gestures from {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        gestures = rec.library().len(),
        templates = rec.library().template_count(),
        "library loaded"
    );
    Ok(rec)
}

/// Write the library as a JSON object of name → strokes, creating parent dirs.
pub fn save_library(path: &Path, rec: &Recognizer) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating library dir {}", parent.display()))?;
        }
    }
    let doc: BTreeMap<&str, &[Stroke]> = rec
        .library()
        .iter()
        .map(|g| (g.name(), g.strokes()))
        .collect();
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Strokes from a JSON file: an array of strokes, each an array of `[x, y]`.
pub fn load_strokes(path: &Path) -> Result<StrokeSet> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading strokes {}", path.display()))?;
    let strokes =
        strokes_from_json(&text).with_context(|| format!("parsing strokes {}", path.display()))?;
    Ok(strokes)
}
