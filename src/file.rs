use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use subset_sums::subset::Weights;

use crate::config::Settings;
use crate::session::{self, SumReport};

/// Either `[3, 4]` or `{"weights": [3, 4]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WeightsFile {
    List(Vec<u64>),
    Object { weights: Vec<u64> },
}

pub fn load_weights(path: &Path) -> Result<Weights> {
    let file = File::open(path).with_context(|| format!("open file {}", path.display()))?;

    let values = match serde_json::from_reader(file).context("deserialize weights")? {
        WeightsFile::List(values) | WeightsFile::Object { weights: values } => values,
    };

    let w = Weights::new(values).with_context(|| format!("invalid weights in {}", path.display()))?;

    Ok(w)
}

/// Writes the reports kept by `settings` as a JSON array.
pub fn save_reports(reports: &[SumReport], path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create dir {}", dir.display()))?;
        }
    }

    let file = File::create(path).with_context(|| format!("create file {}", path.display()))?;

    let shown = session::shown(reports, settings);
    serde_json::to_writer_pretty(file, &shown).context("serialize to file")?;

    Ok(())
}
