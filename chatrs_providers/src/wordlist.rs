//! Labelled wordlist dataset loaded from a local file.

use chatrs_core::WordlistSource;
use rand::seq::SliceRandom;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct WordlistDataset {
    entries: Vec<String>,
}

impl WordlistDataset {
    /// Load entries from `path`.
    ///
    /// `.jsonl` files hold one object per line with a `text` field. Any other
    /// file is read as one entry per non-empty line.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;

        let is_jsonl = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

        let entries = if is_jsonl {
            Self::parse_jsonl(&content)?
        } else {
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string)
                .collect()
        };

        let dataset = Self::from_entries(entries)?;
        info!(
            "Loaded wordlist dataset from {} ({} entries)",
            path.display(),
            dataset.entries.len()
        );
        Ok(dataset)
    }

    pub fn from_entries(entries: Vec<String>) -> anyhow::Result<Self> {
        if entries.is_empty() {
            anyhow::bail!("Wordlist dataset is empty");
        }
        Ok(Self { entries })
    }

    fn parse_jsonl(content: &str) -> anyhow::Result<Vec<String>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                let row: serde_json::Value = serde_json::from_str(line)
                    .map_err(|e| anyhow::anyhow!("Line {}: {e}", i + 1))?;
                row["text"]
                    .as_str()
                    .map(ToString::to_string)
                    .ok_or_else(|| anyhow::anyhow!("Line {}: missing \"text\" field", i + 1))
            })
            .collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl WordlistSource for WordlistDataset {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn random_entry(&self) -> Option<String> {
        self.entries.choose(&mut rand::thread_rng()).cloned()
    }
}
