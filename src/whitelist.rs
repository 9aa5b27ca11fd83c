use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// The output document: a single `players` key, nothing else.
#[derive(Debug, Serialize)]
pub struct Whitelist {
    pub players: Vec<String>,
}

impl Whitelist {
    /// Deduplicate the combined name list; first occurrence wins, order kept.
    pub fn from_names<I>(names: I) -> Whitelist
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let players = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Whitelist { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Write as pretty JSON (2-space indent, umlauts left readable),
    /// creating missing parent directories first. Failure here is fatal to
    /// the run.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        let w = Whitelist::from_names(names(&["A", "B", "A", "C", "B"]));
        assert_eq!(w.players, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        let w = Whitelist::from_names(Vec::new());
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
    }

    #[test]
    fn save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("filter-whitelist.json");

        let w = Whitelist::from_names(names(&["Max Mustermann", "Jürgen Köhler"]));
        w.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(
            value["players"],
            serde_json::json!(["Max Mustermann", "Jürgen Köhler"])
        );
    }

    #[test]
    fn umlauts_are_written_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.json");

        Whitelist::from_names(names(&["Jürgen Köhler"])).save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Jürgen Köhler"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn save_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.json");

        Whitelist::from_names(names(&["Old Name"])).save(&path).unwrap();
        Whitelist::from_names(names(&["New Name"])).save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("New Name"));
        assert!(!text.contains("Old Name"));
    }
}
