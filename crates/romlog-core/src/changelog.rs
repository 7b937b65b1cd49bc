//! Changelog document model
//!
//! Changelog files are TOML with a `[site]` table and one `[[devices]]`
//! table per device section, each holding `[[devices.roms]]` cards:
//!
//! ```toml
//! [site]
//! title = "Build Changelogs"
//! base_url = "https://builds.example.net"
//!
//! [[devices]]
//! name = "Pixel 7"
//!
//! [[devices.roms]]
//! name = "crDroid 11"
//! author = "by somedev"
//! version = "11.2"
//! date = "2026-07-28"
//! notes = ["Merged August security patches"]
//! ```
//!
//! Ids are optional in the file; missing ones are derived from names so
//! every section and card has a stable share anchor.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Failure to load a changelog document
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid changelog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Site metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Title shown in the header when no section is active
    pub title: String,
    /// Base URL used for share links
    #[serde(default)]
    pub base_url: Option<String>,
}

/// One device section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Anchor id; derived from the name when missing
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roms: Vec<RomEntry>,
}

/// One ROM build card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomEntry {
    /// Anchor id; derived from the device and name when missing
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Author credit as written in the source, possibly prefixed with "by"
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Build date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    /// Changelog bullet lines
    #[serde(default)]
    pub notes: Vec<String>,
}

impl RomEntry {
    /// Parsed build date, if present and well-formed
    pub fn build_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }
}

/// A full changelog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    pub site: SiteInfo,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Changelog {
    /// Parse and normalize a TOML document
    pub fn parse(input: &str) -> Result<Self, ChangelogError> {
        let mut doc: Changelog = toml::from_str(input)?;
        doc.normalize();
        Ok(doc)
    }

    /// Load a changelog file
    pub fn load(path: &Path) -> Result<Self, ChangelogError> {
        let input = std::fs::read_to_string(path).map_err(|source| ChangelogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&input)
    }

    /// The built-in sample document (also printed by `romlog sample`)
    pub fn sample() -> Self {
        // The sample is part of the test suite, so the parse cannot fail
        // without a test failing first
        Self::parse(SAMPLE).unwrap_or_else(|_| Self {
            site: SiteInfo {
                title: "Build Changelogs".to_string(),
                base_url: None,
            },
            devices: Vec::new(),
        })
    }

    /// Fill missing ids, order each device's cards newest-first, and warn
    /// about anchors that collide
    fn normalize(&mut self) {
        let mut seen = HashSet::new();
        for device in &mut self.devices {
            if device.id.is_empty() {
                device.id = slugify(&device.name);
            }
            if !seen.insert(device.id.clone()) {
                warn!(id = %device.id, "duplicate device id");
            }
            for rom in &mut device.roms {
                if rom.id.is_empty() {
                    rom.id = format!("{}-{}", device.id, slugify(&rom.name));
                }
                if !seen.insert(rom.id.clone()) {
                    warn!(id = %rom.id, "duplicate rom id");
                }
            }
            // Undated cards keep their file order, after every dated one
            device.roms.sort_by(|a, b| b.build_date().cmp(&a.build_date()));
        }
        if self.devices.is_empty() {
            warn!("changelog has no device sections");
        }
    }
}

/// Lowercase ASCII anchor derived from a display name
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if matches!(ch, ' ' | '-' | '_' | '.') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Sample changelog shipped with the binary
pub const SAMPLE: &str = r#"[site]
title = "Build Changelogs"
base_url = "https://builds.example.net"

[[devices]]
name = "Pixel 7"

[[devices.roms]]
name = "crDroid 11"
author = "by somedev"
version = "11.2"
date = "2026-07-28"
notes = [
    "Merged August security patches",
    "Fixed fingerprint wake gesture",
    "Kernel bumped to 5.10.234",
]

[[devices.roms]]
name = "LineageOS 22"
author = "builderbot"
version = "22.1-20260715"
date = "2026-07-15"
notes = [
    "Initial official build",
    "Known issue: slow charging on some cables",
]

[[devices]]
name = "OnePlus 12"

[[devices.roms]]
name = "EvolutionX 10"
author = "By roamer"
version = "10.4"
date = "2026-07-21"
notes = [
    "July security update",
    "Reworked status bar tuner",
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_parses_and_normalizes() {
        let doc = Changelog::sample();
        assert_eq!(doc.site.title, "Build Changelogs");
        assert_eq!(doc.devices.len(), 2);

        let pixel = &doc.devices[0];
        assert_eq!(pixel.id, "pixel-7");
        assert_eq!(pixel.roms[0].id, "pixel-7-crdroid-11");
    }

    #[test]
    fn test_cards_ordered_newest_first() {
        let doc = Changelog::sample();
        let dates: Vec<_> = doc.devices[0]
            .roms
            .iter()
            .map(|rom| rom.build_date())
            .collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_explicit_ids_are_kept() {
        let doc = Changelog::parse(
            r#"
            [site]
            title = "T"

            [[devices]]
            id = "custom"
            name = "Pixel 7"
            "#,
        )
        .unwrap();
        assert_eq!(doc.devices[0].id, "custom");
    }

    #[test]
    fn test_malformed_date_yields_none() {
        let rom = RomEntry {
            id: String::new(),
            name: "x".to_string(),
            author: None,
            version: None,
            date: Some("28-07-2026".to_string()),
            notes: Vec::new(),
        };
        assert!(rom.build_date().is_none());
    }

    #[test]
    fn test_empty_document_is_not_an_error() {
        let doc = Changelog::parse("[site]\ntitle = \"T\"\n").unwrap();
        assert!(doc.devices.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = Changelog::parse("not toml at all [").unwrap_err();
        assert!(matches!(err, ChangelogError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let doc = Changelog::load(file.path()).unwrap();
        assert_eq!(doc.devices.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Changelog::load(Path::new("/nonexistent/changelog.toml")).unwrap_err();
        assert!(matches!(err, ChangelogError::Io { .. }));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Pixel 7"), "pixel-7");
        assert_eq!(slugify("  crDroid 11.2 "), "crdroid-11-2");
        assert_eq!(slugify("A__B"), "a-b");
    }
}
