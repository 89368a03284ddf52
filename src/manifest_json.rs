//! Icon entries of a Chrome extension `manifest.json`
//!
//! The generated files are meant to be referenced from the extension's
//! manifest, both as the extension icons and as the toolbar action icon.
//! This module builds that fragment so it can be pasted into `manifest.json`.

use crate::icon_gen::icon_file_name;
use anyhow::{Context, Result};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// The `icons` and `action` parts of a `manifest.json`
#[derive(Serialize, Debug, Clone)]
pub struct IconManifest {
    /// Extension icons keyed by pixel size
    pub icons: IconSet,

    /// Toolbar action, which reuses the same icon set
    pub action: Action,
}

#[derive(Serialize, Debug, Clone)]
pub struct Action {
    pub default_icon: IconSet,
}

/// Size to path mapping, serialized as a JSON object in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet(Vec<(u32, String)>);

impl IconSet {
    /// Builds the set for `sizes`, each path being `prefix` followed by the file name
    pub fn new(sizes: &[u32], prefix: &str) -> Self {
        Self(
            sizes
                .iter()
                .map(|&size| (size, format!("{prefix}{}", icon_file_name(size))))
                .collect(),
        )
    }

    pub fn get(&self, size: u32) -> Option<&str> {
        self.0
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, path)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for IconSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (size, path) in &self.0 {
            map.serialize_entry(&size.to_string(), path)?;
        }
        map.end()
    }
}

impl IconManifest {
    pub fn for_sizes(sizes: &[u32], prefix: &str) -> Self {
        let icons = IconSet::new(sizes, prefix);
        Self {
            action: Action {
                default_icon: icons.clone(),
            },
            icons,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest icons")
    }
}
