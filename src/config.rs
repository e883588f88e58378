//! Scene files.
//!
//! A scene is one row or column container and its children, stored as JSON:
//!
//! ```json
//! {
//!   "orientation": "hbox",
//!   "width": 400,
//!   "height": 100,
//!   "align": "middle",
//!   "padding": "10 0 20 0",
//!   "items": [
//!     { "label": "nav", "width": 120, "minWidth": 80 },
//!     { "label": "body", "flex": 1, "margins": "0 5" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{BoxChild, BoxLayout, BoxLayoutOutput};
use crate::types::{Align, Edges, Orientation, Pack, Px};

/// Errors raised while loading a scene.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Invalid(String),
}

/// A container and its children.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scene {
    #[serde(default)]
    pub orientation: Orientation,
    pub width: Px,
    pub height: Px,
    #[serde(default)]
    pub pack: Pack,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub padding: Edges,
    #[serde(default)]
    pub items: Vec<SceneItem>,
}

/// One child in a scene file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneItem {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub width: Option<Px>,
    #[serde(default)]
    pub height: Option<Px>,
    #[serde(default)]
    pub measured_width: Px,
    #[serde(default)]
    pub measured_height: Px,
    #[serde(default)]
    pub flex: Option<f64>,
    #[serde(default)]
    pub min_width: Option<Px>,
    #[serde(default)]
    pub min_height: Option<Px>,
    #[serde(default)]
    pub max_width: Option<Px>,
    #[serde(default)]
    pub max_height: Option<Px>,
    #[serde(default)]
    pub margins: Edges,
}

impl Scene {
    /// Parse and validate a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let scene: Scene = serde_json::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded scene file");
        Self::from_json(&text)
    }

    /// The engine tolerates anything; scene files are held to a stricter bar
    /// so typos surface instead of collapsing boxes.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 0 || self.height < 0 {
            return Err(ConfigError::Invalid(format!(
                "container size {}x{} is negative",
                self.width, self.height
            )));
        }
        if self.padding.has_negative() {
            return Err(ConfigError::Invalid(format!(
                "container padding `{}` is negative",
                String::from(self.padding)
            )));
        }

        for (i, item) in self.items.iter().enumerate() {
            if let Some(flex) = item.flex {
                if !(flex.is_finite() && flex >= 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "item {} ({}) has flex {flex}",
                        i,
                        item.display_label(i)
                    )));
                }
            }
            let lengths = [
                item.width,
                item.height,
                Some(item.measured_width),
                Some(item.measured_height),
                item.min_width,
                item.min_height,
                item.max_width,
                item.max_height,
            ];
            if lengths.iter().flatten().any(|v| *v < 0) || item.margins.has_negative() {
                return Err(ConfigError::Invalid(format!(
                    "item {} ({}) has a negative length",
                    i,
                    item.display_label(i)
                )));
            }
        }

        Ok(())
    }

    pub fn box_layout(&self) -> BoxLayout {
        BoxLayout {
            orientation: self.orientation,
            pack: self.pack,
            align: self.align,
            padding: self.padding,
        }
    }

    pub fn children(&self) -> Vec<BoxChild> {
        self.items.iter().map(SceneItem::to_child).collect()
    }

    /// Item labels, falling back to the item's position.
    pub fn labels(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| item.display_label(i))
            .collect()
    }

    /// Run the scene through the layout engine.
    pub fn layout(&self) -> BoxLayoutOutput {
        self.box_layout()
            .layout(self.width, self.height, &self.children())
    }
}

impl SceneItem {
    pub fn to_child(&self) -> BoxChild {
        BoxChild {
            width: self.width,
            height: self.height,
            measured_width: self.measured_width,
            measured_height: self.measured_height,
            flex: self.flex,
            min_width: self.min_width,
            min_height: self.min_height,
            max_width: self.max_width,
            max_height: self.max_height,
            margins: self.margins,
        }
    }

    fn display_label(&self, index: usize) -> String {
        self.label.clone().unwrap_or_else(|| format!("#{index}"))
    }
}
