use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ElfError, ElfResult};

/// Selectable art categories.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Body type preset; also selects the torso fragment.
    Body,
    /// Hat drawn behind the torso.
    Hats,
    /// Hair drawn over the head.
    Hair,
    /// Glasses drawn over the head.
    Glasses,
    /// Ears drawn over the head.
    Ears,
    /// Anything else worn on the head.
    Accessories,
    /// Raster background, only used by export.
    Backgrounds,
}

impl AssetCategory {
    /// All categories, in paint order where it applies.
    pub const ALL: [AssetCategory; 7] = [
        AssetCategory::Body,
        AssetCategory::Hats,
        AssetCategory::Hair,
        AssetCategory::Glasses,
        AssetCategory::Ears,
        AssetCategory::Accessories,
        AssetCategory::Backgrounds,
    ];

    /// Key used in choice and catalog JSON; also the CSS class of the slot group.
    pub fn key(self) -> &'static str {
        match self {
            AssetCategory::Body => "body",
            AssetCategory::Hats => "hats",
            AssetCategory::Hair => "hair",
            AssetCategory::Glasses => "glasses",
            AssetCategory::Ears => "ears",
            AssetCategory::Accessories => "accessories",
            AssetCategory::Backgrounds => "backgrounds",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for AssetCategory {
    type Err = ElfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "hat" {
            return Ok(AssetCategory::Hats);
        }
        AssetCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ElfError::validation(format!("unknown asset category '{s}'")))
    }
}

/// Selected variant per category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CategoryChoice {
    /// Body type preset.
    pub body: String,
    /// Hat variant.
    #[serde(alias = "hat")]
    pub hats: String,
    /// Hair variant.
    pub hair: String,
    /// Glasses variant.
    pub glasses: String,
    /// Ears variant.
    pub ears: String,
    /// Accessories variant.
    pub accessories: String,
    /// Background variant.
    pub backgrounds: String,
}

impl Default for CategoryChoice {
    fn default() -> Self {
        Self {
            body: "standard".to_owned(),
            hats: "pointy".to_owned(),
            hair: "fringe".to_owned(),
            glasses: "none".to_owned(),
            ears: "pointy".to_owned(),
            accessories: "none".to_owned(),
            backgrounds: "snow".to_owned(),
        }
    }
}

impl CategoryChoice {
    /// Selected variant for `category`.
    pub fn get(&self, category: AssetCategory) -> &str {
        match category {
            AssetCategory::Body => &self.body,
            AssetCategory::Hats => &self.hats,
            AssetCategory::Hair => &self.hair,
            AssetCategory::Glasses => &self.glasses,
            AssetCategory::Ears => &self.ears,
            AssetCategory::Accessories => &self.accessories,
            AssetCategory::Backgrounds => &self.backgrounds,
        }
    }

    /// Replace the selected variant for `category`.
    pub fn set(&mut self, category: AssetCategory, variant: impl Into<String>) {
        let slot = match category {
            AssetCategory::Body => &mut self.body,
            AssetCategory::Hats => &mut self.hats,
            AssetCategory::Hair => &mut self.hair,
            AssetCategory::Glasses => &mut self.glasses,
            AssetCategory::Ears => &mut self.ears,
            AssetCategory::Accessories => &mut self.accessories,
            AssetCategory::Backgrounds => &mut self.backgrounds,
        };
        *slot = variant.into();
    }

    /// Parse a choice from JSON. Missing categories keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ElfResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ElfError::serde(format!("parse category choice JSON: {e}")))
    }

    /// Parse a choice from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ElfResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ElfError::validation(format!("open category choice '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Body proportions, both normalized to `0..=1`. Absent fields are `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BodyType {
    /// Drives leg and arm length.
    pub height: f64,
    /// Drives limb thickness.
    pub weight: f64,
}

/// What a catalog returns for a `(category, variant)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// SVG markup placed verbatim inside the slot group.
    Fragment(String),
    /// Location of a raster image, handed to an [`crate::ImageLoader`].
    Raster(String),
}

/// Source of art assets, body presets and layout constants.
pub trait AssetCatalog {
    /// Look up a variant. Unknown variants return [`ElfError::AssetResolution`].
    fn resolve(&self, category: AssetCategory, variant: &str) -> ElfResult<ResolvedAsset>;

    /// Body proportions for a body variant.
    fn body_type(&self, variant: &str) -> ElfResult<BodyType>;

    /// Nominal design resolution.
    fn layout(&self) -> Canvas;

    /// Style sheet shared by every character.
    fn base_style(&self) -> &str;

    /// Head markup, drawn under hair/glasses/ears/accessories.
    fn head_fragment(&self) -> &str;
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
