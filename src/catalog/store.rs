use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::builtin;
use crate::catalog::model::{AssetCatalog, AssetCategory, BodyType, ResolvedAsset};
use crate::foundation::core::Canvas;
use crate::foundation::error::{ElfError, ElfResult};

/// JSON-backed asset catalog.
///
/// Every field is optional in JSON; missing maps are empty and the layout defaults to 400x560.
/// Variant maps hold SVG markup, except `backgrounds`, which holds image locations (relative
/// paths or `data:` URLs) for the export loader.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Nominal design width.
    pub width: u32,
    /// Nominal design height.
    pub height: u32,
    /// Shared CSS.
    pub base_style: String,
    /// Torso markup, used for every body variant.
    pub body: String,
    /// Head markup.
    pub head: String,
    /// Body presets keyed by body variant.
    pub body_types: BTreeMap<String, BodyType>,
    /// Hat markup by variant.
    pub hats: BTreeMap<String, String>,
    /// Hair markup by variant.
    pub hair: BTreeMap<String, String>,
    /// Glasses markup by variant.
    pub glasses: BTreeMap<String, String>,
    /// Ear markup by variant.
    pub ears: BTreeMap<String, String>,
    /// Accessory markup by variant.
    pub accessories: BTreeMap<String, String>,
    /// Background image locations by variant.
    pub backgrounds: BTreeMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            width: builtin::WIDTH,
            height: builtin::HEIGHT,
            base_style: String::new(),
            body: String::new(),
            head: String::new(),
            body_types: BTreeMap::new(),
            hats: BTreeMap::new(),
            hair: BTreeMap::new(),
            glasses: BTreeMap::new(),
            ears: BTreeMap::new(),
            accessories: BTreeMap::new(),
            backgrounds: BTreeMap::new(),
        }
    }
}

impl Catalog {
    /// The bundled catalog. Covers every variant named by [`crate::CategoryChoice::default`].
    pub fn builtin() -> Self {
        fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
            entries
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect()
        }

        Self {
            width: builtin::WIDTH,
            height: builtin::HEIGHT,
            base_style: builtin::BASE_STYLE.to_owned(),
            body: builtin::BODY.to_owned(),
            head: builtin::HEAD.to_owned(),
            body_types: builtin::BODY_TYPES
                .iter()
                .map(|&(name, height, weight)| (name.to_owned(), BodyType { height, weight }))
                .collect(),
            hats: table(builtin::HATS),
            hair: table(builtin::HAIR),
            glasses: table(builtin::GLASSES),
            ears: table(builtin::EARS),
            accessories: table(builtin::ACCESSORIES),
            backgrounds: table(builtin::BACKGROUNDS),
        }
    }

    /// Parse a catalog from JSON.
    #[tracing::instrument(skip_all)]
    pub fn from_reader<R: std::io::Read>(r: R) -> ElfResult<Self> {
        let catalog: Catalog = serde_json::from_reader(r)
            .map_err(|e| ElfError::serde(format!("parse catalog JSON: {e}")))?;
        catalog.validate()?;
        tracing::debug!(
            body_types = catalog.body_types.len(),
            hats = catalog.hats.len(),
            backgrounds = catalog.backgrounds.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ElfResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ElfError::validation(format!("open catalog JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check layout constants and body presets.
    pub fn validate(&self) -> ElfResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ElfError::validation("catalog width/height must be > 0"));
        }
        for (name, bt) in &self.body_types {
            if !bt.height.is_finite() || !bt.weight.is_finite() {
                return Err(ElfError::validation(format!(
                    "body type '{name}' has non-finite proportions"
                )));
            }
            if bt.height < 0.0 || bt.weight < 0.0 {
                return Err(ElfError::validation(format!(
                    "body type '{name}' has negative proportions"
                )));
            }
        }
        Ok(())
    }

    /// Variant names available for `category`, sorted.
    pub fn variants(&self, category: AssetCategory) -> Vec<&str> {
        match category {
            AssetCategory::Body => self.body_types.keys().map(String::as_str).collect(),
            other => self
                .markup_table(other)
                .map(|t| t.keys().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    fn markup_table(&self, category: AssetCategory) -> Option<&BTreeMap<String, String>> {
        match category {
            AssetCategory::Body => None,
            AssetCategory::Hats => Some(&self.hats),
            AssetCategory::Hair => Some(&self.hair),
            AssetCategory::Glasses => Some(&self.glasses),
            AssetCategory::Ears => Some(&self.ears),
            AssetCategory::Accessories => Some(&self.accessories),
            AssetCategory::Backgrounds => Some(&self.backgrounds),
        }
    }
}

impl AssetCatalog for Catalog {
    fn resolve(&self, category: AssetCategory, variant: &str) -> ElfResult<ResolvedAsset> {
        let not_found = || ElfError::asset_not_found(category, variant);
        match category {
            AssetCategory::Body => {
                if self.body_types.contains_key(variant) {
                    Ok(ResolvedAsset::Fragment(self.body.clone()))
                } else {
                    Err(not_found())
                }
            }
            AssetCategory::Backgrounds => self
                .backgrounds
                .get(variant)
                .map(|src| ResolvedAsset::Raster(src.clone()))
                .ok_or_else(not_found),
            other => self
                .markup_table(other)
                .and_then(|t| t.get(variant))
                .map(|markup| ResolvedAsset::Fragment(markup.clone()))
                .ok_or_else(not_found),
        }
    }

    fn body_type(&self, variant: &str) -> ElfResult<BodyType> {
        self.body_types
            .get(variant)
            .copied()
            .ok_or_else(|| ElfError::asset_not_found(AssetCategory::Body, variant))
    }

    fn layout(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    fn base_style(&self) -> &str {
        &self.base_style
    }

    fn head_fragment(&self) -> &str {
        &self.head
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/store.rs"]
mod tests;
