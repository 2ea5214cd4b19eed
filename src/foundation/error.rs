use crate::catalog::model::AssetCategory;

/// Result alias used across the crate.
pub type ElfResult<T> = Result<T, ElfError>;

/// Error type for catalog, scene and export operations.
///
/// Geometry and animation never fail: out-of-range numeric input is sanitized instead.
#[derive(thiserror::Error, Debug)]
pub enum ElfError {
    /// Invalid configuration or caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The catalog has no entry for the requested variant.
    #[error("asset not found: {category}/{variant}")]
    AssetResolution {
        /// Category that was queried.
        category: AssetCategory,
        /// Variant identifier that was not found.
        variant: String,
    },

    /// A raster image (background or rasterized scene) failed to load or decode.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Raster surface allocation or encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ElfError {
    /// Build an [`ElfError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ElfError::AssetResolution`].
    pub fn asset_not_found(category: AssetCategory, variant: impl Into<String>) -> Self {
        Self::AssetResolution {
            category,
            variant: variant.into(),
        }
    }

    /// Build an [`ElfError::ImageLoad`].
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build an [`ElfError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`ElfError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
