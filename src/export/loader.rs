use std::future::Future;
use std::path::{Path, PathBuf};

use base64::Engine as _;

use crate::foundation::error::{ElfError, ElfResult};

/// Fetches raw image bytes for a raster asset location.
///
/// Loading is a suspension point of the export pipeline; implementations may do real IO.
pub trait ImageLoader {
    /// Bytes of the image at `source` (a catalog raster location). Failures should be
    /// [`ElfError::ImageLoad`].
    fn load(&self, source: &str) -> impl Future<Output = ElfResult<Vec<u8>>>;
}

/// Loads `data:` URLs inline and everything else from files under a root directory.
#[derive(Clone, Debug)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    /// Loader resolving relative locations against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageLoader for FsImageLoader {
    async fn load(&self, source: &str) -> ElfResult<Vec<u8>> {
        if source.starts_with("data:") {
            return decode_data_url(source);
        }
        let norm = normalize_rel_path(source)?;
        let path = self.root.join(Path::new(&norm));
        tracing::debug!(path = %path.display(), "reading image");
        std::fs::read(&path)
            .map_err(|e| ElfError::image_load(format!("read '{}': {e}", path.display())))
    }
}

/// Decode the payload of a `data:` URL. Base64 payloads are decoded, anything else is taken as
/// literal bytes.
pub fn decode_data_url(url: &str) -> ElfResult<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ElfError::image_load("not a data: URL"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ElfError::image_load("data: URL without payload"))?;

    if meta.ends_with(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ElfError::image_load(format!("invalid base64 in data: URL: {e}")))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

/// Normalize a loader-relative path.
///
/// The result uses `/` separators and has no `.` segments. Absolute paths and `..` are rejected.
pub(crate) fn normalize_rel_path(source: &str) -> ElfResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ElfError::image_load(format!(
            "image path '{source}' must be relative"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ElfError::image_load(format!(
                "image path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ElfError::image_load("image path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/export/loader.rs"]
mod tests;
