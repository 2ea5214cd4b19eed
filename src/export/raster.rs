//! Flattens a static snapshot of the character over its background into one PNG.

use std::sync::Arc;

use base64::Engine as _;
use resvg::tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::animation::pose::Pose;
use crate::catalog::model::{AssetCatalog, AssetCategory, CategoryChoice, ResolvedAsset};
use crate::catalog::scope::IdScope;
use crate::export::decode::{decode_image, encode_png, parse_svg, rasterize_svg};
use crate::export::loader::ImageLoader;
use crate::foundation::error::{ElfError, ElfResult};
use crate::scene::composer::{RenderMode, SceneInput, compose_scene};

/// Export knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportOpts {
    /// Output size relative to the catalog layout.
    pub resolution_scale: f64,
    /// Background magnification; the centered crop of the source fills the canvas.
    pub background_zoom: f64,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            resolution_scale: 2.0,
            background_zoom: 1.2,
        }
    }
}

impl ExportOpts {
    /// Reject non-finite or non-positive factors.
    pub fn validate(&self) -> ElfResult<()> {
        if !(self.resolution_scale.is_finite() && self.resolution_scale > 0.0) {
            return Err(ElfError::validation("resolution_scale must be finite and > 0"));
        }
        if !(self.background_zoom.is_finite() && self.background_zoom > 0.0) {
            return Err(ElfError::validation("background_zoom must be finite and > 0"));
        }
        Ok(())
    }
}

/// Encoded export result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// `data:image/png;base64,...` form, embeddable anywhere an image URL is accepted.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

/// Everything one export needs, owned, so it can outlive (or leave the thread of) the character
/// it was taken from.
#[derive(Clone)]
pub struct ExportJob {
    /// Art and layout source.
    pub catalog: Arc<dyn AssetCatalog + Send + Sync>,
    /// Selected art at snapshot time.
    pub choice: CategoryChoice,
    /// Pose at snapshot time.
    pub pose: Pose,
    /// Whether a dance was running at snapshot time.
    pub dancing: bool,
    /// Style namespace.
    pub scope: IdScope,
    /// Caller CSS.
    pub extra_style: String,
    /// Export knobs.
    pub opts: ExportOpts,
}

impl std::fmt::Debug for ExportJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportJob")
            .field("choice", &self.choice)
            .field("pose", &self.pose)
            .field("dancing", &self.dancing)
            .field("scope", &self.scope)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl ExportJob {
    /// Run [`export_image`] on the snapshot.
    pub async fn run<L>(self, loader: &L) -> ElfResult<ExportedImage>
    where
        L: ImageLoader + ?Sized,
    {
        let input = SceneInput {
            pose: self.pose,
            dancing: self.dancing,
            choice: &self.choice,
            scope: &self.scope,
            extra_style: &self.extra_style,
            mode: RenderMode::Static,
        };
        export_image(&*self.catalog, loader, &input, &self.opts).await
    }
}

/// Composite the background for `input.choice` with a static render of the scene.
///
/// The scene is always composed in [`RenderMode::Static`], whatever `input.mode` says. The first
/// failing stage aborts the export: a missing background variant yields
/// [`ElfError::AssetResolution`]; load, decode or rasterization failures yield
/// [`ElfError::ImageLoad`].
#[tracing::instrument(skip_all, fields(background = %input.choice.backgrounds))]
pub async fn export_image<C, L>(
    catalog: &C,
    loader: &L,
    input: &SceneInput<'_>,
    opts: &ExportOpts,
) -> ElfResult<ExportedImage>
where
    C: AssetCatalog + ?Sized,
    L: ImageLoader + ?Sized,
{
    opts.validate()?;

    let source = match catalog.resolve(AssetCategory::Backgrounds, &input.choice.backgrounds)? {
        ResolvedAsset::Raster(src) => src,
        ResolvedAsset::Fragment(_) => {
            return Err(ElfError::image_load(format!(
                "background '{}' is not a raster image",
                input.choice.backgrounds
            )));
        }
    };
    let bytes = loader.load(&source).await.map_err(|err| match err {
        ElfError::ImageLoad(_) => err,
        other => ElfError::image_load(format!("load background: {other}")),
    })?;
    let background = decode_image(&bytes)?;

    let canvas = catalog.layout().scaled(opts.resolution_scale);
    let mut out = Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| ElfError::render("failed to allocate export canvas"))?;
    draw_background(&mut out, &background, opts.background_zoom);

    let still = SceneInput {
        mode: RenderMode::Static,
        ..input.clone()
    };
    let scene = compose_scene(catalog, &still);
    let tree = parse_svg(&scene.to_svg(Some(canvas))?)?;
    let elf = rasterize_svg(&tree, canvas.width, canvas.height)?;
    out.draw_pixmap(
        0,
        0,
        elf.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    let png = encode_png(&out)?;
    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        bytes = png.len(),
        "export done"
    );
    Ok(ExportedImage {
        width: canvas.width,
        height: canvas.height,
        png,
    })
}

/// Draw the centered `W/zoom x H/zoom` crop of `bg` stretched over the whole canvas.
fn draw_background(out: &mut Pixmap, bg: &Pixmap, zoom: f64) {
    let zoom = zoom as f32;
    let crop_w = out.width() as f32 / zoom;
    let crop_h = out.height() as f32 / zoom;
    let sx = (bg.width() as f32 - crop_w) / 2.0;
    let sy = (bg.height() as f32 - crop_h) / 2.0;

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    let xform = Transform::from_row(zoom, 0.0, 0.0, zoom, -sx * zoom, -sy * zoom);
    out.draw_pixmap(0, 0, bg.as_ref(), &paint, xform, None);
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
