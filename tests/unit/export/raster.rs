use std::collections::HashMap;
use std::io::Cursor;

use super::*;
use crate::animation::pose::Pose;
use crate::catalog::model::CategoryChoice;
use crate::catalog::scope::IdScope;
use crate::catalog::store::Catalog;

struct MapLoader(HashMap<String, Vec<u8>>);

impl ImageLoader for MapLoader {
    async fn load(&self, source: &str) -> ElfResult<Vec<u8>> {
        self.0
            .get(source)
            .cloned()
            .ok_or_else(|| ElfError::image_load(format!("no image at '{source}'")))
    }
}

struct BrokenLoader;

impl ImageLoader for BrokenLoader {
    async fn load(&self, _source: &str) -> ElfResult<Vec<u8>> {
        Err(ElfError::validation("connection reset"))
    }
}

fn solid_png(w: u32, h: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(w, h, image::Rgb(rgb));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn catalog_with_solid_background() -> Catalog {
    let mut catalog = Catalog::builtin();
    catalog
        .backgrounds
        .insert("solid".to_owned(), "bg/solid.png".to_owned());
    catalog
}

fn loader_with_solid_background() -> MapLoader {
    let mut images = HashMap::new();
    images.insert("bg/solid.png".to_owned(), solid_png(700, 940, [10, 200, 30]));
    MapLoader(images)
}

fn still_pose() -> Pose {
    Pose {
        right_arm_deg: 100.0,
        left_arm_deg: 135.0,
        torso_tilt_deg: 0.0,
        shrug: 0.5,
    }
}

fn run(
    catalog: &Catalog,
    loader: &impl ImageLoader,
    choice: &CategoryChoice,
    opts: &ExportOpts,
) -> ElfResult<ExportedImage> {
    let scope = IdScope::named("elf-export").unwrap();
    let input = SceneInput {
        pose: still_pose(),
        dancing: true,
        choice,
        scope: &scope,
        extra_style: "",
        mode: RenderMode::Live,
    };
    pollster::block_on(export_image(catalog, loader, &input, opts))
}

fn assert_rgb_near(px: &image::Rgba<u8>, rgb: [u8; 3]) {
    for c in 0..3 {
        assert!(
            px.0[c].abs_diff(rgb[c]) <= 2,
            "pixel {:?} expected near {rgb:?}",
            px.0
        );
    }
    assert_eq!(px.0[3], 255);
}

#[test]
fn defaults_double_resolution_and_zoom_background() {
    let opts = ExportOpts::default();
    assert_eq!(opts.resolution_scale, 2.0);
    assert_eq!(opts.background_zoom, 1.2);
    opts.validate().unwrap();
}

#[test]
fn export_composites_scene_over_background() {
    let catalog = catalog_with_solid_background();
    let mut choice = CategoryChoice::default();
    choice.backgrounds = "solid".to_owned();

    let out = run(
        &catalog,
        &loader_with_solid_background(),
        &choice,
        &ExportOpts::default(),
    )
    .unwrap();
    assert_eq!((out.width, out.height), (800, 1120));

    let img = image::load_from_memory(&out.png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (800, 1120));

    // Top-left corner is far from the character.
    assert_rgb_near(img.get_pixel(0, 0), [10, 200, 30]);
    assert_rgb_near(img.get_pixel(799, 1119), [10, 200, 30]);

    // Cheek-level point of the face: head frame (105, 160), scene (160, 142), canvas 2x.
    assert_rgb_near(img.get_pixel(400, 484), [0xf6, 0xc8, 0xa4]);
}

#[test]
fn output_size_follows_resolution_scale() {
    let catalog = catalog_with_solid_background();
    let mut choice = CategoryChoice::default();
    choice.backgrounds = "solid".to_owned();
    let opts = ExportOpts {
        resolution_scale: 0.5,
        ..ExportOpts::default()
    };

    let out = run(&catalog, &loader_with_solid_background(), &choice, &opts).unwrap();
    assert_eq!((out.width, out.height), (200, 280));
    let img = image::load_from_memory(&out.png).unwrap();
    assert_eq!((img.width(), img.height()), (200, 280));
}

#[test]
fn builtin_backgrounds_export_without_letterboxing() {
    let catalog = Catalog::builtin();
    let choice = CategoryChoice::default();
    let loader = crate::export::loader::FsImageLoader::new(std::env::temp_dir());

    let out = run(&catalog, &loader, &choice, &ExportOpts::default()).unwrap();
    let img = image::load_from_memory(&out.png).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0[3], 255);
    assert_eq!(img.get_pixel(799, 1119).0[3], 255);
}

#[test]
fn missing_background_image_aborts_with_image_load() {
    let catalog = catalog_with_solid_background();
    let mut choice = CategoryChoice::default();
    choice.backgrounds = "solid".to_owned();

    let err = run(
        &catalog,
        &MapLoader(HashMap::new()),
        &choice,
        &ExportOpts::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ElfError::ImageLoad(_)));
}

#[test]
fn loader_errors_of_other_kinds_become_image_load() {
    let catalog = catalog_with_solid_background();
    let mut choice = CategoryChoice::default();
    choice.backgrounds = "solid".to_owned();

    let err = run(&catalog, &BrokenLoader, &choice, &ExportOpts::default()).unwrap_err();
    assert!(matches!(err, ElfError::ImageLoad(ref msg) if msg.contains("connection reset")));
}

#[test]
fn undecodable_background_aborts_with_image_load() {
    let catalog = catalog_with_solid_background();
    let mut choice = CategoryChoice::default();
    choice.backgrounds = "solid".to_owned();
    let mut images = HashMap::new();
    images.insert("bg/solid.png".to_owned(), b"GIF89a?".to_vec());

    let err = run(&catalog, &MapLoader(images), &choice, &ExportOpts::default()).unwrap_err();
    assert!(matches!(err, ElfError::ImageLoad(_)));
}

#[test]
fn unknown_background_variant_is_asset_resolution() {
    let catalog = catalog_with_solid_background();
    let mut choice = CategoryChoice::default();
    choice.backgrounds = "volcano".to_owned();

    let err = run(
        &catalog,
        &loader_with_solid_background(),
        &choice,
        &ExportOpts::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ElfError::AssetResolution {
            category: AssetCategory::Backgrounds,
            ..
        }
    ));
}

#[test]
fn invalid_options_are_rejected_before_loading() {
    let catalog = catalog_with_solid_background();
    let choice = CategoryChoice::default();
    let opts = ExportOpts {
        background_zoom: 0.0,
        ..ExportOpts::default()
    };
    let err = run(&catalog, &MapLoader(HashMap::new()), &choice, &opts).unwrap_err();
    assert!(matches!(err, ElfError::Validation(_)));
}

#[test]
fn data_url_wraps_png_bytes() {
    let img = ExportedImage {
        width: 1,
        height: 1,
        png: b"hello".to_vec(),
    };
    assert_eq!(img.to_data_url(), "data:image/png;base64,aGVsbG8=");
}
