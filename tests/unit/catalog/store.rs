use super::*;
use crate::catalog::model::CategoryChoice;

#[test]
fn builtin_covers_default_choice() {
    let catalog = Catalog::builtin();
    let choice = CategoryChoice::default();
    for c in AssetCategory::ALL {
        catalog.resolve(c, choice.get(c)).unwrap();
    }
    catalog.body_type(&choice.body).unwrap();
}

#[test]
fn builtin_backgrounds_are_raster_and_others_are_fragments() {
    let catalog = Catalog::builtin();
    assert!(matches!(
        catalog.resolve(AssetCategory::Backgrounds, "snow").unwrap(),
        ResolvedAsset::Raster(src) if src.starts_with("data:image/png;base64,")
    ));
    assert!(matches!(
        catalog.resolve(AssetCategory::Hats, "pointy").unwrap(),
        ResolvedAsset::Fragment(_)
    ));
    assert_eq!(
        catalog.resolve(AssetCategory::Body, "tall").unwrap(),
        ResolvedAsset::Fragment(catalog.body.clone())
    );
}

#[test]
fn unknown_variant_is_explicit_not_found() {
    let catalog = Catalog::builtin();
    let err = catalog
        .resolve(AssetCategory::Glasses, "monocle")
        .unwrap_err();
    assert!(matches!(
        err,
        ElfError::AssetResolution { category: AssetCategory::Glasses, ref variant } if variant == "monocle"
    ));
    assert!(catalog.body_type("giant").is_err());
    assert!(catalog.resolve(AssetCategory::Body, "giant").is_err());
}

#[test]
fn json_catalog_defaults_missing_fields() {
    let json = br#"{
        "body_types": { "elf": { "weight": 1.0 } },
        "hats": { "cap": "<rect/>" }
    }"#;
    let catalog = Catalog::from_reader(&json[..]).unwrap();
    assert_eq!(
        catalog.layout(),
        Canvas {
            width: 400,
            height: 560
        }
    );
    assert_eq!(
        catalog.body_type("elf").unwrap(),
        BodyType {
            height: 0.0,
            weight: 1.0
        }
    );
    assert_eq!(catalog.variants(AssetCategory::Hats), vec!["cap"]);
    assert!(catalog.variants(AssetCategory::Hair).is_empty());
    assert_eq!(catalog.head_fragment(), "");
}

#[test]
fn json_catalog_rejects_zero_layout() {
    let err = Catalog::from_reader(&br#"{ "width": 0 }"#[..]).unwrap_err();
    assert!(matches!(err, ElfError::Validation(_)));
}

#[test]
fn json_catalog_rejects_negative_proportions() {
    let json = br#"{ "body_types": { "slim": { "height": 0.5, "weight": -3.0 } } }"#;
    let err = Catalog::from_reader(&json[..]).unwrap_err();
    assert!(matches!(err, ElfError::Validation(_)));
    assert!(err.to_string().contains("slim"));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Catalog::from_path("/definitely/not/here/catalog.json").unwrap_err();
    assert!(err.to_string().contains("open catalog JSON"));
}

#[test]
fn variants_for_body_lists_presets() {
    let catalog = Catalog::builtin();
    let bodies = catalog.variants(AssetCategory::Body);
    assert!(bodies.contains(&"standard"));
    assert!(bodies.contains(&"round"));
}
