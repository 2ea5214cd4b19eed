use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ElfError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ElfError::image_load("x")
            .to_string()
            .contains("image load error:")
    );
    assert!(ElfError::render("x").to_string().contains("render error:"));
    assert!(
        ElfError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn asset_not_found_names_category_and_variant() {
    let err = ElfError::asset_not_found(AssetCategory::Hats, "crown");
    assert_eq!(err.to_string(), "asset not found: hats/crown");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ElfError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
