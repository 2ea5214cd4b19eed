use super::*;
use crate::catalog::store::Catalog;
use crate::foundation::core::Affine;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn input<'a>(
    choice: &'a CategoryChoice,
    scope: &'a IdScope,
    mode: RenderMode,
    dancing: bool,
) -> SceneInput<'a> {
    SceneInput {
        pose: Pose::idle(1.25),
        dancing,
        choice,
        scope,
        extra_style: "",
        mode,
    }
}

fn translation(a: Affine) -> (f64, f64) {
    let c = a.as_coeffs();
    (c[4], c[5])
}

#[test]
fn metrics_at_extremes() {
    let light = BodyMetrics::from_body_type(BodyType {
        height: 0.0,
        weight: 0.0,
    });
    assert!(close(light.leg_length, 32.0));
    assert!(close(light.arm_length, 96.0));
    assert!(close(light.limb_width, 18.0));
    assert!(close(light.limb_scale, 0.9));

    let heavy = BodyMetrics::from_body_type(BodyType {
        height: 1.0,
        weight: 1.0,
    });
    assert!(close(heavy.leg_length, 128.0));
    assert!(close(heavy.arm_length, 160.0));
    assert!(close(heavy.limb_width, 26.0));
    assert!(close(heavy.limb_scale, 1.3));
}

#[test]
fn limb_width_grows_with_weight_and_body_scale_is_unit_at_quarter() {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=20 {
        let weight = f64::from(i) / 20.0;
        let m = BodyMetrics::from_body_type(BodyType {
            height: 0.5,
            weight,
        });
        assert!(m.limb_width > prev);
        prev = m.limb_width;
        assert!(close(m.body_scale, (m.limb_width / 20.0).sqrt()));
    }
    let quarter = BodyMetrics::from_body_type(BodyType {
        height: 0.0,
        weight: 0.25,
    });
    assert_eq!(quarter.limb_width, 20.0);
    assert_eq!(quarter.body_scale, 1.0);
    assert_eq!(quarter.torso_scale_y(), 1.0);
}

#[test]
fn non_finite_body_type_counts_as_zero() {
    let m = BodyMetrics::from_body_type(BodyType {
        height: f64::NAN,
        weight: f64::INFINITY,
    });
    assert_eq!(m, BodyMetrics::from_body_type(BodyType::default()));
}

#[test]
fn negative_body_type_counts_as_zero() {
    let m = BodyMetrics::from_body_type(BodyType {
        height: -4.0,
        weight: -3.0,
    });
    assert_eq!(m, BodyMetrics::from_body_type(BodyType::default()));
    assert!(m.limb_scale > 0.0);
    assert!(m.body_scale.is_finite() && m.torso_scale_y().is_finite());
}

#[test]
fn torso_is_lifted_by_leg_length_and_tilted() {
    let catalog = Catalog::builtin();
    let mut choice = CategoryChoice::default();
    choice.body = "tall".to_owned();
    let scope = IdScope::named("elf-a").unwrap();
    let inp = input(&choice, &scope, RenderMode::Static, false);
    let scene = compose_scene(&catalog, &inp);

    assert!(close(scene.metrics.leg_length, 128.0));
    let SceneNode::Group { transform, .. } = scene.root.find_by_class("top").unwrap().1 else {
        panic!("top must be a group");
    };
    assert_eq!(
        transform[0],
        SvgTransform::Translate(Vec2::new(160.0, 80.0 - 128.0))
    );
    assert_eq!(
        transform[1],
        SvgTransform::Rotate {
            degrees: inp.pose.torso_tilt_deg,
            center: Point::new(0.0, 280.0)
        }
    );
}

#[test]
fn arms_are_mirrored_about_the_torso() {
    let catalog = Catalog::builtin();
    let choice = CategoryChoice::default();
    let scope = IdScope::named("elf-b").unwrap();
    let mut inp = input(&choice, &scope, RenderMode::Static, false);
    inp.pose = Pose {
        right_arm_deg: 90.0,
        left_arm_deg: 90.0,
        torso_tilt_deg: 0.0,
        shrug: 0.5,
    };
    let scene = compose_scene(&catalog, &inp);

    let (left, _) = scene.root.find_by_class("left-arm").unwrap();
    let (right, _) = scene.root.find_by_class("right-arm").unwrap();
    let (lx, ly) = translation(left);
    let (rx, ry) = translation(right);
    // Shoulders sit 10 units either side of the torso center (x = 160).
    assert!(close(lx, 150.0));
    assert!(close(rx, 170.0));
    assert!(close(ly, ry));

    // Same pose on both sides: the hands land symmetric around x = 160.
    let (left_hand, _) = scene.root.find_by_class("hand").unwrap();
    let right_arm = scene.root.find_by_class("right-arm").unwrap().1;
    let (right_hand_local, _) = right_arm.children()[1]
        .find_by_class("hand")
        .unwrap();
    let right_hand = right * right_hand_local;
    let (lhx, lhy) = translation(left_hand);
    let (rhx, rhy) = translation(right_hand);
    assert!(close(lhx - 160.0, -(rhx - 160.0)));
    assert!(close(lhy, rhy));
}

#[test]
fn arm_path_uses_limb_builder_geometry() {
    let catalog = Catalog::builtin();
    let choice = CategoryChoice::default();
    let scope = IdScope::named("elf-c").unwrap();
    let inp = input(&choice, &scope, RenderMode::Static, false);
    let scene = compose_scene(&catalog, &inp);

    let arm = build_arm(
        inp.pose.right_arm_deg,
        inp.pose.shrug,
        scene.metrics.arm_length,
    );
    let right = scene.root.find_by_class("right-arm").unwrap().1;
    let SceneNode::Path {
        d, path_length, ..
    } = &right.children()[0]
    else {
        panic!("arm path first");
    };
    assert!(d.starts_with("M0,0C"));
    assert!(d.ends_with(&format!("{},{}", num(arm.end.x), num(arm.end.y))));
    assert!(close(path_length.unwrap(), arm.effective_length / 2.0));
}

#[test]
fn slots_hold_catalog_fragments_and_missing_ones_are_empty() {
    let catalog = Catalog::builtin();
    let mut choice = CategoryChoice::default();
    choice.glasses = "monocle".to_owned();
    let scope = IdScope::named("elf-d").unwrap();
    let scene = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Static, false));

    let hats = scene.root.find_by_class("hats").unwrap().1;
    assert_eq!(
        hats.children(),
        &[SceneNode::Fragment(catalog.hats["pointy"].clone())]
    );
    let glasses = scene.root.find_by_class("glasses").unwrap().1;
    assert_eq!(glasses.children(), &[SceneNode::Fragment(String::new())]);

    let svg = scene.to_svg(None).unwrap();
    assert!(svg.contains(&catalog.head));
    assert!(svg.contains(r#"<g class="glasses"></g>"#));
}

#[test]
fn unknown_body_falls_back_to_zero_proportions() {
    let catalog = Catalog::builtin();
    let mut choice = CategoryChoice::default();
    choice.body = "giant".to_owned();
    let scope = IdScope::named("elf-e").unwrap();
    let scene = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Static, false));
    assert_eq!(
        scene.metrics,
        BodyMetrics::from_body_type(BodyType::default())
    );
    let suit = scene.root.find_by_class("suit").unwrap().1;
    assert_eq!(suit.children()[0], SceneNode::Fragment(String::new()));
}

#[test]
fn live_dancing_scene_animates_and_static_does_not() {
    let catalog = Catalog::builtin();
    let choice = CategoryChoice::default();
    let scope = IdScope::named("elf-f").unwrap();

    let live = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Live, true));
    assert!(live.root.has_class("dance"));
    assert!(live.style.contains("@keyframes elves-dance"));
    assert!(live.style.contains(".blink"));

    let idle_live = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Live, false));
    assert!(!idle_live.root.has_class("dance"));

    let frozen = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Static, true));
    assert!(!frozen.root.has_class("dance"));
    assert!(!frozen.style.contains("@keyframes"));
    assert!(frozen.dancing);
}

#[test]
fn style_sheet_scopes_arm_width_and_appends_extra_css() {
    let catalog = Catalog::builtin();
    let mut choice = CategoryChoice::default();
    choice.body = "lanky".to_owned();
    let scope = IdScope::named("elf-g").unwrap();
    let mut inp = input(&choice, &scope, RenderMode::Static, false);
    inp.extra_style = ".skin { fill: #00ff00; }";
    let scene = compose_scene(&catalog, &inp);

    assert!(scene.style.starts_with(catalog.base_style()));
    assert!(scene.style.contains(".skin { fill: #00ff00; }"));
    assert!(scene.style.contains("#elf-g .limb.arm { stroke-width: 18px; }"));
}

#[test]
fn feet_scale_about_the_shoe_pivot() {
    let catalog = Catalog::builtin();
    let mut choice = CategoryChoice::default();
    choice.body = "round".to_owned();
    let scope = IdScope::named("elf-h").unwrap();
    let scene = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Static, false));

    let (feet, _) = scene.root.find_by_class("feet").unwrap();
    let pivot = feet * Point::new(130.0, 428.65);
    assert!(close(pivot.x, 160.0));
    assert!(close(pivot.y, 458.65));
}

#[test]
fn static_scene_rasterizes_through_usvg() {
    let catalog = Catalog::builtin();
    let choice = CategoryChoice::default();
    let scope = IdScope::named("elf-i").unwrap();
    let scene = compose_scene(&catalog, &input(&choice, &scope, RenderMode::Static, false));
    let svg = scene.to_svg(Some(catalog.layout())).unwrap();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 400.0);
    assert_eq!(tree.size().height(), 560.0);
}
