//! Maps pose, category choice and body proportions to a positioned scene.

use std::fmt::Write as _;

use crate::animation::pose::Pose;
use crate::catalog::model::{AssetCatalog, AssetCategory, BodyType, CategoryChoice, ResolvedAsset};
use crate::catalog::scope::IdScope;
use crate::foundation::core::{Point, Rect, Vec2, finite_or};
use crate::geometry::bezier::scale_about_point;
use crate::geometry::limb::{ArmGeometry, build_arm};
use crate::scene::model::{RenderedScene, SceneNode, SvgTransform, num};

/// Limb thickness that every fixed drawing (feet, shoes) is authored at.
pub const AUTHORED_LIMB_WIDTH: f64 = 20.0;

const VIEW_BOX: Rect = Rect::new(-40.0, -100.0, 360.0, 460.0);
const HAND_RADIUS: f64 = 21.32;
const HAND_CUFF: &str = "M66.87,272.56H30.73a10,10,0,0,0,0,20H66.87a10,10,0,0,0,0-20Z";
const LEFT_FOOT: &str = "M68.15,389.94a19.36,19.36,0,0,0,19.36,19.35h0a15,15,0,0,0,15-15V379.94h20v43.7a5,5,0,0,1-5,5H68.62c-10.5,0-19.43-8.16-19.81-18.65A19.35,19.35,0,0,1,68.15,389.94Z";
const LEFT_BUCKLE: &str = "M102.51,399.29H110a5,5,0,0,0,0-10h-7.51a5,5,0,1,0,0,10Z";
const RIGHT_FOOT: &str = "M191.85,389.94a19.36,19.36,0,0,1-19.36,19.35h0a15,15,0,0,1-15-15V379.94h-20v43.7a5,5,0,0,0,5,5h48.89c10.5,0,19.43-8.16,19.81-18.65A19.35,19.35,0,0,0,191.85,389.94Z";
const RIGHT_BUCKLE: &str = "M157.49,399.29H150a5,5,0,1,1,0-10h7.51a5,5,0,0,1,0,10Z";

const LIVE_STYLE: &str = r#"
.blink {
  animation: elves-blink 5.234s infinite alternate;
}
.dance {
  transform-origin: center 100%;
  animation: elves-dance 3s ease-in-out infinite alternate;
}
@keyframes elves-blink {
  0%   { transform: scaleY(1); }
  98%  { transform: scaleY(1); }
  100% { transform: scaleY(0); }
}
@keyframes elves-dance {
  0%     { transform: translate3d(0, 0, 0) rotateZ(0); }
  6.25%  { transform: translate3d(2.5%, -10%, 0) rotateZ(7.5deg); }
  12.5%  { transform: translate3d(0, 0, 0) rotateZ(7.5deg); }
  18.75% { transform: translate3d(-2.5%, -10%, 0) rotateZ(-7.5deg); }
  25%    { transform: translate3d(0, 0, 0) rotateZ(-7.5deg); }
  31.25% { transform: translate3d(0, -12.5%, 0) rotateZ(0); }
  37.5%  { transform: translate3d(0, -2.5%, 0) rotateZ(0); }
  43.75% { transform: translate3d(0, -12.5%, 0) rotateZ(0); }
  50.0%  { transform: translate3d(0, -2.5%, 0) rotateZ(0); }
  56.25% { transform: translate3d(0, 0%, 0) rotateZ(12.5deg); }
  62.5%  { transform: translate3d(0, 0%, 0) rotateZ(-2.5deg); }
  68.75% { transform: translate3d(0, 0%, 0) rotateZ(2.5deg); }
  75%    { transform: translate3d(0, 0%, 0) rotateZ(-12.5deg); }
  81.25% { transform: translate3d(2.5%, -10%, 0) rotateZ(7.5deg); }
  87.5%  { transform: translate3d(0, 0, 0) rotateZ(7.5deg); }
  93.75% { transform: translate3d(-2.5%, -10%, 0) rotateZ(-7.5deg); }
  100%   { transform: translate3d(0, 0, 0) rotateZ(0); }
}
"#;

/// Whether the scene carries CSS animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RenderMode {
    /// Blink/dance keyframes included; the root group gets class `dance` while dancing.
    Live,
    /// No CSS animation at all. Used for export.
    Static,
}

/// Sizes derived from a [`BodyType`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BodyMetrics {
    /// Stroke width of arms and legs, 18..=26 for weights in 0..=1.
    pub limb_width: f64,
    /// Visible leg length.
    pub leg_length: f64,
    /// Base arm length handed to the limb builder.
    pub arm_length: f64,
    /// `limb_width / 20`; feet and shoes scale by this.
    pub limb_scale: f64,
    /// `sqrt(limb_width / 20)`; horizontal torso scale.
    pub body_scale: f64,
}

impl BodyMetrics {
    /// Derive proportions. Non-finite or negative fields count as `0`.
    pub fn from_body_type(body: BodyType) -> Self {
        let height = finite_or(body.height, 0.0).max(0.0);
        let weight = finite_or(body.weight, 0.0).max(0.0);

        let limb_width = 18.0 + weight * 8.0;
        let limb_scale = limb_width / AUTHORED_LIMB_WIDTH;
        Self {
            limb_width,
            leg_length: height * 96.0 + 32.0,
            arm_length: height * 64.0 + 96.0,
            limb_scale,
            body_scale: limb_scale.sqrt(),
        }
    }

    /// Vertical torso scale, `limb_scale^0.25`.
    pub fn torso_scale_y(&self) -> f64 {
        self.limb_scale.powf(0.25)
    }
}

/// Everything [`compose_scene`] needs besides the catalog.
#[derive(Clone, Debug)]
pub struct SceneInput<'a> {
    /// Pose at the frame's `now`.
    pub pose: Pose,
    /// Whether a dance is active at the same `now`.
    pub dancing: bool,
    /// Selected art.
    pub choice: &'a CategoryChoice,
    /// Style namespace.
    pub scope: &'a IdScope,
    /// Caller CSS appended after the base style.
    pub extra_style: &'a str,
    /// Live or static.
    pub mode: RenderMode,
}

/// Build the scene for one instant.
///
/// Missing variants are logged and rendered as empty slots; composing never fails.
pub fn compose_scene<C>(catalog: &C, input: &SceneInput<'_>) -> RenderedScene
where
    C: AssetCatalog + ?Sized,
{
    let choice = input.choice;
    let body = catalog.body_type(&choice.body).unwrap_or_else(|err| {
        tracing::warn!(%err, "unknown body type, using zero proportions");
        BodyType::default()
    });
    let metrics = BodyMetrics::from_body_type(body);
    let pose = input.pose;

    let slot = |category: AssetCategory| -> SceneNode {
        let variant = choice.get(category);
        match catalog.resolve(category, variant) {
            Ok(ResolvedAsset::Fragment(markup)) => SceneNode::Fragment(markup),
            Ok(ResolvedAsset::Raster(src)) => {
                tracing::warn!(%category, variant, %src, "raster asset in a vector slot, leaving empty");
                SceneNode::Fragment(String::new())
            }
            Err(err) => {
                tracing::warn!(%err, "leaving slot empty");
                SceneNode::Fragment(String::new())
            }
        }
    };
    let slot_group = |category: AssetCategory| {
        SceneNode::group(Some(category.key()), Vec::new(), vec![slot(category)])
    };

    let head_offset = || vec![SvgTransform::Translate(Vec2::new(-105.0, -18.0))];

    let top = SceneNode::group(
        Some("top"),
        vec![
            SvgTransform::Translate(Vec2::new(160.0, 80.0 - metrics.leg_length)),
            SvgTransform::Rotate {
                degrees: pose.torso_tilt_deg,
                center: Point::new(0.0, 280.0),
            },
        ],
        vec![
            // Hat first so the torso covers its brim.
            SceneNode::group(None, head_offset(), vec![slot_group(AssetCategory::Hats)]),
            torso(&metrics, slot(AssetCategory::Body)),
            arm(
                "left-arm",
                -10.0,
                1.0,
                build_arm(pose.left_arm_deg, pose.shrug, metrics.arm_length),
            ),
            arm(
                "right-arm",
                10.0,
                -1.0,
                build_arm(pose.right_arm_deg, pose.shrug, metrics.arm_length),
            ),
            SceneNode::group(
                Some("head"),
                head_offset(),
                vec![
                    SceneNode::Fragment(catalog.head_fragment().to_owned()),
                    slot_group(AssetCategory::Hair),
                    slot_group(AssetCategory::Glasses),
                    slot_group(AssetCategory::Ears),
                    slot_group(AssetCategory::Accessories),
                ],
            ),
        ],
    );

    let dancing_class = (input.mode == RenderMode::Live && input.dancing).then_some("dance");
    let root = SceneNode::group(dancing_class, Vec::new(), vec![feet(&metrics), top]);

    RenderedScene {
        scope: input.scope.clone(),
        mode: input.mode,
        view_box: VIEW_BOX,
        pose,
        dancing: input.dancing,
        metrics,
        style: style_sheet(catalog.base_style(), input, &metrics),
        root,
    }
}

fn feet(m: &BodyMetrics) -> SceneNode {
    let leg = format!("v{}", num(-(m.leg_length + 100.0) / m.limb_scale));
    SceneNode::group(
        Some("feet"),
        vec![
            SvgTransform::Translate(Vec2::new(30.0, 30.0)),
            SvgTransform::Matrix(scale_about_point(
                m.limb_scale,
                m.limb_scale,
                Point::new(130.0, 428.65),
            )),
        ],
        vec![
            SceneNode::path("limb", format!("M112.51,389.94{leg}")),
            SceneNode::path("limb", format!("M147.49,389.94{leg}")),
            SceneNode::path("high1", LEFT_FOOT),
            SceneNode::path("high2", LEFT_BUCKLE),
            SceneNode::path("high1", RIGHT_FOOT),
            SceneNode::path("high2", RIGHT_BUCKLE),
        ],
    )
}

fn torso(m: &BodyMetrics, body: SceneNode) -> SceneNode {
    SceneNode::group(
        Some("suit"),
        vec![SvgTransform::Matrix(scale_about_point(
            m.body_scale,
            m.torso_scale_y(),
            Point::new(0.0, 202.7),
        ))],
        vec![
            body,
            SceneNode::Rect {
                class: "high1".to_owned(),
                rect: Rect::new(-42.66, 259.76, 42.66, 281.08),
            },
            SceneNode::Rect {
                class: "high2".to_owned(),
                rect: Rect::new(-10.66, 258.76, 10.66, 282.08),
            },
        ],
    )
}

/// One arm anchored beside the torso center and reflected: `mirror_x = 1` for the left arm,
/// `-1` for the right. Both are flipped vertically so angles read upwards.
fn arm(class: &str, anchor_x: f64, mirror_x: f64, geometry: ArmGeometry) -> SceneNode {
    let c1 = geometry.body_control;
    let c2 = geometry.hand_control;
    let end = geometry.end;
    let d = format!(
        "M0,0C{},{},{},{},{},{}",
        num(c1.x),
        num(c1.y),
        num(c2.x),
        num(c2.y),
        num(end.x),
        num(end.y)
    );

    SceneNode::group(
        Some(class),
        vec![
            SvgTransform::Translate(Vec2::new(anchor_x, 216.0)),
            SvgTransform::Scale(Vec2::new(mirror_x, -1.0)),
        ],
        vec![
            SceneNode::Path {
                class: "limb arm".to_owned(),
                d,
                transform: Vec::new(),
                path_length: Some(geometry.effective_length / 2.0),
            },
            SceneNode::group(
                Some("hand"),
                vec![
                    SvgTransform::Translate(end.to_vec2()),
                    SvgTransform::Rotate {
                        degrees: geometry.hand_rotation_deg,
                        center: Point::ORIGIN,
                    },
                ],
                vec![
                    SceneNode::Circle {
                        class: "skin".to_owned(),
                        center: Point::ORIGIN,
                        radius: HAND_RADIUS,
                    },
                    SceneNode::Path {
                        class: "white".to_owned(),
                        d: HAND_CUFF.to_owned(),
                        transform: vec![SvgTransform::Translate(Vec2::new(-48.8, -303.89))],
                        path_length: None,
                    },
                ],
            ),
        ],
    )
}

fn style_sheet(base: &str, input: &SceneInput<'_>, m: &BodyMetrics) -> String {
    let mut css = String::with_capacity(base.len() + LIVE_STYLE.len() + 256);
    css.push_str(base);
    if !input.extra_style.trim().is_empty() {
        css.push('\n');
        css.push_str(input.extra_style);
    }
    if input.mode == RenderMode::Live {
        css.push_str(LIVE_STYLE);
    }
    let _ = write!(
        css,
        "\n#{} .limb.arm {{ stroke-width: {}px; }}\n",
        input.scope,
        num(m.limb_width)
    );
    css
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
