//! Elfmaker draws and animates a procedural vector elf.
//!
//! A [`Character`] combines a [`CategoryChoice`] (which hat, hair, glasses, ... to wear) with
//! idle motion and a click-triggered dance, and produces a [`RenderedScene`] that serializes to
//! SVG every frame. [`Character::export_image`] flattens a still pose over the selected
//! background into a PNG.
//!
//! - Art and body presets come from an [`AssetCatalog`]; [`Catalog::builtin`] ships one.
//! - Time comes from a [`Clock`]; [`ManualClock`] makes every animation deterministic.
//! - [`FrameTicker`] drives a per-frame callback until its [`Liveness`] flag is cleared.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod catalog;
mod character;
mod export;
mod foundation;
mod geometry;
mod scene;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Fps, Point, Rect, Vec2};
pub use crate::foundation::error::{ElfError, ElfResult};

pub use crate::geometry::bezier::{scale_about_point, tangent_angle};
pub use crate::geometry::limb::{
    ArmGeometry, DEFAULT_ARM_ANGLE, DEFAULT_ARM_LENGTH, DEFAULT_SHRUG, build_arm,
};

pub use crate::animation::clock::{Clock, ManualClock, SystemClock};
pub use crate::animation::pose::{
    CharacterState, DANCE_DURATION, DANCE_MOVES, DanceSession, MOVE_DURATION, Pose,
};
pub use crate::animation::ticker::{FrameTicker, Liveness, TickerStats};

pub use crate::catalog::model::{
    AssetCatalog, AssetCategory, BodyType, CategoryChoice, ResolvedAsset,
};
pub use crate::catalog::scope::IdScope;
pub use crate::catalog::store::Catalog;

pub use crate::scene::composer::{
    AUTHORED_LIMB_WIDTH, BodyMetrics, RenderMode, SceneInput, compose_scene,
};
pub use crate::scene::model::{RenderedScene, SceneNode, SvgTransform, compose_transforms};

pub use crate::export::loader::{FsImageLoader, ImageLoader, decode_data_url};
pub use crate::export::raster::{ExportJob, ExportOpts, ExportedImage, export_image};

pub use crate::character::Character;
