//! The public face of one animated elf.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::animation::clock::{Clock, SystemClock};
use crate::animation::pose::{CharacterState, Pose};
use crate::catalog::model::{AssetCatalog, CategoryChoice};
use crate::catalog::scope::IdScope;
use crate::export::loader::ImageLoader;
use crate::export::raster::{ExportJob, ExportOpts, ExportedImage};
use crate::foundation::error::ElfResult;
use crate::scene::composer::{RenderMode, SceneInput, compose_scene};
use crate::scene::model::RenderedScene;

/// One character: its state, style namespace, catalog and time source.
///
/// Every query samples the clock once and derives everything for that call from that single
/// `now`, so "is the dance over" and "which move is active" can never disagree within a frame.
pub struct Character<K: Clock = SystemClock> {
    state: CharacterState,
    scope: IdScope,
    extra_style: String,
    catalog: Arc<dyn AssetCatalog + Send + Sync>,
    clock: K,
}

impl Character<SystemClock> {
    /// Character with default choices on the wall clock.
    pub fn new(catalog: Arc<dyn AssetCatalog + Send + Sync>) -> Self {
        Self::with_clock(catalog, SystemClock::new())
    }
}

impl<K: Clock> Character<K> {
    /// Character with default choices and a fresh [`IdScope`], driven by `clock`.
    pub fn with_clock(catalog: Arc<dyn AssetCatalog + Send + Sync>, clock: K) -> Self {
        Self {
            state: CharacterState::new(CategoryChoice::default()),
            scope: IdScope::next(),
            extra_style: String::new(),
            catalog,
            clock,
        }
    }

    /// Replace the style namespace.
    pub fn with_scope(mut self, scope: IdScope) -> Self {
        self.scope = scope;
        self
    }

    /// Select new art. Takes effect on the next render; a running dance keeps going.
    pub fn set_category_choice(&mut self, choice: CategoryChoice) {
        self.state.choice = choice;
    }

    /// Current art selection.
    pub fn category_choice(&self) -> &CategoryChoice {
        &self.state.choice
    }

    /// CSS appended after the catalog's base style.
    pub fn set_extra_style(&mut self, css: impl Into<String>) {
        self.extra_style = css.into();
    }

    /// Style namespace.
    pub fn scope(&self) -> &IdScope {
        &self.scope
    }

    /// Time source.
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Carried state.
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// Start a dance unless one is running. Returns whether a dance started.
    pub fn dance(&mut self) -> bool {
        let now = self.clock.now();
        self.state.dance(now)
    }

    /// Whether a dance is active now.
    pub fn is_dancing(&self) -> bool {
        self.state.is_dancing(self.clock.now())
    }

    /// Pose now.
    pub fn pose(&self) -> Pose {
        self.state.pose_at(self.clock.now())
    }

    /// Animated scene for display.
    pub fn render_live(&self) -> RenderedScene {
        self.render_at(self.clock.now(), RenderMode::Live)
    }

    /// Frozen scene of the current pose.
    pub fn render_static(&self) -> RenderedScene {
        self.render_at(self.clock.now(), RenderMode::Static)
    }

    /// Scene at an explicit clock offset.
    pub fn render_at(&self, now: Duration, mode: RenderMode) -> RenderedScene {
        compose_scene(&*self.catalog, &self.scene_input(now, mode))
    }

    /// Snapshot of the current pose composited over the selected background.
    ///
    /// Choice, pose and style are captured now; the returned future does not borrow the
    /// character, so it can keep dancing and changing clothes while the export is pending.
    pub fn export_image<'l, L>(
        &self,
        loader: &'l L,
        opts: &ExportOpts,
    ) -> impl Future<Output = ElfResult<ExportedImage>> + use<'l, K, L>
    where
        L: ImageLoader + ?Sized,
    {
        let job = self.export_job(*opts);
        async move { job.run(loader).await }
    }

    /// Owned snapshot for an export, for running off the animation thread.
    pub fn export_job(&self, opts: ExportOpts) -> ExportJob {
        let now = self.clock.now();
        ExportJob {
            catalog: Arc::clone(&self.catalog),
            choice: self.state.choice.clone(),
            pose: self.state.pose_at(now),
            dancing: self.state.is_dancing(now),
            scope: self.scope.clone(),
            extra_style: self.extra_style.clone(),
            opts,
        }
    }

    fn scene_input(&self, now: Duration, mode: RenderMode) -> SceneInput<'_> {
        SceneInput {
            pose: self.state.pose_at(now),
            dancing: self.state.is_dancing(now),
            choice: &self.state.choice,
            scope: &self.scope,
            extra_style: &self.extra_style,
            mode,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/character.rs"]
mod tests;
