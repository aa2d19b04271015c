//! Shared 2D camera resource.
//!
//! [`CameraController`] owns the viewport position and zoom and layers four
//! independent behaviours on top of them every tick:
//!
//! 1. **follow** – recompute the target from a followed object's position
//! 2. **smoothing** – move the position a fraction of the way to the target
//! 3. **shake** – add decaying random jitter
//! 4. **transitions** – overwrite the position with eased interpolations
//!
//! The camera position is the world point shown at the viewport centre, so
//! [`CameraController::world_to_screen`] and
//! [`CameraController::screen_to_world`] are exact inverses for any state.
//!
//! All setters clamp or ignore bad numbers instead of failing: a running
//! frame loop must never stop because a script passed `NaN`.

pub mod clock;
pub mod easing;
pub mod follow;
pub mod shake;
pub mod transition;

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;
use log::{debug, warn};
use std::sync::{Arc, Weak};

use self::clock::Clock;
use self::easing::Easing;
use self::follow::{Follow, FollowTarget, HasPosition, Resolved};
use self::shake::Shake;
use self::transition::{Step, Transition};

pub const DEFAULT_MIN_ZOOM: f32 = 0.5;
pub const DEFAULT_MAX_ZOOM: f32 = 3.0;
pub const DEFAULT_SMOOTHING: f32 = 0.1;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

/// How the smoothing factor is turned into a per-tick blend amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SmoothingMode {
    /// Close `smoothing` of the remaining distance every tick, whatever the
    /// frame time. Convergence speed depends on the frame rate.
    PerTick,
    /// Close `1 - exp(-rate * dt)` of the remaining distance, which is frame
    /// rate independent.
    TimeNormalized { rate: f32 },
}

/// Axis-aligned limits for the camera target. Infinite edges are unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl CameraBounds {
    pub const UNBOUNDED: CameraBounds = CameraBounds {
        min_x: f32::NEG_INFINITY,
        max_x: f32::INFINITY,
        min_y: f32::NEG_INFINITY,
        max_y: f32::INFINITY,
    };

    /// Build bounds, treating NaN edges as unbounded.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        let lower = |v: f32| if v.is_nan() { f32::NEG_INFINITY } else { v };
        let upper = |v: f32| if v.is_nan() { f32::INFINITY } else { v };
        Self {
            min_x: lower(min_x),
            max_x: upper(max_x),
            min_y: lower(min_y),
            max_y: upper(max_y),
        }
    }

    /// Clamp a point into the finite edges. Min is applied before max, so
    /// inverted bounds resolve to the max edge.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let mut out = p;
        if self.min_x.is_finite() {
            out.x = out.x.max(self.min_x);
        }
        if self.max_x.is_finite() {
            out.x = out.x.min(self.max_x);
        }
        if self.min_y.is_finite() {
            out.y = out.y.max(self.min_y);
        }
        if self.max_y.is_finite() {
            out.y = out.y.min(self.max_y);
        }
        out
    }

    /// Whether all four edges are finite.
    pub fn is_closed(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
    }
}

/// Tunables for a new camera, usually taken from
/// [`GameConfig`](crate::resources::gameconfig::GameConfig).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub smoothing: f32,
    pub smoothing_mode: SmoothingMode,
    pub viewport: Vec2,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            smoothing: DEFAULT_SMOOTHING,
            smoothing_mode: SmoothingMode::PerTick,
            viewport: Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

/// ECS resource holding the single camera of a runtime.
///
/// Inserted once by [`Runtime::new`](crate::game::Runtime::new), advanced by
/// [`update_camera`](crate::systems::camera::update_camera) and read by the
/// visibility, debug and render systems.
#[derive(Resource)]
pub struct CameraController {
    position: Vec2,
    target: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    smoothing: f32,
    smoothing_mode: SmoothingMode,
    viewport: Vec2,
    bounds: CameraBounds,
    shake: Shake,
    transitions: Vec<Transition>,
    follow: Option<Follow>,
    clock: Arc<dyn Clock>,
    rng: fastrand::Rng,
}

impl CameraController {
    /// Camera with default settings reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_settings(CameraSettings::default(), clock)
    }

    pub fn with_settings(settings: CameraSettings, clock: Arc<dyn Clock>) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            smoothing: DEFAULT_SMOOTHING,
            smoothing_mode: SmoothingMode::PerTick,
            viewport: Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            bounds: CameraBounds::UNBOUNDED,
            shake: Shake::default(),
            transitions: Vec::new(),
            follow: None,
            clock,
            rng: fastrand::Rng::new(),
        };
        camera.apply_settings(&settings);
        camera
    }

    /// Seed the shake jitter for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    /// Re-apply zoom limits, smoothing and viewport. Current zoom is re-clamped.
    pub fn apply_settings(&mut self, settings: &CameraSettings) {
        self.set_zoom_limits(settings.min_zoom, settings.max_zoom);
        self.set_smoothing(settings.smoothing);
        self.set_smoothing_mode(settings.smoothing_mode);
        self.set_viewport(settings.viewport.x, settings.viewport.y);
    }

    // ---------------------------------------------------------------------
    // Position, zoom and bounds
    // ---------------------------------------------------------------------

    /// Set the target position. The position follows over the next updates.
    ///
    /// A non-finite coordinate leaves that axis of the target unchanged.
    pub fn set_position(&mut self, x: f32, y: f32) {
        if x.is_finite() {
            self.target.x = x;
        }
        if y.is_finite() {
            self.target.y = y;
        }
        self.apply_bounds();
    }

    /// Set the zoom immediately, clamped to the zoom limits. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);
    }

    /// Add `delta` to the zoom (mouse wheel step).
    pub fn zoom_by(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    /// Move the target by a screen-space drag distance.
    ///
    /// Dragging right moves the view left, so the target moves opposite to
    /// the drag, scaled to world units.
    pub fn pan_by(&mut self, screen_dx: f32, screen_dy: f32) {
        let dx = if screen_dx.is_finite() { screen_dx } else { 0.0 };
        let dy = if screen_dy.is_finite() { screen_dy } else { 0.0 };
        self.target -= Vec2::new(dx, dy) / self.zoom;
        self.apply_bounds();
    }

    /// Replace the zoom limits. Swapped limits are reordered; NaN keeps the
    /// previous limit. Current zoom is re-clamped.
    pub fn set_zoom_limits(&mut self, min_zoom: f32, max_zoom: f32) {
        let min_zoom = if min_zoom.is_finite() && min_zoom > 0.0 {
            min_zoom
        } else {
            self.min_zoom
        };
        let max_zoom = if max_zoom.is_finite() && max_zoom > 0.0 {
            max_zoom
        } else {
            self.max_zoom
        };
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self.set_zoom(self.zoom);
    }

    /// Store new bounds and re-clamp the target. The position is not clamped
    /// and converges into the bounds over the next updates.
    pub fn set_bounds(&mut self, min_x: f32, max_x: f32, min_y: f32, max_y: f32) {
        self.bounds = CameraBounds::new(min_x, max_x, min_y, max_y);
        self.apply_bounds();
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = CameraBounds::UNBOUNDED;
    }

    fn apply_bounds(&mut self) {
        self.target = self.bounds.clamp(self.target);
    }

    /// Update the viewport size in screen pixels. Non-positive or
    /// non-finite sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width.is_finite() && width > 0.0 {
            self.viewport.x = width;
        }
        if height.is_finite() && height > 0.0 {
            self.viewport.y = height;
        }
    }

    /// Set the smoothing factor, clamped to `(0.0, 1.0]`. Values `<= 0.0`
    /// and NaN are ignored.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        if smoothing.is_nan() || smoothing <= 0.0 {
            return;
        }
        self.smoothing = smoothing.min(1.0);
    }

    pub fn set_smoothing_mode(&mut self, mode: SmoothingMode) {
        match mode {
            SmoothingMode::TimeNormalized { rate } if !(rate.is_finite() && rate > 0.0) => {
                debug!("ignoring time-normalized smoothing with rate {}", rate);
            }
            _ => self.smoothing_mode = mode,
        }
    }

    // ---------------------------------------------------------------------
    // Follow
    // ---------------------------------------------------------------------

    /// Follow a shared object. The camera keeps only a weak reference.
    pub fn follow<T>(&mut self, target: &Arc<T>, offset_x: f32, offset_y: f32, smoothing: f32)
    where
        T: HasPosition + Send + Sync + 'static,
    {
        let weak = Arc::downgrade(target);
        let weak: Weak<dyn HasPosition + Send + Sync> = weak;
        self.start_follow(FollowTarget::Shared(weak), offset_x, offset_y, smoothing);
    }

    /// Follow an ECS entity's [`MapPosition`](crate::components::mapposition::MapPosition).
    pub fn follow_entity(&mut self, entity: Entity, offset_x: f32, offset_y: f32, smoothing: f32) {
        self.start_follow(FollowTarget::Entity(entity), offset_x, offset_y, smoothing);
    }

    fn start_follow(&mut self, target: FollowTarget, offset_x: f32, offset_y: f32, smoothing: f32) {
        let offset = Vec2::new(offset_x, offset_y);
        let offset = if offset.is_finite() { offset } else { Vec2::ZERO };
        self.follow = Some(Follow { target, offset });
        self.set_smoothing(smoothing);
    }

    /// Stop following. The camera keeps smoothing toward the last target.
    pub fn stop_follow(&mut self) {
        self.follow = None;
    }

    pub fn is_following(&self) -> bool {
        self.follow.is_some()
    }

    // ---------------------------------------------------------------------
    // Shake and transitions
    // ---------------------------------------------------------------------

    /// Start a shake now, replacing any shake in progress.
    pub fn shake(&mut self, intensity: f32, duration_secs: f32) {
        self.shake = Shake::start(intensity, duration_secs, self.clock.now_ms());
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.active
    }

    /// Queue an eased move from the current position to `(x, y)`.
    ///
    /// Queued transitions all run at once. Each tick they are applied oldest
    /// first and every one overwrites the position, so the newest running
    /// transition decides where the camera ends up on that tick.
    pub fn start_transition(&mut self, x: f32, y: f32, duration_secs: f32, easing: Easing) {
        let to = Vec2::new(x, y);
        if !to.is_finite() {
            debug!("ignoring transition to non-finite point {:?}", to);
            return;
        }
        self.transitions.push(Transition::new(
            self.position,
            to,
            duration_secs,
            easing,
            self.clock.now_ms(),
        ));
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    // ---------------------------------------------------------------------
    // Per-tick update
    // ---------------------------------------------------------------------

    /// Advance the camera one tick. Entity follow targets are not resolved.
    pub fn update(&mut self, dt: f32) {
        self.update_with(dt, |_| None);
    }

    /// Advance the camera one tick, resolving entity follow targets with
    /// `resolve_entity`.
    pub fn update_with<F>(&mut self, dt: f32, mut resolve_entity: F)
    where
        F: FnMut(Entity) -> Option<Vec2>,
    {
        let now = self.clock.now_ms();

        let resolved = self
            .follow
            .as_ref()
            .map(|follow| (follow.resolve(&mut resolve_entity), follow.offset));
        match resolved {
            Some((Resolved::At(pos), offset)) => {
                self.target = pos + offset - self.viewport / (2.0 * self.zoom);
                self.apply_bounds();
            }
            Some((Resolved::Dropped, _)) => {
                warn!("camera follow target was dropped, releasing it");
                self.follow = None;
            }
            Some((Resolved::Missing, _)) | None => {}
        }

        let factor = match self.smoothing_mode {
            SmoothingMode::PerTick => self.smoothing,
            SmoothingMode::TimeNormalized { rate } => {
                let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
                1.0 - (-rate * dt).exp()
            }
        };
        self.position += (self.target - self.position) * factor;

        if self.shake.active {
            match self.shake.remaining(now) {
                Some(remaining) => {
                    let strength = self.shake.intensity * remaining;
                    self.position.x += (self.rng.f32() - 0.5) * strength;
                    self.position.y += (self.rng.f32() - 0.5) * strength;
                }
                None => self.shake.active = false,
            }
        }

        let position = &mut self.position;
        self.transitions.retain(|tr| match tr.step(now) {
            Step::InFlight(p) => {
                *position = p;
                true
            }
            Step::Done(p) => {
                *position = p;
                false
            }
        });
    }

    // ---------------------------------------------------------------------
    // Accessors and transforms
    // ---------------------------------------------------------------------

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_limits(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    pub fn smoothing_mode(&self) -> SmoothingMode {
        self.smoothing_mode
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn bounds(&self) -> CameraBounds {
        self.bounds
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport / 2.0
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport / 2.0) / self.zoom + self.position
    }

    /// World-space rectangle `(min, max)` covered by the viewport.
    pub fn view_rect(&self) -> (Vec2, Vec2) {
        let tl = self.screen_to_world(Vec2::ZERO);
        let br = self.screen_to_world(self.viewport);
        (tl.min(br), tl.max(br))
    }

    pub fn is_point_in_view(&self, p: Vec2) -> bool {
        let (min, max) = self.view_rect();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// AABB overlap against the view. Touching edges count as visible.
    pub fn is_rect_in_view(&self, min: Vec2, max: Vec2) -> bool {
        let (view_min, view_max) = self.view_rect();
        !(max.x < view_min.x || min.x > view_max.x || max.y < view_min.y || min.y > view_max.y)
    }

    /// Inclusive tile index range `(start_x, start_y, end_x, end_y)` covering
    /// the view for a grid of `tile_w` x `tile_h` tiles anchored at the world
    /// origin. Returns `None` for degenerate tile sizes.
    pub fn visible_tile_range(&self, tile_w: f32, tile_h: f32) -> Option<(i32, i32, i32, i32)> {
        if !(tile_w.is_finite() && tile_w > 0.0 && tile_h.is_finite() && tile_h > 0.0) {
            return None;
        }
        let (min, max) = self.view_rect();
        Some((
            (min.x / tile_w).floor() as i32,
            (min.y / tile_h).floor() as i32,
            (max.x / tile_w).ceil() as i32,
            (max.y / tile_h).ceil() as i32,
        ))
    }
}
