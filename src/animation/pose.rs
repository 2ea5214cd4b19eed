//! Idle motion and the dance state machine.
//!
//! All time values are offsets from the driving [`crate::Clock`]'s origin. Callers sample the
//! clock once per frame and pass the same `now` to every query below.

use std::time::Duration;

use crate::catalog::model::CategoryChoice;

/// Length of one dance session.
pub const DANCE_DURATION: Duration = Duration::from_millis(3000);

/// `(right arm, left arm)` angles in degrees, one per sixth of [`DANCE_DURATION`].
pub const DANCE_MOVES: [(f64, f64); 6] = [
    (30.0, 140.0),
    (140.0, 30.0),
    (80.0, 180.0),
    (180.0, 80.0),
    (20.0, 20.0),
    (60.0, 60.0),
];

/// Time each dance move is held.
pub const MOVE_DURATION: Duration = Duration::from_millis(3000 / DANCE_MOVES.len() as u64);

/// Instantaneous stance of the character.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Right arm angle in degrees.
    pub right_arm_deg: f64,
    /// Left arm angle in degrees.
    pub left_arm_deg: f64,
    /// Torso rotation in degrees.
    pub torso_tilt_deg: f64,
    /// Shoulder shrug, `0..=1` under idle motion.
    pub shrug: f64,
}

impl Pose {
    /// Idle sway at `t` seconds.
    pub fn idle(t: f64) -> Self {
        Self {
            right_arm_deg: 100.0 + 50.0 * (t / 0.8).cos(),
            left_arm_deg: 135.0 + 10.0 * (t * 1.5).sin(),
            torso_tilt_deg: t.cos() * 0.5 * 10.0,
            shrug: (t.cos() + 1.0) / 2.0,
        }
    }

    /// Idle pose at clock offset `now`.
    pub fn idle_at(now: Duration) -> Self {
        Self::idle(now.as_secs_f64())
    }
}

/// A running dance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DanceSession {
    /// Clock offset at which the dance was triggered.
    pub started_at: Duration,
}

impl DanceSession {
    /// Time since the session started; zero if `now` precedes the start.
    pub fn elapsed(self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// `true` while `elapsed < DANCE_DURATION`.
    pub fn is_active(self, now: Duration) -> bool {
        self.elapsed(now) < DANCE_DURATION
    }

    /// Index into [`DANCE_MOVES`], clamped to the last move.
    pub fn move_index(self, now: Duration) -> usize {
        let idx = self.elapsed(now).as_nanos() / MOVE_DURATION.as_nanos();
        usize::try_from(idx)
            .unwrap_or(usize::MAX)
            .min(DANCE_MOVES.len() - 1)
    }

    /// `(right, left)` arm angles of the current move.
    pub fn current_move(self, now: Duration) -> (f64, f64) {
        DANCE_MOVES[self.move_index(now)]
    }
}

/// Everything a character carries between frames: the category choice and the last dance.
///
/// Pose derivation is a pure function of `(state, now)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterState {
    /// Selected art.
    pub choice: CategoryChoice,
    last_dance: Option<DanceSession>,
}

impl CharacterState {
    /// Fresh state that has never danced.
    pub fn new(choice: CategoryChoice) -> Self {
        Self {
            choice,
            last_dance: None,
        }
    }

    /// Start a dance at `now` unless one is already running. Returns whether a dance started.
    ///
    /// A running dance is neither restarted nor extended.
    pub fn dance(&mut self, now: Duration) -> bool {
        if self.is_dancing(now) {
            tracing::trace!(?now, "dance already running");
            return false;
        }
        tracing::debug!(?now, "dance started");
        self.last_dance = Some(DanceSession { started_at: now });
        true
    }

    /// Whether a dance is active at `now`.
    pub fn is_dancing(&self, now: Duration) -> bool {
        self.active_dance(now).is_some()
    }

    /// Start time of the most recent dance, active or not.
    pub fn last_dance_start(&self) -> Option<Duration> {
        self.last_dance.map(|d| d.started_at)
    }

    /// The session running at `now`, if any.
    pub fn active_dance(&self, now: Duration) -> Option<DanceSession> {
        self.last_dance.filter(|d| d.is_active(now))
    }

    /// Pose at `now`: dance arm angles while dancing, idle motion otherwise. Torso tilt and
    /// shrug always follow idle motion.
    pub fn pose_at(&self, now: Duration) -> Pose {
        let idle = Pose::idle_at(now);
        match self.active_dance(now) {
            Some(session) => {
                let (right, left) = session.current_move(now);
                Pose {
                    right_arm_deg: right,
                    left_arm_deg: left,
                    ..idle
                }
            }
            None => idle,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
