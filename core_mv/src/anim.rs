//! Robot indicator animation: idle pulsing ring, position tween and
//! orientation tween.
//!
//! Nothing here schedules anything. Every animation is a start instant plus
//! a duration, and [`RobotAnimator::tick`] samples all three against the
//! clock the frame loop passes in, so tests can drive time by hand.

use crate::config::MazeViewConfig;
use core::time::Duration;
use nalgebra::Point2;
use web_time::Instant;

/// Where the robot is facing, from the viewer's point of view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Front,
    Back,
    Left,
    Right,
}

impl Orientation {
    pub fn degrees(self) -> f32 {
        match self {
            Orientation::Front => 0.0,
            Orientation::Right => 90.0,
            Orientation::Back => 180.0,
            Orientation::Left => 270.0,
        }
    }
}

/// Interpolated values the renderer reads every frame.
///
/// Owned by [`RobotAnimator`] and written only from the frame loop. A
/// multi-threaded port would have to put this behind a mutex or hand it to
/// the render pass by message passing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RobotRenderState {
    /// Maze index the robot logically occupies (the tween target).
    pub index: usize,
    /// Current interpolated center position in pixels.
    pub pos: Point2<f32>,
    /// Current interpolated rotation. Normalized into [0, 360) whenever no
    /// orientation tween is in flight.
    pub rotation_degrees: f32,
    pub ring_radius: f32,
    pub ring_alpha: u8,
}

#[derive(Copy, Clone, Debug)]
struct MoveTween {
    from: Point2<f32>,
    to: Point2<f32>,
    start: Instant,
}

#[derive(Copy, Clone, Debug)]
struct TurnTween {
    from_degrees: f32,
    to_degrees: f32,
    start: Instant,
}

/// The decelerate curve the pulsing ring runs on.
fn ease_out(p: f32) -> f32 {
    1.0 - (1.0 - p) * (1.0 - p)
}

/// Completed fraction of a one-shot animation, clamped to [0, 1].
fn fraction(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (now.saturating_duration_since(start).as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Signed rotation from `from` to `to`, normalized into (-180, 180] so the
/// robot always turns the short way around. Turning from 270 to 0 goes
/// through 360 instead of backward through 180.
fn shortest_delta(from_degrees: f32, to_degrees: f32) -> f32 {
    let mut delta = (to_degrees - from_degrees) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Drives the three independent robot animations and owns their shared
/// render state.
#[derive(Clone, Debug)]
pub struct RobotAnimator {
    move_duration: Duration,
    ring_duration: Duration,
    ring_size_multiplier: f32,

    ring_start: Instant,
    move_tween: Option<MoveTween>,
    turn_tween: Option<TurnTween>,

    orientation: Orientation,
    state: RobotRenderState,
}

impl RobotAnimator {
    pub fn new(config: &MazeViewConfig, index: usize, pos: Point2<f32>, now: Instant) -> Self {
        Self {
            move_duration: config.move_animation_duration,
            ring_duration: config.ring_animation_duration,
            ring_size_multiplier: config.ring_size_multiplier,

            ring_start: now,
            move_tween: None,
            turn_tween: None,

            orientation: Orientation::default(),
            state: RobotRenderState {
                index,
                pos,
                rotation_degrees: 0.0,
                ring_radius: 0.0,
                ring_alpha: 255,
            },
        }
    }

    pub fn state(&self) -> &RobotRenderState {
        &self.state
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Moves the indicator to a new cell. Animated moves start from the
    /// current interpolated position, so superseding an in-flight tween never
    /// jumps; non-animated moves write the target directly.
    pub fn set_position(&mut self, index: usize, target: Point2<f32>, animated: bool, now: Instant) {
        self.state.index = index;

        if !animated {
            self.move_tween = None;
            self.state.pos = target;
            return;
        }

        self.move_tween = Some(MoveTween {
            from: self.state.pos,
            to: target,
            start: now,
        });
    }

    /// Turns the indicator to face `orientation`, the short way around.
    pub fn set_orientation(&mut self, orientation: Orientation, animated: bool, now: Instant) {
        self.orientation = orientation;

        if !animated {
            self.turn_tween = None;
            self.state.rotation_degrees = orientation.degrees();
            return;
        }

        let from = self.state.rotation_degrees;
        let delta = shortest_delta(from, orientation.degrees());
        self.turn_tween = Some(TurnTween {
            from_degrees: from,
            to_degrees: from + delta,
            start: now,
        });
    }

    /// Viewport size changed: every pixel-derived value is stale. Both
    /// one-shot tweens are cancelled by pinning their end state (the position
    /// snaps to the freshly computed target center), and the ring restarts
    /// from zero progress because its radius depends on the cell size.
    pub fn on_resize(&mut self, target: Point2<f32>, now: Instant) {
        self.move_tween = None;
        self.state.pos = target;

        if let Some(turn) = self.turn_tween.take() {
            self.state.rotation_degrees = turn.to_degrees.rem_euclid(360.0);
        }

        self.ring_start = now;
        self.state.ring_radius = 0.0;
        self.state.ring_alpha = 255;
    }

    /// Samples all three animations. Called once per frame before drawing;
    /// `robot_radius` is the current pixel radius of the indicator circle.
    pub fn tick(&mut self, now: Instant, robot_radius: f32) {
        // idle ring: infinite repeat, restarting from zero progress
        let cycles = now.saturating_duration_since(self.ring_start).as_secs_f32()
            / self.ring_duration.as_secs_f32();
        let eased = ease_out(cycles.fract());
        self.state.ring_radius = eased * robot_radius * self.ring_size_multiplier;
        self.state.ring_alpha = (255.0 * (1.0 - eased)) as u8;

        if let Some(tween) = self.move_tween {
            let f = fraction(tween.start, self.move_duration, now);
            self.state.pos = tween.from + (tween.to - tween.from) * f;
            if f >= 1.0 {
                self.state.pos = tween.to;
                self.move_tween = None;
            }
        }

        if let Some(tween) = self.turn_tween {
            let f = fraction(tween.start, self.move_duration, now);
            self.state.rotation_degrees =
                tween.from_degrees + (tween.to_degrees - tween.from_degrees) * f;
            if f >= 1.0 {
                self.state.rotation_degrees = tween.to_degrees.rem_euclid(360.0);
                self.turn_tween = None;
            }
        }
    }
}
