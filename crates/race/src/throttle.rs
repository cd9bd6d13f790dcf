//! Frame pacing for one race participant.
//!
//! A single speed value drives two budgets: a target frame interval
//! (2 fps at speed 1, 60 fps at speed 100) and an operations-per-frame
//! budget (1 at speed 1, 5000 at speed 100). A frame is due when either
//! budget runs out, so tiny inputs at high speed do not redraw on every
//! step and huge inputs at high speed still redraw regularly.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::cancel::{self, Cancelled};
use crate::speed::{Speed, SpeedDial};

const MIN_FPS: f64 = 2.0;
const MAX_FPS: f64 = 60.0;
const MAX_OPS_PER_FRAME: f64 = 5000.0;

#[derive(Debug)]
pub struct FrameThrottle {
    speed: Speed,
    frames_per_second: f64,
    frame: Duration,
    ops_per_frame: u32,
    ops: u32,
    last_render: Instant,
}

impl FrameThrottle {
    pub fn new(speed: Speed) -> Self {
        let mut throttle = Self {
            speed,
            frames_per_second: MIN_FPS,
            frame: Duration::ZERO,
            ops_per_frame: 1,
            ops: 0,
            last_render: Instant::now(),
        };
        throttle.configure(speed);
        throttle
    }

    /// Recomputes both budgets from `speed`. Counters are left untouched.
    pub fn configure(&mut self, speed: Speed) {
        let normalized = speed.normalized();
        self.speed = speed;
        self.frames_per_second = MIN_FPS + (MAX_FPS - MIN_FPS) * normalized;
        self.frame = Duration::from_secs_f64(1.0 / self.frames_per_second);
        self.ops_per_frame = (1.0 + (MAX_OPS_PER_FRAME - 1.0) * normalized).round() as u32;
    }

    /// Picks up a dial change; a no-op while the dial is unchanged.
    #[inline]
    pub fn follow(&mut self, dial: &SpeedDial) {
        let speed = dial.get();
        if speed != self.speed {
            self.configure(speed);
        }
    }

    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    #[inline]
    pub fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        self.frame
    }

    #[inline]
    pub fn ops_per_frame(&self) -> u32 {
        self.ops_per_frame
    }

    /// Counts one operation and reports whether a frame is due.
    #[inline]
    pub fn tick(&mut self) -> bool {
        self.ops = self.ops.saturating_add(1);
        self.ops >= self.ops_per_frame || self.last_render.elapsed() >= self.frame
    }

    /// Waits out the rest of the current frame, then starts a new one.
    ///
    /// Returns `Err(Cancelled)` as soon as `cancel` fires; the frame is not
    /// reset in that case.
    pub async fn wait_frame(&mut self, cancel: &CancellationToken) -> Result<(), Cancelled> {
        let remaining = self.frame.saturating_sub(self.last_render.elapsed());
        cancel::pause(remaining, cancel).await?;
        self.reset();
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        self.ops = 0;
        self.last_render = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(value: u8) -> Speed {
        Speed::new(value).unwrap()
    }

    #[test]
    fn slowest_speed_budgets() {
        let throttle = FrameThrottle::new(Speed::MIN);
        assert_eq!(throttle.frames_per_second(), 2.0);
        assert_eq!(throttle.ops_per_frame(), 1);
        assert_eq!(throttle.frame_interval(), Duration::from_millis(500));
    }

    #[test]
    fn fastest_speed_budgets() {
        let throttle = FrameThrottle::new(Speed::MAX);
        assert!((throttle.frames_per_second() - 60.0).abs() < 1e-9);
        assert_eq!(throttle.ops_per_frame(), 5000);
        let frame_ms = throttle.frame_interval().as_secs_f64() * 1000.0;
        assert!((frame_ms - 1000.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn middle_speed_rounds_ops_budget() {
        // normalized = 49/99, ops = round(1 + 4999 * 49 / 99) = 2475
        let throttle = FrameThrottle::new(speed(50));
        assert_eq!(throttle.ops_per_frame(), 2475);
        let expected_fps = 2.0 + 58.0 * 49.0 / 99.0;
        assert!((throttle.frames_per_second() - expected_fps).abs() < 1e-9);
    }

    #[test]
    fn budgets_grow_with_speed() {
        let mut previous = FrameThrottle::new(Speed::MIN);
        for value in 2..=100 {
            let next = FrameThrottle::new(speed(value));
            assert!(next.ops_per_frame() >= previous.ops_per_frame());
            assert!(next.frame_interval() < previous.frame_interval());
            previous = next;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn op_budget_gates_frames_while_time_stands_still() {
        let token = CancellationToken::new();
        let mut throttle = FrameThrottle::new(speed(2));
        let budget = throttle.ops_per_frame();
        assert!(budget > 1);

        for _ in 0..3 {
            for _ in 1..budget {
                assert!(!throttle.tick());
            }
            assert!(throttle.tick());
            throttle.wait_frame(&token).await.unwrap();
            assert_eq!(throttle.ops, 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_frame_time_forces_a_frame() {
        let mut throttle = FrameThrottle::new(Speed::MAX);
        assert!(!throttle.tick());
        tokio::time::advance(throttle.frame_interval()).await;
        assert!(throttle.tick());
    }

    #[tokio::test(start_paused = true)]
    async fn wait_frame_sleeps_only_the_remainder() {
        let token = CancellationToken::new();
        let mut throttle = FrameThrottle::new(Speed::MIN);
        tokio::time::advance(Duration::from_millis(200)).await;
        assert!(throttle.tick());

        let start = Instant::now();
        throttle.wait_frame(&token).await.unwrap();
        let slept = start.elapsed();
        assert!(slept >= Duration::from_millis(300), "slept {slept:?}");
        assert!(slept < Duration::from_millis(302), "slept {slept:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn overdue_frame_does_not_sleep() {
        let token = CancellationToken::new();
        let mut throttle = FrameThrottle::new(Speed::MIN);
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(throttle.tick());

        let start = Instant::now();
        throttle.wait_frame(&token).await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_frame_is_cancellable() {
        let token = CancellationToken::new();
        let mut throttle = FrameThrottle::new(Speed::MIN);
        assert!(throttle.tick());
        token.cancel();
        assert_eq!(throttle.wait_frame(&token).await, Err(Cancelled));
        assert_eq!(throttle.ops, 1);
    }

    #[test]
    fn follow_reconfigures_from_dial() {
        let dial = SpeedDial::new(Speed::MIN);
        let mut throttle = FrameThrottle::new(dial.get());
        assert_eq!(throttle.ops_per_frame(), 1);

        dial.set(Speed::MAX);
        throttle.follow(&dial);
        assert_eq!(throttle.speed(), Speed::MAX);
        assert_eq!(throttle.ops_per_frame(), 5000);
    }
}
