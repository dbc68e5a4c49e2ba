//! Horizontal drag interpretation for the swipe card.
//!
//! Tracks displacement from the grab point and, on release, commits to at
//! most one decision per gesture: right of the threshold is a like, left is
//! a dislike, anything in between snaps the card back with no decision.

use kino_model::Decision;

/// Horizontal distance (logical pixels) a drag must travel to commit.
pub const SWIPE_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeGesture {
    origin: Option<f32>,
    current: f32,
    latched: bool,
}

impl SwipeGesture {
    /// Start tracking a drag at pointer position `x`.
    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x);
        self.current = x;
        self.latched = false;
    }

    /// Update the pointer position. Ignored while no gesture is active.
    pub fn move_to(&mut self, x: f32) {
        if self.origin.is_some() {
            self.current = x;
        }
    }

    /// Current horizontal displacement, zero when idle.
    pub fn offset(&self) -> f32 {
        match self.origin {
            Some(origin) => self.current - origin,
            None => 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// End the gesture. Returns the committed decision, if any. The latch
    /// guarantees one decision per begin/release cycle even if release fires
    /// more than once.
    pub fn release(&mut self) -> Option<Decision> {
        let origin = self.origin.take()?;
        if self.latched {
            return None;
        }
        self.latched = true;

        let dx = self.current - origin;
        if dx > SWIPE_THRESHOLD {
            Some(Decision::Like)
        } else if dx < -SWIPE_THRESHOLD {
            Some(Decision::Dislike)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_right_past_threshold_is_a_like() {
        let mut g = SwipeGesture::default();
        g.begin(200.0);
        g.move_to(200.0 + SWIPE_THRESHOLD + 1.0);
        assert_eq!(g.release(), Some(Decision::Like));
    }

    #[test]
    fn drag_left_past_threshold_is_a_dislike() {
        let mut g = SwipeGesture::default();
        g.begin(200.0);
        g.move_to(200.0 - SWIPE_THRESHOLD - 1.0);
        assert_eq!(g.release(), Some(Decision::Dislike));
    }

    #[test]
    fn short_drag_snaps_back_with_no_decision() {
        let mut g = SwipeGesture::default();
        g.begin(200.0);
        g.move_to(250.0);
        assert_eq!(g.release(), None);
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn exactly_at_threshold_does_not_commit() {
        let mut g = SwipeGesture::default();
        g.begin(0.0);
        g.move_to(SWIPE_THRESHOLD);
        assert_eq!(g.release(), None);
    }

    #[test]
    fn one_decision_per_gesture() {
        let mut g = SwipeGesture::default();
        g.begin(0.0);
        g.move_to(500.0);
        assert_eq!(g.release(), Some(Decision::Like));
        // A stray second release emits nothing.
        assert_eq!(g.release(), None);

        // A fresh grab arms the gesture again.
        g.begin(0.0);
        g.move_to(-500.0);
        assert_eq!(g.release(), Some(Decision::Dislike));
    }

    #[test]
    fn moves_without_a_grab_are_ignored() {
        let mut g = SwipeGesture::default();
        g.move_to(400.0);
        assert_eq!(g.offset(), 0.0);
        assert_eq!(g.release(), None);
    }
}
