//! Core data model for the touch inspector: raw touch samples and the
//! per-gesture-session tracker that accumulates them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchKind {
    Finger,
    Stylus,
    Other,
}

impl TouchKind {
    pub fn label(&self) -> &'static str {
        match self {
            TouchKind::Finger => "Finger",
            TouchKind::Stylus => "Stylus",
            TouchKind::Other => "Other",
        }
    }
}

/// Coarse lifecycle of a multi-touch gesture session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    pub fn label(&self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::Began => "began",
            GesturePhase::Changed => "changed",
            GesturePhase::Ended => "ended",
            GesturePhase::Cancelled => "cancelled",
        }
    }

    /// Ended and cancelled stay put until the host resets the tracker.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Latest raw sample for one touch, in client (viewport) coordinates.
/// Scalar measurements are copied verbatim off the host event; only
/// `previous_position` is maintained by the tracker itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    /// Stable host pointer id; survives across samples of the same contact.
    pub id: i32,
    pub kind: TouchKind,
    pub position: Point,
    /// Position of the previous sample of this contact; None on first contact.
    pub previous_position: Option<Point>,
    /// Forward-estimated positions for latency compensation; may be empty.
    pub predicted: Vec<Point>,
    /// Major radius of the contact ellipse, in CSS pixels.
    pub major_radius: f64,
    pub force: f64,
    /// Radians from the surface plane; π/2 is perpendicular.
    pub altitude_angle: f64,
    /// Radians in [0, 2π), measured in the surface's axes.
    pub azimuth_angle: f64,
    /// Radians; only meaningful for stylus contacts.
    pub roll_angle: f64,
}

/// Per-gesture-session accumulator: the live set of touches keyed by host id,
/// plus the coarse session phase. All mutation goes through [`TrackerAction`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchTracker {
    pub touches: BTreeMap<i32, TouchSample>,
    pub phase: GesturePhase,
}

#[derive(Clone, Debug)]
pub enum TrackerAction {
    Began(Vec<TouchSample>),
    Moved(Vec<TouchSample>),
    Ended(Vec<TouchSample>),
    Cancelled(Vec<TouchSample>),
    /// Asynchronous refinement of estimated measurements (e.g. pressure);
    /// refreshes samples without advancing the session phase.
    EstimatedUpdate(Vec<TouchSample>),
    Reset,
}

/// Union one incoming sample into the tracked set. A movement union carries
/// the replaced sample's position over as the new previous position; a
/// refinement union keeps the previous position it already had.
fn absorb(touches: &mut BTreeMap<i32, TouchSample>, mut sample: TouchSample, movement: bool) {
    if let Some(prev) = touches.get(&sample.id) {
        sample.previous_position = if movement {
            Some(prev.position)
        } else {
            prev.previous_position
        };
    }
    touches.insert(sample.id, sample);
}

impl Reducible for TouchTracker {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use TrackerAction::*;
        let mut new = (*self).clone();
        match action {
            Began(samples) => {
                new.phase = if new.touches.is_empty() {
                    GesturePhase::Began
                } else {
                    GesturePhase::Changed
                };
                for s in samples {
                    absorb(&mut new.touches, s, true);
                }
            }
            Moved(samples) => {
                for s in samples {
                    absorb(&mut new.touches, s, true);
                }
                new.phase = GesturePhase::Changed;
            }
            Ended(samples) => {
                for s in &samples {
                    new.touches.remove(&s.id);
                }
                if new.touches.is_empty() {
                    new.phase = GesturePhase::Ended;
                }
            }
            Cancelled(samples) => {
                for s in &samples {
                    new.touches.remove(&s.id);
                }
                if new.touches.is_empty() {
                    new.phase = GesturePhase::Cancelled;
                }
            }
            EstimatedUpdate(samples) => {
                for s in samples {
                    absorb(&mut new.touches, s, false);
                }
            }
            Reset => {
                new.touches.clear();
                new.phase = GesturePhase::Idle;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i32, x: f64, y: f64) -> TouchSample {
        TouchSample {
            id,
            kind: TouchKind::Finger,
            position: Point { x, y },
            previous_position: None,
            predicted: Vec::new(),
            major_radius: 8.0,
            force: 0.5,
            altitude_angle: std::f64::consts::FRAC_PI_2,
            azimuth_angle: 0.0,
            roll_angle: 0.0,
        }
    }

    fn reduce(state: TouchTracker, action: TrackerAction) -> TouchTracker {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn tracked_set_is_unions_minus_removals() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 0.0, 0.0)]));
        t = reduce(t, TrackerAction::Moved(vec![sample(2, 5.0, 5.0)]));
        t = reduce(t, TrackerAction::Began(vec![sample(3, 9.0, 9.0)]));
        t = reduce(t, TrackerAction::Ended(vec![sample(1, 0.0, 0.0)]));
        let ids: Vec<i32> = t.touches.keys().copied().collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn began_only_from_empty_set() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 0.0, 0.0)]));
        assert_eq!(t.phase, GesturePhase::Began);
        t = reduce(t, TrackerAction::Began(vec![sample(2, 1.0, 1.0)]));
        assert_eq!(t.phase, GesturePhase::Changed);
    }

    #[test]
    fn move_sets_changed_and_unions_unknown_touches() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 0.0, 0.0)]));
        t = reduce(t, TrackerAction::Moved(vec![sample(7, 3.0, 4.0)]));
        assert_eq!(t.phase, GesturePhase::Changed);
        assert!(t.touches.contains_key(&7));
    }

    #[test]
    fn terminal_phase_only_when_set_empties() {
        let mut t = TouchTracker::default();
        t = reduce(
            t,
            TrackerAction::Began(vec![sample(1, 0.0, 0.0), sample(2, 1.0, 1.0)]),
        );
        t = reduce(t, TrackerAction::Moved(vec![sample(1, 2.0, 2.0)]));
        t = reduce(t, TrackerAction::Ended(vec![sample(1, 2.0, 2.0)]));
        assert_eq!(t.phase, GesturePhase::Changed);
        t = reduce(t, TrackerAction::Ended(vec![sample(2, 1.0, 1.0)]));
        assert_eq!(t.phase, GesturePhase::Ended);
        assert!(t.phase.is_terminal());
    }

    #[test]
    fn cancel_that_empties_set_is_cancelled() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 0.0, 0.0)]));
        t = reduce(t, TrackerAction::Cancelled(vec![sample(1, 0.0, 0.0)]));
        assert_eq!(t.phase, GesturePhase::Cancelled);
        assert!(t.touches.is_empty());
    }

    #[test]
    fn reset_yields_empty_idle_from_any_state() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 0.0, 0.0)]));
        t = reduce(t, TrackerAction::Moved(vec![sample(1, 2.0, 3.0)]));
        t = reduce(t, TrackerAction::Reset);
        assert!(t.touches.is_empty());
        assert_eq!(t.phase, GesturePhase::Idle);
    }

    #[test]
    fn movement_union_carries_previous_position() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 10.0, 20.0)]));
        assert_eq!(t.touches[&1].previous_position, None);
        t = reduce(t, TrackerAction::Moved(vec![sample(1, 12.0, 24.0)]));
        assert_eq!(
            t.touches[&1].previous_position,
            Some(Point { x: 10.0, y: 20.0 })
        );
    }

    #[test]
    fn estimated_update_refines_without_phase_or_ghost_change() {
        let mut t = TouchTracker::default();
        t = reduce(t, TrackerAction::Began(vec![sample(1, 10.0, 20.0)]));
        t = reduce(t, TrackerAction::Moved(vec![sample(1, 12.0, 24.0)]));
        let phase_before = t.phase;
        let mut refined = sample(1, 12.0, 24.0);
        refined.force = 0.9;
        t = reduce(t, TrackerAction::EstimatedUpdate(vec![refined]));
        assert_eq!(t.phase, phase_before);
        assert_eq!(t.touches[&1].force, 0.9);
        assert_eq!(
            t.touches[&1].previous_position,
            Some(Point { x: 10.0, y: 20.0 })
        );
    }
}
