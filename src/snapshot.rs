//! Conversion of tracked raw samples into display records in the surface's
//! local coordinate space.

use crate::model::{Point, TouchKind, TouchSample, TouchTracker};
use crate::util::two_decimal;

/// Injected coordinate-space converter: maps a client-space point into the
/// surface's local space by subtracting the surface origin. Stateless and
/// injective.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalSpace {
    pub origin: Point,
}

impl LocalSpace {
    /// The identity conversion (origin at the client-space origin).
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self {
            origin: Point { x, y },
        }
    }

    pub fn convert(&self, p: Point) -> Point {
        Point {
            x: p.x - self.origin.x,
            y: p.y - self.origin.y,
        }
    }
}

/// Immutable per-touch display record, rebuilt from the tracked set on every
/// published change. Keyed by the stable host touch id so the view layer can
/// diff marker nodes frame to frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayTouch {
    pub id: i32,
    pub kind: TouchKind,
    pub location: Point,
    pub previous_location: Option<Point>,
    pub predicted_locations: Vec<Point>,
    pub major_radius: f64,
    pub force: f64,
    pub altitude_angle: f64,
    pub azimuth_angle: f64,
    pub roll_angle: f64,
}

impl DisplayTouch {
    pub fn from_sample(sample: &TouchSample, space: &LocalSpace) -> Self {
        Self {
            id: sample.id,
            kind: sample.kind,
            location: space.convert(sample.position),
            previous_location: sample.previous_position.map(|p| space.convert(p)),
            predicted_locations: sample.predicted.iter().map(|p| space.convert(*p)).collect(),
            major_radius: sample.major_radius,
            force: sample.force,
            altitude_angle: sample.altitude_angle,
            azimuth_angle: sample.azimuth_angle,
            roll_angle: sample.roll_angle,
        }
    }

    pub fn location_text(&self) -> String {
        format!(
            "({}, {})",
            two_decimal(self.location.x),
            two_decimal(self.location.y)
        )
    }

    /// Numeric force only when the device actually reports pressure.
    pub fn force_text(&self, force_available: bool) -> String {
        if force_available {
            two_decimal(self.force)
        } else {
            "(not available)".to_string()
        }
    }

    pub fn altitude_text(&self) -> String {
        format!("{} rad", two_decimal(self.altitude_angle))
    }

    pub fn azimuth_text(&self) -> String {
        format!("{} rad", two_decimal(self.azimuth_angle))
    }

    /// Roll is a stylus-only measurement.
    pub fn roll_text(&self) -> String {
        if self.kind == TouchKind::Stylus {
            format!("{} rad", two_decimal(self.roll_angle))
        } else {
            "(not supported)".to_string()
        }
    }
}

/// Convert the full tracked set into display records, in touch-id order.
pub fn build_display_list(tracker: &TouchTracker, space: &LocalSpace) -> Vec<DisplayTouch> {
    tracker
        .touches
        .values()
        .map(|s| DisplayTouch::from_sample(s, space))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn sample(id: i32, x: f64, y: f64, kind: TouchKind) -> TouchSample {
        TouchSample {
            id,
            kind,
            position: Point { x, y },
            previous_position: None,
            predicted: Vec::new(),
            major_radius: 8.0,
            force: 0.5,
            altitude_angle: FRAC_PI_2,
            azimuth_angle: 0.0,
            roll_angle: 0.0,
        }
    }

    #[test]
    fn identity_conversion_preserves_coordinates() {
        let s = sample(1, 10.0, 20.0, TouchKind::Finger);
        let d = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert_eq!(d.location, Point { x: 10.0, y: 20.0 });
    }

    #[test]
    fn conversion_subtracts_surface_origin() {
        let mut s = sample(1, 110.0, 220.0, TouchKind::Finger);
        s.previous_position = Some(Point { x: 100.0, y: 200.0 });
        s.predicted = vec![Point { x: 115.0, y: 230.0 }];
        let d = DisplayTouch::from_sample(&s, &LocalSpace::at(100.0, 200.0));
        assert_eq!(d.location, Point { x: 10.0, y: 20.0 });
        assert_eq!(d.previous_location, Some(Point { x: 0.0, y: 0.0 }));
        assert_eq!(d.predicted_locations, vec![Point { x: 15.0, y: 30.0 }]);
    }

    #[test]
    fn zero_predictions_stay_an_empty_sequence() {
        let s = sample(1, 1.0, 2.0, TouchKind::Finger);
        let d = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert!(d.predicted_locations.is_empty());
    }

    #[test]
    fn display_id_is_the_stable_host_id() {
        let s = sample(42, 0.0, 0.0, TouchKind::Stylus);
        let d = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert_eq!(d.id, 42);
    }

    #[test]
    fn force_text_is_unavailable_regardless_of_value() {
        let mut s = sample(1, 0.0, 0.0, TouchKind::Finger);
        s.force = 0.73;
        let d = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert_eq!(d.force_text(true), "0.73");
        assert_eq!(d.force_text(false), "(not available)");
    }

    #[test]
    fn roll_text_only_numeric_for_stylus() {
        let mut s = sample(1, 0.0, 0.0, TouchKind::Stylus);
        s.roll_angle = 1.5;
        let stylus = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert_eq!(stylus.roll_text(), "1.50 rad");
        s.kind = TouchKind::Finger;
        let finger = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert_eq!(finger.roll_text(), "(not supported)");
        s.kind = TouchKind::Other;
        let other = DisplayTouch::from_sample(&s, &LocalSpace::identity());
        assert_eq!(other.roll_text(), "(not supported)");
    }

    #[test]
    fn display_list_follows_touch_id_order() {
        let mut tracker = TouchTracker::default();
        for id in [9, 2, 5] {
            tracker
                .touches
                .insert(id, sample(id, id as f64, 0.0, TouchKind::Finger));
        }
        let list = build_display_list(&tracker, &LocalSpace::identity());
        let ids: Vec<i32> = list.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
