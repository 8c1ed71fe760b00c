use std::f64::consts::{FRAC_PI_2, PI};
use wasm_bindgen::JsValue;

pub fn two_decimal(v: f64) -> String {
    format!("{:.2}", v)
}

/// Altitude angle (radians from the surface plane) from pointer tilt angles,
/// per the Pointer Events tilt-to-spherical conversion. A pen lying flat on
/// either axis has altitude 0; perpendicular is π/2.
pub fn tilt_to_altitude(tilt_x: i32, tilt_y: i32) -> f64 {
    if tilt_x.abs() >= 90 || tilt_y.abs() >= 90 {
        return 0.0;
    }
    let tan_x = (tilt_x as f64).to_radians().tan();
    let tan_y = (tilt_y as f64).to_radians().tan();
    1.0_f64.atan2((tan_x * tan_x + tan_y * tan_y).sqrt())
}

/// Azimuth angle in [0, 2π), measured in the surface's axes, from pointer
/// tilt angles. 0 points along positive x; the zero-tilt pen reports 0.
pub fn tilt_to_azimuth(tilt_x: i32, tilt_y: i32) -> f64 {
    if tilt_x == 0 {
        return if tilt_y > 0 {
            FRAC_PI_2
        } else if tilt_y < 0 {
            3.0 * FRAC_PI_2
        } else {
            0.0
        };
    }
    if tilt_y == 0 {
        return if tilt_x < 0 { PI } else { 0.0 };
    }
    let tan_x = (tilt_x as f64).to_radians().tan();
    let tan_y = (tilt_y as f64).to_radians().tan();
    let az = tan_y.atan2(tan_x);
    if az < 0.0 { az + 2.0 * PI } else { az }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_rounds() {
        assert_eq!(two_decimal(1.0), "1.00");
        assert_eq!(two_decimal(0.567), "0.57");
        assert_eq!(two_decimal(-3.14159), "-3.14");
    }

    #[test]
    fn perpendicular_pen_has_full_altitude() {
        assert!((tilt_to_altitude(0, 0) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn flat_pen_has_zero_altitude() {
        assert_eq!(tilt_to_altitude(90, 0), 0.0);
        assert_eq!(tilt_to_altitude(0, -90), 0.0);
    }

    #[test]
    fn altitude_is_symmetric_in_tilt_sign() {
        assert!((tilt_to_altitude(30, 40) - tilt_to_altitude(-30, -40)).abs() < 1e-12);
    }

    #[test]
    fn azimuth_axis_cases() {
        assert_eq!(tilt_to_azimuth(0, 0), 0.0);
        assert_eq!(tilt_to_azimuth(45, 0), 0.0);
        assert!((tilt_to_azimuth(0, 45) - FRAC_PI_2).abs() < 1e-12);
        assert!((tilt_to_azimuth(-45, 0) - PI).abs() < 1e-12);
        assert!((tilt_to_azimuth(0, -45) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn azimuth_quadrants() {
        assert!((tilt_to_azimuth(45, 45) - PI / 4.0).abs() < 1e-12);
        let third_quadrant = tilt_to_azimuth(-45, -45);
        assert!((third_quadrant - 5.0 * PI / 4.0).abs() < 1e-12);
        let fourth_quadrant = tilt_to_azimuth(45, -45);
        assert!((fourth_quadrant - 7.0 * PI / 4.0).abs() < 1e-12);
    }
}
