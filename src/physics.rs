//! Free-fall physics
//!
//! The height model assumes the object is released from rest, falls
//! without drag and experiences constant surface gravity. None of these
//! are configurable.

/// Standard surface gravity in m/s²
pub const GRAVITY: f64 = 9.81;

/// Feet in one meter
pub const FEET_PER_METER: f64 = 3.28084;

/// Height in meters fallen from rest after `seconds` of free fall
///
/// # Examples
/// ```
/// use cliff_timer::physics::fall_height;
///
/// assert!((fall_height(2.0) - 19.62).abs() < 1e-9);
/// ```
pub fn fall_height(seconds: f64) -> f64 {
    0.5 * GRAVITY * seconds * seconds
}

/// Convert meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}
