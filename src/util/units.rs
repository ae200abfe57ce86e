//! Readout formatting
//! 
//! Both readouts use a fixed two decimal places so the labels do not
//! jitter in width while the timer runs.

use crate::models::DisplayUnit;

/// Format elapsed seconds for the time label
/// 
/// # Examples
/// ```
/// use cliff_timer::util::units::format_seconds;
/// 
/// assert_eq!(format_seconds(0.0), "0.00 s");
/// assert_eq!(format_seconds(1.234), "1.23 s");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2} s", seconds)
}

/// Format a height, given in meters, for the height label in `unit`
/// 
/// # Examples
/// ```
/// use cliff_timer::models::DisplayUnit;
/// use cliff_timer::util::units::format_height;
/// 
/// assert_eq!(format_height(19.62, DisplayUnit::Meters), "19.62 m");
/// assert_eq!(format_height(19.62, DisplayUnit::Feet), "64.37 ft");
/// ```
pub fn format_height(meters: f64, unit: DisplayUnit) -> String {
    format!("{:.2} {}", unit.convert(meters), unit.suffix())
}

/// Text shown in the height label before any height is computed
pub fn height_placeholder() -> String {
    format!("-- {}", DisplayUnit::Meters.suffix())
}
