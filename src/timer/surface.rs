//! Output surface the controller renders into

/// The three text targets of the stopwatch view
pub trait Surface {
    /// Set the elapsed time label
    fn set_time_text(&mut self, text: &str);
    /// Set the height label
    fn set_height_text(&mut self, text: &str);
    /// Set the control button label
    fn set_control_text(&mut self, text: &str);
}
