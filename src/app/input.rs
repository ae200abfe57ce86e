//! Input mapping
//!
//! Turns crossterm key and mouse events into the stopwatch's taps.
//! Clicks are hit-tested against the areas the screen drew last frame.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Actions the UI loop dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Tap on the control button (Space, Enter, s, or a click on the button)
    ControlTap,
    /// Tap on the height label (u, or a click on the label)
    UnitTap,
    /// Quit application (q, Q, Esc, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Screen regions that respond to clicks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub control: Rect,
    pub height: Rect,
}

impl HitAreas {
    fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    }
}

/// Map any terminal event to an action
pub fn event_to_action(event: &Event, areas: &HitAreas) -> InputAction {
    match event {
        Event::Key(key) => key_to_action(*key),
        Event::Mouse(mouse) => mouse_to_action(*mouse, areas),
        _ => InputAction::None,
    }
}

/// Convert keyboard event to an action. Only presses count.
pub fn key_to_action(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,

        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            InputAction::ControlTap
        }
        KeyCode::Char('u') | KeyCode::Char('U') => InputAction::UnitTap,

        _ => InputAction::None,
    }
}

/// Convert a mouse event to an action by hit-testing left clicks
pub fn mouse_to_action(mouse: MouseEvent, areas: &HitAreas) -> InputAction {
    if is_suppressed_gesture(&mouse) {
        return InputAction::None;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if HitAreas::contains(areas.control, mouse.column, mouse.row) {
                InputAction::ControlTap
            } else if HitAreas::contains(areas.height, mouse.column, mouse.row) {
                InputAction::UnitTap
            } else {
                InputAction::None
            }
        }
        _ => InputAction::None,
    }
}

/// Drags and modifier-held scrolling are zoom-like gestures; they are
/// swallowed before routing.
pub fn is_suppressed_gesture(mouse: &MouseEvent) -> bool {
    match mouse.kind {
        MouseEventKind::Drag(_) => true,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => !mouse.modifiers.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }
    }

    fn areas() -> HitAreas {
        HitAreas {
            control: Rect::new(10, 10, 20, 3),
            height: Rect::new(10, 5, 20, 3),
        }
    }

    #[test]
    fn test_key_to_action() {
        assert_eq!(key_to_action(key(KeyCode::Char(' '))), InputAction::ControlTap);
        assert_eq!(key_to_action(key(KeyCode::Enter)), InputAction::ControlTap);
        assert_eq!(key_to_action(key(KeyCode::Char('s'))), InputAction::ControlTap);
        assert_eq!(key_to_action(key(KeyCode::Char('u'))), InputAction::UnitTap);
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(key_to_action(key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(key_to_action(key(KeyCode::Char('x'))), InputAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = key(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(release), InputAction::None);
    }

    #[test]
    fn test_click_hit_testing() {
        let areas = areas();
        let left = MouseEventKind::Down(MouseButton::Left);

        assert_eq!(
            mouse_to_action(mouse(left, 15, 11, KeyModifiers::NONE), &areas),
            InputAction::ControlTap
        );
        assert_eq!(
            mouse_to_action(mouse(left, 10, 5, KeyModifiers::NONE), &areas),
            InputAction::UnitTap
        );
        assert_eq!(
            mouse_to_action(mouse(left, 30, 11, KeyModifiers::NONE), &areas),
            InputAction::None
        );
        assert_eq!(
            mouse_to_action(mouse(left, 0, 0, KeyModifiers::NONE), &areas),
            InputAction::None
        );
    }

    #[test]
    fn test_right_click_ignored() {
        let right = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(
            mouse_to_action(mouse(right, 15, 11, KeyModifiers::NONE), &areas()),
            InputAction::None
        );
    }

    #[test]
    fn test_gesture_guard() {
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 15, 11, KeyModifiers::NONE);
        assert!(is_suppressed_gesture(&drag));
        assert_eq!(mouse_to_action(drag, &areas()), InputAction::None);

        let zoom = mouse(MouseEventKind::ScrollUp, 15, 11, KeyModifiers::CONTROL);
        assert!(is_suppressed_gesture(&zoom));

        let scroll = mouse(MouseEventKind::ScrollDown, 15, 11, KeyModifiers::NONE);
        assert!(!is_suppressed_gesture(&scroll));
    }

    #[test]
    fn test_event_to_action() {
        let areas = areas();
        assert_eq!(
            event_to_action(&Event::Key(key(KeyCode::Char('u'))), &areas),
            InputAction::UnitTap
        );
        assert_eq!(event_to_action(&Event::FocusGained, &areas), InputAction::None);
    }
}
