//! Mouse input tracking for the orbit controls.

use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Left,
        }
    }
}

/// Tracks the current state of mouse input.
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed mouse buttons
    pressed_buttons: HashSet<MouseButton>,
    /// Current cursor position
    cursor_position: (f32, f32),
    /// Cursor movement delta since last frame
    cursor_delta: (f32, f32),
    /// Scroll delta since last frame
    scroll_delta: f32,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the beginning of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.cursor_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Handle a mouse button press event.
    pub fn on_mouse_pressed(&mut self, button: MouseButton) {
        self.pressed_buttons.insert(button);
    }

    /// Handle a mouse button release event.
    pub fn on_mouse_released(&mut self, button: MouseButton) {
        self.pressed_buttons.remove(&button);
    }

    /// Handle cursor movement.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let old = self.cursor_position;
        self.cursor_position = (x, y);
        self.cursor_delta = (
            self.cursor_delta.0 + (x - old.0),
            self.cursor_delta.1 + (y - old.1),
        );
    }

    /// Handle mouse scroll.
    pub fn on_scroll(&mut self, delta: f32) {
        self.scroll_delta += delta;
    }

    /// Check if a mouse button is currently pressed.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Get the current cursor position.
    pub fn cursor_position(&self) -> (f32, f32) {
        self.cursor_position
    }

    /// Get the cursor movement delta since last frame.
    pub fn cursor_delta(&self) -> (f32, f32) {
        self.cursor_delta
    }

    /// Get the scroll delta since last frame.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_deltas_accumulate_within_a_frame() {
        let mut input = InputState::new();
        input.on_cursor_moved(10.0, 10.0);
        input.begin_frame();
        input.on_cursor_moved(14.0, 12.0);
        input.on_cursor_moved(16.0, 13.0);
        assert_eq!(input.cursor_delta(), (6.0, 3.0));
        input.begin_frame();
        assert_eq!(input.cursor_delta(), (0.0, 0.0));
    }

    #[test]
    fn button_state_tracks_press_and_release() {
        let mut input = InputState::new();
        input.on_mouse_pressed(MouseButton::Left);
        assert!(input.is_mouse_pressed(MouseButton::Left));
        input.on_mouse_released(MouseButton::Left);
        assert!(!input.is_mouse_pressed(MouseButton::Left));
    }
}
