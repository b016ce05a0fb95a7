use raylib::prelude::*;

use crate::state::PresentationState;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputEvent {
    Click,       // Left button pressed anywhere on the surface
    PointerMove, // Pointer moved over the surface
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorRequest {
    PointingHand,
}

/// Outcome of one input event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Dispatch {
    pub state: PresentationState,
    pub redraw: bool,
    pub cursor: Option<CursorRequest>,
}

/// Collects this frame's pointer events, in the order they are dispatched.
pub fn poll(rl: &RaylibHandle) -> Vec<InputEvent> {
    let mut events = Vec::new();

    let delta = rl.get_mouse_delta();
    if rl.is_cursor_on_screen() && (delta.x != 0.0 || delta.y != 0.0) {
        events.push(InputEvent::PointerMove);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::Click);
    }

    events
}

/// One event yields at most one transition.
pub fn dispatch(state: PresentationState, event: InputEvent, photo_count: usize) -> Dispatch {
    match event {
        InputEvent::Click => Dispatch {
            state: state.advance(photo_count),
            redraw: true,
            cursor: None,
        },
        InputEvent::PointerMove => Dispatch {
            state,
            redraw: false,
            cursor: Some(CursorRequest::PointingHand),
        },
    }
}

pub fn apply_cursor(rl: &RaylibHandle, cursor: CursorRequest) {
    match cursor {
        CursorRequest::PointingHand => rl.set_mouse_cursor(MouseCursor::MOUSE_CURSOR_POINTING_HAND),
    }
}
