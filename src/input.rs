//! Input adapter
//!
//! Translates raw pointer and keyboard events, as recorded in an event
//! script, into [`PaintController`] calls. The core never sees button codes
//! or key states: only press/move/release and erase on/off.
//!
//! ```json
//! [
//!   { "type": "mouse_down", "x": 25, "y": 25, "button": 0 },
//!   { "type": "mouse_move", "x": 45, "y": 25 },
//!   { "type": "mouse_up" },
//!   { "type": "key_down", "ctrl": true }
//! ]
//! ```

use pixelpick_core::{Canvas, CellChange, PaintController, PointerButton, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Button code reported for a right click
pub const RIGHT_BUTTON: u8 = 2;

/// A raw input event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MouseDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: u8,
    },
    MouseMove {
        x: f64,
        y: f64,
    },
    MouseUp,
    KeyDown {
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
    },
    KeyUp {
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
    },
}

/// Right button cycles backward, everything else forward
pub fn pointer_button(code: u8) -> PointerButton {
    if code == RIGHT_BUTTON {
        PointerButton::Alternate
    } else {
        PointerButton::Primary
    }
}

/// Feed one event to the editor.
///
/// Pointer positions are floored to whole pixels. Holding Ctrl or Cmd turns
/// the eraser on; it turns off once a key is released with neither held.
pub fn dispatch<C: Canvas>(
    editor: &mut PaintController<C>,
    event: &InputEvent,
) -> Result<Option<CellChange>> {
    match *event {
        InputEvent::MouseDown { x, y, button } => {
            editor.on_pointer_down(x.floor(), y.floor(), pointer_button(button))
        }
        InputEvent::MouseMove { x, y } => editor.on_pointer_move(x.floor(), y.floor()),
        InputEvent::MouseUp => {
            editor.on_pointer_up();
            Ok(None)
        }
        InputEvent::KeyDown { ctrl, meta } => {
            if ctrl || meta {
                editor.on_modifier_down();
            }
            Ok(None)
        }
        InputEvent::KeyUp { ctrl, meta } => {
            if !ctrl && !meta {
                editor.on_modifier_up();
            }
            Ok(None)
        }
    }
}

/// Feed a whole script, returning the committed changes in order
pub fn replay<C: Canvas>(
    editor: &mut PaintController<C>,
    events: &[InputEvent],
) -> Result<Vec<CellChange>> {
    let mut changes = Vec::new();
    for event in events {
        if let Some(change) = dispatch(editor, event)? {
            changes.push(change);
        }
    }
    tracing::debug!(
        events = events.len(),
        changes = changes.len(),
        "Event script replayed"
    );
    Ok(changes)
}

/// Read an event script from a JSON file
pub fn load_script(path: &Path) -> anyhow::Result<Vec<InputEvent>> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

pub fn parse_script(content: &str) -> anyhow::Result<Vec<InputEvent>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpick_core::{ColorSpec, EditorOptions, Rgb, Surface};
    use pretty_assertions::assert_eq;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn editor() -> PaintController {
        PaintController::new(EditorOptions {
            size: 20,
            palette: vec![ColorSpec::from("#ffffff"), ColorSpec::from("#ff0000")],
            eraser_color: Some(ColorSpec::from("#000000")),
            surface: Surface::new(40, 40),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_script() {
        let events = parse_script(
            r#"[
                {"type": "mouse_down", "x": 25.7, "y": 25, "button": 2},
                {"type": "mouse_move", "x": 1, "y": 2},
                {"type": "mouse_up"},
                {"type": "key_down", "meta": true},
                {"type": "key_up"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                InputEvent::MouseDown { x: 25.7, y: 25.0, button: 2 },
                InputEvent::MouseMove { x: 1.0, y: 2.0 },
                InputEvent::MouseUp,
                InputEvent::KeyDown { ctrl: false, meta: true },
                InputEvent::KeyUp { ctrl: false, meta: false },
            ]
        );
    }

    #[test]
    fn test_unknown_event_rejected() {
        assert!(parse_script(r#"[{"type": "wheel"}]"#).is_err());
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(pointer_button(0), PointerButton::Primary);
        assert_eq!(pointer_button(1), PointerButton::Primary);
        assert_eq!(pointer_button(2), PointerButton::Alternate);
    }

    #[test]
    fn test_replay_cycles_and_reverses() {
        let mut editor = editor();
        let events = vec![
            InputEvent::MouseDown { x: 25.0, y: 25.0, button: 0 },
            InputEvent::MouseUp,
            InputEvent::MouseDown { x: 25.0, y: 25.0, button: RIGHT_BUTTON },
            InputEvent::MouseUp,
        ];

        let changes = replay(&mut editor, &events).unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].color, RED);
        assert_eq!(changes[1].color, Rgb::WHITE);
    }

    #[test]
    fn test_drag_stamps_current_color() {
        let mut editor = editor();
        let events = vec![
            InputEvent::MouseDown { x: 5.0, y: 5.0, button: 0 },
            InputEvent::MouseMove { x: 25.0, y: 5.0 },
            InputEvent::MouseMove { x: 45.0, y: 5.0 },
            InputEvent::MouseUp,
            InputEvent::MouseMove { x: 5.0, y: 25.0 },
        ];

        let changes = replay(&mut editor, &events).unwrap();
        let indices: Vec<usize> = changes.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 3, 6]);
        assert!(changes.iter().all(|c| c.color == RED));
    }

    #[test]
    fn test_modifier_keys_toggle_eraser() {
        let mut editor = editor();

        dispatch(&mut editor, &InputEvent::KeyDown { ctrl: false, meta: false }).unwrap();
        assert!(!editor.is_erasing());

        dispatch(&mut editor, &InputEvent::KeyDown { ctrl: true, meta: false }).unwrap();
        assert!(editor.is_erasing());

        // Still held: releasing another key keeps the eraser on
        dispatch(&mut editor, &InputEvent::KeyUp { ctrl: true, meta: false }).unwrap();
        assert!(editor.is_erasing());

        let change = dispatch(&mut editor, &InputEvent::MouseDown { x: 5.0, y: 5.0, button: 0 })
            .unwrap();
        assert_eq!(change.map(|c| c.color), Some(Rgb::BLACK));

        dispatch(&mut editor, &InputEvent::KeyUp { ctrl: false, meta: false }).unwrap();
        assert!(!editor.is_erasing());
    }

    #[test]
    fn test_coordinates_are_floored() {
        let mut editor = editor();
        // 0.9 floors to 0.0, which lies left of the first cell's half-pixel edge
        let change = dispatch(&mut editor, &InputEvent::MouseDown { x: 0.9, y: 5.0, button: 0 })
            .unwrap();
        assert_eq!(change, None);
    }
}
