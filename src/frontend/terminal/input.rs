use crossterm::event::{Event, KeyEventKind, KeyModifiers};

use crate::frontend::traits::FrontendEvent;
use crate::keybinding::Key;

/// Converts one crossterm event into the input units it stands for.
///
/// crossterm folds an Escape byte and whatever byte follows it in the same
/// read into a single ALT-modified key. That is two units here: Escape, then
/// the key without ALT.
pub fn convert_event(event: Event) -> Vec<FrontendEvent> {
    match event {
        Event::Key(mut key_event) => {
            if key_event.kind != KeyEventKind::Press && key_event.kind != KeyEventKind::Repeat {
                return Vec::new();
            }
            if key_event.modifiers.contains(KeyModifiers::ALT) {
                key_event.modifiers.remove(KeyModifiers::ALT);
                vec![
                    FrontendEvent::Key(Key::Escape),
                    FrontendEvent::Key(Key::from(key_event)),
                ]
            } else {
                vec![FrontendEvent::Key(Key::from(key_event))]
            }
        }
        Event::Resize(width, height) => vec![FrontendEvent::Resize(width, height)],
        _ => Vec::new(),
    }
}
