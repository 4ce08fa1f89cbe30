use crate::modal::{ModalCommand, ModalSelection};

/// Keyboard shortcuts for the detail overlay. Keys are ignored while closed
/// so they keep their normal page behavior.
#[inline]
pub fn modal_command_for_key(key: &str, selection: ModalSelection) -> Option<ModalCommand> {
    if selection == ModalSelection::Closed {
        return None;
    }
    match key {
        "ArrowRight" => Some(ModalCommand::Next),
        "ArrowLeft" => Some(ModalCommand::Previous),
        "Escape" | "Esc" => Some(ModalCommand::Close),
        _ => None,
    }
}
