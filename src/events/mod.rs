pub mod keyboard;
pub mod listener;
pub mod modal;
pub mod pointer;
pub mod resize;
pub mod scroll;

pub use keyboard::wire_modal_keys;
pub use listener::Listener;
pub use modal::wire_modal_clicks;
pub use pointer::wire_pointermove;
pub use resize::{reclassify, wire_resize};
pub use scroll::{recompute_scroll, wire_scroll};
