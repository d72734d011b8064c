mod display;
mod filter;
mod label;
mod rect;
mod selector;
mod snapshot;
mod state;
mod window;

pub use display::{display_for_frame, neighbour_display, Display, DisplayId};
pub use label::label_for;
pub use rect::Rect;
pub use selector::{SelectorSession, SwitcherView};
pub use snapshot::Snapshot;
pub use state::State;
pub use window::{WindowId, WindowRecord};
