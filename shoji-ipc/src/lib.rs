pub mod command;
pub mod region;

pub use command::{BindingInfo, Command, Response, ScreenDirection, WindowInfo};
pub use region::Region;
