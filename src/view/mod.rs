pub mod controls;
pub mod list;

pub use controls::{ControlsResponse, PaginationControls};
