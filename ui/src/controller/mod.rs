//! Page controllers
//!
//! Plain Rust state and orchestration behind the list page and the add
//! dialog. Components own a controller and forward user input to it; the
//! controllers never touch the DOM.

mod add_flow;
mod list;

pub use add_flow::{AddFlow, AddOutcome, AddRequest, AddTarget, TagRequest, TargetMode};
pub use list::{ListController, ListView};
