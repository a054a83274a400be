//! Application state module

mod app_state;
mod auth_state;
mod builder_state;
mod composer;
mod drag;
mod forms;

pub use app_state::*;
pub use auth_state::*;
pub use builder_state::*;
pub use composer::*;
pub use forms::*;
