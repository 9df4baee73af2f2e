//! Business logic services module.

pub mod dispatch;
pub mod relay;
pub mod validation;

pub use dispatch::{PreparedCall, ToolDispatcher};
pub use validation::{validate_args, ValidatedArgs};
