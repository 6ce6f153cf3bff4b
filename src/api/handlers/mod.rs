//! HTTP request handlers.
//!
//! Each handler module corresponds to one workflow.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::{delete_handler, delete_root_handler};
pub use health::health_handler;
pub use redirect::{redirect_handler, redirect_root_handler};
pub use save::save_handler;
