//! Workflow services for the application layer.

pub mod delete_service;
pub mod resolve_service;
pub mod save_service;

pub use delete_service::DeleteService;
pub use resolve_service::ResolveService;
pub use save_service::SaveService;
