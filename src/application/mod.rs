//! Application layer services implementing the workflows.
//!
//! Each service validates its input, calls exactly one store capability and
//! maps storage failures to [`crate::error::AppError`]. HTTP handlers and the
//! admin CLI both go through these services.
//!
//! # Available Services
//!
//! - [`services::save_service::SaveService`] - Alias creation
//! - [`services::resolve_service::ResolveService`] - Alias lookup
//! - [`services::delete_service::DeleteService`] - Alias removal

pub mod services;
