//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into workflow calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route configuration for the `/url` resource

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
