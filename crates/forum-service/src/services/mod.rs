//! Business logic services
//!
//! This module contains the service layer implementations that sit between
//! the HTTP handlers and the repositories.

pub mod context;
pub mod error;
pub mod post;
pub mod thread;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use thread::ThreadService;
