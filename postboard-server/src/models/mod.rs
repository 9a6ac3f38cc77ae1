//! Request-side models shared across routes

pub mod pagination;
pub mod timestamp;
pub mod validation;

pub use pagination::{Pagination, PaginationParams};
pub use validation::ValidationError;
