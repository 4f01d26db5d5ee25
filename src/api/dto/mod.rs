//! Data Transfer Objects for REST request/response serialization.

pub mod bet_dto;
pub mod system_dto;

pub use bet_dto::*;
pub use system_dto::*;
