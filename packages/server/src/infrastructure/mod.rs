//! Infrastructure layer: repository implementations and DTOs.

pub mod dto;
pub mod repository;
