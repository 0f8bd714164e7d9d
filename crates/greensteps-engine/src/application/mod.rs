pub mod dtos;
pub mod queries;
