// Application layer - Query facades over the domain
// Depends on the domain crate only; storage arrives as trait objects

pub mod application;

// Re-exports for convenience
pub use application::dtos;
pub use application::queries;
