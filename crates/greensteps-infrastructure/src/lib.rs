// Infrastructure layer - Technical implementations
// Depends on the domain layer, implements its storage contract

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod persistence;
