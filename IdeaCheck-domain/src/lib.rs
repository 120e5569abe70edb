// IdeaCheck Domain
// This crate contains the business logic for the IdeaCheck application

// Services that implement business logic
pub mod services;

// AI analysis providers
pub mod providers;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
