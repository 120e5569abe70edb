// Public entities for the IdeaCheck API
// This module contains data structures that are shared across the application boundary

// Business idea evaluation request and response
pub mod evaluation;

// Common entities for error handling
pub mod common;
