pub mod health;
pub mod evaluation;
pub mod root;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use evaluation::evaluate_idea;
pub use health::{health_check, simple_health_check};
pub use root::root;
