// IdeaCheck-web lib.rs
//
// Serves the browser client that talks to the IdeaCheck API.

pub mod config;
pub mod routes;
pub mod shutdown;
