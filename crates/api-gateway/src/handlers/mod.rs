//! Request handlers for API endpoints

pub mod auth;
pub mod health;
pub mod helpers;
pub mod routes;
pub mod stations;
pub mod tickets;

// Re-export commonly used handlers
pub use auth::*;
pub use health::*;
pub use routes::*;
pub use stations::*;
pub use tickets::*;
