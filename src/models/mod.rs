pub mod system;
pub mod user;

// Re-export all models for easier imports
pub use system::*;
pub use user::*;
