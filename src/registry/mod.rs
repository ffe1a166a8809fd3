pub mod memory;
pub mod store;

// Re-export for easier imports
pub use memory::*;
pub use store::*;
