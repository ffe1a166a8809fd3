pub mod system;
#[doc(hidden)]
pub mod test_helpers;
pub mod users;

// Re-export all handlers for easier imports
pub use system::*;
pub use users::*;
