pub mod puzzle;
pub mod session;
pub mod source;
pub mod errors;

// Re-export all types
pub use puzzle::*;
pub use session::*;
pub use source::*;
pub use errors::*;
