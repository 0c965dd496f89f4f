pub mod cache;
pub mod config;
pub mod daily;
pub mod generator;
pub mod normalize;
pub mod reset_clock;
pub mod scoring;
pub mod session;
pub mod sources;
pub mod store;

// Re-export main components
pub use cache::*;
pub use config::*;
pub use daily::*;
pub use generator::*;
pub use normalize::*;
pub use reset_clock::*;
pub use scoring::*;
pub use session::*;
pub use sources::*;
pub use store::*;
