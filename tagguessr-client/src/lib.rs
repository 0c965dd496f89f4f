pub mod danbooru;
pub mod error;
pub mod proxy;
pub mod records;

pub use danbooru::*;
pub use error::*;
pub use proxy::*;
pub use records::*;
