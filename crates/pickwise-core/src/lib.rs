pub mod catalog;
pub mod category;
pub mod error;
pub mod flow;
pub mod locale;
pub mod recommendation;
pub mod suggest;
pub mod theme;

// Re-export common error type
pub use error::PickwiseError;
pub use error::Result;
