// tagbridge/src/driver/mod.rs

//! Reader drivers: the trait seam and a simulated reader.

pub mod mock;
pub mod traits;

pub use mock::{MockDriver, MockFactory, MockField};
pub use traits::{ReaderDriver, SessionFactory, SessionMode};
