mod progress;
pub mod svg;
mod writer;

pub use progress::FetchProgress;
pub use writer::write_atomic;
