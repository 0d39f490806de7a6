pub mod guess;
pub mod scoring;

// Re-export main components
pub use guess::*;
pub use scoring::*;
