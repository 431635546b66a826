pub mod interop;
pub mod portfolio;

pub use interop::*;
pub use portfolio::*;
