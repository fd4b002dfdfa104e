//! Pack I/O and the batch driver around the converter

pub mod batch;
pub mod source;
pub mod writer;

pub use batch::*;
pub use source::*;
pub use writer::*;
