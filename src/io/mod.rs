//! Streaming I/O: the chunked reader and the SIMD-backed byte primitives it
//! is built on.

pub mod reader;
pub mod simd;

pub use reader::ChunkedReader;
