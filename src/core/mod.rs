//! Byte-range views and owned growable buffers: the allocation-free vocabulary
//! the rest of the crate builds on.

pub mod buffer;
pub mod view;

pub use buffer::GrowableBuffer;
pub use view::ByteView;
