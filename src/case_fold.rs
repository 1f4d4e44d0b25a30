//! Process-global ASCII-only lowercase table (spec.md §4.4).
//!
//! Built once, consulted many times, read-only thereafter (the same
//! "global mutable state" discipline spec.md §9 allows), realized the way
//! the teacher realizes its single global engine: a lazily-initialized,
//! module-scoped value guarded by a one-time initializer.

use once_cell::sync::Lazy;

/// `LOWER[b]` is the lowercase ASCII equivalent of byte `b`; non-ASCII bytes
/// (and non-letters) map to themselves.
pub static LOWER: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut table = [0u8; 256];
    for (b, slot) in table.iter_mut().enumerate() {
        *slot = (b as u8).to_ascii_lowercase();
    }
    table
});

/// Lowercases `src` into a freshly allocated `Vec<u8>`. Convenience wrapper
/// used by the dictionary loader, which works with owned `Vec<u8>` lines
/// rather than `GrowableBuffer`s.
pub fn to_lower_vec(src: &[u8]) -> Vec<u8> {
    src.iter().map(|&b| LOWER[b as usize]).collect()
}
