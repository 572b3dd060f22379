//! Word-level helpers shared by the framing and compression modules.

pub(crate) mod bits;
pub(crate) mod converter;
