//! Utility types shared by the string models.

pub mod random;
pub mod ring_buffer;
