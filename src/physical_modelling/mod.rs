//! Physical models of vibrating strings.

pub mod string;
