//! Client-side state holders.

pub mod theme;
