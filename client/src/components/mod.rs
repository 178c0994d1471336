//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitive building blocks (`button`, `icons`) stay unaware of themes so the
//! toggle can compose them without the primitives reading shared state.

pub mod button;
pub mod icons;
pub mod mode_toggle;
