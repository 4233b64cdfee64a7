//! Domain layer for the weather card
//!
//! Card options, display units with their conversion formulas, and the floor
//! rounding used for every displayed measurement. No I/O lives here.

pub mod value_objects;

pub use value_objects::*;
