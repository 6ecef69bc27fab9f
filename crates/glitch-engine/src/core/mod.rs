pub mod grid;
pub mod rng;
