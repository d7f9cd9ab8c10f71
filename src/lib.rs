#![allow(clippy::bool_assert_comparison)]

mod error;
mod evolve;
mod iter;
mod rule;
mod world;

pub use ca_rules;
pub use error::Error;
pub use evolve::SpaceTime;
pub use rule::Rule;
pub use world::{Coord, World};
