//! Testing utilities for stage-compose

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}
