//! Testing utilities and harness for the carousel

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}
