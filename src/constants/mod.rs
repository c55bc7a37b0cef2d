//! This module contains all the constant values used in the system
mod worker;
pub use worker::*;
