//! # Init Module
//!
//! Process bootstrap helpers.

mod initialize_app_state;
pub use initialize_app_state::*;
