//! # Models Module
//!
//! Core data structures and type definitions for the dispatch service.

mod app_state;
pub use app_state::*;

mod api_response;
pub use api_response::*;

mod enqueue;
pub use enqueue::*;

mod notification;
pub use notification::*;

mod error;
pub use error::*;
