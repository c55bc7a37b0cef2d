//! # API Controllers Module
//!
//! Request handling logic behind the HTTP routes.

pub mod queue;
