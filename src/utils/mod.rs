mod time;
pub use time::*;
