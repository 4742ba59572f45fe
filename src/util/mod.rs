mod time_info;
pub use time_info::*;
