mod camera_info;
pub use camera_info::*;
