mod desc;
pub use desc::*;

mod camera;
pub use camera::*;

mod input;
pub use input::*;

mod movement;
pub use movement::*;

mod pointer;
pub use pointer::*;

mod vectors;
pub use vectors::*;
