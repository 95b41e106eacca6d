pub mod constants;
pub mod evade;
pub mod geometry;
pub mod grid;
pub mod grow;
pub mod particles;

pub use evade::*;
pub use geometry::*;
pub use grid::*;
pub use grow::*;
pub use particles::*;
