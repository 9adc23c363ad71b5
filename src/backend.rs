pub mod exposure;
pub mod feedline;
pub mod mathphysics;
pub mod station;
