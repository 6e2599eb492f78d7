pub mod extract;
pub mod monitor;
pub mod normalize;
pub mod snapshot;
