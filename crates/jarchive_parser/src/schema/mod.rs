pub mod checkpoint;
pub mod models;
pub mod round;

pub use checkpoint::*;
pub use models::*;
pub use round::*;
