pub mod config;
pub mod dom;
pub mod patterns;

pub use config::config::*;
pub use dom::*;
pub use patterns::*;
