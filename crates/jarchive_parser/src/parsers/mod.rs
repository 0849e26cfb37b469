pub mod answers;
pub mod contestants;
pub mod game;
pub mod names;
pub mod rounds;
pub mod scores;

pub use answers::*;
pub use contestants::*;
pub use game::*;
pub use names::*;
pub use rounds::*;
pub use scores::*;
