pub mod node;
pub mod outcome;

pub use node::*;
pub use outcome::*;
