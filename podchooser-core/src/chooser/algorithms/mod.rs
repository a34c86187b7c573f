mod random;
mod sticky;

pub use random::*;
pub use sticky::*;
