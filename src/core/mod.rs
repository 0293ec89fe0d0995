pub mod anim;
pub mod apples;
pub mod constants;
pub mod meow;
pub mod reaction;

pub use anim::*;
pub use apples::*;
pub use constants::*;
pub use meow::*;
pub use reaction::*;
