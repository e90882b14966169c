pub mod href;
pub mod placeholder;
pub mod manifest;

pub use href::*;
pub use placeholder::*;
pub use manifest::*;
