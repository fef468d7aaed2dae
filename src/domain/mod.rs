pub mod draft;
pub mod user;

pub use draft::*;
pub use user::*;
