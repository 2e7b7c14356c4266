// Persistent entities and API DTOs

pub mod routine;
pub mod user;
pub mod workout;

pub use routine::*;
pub use user::*;
pub use workout::*;
