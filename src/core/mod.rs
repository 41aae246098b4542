pub mod exhibition;
pub mod store;
pub mod users;

pub use crate::domain::model::{Artwork, Gallery, Role, User};
pub use crate::domain::ports::{Identified, Store};
pub use crate::utils::error::Result;
