pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::catalog::CatalogConfig;
pub use crate::core::{
    exhibition::ExhibitionService,
    store::{ArtworkStore, GalleryStore, InMemoryStore},
    users::UserStore,
};
pub use domain::model::{Artwork, Gallery, Role, User};
pub use domain::ports::{Identified, Store};
pub use utils::error::{CatalogError, Result};
