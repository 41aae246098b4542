use crate::config::catalog::CatalogConfig;
use crate::core::store::{ArtworkStore, GalleryStore};
use crate::domain::model::{Artwork, Gallery};
use crate::domain::ports::Store;

/// Facade over the artwork and gallery stores.
///
/// All catalog reads and writes go through here. Linking an unknown gallery
/// or artwork is ignored rather than reported as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitionService {
    artworks: ArtworkStore,
    galleries: GalleryStore,
}

impl ExhibitionService {
    /// Service seeded with the sample catalog. Every call builds an
    /// independent instance.
    pub fn new() -> Self {
        let mut service = Self::empty();
        service.seed_sample_data();
        service
    }

    pub fn empty() -> Self {
        Self {
            artworks: ArtworkStore::new(),
            galleries: GalleryStore::new(),
        }
    }

    /// Build a service from a parsed catalog file: galleries, then artworks,
    /// then links, each in file order.
    pub fn from_catalog(catalog: &CatalogConfig) -> Self {
        let mut service = Self::empty();

        for gallery in &catalog.galleries {
            service.add_gallery(gallery.id, gallery.name.as_str());
        }
        for artwork in &catalog.artworks {
            service.add_artwork(
                artwork.id,
                artwork.title.as_str(),
                artwork.artist.as_str(),
                artwork.price,
            );
        }
        for link in &catalog.links {
            service.add_artwork_to_gallery(link.gallery, link.artwork);
        }

        tracing::info!(
            "Loaded catalog: {} galleries, {} artworks",
            service.galleries.len(),
            service.artworks.len()
        );
        service
    }

    fn seed_sample_data(&mut self) {
        self.add_gallery(1, "Modern Art Gallery");
        self.add_gallery(2, "Classic Art Gallery");

        self.add_artwork(101, "Sunset Dreams", "A. Sharma", 15000.0);
        self.add_artwork(102, "City Lights", "R. Verma", 22000.0);
        self.add_artwork(103, "Nature Bliss", "K. Rao", 18000.0);

        self.add_artwork_to_gallery(1, 101);
        self.add_artwork_to_gallery(1, 102);
        self.add_artwork_to_gallery(2, 103);
    }

    pub fn add_gallery(&mut self, id: i32, name: impl Into<String>) {
        self.galleries.add(Gallery::new(id, name));
    }

    pub fn add_artwork(
        &mut self,
        id: i32,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) {
        self.artworks.add(Artwork::new(id, title, artist, price));
    }

    /// Link an artwork into a gallery. Returns `false` and leaves every
    /// store untouched when either id is unknown.
    pub fn add_artwork_to_gallery(&mut self, gallery_id: i32, artwork_id: i32) -> bool {
        if self.artworks.get_by_id(artwork_id).is_none() {
            tracing::warn!(
                "Artwork {} not found, skipping link to gallery {}",
                artwork_id,
                gallery_id
            );
            return false;
        }

        match self.galleries.get_by_id_mut(gallery_id) {
            Some(gallery) => {
                gallery.link_artwork(artwork_id);
                tracing::debug!("Linked artwork {} into gallery {}", artwork_id, gallery_id);
                true
            }
            None => {
                tracing::warn!(
                    "Gallery {} not found, skipping link of artwork {}",
                    gallery_id,
                    artwork_id
                );
                false
            }
        }
    }

    pub fn galleries(&self) -> &[Gallery] {
        self.galleries.all()
    }

    pub fn artworks(&self) -> &[Artwork] {
        self.artworks.all()
    }

    /// Artworks linked into `gallery_id`, in link order. Unknown galleries
    /// yield an empty list.
    pub fn artworks_in_gallery(&self, gallery_id: i32) -> Vec<&Artwork> {
        match self.galleries.get_by_id(gallery_id) {
            Some(gallery) => gallery
                .artwork_ids()
                .iter()
                .filter_map(|id| self.artworks.get_by_id(*id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn artwork_by_id(&self, id: i32) -> Option<&Artwork> {
        self.artworks.get_by_id(id)
    }

    pub fn gallery_by_id(&self, id: i32) -> Option<&Gallery> {
        self.galleries.get_by_id(id)
    }
}

impl Default for ExhibitionService {
    fn default() -> Self {
        Self::new()
    }
}
