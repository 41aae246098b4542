use crate::domain::model::{Artwork, Gallery};
use crate::domain::ports::{Identified, Store};

/// Vec-backed store with a linear first-match lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryStore<T> {
    records: Vec<T>,
}

pub type ArtworkStore = InMemoryStore<Artwork>;
pub type GalleryStore = InMemoryStore<Gallery>;

impl<T: Identified> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Identified> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified> Store<T> for InMemoryStore<T> {
    fn add(&mut self, record: T) {
        let id = record.id();
        if self.get_by_id(id).is_some() {
            tracing::debug!("{} {} already stored, new record will be shadowed", T::KIND, id);
        } else {
            tracing::debug!("Stored {} {}", T::KIND, id);
        }
        self.records.push(record);
    }

    fn all(&self) -> &[T] {
        &self.records
    }

    fn get_by_id(&self, id: i32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn get_by_id_mut(&mut self, id: i32) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }
}
