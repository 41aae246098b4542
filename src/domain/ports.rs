/// Records that carry a caller-assigned integer id.
pub trait Identified {
    /// Entity name used in log lines and error messages.
    const KIND: &'static str;

    fn id(&self) -> i32;
}

/// Ordered, append-only collection of one record type.
///
/// Lookup returns the first-inserted record with a matching id; later
/// inserts with the same id are kept but shadowed.
pub trait Store<T: Identified> {
    fn add(&mut self, record: T);
    fn all(&self) -> &[T];
    fn get_by_id(&self, id: i32) -> Option<&T>;
    fn get_by_id_mut(&mut self, id: i32) -> Option<&mut T>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
