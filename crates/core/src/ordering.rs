//! Dense zero-based ordering over sibling records.
//!
//! Every curated collection (educations, projects, bullet points per
//! project, skills per category, demos) carries an integer `order` field
//! that must remain exactly `{0, 1, ..., n-1}` after any mutation. The
//! server persists whatever `order` the caller supplies; restoring density
//! after a reorder or delete is the caller's job, and these helpers are
//! that job's shared core.

/// A record that occupies a position in an ordered collection.
pub trait Ordered {
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
}

/// Reassign `order := index` (0-based) across the slice, in place.
///
/// Idempotent on an already-dense slice. The slice's current `order`
/// values are ignored entirely; position is the only input.
pub fn reassign_orders<T: Ordered>(items: &mut [T]) {
    for (idx, item) in items.iter_mut().enumerate() {
        item.set_order(idx as i32);
    }
}

/// Check the density invariant: `order` values are exactly `0..n`, each
/// appearing once, in slice position order.
pub fn is_dense<T: Ordered>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(idx, item)| item.order() == idx as i32)
}
