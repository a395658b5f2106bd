//! Reorder controller: republish dense `order` values after a local
//! drag-and-drop reorder or a delete.
//!
//! The server persists whatever `order` each update carries and never
//! reindexes siblings itself, so after any mutation the client owns
//! restoring `{0..n-1}` across the affected partition. Updates for one
//! reorder are issued in parallel and every entity is republished
//! unconditionally, changed or not.
//!
//! There is no cross-session concurrency control: two overlapping
//! reorders of the same partition can interleave and leave duplicate or
//! missing `order` values. That limitation is inherited by design.

use std::future::Future;

use folio_core::ordering::{reassign_orders, Ordered};
use futures::future::try_join_all;

use crate::ClientError;

/// Reassign `order := index` over `items` and persist every entity via
/// `update`, awaited in parallel. Returns the server's view of each
/// entity, in list order.
///
/// Fails if any single update fails; already-completed updates are not
/// rolled back.
pub async fn persist_reordered<T, F, Fut>(mut items: Vec<T>, update: F) -> Result<Vec<T>, ClientError>
where
    T: Ordered,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    reassign_orders(&mut items);
    try_join_all(items.into_iter().map(update)).await
}

/// Delete one entity, drop it from the local list, and republish the
/// remainder with dense orders.
///
/// The delete is awaited before any reindexing update is issued, so a
/// failed delete leaves the partition untouched; a failure partway
/// through the updates leaves a gap that the next successful pass
/// closes.
///
/// Returns the deleted entity and the reindexed remainder.
pub async fn delete_and_reindex<T, P, D, DFut, F, Fut>(
    items: Vec<T>,
    is_deleted: P,
    delete: D,
    update: F,
) -> Result<(T, Vec<T>), ClientError>
where
    T: Ordered,
    P: Fn(&T) -> bool,
    D: FnOnce() -> DFut,
    DFut: Future<Output = Result<T, ClientError>>,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let deleted = delete().await?;
    let remaining: Vec<T> = items.into_iter().filter(|item| !is_deleted(item)).collect();
    let remaining = persist_reordered(remaining, update).await?;
    Ok((deleted, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ordering::is_dense;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        order: i32,
    }

    impl Ordered for Item {
        fn order(&self) -> i32 {
            self.order
        }
        fn set_order(&mut self, order: i32) {
            self.order = order;
        }
    }

    fn items(pairs: &[(i64, i32)]) -> Vec<Item> {
        pairs.iter().map(|&(id, order)| Item { id, order }).collect()
    }

    #[tokio::test]
    async fn reorder_assigns_dense_orders_and_updates_every_entity() {
        // Drag item 3 to the front: [3, 1, 2] with stale orders.
        let list = items(&[(3, 2), (1, 0), (2, 1)]);

        let updated = persist_reordered(list, |item| async move { Ok(item) })
            .await
            .unwrap();

        assert!(is_dense(&updated));
        assert_eq!(
            updated.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[tokio::test]
    async fn reorder_surfaces_a_failed_update() {
        let list = items(&[(1, 0), (2, 1)]);

        let result = persist_reordered(list, |item| async move {
            if item.id == 2 {
                Err(ClientError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(item)
            }
        })
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_reindexes_the_remainder() {
        let list = items(&[(1, 0), (2, 1), (3, 2)]);
        let deleted_item = Item { id: 2, order: 1 };

        let (deleted, remaining) = delete_and_reindex(
            list,
            |item| item.id == 2,
            || async move { Ok(deleted_item) },
            |item| async move { Ok(item) },
        )
        .await
        .unwrap();

        assert_eq!(deleted.id, 2);
        assert!(is_dense(&remaining));
        assert_eq!(
            remaining.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[tokio::test]
    async fn failed_delete_issues_no_updates() {
        use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

        let updates = AtomicUsize::new(0);
        let list = items(&[(1, 0), (2, 1)]);

        let result = delete_and_reindex(
            list,
            |item| item.id == 2,
            || async {
                Err(ClientError::Api {
                    status: 404,
                    message: "not found".to_string(),
                })
            },
            |item| {
                updates.fetch_add(1, AtomicOrdering::SeqCst);
                async move { Ok(item) }
            },
        )
        .await;

        assert!(result.is_err());
        assert_eq!(updates.load(AtomicOrdering::SeqCst), 0);
    }
}
