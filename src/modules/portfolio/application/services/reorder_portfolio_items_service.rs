use async_trait::async_trait;

use crate::portfolio::application::ports::{
    incoming::use_cases::{
        ReorderPortfolioItemsCommand, ReorderPortfolioItemsError, ReorderPortfolioItemsUseCase,
    },
    outgoing::{PortfolioItemRecord, PortfolioQuery, PortfolioRepository},
};
use crate::shared::ordering::{self, ReorderError};

#[derive(Debug, Clone)]
pub struct ReorderPortfolioItemsService<R, Q>
where
    R: PortfolioRepository + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> ReorderPortfolioItemsService<R, Q>
where
    R: PortfolioRepository + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> ReorderPortfolioItemsUseCase for ReorderPortfolioItemsService<R, Q>
where
    R: PortfolioRepository + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: ReorderPortfolioItemsCommand,
    ) -> Result<Vec<PortfolioItemRecord>, ReorderPortfolioItemsError> {
        let mut items = self
            .query
            .list_items()
            .await
            .map_err(|e| ReorderPortfolioItemsError::RepositoryError(e.to_string()))?;

        let changed = ordering::move_item(&mut items, command.source_index, command.target_index)
            .map_err(|e| match e {
                ReorderError::SourceOutOfBounds { index, len } => {
                    ReorderPortfolioItemsError::SourceOutOfBounds { index, len }
                }
                ReorderError::TargetOutOfBounds { index, len } => {
                    ReorderPortfolioItemsError::TargetOutOfBounds { index, len }
                }
            })?;

        if !changed {
            // Dropping onto the original slot issues no write.
            return Ok(items);
        }

        let mut slots: Vec<i32> = items.iter().map(|item| item.sort_order).collect();
        let dirty = ordering::resequence(&mut slots);

        for (item, slot) in items.iter_mut().zip(slots.iter()) {
            item.sort_order = *slot;
        }

        let updates: Vec<_> = dirty
            .iter()
            .map(|&index| (items[index].id, items[index].sort_order))
            .collect();

        self.repository
            .save_order(updates)
            .await
            .map_err(|e| ReorderPortfolioItemsError::RepositoryError(e.to_string()))?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::portfolio::application::ports::outgoing::{
        CreatePortfolioItemData, PortfolioQueryError, PortfolioRepositoryError,
        UpdatePortfolioItemData,
    };

    fn item(header: &str, sort_order: i32) -> PortfolioItemRecord {
        PortfolioItemRecord {
            id: Uuid::new_v4(),
            header: header.to_string(),
            description: String::new(),
            link: String::new(),
            image_url: None,
            sort_order,
            user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[derive(Debug)]
    struct FixedListQuery {
        items: Vec<PortfolioItemRecord>,
    }

    #[async_trait]
    impl PortfolioQuery for FixedListQuery {
        async fn list_items(&self) -> Result<Vec<PortfolioItemRecord>, PortfolioQueryError> {
            Ok(self.items.clone())
        }

        async fn count_items(&self) -> Result<u64, PortfolioQueryError> {
            Ok(self.items.len() as u64)
        }
    }

    #[derive(Debug, Default)]
    struct OrderCapturingRepository {
        saved: Mutex<Vec<Vec<(Uuid, i32)>>>,
        fail: bool,
    }

    #[async_trait]
    impl PortfolioRepository for OrderCapturingRepository {
        async fn insert_item(
            &self,
            _data: CreatePortfolioItemData,
        ) -> Result<PortfolioItemRecord, PortfolioRepositoryError> {
            unimplemented!()
        }

        async fn update_item(
            &self,
            _item_id: Uuid,
            _data: UpdatePortfolioItemData,
        ) -> Result<PortfolioItemRecord, PortfolioRepositoryError> {
            unimplemented!()
        }

        async fn delete_item(&self, _item_id: Uuid) -> Result<(), PortfolioRepositoryError> {
            unimplemented!()
        }

        async fn save_order(
            &self,
            order: Vec<(Uuid, i32)>,
        ) -> Result<(), PortfolioRepositoryError> {
            if self.fail {
                return Err(PortfolioRepositoryError::DatabaseError("db down".into()));
            }
            self.saved.lock().unwrap().push(order);
            Ok(())
        }
    }

    fn service(
        items: Vec<PortfolioItemRecord>,
        fail: bool,
    ) -> ReorderPortfolioItemsService<OrderCapturingRepository, FixedListQuery> {
        ReorderPortfolioItemsService::new(
            OrderCapturingRepository {
                saved: Mutex::new(vec![]),
                fail,
            },
            FixedListQuery { items },
        )
    }

    #[tokio::test]
    async fn reorder_moves_item_and_resequences() {
        let items = vec![item("a", 0), item("b", 1), item("c", 2), item("d", 3)];
        let svc = service(items.clone(), false);

        let reordered = svc
            .execute(ReorderPortfolioItemsCommand {
                source_index: 0,
                target_index: 2,
            })
            .await
            .unwrap();

        let headers: Vec<_> = reordered.iter().map(|i| i.header.as_str()).collect();
        assert_eq!(headers, vec!["b", "c", "a", "d"]);

        let slots: Vec<_> = reordered.iter().map(|i| i.sort_order).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn only_displaced_rows_are_persisted() {
        let items = vec![item("a", 0), item("b", 1), item("c", 2), item("d", 3)];
        let svc = service(items.clone(), false);

        svc.execute(ReorderPortfolioItemsCommand {
            source_index: 1,
            target_index: 2,
        })
        .await
        .unwrap();

        let saved = svc.repository.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        // Swapping positions 1 and 2 leaves rows 0 and 3 untouched.
        assert_eq!(saved[0].len(), 2);
    }

    #[tokio::test]
    async fn same_position_issues_no_write() {
        let items = vec![item("a", 0), item("b", 1)];
        let svc = service(items.clone(), false);

        let reordered = svc
            .execute(ReorderPortfolioItemsCommand {
                source_index: 1,
                target_index: 1,
            })
            .await
            .unwrap();

        assert_eq!(reordered[0].header, "a");
        assert_eq!(reordered[1].header, "b");
        assert!(svc.repository.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_list_answers_empty_without_write() {
        let svc = service(vec![], false);

        let reordered = svc
            .execute(ReorderPortfolioItemsCommand {
                source_index: 0,
                target_index: 0,
            })
            .await
            .unwrap();

        assert!(reordered.is_empty());
        assert!(svc.repository.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn out_of_bounds_source_is_rejected_without_write() {
        let items = vec![item("a", 0), item("b", 1)];
        let svc = service(items, false);

        let result = svc
            .execute(ReorderPortfolioItemsCommand {
                source_index: 5,
                target_index: 0,
            })
            .await;

        assert!(matches!(
            result,
            Err(ReorderPortfolioItemsError::SourceOutOfBounds { index: 5, len: 2 })
        ));
        assert!(svc.repository.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_surfaces_error() {
        let items = vec![item("a", 0), item("b", 1)];
        let svc = service(items, true);

        let result = svc
            .execute(ReorderPortfolioItemsCommand {
                source_index: 0,
                target_index: 1,
            })
            .await;

        assert!(matches!(
            result,
            Err(ReorderPortfolioItemsError::RepositoryError(_))
        ));
    }
}
