use async_trait::async_trait;

use crate::portfolio::application::ports::{
    incoming::use_cases::{
        CreatePortfolioItemCommand, CreatePortfolioItemError, CreatePortfolioItemUseCase,
    },
    outgoing::{
        CreatePortfolioItemData, PortfolioItemRecord, PortfolioQuery, PortfolioRepository,
    },
};

const PLACEHOLDER_HEADER: &str = "New Project";
const PLACEHOLDER_DESCRIPTION: &str = "Click to edit description";

#[derive(Debug, Clone)]
pub struct CreatePortfolioItemService<R, Q>
where
    R: PortfolioRepository + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreatePortfolioItemService<R, Q>
where
    R: PortfolioRepository + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreatePortfolioItemUseCase for CreatePortfolioItemService<R, Q>
where
    R: PortfolioRepository + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItemRecord, CreatePortfolioItemError> {
        // Appending at position N keeps 0..N-1 dense without touching
        // any existing row.
        let next_slot = self
            .query
            .count_items()
            .await
            .map_err(|e| CreatePortfolioItemError::RepositoryError(e.to_string()))?;

        let data = CreatePortfolioItemData {
            header: PLACEHOLDER_HEADER.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            link: String::new(),
            image_url: None,
            sort_order: next_slot as i32,
            owner: command.owner(),
        };

        self.repository
            .insert_item(data)
            .await
            .map_err(|e| CreatePortfolioItemError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        auth::application::domain::entities::UserId,
        portfolio::application::ports::outgoing::{
            PortfolioQueryError, PortfolioRepositoryError, UpdatePortfolioItemData,
        },
    };

    #[derive(Debug, Clone)]
    struct RecordingRepository;

    #[async_trait]
    impl PortfolioRepository for RecordingRepository {
        async fn insert_item(
            &self,
            data: CreatePortfolioItemData,
        ) -> Result<PortfolioItemRecord, PortfolioRepositoryError> {
            Ok(PortfolioItemRecord {
                id: Uuid::new_v4(),
                header: data.header,
                description: data.description,
                link: data.link,
                image_url: data.image_url,
                sort_order: data.sort_order,
                user_id: Some(data.owner),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
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
            _order: Vec<(Uuid, i32)>,
        ) -> Result<(), PortfolioRepositoryError> {
            unimplemented!()
        }
    }

    #[derive(Debug, Clone)]
    struct FixedCountQuery {
        count: u64,
    }

    #[async_trait]
    impl PortfolioQuery for FixedCountQuery {
        async fn list_items(&self) -> Result<Vec<PortfolioItemRecord>, PortfolioQueryError> {
            unimplemented!()
        }

        async fn count_items(&self) -> Result<u64, PortfolioQueryError> {
            Ok(self.count)
        }
    }

    #[tokio::test]
    async fn new_card_gets_placeholders_and_next_slot() {
        let owner = UserId::from(Uuid::new_v4());
        let service =
            CreatePortfolioItemService::new(RecordingRepository, FixedCountQuery { count: 3 });

        let item = service
            .execute(CreatePortfolioItemCommand::new(owner))
            .await
            .unwrap();

        assert_eq!(item.header, "New Project");
        assert_eq!(item.description, "Click to edit description");
        assert_eq!(item.link, "");
        assert_eq!(item.sort_order, 3);
        assert_eq!(item.user_id, Some(owner));
    }

    #[tokio::test]
    async fn first_card_lands_in_slot_zero() {
        let owner = UserId::from(Uuid::new_v4());
        let service =
            CreatePortfolioItemService::new(RecordingRepository, FixedCountQuery { count: 0 });

        let item = service
            .execute(CreatePortfolioItemCommand::new(owner))
            .await
            .unwrap();

        assert_eq!(item.sort_order, 0);
    }
}
