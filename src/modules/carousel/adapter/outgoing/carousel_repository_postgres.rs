use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::carousel::application::ports::outgoing::{
    CarouselImageRecord, CarouselRepository, CarouselRepositoryError, CreateCarouselImageData,
    UpdateCarouselImageData,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct CarouselRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarouselRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CarouselRepositoryError {
    match e {
        DbErr::RecordNotFound(_) => CarouselRepositoryError::ImageNotFound,
        other => CarouselRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl CarouselRepository for CarouselRepositoryPostgres {
    async fn insert_image(
        &self,
        data: CreateCarouselImageData,
    ) -> Result<CarouselImageRecord, CarouselRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            image_url: Set(data.image_url),
            caption: Set(data.caption),
            sort_order: Set(data.sort_order),
            ..Default::default()
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update_image(
        &self,
        image_id: Uuid,
        data: UpdateCarouselImageData,
    ) -> Result<CarouselImageRecord, CarouselRepositoryError> {
        let active = ActiveModel {
            id: Set(image_id),
            image_url: Set(data.image_url),
            caption: Set(data.caption),
            ..Default::default()
        };

        let updated: Model = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete_image(&self, image_id: Uuid) -> Result<(), CarouselRepositoryError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    let deleted = Entity::delete_by_id(image_id).exec(txn).await?;

                    if deleted.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound(format!(
                            "carousel image {image_id} not found"
                        )));
                    }

                    let remaining = Entity::find()
                        .order_by_asc(Column::SortOrder)
                        .all(txn)
                        .await?;

                    for (index, row) in remaining.into_iter().enumerate() {
                        let expected = index as i32;
                        if row.sort_order != expected {
                            let mut active: ActiveModel = row.into();
                            active.sort_order = Set(expected);
                            active.update(txn).await?;
                        }
                    }

                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(err) => map_db_err(err),
                sea_orm::TransactionError::Transaction(err) => map_db_err(err),
            })
    }

    async fn save_order(
        &self,
        order: Vec<(Uuid, i32)>,
    ) -> Result<(), CarouselRepositoryError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    for (image_id, sort_order) in order {
                        Entity::update_many()
                            .col_expr(Column::SortOrder, Expr::value(sort_order))
                            .filter(Column::Id.eq(image_id))
                            .exec(txn)
                            .await?;
                    }

                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(err) => map_db_err(err),
                sea_orm::TransactionError::Transaction(err) => map_db_err(err),
            })
    }
}
