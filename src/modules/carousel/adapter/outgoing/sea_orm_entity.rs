use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::carousel::application::ports::outgoing::CarouselImageRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_carousel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub image_url: String,

    pub caption: Option<String>,

    pub sort_order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> CarouselImageRecord {
        CarouselImageRecord {
            id: self.id,
            image_url: self.image_url.clone(),
            caption: self.caption.clone(),
            sort_order: self.sort_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
