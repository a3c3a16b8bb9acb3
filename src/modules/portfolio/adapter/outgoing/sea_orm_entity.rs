use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::portfolio::application::ports::outgoing::PortfolioItemRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub header: String,

    pub description: String,

    pub link: String,

    pub image_url: Option<String>,

    pub sort_order: i32,

    pub user_id: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> PortfolioItemRecord {
        PortfolioItemRecord {
            id: self.id,
            header: self.header.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            image_url: self.image_url.clone(),
            sort_order: self.sort_order,
            user_id: self.user_id.map(UserId::from),
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
