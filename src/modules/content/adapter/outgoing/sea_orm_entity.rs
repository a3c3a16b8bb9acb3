use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::ContentKind, ports::outgoing::ContentRecord,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    /// One row per section; unique in the schema.
    pub content_type: String,

    pub content: Json,

    pub revision: i64,

    pub user_id: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self, kind: ContentKind) -> ContentRecord {
        ContentRecord {
            kind,
            content: self.content.clone(),
            revision: self.revision,
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
