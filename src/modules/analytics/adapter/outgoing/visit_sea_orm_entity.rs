use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::analytics::application::ports::outgoing::VisitRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_visits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    /// Unique per deployment URL.
    pub app_url: String,

    pub visit_count: i64,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> VisitRecord {
        VisitRecord {
            id: self.id,
            app_url: self.app_url.clone(),
            visit_count: self.visit_count,
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
