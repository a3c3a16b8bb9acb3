use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::analytics::application::ports::outgoing::ClickRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_clicks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub project_title: String,

    pub clicked_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ClickRecord {
        ClickRecord {
            id: self.id,
            project_title: self.project_title.clone(),
            clicked_at: self.clicked_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
