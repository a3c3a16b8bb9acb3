use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::message::application::ports::outgoing::MessageRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub message: String,

    pub status: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> MessageRecord {
        MessageRecord {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            status: self.status.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
