use sea_orm::entity::prelude::*;

use crate::modules::document_store::application::ports::outgoing::{
    Document, DocumentStoreError,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub collection: String,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_document(&self) -> Result<Document, DocumentStoreError> {
        match &self.data {
            Json::Object(map) => Ok(Document {
                id: self.id.clone(),
                fields: map.clone(),
            }),
            other => Err(DocumentStoreError::Serialization(format!(
                "{}/{} holds a non-object payload: {}",
                self.collection, self.id, other
            ))),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
