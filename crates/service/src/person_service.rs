use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use models::person::{self, PersonDraft};
use crate::errors::ServiceError;

/// All persons in insertion order.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<person::Model>, ServiceError> {
    person::Entity::find()
        .order_by_asc(person::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Get person by id.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<person::Model, ServiceError> {
    person::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("person"))
}

/// Insert a person; a missing due date defaults to today (UTC).
pub async fn create<C: ConnectionTrait>(db: &C, draft: PersonDraft) -> Result<person::Model, ServiceError> {
    draft.validate()?;
    let today = Utc::now().date_naive();
    draft.into_active_model(today).insert(db).await.map_err(ServiceError::db)
}
