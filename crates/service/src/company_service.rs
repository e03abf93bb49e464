use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use serde::Serialize;

use models::company;
use crate::errors::ServiceError;

/// Entry of the company select box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyOption {
    pub id: i64,
    pub name: String,
}

/// All companies ordered by name.
pub async fn options<C: ConnectionTrait>(db: &C) -> Result<Vec<CompanyOption>, ServiceError> {
    let rows = company::Entity::find()
        .order_by_asc(company::Column::Name)
        .order_by_asc(company::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(rows.into_iter().map(|c| CompanyOption { id: c.id, name: c.name }).collect())
}

/// Get company by id.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<company::Model>, ServiceError> {
    company::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Re-fetch the referenced company; a submitted id must name an existing row.
pub async fn resolve<C: ConnectionTrait>(db: &C, company_id: Option<i64>) -> Result<Option<company::Model>, ServiceError> {
    let Some(id) = company_id else { return Ok(None); };
    match find_by_id(db, id).await? {
        Some(c) => Ok(Some(c)),
        None => Err(ServiceError::UnknownCompany(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, unique};

    #[tokio::test]
    async fn options_are_sorted_by_name() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let opts = options(&db).await?;
        assert!(!opts.is_empty());
        let pos = |name: &str| opts.iter().position(|o| o.name == name);
        let (apple, ibm, xerox) = (pos("Apple Inc."), pos("IBM"), pos("Xerox"));
        assert!(apple.is_some() && ibm.is_some() && xerox.is_some());
        assert!(apple < ibm && ibm < xerox);
        Ok(())
    }

    #[tokio::test]
    async fn resolve_checks_existence() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = company::create(&db, &unique("resolve")).await?;

        assert_eq!(resolve(&db, None).await?, None);
        assert_eq!(resolve(&db, Some(c.id)).await?.map(|m| m.id), Some(c.id));
        let err = resolve(&db, Some(i64::MAX)).await.unwrap_err();
        assert!(matches!(err, ServiceError::UnknownCompany(id) if id == i64::MAX));
        Ok(())
    }
}
