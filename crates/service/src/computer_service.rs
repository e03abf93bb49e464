use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;
use tracing::debug;

use models::{company, computer::{self, ComputerDraft}};
use crate::{
    company_service,
    errors::ServiceError,
    pagination::{Page, PageRequest, SortColumn},
};

/// Listing row: a computer and the company it references, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComputerWithCompany {
    #[serde(flatten)]
    pub computer: computer::Model,
    pub company: Option<company::Model>,
}

/// Get computer by id.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<computer::Model, ServiceError> {
    computer::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("computer"))
}

/// Insert a new computer after resolving its company.
pub async fn save<C: ConnectionTrait>(db: &C, draft: ComputerDraft) -> Result<computer::Model, ServiceError> {
    draft.validate()?;
    let company = company_service::resolve(db, draft.company_id).await?;
    let draft = draft.company(company.map(|c| c.id));
    let created = draft.into_active_model(None).insert(db).await.map_err(ServiceError::db)?;
    Ok(created)
}

/// Overwrite every field of computer `id`. The id argument always names the row.
pub async fn update<C: ConnectionTrait>(db: &C, id: i64, draft: ComputerDraft) -> Result<computer::Model, ServiceError> {
    draft.validate()?;
    find_by_id(db, id).await?;
    let company = company_service::resolve(db, draft.company_id).await?;
    let draft = draft.company(company.map(|c| c.id));
    let updated = draft.into_active_model(Some(id)).update(db).await.map_err(ServiceError::db)?;
    Ok(updated)
}

/// Delete computer `id`; returns the removed row.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<computer::Model, ServiceError> {
    let existing = find_by_id(db, id).await?;
    computer::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    Ok(existing)
}

/// One page of computers, filtered by name and ordered by an allow-listed column.
pub async fn page<C: ConnectionTrait>(db: &C, req: &PageRequest) -> Result<Page<ComputerWithCompany>, ServiceError> {
    let (page, page_size, offset) = req.normalize();

    let mut base = computer::Entity::find();
    if !req.filter.is_empty() {
        base = base.filter(name_contains(&req.filter));
    }

    let total = base.clone().count(db).await.map_err(ServiceError::db)?;

    let order = sea_orm::Order::from(req.order);
    let select = base.find_also_related(company::Entity);
    let select = match req.sort {
        SortColumn::Name => select.order_by(computer::Column::Name, order),
        SortColumn::Introduced => select.order_by(computer::Column::Introduced, order),
        SortColumn::Discontinued => select.order_by(computer::Column::Discontinued, order),
        SortColumn::CompanyName => select.order_by(company::Column::Name, order),
    };
    let rows = select
        .order_by_asc(computer::Column::Id)
        .offset(offset)
        .limit(page_size)
        .all(db)
        .await
        .map_err(ServiceError::db)?;

    debug!(page, page_size, total, rows = rows.len(), sort = %req.sort, "computer page");
    let items = rows
        .into_iter()
        .map(|(computer, company)| ComputerWithCompany { computer, company })
        .collect();
    Ok(Page { items, total, page, page_size })
}

/// `lower(computer.name) LIKE '%<filter>%'` with LIKE wildcards in the filter escaped.
fn name_contains(filter: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&filter.to_lowercase()));
    Expr::expr(Func::lower(Expr::col((computer::Entity, computer::Column::Name))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
