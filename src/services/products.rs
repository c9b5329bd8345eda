use crate::domain::product::{NewProduct, Product, SortKey, UpdateProduct};
use crate::domain::stats::ProductStats;
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for the catalog listing.
///
/// Filters by the optional search string, orders by the sort key and derives
/// statistics from the same materialized result set, so items and stats are
/// always mutually consistent even when writers are active.
pub fn list_products<R>(
    search: Option<&str>,
    sort: SortKey,
    repo: &R,
) -> ServiceResult<(Vec<Product>, ProductStats)>
where
    R: ProductReader,
{
    let mut query = ProductListQuery::default().sort(sort);
    if let Some(search) = search {
        query = query.search(search);
    }

    let items = repo.list_products(query).map_err(|e| {
        log::error!("Failed to list products: {e}");
        ServiceError::from(e)
    })?;

    let stats = ProductStats::compute(&items);

    Ok((items, stats))
}

/// Validate and persist a new product, returning the stored record.
pub fn create_product<R>(product: &NewProduct, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    repo.create_product(product).map_err(|e| {
        if !matches!(e, RepositoryError::Validation(_)) {
            log::error!("Failed to create product: {e}");
        }
        ServiceError::from(e)
    })
}

/// Fetch a single product by id.
pub fn get_product<R>(id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    match repo.get_product_by_id(id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(e.into())
        }
    }
}

/// Apply a full-record update under optimistic concurrency.
///
/// A stale version against a live record maps to [`ServiceError::Conflict`];
/// an id deleted by a concurrent writer maps to [`ServiceError::NotFound`].
/// Conflict recovery (reload and retry) is the caller's decision.
pub fn update_product<R>(id: i32, update: &UpdateProduct, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    repo.update_product(id, update).map_err(|e| {
        if matches!(e, RepositoryError::Pool(_) | RepositoryError::Persistence(_)) {
            log::error!("Failed to update product: {e}");
        }
        ServiceError::from(e)
    })
}

/// Delete a product by id. Deleting an absent id reports `NotFound` rather
/// than succeeding silently.
pub fn delete_product<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    match repo.delete_product(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(e.into())
        }
    }
}
