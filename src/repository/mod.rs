use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, SortKey, UpdateProduct};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,
    /// Requested ordering; ties always fall back to ascending id.
    pub sort: SortKey,
}

impl ProductListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters, in the
    /// requested order.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Validate and persist a new product, returning the stored record with
    /// its generated id, creation time and version.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Validate and persist a full-record update under optimistic
    /// concurrency. A stale version against a live row is a
    /// `ConcurrencyConflict`; an absent row is `NotFound`.
    fn update_product(&self, id: i32, update: &UpdateProduct) -> RepositoryResult<Product>;
    /// Delete a product by id, returning the number of rows removed.
    fn delete_product(&self, id: i32) -> RepositoryResult<usize>;
}
