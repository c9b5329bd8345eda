use diesel::prelude::*;
use validator::Validate;

use crate::domain::product::{NewProduct, Product, SortKey, UpdateProduct};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            // SQLite LIKE is case-insensitive for ASCII.
            let pattern = format!("%{search}%");
            items = items.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern)),
            );
        }

        items = match query.sort {
            SortKey::NameAsc => items.order(products::name.asc()),
            SortKey::NameDesc => items.order(products::name.desc()),
            SortKey::PriceAsc => items.order(products::price.asc()),
            SortKey::PriceDesc => items.order(products::price.desc()),
            SortKey::DateAsc => items.order(products::created_at.asc()),
            SortKey::DateDesc => items.order(products::created_at.desc()),
        };

        // Equal keys keep insertion order, so output is deterministic.
        let items = items
            .then_order_by(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        product.validate()?;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let created = diesel::insert_into(products::table)
            .values(&db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(&self, id: i32, update: &UpdateProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        update.validate()?;

        let mut conn = self.conn()?;

        conn.transaction::<Product, RepositoryError, _>(|conn| {
            // Compare-and-swap on the version stamp; id and created_at are
            // never written.
            let affected = diesel::update(
                products::table
                    .filter(products::id.eq(id))
                    .filter(products::version.eq(update.version)),
            )
            .set((
                products::name.eq(&update.name),
                products::description.eq(&update.description),
                products::price.eq(update.price),
                products::version.eq(update.version + 1),
            ))
            .execute(conn)?;

            if affected == 0 {
                let exists: bool = diesel::select(diesel::dsl::exists(
                    products::table.filter(products::id.eq(id)),
                ))
                .get_result(conn)?;

                return Err(if exists {
                    RepositoryError::ConcurrencyConflict
                } else {
                    RepositoryError::NotFound
                });
            }

            let updated = products::table
                .filter(products::id.eq(id))
                .first::<DbProduct>(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_product(&self, id: i32) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(products::table.filter(products::id.eq(id))).execute(&mut conn)?;

        Ok(affected)
    }
}
