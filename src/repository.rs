use crate::models::{NewProduct, Product, ProductChanges};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// ProductRepository
///
/// Abstract contract for all persistence operations on the products table.
/// Handlers depend on this trait only, so tests can substitute an in-memory
/// mock for the Postgres implementation.
///
/// Methods surface `sqlx::Error` untranslated; the handler boundary decides
/// how each failure maps to HTTP. The boolean results of the mutating
/// methods report whether a row was actually affected, which is how the
/// handlers distinguish "not found" from a genuine storage failure.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product, ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Inserts one validated product. The database assigns the id; the
    /// caller never sees it.
    async fn insert_product(&self, new: NewProduct) -> Result<(), sqlx::Error>;

    /// Deletes the product with the given id. Returns false when no row
    /// matched.
    async fn delete_product(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Applies a validated partial update atomically. Returns false when no
    /// row matched, in which case nothing was written.
    async fn update_product(&self, id: i64, changes: ProductChanges) -> Result<bool, sqlx::Error>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer through the
/// application state.
pub type RepositoryState = Arc<dyn ProductRepository>;

/// PostgresRepository
///
/// The production implementation, backed by a bounded PgPool.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresRepository {
    async fn list_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, type, price, amount FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_product(&self, new: NewProduct) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO products (name, type, price, amount) VALUES ($1, $2, $3, $4)")
            .bind(new.name)
            .bind(new.product_type)
            .bind(new.price)
            .bind(new.amount)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Each supplied field is its own UPDATE statement, but all of them run
    /// inside a single transaction: either every selected field is applied
    /// or none is. A zero-rows-affected outcome rolls the transaction back
    /// and reports not-found.
    async fn update_product(&self, id: i64, changes: ProductChanges) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut matched = true;

        if let Some(name) = changes.name {
            let result = sqlx::query("UPDATE products SET name = $1 WHERE id = $2")
                .bind(name)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            matched &= result.rows_affected() > 0;
        }
        if let Some(product_type) = changes.product_type {
            let result = sqlx::query("UPDATE products SET type = $1 WHERE id = $2")
                .bind(product_type)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            matched &= result.rows_affected() > 0;
        }
        if let Some(price) = changes.price {
            let result = sqlx::query("UPDATE products SET price = $1 WHERE id = $2")
                .bind(price)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            matched &= result.rows_affected() > 0;
        }
        if let Some(amount) = changes.amount {
            let result = sqlx::query("UPDATE products SET amount = $1 WHERE id = $2")
                .bind(amount)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            matched &= result.rows_affected() > 0;
        }

        if !matched {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
