use crate::database::models::{NewProduct, Product, ProductPatch};
use crate::database::query_builder::{bind_param, UpdateBuilder};
use crate::database::store::{DatabaseError, Store};

pub const PRODUCTS_TABLE: &str = "products";

/// One statement per call against the products table.
#[derive(Clone, Debug)]
pub struct ProductRepository {
    store: Store,
}

impl ProductRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All products, newest first.
    pub async fn select_all(&self) -> Result<Vec<Product>, DatabaseError> {
        let mut conn = self.store.acquire().await?;
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, brand, price, color, img FROM products ORDER BY id DESC",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<Product>, DatabaseError> {
        let mut conn = self.store.acquire().await?;
        let row = sqlx::query_as::<_, Product>(
            "SELECT id, brand, price, color, img FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let mut conn = self.store.acquire().await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Inserts a row and returns the id the store assigned to it.
    pub async fn insert(&self, product: &NewProduct) -> Result<i64, DatabaseError> {
        let mut conn = self.store.acquire().await?;
        let result =
            sqlx::query("INSERT INTO products (brand, price, color, img) VALUES (?, ?, ?, ?)")
                .bind(&product.brand)
                .bind(product.price)
                .bind(&product.color)
                .bind(&product.img)
                .execute(&mut *conn)
                .await?;
        Ok(result.last_insert_rowid())
    }

    /// Applies the patch to one row and returns the number of rows touched.
    /// An empty patch returns 0 without reaching the store.
    pub async fn update(&self, id: i64, patch: &ProductPatch) -> Result<u64, DatabaseError> {
        let Some(statement) = UpdateBuilder::new(PRODUCTS_TABLE)
            .set_all(patch.assignments())
            .where_id(id)
        else {
            return Ok(0);
        };

        let mut q = sqlx::query(&statement.query);
        for p in statement.params.iter() {
            q = bind_param(q, p);
        }

        let mut conn = self.store.acquire().await?;
        let result = q.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let mut conn = self.store.acquire().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
