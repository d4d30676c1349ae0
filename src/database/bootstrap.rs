use tracing::info;

use crate::database::store::{DatabaseError, Store};

// AUTOINCREMENT keeps ids monotonic across deletes
const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        brand TEXT NOT NULL,
        price INTEGER NOT NULL,
        color TEXT NOT NULL,
        img TEXT NOT NULL
    )
"#;

/// brand, price, color, img
pub const SEED_PRODUCTS: [(&str, i64, &str, &str); 4] = [
    (
        "KITON",
        32000,
        "Brown",
        "https://images.unsplash.com/photo-1520975958225-3f61d18026c9?auto=format&fit=crop&w=900&q=80",
    ),
    (
        "LORO PIANA",
        3500,
        "Navy",
        "https://images.unsplash.com/photo-1520975732158-0c2d9933b4aa?auto=format&fit=crop&w=900&q=80",
    ),
    (
        "ZEGNA",
        4500,
        "Grey",
        "https://images.unsplash.com/photo-1520975748162-79a2b1a6df9a?auto=format&fit=crop&w=900&q=80",
    ),
    (
        "HERMES",
        2000,
        "Black",
        "https://images.unsplash.com/photo-1520975682031-a54f4a7d2b53?auto=format&fit=crop&w=900&q=80",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Rows inserted by this run; 0 when the table already had data.
    pub seeded: usize,
}

/// Create the products table if it does not exist yet.
pub async fn create_schema(store: &Store) -> Result<(), DatabaseError> {
    let mut conn = store.acquire().await?;
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut *conn).await?;
    Ok(())
}

/// Create the products table if absent and seed it if empty.
///
/// Safe to call on every start.
pub async fn initialize(store: &Store) -> Result<BootstrapReport, DatabaseError> {
    create_schema(store).await?;

    let mut tx = store.pool().begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tx.rollback().await?;
        info!("Catalog already holds {} products, skipping seed", existing);
        return Ok(BootstrapReport { seeded: 0 });
    }

    for (brand, price, color, img) in SEED_PRODUCTS {
        sqlx::query("INSERT INTO products (brand, price, color, img) VALUES (?, ?, ?, ?)")
            .bind(brand)
            .bind(price)
            .bind(color)
            .bind(img)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    info!("Seeded empty catalog with {} products", SEED_PRODUCTS.len());
    Ok(BootstrapReport {
        seeded: SEED_PRODUCTS.len(),
    })
}
