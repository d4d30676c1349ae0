use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::database::models::NewProduct;
use crate::database::Store;

/// Config pointing at a fresh file under the system temp directory.
pub fn temp_database_config() -> DatabaseConfig {
    let path = std::env::temp_dir().join(format!("lucio_test_{}.db", Uuid::new_v4().simple()));
    DatabaseConfig {
        path: path.to_string_lossy().into_owned(),
        max_connections: 4,
        connection_timeout: 5,
        busy_timeout: 5,
    }
}

/// Removes the database file and its WAL companions when dropped.
pub struct TempDatabase {
    path: String,
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path, suffix));
        }
    }
}

/// Open a store with an empty products table, backed by a throwaway file.
pub async fn temp_store() -> (Store, TempDatabase) {
    let config = temp_database_config();
    let store = Store::open(&config).await.expect("failed to open temp store");
    crate::database::bootstrap::create_schema(&store)
        .await
        .expect("failed to create schema");
    (store, TempDatabase { path: config.path })
}

pub fn new_product(brand: &str, price: i64) -> NewProduct {
    NewProduct {
        brand: brand.to_string(),
        price,
        color: "red".to_string(),
        img: "https://example.com/item.jpg".to_string(),
    }
}
