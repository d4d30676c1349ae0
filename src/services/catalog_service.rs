use tracing::{info, warn};

use crate::database::models::{NewProduct, Product, ProductPatch};
use crate::database::{DatabaseError, ProductRepository};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// List, create, update and delete over the products table.
///
/// Callers are responsible for running the admin gate before the three
/// mutating operations.
#[derive(Clone, Debug)]
pub struct CatalogService {
    repository: ProductRepository,
}

impl CatalogService {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }

    /// Every product, highest id first.
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.repository.select_all().await?)
    }

    /// Insert a product and return its newly assigned id.
    pub async fn create(&self, product: NewProduct) -> Result<i64, CatalogError> {
        validate_brand(&product.brand)?;

        let id = self.repository.insert(&product).await?;
        info!(id, brand = %product.brand, "Created product");
        Ok(id)
    }

    /// Apply the present fields of `patch` to product `id`.
    ///
    /// Succeeds without error when the patch is empty or when no product has
    /// that id; the latter is logged so it does not go unnoticed.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<(), CatalogError> {
        if let Some(brand) = &patch.brand {
            validate_brand(brand)?;
        }
        if patch.is_empty() {
            return Ok(());
        }

        match self.repository.update(id, &patch).await? {
            0 => warn!(id, "Update matched no product"),
            _ => info!(id, "Updated product"),
        }
        Ok(())
    }

    /// Remove product `id`; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        match self.repository.delete(id).await? {
            0 => warn!(id, "Delete matched no product"),
            _ => info!(id, "Deleted product"),
        }
        Ok(())
    }
}

fn validate_brand(brand: &str) -> Result<(), CatalogError> {
    if brand.trim().is_empty() {
        return Err(CatalogError::Validation {
            field: "brand",
            message: "brand must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize;
    use crate::testing::{new_product, temp_store};

    #[tokio::test]
    async fn created_ids_strictly_increase_across_deletes() {
        let (store, _guard) = temp_store().await;
        let catalog = CatalogService::new(ProductRepository::new(store));

        let mut last = 0;
        for round in 0..5 {
            let id = catalog.create(new_product("X", round)).await.unwrap();
            assert!(id > last, "id {} not greater than {}", id, last);
            if round % 2 == 0 {
                catalog.delete(id).await.unwrap();
            }
            last = id;
        }
    }

    #[tokio::test]
    async fn list_is_descending_by_id() {
        let (store, _guard) = temp_store().await;
        let catalog = CatalogService::new(ProductRepository::new(store));
        for price in 0..6 {
            catalog.create(new_product("X", price)).await.unwrap();
        }

        let ids: Vec<i64> = catalog.list().await.unwrap().iter().map(|p| p.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]), "not descending: {:?}", ids);
    }

    #[tokio::test]
    async fn empty_patch_leaves_catalog_unchanged() {
        let (store, _guard) = temp_store().await;
        initialize(&store).await.unwrap();
        let catalog = CatalogService::new(ProductRepository::new(store));

        let before = catalog.list().await.unwrap();
        for product in &before {
            catalog.update(product.id, ProductPatch::default()).await.unwrap();
        }
        catalog.update(9999, ProductPatch::default()).await.unwrap();
        assert_eq!(catalog.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn rejects_blank_brand() {
        let (store, _guard) = temp_store().await;
        let repository = ProductRepository::new(store);
        let catalog = CatalogService::new(repository.clone());

        let err = catalog.create(new_product("  ", 1)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation { field: "brand", .. }));
        assert_eq!(repository.count().await.unwrap(), 0);

        let id = catalog.create(new_product("A", 1)).await.unwrap();
        let patch = ProductPatch {
            brand: Some(String::new()),
            ..Default::default()
        };
        assert!(catalog.update(id, patch).await.is_err());
        assert_eq!(repository.select_one(id).await.unwrap().unwrap().brand, "A");
    }

    #[tokio::test]
    async fn missing_ids_are_silent_successes() {
        let (store, _guard) = temp_store().await;
        let catalog = CatalogService::new(ProductRepository::new(store));

        let patch = ProductPatch {
            price: Some(1),
            ..Default::default()
        };
        assert!(catalog.update(12345, patch).await.is_ok());
        assert!(catalog.delete(12345).await.is_ok());
    }
}
