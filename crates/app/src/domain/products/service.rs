//! Products service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use sqlx::{Sqlite, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductPayload},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::SqliteProductsRepository,
        validation,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }

    async fn apply_update(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        product: ProductId,
        body: Value,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let current = self.repository.get_product(tx, product).await?;
        let update = validation::product_update(ProductPayload::from_json(body)?)?;
        let columns = update.merge(NewProduct::from(current));

        self.repository
            .update_product(tx, product, &columns)
            .await
            .map_err(|error| ProductsServiceError::from_write(error, &columns.name))
    }

    async fn remove(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        product: ProductId,
    ) -> Result<(), ProductsServiceError> {
        self.repository.get_product(tx, product).await?;

        if self.repository.delete_product(tx, product).await? == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let result = self
            .repository
            .list_products(&mut tx)
            .await
            .map_err(ProductsServiceError::from);

        self.db.finish(tx, result).await
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let result = self
            .repository
            .get_product(&mut tx, product)
            .await
            .map_err(ProductsServiceError::from);

        self.db.finish(tx, result).await
    }

    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = validation::new_product(payload)?;

        let mut tx = self.db.begin_write().await?;

        let result = self
            .repository
            .create_product(&mut tx, &product)
            .await
            .map_err(|error| ProductsServiceError::from_write(error, &product.name));

        let created = self.db.finish(tx, result).await?;

        info!(product = %created.id, name = %created.name, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        body: Value,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_write().await?;

        let result = self.apply_update(&mut tx, product, body).await;

        let updated = self.db.finish(tx, result).await?;

        info!(product = %updated.id, "updated product");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_write().await?;

        let result = self.remove(&mut tx, product).await;

        self.db.finish(tx, result).await?;

        info!(%product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in ascending id order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates `payload` and stores it as a new product.
    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies the fields present in the JSON `body` to an existing product.
    ///
    /// A missing product is reported before the body is validated.
    async fn update_product(
        &self,
        product: ProductId,
        body: Value,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
