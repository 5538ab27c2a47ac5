//! Sales service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Sqlite, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::sales::{
        data::NewSalesRecord,
        errors::SalesServiceError,
        records::{SalesRecord, SalesRecordId},
        repository::SqliteSalesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteSalesService {
    db: Db,
    repository: SqliteSalesRepository,
}

impl SqliteSalesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteSalesRepository::new(),
        }
    }

    async fn insert_all(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        records: &[NewSalesRecord],
    ) -> Result<u64, SalesServiceError> {
        let mut inserted = 0;

        for record in records {
            inserted += self.repository.create_sale(tx, record).await?;
        }

        Ok(inserted)
    }
}

#[async_trait]
impl SalesService for SqliteSalesService {
    async fn list_sales(&self) -> Result<Vec<SalesRecord>, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let result = self
            .repository
            .list_sales(&mut tx)
            .await
            .map_err(SalesServiceError::from);

        self.db.finish(tx, result).await
    }

    async fn get_sale(&self, sale: SalesRecordId) -> Result<SalesRecord, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let result = self
            .repository
            .get_sale(&mut tx, sale)
            .await
            .map_err(SalesServiceError::from);

        self.db.finish(tx, result).await
    }

    async fn import_sales(&self, records: Vec<NewSalesRecord>) -> Result<u64, SalesServiceError> {
        if let Some(row) = records
            .iter()
            .position(|record| record.product_name.trim().is_empty())
        {
            return Err(SalesServiceError::MissingProductName { row: row + 1 });
        }

        let mut tx = self.db.begin_write().await?;

        let result = self.insert_all(&mut tx, &records).await;

        let inserted = self.db.finish(tx, result).await?;

        info!(inserted, "imported sales records");

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Retrieves all sales records in ascending id order.
    async fn list_sales(&self) -> Result<Vec<SalesRecord>, SalesServiceError>;

    /// Retrieve a single sales record.
    async fn get_sale(&self, sale: SalesRecordId) -> Result<SalesRecord, SalesServiceError>;

    /// Inserts every record in one transaction and returns how many were stored.
    ///
    /// Nothing is stored when any record is rejected.
    async fn import_sales(&self, records: Vec<NewSalesRecord>) -> Result<u64, SalesServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn sale(product_name: &str, day: i8, quantity_sold: i64, total_revenue: f64) -> NewSalesRecord {
        NewSalesRecord {
            product_name: product_name.to_string(),
            sales_date: date(2024, 3, day),
            quantity_sold,
            total_revenue,
        }
    }

    #[tokio::test]
    async fn imported_rows_read_back_exactly() -> TestResult {
        let ctx = TestContext::new().await;

        let rows = vec![
            sale("Widget", 1, 3, 29.97),
            sale("Gadget", 2, 1, 15.5),
            sale("Widget", 3, 10, 99.9),
        ];

        let inserted = ctx.sales.import_sales(rows.clone()).await?;
        let stored = ctx.sales.list_sales().await?;

        assert_eq!(inserted, 3);
        assert_eq!(stored.len(), 3);

        for (record, expected) in stored.iter().zip(&rows) {
            assert_eq!(record.product_name, expected.product_name);
            assert_eq!(record.sales_date, expected.sales_date);
            assert_eq!(record.quantity_sold, expected.quantity_sold);
            assert!((record.total_revenue - expected.total_revenue).abs() < f64::EPSILON);
        }

        Ok(())
    }

    #[tokio::test]
    async fn get_sale_returns_single_record() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.sales.import_sales(vec![sale("Widget", 9, 2, 4.0)]).await?;

        let first = ctx.sales.list_sales().await?.remove(0);
        let fetched = ctx.sales.get_sale(first.id).await?;

        assert_eq!(fetched, first);
        assert_eq!(fetched.sales_date, date(2024, 3, 9));

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_sale_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.sales.get_sale(SalesRecordId::from_i64(1)).await;

        assert!(
            matches!(result, Err(SalesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn blank_product_name_rejects_whole_batch() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .sales
            .import_sales(vec![sale("Widget", 1, 1, 1.0), sale("  ", 2, 1, 1.0)])
            .await;

        assert!(
            matches!(result, Err(SalesServiceError::MissingProductName { row: 2 })),
            "expected MissingProductName, got {result:?}"
        );
        assert!(ctx.sales.list_sales().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn empty_import_stores_nothing() -> TestResult {
        let ctx = TestContext::new().await;

        assert_eq!(ctx.sales.import_sales(Vec::new()).await?, 0);
        assert!(ctx.sales.list_sales().await?.is_empty());

        Ok(())
    }
}
