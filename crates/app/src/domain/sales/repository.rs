//! Sales Repository

use jiff::civil::Date;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::domain::sales::{
    data::NewSalesRecord,
    records::{SalesRecord, SalesRecordId},
};

const LIST_SALES_SQL: &str = include_str!("sql/list_sales.sql");
const GET_SALE_SQL: &str = include_str!("sql/get_sale.sql");
const CREATE_SALE_SQL: &str = include_str!("sql/create_sale.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteSalesRepository;

impl SqliteSalesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_sales(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<SalesRecord>, sqlx::Error> {
        query_as::<Sqlite, SalesRecord>(LIST_SALES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_sale(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        sale: SalesRecordId,
    ) -> Result<SalesRecord, sqlx::Error> {
        query_as::<Sqlite, SalesRecord>(GET_SALE_SQL)
            .bind(sale.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_sale(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        sale: &NewSalesRecord,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CREATE_SALE_SQL)
            .bind(&sale.product_name)
            .bind(sale.sales_date.to_string())
            .bind(sale.quantity_sold)
            .bind(sale.total_revenue)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for SalesRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let sales_date: String = row.try_get("sales_date")?;

        Ok(Self {
            id: SalesRecordId::from_i64(row.try_get("id")?),
            product_name: row.try_get("product_name")?,
            sales_date: sales_date
                .parse::<Date>()
                .map_err(|source| sqlx::Error::ColumnDecode {
                    index: "sales_date".to_string(),
                    source: Box::new(source),
                })?,
            quantity_sold: row.try_get("quantity_sold")?,
            total_revenue: row.try_get("total_revenue")?,
        })
    }
}
