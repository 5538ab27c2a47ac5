//! Sales record response bodies.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use stockroom_app::domain::sales::records::SalesRecord;

/// Sales record as rendered to clients. Dates render as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SalesRecordResponse {
    pub id: i64,
    pub product_name: String,
    pub sales_date: Date,
    pub quantity_sold: i64,
    pub total_revenue: f64,
}

impl From<SalesRecord> for SalesRecordResponse {
    fn from(record: SalesRecord) -> Self {
        Self {
            id: record.id.into_i64(),
            product_name: record.product_name,
            sales_date: record.sales_date,
            quantity_sold: record.quantity_sold,
            total_revenue: record.total_revenue,
        }
    }
}
