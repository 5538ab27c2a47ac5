//! Sales Records

use jiff::civil::Date;

use crate::ids::TypedId;

/// Sales Record ID
pub type SalesRecordId = TypedId<SalesRecord>;

/// Sales Record
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub id: SalesRecordId,
    pub product_name: String,
    pub sales_date: Date,
    pub quantity_sold: i64,
    pub total_revenue: f64,
}
