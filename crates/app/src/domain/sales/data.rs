//! Sales Data

use jiff::civil::Date;
use serde::Deserialize;

/// One imported sales row. Field names match the import file header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSalesRecord {
    pub product_name: String,
    pub sales_date: Date,
    pub quantity_sold: i64,
    pub total_revenue: f64,
}
