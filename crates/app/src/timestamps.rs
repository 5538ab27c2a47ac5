//! Store timestamp encoding.
//!
//! The store writes timestamps as fixed-width UTC RFC 3339 text with
//! millisecond precision, so the stored form sorts lexicographically.

use jiff::{Timestamp, fmt::temporal::DateTimePrinter};

const PRINTER: DateTimePrinter = DateTimePrinter::new().precision(Some(3));

/// Render a timestamp in the store's sortable textual form.
#[must_use]
pub fn render(timestamp: &Timestamp) -> String {
    PRINTER.timestamp_to_string(timestamp)
}

/// Parse a stored timestamp column, mapping failures to a column decode error.
pub(crate) fn decode(column: &str, value: Option<String>) -> sqlx::Result<Option<Timestamp>> {
    value
        .map(|text| {
            text.parse::<Timestamp>()
                .map_err(|source| sqlx::Error::ColumnDecode {
                    index: column.to_string(),
                    source: Box::new(source),
                })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn render_pads_to_millisecond_precision() -> TestResult {
        let ts: Timestamp = "2026-01-02T03:04:05Z".parse()?;

        assert_eq!(render(&ts), "2026-01-02T03:04:05.000Z");

        Ok(())
    }

    #[test]
    fn rendered_timestamps_sort_chronologically() -> TestResult {
        let earlier: Timestamp = "2026-01-02T03:04:05.1Z".parse()?;
        let later: Timestamp = "2026-01-02T03:04:05.123Z".parse()?;

        assert!(render(&earlier) < render(&later));

        Ok(())
    }

    #[test]
    fn decode_reads_store_default_format() -> TestResult {
        let decoded = decode("created_at", Some("2026-01-02T03:04:05.678Z".to_string()))?;

        assert_eq!(decoded, Some("2026-01-02T03:04:05.678Z".parse()?));

        Ok(())
    }

    #[test]
    fn decode_passes_through_null() -> TestResult {
        assert_eq!(decode("updated_at", None)?, None);

        Ok(())
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode("created_at", Some("yesterday".to_string()));

        assert!(
            matches!(result, Err(sqlx::Error::ColumnDecode { .. })),
            "expected ColumnDecode, got {result:?}"
        );
    }
}
