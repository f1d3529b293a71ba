use crate::domain::model::ShipmentRecord;
use crate::domain::options::ShipmentSource;
use crate::utils::error::{EtlError, Result};
use std::io::Read;

const CSV_HEADER: [&str; 3] = ["origin", "destination", "quantity"];

// FIELDS: ORIGIN, DESTINATION, QUANTITY
const BUILTIN_TABLE: [(&str, &str, u64); 25] = [
    ("US", "US", 8),
    ("US", "IN", 14),
    ("US", "CA", 4),
    ("US", "MX", 7),
    ("US", "VE", 13),
    ("IN", "US", 3),
    ("IN", "IN", 13),
    ("IN", "CA", 18),
    ("IN", "MX", 16),
    ("IN", "VE", 3),
    ("CA", "US", 8),
    ("CA", "IN", 20),
    ("CA", "CA", 16),
    ("CA", "MX", 3),
    ("CA", "VE", 2),
    ("MX", "US", 12),
    ("MX", "IN", 20),
    ("MX", "CA", 3),
    ("MX", "MX", 3),
    ("MX", "VE", 8),
    ("VE", "US", 3),
    ("VE", "IN", 7),
    ("VE", "CA", 5),
    ("VE", "MX", 15),
    ("VE", "VE", 13),
];

/// The bundled table: five countries shipping to each other and to themselves.
pub fn builtin_shipments() -> Vec<ShipmentRecord> {
    BUILTIN_TABLE
        .iter()
        .map(|&(origin, destination, quantity)| ShipmentRecord::new(origin, destination, quantity))
        .collect()
}

pub fn load_shipments(source: &ShipmentSource) -> Result<Vec<ShipmentRecord>> {
    let shipments = match source {
        ShipmentSource::Builtin => builtin_shipments(),
        ShipmentSource::Csv { path } => {
            tracing::debug!("Reading shipments from CSV file: {}", path);
            let file = std::fs::File::open(path)?;
            read_csv(file)?
        }
        ShipmentSource::Inline { records } => parse_inline(records)?,
    };

    tracing::info!("📥 Loaded {} shipment records", shipments.len());
    Ok(shipments)
}

/// Reads `origin,destination,quantity` rows. Any malformed row fails the
/// whole read; row numbers in errors count data rows from 1.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ShipmentRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?;
    let header_ok = headers.len() == CSV_HEADER.len()
        && headers
            .iter()
            .zip(CSV_HEADER)
            .all(|(found, expected)| found.eq_ignore_ascii_case(expected));
    if !header_ok {
        return Err(EtlError::malformed(
            0,
            format!(
                "expected header '{}', found '{}'",
                CSV_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let mut shipments = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = index + 1;
        let row = row?;
        if row.len() != 3 {
            return Err(EtlError::malformed(
                row_number,
                format!("expected 3 fields, found {}", row.len()),
            ));
        }
        let quantity = parse_quantity(row_number, &row[2])?;
        shipments.push(build_record(row_number, &row[0], &row[1], quantity)?);
    }

    Ok(shipments)
}

/// Converts `[origin, destination, quantity]` arrays from a config file.
pub fn parse_inline(rows: &[Vec<serde_json::Value>]) -> Result<Vec<ShipmentRecord>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let row_number = index + 1;
            let [origin, destination, quantity] = row.as_slice() else {
                return Err(EtlError::malformed(
                    row_number,
                    format!("expected 3 fields, found {}", row.len()),
                ));
            };

            let origin = origin
                .as_str()
                .ok_or_else(|| EtlError::malformed(row_number, "origin must be a string"))?;
            let destination = destination
                .as_str()
                .ok_or_else(|| EtlError::malformed(row_number, "destination must be a string"))?;
            let quantity = quantity.as_u64().ok_or_else(|| {
                EtlError::malformed(
                    row_number,
                    format!("quantity {} is not a non-negative integer", quantity),
                )
            })?;

            build_record(row_number, origin, destination, quantity)
        })
        .collect()
}

fn parse_quantity(row: usize, raw: &str) -> Result<u64> {
    // `u64::from_str` 接受前置 '+'，這裡只允許純數字
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EtlError::malformed(
            row,
            format!("quantity '{}' is not a non-negative integer", raw),
        ));
    }
    raw.parse::<u64>().map_err(|_| {
        EtlError::malformed(row, format!("quantity '{}' is out of range", raw))
    })
}

fn build_record(row: usize, origin: &str, destination: &str, quantity: u64) -> Result<ShipmentRecord> {
    if origin.is_empty() || destination.is_empty() {
        return Err(EtlError::malformed(row, "country code cannot be empty"));
    }
    Ok(ShipmentRecord::new(origin, destination, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_table_shape() {
        let shipments = builtin_shipments();
        assert_eq!(shipments.len(), 25);
        assert_eq!(shipments.iter().filter(|s| s.is_intra()).count(), 5);
        assert_eq!(shipments[1], ShipmentRecord::new("US", "IN", 14));
    }

    #[test]
    fn test_read_csv() {
        let data = "origin,destination,quantity\nUS, IN ,14\nIN,US,3\n";
        let shipments = read_csv(data.as_bytes()).unwrap();
        assert_eq!(
            shipments,
            vec![ShipmentRecord::new("US", "IN", 14), ShipmentRecord::new("IN", "US", 3)]
        );
    }

    #[test]
    fn test_read_csv_rejects_wrong_arity() {
        let data = "origin,destination,quantity\nUS,IN,14\nIN,US\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, EtlError::MalformedRecord { row: 2, .. }));
    }

    #[test]
    fn test_read_csv_rejects_non_numeric_quantity() {
        for bad in ["lots", "-3", "+5", "1.5", "", "99999999999999999999999"] {
            let data = format!("origin,destination,quantity\nUS,IN,{}\n", bad);
            let err = read_csv(data.as_bytes()).unwrap_err();
            assert!(
                matches!(err, EtlError::MalformedRecord { row: 1, .. }),
                "quantity {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_read_csv_rejects_bad_header() {
        let data = "from,to,count\nUS,IN,14\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, EtlError::MalformedRecord { row: 0, .. }));
    }

    #[test]
    fn test_read_csv_rejects_empty_country() {
        let data = "origin,destination,quantity\n,IN,14\n";
        assert!(read_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_inline() {
        let rows = vec![vec![json!("US"), json!("IN"), json!(14)]];
        assert_eq!(
            parse_inline(&rows).unwrap(),
            vec![ShipmentRecord::new("US", "IN", 14)]
        );
    }

    #[test]
    fn test_parse_inline_rejects_malformed_rows() {
        let short = vec![vec![json!("US"), json!("IN")]];
        assert!(matches!(
            parse_inline(&short),
            Err(EtlError::MalformedRecord { row: 1, .. })
        ));

        let negative = vec![
            vec![json!("US"), json!("IN"), json!(1)],
            vec![json!("US"), json!("IN"), json!(-1)],
        ];
        assert!(matches!(
            parse_inline(&negative),
            Err(EtlError::MalformedRecord { row: 2, .. })
        ));

        let textual = vec![vec![json!("US"), json!("IN"), json!("14")]];
        assert!(parse_inline(&textual).is_err());
    }

    #[test]
    fn test_load_missing_csv_is_io_error() {
        let source = ShipmentSource::Csv {
            path: "/definitely/not/here.csv".to_string(),
        };
        assert!(matches!(load_shipments(&source), Err(EtlError::IoError(_))));
    }
}
