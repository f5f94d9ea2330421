//! CSV transaction loader and normalizer
//!
//! Parses an uploaded CSV export into a normalized transaction table.
//! Headers are matched case- and whitespace-insensitively, amounts tolerate
//! `,` thousands separators, dates must be DD/MM/YYYY, and blank category
//! cells are replaced with the default category. Any malformed cell fails
//! the whole load; no partial table is ever returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{SpendscopeError, SpendscopeResult};
use crate::models::{Money, Transaction, DEFAULT_CATEGORY};

/// The fixed date format of the source export
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Resolved column positions in the uploaded file
#[derive(Debug, Clone)]
struct ColumnIndex {
    date: usize,
    description: usize,
    amount: usize,
    category: usize,
    currency: usize,
    account: usize,
}

impl ColumnIndex {
    /// Locate all required columns in the header row.
    ///
    /// Header cells are trimmed and lowercased before matching, so
    /// " Amount " and "AMOUNT" both resolve the amount column.
    fn from_headers(headers: &StringRecord) -> SpendscopeResult<Self> {
        let locate = |name: &'static str| -> SpendscopeResult<usize> {
            headers
                .iter()
                .position(|h| h.trim().to_lowercase() == name)
                .ok_or(SpendscopeError::MissingColumn(name))
        };

        Ok(Self {
            date: locate("date")?,
            description: locate("description")?,
            amount: locate("amount")?,
            category: locate("category")?,
            currency: locate("currency")?,
            account: locate("account")?,
        })
    }
}

/// Load and normalize a transaction CSV from a file path
pub fn load_csv<P: AsRef<Path>>(path: P) -> SpendscopeResult<Vec<Transaction>> {
    let file = File::open(path.as_ref())?;
    load_from_reader(file)
}

/// Load and normalize a transaction CSV from any reader
pub fn load_from_reader<R: Read>(reader: R) -> SpendscopeResult<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut transactions = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        // Row numbers are 1-based and exclude the header
        transactions.push(parse_record(&record, idx + 1, &columns)?);
    }

    Ok(transactions)
}

/// Parse a single CSV record into a normalized transaction
fn parse_record(
    record: &StringRecord,
    row: usize,
    columns: &ColumnIndex,
) -> SpendscopeResult<Transaction> {
    let cell = |i: usize| record.get(i).unwrap_or("").trim();

    let amount_str = cell(columns.amount);
    let amount = Money::parse(amount_str).map_err(|_| SpendscopeError::InvalidAmount {
        row,
        value: amount_str.to_string(),
    })?;

    let date_str = cell(columns.date);
    let date =
        NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| SpendscopeError::InvalidDate {
            row,
            value: date_str.to_string(),
        })?;

    let category = match cell(columns.category) {
        "" => DEFAULT_CATEGORY.to_string(),
        c => c.to_string(),
    };

    Ok(Transaction {
        date,
        description: cell(columns.description).to_string(),
        amount,
        category,
        currency: cell(columns.currency).to_string(),
        account: cell(columns.account).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,description,amount,category,currency,account";

    fn load(data: &str) -> SpendscopeResult<Vec<Transaction>> {
        load_from_reader(data.as_bytes())
    }

    #[test]
    fn test_load_simple_csv() {
        let csv_data = format!(
            "{}\n15/01/2023,Coffee,-3.50,Food,EUR,Cash\n31/01/2023,Salary,2000.00,,EUR,Bank",
            HEADER
        );
        let table = load(&csv_data).unwrap();
        assert_eq!(table.len(), 2);

        let txn = &table[0];
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(txn.description, "Coffee");
        assert_eq!(txn.amount.cents(), -350);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.currency, "EUR");
        assert_eq!(txn.account, "Cash");
    }

    #[test]
    fn test_header_case_and_whitespace_insensitive() {
        let csv_data =
            " Date ,DESCRIPTION, Amount ,Category,currency,ACCOUNT\n15/01/2023,Coffee,-3.50,Food,EUR,Cash";
        let table = load(csv_data).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].amount.cents(), -350);
    }

    #[test]
    fn test_thousands_separators_in_amount() {
        let csv_data = format!(
            "{}\n15/01/2023,Rent,\"-1,200.50\",Rent,EUR,Bank\n16/01/2023,Rent,-1200.50,Rent,EUR,Bank",
            HEADER
        );
        let table = load(&csv_data).unwrap();
        assert_eq!(table[0].amount, table[1].amount);
        assert_eq!(table[0].amount.cents(), -120050);
    }

    #[test]
    fn test_blank_category_defaults_to_uncategorized() {
        let csv_data = format!(
            "{}\n15/01/2023,Mystery,-5.00,,EUR,Cash\n16/01/2023,Mystery,-5.00,   ,EUR,Cash",
            HEADER
        );
        let table = load(&csv_data).unwrap();
        assert_eq!(table[0].category, DEFAULT_CATEGORY);
        assert_eq!(table[1].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_missing_column_fails_load() {
        let csv_data = "date,description,amount,category,currency\n15/01/2023,Coffee,-3.50,Food,EUR";
        let err = load(csv_data).unwrap_err();
        assert!(matches!(err, SpendscopeError::MissingColumn("account")));
    }

    #[test]
    fn test_bad_date_fails_whole_load() {
        let csv_data = format!(
            "{}\n15/01/2023,Coffee,-3.50,Food,EUR,Cash\n2023-01-16,Tea,-2.00,Food,EUR,Cash",
            HEADER
        );
        let err = load(&csv_data).unwrap_err();
        match err {
            SpendscopeError::InvalidDate { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "2023-01-16");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_amount_fails_whole_load() {
        let csv_data = format!("{}\n15/01/2023,Coffee,3.5x,Food,EUR,Cash", HEADER);
        let err = load(&csv_data).unwrap_err();
        assert!(matches!(err, SpendscopeError::InvalidAmount { row: 1, .. }));
    }

    #[test]
    fn test_non_ascii_amount_fails_load_with_error() {
        let csv_data = format!("{}\n15/01/2023,Coffee,10.€5,Food,EUR,Cash", HEADER);
        let err = load(&csv_data).unwrap_err();
        match err {
            SpendscopeError::InvalidAmount { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "10.€5");
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = load(HEADER).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_columns_in_any_order() {
        let csv_data =
            "account,currency,category,amount,description,date\nCash,EUR,Food,-3.50,Coffee,15/01/2023";
        let table = load(csv_data).unwrap();
        assert_eq!(table[0].description, "Coffee");
        assert_eq!(table[0].account, "Cash");
    }
}
