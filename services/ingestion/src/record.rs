//! Source row decoding

use serde::Deserialize;
use types::bank::Bank;
use types::branch::Branch;
use types::ids::{BankId, Ifsc};

/// Columns every source file must carry
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "bank_id",
    "bank_name",
    "ifsc",
    "branch",
    "address",
    "city",
    "district",
    "state",
];

/// One raw row of the source file
///
/// `bank_id` stays textual here so a malformed id can be reported with
/// its value and line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRow {
    pub bank_id: String,
    pub bank_name: String,
    pub ifsc: String,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
}

impl SourceRow {
    /// Split into the bank and branch rows, trimming every field.
    ///
    /// Fails with the offending text if `bank_id` is not an integer.
    pub fn into_records(self) -> Result<(Bank, Branch), String> {
        let bank_id: BankId = self
            .bank_id
            .parse()
            .map_err(|_| self.bank_id.trim().to_string())?;

        let bank = Bank::new(bank_id, self.bank_name.trim());
        let branch = Branch {
            ifsc: Ifsc::new(self.ifsc.trim()),
            bank_id,
            branch: self.branch.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            district: self.district.trim().to_string(),
            state: self.state.trim().to_string(),
        };
        Ok((bank, branch))
    }
}

/// Required columns absent from `headers`, in canonical order
pub fn missing_columns<'a>(
    headers: impl IntoIterator<Item = &'a str> + Clone,
) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.clone().into_iter().any(|h| h.trim() == *column))
        .collect()
}
