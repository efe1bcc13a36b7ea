//! Table definitions
//!
//! ```text
//! banks(id PK, name UNIQUE)
//!   1 ──< branches(ifsc PK, bank_id FK → banks.id, branch, address,
//!                  city, district, state)
//! ```
//!
//! Statements are idempotent and run every time a store is opened.

pub const CREATE_BANKS: &str = "\
CREATE TABLE IF NOT EXISTS banks (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
)";

pub const CREATE_BRANCHES: &str = "\
CREATE TABLE IF NOT EXISTS branches (
    ifsc     TEXT PRIMARY KEY,
    bank_id  INTEGER NOT NULL REFERENCES banks(id),
    branch   TEXT NOT NULL,
    address  TEXT NOT NULL,
    city     TEXT NOT NULL,
    district TEXT NOT NULL,
    state    TEXT NOT NULL
)";

/// Secondary indexes backing the filtered listings
pub const CREATE_INDEXES: [&str; 5] = [
    "CREATE INDEX IF NOT EXISTS ix_branches_bank_id ON branches (bank_id)",
    "CREATE INDEX IF NOT EXISTS ix_branches_city ON branches (city)",
    "CREATE INDEX IF NOT EXISTS ix_branches_branch ON branches (branch)",
    "CREATE INDEX IF NOT EXISTS ix_branches_district ON branches (district)",
    "CREATE INDEX IF NOT EXISTS ix_branches_state ON branches (state)",
];

/// All schema statements in execution order
pub fn statements() -> impl Iterator<Item = &'static str> {
    [CREATE_BANKS, CREATE_BRANCHES]
        .into_iter()
        .chain(CREATE_INDEXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_before_indexes() {
        let all: Vec<_> = statements().collect();
        assert_eq!(all.len(), 7);
        assert!(all[0].contains("banks"));
        assert!(all[1].contains("branches"));
        assert!(all[2..].iter().all(|s| s.starts_with("CREATE INDEX IF NOT EXISTS")));
    }
}
