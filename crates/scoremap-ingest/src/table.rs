use scoremap_model::{AssignError, RawTable, RuleTable};

/// A decoded table with string cells, before it becomes a raw or rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Builds a table, padding every row to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn into_raw_table(self) -> RawTable {
        RawTable::new(self.headers, self.rows)
    }

    /// Coerces every cell to an optional number.
    pub fn into_rule_table(self) -> Result<RuleTable, AssignError> {
        RuleTable::from_text(self.headers, &self.rows)
    }
}
