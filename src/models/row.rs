/// One data row of the time log, exactly as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the file (the header is line 1).
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Both fields present and non-empty. Says nothing about their content.
    pub fn is_complete(&self) -> bool {
        self.fields.len() == 2 && self.fields.iter().all(|f| !f.is_empty())
    }
}
