use crate::errors::{AppError, AppResult, RowError};
use crate::models::row::RawRow;
use crate::utils::time::{Timestamp, format_timestamp, parse_timestamp};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// First line of every log file.
pub const HEADER: &str = "Start,End";

/// What the end of the log file says about the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogState {
    /// No file yet: nothing was ever started.
    Missing,
    /// Every row is closed.
    Idle,
    /// The last row has a start and no end: a timer is running.
    Open { start: String },
}

#[derive(Debug, PartialEq, Eq)]
enum Tail<'a> {
    Empty,
    Terminated,
    /// Last line lacks its newline but is not an open row (header, or a
    /// complete row written by hand).
    Unterminated,
    Open(&'a str),
}

fn tail(content: &str) -> Tail<'_> {
    if content.is_empty() {
        return Tail::Empty;
    }
    if content.ends_with('\n') {
        return Tail::Terminated;
    }

    match content.rfind('\n') {
        None => Tail::Unterminated,
        Some(idx) => {
            let last = &content[idx + 1..];
            if last.contains(',') {
                Tail::Unterminated
            } else {
                Tail::Open(last)
            }
        }
    }
}

/// Append-only CSV log of intervals.
///
/// A timer start writes the start field alone, with no row terminator; the
/// stop appends `,<end>\n`. A crash in between leaves one open trailing row,
/// which readers skip.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// Raw bytes of the log. Rows are not required to be UTF-8.
    fn read_content(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn state(&self) -> AppResult<LogState> {
        let Some(content) = self.read_content()? else {
            return Ok(LogState::Missing);
        };

        Ok(match tail(&String::from_utf8_lossy(&content)) {
            Tail::Open(start) => LogState::Open {
                start: start.to_string(),
            },
            _ => LogState::Idle,
        })
    }

    /// Open a new row holding only `start`. Creates the file (with header)
    /// on first use.
    pub fn begin_interval(&self, start: Timestamp) -> AppResult<()> {
        let mut out = String::new();
        let content = self.read_content()?;
        let text = content.as_deref().map(String::from_utf8_lossy);

        match text.as_deref().map(tail) {
            None | Some(Tail::Empty) => {
                out.push_str(HEADER);
                out.push('\n');
            }
            Some(Tail::Terminated) => {}
            Some(Tail::Unterminated) => out.push('\n'),
            Some(Tail::Open(open_start)) => {
                return Err(AppError::IntervalAlreadyOpen(open_start.to_string()));
            }
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        out.push_str(&format_timestamp(&start));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(out.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), start = %format_timestamp(&start), "interval opened");
        Ok(())
    }

    /// Close the open row with `end`.
    pub fn complete_interval(&self, end: Timestamp) -> AppResult<()> {
        let Some(content) = self.read_content()? else {
            return Err(AppError::StoreMissing(self.path_str()));
        };

        if !matches!(tail(&String::from_utf8_lossy(&content)), Tail::Open(_)) {
            return Err(AppError::NoOpenInterval(self.path_str()));
        }

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, ",{}", format_timestamp(&end))?;
        file.flush()?;

        debug!(path = %self.path.display(), end = %format_timestamp(&end), "interval closed");
        Ok(())
    }

    /// Every data row in file order. The header row is not returned; a
    /// missing file reads as empty.
    pub fn read_all(&self) -> AppResult<Vec<RawRow>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "time log missing, reading as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut rows = Vec::new();
        for (i, record) in reader.byte_records().enumerate() {
            let record = record?;
            if i == 0 {
                continue;
            }
            let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
            // Undecodable bytes turn into U+FFFD, which no timestamp accepts.
            let fields = record
                .iter()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .collect();
            rows.push(RawRow::new(line, fields));
        }

        Ok(rows)
    }

    /// Raw `(start, end)` of the last row, which must be complete.
    pub fn get_last(&self) -> AppResult<(String, String)> {
        let rows = self.read_all()?;

        match rows.last() {
            Some(row) if row.is_complete() => Ok((row.fields[0].clone(), row.fields[1].clone())),
            _ => Err(AppError::NotFound(self.path_str())),
        }
    }

    /// Rewrite the file with the last row replaced by `start,end`. Every other
    /// row is kept byte for byte. Nothing is written unless both fields are
    /// valid timestamps in order.
    pub fn replace_last(&self, start: &str, end: &str) -> AppResult<()> {
        let start_ts = parse_timestamp(start)?;
        let end_ts = parse_timestamp(end)?;
        if end_ts < start_ts {
            return Err(RowError::InvalidField(format!("end {end} is before start {start}")).into());
        }

        let Some(content) = self.read_content()? else {
            return Err(AppError::StoreMissing(self.path_str()));
        };

        let body_len = content
            .iter()
            .rposition(|b| !matches!(b, b'\n' | b'\r'))
            .map_or(0, |i| i + 1);
        let Some(idx) = content[..body_len].iter().rposition(|&b| b == b'\n') else {
            return Err(AppError::NotFound(self.path_str()));
        };

        let mut replaced = Vec::with_capacity(content.len());
        replaced.extend_from_slice(&content[..=idx]);
        replaced.extend_from_slice(format!("{start},{end}\n").as_bytes());

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);

        fs::write(&tmp, replaced)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), start, end, "last interval replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ts(h: u32, m: u32, s: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn store_in(dir: &TempDir) -> LogStore {
        LogStore::new(dir.path().join("data.csv"))
    }

    #[test]
    fn begin_creates_file_with_header_and_open_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.begin_interval(ts(9, 0, 0)).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Start,End\n09:00:00 2024/01/01");
        assert_eq!(
            store.state().unwrap(),
            LogState::Open {
                start: "09:00:00 2024/01/01".into()
            }
        );
    }

    #[test]
    fn begin_then_complete_writes_one_closed_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.begin_interval(ts(9, 0, 0)).unwrap();
        store.complete_interval(ts(9, 45, 0)).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Start,End\n09:00:00 2024/01/01,09:45:00 2024/01/01\n");
        assert_eq!(store.state().unwrap(), LogState::Idle);

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 2);

        let (start, end) = store.get_last().unwrap();
        assert_eq!(start, "09:00:00 2024/01/01");
        assert_eq!(end, "09:45:00 2024/01/01");
    }

    #[test]
    fn begin_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("nested/deeper/data.csv"));

        store.begin_interval(ts(8, 0, 0)).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn begin_refuses_while_a_row_is_open() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.begin_interval(ts(9, 0, 0)).unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = store.begin_interval(ts(10, 0, 0)).unwrap_err();
        assert!(matches!(err, AppError::IntervalAlreadyOpen(ref s) if s == "09:00:00 2024/01/01"));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn begin_terminates_a_hand_written_row_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Start,End\n08:00:00 2024/01/01,08:30:00 2024/01/01",
        )
        .unwrap();

        store.begin_interval(ts(9, 0, 0)).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "Start,End\n08:00:00 2024/01/01,08:30:00 2024/01/01\n09:00:00 2024/01/01"
        );
    }

    #[test]
    fn complete_on_missing_store_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.complete_interval(ts(10, 0, 0)).unwrap_err();
        assert!(matches!(err, AppError::StoreMissing(_)));
        assert!(!store.exists());
    }

    #[test]
    fn double_completion_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.begin_interval(ts(9, 0, 0)).unwrap();
        store.complete_interval(ts(10, 0, 0)).unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = store.complete_interval(ts(11, 0, 0)).unwrap_err();
        assert!(matches!(err, AppError::NoOpenInterval(_)));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn missing_store_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.read_all().unwrap().is_empty());
        assert_eq!(store.state().unwrap(), LogState::Missing);
        assert!(matches!(store.get_last(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn read_all_keeps_malformed_rows_and_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Start,End\n\
             09:00:00 2024/01/01,10:00:00 2024/01/01\n\
             garbage\n\
             a,b,c\n\
             11:00:00 2024/01/01",
        )
        .unwrap();

        let first = store.read_all().unwrap();
        let second = store.read_all().unwrap();
        assert_eq!(first, second);

        let arity: Vec<usize> = first.iter().map(|r| r.fields.len()).collect();
        assert_eq!(arity, vec![2, 1, 3, 1]);
        assert_eq!(first.last().unwrap().line, 5);
    }

    #[test]
    fn stray_quote_only_spoils_its_own_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Start,End\n\
             \"garbage\n\
             08:00:00 2024/01/01,09:00:00 2024/01/01\n\
             09:00:00 2024/01/01,10:30:00 2024/01/01\n",
        )
        .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].fields, vec!["\"garbage".to_string()]);
        assert_eq!(rows[1].line, 3);
        assert!(rows[2].is_complete());

        let (start, end) = store.get_last().unwrap();
        assert_eq!(start, "09:00:00 2024/01/01");
        assert_eq!(end, "10:30:00 2024/01/01");
    }

    #[test]
    fn non_utf8_row_does_not_block_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut content = b"Start,End\n09:00:00 2024/01/01,10:00:00 2024/01/01\n".to_vec();
        content.extend_from_slice(b"\xff\xfe,junk\n");
        fs::write(store.path(), &content).unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].fields[1], "junk");
        assert_eq!(store.state().unwrap(), LogState::Idle);

        store.begin_interval(ts(11, 0, 0)).unwrap();
        store.complete_interval(ts(11, 30, 0)).unwrap();
        store
            .replace_last("11:00:00 2024/01/01", "11:45:00 2024/01/01")
            .unwrap();

        content.extend_from_slice(b"11:00:00 2024/01/01,11:45:00 2024/01/01\n");
        assert_eq!(fs::read(store.path()).unwrap(), content);
    }

    #[test]
    fn get_last_rejects_an_open_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.begin_interval(ts(9, 0, 0)).unwrap();
        assert!(matches!(store.get_last(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn replace_last_keeps_every_other_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Start,End\n\
             07:00:00 2024/01/01,07:30:00 2024/01/01\n\
             not a row\n\
             09:00:00 2024/01/01,10:00:00 2024/01/01\n",
        )
        .unwrap();

        store
            .replace_last("09:15:00 2024/01/01", "10:05:00 2024/01/01")
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "Start,End\n\
             07:00:00 2024/01/01,07:30:00 2024/01/01\n\
             not a row\n\
             09:15:00 2024/01/01,10:05:00 2024/01/01\n"
        );
        assert!(!dir.path().join("data.csv.tmp").exists());
    }

    #[test]
    fn replace_last_with_bad_text_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.begin_interval(ts(9, 0, 0)).unwrap();
        store.complete_interval(ts(10, 0, 0)).unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = store
            .replace_last("bad-text", "10:00:00 2024/01/01")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp(_)));

        let err = store
            .replace_last("11:00:00 2024/01/01", "10:00:00 2024/01/01")
            .unwrap_err();
        assert!(matches!(err, AppError::Row(RowError::InvalidField(_))));

        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn replace_last_needs_a_data_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.replace_last("09:00:00 2024/01/01", "10:00:00 2024/01/01"),
            Err(AppError::StoreMissing(_))
        ));

        fs::write(store.path(), "Start,End\n").unwrap();
        assert!(matches!(
            store.replace_last("09:00:00 2024/01/01", "10:00:00 2024/01/01"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Start,End\n");
    }
}
