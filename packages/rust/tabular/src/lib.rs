//! CSV/TSV reading and writing for title tables.
//!
//! Input handling follows spreadsheet-export reality: delimiter sniffing
//! across tab/semicolon/comma/pipe, UTF-8 BOM stripping, and Windows-1252
//! fallback decoding for Excel-exported files. Output is written to a
//! temporary sibling and renamed into place, so a failed run never leaves a
//! partial output file.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use aortascreen_shared::{AortascreenError, Result};

// ---------------------------------------------------------------------------
// TitleTable
// ---------------------------------------------------------------------------

/// An in-memory table: header row plus data rows, all fields as text.
#[derive(Debug, Clone)]
pub struct TitleTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    delimiter: u8,
}

impl TitleTable {
    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The delimiter the table was parsed with (re-used on write).
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a required column, or a [`MissingColumn`] error listing the
    /// headers that were found.
    ///
    /// [`MissingColumn`]: AortascreenError::MissingColumn
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| AortascreenError::missing_column(name, &self.headers))
    }

    /// Typed cell accessor: `None` when the row is shorter than `col`.
    /// Blank-versus-text handling belongs to the classifier contract.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Map a delimiter name ("auto", "comma", "tab", "semicolon", "pipe") to a
/// byte; `None` means sniff from the file contents.
pub fn parse_delimiter(name: &str) -> Result<Option<u8>> {
    match name {
        "auto" => Ok(None),
        "comma" => Ok(Some(b',')),
        "tab" => Ok(Some(b'\t')),
        "semicolon" => Ok(Some(b';')),
        "pipe" => Ok(Some(b'|')),
        other => Err(AortascreenError::config(format!(
            "unknown delimiter '{other}': expected auto, comma, tab, semicolon, or pipe"
        ))),
    }
}

/// Read a tabular file into a [`TitleTable`].
///
/// The first record is the header row. Rows may have uneven field counts;
/// missing trailing fields surface as absent cells.
pub fn read_table(path: &Path, delimiter: Option<u8>) -> Result<TitleTable> {
    let content = read_file_as_utf8(path)?;
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(&content));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(AortascreenError::csv)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(AortascreenError::csv)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter),
        rows = rows.len(),
        "read title table"
    );

    Ok(TitleTable {
        headers,
        rows,
        delimiter,
    })
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins; higher field counts break ties.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read a file as UTF-8, stripping a BOM if present and falling back to
/// Windows-1252 (common for Excel-exported CSVs).
fn read_file_as_utf8(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path).map_err(|e| AortascreenError::io(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| AortascreenError::io(path, e))?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    };

    Ok(content
        .strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(content))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write the table with one extra column appended: `label_header` in the
/// header row, `labels[i]` on row `i`. All original fields and the row order
/// are preserved, and the input delimiter is re-used.
///
/// The file is written to a `.tmp` sibling first and renamed into place.
pub fn write_labeled(
    path: &Path,
    table: &TitleTable,
    label_header: &str,
    labels: &[&str],
) -> Result<()> {
    debug_assert_eq!(table.row_count(), labels.len(), "one label per row");

    let tmp_path = tmp_sibling(path);
    match write_records(&tmp_path, table, label_header, labels) {
        Ok(()) => {
            std::fs::rename(&tmp_path, path).map_err(|e| AortascreenError::io(path, e))?;
            debug!(path = %path.display(), rows = labels.len(), "wrote labeled table");
            Ok(())
        }
        Err(e) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

/// Sibling path with `.tmp` appended to the full file name.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_records(
    path: &Path,
    table: &TitleTable,
    label_header: &str,
    labels: &[&str],
) -> Result<()> {
    // Rows may be variable width in flexible inputs, so the writer is
    // flexible too.
    let mut writer = csv::WriterBuilder::new()
        .delimiter(table.delimiter())
        .flexible(true)
        .from_path(path)
        .map_err(AortascreenError::csv)?;

    let mut header_record: Vec<&str> = table.headers().iter().map(String::as_str).collect();
    header_record.push(label_header);
    writer.write_record(&header_record).map_err(AortascreenError::csv)?;

    for (row, label) in table.rows().iter().zip(labels) {
        let mut record: Vec<&str> = row.iter().map(String::as_str).collect();
        record.push(label);
        writer.write_record(&record).map_err(AortascreenError::csv)?;
    }

    writer.flush().map_err(|e| AortascreenError::io(path, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
