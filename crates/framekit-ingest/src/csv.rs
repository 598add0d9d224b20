//! CSV tokenizer and record reader.
//!
//! Hand-rolled, quote-aware, and deliberately forgiving: malformed
//! quoting degrades to literal text instead of failing. There is no
//! error path out of this module.

use crate::raw::{RawRecord, RawValue};

/// Tokenize raw CSV text into rows of string fields.
///
/// Fields may be double-quoted; a doubled quote inside a quoted field is
/// an escaped literal quote. Rows break on `\n`, `\r`, or `\r\n` (CRLF
/// counts as one break). A trailing field or row without a terminator is
/// still emitted.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' | '\r' => {
                    if !field.is_empty() || !row.is_empty() {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/// Read CSV text into raw records.
///
/// The first row is the header (cells trimmed and used as field names).
/// Data rows are trimmed and zipped against the header; rows shorter
/// than the header read as empty strings for the missing columns. Rows
/// whose cells are all blank are discarded.
pub fn read_records(text: &str) -> Vec<RawRecord> {
    let rows = tokenize(text);
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let header: Vec<String> = header_row.iter().map(|h| h.trim().to_string()).collect();

    data_rows
        .iter()
        .filter(|r| !r.is_empty() && r.iter().any(|c| !c.trim().is_empty()))
        .map(|r| {
            let mut record = RawRecord::new();
            for (idx, name) in header.iter().enumerate() {
                let cell = r.get(idx).map(|c| c.trim()).unwrap_or("");
                record.insert(name.clone(), RawValue::Str(cell.to_string()));
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows() {
        let rows = tokenize("a,b,c\nd,e,f");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn test_quoted_comma() {
        let rows = tokenize("a,\"b,c\",d");
        assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_doubled_quote_escape() {
        let rows = tokenize("\"a\"\"b\"");
        assert_eq!(rows, vec![vec!["a\"b"]]);
    }

    #[test]
    fn test_embedded_newline_in_quotes() {
        let rows = tokenize("a,\"line1\nline2\",b");
        assert_eq!(rows, vec![vec!["a", "line1\nline2", "b"]]);
    }

    #[test]
    fn test_crlf_is_one_break() {
        let rows = tokenize("a,b\r\nc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_bare_cr_breaks_row() {
        let rows = tokenize("a,b\rc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_row_without_newline() {
        let rows = tokenize("a,b\nc,d");
        assert_eq!(rows.len(), 2);
        let rows = tokenize("a,b\nc,d\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = tokenize("a,b\n\n\nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_malformed_quote_degrades() {
        // Unterminated quote: the rest of the text becomes the field.
        let rows = tokenize("\"abc,def");
        assert_eq!(rows, vec![vec!["abc,def"]]);
    }

    /// Naive round-trip: quote every field, tokenize back, expect the
    /// original table.
    #[test]
    fn test_round_trip() {
        let table = vec![
            vec!["id".to_string(), "name".to_string(), "notes".to_string()],
            vec!["sf-1".to_string(), "a,b".to_string(), "say \"hi\"".to_string()],
            vec!["sf-2".to_string(), "multi\nline".to_string(), "plain".to_string()],
        ];
        let text = table
            .iter()
            .map(|row| {
                row.iter()
                    .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(tokenize(&text), table);
    }

    #[test]
    fn test_read_records_zips_header() {
        let records = read_records("id, name ,price\nsf-1, Starter ,89000\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), RawValue::Str("sf-1".to_string()));
        assert_eq!(records[0].get("name"), RawValue::Str("Starter".to_string()));
        assert_eq!(records[0].get("price"), RawValue::Str("89000".to_string()));
    }

    #[test]
    fn test_short_row_reads_empty_cells() {
        let records = read_records("id,name,price\nsf-1\n");
        assert_eq!(records[0].get("name"), RawValue::Str(String::new()));
        assert_eq!(records[0].get("price"), RawValue::Str(String::new()));
    }

    #[test]
    fn test_all_blank_rows_discarded() {
        let records = read_records("id,name\n , \nsf-1,Starter\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), RawValue::Str("sf-1".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert!(read_records("").is_empty());
        assert!(read_records("id,name\n").is_empty());
    }
}
