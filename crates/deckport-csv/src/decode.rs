//! Permissive CSV reader.
//!
//! Parsing is a per-field state machine fed one character at a time. It
//! never rejects input: unbalanced quotes and ragged rows decode to the best
//! tokens available.
//!
//! Two long-standing behaviours are kept because lists exported by earlier
//! versions rely on them:
//!
//! - A quote in the middle of an unquoted field opens a quoted region and the
//!   characters before it are discarded.
//! - After a closing quote, everything up to the next delimiter is dropped.
//!
//! So the line `123,4"5"6,789` reads as `123`, `5`, `789`.

use std::mem;

use deckport_model::Table;

/// Where the decoder is within the current field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Outside any quotes. Commas and newlines are delimiters.
    #[default]
    Unquoted,
    /// Inside quotes. Everything except `"` is literal.
    QuotedOpen,
    /// Just saw a `"` inside quotes: either an escaped quote or the close.
    QuotedMaybeClosing,
    /// The quoted region has closed; input is ignored until a delimiter.
    Closed,
}

/// Incremental decoder. Feed characters with [`Decoder::step`], then call
/// [`Decoder::finish`].
#[derive(Debug, Default)]
pub struct Decoder {
    state: FieldState,
    field: String,
    /// An unquoted `\r` not yet known to be part of a `\r\n` terminator.
    pending_cr: bool,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Text collected so far for the current field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Completed rows so far.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn step(&mut self, ch: char) {
        match self.state {
            FieldState::Unquoted => match ch {
                '"' => {
                    self.pending_cr = false;
                    self.field.clear();
                    self.state = FieldState::QuotedOpen;
                }
                ',' => {
                    self.flush_cr();
                    self.end_field();
                }
                '\n' => {
                    self.pending_cr = false;
                    self.end_row();
                }
                '\r' => {
                    self.flush_cr();
                    self.pending_cr = true;
                }
                _ => {
                    self.flush_cr();
                    self.field.push(ch);
                }
            },
            FieldState::QuotedOpen => match ch {
                '"' => self.state = FieldState::QuotedMaybeClosing,
                _ => self.field.push(ch),
            },
            FieldState::QuotedMaybeClosing => match ch {
                '"' => {
                    self.field.push('"');
                    self.state = FieldState::QuotedOpen;
                }
                ',' => self.end_field(),
                '\n' => self.end_row(),
                _ => self.state = FieldState::Closed,
            },
            FieldState::Closed => match ch {
                ',' => self.end_field(),
                '\n' => self.end_row(),
                _ => {}
            },
        }
    }

    /// Flush any trailing partial row and return the decoded table.
    ///
    /// `terminator` is the synthetic line ending appended by [`from_csv`];
    /// it is stripped from a field left open by an unbalanced quote.
    fn finish_with(mut self, terminator: Option<char>) -> Table {
        if self.state == FieldState::QuotedOpen {
            if let Some(term) = terminator
                && self.field.ends_with(term)
            {
                self.field.pop();
            }
            tracing::debug!(
                row = self.rows.len() + 1,
                "unterminated quoted field at end of input"
            );
            self.end_row();
        } else if self.state != FieldState::Unquoted
            || !self.row.is_empty()
            || !self.field.is_empty()
            || self.pending_cr
        {
            self.flush_cr();
            self.end_row();
        }
        Table::from(self.rows)
    }

    /// Flush any trailing partial row and return the decoded table.
    pub fn finish(self) -> Table {
        self.finish_with(None)
    }

    fn flush_cr(&mut self) {
        if mem::take(&mut self.pending_cr) {
            self.field.push('\r');
        }
    }

    fn end_field(&mut self) {
        self.row.push(mem::take(&mut self.field));
        self.state = FieldState::Unquoted;
    }

    fn end_row(&mut self) {
        self.end_field();
        self.rows.push(mem::take(&mut self.row));
    }
}

/// Decode CSV text into a table of string cells.
///
/// The text is trimmed of surrounding whitespace (and a byte-order mark) and
/// then terminated with a single `\n`, so the last row is always complete.
/// An unquoted `\r\n` counts as one line ending. Because of the trim, a
/// trailing row holding a single empty cell does not survive a round trip:
/// `[["a"], [""]]` encodes to `"a\n"` and reads back as `[["a"]]`.
pub fn from_csv(text: &str) -> Table {
    let trimmed = text.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}');
    let mut decoder = Decoder::new();
    for ch in trimmed.chars() {
        decoder.step(ch);
    }
    decoder.step('\n');
    decoder.finish_with(Some('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut Decoder, text: &str) {
        for ch in text.chars() {
            decoder.step(ch);
        }
    }

    #[test]
    fn opening_quote_enters_quoted_state() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, "\"a");
        assert_eq!(decoder.state(), FieldState::QuotedOpen);
        assert_eq!(decoder.field(), "a");
    }

    #[test]
    fn doubled_quote_stays_open() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, "\"a\"");
        assert_eq!(decoder.state(), FieldState::QuotedMaybeClosing);
        decoder.step('"');
        assert_eq!(decoder.state(), FieldState::QuotedOpen);
        assert_eq!(decoder.field(), "a\"");
    }

    #[test]
    fn quote_followed_by_other_char_closes() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, "\"a\"x");
        assert_eq!(decoder.state(), FieldState::Closed);
        feed(&mut decoder, "yz");
        assert_eq!(decoder.field(), "a");
        decoder.step(',');
        assert_eq!(decoder.state(), FieldState::Unquoted);
    }

    #[test]
    fn delimiters_inside_quotes_are_literal() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, "\"a,b\nc\"\n");
        assert_eq!(decoder.rows(), &[vec!["a,b\nc".to_string()]]);
    }

    #[test]
    fn mid_field_quote_discards_prefix() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, "4\"5");
        assert_eq!(decoder.state(), FieldState::QuotedOpen);
        assert_eq!(decoder.field(), "5");
    }

    #[test]
    fn escaped_quotes_in_single_field() {
        let table = from_csv("\"123,4\"\"5\"\"6,789\"");
        assert_eq!(table.rows(), &[vec!["123,4\"5\"6,789".to_string()]]);
    }

    #[test]
    fn unquoted_quotes_drop_characters() {
        let table = from_csv("123,4\"5\"6,789");
        assert_eq!(table.rows(), &[vec!["123", "5", "789"]]);
    }

    #[test]
    fn input_is_trimmed_and_terminated() {
        let table = from_csv("\u{feff}  a,b\nc,d\n\n  ");
        assert_eq!(table.rows(), &[vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn crlf_line_endings() {
        let table = from_csv("a,b\r\nc,\"d\r\"\r\n");
        assert_eq!(table.rows(), &[vec!["a", "b"], vec!["c", "d\r"]]);
    }

    #[test]
    fn lone_carriage_return_is_kept() {
        let table = from_csv("a\rb,c");
        assert_eq!(table.rows(), &[vec!["a\rb", "c"]]);
    }

    #[test]
    fn empty_input_is_one_empty_cell() {
        assert_eq!(from_csv("").rows(), &[vec![String::new()]]);
        assert_eq!(from_csv(" \n ").rows(), &[vec![String::new()]]);
    }

    #[test]
    fn trailing_empty_row_is_trimmed_away() {
        let table = Table::from_iter(vec![vec!["a"], vec![""]]);
        let text = crate::to_csv(&table);
        assert_eq!(text, "a\n");
        assert_eq!(from_csv(&text).rows(), &[vec!["a"]]);
    }

    #[test]
    fn empty_cells_are_preserved() {
        let table = from_csv(",,\n\"\",x");
        assert_eq!(table.rows(), &[vec!["", "", ""], vec!["", "x"]]);
    }

    #[test]
    fn unbalanced_quote_keeps_partial_field() {
        let table = from_csv("a,b\n\"open,still");
        assert_eq!(
            table.rows(),
            &[vec!["a".to_string(), "b".to_string()], vec!["open,still".to_string()]]
        );
    }

    #[test]
    fn ragged_rows_decode() {
        let table = from_csv("a\nb,c,d\ne,f");
        let lengths: Vec<usize> = table.rows().iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![1, 3, 2]);
    }

    #[test]
    fn finish_flushes_unterminated_row() {
        let mut decoder = Decoder::new();
        feed(&mut decoder, "a,b");
        assert_eq!(decoder.finish().rows(), &[vec!["a", "b"]]);
    }
}
