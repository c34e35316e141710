//! Editable text fields and parsing of the domain bounds typed into them.

use unicode_width::UnicodeWidthStr;

use crate::error::{PlotError, Result};
use crate::plot::Domain;

/// Single-line text input with a cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    cursor: usize,
}

impl TextField {
    /// Create a field holding `text`, cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let mut field = Self::default();
        field.set_text(text);
        field
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_offset(self.cursor)].width()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    /// Move the cursor one char left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Parse one domain bound. Only finite reals are accepted.
pub fn parse_bound(field: &'static str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PlotError::invalid_input(field, text)),
    }
}

/// Format a bound the way it is written back into its field.
///
/// The output parses back to the same value.
pub fn format_bound(value: f64) -> String {
    format!("{value:?}")
}

/// Parse the start and end fields into a domain.
pub fn parse_domain(start: &str, end: &str) -> Result<Domain> {
    Ok(Domain::new(
        parse_bound("from", start)?,
        parse_bound("to", end)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_moves_cursor() {
        let mut field = TextField::new("-10");
        assert_eq!(field.cursor(), 3);

        field.insert('.');
        field.insert('5');
        assert_eq!(field.text(), "-10.5");

        field.home();
        field.delete();
        assert_eq!(field.text(), "10.5");
        assert_eq!(field.cursor(), 0);

        field.backspace();
        assert_eq!(field.text(), "10.5");

        field.move_right();
        field.move_right();
        field.backspace();
        assert_eq!(field.text(), "1.5");
        assert_eq!(field.cursor(), 1);

        field.end();
        field.move_right();
        assert_eq!(field.cursor(), 3);
        field.delete();
        assert_eq!(field.text(), "1.5");
    }

    #[test]
    fn set_text_resets_cursor_to_end() {
        let mut field = TextField::new("abc");
        field.home();
        field.set_text("12345");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut field = TextField::new("π≈3");
        assert_eq!(field.cursor_column(), 3);
        field.move_left();
        field.insert('x');
        assert_eq!(field.text(), "π≈x3");
        assert_eq!(field.cursor_column(), 3);

        let wide = TextField::new("１2");
        assert_eq!(wide.cursor_column(), 3);
    }

    #[test]
    fn parses_finite_bounds() {
        assert_eq!(parse_bound("from", " -10 ").unwrap(), -10.0);
        assert_eq!(parse_bound("to", "2.5e1").unwrap(), 25.0);
        assert_eq!(
            parse_domain("-1", "1").unwrap(),
            Domain::new(-1.0, 1.0)
        );
    }

    #[test]
    fn formatted_bounds_parse_back() {
        assert_eq!(format_bound(-10.0), "-10.0");
        assert_eq!(format_bound(2.5), "2.5");
        for v in [0.1 + 0.2, 1e20, -3e-9, 123456.789] {
            assert_eq!(parse_bound("to", &format_bound(v)).unwrap(), v);
        }
    }

    #[test]
    fn rejects_bad_bounds() {
        for text in ["", "abc", "1,5", "inf", "-inf", "NaN", "1e400"] {
            let err = parse_bound("from", text).unwrap_err();
            assert!(
                matches!(err, PlotError::InvalidDomainInput { field: "from", .. }),
                "{text:?} accepted"
            );
        }
        assert!(matches!(
            parse_domain("0", "ten"),
            Err(PlotError::InvalidDomainInput { field: "to", .. })
        ));
    }
}
