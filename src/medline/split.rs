//! Splitting of MEDLINE text into one chunk per record.

/// Iterator over the records of a MEDLINE formatted text, which are separated
/// by a blank line (two consecutive line breaks).
///
/// Each item is the 1-based line number on which the chunk starts, and the
/// chunk itself. Chunks containing only whitespace are skipped.
pub(crate) struct BlankLineSplit<'a> {
    remaining: Option<&'a str>,
    line_break: &'static str,
    separator: &'static str,
    line_number: usize,
}

impl<'a> BlankLineSplit<'a> {
    pub(crate) fn new(text: &'a str, line_break: &'static str) -> Self {
        let separator = if line_break == "\r\n" {
            "\r\n\r\n"
        } else {
            "\n\n"
        };
        Self {
            remaining: Some(text),
            line_break,
            separator,
            line_number: 1,
        }
    }
}

impl<'a> Iterator for BlankLineSplit<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.remaining?;
            let (chunk, next) = match rest.split_once(self.separator) {
                Some((chunk, next)) => (chunk, Some(next)),
                None => (rest, None),
            };
            let start_line = self.line_number;
            self.line_number += chunk.matches(self.line_break).count() + 2;
            self.remaining = next;
            if !chunk.trim().is_empty() {
                return Some((start_line, chunk));
            }
        }
    }
}
