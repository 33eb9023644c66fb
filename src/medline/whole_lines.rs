//! Joining of MEDLINE continuation lines into whole items.

use std::iter::Peekable;

/// Iterator adapter which merges each tag line of a MEDLINE record with its
/// continuation lines, yielding one whole item per tag.
///
/// A line starts a new item if it is non-empty and does not begin with a
/// space. Lines beginning with a space continue the current item; empty and
/// whitespace-only lines are skipped without ending the item. Continuation
/// lines found before the first tag line belong to no item and are dropped.
pub(crate) struct WholeLinesIter<I: Iterator> {
    lines: Peekable<I>,
}

impl<'a, I: Iterator<Item = &'a str>> WholeLinesIter<I> {
    pub(crate) fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
        }
    }
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for WholeLinesIter<I> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut item = loop {
            let line = self.lines.next()?;
            if starts_item(line) {
                break line.to_string();
            }
        };
        while let Some(line) = self.lines.next_if(|line| !starts_item(line)) {
            let continuation = line.trim_start();
            if continuation.is_empty() {
                continue;
            }
            item.truncate(item.trim_end().len());
            item.push(' ');
            item.push_str(continuation);
        }
        Some(item)
    }
}

fn starts_item(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(&[], &[])]
    #[case(&["PMID- 1"], &["PMID- 1"])]
    #[case(&["PMID- 1", "TI  - One"], &["PMID- 1", "TI  - One"])]
    #[case(
        &["TI  - Fantastic yeasts and where to find them: the hidden diversity of dimorphic fungal ",
          "      pathogens."],
        &["TI  - Fantastic yeasts and where to find them: the hidden diversity of dimorphic fungal pathogens."]
    )]
    #[case(
        &["AB  - This is a long abstract that spans", "      multiple", "      lines.", "PG  - 1-5"],
        &["AB  - This is a long abstract that spans multiple lines.", "PG  - 1-5"]
    )]
    #[case(&["TI  - One", "", "      two"], &["TI  - One two"])]
    #[case(&["TI  - One", "   ", "PG  - 3"], &["TI  - One", "PG  - 3"])]
    #[case(&["      orphan", "", "PMID- 1"], &["PMID- 1"])]
    fn test_whole_lines(#[case] lines: &[&str], #[case] expected: &[&str]) {
        let actual: Vec<String> = WholeLinesIter::new(lines.iter().copied()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_last_item_is_kept() {
        let actual: Vec<String> = WholeLinesIter::new("PMID- 1\nPG  - 1-5".lines()).collect();
        assert_eq!(actual.last().map(String::as_str), Some("PG  - 1-5"));
    }
}
