/// Detect the line break used by `text`: `"\r\n"` if the first line ends with
/// a carriage return, otherwise `"\n"`.
pub(crate) fn newline_delimiter_of(text: &str) -> &'static str {
    // find the first '\n', then check whether the character before it is '\r'
    if text
        .find('\n')
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| text.get(i..i + 1))
        .is_some_and(|x| x == "\r")
    {
        "\r\n"
    } else {
        "\n"
    }
}

/// Returns the last `n` characters of `s`, or `None` if `s` is shorter.
pub(crate) fn last_chars(s: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    s.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| &s[i..])
}
