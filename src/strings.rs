//! String helpers and their display wrappers.
//!
//! Each operation exists twice: a pure function returning the computed
//! value, and a `show_*` method on [`StringDisplay`] that renders the value
//! to text and hands it to an [`OutputSink`] under a fixed target name.
//! Hosts decide where text goes by choosing the sink.
//!
//! Positions and lengths are counted in `char`s, not bytes.

use std::collections::HashMap;

/// Receives rendered results for named display targets.
pub trait OutputSink {
    /// Replaces the text shown for `target`.
    fn set_text(&mut self, target: &str, text: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn set_text(&mut self, target: &str, text: &str) {
        (**self).set_text(target, text);
    }
}

/// Sink that keeps the most recent text written to each target.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    texts: HashMap<String, String>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written to `target`, if any.
    pub fn get(&self, target: &str) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    /// Number of targets written so far.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn set_text(&mut self, target: &str, text: &str) {
        self.texts.insert(target.to_owned(), text.to_owned());
    }
}

/// Sink that emits every write as an `info` log record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn set_text(&mut self, target: &str, text: &str) {
        log::info!("{target} = {text}");
    }
}

// ---------------------------------------------------------------------------
// Display targets
// ---------------------------------------------------------------------------

/// Target receiving the concatenation.
pub const CONCAT_TARGET: &str = "concatResult";
/// Target receiving the character count.
pub const LENGTH_TARGET: &str = "lengthResult";
/// Target receiving the substring.
pub const SUBSTRING_TARGET: &str = "substringResult";
/// Target receiving the upper-case text.
pub const UPPER_TARGET: &str = "upperResult";
/// Target receiving the lower-case text.
pub const LOWER_TARGET: &str = "lowerResult";
/// Target receiving the quoted trimmed text.
pub const TRIM_TARGET: &str = "trimResult";
/// Target receiving the text after replacement.
pub const REPLACE_TARGET: &str = "replaceResult";
/// Target receiving the JSON array of split parts.
pub const SPLIT_TARGET: &str = "splitResult";
/// Target receiving the first match position.
pub const INDEX_OF_TARGET: &str = "indexOfResult";
/// Target receiving the containment flag.
pub const INCLUDES_TARGET: &str = "includesResult";

// ---------------------------------------------------------------------------
// Pure operations
// ---------------------------------------------------------------------------

/// `a` followed by `b`.
pub fn concatenate(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// Number of characters in `s`.
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// Characters from `start` up to (not including) `end`.
///
/// Both indices are clamped to the length of `s`, and they are swapped if
/// `start > end`, so this never panics.
///
/// # Examples
/// ```
/// use math_toolkit::strings::substring;
/// assert_eq!(substring("hello world", 0, 5), "hello");
/// assert_eq!(substring("hello", 4, 1), "ell");
/// assert_eq!(substring("hello", 2, 99), "llo");
/// ```
pub fn substring(s: &str, start: usize, end: usize) -> String {
    let len = length(s);
    let (a, b) = (start.min(len), end.min(len));
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    s.chars().skip(from).take(to - from).collect()
}

/// Upper-case form of `s`.
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// Lower-case form of `s`.
pub fn to_lower_case(s: &str) -> String {
    s.to_lowercase()
}

/// `s` without leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim()
}

/// Replaces the first occurrence of `find` with `replacement`.
///
/// An empty `find` matches at the start, so `replacement` is prepended.
pub fn replace_first(s: &str, find: &str, replacement: &str) -> String {
    s.replacen(find, replacement, 1)
}

/// Splits `s` on every occurrence of `separator`.
///
/// An empty separator splits into individual characters (and an empty
/// string into no parts at all).
///
/// # Examples
/// ```
/// use math_toolkit::strings::split;
/// assert_eq!(split("a,b,,c", ","), vec!["a", "b", "", "c"]);
/// assert_eq!(split("abc", ""), vec!["a", "b", "c"]);
/// ```
pub fn split(s: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        s.chars().map(String::from).collect()
    } else {
        s.split(separator).map(str::to_owned).collect()
    }
}

/// Character position of the first occurrence of `needle`.
pub fn index_of(s: &str, needle: &str) -> Option<usize> {
    s.find(needle).map(|byte| s[..byte].chars().count())
}

/// True if `needle` occurs anywhere in `s`.
pub fn includes(s: &str, needle: &str) -> bool {
    s.contains(needle)
}

// ---------------------------------------------------------------------------
// Display wrappers
// ---------------------------------------------------------------------------

/// Computes string operations and writes their rendered result to a sink.
///
/// # Examples
/// ```
/// use math_toolkit::strings::{MemorySink, StringDisplay, UPPER_TARGET};
/// let mut display = StringDisplay::new(MemorySink::new());
/// display.show_upper_case("shout");
/// assert_eq!(display.sink().get(UPPER_TARGET), Some("SHOUT"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringDisplay<S> {
    sink: S,
}

impl<S: OutputSink> StringDisplay<S> {
    /// Wraps `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Borrows the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes `a` followed by `b` to [`CONCAT_TARGET`].
    pub fn show_concatenate(&mut self, a: &str, b: &str) {
        self.sink.set_text(CONCAT_TARGET, &concatenate(a, b));
    }

    /// Writes the character count to [`LENGTH_TARGET`].
    pub fn show_length(&mut self, s: &str) {
        self.sink.set_text(LENGTH_TARGET, &length(s).to_string());
    }

    /// Writes [`substring`] of `s` to [`SUBSTRING_TARGET`].
    pub fn show_substring(&mut self, s: &str, start: usize, end: usize) {
        self.sink
            .set_text(SUBSTRING_TARGET, &substring(s, start, end));
    }

    /// Writes the upper-case form to [`UPPER_TARGET`].
    pub fn show_upper_case(&mut self, s: &str) {
        self.sink.set_text(UPPER_TARGET, &to_upper_case(s));
    }

    /// Writes the lower-case form to [`LOWER_TARGET`].
    pub fn show_lower_case(&mut self, s: &str) {
        self.sink.set_text(LOWER_TARGET, &to_lower_case(s));
    }

    /// Writes the trimmed text, wrapped in double quotes, to [`TRIM_TARGET`].
    pub fn show_trim(&mut self, s: &str) {
        self.sink.set_text(TRIM_TARGET, &format!("\"{}\"", trim(s)));
    }

    /// Writes `s` with its first `find` replaced to [`REPLACE_TARGET`].
    pub fn show_replace(&mut self, s: &str, find: &str, replacement: &str) {
        self.sink
            .set_text(REPLACE_TARGET, &replace_first(s, find, replacement));
    }

    /// Writes the parts as a JSON array of strings to [`SPLIT_TARGET`].
    pub fn show_split(&mut self, s: &str, separator: &str) {
        let parts = split(s, separator);
        let rendered =
            serde_json::to_string(&parts).expect("Vec<String> always serializes");
        self.sink.set_text(SPLIT_TARGET, &rendered);
    }

    /// Writes the character position, or `-1` when `needle` is absent, to
    /// [`INDEX_OF_TARGET`].
    pub fn show_index_of(&mut self, s: &str, needle: &str) {
        let rendered = match index_of(s, needle) {
            Some(i) => i.to_string(),
            None => "-1".to_owned(),
        };
        self.sink.set_text(INDEX_OF_TARGET, &rendered);
    }

    /// Writes `true` or `false` to [`INCLUDES_TARGET`].
    pub fn show_includes(&mut self, s: &str, needle: &str) {
        self.sink
            .set_text(INCLUDES_TARGET, &includes(s, needle).to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn substring_never_exceeds_length(s in ".{0,40}", start in 0_usize..60, end in 0_usize..60) {
            let sub = substring(&s, start, end);
            prop_assert!(length(&sub) <= length(&s));
            prop_assert!(s.contains(sub.as_str()));
        }

        #[test]
        fn split_then_join_restores(s in "[a-c,]{0,30}") {
            prop_assert_eq!(split(&s, ",").join(","), s);
        }

        #[test]
        fn index_of_agrees_with_includes(s in "[a-d]{0,20}", needle in "[a-d]{0,3}") {
            prop_assert_eq!(index_of(&s, &needle).is_some(), includes(&s, &needle));
        }
    }
}
