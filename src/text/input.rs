/// Text handed to the composer: one string, or an ordered list of lines.
///
/// A single string is exactly one line; embedded newlines are kept as ordinary characters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RevealText {
    /// One line of text.
    Single(String),
    /// Several lines, one wrapper per line.
    Lines(Vec<String>),
}

impl Default for RevealText {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl RevealText {
    /// Lines in input order.
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Lines(lines) => lines,
        }
    }

    /// Literal text exposed to assistive technology: lines joined by a single space.
    pub fn assistive_text(&self) -> String {
        self.lines().join(" ")
    }

    /// Whether every line is empty.
    pub fn is_empty(&self) -> bool {
        self.lines().iter().all(String::is_empty)
    }
}

impl From<&str> for RevealText {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<String> for RevealText {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for RevealText {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<&[&str]> for RevealText {
    fn from(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RevealText {
    fn from(lines: [&str; N]) -> Self {
        Self::Lines(lines.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/input.rs"]
mod tests;
