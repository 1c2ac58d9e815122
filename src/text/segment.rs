//! Lossless line -> word -> character segmentation.
//!
//! Words are separated by a single ASCII space. The separator is not part of any word; it is
//! represented by a spacer between adjacent words, so runs of spaces yield empty words and
//! [`Line::text`] always reproduces the input line.

use unicode_segmentation::UnicodeSegmentation;

/// Separator between words inside one line.
pub const WORD_SEPARATOR: char = ' ';

/// Where character boundaries fall inside a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStrategy {
    /// One segment per Unicode scalar value. Combining marks and multi-codepoint emoji are split
    /// into several segments.
    #[default]
    Chars,
    /// One segment per extended grapheme cluster.
    Graphemes,
}

impl SplitStrategy {
    fn split<'a>(self, word: &'a str) -> Vec<&'a str> {
        match self {
            Self::Chars => word
                .char_indices()
                .map(|(i, c)| &word[i..i + c.len_utf8()])
                .collect(),
            Self::Graphemes => word.graphemes(true).collect(),
        }
    }
}

/// One character segment.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Glyph {
    /// Position within the word.
    pub index: usize,
    /// Character content.
    pub text: String,
}

/// One word segment.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Word {
    /// Position within the line.
    pub index: usize,
    /// Characters in order.
    pub glyphs: Vec<Glyph>,
}

impl Word {
    /// Characters concatenated.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }
}

/// One line segment.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Line {
    /// Position within the input.
    pub index: usize,
    /// Words in order; adjacent words are separated by a spacer.
    pub words: Vec<Word>,
}

impl Line {
    /// Glyphs and spacers concatenated in order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, w) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(WORD_SEPARATOR);
            }
            for g in &w.glyphs {
                out.push_str(&g.text);
            }
        }
        out
    }

    /// Number of characters.
    pub fn glyph_count(&self) -> usize {
        self.words.iter().map(|w| w.glyphs.len()).sum()
    }

    /// Number of spacers between words.
    pub fn spacer_count(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

/// Split one line into words and characters.
pub fn segment_line(index: usize, line: &str, strategy: SplitStrategy) -> Line {
    let words = line
        .split(WORD_SEPARATOR)
        .enumerate()
        .map(|(wi, word)| Word {
            index: wi,
            glyphs: strategy
                .split(word)
                .into_iter()
                .enumerate()
                .map(|(ci, g)| Glyph {
                    index: ci,
                    text: g.to_owned(),
                })
                .collect(),
        })
        .collect();
    Line { index, words }
}

/// Split every line, indexing lines by input position.
pub fn segment_lines(lines: &[String], strategy: SplitStrategy) -> Vec<Line> {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| segment_line(i, l, strategy))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
