//! Start-delay computation for staggered children.

/// Default offset between consecutive siblings, in seconds.
pub const DEFAULT_STAGGER_SECS: f64 = 0.05;

/// How sibling offsets combine across the line / word / character hierarchy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerMode {
    /// Every level staggers its own children: a character's offset is the sum of its line,
    /// word and character indices times the interval.
    #[default]
    Nested,
    /// All characters are siblings of the container: offset is the running character ordinal
    /// across the whole text times the interval.
    Flat,
}

/// Position of one character in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GlyphPosition {
    /// Line index.
    pub line: usize,
    /// Word index within the line.
    pub word: usize,
    /// Character index within the word.
    pub glyph: usize,
    /// Running index over all characters of the text.
    pub ordinal: usize,
}

/// Resolved stagger parameters of a text reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StaggerTiming {
    /// Delay before the first child starts.
    pub delay_children: f64,
    /// Offset between consecutive siblings.
    pub interval: f64,
    /// Combination rule across levels.
    pub mode: StaggerMode,
}

impl Default for StaggerTiming {
    fn default() -> Self {
        Self {
            delay_children: 0.0,
            interval: DEFAULT_STAGGER_SECS,
            mode: StaggerMode::Nested,
        }
    }
}

impl StaggerTiming {
    /// Start delay of the character at `pos`.
    pub fn delay_for(&self, pos: GlyphPosition) -> f64 {
        let steps = match self.mode {
            StaggerMode::Nested => pos.line + pos.word + pos.glyph,
            StaggerMode::Flat => pos.ordinal,
        };
        child_delay(self.delay_children, self.interval, steps)
    }
}

/// Start delay of the `index`-th staggered child.
pub fn child_delay(base: f64, interval: f64, index: usize) -> f64 {
    base + interval * index as f64
}

#[cfg(test)]
#[path = "../tests/unit/stagger/stagger.rs"]
mod tests;
