use crate::foundation::error::{RevealError, RevealResult};

/// Zero-based frame index used when sampling a reveal at a fixed frame rate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> RevealResult<Self> {
        if den == 0 {
            return Err(RevealError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RevealError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Time in seconds at the start of `frame`.
    pub fn frame_to_secs(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * self.frame_duration_secs()
    }

    /// Number of frames needed to cover `secs`, rounded up.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }
}

/// Wrapping element used for a composed reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Paragraph, the text composer's default wrapper.
    #[default]
    P,
    /// Heading level 1.
    H1,
    /// Heading level 2.
    H2,
    /// Heading level 3.
    H3,
    /// Heading level 4.
    H4,
    /// Heading level 5.
    H5,
    /// Heading level 6.
    H6,
    /// Inline span.
    Span,
    /// Generic block.
    Div,
    /// Section, the section wrapper's default.
    Section,
    /// Article.
    Article,
    /// Header.
    Header,
    /// Footer.
    Footer,
    /// List item.
    Li,
}

impl Tag {
    /// Element name as written in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Span => "span",
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Li => "li",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a timing value in seconds: finite and non-negative.
pub(crate) fn validate_secs(what: &str, secs: f64) -> RevealResult<()> {
    if !secs.is_finite() {
        return Err(RevealError::validation(format!("{what} must be finite")));
    }
    if secs < 0.0 {
        return Err(RevealError::validation(format!("{what} must be >= 0")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
