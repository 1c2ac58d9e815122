//! Wavyte Reveal composes declarative, staggered reveal animations for text and content blocks.
//!
//! The crate does not animate anything itself. It produces plans and render descriptions that a
//! motion engine interpolates:
//!
//! 1. **Segment**: `RevealText -> Line -> Word -> Glyph` (lossless, deterministic)
//! 2. **Time**: every character gets a start delay from its position ([`StaggerTiming`])
//! 3. **Describe**: [`TextRevealPlan::to_node`] / [`SectionRevealPlan::to_node`] emit a
//!    framework-neutral [`Node`] tree carrying `hidden` / `visible` variants
//! 4. **Trigger**: [`RevealController`] decides when a mounted reveal runs
//!
//! Composition never fails. Errors only arise when loading [`RevealConfig`] documents.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod config;
mod eval;
mod foundation;
mod render;
mod stagger;
mod text;
mod trigger;

pub use animation::ease::Ease;
pub use animation::variant::{
    DEFAULT_DURATION_SECS, HIDDEN, StyleMap, StyleValue, Transition, VISIBLE, Variant,
    VariantPair, style,
};
pub use compose::section::{
    DEFAULT_SECTION_DURATION_SECS, DEFAULT_SECTION_STAGGER_SECS, DEFAULT_SECTION_VIEWPORT_AMOUNT,
    SectionReveal, SectionRevealPlan,
};
pub use compose::text::{
    LINE_CLASS, PlannedGlyph, SEGMENT_ATTR, SEGMENT_CLASS, SPACER_TEXT, SR_ONLY_CLASS, TextReveal,
    TextRevealInstance, TextRevealPlan,
};
pub use config::{
    ComposedReveal, RevealConfig, SectionChild, SectionRevealConfig, TextRevealConfig,
};
pub use eval::preview::{GlyphSample, Preview, PreviewFrame, interpolate};
pub use foundation::core::{Fps, FrameIndex, Tag};
pub use foundation::error::{RevealError, RevealResult};
pub use render::markup::to_markup;
pub use render::tree::{Element, MotionProps, Node};
pub use stagger::{DEFAULT_STAGGER_SECS, GlyphPosition, StaggerMode, StaggerTiming, child_delay};
pub use text::input::RevealText;
pub use text::segment::{
    Glyph, Line, SplitStrategy, WORD_SEPARATOR, Word, segment_line, segment_lines,
};
pub use trigger::{
    RevealAction, RevealController, RevealLatch, RevealState, RevealTrigger, ViewportOptions,
};
