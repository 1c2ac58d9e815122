//! Staggered line -> word -> character text reveal.
//!
//! The composed tree carries the text twice: once whole inside a visually hidden node for
//! assistive technology, and once as an `aria-hidden` decorative hierarchy whose character
//! nodes each animate from `hidden` to `visible` at their own start delay.

use crate::{
    animation::{
        ease::Ease,
        variant::{HIDDEN, Transition, VISIBLE, Variant, VariantPair},
    },
    foundation::core::Tag,
    render::tree::{Element, MotionProps, Node},
    stagger::{DEFAULT_STAGGER_SECS, GlyphPosition, StaggerMode, StaggerTiming},
    text::{
        input::RevealText,
        segment::{Line, SplitStrategy, segment_lines},
    },
    trigger::{RevealAction, RevealController, RevealTrigger},
};

/// Class of the node exposing the literal text to assistive technology only.
pub const SR_ONLY_CLASS: &str = "sr-only";
/// Class of one line of the decorative hierarchy.
pub const LINE_CLASS: &str = "block";
/// Class of words, characters and spacers.
pub const SEGMENT_CLASS: &str = "inline-block";
/// Rendered content of a spacer between two words.
pub const SPACER_TEXT: &str = "\u{a0}";

/// `data-segment` attribute naming the hierarchy level of a decorative node.
pub const SEGMENT_ATTR: &str = "data-segment";

/// Builder for a text reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct TextReveal {
    text: RevealText,
    tag: Tag,
    class_name: Option<String>,
    variants: VariantPair,
    stagger: f64,
    stagger_mode: StaggerMode,
    split: SplitStrategy,
    trigger: RevealTrigger,
}

impl TextReveal {
    /// Text reveal with default variants, stagger and an immediate trigger.
    pub fn new(text: impl Into<RevealText>) -> Self {
        Self {
            text: text.into(),
            tag: Tag::P,
            class_name: None,
            variants: VariantPair::default(),
            stagger: DEFAULT_STAGGER_SECS,
            stagger_mode: StaggerMode::Nested,
            split: SplitStrategy::Chars,
            trigger: RevealTrigger::Immediately,
        }
    }

    /// Wrapping element.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Class of the wrapping element.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Hidden / visible variants applied to every character.
    pub fn variants(mut self, variants: VariantPair) -> Self {
        self.variants = variants;
        self
    }

    /// Offset between consecutive siblings at every level, in seconds.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = secs;
        self
    }

    /// How sibling offsets combine across levels.
    pub fn stagger_mode(mut self, mode: StaggerMode) -> Self {
        self.stagger_mode = mode;
        self
    }

    /// Character boundary strategy.
    pub fn split(mut self, split: SplitStrategy) -> Self {
        self.split = split;
        self
    }

    /// When the reveal runs.
    pub fn trigger(mut self, trigger: RevealTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Shorthand for a one-shot viewport trigger (`true`) or an immediate one (`false`).
    pub fn once(self, once: bool) -> Self {
        let trigger = if once {
            RevealTrigger::on_first_visibility()
        } else {
            RevealTrigger::Immediately
        };
        self.trigger(trigger)
    }

    /// Text being revealed.
    pub fn text(&self) -> &RevealText {
        &self.text
    }

    /// Replace the text, keeping every other setting.
    pub fn with_text(mut self, text: impl Into<RevealText>) -> Self {
        self.text = text.into();
        self
    }

    fn timing(&self) -> StaggerTiming {
        StaggerTiming {
            delay_children: self
                .variants
                .visible
                .transition
                .as_ref()
                .and_then(|t| t.delay)
                .unwrap_or(0.0),
            interval: self.stagger,
            mode: self.stagger_mode,
        }
    }

    /// Segment the text and resolve every character's start delay.
    #[tracing::instrument(skip(self), fields(lines = self.text.lines().len()))]
    pub fn compose(&self) -> TextRevealPlan {
        let lines = segment_lines(self.text.lines(), self.split);
        let timing = self.timing();

        let mut glyphs = Vec::new();
        for line in &lines {
            for word in &line.words {
                for glyph in &word.glyphs {
                    let position = GlyphPosition {
                        line: line.index,
                        word: word.index,
                        glyph: glyph.index,
                        ordinal: glyphs.len(),
                    };
                    glyphs.push(PlannedGlyph {
                        position,
                        text: glyph.text.clone(),
                        delay: timing.delay_for(position),
                    });
                }
            }
        }
        tracing::debug!(glyphs = glyphs.len(), "text reveal composed");

        TextRevealPlan {
            tag: self.tag,
            class_name: self.class_name.clone(),
            assistive_text: self.text.assistive_text(),
            trigger: self.trigger,
            variants: self.variants.clone(),
            timing,
            duration: self.variants.reveal_duration(),
            ease: self.variants.reveal_ease(),
            lines,
            glyphs,
        }
    }

    /// Mount-scoped instance with its own trigger state.
    pub fn instance(self) -> TextRevealInstance {
        TextRevealInstance::new(self)
    }
}

/// One animatable character with its resolved start delay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlannedGlyph {
    /// Position in the hierarchy.
    pub position: GlyphPosition,
    /// Character content.
    pub text: String,
    /// Seconds after the trigger at which this character starts animating.
    pub delay: f64,
}

/// Result of composing a [`TextReveal`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRevealPlan {
    /// Wrapping element.
    pub tag: Tag,
    /// Class of the wrapping element.
    pub class_name: Option<String>,
    /// Literal text exposed to assistive technology.
    pub assistive_text: String,
    /// When the reveal runs.
    pub trigger: RevealTrigger,
    /// Variants applied to every character.
    pub variants: VariantPair,
    /// Resolved stagger timing.
    pub timing: StaggerTiming,
    /// Per-character transition duration.
    pub duration: f64,
    /// Per-character ease.
    pub ease: Ease,
    /// Segmented lines.
    pub lines: Vec<Line>,
    /// Characters in document order.
    pub glyphs: Vec<PlannedGlyph>,
}

impl TextRevealPlan {
    /// Number of animated characters.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Number of words across all lines.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Number of spacers between words across all lines.
    pub fn spacer_count(&self) -> usize {
        self.lines.iter().map(Line::spacer_count).sum()
    }

    /// Each line rebuilt from its characters and spacers.
    pub fn reconstructed_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    /// Time from trigger until the last character settles.
    pub fn total_duration(&self) -> f64 {
        self.glyphs
            .iter()
            .map(|g| g.delay + self.duration)
            .fold(0.0, f64::max)
    }

    /// The container only switches state; every character carries its own absolute start.
    fn container_motion(&self) -> MotionProps {
        let container = VariantPair::new(Variant::default(), Variant::default());
        let mut motion = MotionProps {
            variants: Some(container),
            initial: Some(HIDDEN.to_owned()),
            ..MotionProps::default()
        };
        match self.trigger {
            RevealTrigger::Viewport(opts) => {
                motion.while_in_view = Some(VISIBLE.to_owned());
                motion.viewport = Some(opts);
            }
            RevealTrigger::Immediately => motion.animate = Some(VISIBLE.to_owned()),
        }
        motion
    }

    /// Character variants with the visible `delay` removed; it is already part of
    /// [`PlannedGlyph::delay`].
    fn glyph_variants(&self) -> VariantPair {
        let mut variants = self.variants.clone();
        if let Some(t) = variants.visible.transition.take() {
            let t = Transition { delay: None, ..t };
            variants.visible.transition = (!t.is_empty()).then_some(t);
        }
        variants
    }

    fn glyph_node(&self, glyph: &PlannedGlyph, variants: &VariantPair) -> Node {
        Element::new(Tag::Span)
            .class(SEGMENT_CLASS)
            .attr(SEGMENT_ATTR, "char")
            .motion(MotionProps {
                variants: Some(variants.clone()),
                delay: Some(glyph.delay),
                duration: Some(self.duration),
                ..MotionProps::default()
            })
            .child(Node::text(glyph.text.clone()))
            .into()
    }

    /// Render description: assistive node followed by the decorative hierarchy.
    pub fn to_node(&self) -> Node {
        let assistive = Element::new(Tag::Span)
            .class(SR_ONLY_CLASS)
            .child(Node::text(self.assistive_text.clone()));

        let glyph_variants = self.glyph_variants();
        let mut planned = self.glyphs.iter();
        let mut decorative = Element::new(Tag::Span)
            .attr("aria-hidden", "true")
            .motion(self.container_motion());

        for line in &self.lines {
            let mut line_el = Element::new(Tag::Span)
                .class(LINE_CLASS)
                .attr(SEGMENT_ATTR, "line");
            for word in &line.words {
                if word.index > 0 {
                    line_el = line_el.child(
                        Element::new(Tag::Span)
                            .class(SEGMENT_CLASS)
                            .attr(SEGMENT_ATTR, "spacer")
                            .child(Node::text(SPACER_TEXT)),
                    );
                }
                let glyph_nodes = planned
                    .by_ref()
                    .take(word.glyphs.len())
                    .map(|g| self.glyph_node(g, &glyph_variants));
                line_el = line_el.child(
                    Element::new(Tag::Span)
                        .class(SEGMENT_CLASS)
                        .attr(SEGMENT_ATTR, "word")
                        .children(glyph_nodes),
                );
            }
            decorative = decorative.child(line_el);
        }

        Element::new(self.tag)
            .maybe_class(self.class_name.as_deref())
            .child(assistive)
            .child(decorative)
            .into()
    }
}

/// A mounted text reveal: the current plan plus its trigger state.
#[derive(Debug)]
pub struct TextRevealInstance {
    config: TextReveal,
    plan: TextRevealPlan,
    controller: RevealController,
}

impl TextRevealInstance {
    /// Compose `config` and create its trigger state.
    pub fn new(config: TextReveal) -> Self {
        let plan = config.compose();
        let controller = RevealController::new(config.trigger);
        Self {
            config,
            plan,
            controller,
        }
    }

    /// Current plan.
    pub fn plan(&self) -> &TextRevealPlan {
        &self.plan
    }

    /// Trigger state.
    pub fn controller(&self) -> &RevealController {
        &self.controller
    }

    /// Forward a mount event.
    pub fn mount(&mut self) -> RevealAction {
        self.controller.mount()
    }

    /// Forward a viewport entry with the visible `fraction`.
    pub fn viewport_enter(&mut self, fraction: f64) -> RevealAction {
        self.controller.viewport_enter(fraction)
    }

    /// Forward a viewport exit.
    pub fn viewport_leave(&mut self) -> RevealAction {
        self.controller.viewport_leave()
    }

    /// Replace the text, recomposing the plan. Unchanged text is a no-op.
    pub fn set_text(&mut self, text: impl Into<RevealText>) -> RevealAction {
        let text = text.into();
        if &text == self.config.text() {
            return RevealAction::Ignore;
        }
        self.config = self.config.clone().with_text(text);
        self.plan = self.config.compose();
        self.controller.content_changed()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/text.rs"]
mod tests;
