//! JSON reveal documents.
//!
//! A document is either a text reveal or a section reveal, selected by `"kind"`. Every field
//! except the text itself is optional and falls back to the composer default. Sections may nest
//! plain strings and further documents as children.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::variant::{StyleMap, Transition, VariantPair},
    compose::{
        section::{SectionReveal, SectionRevealPlan},
        text::{TextReveal, TextRevealPlan},
    },
    foundation::core::{Tag, validate_secs},
    foundation::error::{RevealError, RevealResult},
    render::tree::Node,
    stagger::{DEFAULT_STAGGER_SECS, StaggerMode},
    text::{input::RevealText, segment::SplitStrategy},
    trigger::{RevealTrigger, ViewportOptions},
};

/// A reveal document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RevealConfig {
    /// Staggered text reveal.
    Text(TextRevealConfig),
    /// Section reveal wrapper.
    Section(SectionRevealConfig),
}

/// Text reveal document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRevealConfig {
    /// Text to reveal.
    pub text: RevealText,
    /// Wrapping element, `p` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    /// Class of the wrapping element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Hidden / visible variants for every character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<VariantPair>,
    /// Offset between siblings in seconds, 0.05 by default.
    #[serde(
        default,
        alias = "staggerTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub stagger: Option<f64>,
    /// How offsets combine across levels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_mode: Option<StaggerMode>,
    /// Character boundary strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitStrategy>,
    /// Explicit trigger; takes precedence over `once`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<RevealTrigger>,
    /// `true` reveals once on first visibility, otherwise on mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub once: Option<bool>,
}

/// Section reveal document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRevealConfig {
    /// Wrapping element, `section` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    /// Class of the wrapping element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Style before the reveal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<StyleMap>,
    /// Style reached on viewport entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub while_in_view: Option<StyleMap>,
    /// Explicit visible style; disables viewport triggering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<StyleMap>,
    /// Delay before the transition, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Offset between staggered children, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    /// Viewport trigger parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportOptions>,
    /// Transition replacing the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    /// Wrapped content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SectionChild>,
}

/// Content placed inside a section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SectionChild {
    /// Plain text child.
    Text(String),
    /// Nested reveal document.
    Reveal(RevealConfig),
}

/// Composed form of a [`RevealConfig`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ComposedReveal {
    /// Composed text reveal.
    Text(TextRevealPlan),
    /// Composed section reveal.
    Section(SectionRevealPlan),
}

impl ComposedReveal {
    /// Render description of the composed reveal.
    pub fn to_node(&self) -> Node {
        match self {
            Self::Text(plan) => plan.to_node(),
            Self::Section(plan) => plan.to_node(),
        }
    }

    /// Resolved trigger source.
    pub fn trigger(&self) -> RevealTrigger {
        match self {
            Self::Text(plan) => plan.trigger,
            Self::Section(plan) => plan.trigger,
        }
    }
}

impl RevealConfig {
    /// Parse and validate a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        let cfg: RevealConfig = serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse reveal JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a document from a JSON string.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a document from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::validation(format!("open reveal JSON '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!("reveal config loaded");
        Ok(cfg)
    }

    /// Validate timings and viewport parameters, recursively.
    pub fn validate(&self) -> RevealResult<()> {
        match self {
            Self::Text(t) => t.validate(),
            Self::Section(s) => s.validate(),
        }
    }

    /// Compose the document.
    pub fn compose(&self) -> ComposedReveal {
        match self {
            Self::Text(t) => ComposedReveal::Text(t.to_reveal().compose()),
            Self::Section(s) => ComposedReveal::Section(s.compose()),
        }
    }
}

impl TextRevealConfig {
    /// Document for `text` with every option defaulted.
    pub fn new(text: impl Into<RevealText>) -> Self {
        Self {
            text: text.into(),
            tag: None,
            class_name: None,
            animation: None,
            stagger: None,
            stagger_mode: None,
            split: None,
            trigger: None,
            once: None,
        }
    }

    /// Validate stagger, variants and trigger.
    pub fn validate(&self) -> RevealResult<()> {
        if let Some(s) = self.stagger {
            validate_secs("stagger", s)?;
        }
        if let Some(a) = &self.animation {
            a.validate()?;
        }
        if let Some(t) = &self.trigger {
            t.validate()?;
        }
        Ok(())
    }

    fn resolved_trigger(&self) -> RevealTrigger {
        match (self.trigger, self.once) {
            (Some(t), _) => t,
            (None, Some(true)) => RevealTrigger::on_first_visibility(),
            (None, _) => RevealTrigger::Immediately,
        }
    }

    /// Builder equivalent of this document.
    pub fn to_reveal(&self) -> TextReveal {
        let mut reveal = TextReveal::new(self.text.clone())
            .tag(self.tag.unwrap_or_default())
            .variants(self.animation.clone().unwrap_or_default())
            .stagger(self.stagger.unwrap_or(DEFAULT_STAGGER_SECS))
            .stagger_mode(self.stagger_mode.unwrap_or_default())
            .split(self.split.unwrap_or_default())
            .trigger(self.resolved_trigger());
        if let Some(class_name) = &self.class_name {
            reveal = reveal.class_name(class_name.clone());
        }
        reveal
    }
}

impl SectionRevealConfig {
    /// Validate timings, viewport and nested children.
    pub fn validate(&self) -> RevealResult<()> {
        if let Some(d) = self.delay {
            validate_secs("delay", d)?;
        }
        if let Some(s) = self.stagger_children {
            validate_secs("staggerChildren", s)?;
        }
        if let Some(v) = &self.viewport {
            v.validate()?;
        }
        if let Some(t) = &self.transition {
            t.validate()?;
        }
        for child in &self.children {
            if let SectionChild::Reveal(cfg) = child {
                cfg.validate()?;
            }
        }
        Ok(())
    }

    /// Builder equivalent of this document.
    pub fn to_reveal(&self) -> SectionReveal {
        let mut reveal = SectionReveal::new();
        if let Some(tag) = self.tag {
            reveal = reveal.tag(tag);
        }
        if let Some(class_name) = &self.class_name {
            reveal = reveal.class_name(class_name.clone());
        }
        if let Some(initial) = &self.initial {
            reveal = reveal.initial(initial.clone());
        }
        if let Some(target) = &self.while_in_view {
            reveal = reveal.while_in_view(target.clone());
        }
        if let Some(target) = &self.animate {
            reveal = reveal.animate(target.clone());
        }
        if let Some(delay) = self.delay {
            reveal = reveal.delay(delay);
        }
        if let Some(stagger) = self.stagger_children {
            reveal = reveal.stagger_children(stagger);
        }
        if let Some(viewport) = self.viewport {
            reveal = reveal.viewport(viewport);
        }
        if let Some(transition) = &self.transition {
            reveal = reveal.transition(transition.clone());
        }
        reveal
    }

    /// Compose children, then the section around them.
    pub fn compose(&self) -> SectionRevealPlan {
        let children = self
            .children
            .iter()
            .map(|c| match c {
                SectionChild::Text(s) => Node::text(s.clone()),
                SectionChild::Reveal(cfg) => cfg.compose().to_node(),
            })
            .collect();
        self.to_reveal().compose(children)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
