use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    foundation::core::validate_secs,
    foundation::error::{RevealError, RevealResult},
};

/// State name of the hidden variant.
pub const HIDDEN: &str = "hidden";
/// State name of the visible variant.
pub const VISIBLE: &str = "visible";

/// Duration used when a visible variant carries no explicit `duration`.
pub const DEFAULT_DURATION_SECS: f64 = 0.3;

/// Target value for one style property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Interpolatable numeric target (opacity, offsets, scale, ...).
    Number(f64),
    /// Opaque target such as a color or a keyword; switched, never interpolated.
    Text(String),
}

impl StyleValue {
    /// Numeric value, if this target is interpolatable.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Open mapping of style property name to target value, ordered by name.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Build a [`StyleMap`] from `(name, value)` pairs.
pub fn style<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Timing metadata attached to a variant.
///
/// Every field is optional; absent fields fall back to the engine or composer default.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// Transition length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Delay before this node starts, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Easing curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    /// Offset between the starts of consecutive animated children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    /// Delay before the first animated child starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
}

impl Transition {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.duration.is_none()
            && self.delay.is_none()
            && self.ease.is_none()
            && self.stagger_children.is_none()
            && self.delay_children.is_none()
    }

    /// Field-wise overlay: values set in `over` win.
    pub fn merged(&self, over: &Transition) -> Transition {
        Transition {
            duration: over.duration.or(self.duration),
            delay: over.delay.or(self.delay),
            ease: over.ease.or(self.ease),
            stagger_children: over.stagger_children.or(self.stagger_children),
            delay_children: over.delay_children.or(self.delay_children),
        }
    }

    /// Reject non-finite or negative timings.
    pub fn validate(&self) -> RevealResult<()> {
        let fields = [
            ("transition.duration", self.duration),
            ("transition.delay", self.delay),
            ("transition.staggerChildren", self.stagger_children),
            ("transition.delayChildren", self.delay_children),
        ];
        for (what, v) in fields {
            if let Some(v) = v {
                validate_secs(what, v)?;
            }
        }
        Ok(())
    }
}

/// One named animation state: style targets plus optional timing.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variant {
    /// Style targets keyed by property name.
    #[serde(flatten)]
    pub style: StyleMap,
    /// Timing used when transitioning into this state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl Variant {
    /// Variant with `style` targets and no timing.
    pub fn new(style: StyleMap) -> Self {
        Self {
            style,
            transition: None,
        }
    }

    /// A variant with no style targets, used by containers that only orchestrate children.
    pub fn orchestration(transition: Transition) -> Self {
        Self {
            style: StyleMap::new(),
            transition: (!transition.is_empty()).then_some(transition),
        }
    }

    /// Attach timing metadata.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Numeric target of `prop`, if present.
    pub fn number(&self, prop: &str) -> Option<f64> {
        self.style.get(prop).and_then(StyleValue::as_number)
    }

    /// Timing metadata, or an all-default one.
    pub fn transition_or_default(&self) -> Transition {
        self.transition.clone().unwrap_or_default()
    }

    /// Reject reserved or non-finite properties and invalid timing.
    pub fn validate(&self) -> RevealResult<()> {
        for (name, value) in &self.style {
            if name == "transition" {
                return Err(RevealError::validation(
                    "style property name 'transition' is reserved",
                ));
            }
            if let StyleValue::Number(v) = value
                && !v.is_finite()
            {
                return Err(RevealError::validation(format!(
                    "style property '{name}' must be finite"
                )));
            }
        }
        if let Some(t) = &self.transition {
            t.validate()?;
        }
        Ok(())
    }
}

/// The `hidden` / `visible` pair handed to the engine for one animatable node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariantPair {
    /// State before the reveal.
    pub hidden: Variant,
    /// State after the reveal.
    pub visible: Variant,
}

impl Default for VariantPair {
    /// Fade in while rising 20 units, 0.1s per character.
    fn default() -> Self {
        Self {
            hidden: Variant::new(style([("opacity", 0.0), ("y", 20.0)])),
            visible: Variant::new(style([("opacity", 1.0), ("y", 0.0)])).with_transition(
                Transition {
                    duration: Some(0.1),
                    ..Transition::default()
                },
            ),
        }
    }
}

impl VariantPair {
    /// Pair from explicit `hidden` and `visible` variants.
    pub fn new(hidden: Variant, visible: Variant) -> Self {
        Self { hidden, visible }
    }

    /// Lookup by state name.
    pub fn get(&self, state: &str) -> Option<&Variant> {
        match state {
            HIDDEN => Some(&self.hidden),
            VISIBLE => Some(&self.visible),
            _ => None,
        }
    }

    /// Duration of the hidden -> visible transition.
    pub fn reveal_duration(&self) -> f64 {
        self.visible
            .transition
            .as_ref()
            .and_then(|t| t.duration)
            .unwrap_or(DEFAULT_DURATION_SECS)
    }

    /// Ease of the hidden -> visible transition.
    pub fn reveal_ease(&self) -> Ease {
        self.visible
            .transition
            .as_ref()
            .and_then(|t| t.ease)
            .unwrap_or_default()
    }

    /// Validate both variants.
    pub fn validate(&self) -> RevealResult<()> {
        self.hidden.validate()?;
        self.visible.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variant.rs"]
mod tests;
