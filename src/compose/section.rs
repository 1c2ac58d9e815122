//! Single hidden -> visible transition around arbitrary content.

use crate::{
    animation::{
        ease::Ease,
        variant::{HIDDEN, StyleMap, Transition, VISIBLE, Variant, VariantPair, style},
    },
    foundation::core::Tag,
    render::tree::{Element, MotionProps, Node},
    stagger::child_delay,
    trigger::{RevealController, RevealTrigger, ViewportOptions},
};

/// Default offset between staggered children of a section, in seconds.
pub const DEFAULT_SECTION_STAGGER_SECS: f64 = 0.2;
/// Default visible fraction required to trigger a section.
pub const DEFAULT_SECTION_VIEWPORT_AMOUNT: f64 = 0.2;
/// Default section transition duration, in seconds.
pub const DEFAULT_SECTION_DURATION_SECS: f64 = 0.5;

/// Builder for a section reveal.
///
/// The section becomes visible either when it enters the viewport or, when an explicit
/// `animate` target is supplied, as soon as it mounts. The two sources never combine.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionReveal {
    tag: Tag,
    class_name: Option<String>,
    initial: StyleMap,
    in_view: StyleMap,
    animate: Option<StyleMap>,
    delay: f64,
    stagger_children: f64,
    viewport: ViewportOptions,
    transition: Transition,
}

impl Default for SectionReveal {
    fn default() -> Self {
        Self {
            tag: Tag::Section,
            class_name: None,
            initial: style([("opacity", 0.0), ("y", 20.0)]),
            in_view: style([("opacity", 1.0), ("y", 0.0)]),
            animate: None,
            delay: 0.0,
            stagger_children: DEFAULT_SECTION_STAGGER_SECS,
            viewport: ViewportOptions::new(true, DEFAULT_SECTION_VIEWPORT_AMOUNT),
            transition: Transition {
                duration: Some(DEFAULT_SECTION_DURATION_SECS),
                ease: Some(Ease::OutQuad),
                ..Transition::default()
            },
        }
    }
}

impl SectionReveal {
    /// Section reveal with the default fade-rise on viewport entry.
    pub fn new() -> Self {
        Self::default()
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

    /// Style before the reveal.
    pub fn initial(mut self, initial: StyleMap) -> Self {
        self.initial = initial;
        self
    }

    /// Style reached on viewport entry.
    pub fn while_in_view(mut self, target: StyleMap) -> Self {
        self.in_view = target;
        self
    }

    /// Explicit visible target; disables viewport triggering.
    pub fn animate(mut self, target: StyleMap) -> Self {
        self.animate = Some(target);
        self
    }

    /// Delay before the transition starts, in seconds.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Offset between staggered children, in seconds.
    pub fn stagger_children(mut self, secs: f64) -> Self {
        self.stagger_children = secs;
        self
    }

    /// Viewport trigger parameters.
    pub fn viewport(mut self, viewport: ViewportOptions) -> Self {
        self.viewport = viewport;
        self
    }

    /// Transition fields set here override `delay` and `stagger_children`.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    fn trigger(&self) -> RevealTrigger {
        if self.animate.is_some() {
            RevealTrigger::Immediately
        } else {
            RevealTrigger::Viewport(self.viewport)
        }
    }

    /// Compose the plan around `children`.
    #[tracing::instrument(skip(self, children), fields(child_count = children.len()))]
    pub fn compose(&self, children: Vec<Node>) -> SectionRevealPlan {
        let base = Transition {
            delay: Some(self.delay),
            stagger_children: Some(self.stagger_children),
            ..Transition::default()
        };
        let transition = base.merged(&self.transition);
        let target = self.animate.clone().unwrap_or_else(|| self.in_view.clone());

        let variants = VariantPair::new(
            Variant::new(self.initial.clone()),
            Variant::new(target).with_transition(transition),
        );
        let trigger = self.trigger();
        tracing::debug!(?trigger, "section reveal composed");

        SectionRevealPlan {
            tag: self.tag,
            class_name: self.class_name.clone(),
            variants,
            trigger,
            children,
        }
    }
}

/// Result of composing a [`SectionReveal`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRevealPlan {
    /// Wrapping element.
    pub tag: Tag,
    /// Class of the wrapping element.
    pub class_name: Option<String>,
    /// Container variants; visible carries the merged transition.
    pub variants: VariantPair,
    /// Resolved trigger source.
    pub trigger: RevealTrigger,
    /// Wrapped content.
    pub children: Vec<Node>,
}

impl SectionRevealPlan {
    fn visible_transition(&self) -> Transition {
        self.variants.visible.transition_or_default()
    }

    /// Delay before the transition starts.
    pub fn delay(&self) -> f64 {
        self.visible_transition().delay.unwrap_or(0.0)
    }

    /// Transition duration.
    pub fn duration(&self) -> f64 {
        self.variants.reveal_duration()
    }

    /// Transition ease.
    pub fn ease(&self) -> Ease {
        self.variants.reveal_ease()
    }

    /// Whether an explicit `animate` target drives visibility.
    pub fn is_explicit(&self) -> bool {
        self.trigger == RevealTrigger::Immediately
    }

    /// Start delay of the `index`-th staggered child.
    pub fn child_delay(&self, index: usize) -> f64 {
        let t = self.visible_transition();
        child_delay(
            t.delay.unwrap_or(0.0) + t.delay_children.unwrap_or(0.0),
            t.stagger_children.unwrap_or(0.0),
            index,
        )
    }

    /// Fresh trigger state machine for one mounted instance.
    pub fn controller(&self) -> RevealController {
        RevealController::new(self.trigger)
    }

    /// Render description: wrapper element around a motion container.
    pub fn to_node(&self) -> Node {
        let mut motion = MotionProps {
            variants: Some(self.variants.clone()),
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

        Element::new(self.tag)
            .maybe_class(self.class_name.as_deref())
            .child(
                Element::new(Tag::Div)
                    .motion(motion)
                    .children(self.children.iter().cloned()),
            )
            .into()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/section.rs"]
mod tests;
