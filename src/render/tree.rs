use crate::{
    animation::variant::VariantPair, foundation::core::Tag, trigger::ViewportOptions,
};

/// Engine-facing animation props of one element.
///
/// State names refer to entries of `variants` (or of the nearest ancestor's variants when
/// `variants` is set but the state props are not, mirroring variant propagation in motion
/// engines).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionProps {
    /// State definitions for this element and its descendants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<VariantPair>,
    /// State on mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    /// State to animate to immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate: Option<String>,
    /// State to animate to on viewport entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub while_in_view: Option<String>,
    /// Viewport trigger parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportOptions>,
    /// Start offset in seconds, relative to the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Transition duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Element of the render description.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Element name.
    pub tag: Tag,
    /// Space-separated classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Attributes in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Animation props, if the element is animated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionProps>,
    /// Child nodes in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class_name: None,
            attrs: Vec::new(),
            motion: None,
            children: Vec::new(),
        }
    }

    /// Set the class.
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set or clear the class.
    pub fn maybe_class(mut self, class_name: Option<&str>) -> Self {
        self.class_name = class_name.map(str::to_owned);
        self
    }

    /// Append an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Attach animation props.
    pub fn motion(mut self, motion: MotionProps) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Append a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Whether `class_name` is one of the element's classes.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|c| c == class_name))
    }

    /// Value of attribute `name`.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Framework-neutral render description.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    /// Literal text.
    Text(String),
    /// Nested element.
    Element(Element),
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl Node {
    /// Text node.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Element behind this node, if any.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Pre-order traversal over elements.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Self::Element(e) = self {
            out.push(e);
            for c in &e.children {
                c.collect_elements(out);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tree.rs"]
mod tests;
