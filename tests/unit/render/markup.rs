use super::*;
use crate::{foundation::core::Tag, trigger::ViewportOptions};

#[test]
fn text_and_attributes_are_escaped() {
    let node: Node = Element::new(Tag::P)
        .attr("title", "a \"quote\"")
        .child(Node::text("<b> & 'c'"))
        .into();
    assert_eq!(
        to_markup(&node).unwrap(),
        "<p title=\"a &quot;quote&quot;\">&lt;b&gt; &amp; &#39;c&#39;</p>"
    );
}

#[test]
fn motion_props_become_data_attributes() {
    let node: Node = Element::new(Tag::Div)
        .motion(MotionProps {
            initial: Some("hidden".to_owned()),
            while_in_view: Some("visible".to_owned()),
            viewport: Some(ViewportOptions::new(true, 0.2)),
            delay: Some(0.1 + 0.2),
            ..MotionProps::default()
        })
        .into();
    assert_eq!(
        to_markup(&node).unwrap(),
        "<div data-initial=\"hidden\" data-while-in-view=\"visible\" \
         data-viewport-once=\"true\" data-viewport-amount=\"0.2\" data-delay=\"0.3\"></div>"
    );
}

#[test]
fn secs_formatting_trims_noise() {
    assert_eq!(fmt_secs(0.0), "0");
    assert_eq!(fmt_secs(0.15000000000000002), "0.15");
    assert_eq!(fmt_secs(2.0), "2");
    assert_eq!(fmt_secs(-0.00001), "0");
}

#[test]
fn attributes_keep_declaration_order() {
    let node: Node = Element::new(Tag::Span)
        .class("inline-block")
        .attr("aria-hidden", "true")
        .attr("data-segment", "{char}")
        .into();
    assert_eq!(
        to_markup(&node).unwrap(),
        "<span class=\"inline-block\" aria-hidden=\"true\" data-segment=\"{char}\"></span>"
    );
}
