use super::*;
use crate::animation::variant::style;

fn segments<'a>(node: &'a Node, kind: &str) -> Vec<&'a Element> {
    node.elements()
        .into_iter()
        .filter(|e| e.attr_value(SEGMENT_ATTR) == Some(kind))
        .collect()
}

fn decorative(node: &Node) -> &Element {
    node.elements()
        .into_iter()
        .find(|e| e.attr_value("aria-hidden") == Some("true"))
        .unwrap()
}

#[test]
fn hi_there_segments_into_words_chars_and_spacer() {
    let plan = TextReveal::new("Hi there").compose();
    assert_eq!(plan.word_count(), 2);
    assert_eq!(plan.glyph_count(), 7);
    assert_eq!(plan.spacer_count(), 1);

    let node = plan.to_node();
    let words: Vec<String> = segments(&node, "word")
        .iter()
        .map(|w| Node::Element((*w).clone()).text_content())
        .collect();
    assert_eq!(words, ["Hi", "there"]);
    assert_eq!(segments(&node, "char").len(), 7);
    assert_eq!(segments(&node, "spacer").len(), 1);
    assert_eq!(segments(&node, "line").len(), 1);
}

#[test]
fn characters_and_spacers_reconstruct_input() {
    for s in ["Hi there", "", "  spaced  out ", "ünïcödé wörds", "a\u{301} b"] {
        let plan = TextReveal::new(s).compose();
        assert_eq!(plan.reconstructed_lines(), [s.to_owned()]);

        let glyphs: String = plan.glyphs.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(glyphs, s.replace(' ', ""));
    }
}

#[test]
fn empty_text_composes_without_glyphs() {
    let plan = TextReveal::new("").compose();
    assert_eq!(plan.glyph_count(), 0);
    assert_eq!(plan.total_duration(), 0.0);
    let node = plan.to_node();
    assert!(segments(&node, "char").is_empty());
    assert_eq!(decorative(&node).children.len(), 1);
}

#[test]
fn delays_increase_with_character_index_and_repeat() {
    let config = TextReveal::new("abc").stagger(0.05);
    let a = config.compose();
    let b = config.compose();
    let delays: Vec<f64> = a.glyphs.iter().map(|g| g.delay).collect();
    assert!(delays.windows(2).all(|w| w[1] > w[0]));
    assert!((delays[1] - 0.05).abs() < 1e-12);
    assert_eq!(a, b);
}

#[test]
fn nested_stagger_compounds_line_and_word_index() {
    let plan = TextReveal::new(["ab cd", "ef"]).stagger(0.1).compose();
    // "c": line 0, word 1, char 0
    let c = &plan.glyphs[2];
    assert_eq!(c.text, "c");
    assert!((c.delay - 0.1).abs() < 1e-12);
    // "f": line 1, word 0, char 1
    let f = &plan.glyphs[5];
    assert_eq!(f.text, "f");
    assert!((f.delay - 0.2).abs() < 1e-12);
}

#[test]
fn flat_stagger_follows_document_order() {
    let plan = TextReveal::new(["ab cd", "ef"])
        .stagger(0.1)
        .stagger_mode(StaggerMode::Flat)
        .compose();
    let f = plan.glyphs.last().unwrap();
    assert_eq!(f.position.ordinal, 5);
    assert!((f.delay - 0.5).abs() < 1e-12);
}

#[test]
fn visible_delay_shifts_all_children() {
    let variants = VariantPair::new(
        Variant::new(style([("opacity", 0.0)])),
        Variant::new(style([("opacity", 1.0)])).with_transition(Transition {
            delay: Some(0.4),
            duration: Some(0.2),
            ..Transition::default()
        }),
    );
    let plan = TextReveal::new("xy").variants(variants).compose();
    assert!((plan.glyphs[0].delay - 0.4).abs() < 1e-12);
    assert_eq!(plan.duration, 0.2);
    assert!((plan.total_duration() - (0.4 + 0.05 + 0.2)).abs() < 1e-12);
}

#[test]
fn assistive_text_is_literal_joined_input() {
    let plan = TextReveal::new(["Design  in", "motion"]).compose();
    let node = plan.to_node();
    let sr = node
        .elements()
        .into_iter()
        .find(|e| e.has_class(SR_ONLY_CLASS))
        .unwrap();
    assert_eq!(Node::Element(sr.clone()).text_content(), "Design  in motion");
    assert_eq!(plan.assistive_text, "Design  in motion");
}

#[test]
fn trigger_selects_container_state_props() {
    let once = TextReveal::new("a").once(true).compose().to_node();
    let m = decorative(&once).motion.clone().unwrap();
    assert_eq!(m.while_in_view.as_deref(), Some(VISIBLE));
    assert_eq!(m.animate, None);
    assert!(m.viewport.is_some_and(|v| v.once));

    let now = TextReveal::new("a").once(false).compose().to_node();
    let m = decorative(&now).motion.clone().unwrap();
    assert_eq!(m.animate.as_deref(), Some(VISIBLE));
    assert_eq!(m.while_in_view, None);
    assert_eq!(m.viewport, None);
}

#[test]
fn wrapper_uses_tag_and_class() {
    let node = TextReveal::new("Title")
        .tag(Tag::H1)
        .class_name("hero")
        .compose()
        .to_node();
    let root = node.as_element().unwrap();
    assert_eq!(root.tag, Tag::H1);
    assert!(root.has_class("hero"));
}

#[test]
fn glyph_nodes_carry_variants_and_timing() {
    let node = TextReveal::new("ok").compose().to_node();
    let chars = segments(&node, "char");
    let m = chars[1].motion.clone().unwrap();
    assert_eq!(m.variants, Some(VariantPair::default()));
    assert_eq!(m.duration, Some(0.1));
    assert!((m.delay.unwrap() - 0.05).abs() < 1e-12);
}

#[test]
fn first_visibility_instance_runs_once() {
    let mut inst = TextReveal::new("Hi").once(true).instance();
    inst.mount();
    assert_eq!(inst.viewport_enter(1.0), RevealAction::Start);
    inst.viewport_leave();
    assert_eq!(inst.viewport_enter(1.0), RevealAction::Ignore);
    assert_eq!(inst.controller().runs(), 1);
}

#[test]
fn immediate_instance_restarts_on_new_text() {
    let mut inst = TextReveal::new("Hi").instance();
    assert_eq!(inst.mount(), RevealAction::Start);
    assert_eq!(inst.set_text("Hi"), RevealAction::Ignore);
    assert_eq!(inst.set_text("Hello"), RevealAction::Restart);
    assert_eq!(inst.plan().glyph_count(), 5);
    assert_eq!(inst.controller().runs(), 2);
}

/// Start time a renderer would derive from the tree: inherited container stagger plus the
/// element's own delay and any delay in its visible variant.
fn tree_start_times(node: &Node) -> Vec<f64> {
    fn walk(el: &Element, inherited: f64, out: &mut Vec<f64>) {
        let mut start = inherited;
        let mut stagger = 0.0;
        let mut delay_children = 0.0;
        if let Some(m) = &el.motion {
            start += m.delay.unwrap_or(0.0);
            if let Some(t) = m.variants.as_ref().and_then(|v| v.visible.transition.as_ref()) {
                start += t.delay.unwrap_or(0.0);
                stagger = t.stagger_children.unwrap_or(0.0);
                delay_children = t.delay_children.unwrap_or(0.0);
            }
        }
        if el.attr_value(SEGMENT_ATTR) == Some("char") {
            out.push(start);
            return;
        }
        for (i, c) in el.children.iter().filter_map(Node::as_element).enumerate() {
            walk(c, start + delay_children + stagger * i as f64, out);
        }
    }
    let mut out = Vec::new();
    walk(node.as_element().unwrap(), 0.0, &mut out);
    out
}

#[test]
fn tree_timing_matches_planned_delays() {
    let plan = TextReveal::new(["ab cd", "ef"]).stagger(0.1).compose();
    let node = plan.to_node();
    let container = decorative(&node).motion.clone().unwrap();
    let t = container.variants.unwrap().visible.transition;
    assert!(t.is_none_or(|t| t.stagger_children.is_none() && t.delay_children.is_none()));
    for kind in ["line", "word", "spacer"] {
        assert!(segments(&node, kind).iter().all(|e| e.motion.is_none()));
    }

    let starts = tree_start_times(&node);
    let planned: Vec<f64> = plan.glyphs.iter().map(|g| g.delay).collect();
    assert_eq!(starts.len(), planned.len());
    for (s, p) in starts.iter().zip(&planned) {
        assert!((s - p).abs() < 1e-12, "{starts:?} != {planned:?}");
    }
    assert!((planned[5] - 0.2).abs() < 1e-12);
}

#[test]
fn visible_delay_is_counted_once_in_tree() {
    let variants = VariantPair::new(
        Variant::new(style([("opacity", 0.0)])),
        Variant::new(style([("opacity", 1.0)])).with_transition(Transition {
            delay: Some(0.4),
            duration: Some(0.2),
            ..Transition::default()
        }),
    );
    let plan = TextReveal::new(["ab cd", "ef"])
        .stagger(0.1)
        .variants(variants)
        .compose();
    let node = plan.to_node();
    let chars = segments(&node, "char");
    let visible = chars[0].motion.clone().unwrap().variants.unwrap().visible;
    let t = visible.transition.unwrap();
    assert_eq!(t.delay, None);
    assert_eq!(t.duration, Some(0.2));

    let starts = tree_start_times(&node);
    for (s, g) in starts.iter().zip(&plan.glyphs) {
        assert!((s - g.delay).abs() < 1e-12);
    }
    assert!((starts[0] - 0.4).abs() < 1e-12);
}
