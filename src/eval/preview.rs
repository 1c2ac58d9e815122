//! Reference sampling of composed reveals.
//!
//! Interpolation is the motion engine's job; this sampler exists so timing can be inspected
//! without one (CLI `preview`, tests). Numeric properties are eased from the hidden to the
//! visible target; anything else switches when the transition completes.

use crate::{
    animation::{
        ease::Ease,
        variant::{StyleMap, StyleValue, VariantPair},
    },
    compose::{section::SectionRevealPlan, text::TextRevealPlan},
    foundation::core::{Fps, FrameIndex},
};

/// Sampled state of one character.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphSample {
    /// Running index over all characters.
    pub ordinal: usize,
    /// Character content.
    pub text: String,
    /// Linear progress in `[0, 1]` before easing.
    pub progress: f64,
    /// Interpolated style.
    pub style: StyleMap,
}

/// Sampled state of a whole text reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PreviewFrame {
    /// Seconds since the reveal was triggered.
    pub time: f64,
    /// Characters in document order.
    pub glyphs: Vec<GlyphSample>,
    /// Every character has reached its visible state.
    pub settled: bool,
}

/// Stateless sampler.
pub struct Preview;

impl Preview {
    /// Sample every character `time` seconds after the trigger.
    pub fn sample_text(plan: &TextRevealPlan, time: f64) -> PreviewFrame {
        let glyphs: Vec<GlyphSample> = plan
            .glyphs
            .iter()
            .map(|g| {
                let progress = linear_progress(time, g.delay, plan.duration);
                GlyphSample {
                    ordinal: g.position.ordinal,
                    text: g.text.clone(),
                    progress,
                    style: interpolate(&plan.variants, progress, plan.ease),
                }
            })
            .collect();
        let settled = glyphs.iter().all(|g| g.progress >= 1.0);
        PreviewFrame {
            time,
            glyphs,
            settled,
        }
    }

    /// One frame per tick from the trigger until the reveal settles, both ends included.
    #[tracing::instrument(skip(plan))]
    pub fn sample_text_frames(plan: &TextRevealPlan, fps: Fps) -> Vec<PreviewFrame> {
        let last = fps.secs_to_frames_ceil(plan.total_duration());
        (0..=last)
            .map(|f| Self::sample_text(plan, fps.frame_to_secs(FrameIndex(f))))
            .collect()
    }

    /// Container style of a section at `time`, with the linear progress.
    pub fn sample_section(plan: &SectionRevealPlan, time: f64) -> (f64, StyleMap) {
        let progress = linear_progress(time, plan.delay(), plan.duration());
        (progress, interpolate(&plan.variants, progress, plan.ease()))
    }
}

fn linear_progress(time: f64, delay: f64, duration: f64) -> f64 {
    let local = time - delay;
    if duration <= 0.0 {
        return if local >= 0.0 { 1.0 } else { 0.0 };
    }
    (local / duration).clamp(0.0, 1.0)
}

/// Style between `hidden` and `visible` at linear `progress`.
pub fn interpolate(pair: &VariantPair, progress: f64, ease: Ease) -> StyleMap {
    let eased = ease.apply(progress);
    let done = progress >= 1.0;
    let hidden = &pair.hidden.style;
    let visible = &pair.visible.style;

    let mut out = StyleMap::new();
    for (name, from) in hidden {
        let value = match (from, visible.get(name)) {
            (StyleValue::Number(a), Some(StyleValue::Number(b))) => {
                StyleValue::Number(a + (b - a) * eased)
            }
            (_, Some(to)) if done => to.clone(),
            _ => from.clone(),
        };
        out.insert(name.clone(), value);
    }
    for (name, to) in visible {
        if !hidden.contains_key(name) {
            out.insert(name.clone(), to.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/eval/preview.rs"]
mod tests;
