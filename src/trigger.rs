//! When a reveal starts: on entering the viewport or immediately on mount.

use crate::foundation::error::{RevealError, RevealResult};

/// Viewport intersection parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportOptions {
    /// Run at most once per mount.
    #[serde(default = "default_once")]
    pub once: bool,
    /// Visible fraction in `[0, 1]` required to trigger. `0` means any intersection.
    #[serde(default)]
    pub amount: f64,
}

fn default_once() -> bool {
    true
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            once: true,
            amount: 0.0,
        }
    }
}

impl ViewportOptions {
    /// Viewport options from explicit values.
    pub fn new(once: bool, amount: f64) -> Self {
        Self { once, amount }
    }

    /// Whether an element with `fraction` of its area visible crosses the threshold.
    pub fn is_satisfied_by(&self, fraction: f64) -> bool {
        if self.amount <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.amount
        }
    }

    /// Reject an `amount` outside `[0, 1]`.
    pub fn validate(&self) -> RevealResult<()> {
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(RevealError::validation(
                "viewport.amount must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Trigger source for one reveal instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum RevealTrigger {
    /// Reveal when the element enters the viewport.
    #[serde(alias = "onFirstVisibility")]
    Viewport(ViewportOptions),
    /// Reveal on mount; replays whenever the content changes.
    #[default]
    Immediately,
}

impl RevealTrigger {
    /// One-shot viewport trigger firing on any intersection.
    pub fn on_first_visibility() -> Self {
        Self::Viewport(ViewportOptions::default())
    }

    /// Viewport options, if this is a viewport trigger.
    pub fn viewport(&self) -> Option<ViewportOptions> {
        match self {
            Self::Viewport(v) => Some(*v),
            Self::Immediately => None,
        }
    }

    /// Validate viewport options.
    pub fn validate(&self) -> RevealResult<()> {
        match self {
            Self::Viewport(v) => v.validate(),
            Self::Immediately => Ok(()),
        }
    }
}

/// One-shot latch owned by a single component instance. Once set it is never reset.
#[derive(Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Unset latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the first call only.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the latch has fired.
    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

/// Visibility state of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RevealState {
    /// Hidden variant applied.
    Hidden,
    /// Visible variant reached or animating.
    Visible,
}

/// What the engine should do in response to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RevealAction {
    /// Run hidden -> visible.
    Start,
    /// Abort any in-flight reveal and run it again from hidden.
    Restart,
    /// Return to hidden without animating children.
    Hide,
    /// Nothing changes.
    Ignore,
}

/// Per-instance reveal state machine.
///
/// Drop the controller on unmount; a fresh mount gets a fresh latch.
#[derive(Debug)]
pub struct RevealController {
    trigger: RevealTrigger,
    latch: RevealLatch,
    state: RevealState,
    mounted: bool,
    in_view: bool,
    runs: u32,
}

impl RevealController {
    /// Controller for one unmounted instance.
    pub fn new(trigger: RevealTrigger) -> Self {
        Self {
            trigger,
            latch: RevealLatch::new(),
            state: RevealState::Hidden,
            mounted: false,
            in_view: false,
            runs: 0,
        }
    }

    /// Trigger source.
    pub fn trigger(&self) -> RevealTrigger {
        self.trigger
    }

    /// Current visibility.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Number of reveal runs started so far (restarts included).
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// The instance mounted.
    pub fn mount(&mut self) -> RevealAction {
        if self.mounted {
            return RevealAction::Ignore;
        }
        self.mounted = true;
        let action = match self.trigger {
            RevealTrigger::Immediately => self.start(),
            RevealTrigger::Viewport(_) => RevealAction::Ignore,
        };
        tracing::debug!(?action, "reveal mounted");
        action
    }

    /// The element's visible fraction changed to `fraction` while intersecting.
    pub fn viewport_enter(&mut self, fraction: f64) -> RevealAction {
        let RevealTrigger::Viewport(opts) = self.trigger else {
            return RevealAction::Ignore;
        };
        if !self.mounted || self.in_view || !opts.is_satisfied_by(fraction) {
            return RevealAction::Ignore;
        }
        self.in_view = true;

        let action = if opts.once {
            if self.latch.fire() {
                self.start()
            } else {
                RevealAction::Ignore
            }
        } else if self.state == RevealState::Hidden {
            self.start()
        } else {
            RevealAction::Ignore
        };
        tracing::debug!(fraction, ?action, "reveal viewport enter");
        action
    }

    /// The element left the viewport.
    pub fn viewport_leave(&mut self) -> RevealAction {
        self.in_view = false;
        match self.trigger {
            RevealTrigger::Viewport(opts) if !opts.once && self.state == RevealState::Visible => {
                self.state = RevealState::Hidden;
                tracing::debug!("reveal hidden on viewport leave");
                RevealAction::Hide
            }
            _ => RevealAction::Ignore,
        }
    }

    /// The revealed content was replaced.
    pub fn content_changed(&mut self) -> RevealAction {
        match self.trigger {
            RevealTrigger::Immediately if self.mounted => {
                self.runs += 1;
                self.state = RevealState::Visible;
                tracing::debug!(runs = self.runs, "reveal restarted on content change");
                RevealAction::Restart
            }
            _ => RevealAction::Ignore,
        }
    }

    fn start(&mut self) -> RevealAction {
        self.runs += 1;
        self.state = RevealState::Visible;
        RevealAction::Start
    }
}

#[cfg(test)]
#[path = "../tests/unit/trigger/trigger.rs"]
mod tests;
