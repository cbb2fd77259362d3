//! Flash banner collection with a deadline-based dismissal schedule.
//!
//! DESIGN
//! ======
//! Banners captured at initialization each carry two absolute deadlines:
//! fade at +5000 ms, removal 400 ms after that (the fade animation time).
//! `advance` applies every transition due at a given clock reading and
//! `next_deadline` tells the driver how long to sleep, so tests run the
//! schedule on a virtual clock instead of real timers. `dismiss` cancels
//! a banner outright; a banner that is already gone is simply absent,
//! which is the guard against acting on it twice.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// Delay before a banner starts fading, in milliseconds.
pub const FADE_DELAY_MS: f64 = 5000.0;

/// Additional delay before a fading banner is removed.
pub const REMOVE_DELAY_MS: f64 = 400.0;

/// Whole milliseconds to sleep so a wake lands at or past `deadline_ms`.
/// Rounded up: truncating would wake just short of a fractional deadline
/// and spin through zero-length sleeps.
#[must_use]
pub fn wait_millis(deadline_ms: f64, now_ms: f64) -> u64 {
    (deadline_ms - now_ms).max(0.0).ceil() as u64
}

/// Severity category, mirroring the server's flash categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
    Error,
    #[default]
    Message,
}

impl FlashLevel {
    /// Map a server category string. Unknown categories render as plain
    /// messages rather than being dropped.
    #[must_use]
    pub fn from_category(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "error" => Self::Error,
            _ => Self::Message,
        }
    }

    /// Base CSS class for the banner element.
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Danger => "alert alert-danger",
            Self::Error => "alert alert-error",
            Self::Message => "alert",
        }
    }
}

/// Lifecycle phase of one banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Fading,
}

/// One notification banner and its dismissal deadlines.
#[derive(Clone, Debug, PartialEq)]
pub struct FlashMessage {
    pub id: u64,
    pub text: String,
    pub level: FlashLevel,
    pub phase: FlashPhase,
    fade_at_ms: f64,
    remove_at_ms: f64,
}

impl FlashMessage {
    /// Class list for rendering; the `fade-out` marker appears once the
    /// fade deadline has passed.
    #[must_use]
    pub fn class(&self) -> String {
        match self.phase {
            FlashPhase::Visible => self.level.alert_class().to_owned(),
            FlashPhase::Fading => format!("{} fade-out", self.level.alert_class()),
        }
    }
}

/// All live banners plus the id counter for newly seeded ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashState {
    messages: Vec<FlashMessage>,
    next_id: u64,
}

impl FlashState {
    /// Capture the banners present at initialization and schedule both
    /// dismissal phases for each, relative to `now_ms`. Banners added to
    /// the page later are not picked up.
    pub fn seed<I>(&mut self, now_ms: f64, items: I)
    where
        I: IntoIterator<Item = (String, FlashLevel)>,
    {
        for (text, level) in items {
            let id = self.next_id;
            self.next_id += 1;
            self.messages.push(FlashMessage {
                id,
                text,
                level,
                phase: FlashPhase::Visible,
                fade_at_ms: now_ms + FADE_DELAY_MS,
                remove_at_ms: now_ms + FADE_DELAY_MS + REMOVE_DELAY_MS,
            });
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// Earliest pending deadline, if any banner still has one.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.messages
            .iter()
            .map(|msg| match msg.phase {
                FlashPhase::Visible => msg.fade_at_ms,
                FlashPhase::Fading => msg.remove_at_ms,
            })
            .min_by(f64::total_cmp)
    }

    /// Apply every transition due at `now_ms`: visible banners past their
    /// fade deadline start fading, and fading banners past their removal
    /// deadline disappear. A single late call catches up both phases.
    pub fn advance(&mut self, now_ms: f64) {
        for msg in &mut self.messages {
            if msg.phase == FlashPhase::Visible && now_ms >= msg.fade_at_ms {
                msg.phase = FlashPhase::Fading;
            }
        }
        self.messages
            .retain(|msg| !(msg.phase == FlashPhase::Fading && now_ms >= msg.remove_at_ms));
    }

    /// Cancel one banner immediately. Returns whether it was still
    /// present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.messages.len();
        self.messages.retain(|msg| msg.id != id);
        before != self.messages.len()
    }
}
