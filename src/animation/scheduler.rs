use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::clock::{Clock, MonotonicClock};
use super::easing::Easing;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    pub duration: Duration,
    pub delay: Duration,
    /// Start offset between consecutive items.
    pub stagger: Duration,
    /// Snap every progress value to 1.0 immediately, scheduling nothing.
    pub disabled: bool,
    pub easing: Easing,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(800),
            delay: Duration::ZERO,
            stagger: Duration::from_millis(50),
            disabled: false,
            easing: Easing::default(),
        }
    }
}

struct FrozenProgress {
    items: Vec<f32>,
    master: f32,
}

struct ScheduleState {
    options: AnimationOptions,
    len: usize,
    /// Clock reading at the start of the current epoch.
    started_at: Duration,
    /// Set once on disposal; all sampling reads it from then on.
    frozen: Option<FrozenProgress>,
}

impl ScheduleState {
    fn item_at(&self, now: Duration, index: usize) -> f32 {
        if let Some(frozen) = &self.frozen {
            return frozen.items.get(index).copied().unwrap_or(1.0);
        }
        // A stale handle past the current item count reports settled, not a
        // stuck zero.
        if index >= self.len || self.options.disabled {
            return 1.0;
        }

        let start = self.options.delay + self.options.stagger * index as u32;
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed < start {
            return 0.0;
        }
        let run = elapsed - start;
        if run >= self.options.duration {
            return 1.0;
        }
        self.options
            .easing
            .apply(run.as_secs_f32() / self.options.duration.as_secs_f32())
    }

    fn master_at(&self, now: Duration) -> f32 {
        if let Some(frozen) = &self.frozen {
            return frozen.master;
        }
        if self.options.disabled || self.len == 0 {
            return 1.0;
        }

        // One transition modeling completion of the last item.
        let total = self.options.duration + self.options.stagger * (self.len - 1) as u32;
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed < self.options.delay {
            return 0.0;
        }
        let run = elapsed - self.options.delay;
        if run >= total {
            return 1.0;
        }
        self.options
            .easing
            .apply(run.as_secs_f32() / total.as_secs_f32())
    }

    fn animating_at(&self, now: Duration) -> bool {
        if self.frozen.is_some() || self.options.disabled || self.len == 0 {
            return false;
        }
        let total = self.options.duration + self.options.stagger * (self.len - 1) as u32;
        now.saturating_sub(self.started_at) < self.options.delay + total
    }
}

struct Shared {
    clock: Arc<dyn Clock>,
    state: RwLock<ScheduleState>,
}

/// Staggered entrance-progress scheduler.
///
/// Drives one progress signal per item plus an aggregate master signal. Item
/// `i` starts at `delay + i * stagger` and eases to 1.0 over `duration`; the
/// master signal eases to 1.0 over the whole staggered window. Progress is a
/// pure function of the injected [`Clock`], sampled on every read, so values
/// stay live until they settle and nothing runs between reads.
///
/// The schedule starts at construction. Whenever the dataset identity changes
/// ([`set_items`](Self::set_items)) or `disabled` toggles, every signal resets
/// to 0 and the schedule restarts from scratch; there is no partial resume.
pub struct StaggerScheduler {
    shared: Arc<Shared>,
}

impl StaggerScheduler {
    pub fn new(len: usize, options: AnimationOptions) -> Self {
        Self::with_clock(len, options, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(len: usize, options: AnimationOptions, clock: Arc<dyn Clock>) -> Self {
        let started_at = clock.now();
        Self {
            shared: Arc::new(Shared {
                clock,
                state: RwLock::new(ScheduleState {
                    options,
                    len,
                    started_at,
                    frozen: None,
                }),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.shared.state.read().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn options(&self) -> AnimationOptions {
        self.shared.state.read().options.clone()
    }

    /// Sample item `index` right now. Settled items report exactly 1.0.
    pub fn item_progress(&self, index: usize) -> f32 {
        let now = self.shared.clock.now();
        self.shared.state.read().item_at(now, index)
    }

    /// Sample the aggregate signal right now.
    pub fn master_progress(&self) -> f32 {
        let now = self.shared.clock.now();
        self.shared.state.read().master_at(now)
    }

    /// Live handles for the current item count, one per item. Each `get()`
    /// re-samples the clock; consumers should hold these rather than cache a
    /// single sampled value.
    pub fn handles(&self) -> Vec<ItemProgress> {
        let len = self.len();
        (0..len)
            .map(|index| ItemProgress {
                shared: self.shared.clone(),
                index,
            })
            .collect()
    }

    pub fn master(&self) -> MasterProgress {
        MasterProgress {
            shared: self.shared.clone(),
        }
    }

    /// Snapshot of whether the schedule still has time remaining. Only valid
    /// at the moment of the call.
    pub fn is_animating(&self) -> bool {
        let now = self.shared.clock.now();
        self.shared.state.read().animating_at(now)
    }

    /// Restart the schedule from scratch for `len` items. All progress values
    /// reset to 0. Ignored after disposal.
    pub fn retrigger(&self, len: usize) {
        let now = self.shared.clock.now();
        let mut state = self.shared.state.write();
        if state.frozen.is_some() {
            return;
        }
        state.len = len;
        state.started_at = now;
        debug!("restarting staggered schedule for {len} items");
    }

    /// Restart only when the item count actually changed.
    pub fn set_items(&self, len: usize) {
        let now = self.shared.clock.now();
        let mut state = self.shared.state.write();
        if state.frozen.is_some() || state.len == len {
            return;
        }
        state.len = len;
        state.started_at = now;
        debug!("restarting staggered schedule for {len} items");
    }

    /// Toggle the disabled flag; a change restarts the schedule (disabling
    /// snaps everything to 1.0, enabling replays the entrance from 0).
    pub fn set_disabled(&self, disabled: bool) {
        let now = self.shared.clock.now();
        let mut state = self.shared.state.write();
        if state.frozen.is_some() || state.options.disabled == disabled {
            return;
        }
        state.options.disabled = disabled;
        state.started_at = now;
    }

    /// Freeze every signal at its current value and cancel all pending
    /// starts; an item that had not started stays at 0 forever. Safe to call
    /// any number of times.
    pub fn dispose(&self) {
        let now = self.shared.clock.now();
        let mut state = self.shared.state.write();
        if state.frozen.is_some() {
            return;
        }
        let items = (0..state.len).map(|i| state.item_at(now, i)).collect();
        let master = state.master_at(now);
        state.frozen = Some(FrozenProgress { items, master });
        debug!("disposed staggered schedule");
    }
}

/// Live per-item progress handle.
#[derive(Clone)]
pub struct ItemProgress {
    shared: Arc<Shared>,
    index: usize,
}

impl ItemProgress {
    pub fn get(&self) -> f32 {
        let now = self.shared.clock.now();
        self.shared.state.read().item_at(now, self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Live aggregate progress handle.
#[derive(Clone)]
pub struct MasterProgress {
    shared: Arc<Shared>,
}

impl MasterProgress {
    pub fn get(&self) -> f32 {
        let now = self.shared.clock.now();
        self.shared.state.read().master_at(now)
    }
}
