//! Keeping count of paired testing functions.
//!
//! `verifyprebarriers()` and `verifypostbarriers()` work in pairs: the
//! first call starts verification, the next call of the same function
//! finishes it. A lone call does nothing. Generation doesn't try to pair
//! them up, so this only watches and reports.
use crate::generator::Invocation;
use crate::hook::Hook;
use ::std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Window {
    open: bool,
    calls: u64,
}

#[derive(Debug, Clone, Default)]
pub struct BarrierWindows {
    windows: BTreeMap<Hook, Window>,
}

impl BarrierWindows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note one generated call. Unpaired hooks are ignored.
    pub fn observe(&mut self, invocation: &Invocation) {
        if let Some(hook) = invocation.hook() {
            self.observe_hook(hook);
        }
    }

    pub fn observe_hook(&mut self, hook: Hook) {
        if hook.is_paired() {
            let window = self.windows.entry(hook).or_default();
            window.open = !window.open;
            window.calls += 1;
        }
    }

    /// Hooks whose last call started verification that never got finished.
    pub fn open_windows(&self) -> Vec<Hook> {
        self.windows
            .iter()
            .filter(|(_, window)| window.open)
            .map(|(hook, _)| *hook)
            .collect()
    }

    pub fn observed(&self, hook: Hook) -> u64 {
        self.windows.get(&hook).map_or(0, |window| window.calls)
    }

    /// Number of verification windows that were both started and finished.
    pub fn completed(&self, hook: Hook) -> u64 {
        self.observed(hook) / 2
    }

    pub fn reset(&mut self) {
        self.windows.clear();
    }
}
