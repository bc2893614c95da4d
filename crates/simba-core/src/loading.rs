//! Asset preload bookkeeping.
//!
//! Failed loads count the same as successful ones so a broken asset never
//! keeps the page behind the loading screen.

use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Model,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetSpec {
    pub kind: AssetKind,
    pub path: &'static str,
}

/// Assets preloaded before the intro may start.
pub const SITE_ASSETS: &[AssetSpec] = &[
    AssetSpec {
        kind: AssetKind::Image,
        path: "/img/logo.png",
    },
    AssetSpec {
        kind: AssetKind::Image,
        path: "/img/background.jpg",
    },
    AssetSpec {
        kind: AssetKind::Image,
        path: "/img/texture1.jpg",
    },
    AssetSpec {
        kind: AssetKind::Image,
        path: "/img/texture2.jpg",
    },
    AssetSpec {
        kind: AssetKind::Model,
        path: "/models/can.glb",
    },
];

/// Step count used by the simulated loader when nothing is declared.
pub const SIMULATED_STEPS: usize = 10;
pub const SIMULATED_STEP_MS: i32 = 200;
pub const MODEL_LOAD_MS: i32 = 500;
/// Above this percentage the progress bar eases into completion.
pub const PROGRESS_EASE_FROM: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadProgress {
    pub percent: f32,
    /// True only for the update that completed loading.
    pub just_completed: bool,
}

#[derive(Debug)]
pub struct LoadTracker {
    total: usize,
    loaded: usize,
    settled: FnvHashSet<String>,
    complete: bool,
}

impl LoadTracker {
    /// A zero total falls back to the simulated step count.
    pub fn new(total: usize) -> Self {
        Self {
            total: if total == 0 { SIMULATED_STEPS } else { total },
            loaded: 0,
            settled: FnvHashSet::default(),
            complete: false,
        }
    }

    /// Mark `key` as settled (loaded or failed). A key settling twice is
    /// counted once.
    pub fn settle(&mut self, key: &str, ok: bool) -> Option<LoadProgress> {
        if !self.settled.insert(key.to_string()) {
            return None;
        }
        if !ok {
            log::warn!("[loader] failed to load {}; continuing", key);
        }
        Some(self.advance())
    }

    /// Count one anonymous step (simulated loading).
    pub fn step(&mut self) -> LoadProgress {
        self.advance()
    }

    fn advance(&mut self) -> LoadProgress {
        self.loaded += 1;
        let just_completed = !self.complete && self.loaded >= self.total;
        if just_completed {
            self.complete = true;
        }
        LoadProgress {
            percent: self.percent(),
            just_completed,
        }
    }

    pub fn percent(&self) -> f32 {
        (self.loaded as f32 / self.total as f32 * 100.0).clamp(0.0, 100.0)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }
}
