//! Minimal property tweening driven by the frame clock.
//!
//! Targets expose their animatable fields through [`Tweenable`]; a property
//! key names both the object and the field, so one engine can drive every
//! object a scene owns.

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TweenError {
    #[error("unknown tween property: {0}")]
    UnknownProperty(String),
}

/// Objects with numeric fields that can be read and written by key.
pub trait Tweenable {
    type Key: Copy + PartialEq + std::fmt::Debug;

    fn get(&self, key: Self::Key) -> Option<f32>;
    fn set(&mut self, key: Self::Key, value: f32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// `power2.out`
    QuadOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::QuadOut => 1.0 - (1.0 - p) * (1.0 - p),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Change {
    /// Animate to an absolute value.
    To(f32),
    /// Animate by a delta relative to the value captured at start.
    By(f32),
}

impl Change {
    #[inline]
    fn end_from(self, start: f32) -> f32 {
        match self {
            Change::To(v) => v,
            Change::By(d) => start + d,
        }
    }
}

/// Parameters for [`TweenEngine::animate`].
#[derive(Clone, Debug)]
pub struct TweenSpec<K> {
    pub changes: Vec<(K, Change)>,
    pub duration: f32,
    pub easing: Easing,
    /// Seconds to wait before capturing start values.
    pub delay: f32,
}

impl<K> TweenSpec<K> {
    pub fn new(changes: Vec<(K, Change)>, duration: f32) -> Self {
        Self {
            changes,
            duration,
            easing: Easing::Linear,
            delay: 0.0,
        }
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct Track<K> {
    key: K,
    change: Change,
    start: f32,
    end: f32,
}

#[derive(Clone, Debug)]
struct TweenTask<K> {
    id: TweenId,
    tracks: SmallVec<[Track<K>; 4]>,
    start_time: f32,
    duration: f32,
    easing: Easing,
    captured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenId(u32);

/// In-flight tweens, stepped once per frame in registration order.
pub struct TweenEngine<K> {
    tasks: Vec<TweenTask<K>>,
    next_id: u32,
}

impl<K: Copy + PartialEq + std::fmt::Debug> Default for TweenEngine<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq + std::fmt::Debug> TweenEngine<K> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a tween on `target`. Without a delay the start values are
    /// captured and written immediately (progress 0).
    pub fn animate<T>(&mut self, target: &mut T, spec: TweenSpec<K>, now: f32) -> Result<TweenId, TweenError>
    where
        T: Tweenable<Key = K>,
    {
        let mut tracks = SmallVec::new();
        for (key, change) in spec.changes {
            let start = target
                .get(key)
                .ok_or_else(|| TweenError::UnknownProperty(format!("{:?}", key)))?;
            tracks.push(Track {
                key,
                change,
                start,
                end: change.end_from(start),
            });
        }
        let duration = if spec.duration > 0.0 { spec.duration } else { 1.0 };
        let id = TweenId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let mut task = TweenTask {
            id,
            tracks,
            start_time: now + spec.delay,
            duration,
            easing: spec.easing,
            captured: spec.delay <= 0.0,
        };
        if task.captured {
            step_task(&mut task, now, target);
        }
        self.tasks.push(task);
        Ok(id)
    }

    /// Advance every tween to `now`, writing values onto `target`. Finished
    /// tweens are dropped.
    pub fn step<T>(&mut self, now: f32, target: &mut T)
    where
        T: Tweenable<Key = K>,
    {
        self.tasks.retain_mut(|task| {
            if now < task.start_time {
                return true;
            }
            if !task.captured {
                // Delayed tweens start from wherever the field is now
                for tr in task.tracks.iter_mut() {
                    if let Some(v) = target.get(tr.key) {
                        tr.start = v;
                        tr.end = tr.change.end_from(v);
                    }
                }
                task.captured = true;
            }
            step_task(task, now, target) < 1.0
        });
    }

    #[inline]
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn step_task<K, T>(task: &mut TweenTask<K>, now: f32, target: &mut T) -> f32
where
    K: Copy,
    T: Tweenable<Key = K>,
{
    let progress = ((now - task.start_time) / task.duration).clamp(0.0, 1.0);
    let eased = task.easing.apply(progress);
    for tr in &task.tracks {
        let value = if progress >= 1.0 {
            tr.end
        } else {
            tr.start + (tr.end - tr.start) * eased
        };
        target.set(tr.key, value);
    }
    progress
}
