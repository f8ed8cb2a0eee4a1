use super::constants::{AUTO_CYCLE_SIM_SECS, IDLE_REVERT_MS};
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Polygons,
    FlowField,
    Swarm,
    Fractal,
    Glitch,
}

impl SceneId {
    pub const ALL: [SceneId; 5] = [
        SceneId::Polygons,
        SceneId::FlowField,
        SceneId::Swarm,
        SceneId::Fractal,
        SceneId::Glitch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneId::Polygons => "polygons",
            SceneId::FlowField => "flow field",
            SceneId::Swarm => "swarm",
            SceneId::Fractal => "fractal",
            SceneId::Glitch => "glitch",
        }
    }
}

/// Scenes drawn together in one frame, bottom first.
pub type SceneLayer = SmallVec<[SceneId; 4]>;

/// Fixed ordered list of selectable entries.
#[derive(Clone, Debug)]
pub struct SceneRegistry {
    entries: Vec<SceneLayer>,
}

impl SceneRegistry {
    /// One scene per entry.
    pub fn single() -> Self {
        Self {
            entries: SceneId::ALL.iter().map(|s| smallvec![*s]).collect(),
        }
    }

    /// Fixed combinations of two to four scenes per entry.
    pub fn layered() -> Self {
        use SceneId::*;
        Self {
            entries: vec![
                smallvec![Polygons, Glitch],
                smallvec![FlowField, Swarm],
                smallvec![Fractal, Polygons],
                smallvec![Swarm, FlowField, Polygons, Glitch],
                smallvec![Fractal, Swarm, Glitch],
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entry(&self, index: usize) -> Option<&SceneLayer> {
        self.entries.get(index)
    }

    pub fn label(&self, index: usize) -> String {
        self.entry(index)
            .map(|layer| layer.iter().map(|s| s.name()).collect::<Vec<_>>().join(" + "))
            .unwrap_or_default()
    }
}

/// Index into a registry of `len` entries, with optional timed cycling.
#[derive(Clone, Debug)]
pub struct SceneSelector {
    index: usize,
    len: usize,
    cycling_enabled: bool,
    auto_cycle: bool,
    last_switch_time: f64,
    last_movement_ms: Option<f64>,
}

impl SceneSelector {
    /// `cycling_enabled` turns on auto-cycle and idle revert.
    pub fn new(len: usize, initial: usize, cycling_enabled: bool) -> Self {
        let len = len.max(1);
        Self {
            index: initial % len,
            len,
            cycling_enabled,
            auto_cycle: cycling_enabled,
            last_switch_time: 0.0,
            last_movement_ms: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn auto_cycle(&self) -> bool {
        self.auto_cycle
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn select(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }

    /// A manual pick restarts the auto-cycle interval from `sim_time`.
    pub fn note_manual_switch(&mut self, sim_time: f64) {
        self.last_switch_time = sim_time;
    }

    /// Pointer movement pauses automatic cycling.
    pub fn note_pointer_movement(&mut self, at_ms: f64) {
        self.last_movement_ms = Some(at_ms);
        if self.cycling_enabled && self.auto_cycle {
            log::debug!("[scenes] auto-cycle paused by pointer");
            self.auto_cycle = false;
        }
    }

    /// Per accepted frame. Returns `true` when the scene changed automatically.
    pub fn tick(&mut self, sim_time: f64, now_ms: f64) -> bool {
        if !self.cycling_enabled {
            return false;
        }
        if !self.auto_cycle {
            let idle = self
                .last_movement_ms
                .map(|t| now_ms - t >= IDLE_REVERT_MS)
                .unwrap_or(true);
            if !idle {
                return false;
            }
            log::debug!("[scenes] auto-cycle resumed after idle");
            self.auto_cycle = true;
            self.last_switch_time = sim_time;
            return false;
        }
        if sim_time - self.last_switch_time >= AUTO_CYCLE_SIM_SECS {
            self.last_switch_time = sim_time;
            self.advance();
            return true;
        }
        false
    }
}
