//! Logical key state for one frame
//!
//! Tracks which game keys are held and which went down since the previous
//! frame. Terminals that never report key releases are handled with a grace
//! period: a key counts as held until it has been silent for that long.

use std::time::{Duration, Instant};

/// The four game inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::TurnLeft, Key::TurnRight, Key::Thrust, Key::Fire];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    down: bool,
    pressed: bool,
    last_seen: Option<Instant>,
}

/// Held / pressed-this-frame flags for every [`Key`]
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    slots: [Slot; 4],
    /// Release fallback when the host never sees key-up events
    grace: Option<Duration>,
}

impl KeyState {
    /// Key state for a host that reports releases
    pub fn new() -> Self {
        Self::default()
    }

    /// Key state for a host that only reports presses and repeats
    pub fn with_grace(grace: Duration) -> Self {
        Self {
            grace: Some(grace),
            ..Self::default()
        }
    }

    /// Key went down (or the host re-sent a press while it is held)
    pub fn press(&mut self, key: Key, now: Instant) {
        let slot = &mut self.slots[key.index()];
        if !slot.down {
            slot.pressed = true;
        }
        slot.down = true;
        slot.last_seen = Some(now);
    }

    /// Auto-repeat while held; never counts as a new press
    pub fn repeat(&mut self, key: Key, now: Instant) {
        let slot = &mut self.slots[key.index()];
        slot.down = true;
        slot.last_seen = Some(now);
    }

    pub fn release(&mut self, key: Key) {
        self.slots[key.index()].down = false;
    }

    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.down = false;
        }
    }

    pub fn held(&self, key: Key) -> bool {
        self.slots[key.index()].down
    }

    /// Went down since the last [`end_frame`](Self::end_frame)
    pub fn pressed(&self, key: Key) -> bool {
        self.slots[key.index()].pressed
    }

    /// Clear edge flags and expire silent keys
    pub fn end_frame(&mut self, now: Instant) {
        for slot in &mut self.slots {
            slot.pressed = false;
            if let (Some(grace), Some(seen)) = (self.grace, slot.last_seen) {
                if slot.down && now.saturating_duration_since(seen) > grace {
                    slot.down = false;
                }
            }
        }
    }
}
