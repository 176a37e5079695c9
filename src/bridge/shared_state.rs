//! Shared pointer surface for hosts that deliver pointer events themselves
//!
//! A webview frontend (or any other thread) pushes pointer moves into a
//! [`SharedPointerSurface`]; Bevy systems pick up the latest move each frame.
//! Every listening behaviour tracks the generation it last saw, so several
//! behaviours can listen on the same surface without stealing moves from
//! each other.

use std::sync::{Arc, Mutex};

use crate::mapping::PointerPayload;

/// Latest pointer move received by the surface
#[derive(Clone, Debug, Default)]
pub struct PointerSurface {
    /// Most recent pointer-move payload
    pub latest: Option<PointerPayload>,
    /// Incremented on every pointer move
    pub generation: u64,
}

/// Thread-safe pointer surface shared between the host and Bevy
#[derive(Clone, Debug, Default)]
pub struct SharedPointerSurface(pub Arc<Mutex<PointerSurface>>);

impl SharedPointerSurface {
    /// Record a pointer move
    pub fn push_pointer_move(&self, payload: PointerPayload) -> Result<(), String> {
        let mut guard = self.0.lock().map_err(|e| e.to_string())?;
        guard.latest = Some(payload);
        guard.generation = guard.generation.wrapping_add(1);
        Ok(())
    }

    /// Current generation, or 0 if the lock is poisoned
    pub fn generation(&self) -> u64 {
        match self.0.lock() {
            Ok(guard) => guard.generation,
            Err(_) => 0,
        }
    }

    /// Latest move if one arrived after generation `seen`
    pub fn latest_since(&self, seen: u64) -> Option<(u64, PointerPayload)> {
        let guard = self.0.lock().ok()?;
        if guard.generation == seen {
            return None;
        }
        guard.latest.map(|payload| (guard.generation, payload))
    }
}
