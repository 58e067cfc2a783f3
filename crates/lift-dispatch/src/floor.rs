//! Floor call registry.

use lift_core::FloorId;

use crate::{DispatchError, DispatchResult};

/// One floor's call state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    pub number:       FloorId,
    /// Set when a call is placed, cleared when the serving elevator's dwell
    /// ends.
    pub call_pending: bool,
}

/// Outstanding calls for every floor, indexed by `FloorId`.
///
/// A pending floor swallows further calls until released, so at most one
/// elevator is ever dispatched per outstanding call.
#[derive(Clone, Debug)]
pub struct FloorRegistry {
    floors: Vec<Floor>,
}

impl FloorRegistry {
    /// `num_floors` floors, none pending.
    pub fn new(num_floors: u32) -> Self {
        let floors = (0..num_floors)
            .map(|n| Floor { number: FloorId(n), call_pending: false })
            .collect();
        Self { floors }
    }

    /// `InvalidFloor` unless `floor` exists.
    pub fn check(&self, floor: FloorId) -> DispatchResult<()> {
        if floor.index() < self.floors.len() {
            Ok(())
        } else {
            Err(DispatchError::InvalidFloor {
                floor,
                num_floors: self.floors.len() as u32,
            })
        }
    }

    /// Register a call at `floor`.
    ///
    /// Returns `Ok(true)` when the call was accepted and should be
    /// dispatched, `Ok(false)` when the floor already had a pending call
    /// (the duplicate is ignored).
    pub fn place_call(&mut self, floor: FloorId) -> DispatchResult<bool> {
        self.check(floor)?;
        let state = &mut self.floors[floor.index()];
        if state.call_pending {
            return Ok(false);
        }
        state.call_pending = true;
        Ok(true)
    }

    /// Clear `floor`'s pending call.  Idempotent.
    pub fn release(&mut self, floor: FloorId) -> DispatchResult<()> {
        self.check(floor)?;
        self.floors[floor.index()].call_pending = false;
        Ok(())
    }

    pub fn is_pending(&self, floor: FloorId) -> DispatchResult<bool> {
        self.check(floor)?;
        Ok(self.floors[floor.index()].call_pending)
    }

    pub fn pending_count(&self) -> usize {
        self.floors.iter().filter(|f| f.call_pending).count()
    }

    /// Floors with an outstanding call, in ascending order.
    pub fn pending_floors(&self) -> Vec<FloorId> {
        self.floors
            .iter()
            .filter(|f| f.call_pending)
            .map(|f| f.number)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }
}
