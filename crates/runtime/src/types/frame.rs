use crate::{Result, Table, Value};
use std::{array, fmt, mem};

/// The number of value slots in a call frame
///
/// Enough for the largest literal shape ([Arity::MAX_COUNT](crate::Arity))
/// plus scratch room used while conforming between shapes.
pub const FRAME_SLOTS: usize = 16;

/// The fixed-size register window that calls pass values through
///
/// Arguments are placed in slots starting at 0 before a call, and results
/// are read back from the same slots afterwards. Slots not covered by the
/// declared shape hold `Null`.
pub struct Frame {
    slots: [Value; FRAME_SLOTS],
}

impl Frame {
    /// Makes a frame with all slots empty
    pub fn new() -> Self {
        Self {
            slots: array::from_fn(|_| Value::Null),
        }
    }

    /// Returns a reference to the value in slot `index`
    pub fn get(&self, index: usize) -> &Value {
        &self.slots[index]
    }

    /// Places `value` in slot `index`
    pub fn set(&mut self, index: usize, value: Value) {
        self.slots[index] = value;
    }

    /// Takes the value out of slot `index`, leaving `Null` behind
    pub fn take(&mut self, index: usize) -> Value {
        mem::take(&mut self.slots[index])
    }

    /// Resets every slot from `start` onwards to `Null`
    pub fn clear_from(&mut self, start: usize) {
        for slot in &mut self.slots[start..] {
            *slot = Value::Null;
        }
    }

    /// Resets the whole frame to `Null`
    pub fn clear(&mut self) {
        self.clear_from(0);
    }

    /// Takes the row table out of slot 0
    ///
    /// Used when a call's shape is [Arity::Row](crate::Arity): the frame
    /// carries a single table holding the values.
    pub fn take_row(&mut self) -> Result<Table> {
        self.take(0).into_table()
    }

    /// Places a row table in slot 0
    pub fn set_row(&mut self, row: Table) {
        self.set(0, row.into());
    }

    /// Places `values` in consecutive slots starting at 0
    pub fn set_slots(&mut self, values: impl IntoIterator<Item = Value>) {
        for (index, value) in values.into_iter().enumerate() {
            self.set(index, value);
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self
            .slots
            .iter()
            .rposition(|slot| !slot.is_null())
            .map_or(0, |last| last + 1);
        f.debug_list().entries(&self.slots[..occupied]).finish()
    }
}
