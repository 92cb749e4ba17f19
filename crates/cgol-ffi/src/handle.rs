//! Engines owned across the C boundary, addressed by opaque `u64` handles.
//!
//! A handle packs the slot an engine lives in with the slot's generation
//! when the engine was stored. Destroying an engine bumps that
//! generation, so every copy of the old handle stops resolving.

/// Decoded form of a C-side handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Handle {
    slot: u32,
    generation: u32,
}

impl Handle {
    fn to_raw(self) -> u64 {
        (u64::from(self.slot) << 32) | u64::from(self.generation)
    }

    fn from_raw(raw: u64) -> Self {
        Self {
            slot: (raw >> 32) as u32,
            generation: raw as u32,
        }
    }
}

enum Entry<T> {
    Occupied { generation: u32, value: T },
    Vacant,
    /// Generation space exhausted; never reused.
    Retired,
}

/// Slot table whose free list holds the next handle for each vacant slot.
pub(crate) struct HandleTable<T> {
    entries: Vec<Entry<T>>,
    vacant: Vec<Handle>,
}

impl<T> HandleTable<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> u64 {
        let handle = match self.vacant.pop() {
            Some(handle) => {
                self.entries[handle.slot as usize] = Entry::Occupied {
                    generation: handle.generation,
                    value,
                };
                handle
            }
            None => {
                let slot = self.entries.len() as u32;
                self.entries.push(Entry::Occupied {
                    generation: 0,
                    value,
                });
                Handle { slot, generation: 0 }
            }
        };
        handle.to_raw()
    }

    pub fn get(&self, raw: u64) -> Option<&T> {
        let handle = Handle::from_raw(raw);
        match self.entries.get(handle.slot as usize)? {
            Entry::Occupied { generation, value } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Take the value out; `raw` and all its copies go stale.
    pub fn remove(&mut self, raw: u64) -> Option<T> {
        let handle = Handle::from_raw(raw);
        let entry = self.entries.get_mut(handle.slot as usize)?;
        let live = matches!(
            &*entry,
            Entry::Occupied { generation, .. } if *generation == handle.generation
        );
        if !live {
            return None;
        }
        let next = match handle.generation.checked_add(1) {
            Some(generation) => {
                self.vacant.push(Handle {
                    slot: handle.slot,
                    generation,
                });
                Entry::Vacant
            }
            None => Entry::Retired,
        };
        match std::mem::replace(entry, next) {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant | Entry::Retired => None,
        }
    }
}
