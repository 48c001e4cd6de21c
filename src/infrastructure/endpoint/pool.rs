//! Memory pool accounting for the endpoint

use crate::domain::status::StatusCode;
use tracing::trace;

/// Byte-counting pool: an initial block plus fixed-size growth blocks
#[derive(Debug)]
pub struct MemoryPool {
    name: String,
    capacity: usize,
    increment: usize,
    used: usize,
    blocks: usize,
}

impl MemoryPool {
    /// Create a pool; a zero capacity cannot hold anything and is refused
    pub fn create(name: &str, capacity: usize, increment: usize) -> Result<Self, StatusCode> {
        if capacity == 0 {
            return Err(StatusCode::PJ_ENOMEM);
        }

        Ok(Self {
            name: name.to_string(),
            capacity,
            increment,
            used: 0,
            blocks: 1,
        })
    }

    /// Reserve `size` bytes, growing by `increment` blocks as needed
    ///
    /// Any size that cannot be represented after growth fails with
    /// `PJ_ENOMEM`; the pool is left unchanged in that case.
    pub fn alloc(&mut self, size: usize) -> Result<(), StatusCode> {
        let needed = self.used.checked_add(size).ok_or(StatusCode::PJ_ENOMEM)?;
        if needed > self.capacity {
            if self.increment == 0 {
                return Err(StatusCode::PJ_ENOMEM);
            }
            let shortfall = needed - self.capacity;
            let extra_blocks = shortfall.div_ceil(self.increment);
            let capacity = extra_blocks
                .checked_mul(self.increment)
                .and_then(|grown| self.capacity.checked_add(grown))
                .ok_or(StatusCode::PJ_ENOMEM)?;
            let blocks = self
                .blocks
                .checked_add(extra_blocks)
                .ok_or(StatusCode::PJ_ENOMEM)?;

            self.capacity = capacity;
            self.blocks = blocks;
            trace!(pool = %self.name, capacity = self.capacity, blocks = self.blocks, "Pool grew");
        }

        self.used = needed;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn blocks(&self) -> usize {
        self.blocks
    }
}
