//! Boundary repacking for full regions.
//!
//! A push into a full region takes one free slot from the first region (lowest index)
//! that has room. Every region between the donor and the target moves by one slot toward
//! the donor, which is a single slice rotation over the occupied span plus a shift of
//! the affected boundary entries.

use tracing::debug;

use super::MultiStack;
use crate::Result;

impl<T> MultiStack<T> {
    /// Gives the full region `target` one free slot at its top.
    ///
    /// # Errors
    /// Returns [`crate::Error::StructureSaturated`] if no region has a free slot. Nothing
    /// is moved in that case.
    pub(super) fn repack(&mut self, target: usize) -> Result<()> {
        let Some(donor) = (0..self.region_count()).find(|&region| !self.full_unchecked(region))
        else {
            return Err(saturated_error!("push", target, self.capacity()));
        };

        // A full target never qualifies as its own donor
        let moved = if donor < target {
            self.shift_toward_lower(donor, target)
        } else {
            self.shift_toward_upper(donor, target)
        };

        debug!(target, donor, moved, "repacked region boundaries");
        Ok(())
    }

    /// Moves regions `donor + 1..=target` one slot down into the donor's last free slot.
    ///
    /// Returns the number of occupied slots that changed position.
    fn shift_toward_lower(&mut self, donor: usize, target: usize) -> usize {
        // The donor has room, so the slot below region donor + 1 is free
        let free = self.starts[donor + 1] - 1;
        let end = self.tops[target];

        self.slots[free..end].rotate_left(1);
        for region in donor + 1..=target {
            self.starts[region] -= 1;
            self.tops[region] -= 1;
        }

        end - free - 1
    }

    /// Moves regions `target + 1..=donor` one slot up into the donor's first free slot.
    ///
    /// Returns the number of occupied slots that changed position.
    fn shift_toward_upper(&mut self, donor: usize, target: usize) -> usize {
        let begin = self.starts[target + 1];
        let free = self.tops[donor];

        self.slots[begin..=free].rotate_right(1);
        for region in target + 1..=donor {
            self.starts[region] += 1;
            self.tops[region] += 1;
        }

        free - begin
    }
}
