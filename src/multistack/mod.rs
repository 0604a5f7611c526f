//! Fixed-capacity buffer partitioned into independent LIFO regions.
//!
//! A [`MultiStack`] owns one contiguous slot buffer that is split at construction time
//! into `k` equally sized regions. Every region behaves as its own stack. When a push
//! targets a region that has no free slot left, the structure shifts region boundaries
//! so the target gains one slot from the nearest region that still has room (see
//! [`MultiStack::push`]). Only when every region is full at the same time does a push
//! fail.
//!
//! # Layout
//!
//! ```text
//!  starts[0]        starts[1]            starts[2]
//!  |                |                    |
//!  [ a  b  c  .  .  f  g  .  .  .  .  .  j  .  .  ]
//!            |            |                 |
//!            tops[0]      tops[1]           tops[2]
//! ```
//!
//! Region `i` owns the slots `starts[i]..starts[i + 1]` (the last region runs to the
//! capacity) and holds `tops[i] - starts[i]` elements. Slots between a region's top and
//! the next region's start are its free room.
//!
//! # Key Components
//!
//! - Region operations: [`MultiStack::push`], [`MultiStack::pop`], [`MultiStack::top`],
//!   [`MultiStack::get`], [`MultiStack::size`], [`MultiStack::is_empty`],
//!   [`MultiStack::is_full`]
//! - Aggregates: [`MultiStack::find_min`], structural [`PartialEq`],
//!   [`MultiStack::content_eq`], [`Clone`], [`MultiStack::take`]
//! - Binary snapshots: [`MultiStack::to_bytes`], [`MultiStack::save`],
//!   [`MultiStack::from_bytes`], [`MultiStack::open`], [`MultiStack::load`]
//! - Text: [`std::fmt::Display`] rendering, [`MultiStack::parse_text`],
//!   [`MultiStack::write_text`]
//!
//! # Examples
//!
//! ```rust
//! use multistack::MultiStack;
//!
//! let mut stacks: MultiStack<i32> = MultiStack::new(2, 2);
//! stacks.push(1, 2)?;
//! stacks.push(0, 4)?;
//! stacks.push(0, 7)?;
//!
//! // Region 0 is full, its third element borrows a slot from region 1
//! stacks.push(0, 3)?;
//! assert_eq!(stacks.to_string(), "{[4,7,3],[2]}\n");
//!
//! assert_eq!(stacks.pop(0)?, 3);
//! assert_eq!(stacks.find_min()?, 2);
//! # Ok::<(), multistack::Error>(())
//! ```

mod repack;
mod snapshot;
mod text;

use std::slice;

use tracing::trace;

use crate::Result;

/// A fixed-capacity slot buffer shared by `k` logical stacks.
///
/// See the [module documentation](crate::multistack) for the layout. All fallible
/// operations validate their region index first and leave the structure untouched when
/// they fail.
#[derive(Debug, Clone)]
pub struct MultiStack<T> {
    /// Backing storage, every slot including the unused ones
    slots: Vec<T>,
    /// Lowest slot index of each region
    starts: Vec<usize>,
    /// One past the highest occupied slot of each region
    tops: Vec<usize>,
}

impl<T> Default for MultiStack<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Default + Clone> MultiStack<T> {
    /// Creates `region_count` empty regions of `region_size` slots each.
    ///
    /// The total capacity is `region_count * region_size` and every slot is initialised
    /// with `T::default()`. If either argument is zero the result is the empty structure
    /// returned by [`MultiStack::empty`].
    ///
    /// # Panics
    /// Panics if `region_count * region_size` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let stacks: MultiStack<char> = MultiStack::new(3, 3);
    /// assert_eq!(stacks.capacity(), 9);
    /// assert_eq!(stacks.region_starts(), &[0, 3, 6]);
    /// assert_eq!(stacks.region_tops(), &[0, 3, 6]);
    /// ```
    #[must_use]
    pub fn new(region_count: usize, region_size: usize) -> Self {
        if region_count == 0 || region_size == 0 {
            return Self::empty();
        }

        let Some(capacity) = region_count.checked_mul(region_size) else {
            panic!("MultiStack capacity overflow: {region_count} regions of {region_size} slots");
        };

        let starts: Vec<usize> = (0..region_count).map(|region| region * region_size).collect();
        MultiStack {
            slots: vec![T::default(); capacity],
            tops: starts.clone(),
            starts,
        }
    }

    /// Fallible counterpart of [`MultiStack::new`] for shapes that come from input.
    ///
    /// Storage is reserved before any slot is written, so a shape the allocator cannot
    /// satisfy is reported instead of aborting the process.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if `region_count * region_size` overflows
    /// `usize` or the slots and boundary arrays cannot be allocated.
    pub fn try_new(region_count: usize, region_size: usize) -> Result<Self> {
        if region_count == 0 || region_size == 0 {
            return Ok(Self::empty());
        }

        let capacity = region_count.checked_mul(region_size).ok_or_else(|| {
            malformed_error!("Shape {} x {} overflows", region_count, region_size)
        })?;

        let mut slots = Vec::new();
        let mut starts = Vec::new();
        let mut tops = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .and_then(|()| starts.try_reserve_exact(region_count))
            .and_then(|()| tops.try_reserve_exact(region_count))
            .map_err(|error| {
                malformed_error!("Cannot allocate {} slots in {} regions: {}", capacity, region_count, error)
            })?;

        slots.resize(capacity, T::default());
        starts.extend((0..region_count).map(|region| region * region_size));
        tops.extend_from_slice(&starts);
        Ok(MultiStack { slots, starts, tops })
    }
}

impl<T> MultiStack<T> {
    /// Creates the empty structure: no regions, no storage.
    #[must_use]
    pub const fn empty() -> Self {
        MultiStack {
            slots: Vec::new(),
            starts: Vec::new(),
            tops: Vec::new(),
        }
    }

    /// Assembles a structure from raw parts without validation.
    pub(crate) fn from_parts(slots: Vec<T>, starts: Vec<usize>, tops: Vec<usize>) -> Self {
        MultiStack { slots, starts, tops }
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns `true` for the empty structure (no regions and no storage).
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.slots.is_empty() && self.starts.is_empty()
    }

    /// Lowest slot index of every region.
    #[must_use]
    pub fn region_starts(&self) -> &[usize] {
        &self.starts
    }

    /// One past the highest occupied slot of every region.
    #[must_use]
    pub fn region_tops(&self) -> &[usize] {
        &self.tops
    }

    /// Number of elements held across all regions.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.starts
            .iter()
            .zip(&self.tops)
            .map(|(start, top)| top - start)
            .sum()
    }

    /// Rejects region indices that are not below the region count.
    fn check_region(&self, operation: &'static str, region: usize) -> Result<()> {
        if region >= self.region_count() {
            return Err(invalid_region!(operation, region, self.region_count()));
        }
        Ok(())
    }

    /// First slot index past the room of `region`.
    fn limit(&self, region: usize) -> usize {
        if region + 1 < self.region_count() {
            self.starts[region + 1]
        } else {
            self.capacity()
        }
    }

    fn full_unchecked(&self, region: usize) -> bool {
        self.tops[region] == self.limit(region)
    }

    fn occupied(&self, region: usize) -> &[T] {
        &self.slots[self.starts[region]..self.tops[region]]
    }

    /// Number of elements in `region`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range.
    pub fn size(&self, region: usize) -> Result<usize> {
        self.check_region("size", region)?;
        Ok(self.tops[region] - self.starts[region])
    }

    /// Returns `true` if `region` holds no elements.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range.
    pub fn is_empty(&self, region: usize) -> Result<bool> {
        self.check_region("is_empty", region)?;
        Ok(self.tops[region] == self.starts[region])
    }

    /// Returns `true` if `region` has no free slot of its own.
    ///
    /// A full region can still accept pushes as long as another region has room.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range.
    pub fn is_full(&self, region: usize) -> Result<bool> {
        self.check_region("is_full", region)?;
        Ok(self.full_unchecked(region))
    }

    /// Iterates the elements of `region` from bottom to top.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range.
    pub fn iter_region(&self, region: usize) -> Result<slice::Iter<'_, T>> {
        self.check_region("iter_region", region)?;
        Ok(self.occupied(region).iter())
    }

    /// Pushes `value` on top of `region`.
    ///
    /// If the region is full, the boundaries are repacked first: the first region (by
    /// index) that still has a free slot gives one up, and every region between the two
    /// shifts by one slot toward it. Element order inside every region is preserved.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range and
    /// [`crate::Error::StructureSaturated`] if every region is full. The structure is
    /// unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let mut stacks: MultiStack<char> = MultiStack::new(3, 3);
    /// for letter in ['a', 'b', 'c'] {
    ///     stacks.push(0, letter)?;
    /// }
    /// for letter in ['f', 'g', 'h'] {
    ///     stacks.push(1, letter)?;
    /// }
    /// stacks.push(2, 'j')?;
    /// stacks.push(1, 'k')?;
    ///
    /// assert_eq!(stacks.to_string(), "{[a,b,c],[f,g,h,k],[j]}\n");
    /// # Ok::<(), multistack::Error>(())
    /// ```
    pub fn push(&mut self, region: usize, value: T) -> Result<()> {
        self.check_region("push", region)?;
        if self.full_unchecked(region) {
            self.repack(region)?;
        }

        let top = self.tops[region];
        self.slots[top] = value;
        self.tops[region] = top + 1;
        trace!(region, top, "push");
        Ok(())
    }

    /// Transfers the contents out, leaving `self` as the empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let mut source: MultiStack<u8> = MultiStack::new(2, 4);
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.capacity(), 8);
    /// assert!(source.is_null());
    /// assert_eq!(source.capacity(), 0);
    /// assert_eq!(source.region_count(), 0);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Verifies the region invariants.
    ///
    /// - Boundary arrays have one entry per region
    /// - A structure without regions has no storage
    /// - The first region starts at slot 0
    /// - No region's top is below its start
    /// - No region's top passes the next region's start, the last one not the capacity
    ///
    /// Structures built through the public API always pass; the check exists for
    /// restored snapshots.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] describing the first violation.
    pub fn check_invariants(&self) -> Result<()> {
        if self.starts.len() != self.tops.len() {
            return Err(malformed_error!(
                "Boundary arrays differ in length - {} starts, {} tops",
                self.starts.len(),
                self.tops.len()
            ));
        }

        let Some(&first) = self.starts.first() else {
            if self.slots.is_empty() {
                return Ok(());
            }
            return Err(malformed_error!(
                "{} slots without any region",
                self.slots.len()
            ));
        };

        if first != 0 {
            return Err(malformed_error!("Region 0 starts at slot {}", first));
        }

        for region in 0..self.region_count() {
            let (start, top, limit) = (self.starts[region], self.tops[region], self.limit(region));
            if top < start {
                return Err(malformed_error!(
                    "Region {} has top {} below its start {}",
                    region,
                    top,
                    start
                ));
            }
            if top > limit {
                return Err(malformed_error!(
                    "Region {} has top {} past its limit {}",
                    region,
                    top,
                    limit
                ));
            }
        }

        Ok(())
    }
}

impl<T: Clone> MultiStack<T> {
    /// Returns a copy of the element at logical position `pos` of `region` (0 = bottom).
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range and
    /// [`crate::Error::InvalidOffset`] if `pos` is not below the region's size.
    pub fn get(&self, region: usize, pos: usize) -> Result<T> {
        self.check_region("get", region)?;
        let size = self.tops[region] - self.starts[region];
        if pos >= size {
            return Err(invalid_offset!("get", region, pos, size));
        }
        Ok(self.slots[self.starts[region] + pos].clone())
    }

    /// Returns a copy of the top element of `region`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range and
    /// [`crate::Error::EmptyRegion`] if it holds no elements.
    pub fn top(&self, region: usize) -> Result<T> {
        self.check_region("top", region)?;
        if self.tops[region] == self.starts[region] {
            return Err(empty_region!("top", region));
        }
        Ok(self.slots[self.tops[region] - 1].clone())
    }

    /// Removes and returns the top element of `region`.
    ///
    /// Popping never repacks; the freed slot stays with the region.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidRegion`] if `region` is out of range and
    /// [`crate::Error::EmptyRegion`] if it holds no elements.
    pub fn pop(&mut self, region: usize) -> Result<T> {
        self.check_region("pop", region)?;
        if self.tops[region] == self.starts[region] {
            return Err(empty_region!("pop", region));
        }

        let top = self.tops[region] - 1;
        self.tops[region] = top;
        trace!(region, top, "pop");
        Ok(self.slots[top].clone())
    }
}

impl<T: PartialOrd + Clone> MultiStack<T> {
    /// Returns a copy of the smallest element held in any region.
    ///
    /// # Errors
    /// Returns [`crate::Error::StructureEmpty`] if no region holds an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let mut stacks: MultiStack<i32> = MultiStack::new(2, 3);
    /// for value in [5, 2, 8] {
    ///     stacks.push(0, value)?;
    /// }
    /// for value in [1, 4] {
    ///     stacks.push(1, value)?;
    /// }
    /// assert_eq!(stacks.find_min()?, 1);
    /// # Ok::<(), multistack::Error>(())
    /// ```
    pub fn find_min(&self) -> Result<T> {
        let mut min: Option<&T> = None;
        for region in 0..self.region_count() {
            for value in self.occupied(region) {
                if min.map_or(true, |current| value < current) {
                    min = Some(value);
                }
            }
        }

        min.cloned().ok_or_else(|| structure_empty!("find_min"))
    }
}

impl<T: PartialEq> MultiStack<T> {
    /// Compares region contents, ignoring where in the buffer each region sits.
    ///
    /// Two structures are content-equal when they have the same number of regions and
    /// each region holds the same elements in the same order. Capacity and boundary
    /// positions are not compared, unlike `==`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multistack::MultiStack;
    ///
    /// let mut repacked: MultiStack<u8> = MultiStack::new(2, 1);
    /// repacked.push(0, 1)?;
    /// repacked.push(0, 2)?;
    ///
    /// let mut roomy: MultiStack<u8> = MultiStack::new(2, 2);
    /// roomy.push(0, 1)?;
    /// roomy.push(0, 2)?;
    ///
    /// assert!(repacked != roomy);
    /// assert!(repacked.content_eq(&roomy));
    /// # Ok::<(), multistack::Error>(())
    /// ```
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.region_count() == other.region_count()
            && (0..self.region_count()).all(|region| self.occupied(region) == other.occupied(region))
    }
}

/// Structural equality: capacity, region count, both boundary arrays and every occupied
/// slot must match position for position. Unused slots are not compared.
impl<T: PartialEq> PartialEq for MultiStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.starts == other.starts
            && self.tops == other.tops
            && (0..self.region_count()).all(|region| self.occupied(region) == other.occupied(region))
    }
}
