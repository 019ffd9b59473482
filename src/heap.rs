use crate::Platter;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The machine's memory store: a collection of variable-length platter
/// arrays indexed by stable identifiers.
///
/// Slot 0 always owns the executing program and is never vacant. Every
/// other slot is created by [`allocate`] and released by [`abandon`];
/// identifiers of abandoned slots are handed out again by later
/// allocations, lowest index first, which keeps the live identifier
/// space compact and deterministic.
///
/// [`allocate`]: ./struct.PlatterHeap.html#method.allocate
/// [`abandon`]: ./struct.PlatterHeap.html#method.abandon
pub struct PlatterHeap {
    slots: Vec<Option<Vec<Platter>>>,
    vacant: BinaryHeap<Reverse<Platter>>,
}

impl PlatterHeap {
    /// Constructs a heap whose slot 0 owns `array_zero`.
    ///
    /// # Examples
    /// ```
    /// use um::PlatterHeap;
    ///
    /// let heap = PlatterHeap::new(vec![7, 8, 9]);
    /// assert_eq!(heap.read(0, 2), Ok(9));
    /// ```
    pub fn new(array_zero: Vec<Platter>) -> PlatterHeap {
        PlatterHeap {
            slots: vec![Some(array_zero)],
            vacant: BinaryHeap::new(),
        }
    }

    /// Returns the number of slots, vacant ones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn array(&self, id: Platter) -> Result<&Vec<Platter>, ()> {
        self.slots
            .get(id as usize)
            .and_then(|slot| slot.as_ref())
            .ok_or(())
    }

    fn array_mut(&mut self, id: Platter) -> Result<&mut Vec<Platter>, ()> {
        self.slots
            .get_mut(id as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(())
    }

    /// Allocates an array of `size` zero platters and returns its slot
    /// identifier.
    ///
    /// The lowest-index vacant slot is reused; a new slot is appended
    /// only when none is vacant.
    ///
    /// # Examples
    /// ```
    /// use um::PlatterHeap;
    ///
    /// let mut heap = PlatterHeap::new(vec![0; 2]);
    /// assert_eq!(heap.allocate(4), 1);
    /// assert_eq!(heap.allocate(4), 2);
    ///
    /// heap.abandon(1).unwrap();
    /// assert_eq!(heap.allocate(8), 1);
    /// ```
    pub fn allocate(&mut self, size: Platter) -> Platter {
        let array = vec![0; size as usize];

        match self.vacant.pop() {
            Some(Reverse(id)) => {
                self.slots[id as usize] = Some(array);
                id
            }
            None => {
                self.slots.push(Some(array));
                (self.slots.len() - 1) as Platter
            }
        }
    }

    /// Marks the slot vacant and frees its array.
    ///
    /// # Errors
    /// Returns an error if `id` is 0 or the slot is not currently
    /// allocated.
    ///
    /// # Examples
    /// ```
    /// use um::PlatterHeap;
    ///
    /// let mut heap = PlatterHeap::new(vec![0; 2]);
    /// let id = heap.allocate(4);
    ///
    /// assert_eq!(heap.abandon(id), Ok(()));
    /// assert_eq!(heap.abandon(id), Err(()));
    /// assert_eq!(heap.abandon(0), Err(()));
    /// ```
    pub fn abandon(&mut self, id: Platter) -> Result<(), ()> {
        if id == 0 {
            return Err(());
        }

        let slot = self.slots.get_mut(id as usize).ok_or(())?;

        if slot.is_none() {
            return Err(());
        }

        *slot = None;
        self.vacant.push(Reverse(id));
        Ok(())
    }

    /// Reads the platter at `offset` of array `id`.
    ///
    /// # Errors
    /// Returns an error if the slot is vacant or `offset` is past the
    /// end of the array.
    pub fn read(&self, id: Platter, offset: Platter) -> Result<Platter, ()> {
        self.array(id)?.get(offset as usize).copied().ok_or(())
    }

    /// Writes `value` to `offset` of array `id`.
    ///
    /// # Errors
    /// Returns an error if the slot is vacant or `offset` is past the
    /// end of the array.
    pub fn write(&mut self, id: Platter, offset: Platter, value: Platter) -> Result<(), ()> {
        let cell = self.array_mut(id)?.get_mut(offset as usize).ok_or(())?;
        *cell = value;
        Ok(())
    }

    /// Replaces slot 0's array with a copy of array `id`. The source
    /// slot stays allocated and unchanged; `id == 0` is a no-op.
    ///
    /// # Errors
    /// Returns an error if the slot is vacant.
    ///
    /// # Examples
    /// ```
    /// use um::PlatterHeap;
    ///
    /// let mut heap = PlatterHeap::new(vec![0; 1]);
    /// let id = heap.allocate(2);
    /// heap.write(id, 0, 42).unwrap();
    ///
    /// heap.switch_program(id).unwrap();
    /// assert_eq!(heap.read(0, 0), Ok(42));
    ///
    /// // The copy is independent of the source array.
    /// heap.write(id, 0, 7).unwrap();
    /// assert_eq!(heap.read(0, 0), Ok(42));
    /// ```
    pub fn switch_program(&mut self, id: Platter) -> Result<(), ()> {
        if id == 0 {
            return Ok(());
        }

        let copy = self.array(id)?.clone();
        self.slots[0] = Some(copy);
        Ok(())
    }
}
