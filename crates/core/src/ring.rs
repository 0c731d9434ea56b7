/// Fixed-capacity circular history of CPU utilization samples.
///
/// Capacity tracks the pixel width of the drawing area: one slot per column.
/// Slots start zero-filled, so a freshly created ring renders as a flat
/// baseline that fills in as samples arrive. The cursor marks the slot to be
/// overwritten next — i.e. the oldest sample currently held.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRing {
    samples: Vec<f32>,
    cursor: usize,
}

impl SampleRing {
    /// Create a zero-filled ring with one slot per display column.
    /// `capacity == 0` yields a valid empty ring.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: vec![0.0; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Overwrite the oldest slot with `sample` and advance the cursor.
    /// O(1); never changes capacity. No-op on an empty ring.
    pub fn push(&mut self, sample: f32) {
        if self.samples.is_empty() {
            return;
        }
        self.samples[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % self.samples.len();
    }

    /// The most recently pushed sample, or `0.0` if the ring is empty or
    /// nothing was ever pushed.
    pub fn newest(&self) -> f32 {
        let capacity = self.samples.len();
        if capacity == 0 {
            return 0.0;
        }
        self.samples[(self.cursor + capacity - 1) % capacity]
    }

    /// Iterate all `capacity` slots oldest-first: starting at the cursor and
    /// wrapping around to the slot just before it.
    pub fn iter_chronological(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples[self.cursor..]
            .iter()
            .chain(&self.samples[..self.cursor])
            .copied()
    }

    /// Change capacity to `new_capacity`, preserving the most recent
    /// `min(old, new)` samples in chronological order.
    ///
    /// The buffer is split at the cursor into a recent block `[0, cursor)`
    /// and an older block `[cursor, capacity)`:
    /// - growing keeps both blocks and opens a zero-filled gap between them
    ///   (unknown history older than anything held);
    /// - shrinking drops samples from the old end, starting just past the
    ///   cursor;
    /// - shrinking below the cursor keeps only the newest `new_capacity`
    ///   samples and restarts the cursor at 0.
    pub fn resize(&mut self, new_capacity: usize) {
        let capacity = self.samples.len();
        if new_capacity == capacity {
            return;
        }

        let mut resized = vec![0.0; new_capacity];
        if new_capacity > capacity {
            // Grow: recent block stays at the front, older block moves to
            // the back, the gap reads as zero "oldest" samples.
            resized[..self.cursor].copy_from_slice(&self.samples[..self.cursor]);
            resized[new_capacity - capacity + self.cursor..]
                .copy_from_slice(&self.samples[self.cursor..]);
        } else if self.cursor <= new_capacity {
            // Shrink: discard the oldest samples, which sit immediately
            // after the cursor.
            resized[..self.cursor].copy_from_slice(&self.samples[..self.cursor]);
            resized[self.cursor..]
                .copy_from_slice(&self.samples[capacity - new_capacity + self.cursor..]);
            if self.cursor == new_capacity {
                self.cursor = 0;
            }
        } else {
            // Shrink past the cursor: only the window of the newest
            // `new_capacity` samples survives, laid out oldest-first.
            resized.copy_from_slice(&self.samples[self.cursor - new_capacity..self.cursor]);
            self.cursor = 0;
        }
        self.samples = resized;
    }
}
