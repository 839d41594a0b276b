/// Fixed-capacity FIFO. A push into a full queue drops the oldest entry.
pub struct SegmentQueue<T, const N: usize> {
    buffer: [T; N],
    head: usize,
    len: usize,
}

impl<T, const N: usize> Default for SegmentQueue<T, N>
where
    T: Default + Copy,
{
    fn default() -> Self {
        Self {
            buffer: [T::default(); N],
            head: 0,
            len: 0,
        }
    }
}

impl<T, const N: usize> SegmentQueue<T, N>
where
    T: Default + Copy,
{
    /// Appends `value`. Returns `false` if the oldest entry was overwritten.
    pub fn push(&mut self, value: T) -> bool {
        if N == 0 {
            return false;
        }
        let tail = (self.head + self.len) % N;
        self.buffer[tail] = value;
        if self.len < N {
            self.len += 1;
            true
        } else {
            self.head = (self.head + 1) % N;
            false
        }
    }

    /// Removes and returns the oldest entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buffer[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
