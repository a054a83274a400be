//! Keyboard drag gesture over the question list

/// An in-progress drag: where the item was grabbed and where it would land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub source: usize,
    /// `None` once the pointer has left every valid drop target
    pub destination: Option<usize>,
}

impl DragGesture {
    /// Grab the item at `source`; it hovers over its own slot initially
    pub fn grab(source: usize) -> Self {
        Self {
            source,
            destination: Some(source),
        }
    }

    /// Move the prospective destination one slot up
    pub fn move_up(&mut self) {
        let current = self.destination.unwrap_or(self.source);
        self.destination = Some(current.saturating_sub(1));
    }

    /// Move the prospective destination one slot down, staying within `len`
    pub fn move_down(&mut self, len: usize) {
        let current = self.destination.unwrap_or(self.source);
        let last = len.saturating_sub(1);
        self.destination = Some((current + 1).min(last));
    }

    /// Leave all drop targets; dropping now resolves to no destination
    pub fn leave(&mut self) {
        self.destination = None;
    }

    /// Whether the slot at `index` is the current drop target
    pub fn is_target(&self, index: usize) -> bool {
        self.destination == Some(index)
    }
}
