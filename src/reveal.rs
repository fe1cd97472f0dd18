/// Candidates that each fire at most once.
///
/// Slots are emptied on first fire, so later visibility changes for the
/// same index are ignored.
#[derive(Debug)]
pub struct OneShot<T> {
    slots: Vec<Option<T>>,
}

impl<T> OneShot<T> {
    pub fn arm(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            slots: items.into_iter().map(Some).collect(),
        }
    }

    pub fn fire(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// First armed slot whose item satisfies `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut pred))
    }

    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_spent(&self) -> bool {
        self.pending() == 0
    }
}
