use crate::{Removable, Sequence, SequenceError};

/// Sequence over an owned vec whose elements can be removed as they are
/// visited. Elements not removed stay in the collection.
pub struct FromVec<T> {
    items: Vec<T>,
    cursor: usize,
    last_returned: Option<usize>,
}

impl<T> FromVec<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            last_returned: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Sequence for FromVec<T> {
    type Item = T;

    fn has_next(&mut self) -> Result<bool, SequenceError> {
        Ok(self.cursor < self.items.len())
    }

    fn next(&mut self) -> Result<T, SequenceError> {
        let item = self
            .items
            .get(self.cursor)
            .cloned()
            .ok_or(SequenceError::Exhausted)?;

        self.last_returned = Some(self.cursor);
        self.cursor += 1;
        Ok(item)
    }
}

impl<T: Clone> Removable for FromVec<T> {
    fn remove(&mut self) -> Result<(), SequenceError> {
        let index = self.last_returned.take().ok_or_else(|| {
            SequenceError::protocol("no element returned since the last removal")
        })?;

        self.items.remove(index);
        self.cursor = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FromVec;
    use crate::{Removable, Sequence, SequenceTools};

    #[test]
    fn visits_every_item() {
        let mut letters = FromVec::new(vec!['a', 'b', 'c']);

        assert_eq!(letters.collect_vec().unwrap(), vec!['a', 'b', 'c']);
        assert!(!letters.has_next().unwrap());
        assert_eq!(letters.into_items(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn removes_the_last_returned_item() {
        let mut letters = FromVec::new(vec!['a', 'b', 'c']);

        assert_eq!(letters.next().unwrap(), 'a');
        assert_eq!(letters.next().unwrap(), 'b');
        letters.remove().unwrap();

        assert_eq!(letters.next().unwrap(), 'c');
        assert_eq!(letters.into_items(), vec!['a', 'c']);
    }

    #[test]
    fn remove_requires_a_current_element() {
        let mut letters = FromVec::new(vec!['a']);

        assert!(letters.remove().unwrap_err().is_protocol());

        letters.next().unwrap();
        letters.remove().unwrap();
        assert!(letters.remove().unwrap_err().is_protocol());

        assert!(letters.into_items().is_empty());
    }
}
