/// Append-only storage addressed by the index returned from [`List::push`].
/// An index stays valid for the list's lifetime.
#[derive(Clone, Debug)]
pub(crate) struct List<T> {
    data: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len());
        &self.data[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.data.len());
        &mut self.data[index]
    }

    pub fn push(&mut self, element: T) -> usize {
        let index = self.data.len();
        self.data.push(element);
        index
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}
