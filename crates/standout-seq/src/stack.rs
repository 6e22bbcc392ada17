//! A last-in, first-out container.
//!
//! [`Stack`] is what [`Sequence::to_stack`](crate::Sequence::to_stack)
//! produces and what [`drain_stack`](crate::drain_stack) consumes.

/// A LIFO stack backed by a vector; the end of the vector is the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Pushes an element on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// The last element of the vector becomes the top of the stack.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_peek() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn from_vec_top_is_last() {
        let mut stack: Stack<&str> = vec!["bottom", "top"].into();
        assert_eq!(stack.peek(), Some(&"top"));
        stack.extend(["above"]);
        assert_eq!(stack.into_vec(), vec!["bottom", "top", "above"]);
    }
}
