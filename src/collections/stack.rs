use std::{
    fmt::{self, Display},
    fs,
    io::{BufWriter, Read, Write},
    path::Path,
    slice,
    str::FromStr,
};

use tracing::debug;

use super::{min_of, parse_lines, read_lines, write_lines};
use crate::Result;

/// A LIFO stack with a capacity fixed at construction.
///
/// # Examples
///
/// ```rust
/// use multistack::Stack;
///
/// let mut stack = Stack::new(3);
/// stack.push(5)?;
/// stack.push(2)?;
/// stack.push(8)?;
///
/// assert!(stack.is_full());
/// assert_eq!(stack.min()?, 2);
/// assert_eq!(stack.pop()?, 8);
/// assert_eq!(stack.to_string(), "[5, 2]");
/// # Ok::<(), multistack::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack that holds at most `capacity` elements.
    ///
    /// Storage grows with the elements pushed, so any `capacity` is accepted.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Stack {
            values: Vec::new(),
            capacity,
        }
    }

    /// Creates a stack with zero capacity.
    #[must_use]
    pub const fn empty() -> Self {
        Stack {
            values: Vec::new(),
            capacity: 0,
        }
    }

    /// Maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the stack holds `capacity` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionFull`] if the stack is full.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(collection_full!("push", self.capacity));
        }
        self.values.push(value);
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.values.pop().ok_or_else(|| collection_empty!("pop"))
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Transfers the contents out, leaving `self` with zero capacity.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a copy of the top element.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the stack is empty.
    pub fn top(&self) -> Result<T> {
        self.values
            .last()
            .cloned()
            .ok_or_else(|| collection_empty!("top"))
    }

    /// Returns a copy of the element at `index`, counted from the bottom.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidIndex`] if `index` is not below the length.
    pub fn get(&self, index: usize) -> Result<T> {
        self.values
            .get(index)
            .cloned()
            .ok_or_else(|| invalid_index!("get", index, self.values.len()))
    }
}

impl<T: PartialOrd + Clone> Stack<T> {
    /// Returns a copy of the smallest element.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the stack is empty.
    pub fn min(&self) -> Result<T> {
        min_of(&self.values)
            .cloned()
            .ok_or_else(|| collection_empty!("min"))
    }
}

impl<T: Display> Stack<T> {
    /// Writes the element count, then one element per line from bottom to top.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if writing fails.
    pub fn write_text<W: Write>(&self, writer: W) -> Result<()> {
        write_lines(writer, self.values.len(), &self.values)
            .map_err(|error| io_error!("write_text", error))
    }

    /// Writes the text format to the file at `path`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be created or written.
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::File::create(path)
            .and_then(|file| write_lines(BufWriter::new(file), self.values.len(), &self.values))
            .map_err(|error| io_error!("save_text", error))?;
        debug!(path = %path.display(), len = self.len(), "saved stack");
        Ok(())
    }
}

impl<T> Stack<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Reads the text format; the restored stack is exactly full.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if reading fails and
    /// [`crate::Error::Malformed`] if the input does not parse.
    pub fn read_text<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_values(read_lines(reader, "read_text")?))
    }

    /// Reads the text format from the file at `path`.
    ///
    /// # Errors
    /// See [`Stack::read_text`].
    pub fn load_text(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|error| io_error!("load_text", error))?;
        let stack = Self::from_values(read_lines(file, "load_text")?);
        debug!(path = %path.display(), len = stack.len(), "loaded stack");
        Ok(stack)
    }
}

impl<T> Stack<T> {
    fn from_values(values: Vec<T>) -> Self {
        Stack {
            capacity: values.len(),
            values,
        }
    }
}

impl<T> FromStr for Stack<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = crate::Error;

    fn from_str(input: &str) -> Result<Self> {
        Ok(Self::from_values(parse_lines(input)?))
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn unbounded_capacity_allocates_lazily() {
        let mut stack = Stack::<u64>::new(usize::MAX);
        assert_eq!(stack.capacity(), usize::MAX);
        stack.push(7).unwrap();
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_full());
    }

    #[test]
    fn push_until_full() {
        let mut stack = Stack::new(2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();

        match stack.push('c') {
            Err(Error::CollectionFull { capacity, .. }) => assert_eq!(capacity, 2),
            other => panic!("Expected CollectionFull, got {other:?}"),
        }
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().unwrap(), 'b');
    }

    #[test]
    fn empty_reads() {
        let mut stack: Stack<i32> = Stack::new(4);
        assert!(matches!(stack.pop(), Err(Error::CollectionEmpty { .. })));
        assert!(matches!(stack.top(), Err(Error::CollectionEmpty { .. })));
        assert!(matches!(stack.min(), Err(Error::CollectionEmpty { .. })));

        let mut zero: Stack<i32> = Stack::empty();
        assert!(zero.is_full());
        assert!(matches!(zero.push(1), Err(Error::CollectionFull { .. })));
    }

    #[test]
    fn indexed_reads() {
        let stack: Stack<i32> = "3 7 8 9".parse().unwrap();
        assert_eq!(stack.get(0).unwrap(), 7);
        assert_eq!(stack.get(2).unwrap(), 9);
        assert!(matches!(
            stack.get(3),
            Err(Error::InvalidIndex { index: 3, len: 3, .. })
        ));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn equality_and_clone() {
        let mut a = Stack::new(3);
        a.push(1).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.push(2).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 1);

        let mut c = Stack::new(4);
        c.push(1).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn take_empties_source() {
        let mut source: Stack<u8> = "2 1 2".parse().unwrap();
        let moved = source.take();

        assert_eq!(moved.len(), 2);
        assert_eq!(source.capacity(), 0);
        assert!(source.is_empty());
    }

    #[test]
    fn text_round_trip() {
        let mut stack = Stack::new(5);
        for value in [5, 2, 8] {
            stack.push(value).unwrap();
        }

        let mut out = Vec::new();
        stack.write_text(&mut out).unwrap();
        assert_eq!(out, b"3\n5\n2\n8\n");

        let restored = Stack::<i32>::read_text(out.as_slice()).unwrap();
        assert_eq!(restored.capacity(), 3);
        assert!(restored.is_full());
        assert_eq!(restored.to_string(), "[5, 2, 8]");
    }
}
