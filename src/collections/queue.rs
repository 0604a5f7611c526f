use std::{
    collections::{vec_deque, VecDeque},
    fmt::{self, Display},
    fs,
    io::{BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use super::{min_of, parse_lines, read_lines, write_lines};
use crate::Result;

/// A FIFO queue with a capacity fixed at construction.
///
/// Elements enter at the tail and leave from the head.
///
/// # Examples
///
/// ```rust
/// use multistack::Queue;
///
/// let mut queue = Queue::new(3);
/// queue.push(4)?;
/// queue.push(1)?;
/// queue.push(6)?;
///
/// assert_eq!(queue.head()?, 4);
/// assert_eq!(queue.tail()?, 6);
/// assert_eq!(queue.min()?, 1);
/// assert_eq!(queue.pop()?, 4);
/// assert_eq!(queue.to_string(), "[1, 6]");
/// # Ok::<(), multistack::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Queue<T> {
    values: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    ///
    /// Storage grows with the elements pushed, so any `capacity` is accepted.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Queue {
            values: VecDeque::new(),
            capacity,
        }
    }

    /// Creates a queue with zero capacity.
    #[must_use]
    pub const fn empty() -> Self {
        Queue {
            values: VecDeque::new(),
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

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the queue holds `capacity` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionFull`] if the queue is full.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(collection_full!("push", self.capacity));
        }
        self.values.push_back(value);
        Ok(())
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.values
            .pop_front()
            .ok_or_else(|| collection_empty!("pop"))
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.values.iter()
    }

    /// Transfers the contents out, leaving `self` with zero capacity.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn from_values(values: Vec<T>) -> Self {
        Queue {
            capacity: values.len(),
            values: values.into(),
        }
    }
}

impl<T: Clone> Queue<T> {
    /// Returns a copy of the element that leaves next.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the queue is empty.
    pub fn head(&self) -> Result<T> {
        self.values
            .front()
            .cloned()
            .ok_or_else(|| collection_empty!("head"))
    }

    /// Returns a copy of the most recently pushed element.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the queue is empty.
    pub fn tail(&self) -> Result<T> {
        self.values
            .back()
            .cloned()
            .ok_or_else(|| collection_empty!("tail"))
    }

    /// Returns a copy of the element at `index`, counted from the head.
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

impl<T: PartialOrd + Clone> Queue<T> {
    /// Returns a copy of the smallest element.
    ///
    /// # Errors
    /// Returns [`crate::Error::CollectionEmpty`] if the queue is empty.
    pub fn min(&self) -> Result<T> {
        min_of(&self.values)
            .cloned()
            .ok_or_else(|| collection_empty!("min"))
    }
}

impl<T: Display> Queue<T> {
    /// Writes the element count, then one element per line from head to tail.
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
        debug!(path = %path.display(), len = self.len(), "saved queue");
        Ok(())
    }
}

impl<T> Queue<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Reads the text format; the restored queue is exactly full.
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
    /// See [`Queue::read_text`].
    pub fn load_text(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|error| io_error!("load_text", error))?;
        let queue = Self::from_values(read_lines(file, "load_text")?);
        debug!(path = %path.display(), len = queue.len(), "loaded queue");
        Ok(queue)
    }
}

impl<T> FromStr for Queue<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = crate::Error;

    fn from_str(input: &str) -> Result<Self> {
        Ok(Self::from_values(parse_lines(input)?))
    }
}

impl<T: Display> Display for Queue<T> {
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

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
