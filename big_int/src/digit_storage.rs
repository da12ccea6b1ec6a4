//! # DigitStorage
//! A value-semantic, resizable sequence of [`Digit`]s, least significant first.
//!
//! Short sequences live inline, in the space a pointer would take. Longer
//! ones live in a reference-counted heap buffer that clones share until one
//! of them writes: every mutable entry point first makes the buffer unique
//! (copy-on-write), so a clone never observes another clone's writes.
//!
//! ```
//! use big_int::DigitStorage;
//!
//! let a = DigitStorage::from_vec(vec![1, 2, 3, 4]);
//! let mut b = a.clone();
//! assert!(a.is_shared());
//!
//! b[0] = 9;
//! assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(b.as_slice(), &[9, 2, 3, 4]);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use tracing::trace;

use crate::big_num_constants::{Digit, INLINE_CAPACITY};

#[derive(Clone)]
enum Repr {
    Inline { len: usize, words: [Digit; INLINE_CAPACITY] },
    Heap(Arc<Vec<Digit>>),
}

#[derive(Clone)]
pub struct DigitStorage {
    repr: Repr,
}

// 实现构造
impl DigitStorage {
    /// An empty inline storage.
    pub const fn new() -> Self {
        DigitStorage { repr: Repr::Inline { len: 0, words: [0; INLINE_CAPACITY] } }
    }

    /// A single inline digit.
    pub const fn from_digit(digit: Digit) -> Self {
        let mut words = [0; INLINE_CAPACITY];
        words[0] = digit;
        DigitStorage { repr: Repr::Inline { len: 1, words } }
    }

    /// Takes ownership of `digits`. Sequences short enough to be inlined are
    /// copied inline and the vector is dropped.
    pub fn from_vec(digits: Vec<Digit>) -> Self {
        if digits.len() <= INLINE_CAPACITY {
            let mut words = [0; INLINE_CAPACITY];
            words[..digits.len()].copy_from_slice(&digits);
            DigitStorage { repr: Repr::Inline { len: digits.len(), words } }
        } else {
            DigitStorage { repr: Repr::Heap(Arc::new(digits)) }
        }
    }

    /// `len` zero digits.
    pub fn zeroed(len: usize) -> Self {
        if len <= INLINE_CAPACITY {
            DigitStorage { repr: Repr::Inline { len, words: [0; INLINE_CAPACITY] } }
        } else {
            DigitStorage { repr: Repr::Heap(Arc::new(vec![0; len])) }
        }
    }
}

impl Default for DigitStorage {
    fn default() -> Self {
        DigitStorage::new()
    }
}

impl From<Vec<Digit>> for DigitStorage {
    fn from(digits: Vec<Digit>) -> Self {
        DigitStorage::from_vec(digits)
    }
}

// 实现读取
impl DigitStorage {
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Heap(buf) => buf.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` while no heap buffer backs this storage.
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// `true` if the heap buffer is currently shared with another storage.
    pub fn is_shared(&self) -> bool {
        match &self.repr {
            Repr::Inline { .. } => false,
            Repr::Heap(buf) => Arc::strong_count(buf) > 1,
        }
    }

    pub fn as_slice(&self) -> &[Digit] {
        match &self.repr {
            Repr::Inline { len, words } => &words[..*len],
            Repr::Heap(buf) => buf.as_slice(),
        }
    }

    pub fn get(&self, index: usize) -> Option<Digit> {
        self.as_slice().get(index).copied()
    }

    /// The most significant digit.
    pub fn last(&self) -> Option<Digit> {
        self.as_slice().last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Digit> {
        self.as_slice().iter()
    }
}

// 实现写入
impl DigitStorage {
    /// Detaches a shared buffer before handing out write access.
    fn unique(buf: &mut Arc<Vec<Digit>>) -> &mut Vec<Digit> {
        if Arc::strong_count(buf) > 1 {
            trace!(len = buf.len(), "copy-on-write clone");
        }
        Arc::make_mut(buf)
    }

    pub fn as_mut_slice(&mut self) -> &mut [Digit] {
        match &mut self.repr {
            Repr::Inline { len, words } => &mut words[..*len],
            Repr::Heap(buf) => DigitStorage::unique(buf).as_mut_slice(),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Digit> {
        self.as_mut_slice().get_mut(index)
    }

    /// Grows the logical length to `new_len`, filling new positions with
    /// `fill`. Never shrinks.
    pub fn increase_size(&mut self, new_len: usize, fill: Digit) {
        let promoted = match &mut self.repr {
            Repr::Inline { len, words } => {
                if new_len <= *len {
                    return;
                }
                if new_len <= INLINE_CAPACITY {
                    words[*len..new_len].fill(fill);
                    *len = new_len;
                    return;
                }
                let mut heap = Vec::with_capacity(new_len);
                heap.extend_from_slice(&words[..*len]);
                heap.resize(new_len, fill);
                heap
            }
            Repr::Heap(buf) => {
                if new_len > buf.len() {
                    DigitStorage::unique(buf).resize(new_len, fill);
                }
                return;
            }
        };
        trace!(len = new_len, "promoting inline digits to the heap");
        self.repr = Repr::Heap(Arc::new(promoted));
    }

    pub fn push(&mut self, digit: Digit) {
        self.increase_size(self.len() + 1, digit);
    }

    pub fn pop(&mut self) -> Option<Digit> {
        match &mut self.repr {
            Repr::Inline { len, words } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(words[*len])
                }
            }
            Repr::Heap(buf) => {
                if buf.is_empty() {
                    None
                } else {
                    DigitStorage::unique(buf).pop()
                }
            }
        }
    }

    /// O(1): only the representations move, never the digits.
    pub fn swap(&mut self, other: &mut DigitStorage) {
        std::mem::swap(&mut self.repr, &mut other.repr);
    }
}

impl Index<usize> for DigitStorage {
    type Output = Digit;

    fn index(&self, index: usize) -> &Digit {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for DigitStorage {
    fn index_mut(&mut self, index: usize) -> &mut Digit {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for DigitStorage {
    fn eq(&self, other: &Self) -> bool {
        if let (Repr::Heap(a), Repr::Heap(b)) = (&self.repr, &other.repr) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
        }
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitStorage {}

impl fmt::Debug for DigitStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a DigitStorage {
    type Item = &'a Digit;
    type IntoIter = std::slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
