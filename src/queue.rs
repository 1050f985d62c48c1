//! Circular bucket queue for small non-negative integer priorities.
//!
//! Items live in a node arena; each of the `2^bits` buckets is a singly linked
//! list of arena indices, so the payload type needs no intrusive link field.
//! An item's bucket is `cost & mask`, where `cost` comes from the caller's
//! cost functor at push/remove time.
//!
//! Ordering holds only while every pushed cost stays within
//! `[last_popped, last_popped + bucket_count - 1]`. Release builds do not
//! check this; debug builds assert it.
use crate::error::LivewireError;

#[derive(Clone, Debug)]
struct Node<T> {
    item: Option<T>,
    next: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct BucketQueue<T> {
    heads: Vec<Option<usize>>,
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    mask: usize,
    loc: usize,
    size: usize,
    #[cfg(debug_assertions)]
    last_popped: usize,
}

impl<T: PartialEq> BucketQueue<T> {
    /// Queue with `2^bits` buckets.
    pub fn new(bits: u32) -> Self {
        let bucket_count = 1usize << bits;
        Self {
            heads: vec![None; bucket_count],
            nodes: Vec::new(),
            free: Vec::new(),
            mask: bucket_count - 1,
            loc: 0,
            size: 0,
            #[cfg(debug_assertions)]
            last_popped: 0,
        }
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Prepend `item` to bucket `cost & mask`.
    pub fn push(&mut self, item: T, cost: usize) {
        #[cfg(debug_assertions)]
        debug_assert!(
            cost >= self.last_popped && cost - self.last_popped < self.bucket_count(),
            "bucket queue window violated: cost {cost}, last popped {}, buckets {}",
            self.last_popped,
            self.bucket_count()
        );
        let bucket = cost & self.mask;
        let node = Node {
            item: Some(item),
            next: self.heads[bucket],
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.heads[bucket] = Some(slot);
        self.size += 1;
    }

    /// Head of the first non-empty bucket at or after the cursor, or `None`.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        while self.heads[self.loc].is_none() {
            self.loc = (self.loc + 1) & self.mask;
        }
        let slot = self.heads[self.loc]?;
        self.heads[self.loc] = self.nodes[slot].next.take();
        self.free.push(slot);
        self.size -= 1;
        #[cfg(debug_assertions)]
        {
            // Advance the absolute cost by however far the cursor moved.
            let moved = self.loc.wrapping_sub(self.last_popped) & self.mask;
            self.last_popped += moved;
        }
        self.nodes[slot].item.take()
    }

    pub fn pop(&mut self) -> Result<T, LivewireError> {
        self.try_pop().ok_or(LivewireError::EmptyQueue)
    }

    /// Unlink the first item equal to `item` from bucket `cost & mask`.
    ///
    /// `cost` must be the value the item was pushed with.
    pub fn remove(&mut self, item: &T, cost: usize) -> bool {
        let bucket = cost & self.mask;
        let mut prev: Option<usize> = None;
        let mut cursor = self.heads[bucket];
        while let Some(slot) = cursor {
            if self.nodes[slot].item.as_ref() == Some(item) {
                let next = self.nodes[slot].next.take();
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.heads[bucket] = next,
                }
                self.nodes[slot].item = None;
                self.free.push(slot);
                self.size -= 1;
                return true;
            }
            prev = cursor;
            cursor = self.nodes[slot].next;
        }
        false
    }

    /// Drop every item and rewind the cursor.
    pub fn clear(&mut self) {
        self.heads.iter_mut().for_each(|h| *h = None);
        self.nodes.clear();
        self.free.clear();
        self.loc = 0;
        self.size = 0;
        #[cfg(debug_assertions)]
        {
            self.last_popped = 0;
        }
    }
}
