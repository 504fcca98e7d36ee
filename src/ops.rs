//! Binary set operations: union, intersection and difference, each in a
//! destructive in-place form and a destination-recycling three-operand form.
//!
//! Every operation advances cursors over two block lists in ascending offset
//! order, classifying each position as left-only, right-only or both, and
//! combines matching blocks a word at a time. A running OR of the result
//! words decides whether a destination block came out empty; such blocks are
//! left in place to be overwritten by a later match and trimmed at the end.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};
use std::ptr;

use crate::block::{Word, HEAD, WORDS_PER_BLOCK};
use crate::set::SparseSet;

impl SparseSet {
    /// Set `self` to the intersection `self ∩ other`.
    pub fn intersect_with(&mut self, other: &SparseSet) {
        self.init();
        let mut ob = other.first();
        let mut sb = self.first();
        while ob != HEAD && sb != HEAD {
            let ooff = other.blk(ob).offset;
            let soff = self.blk(sb).offset;
            if ooff < soff {
                ob = other.blk(ob).next;
            } else if ooff > soff {
                // Present only here: drop it.
                let stale = sb;
                sb = self.blk(sb).next;
                self.unlink(stale);
            } else {
                let obits = other.blk(ob).bits;
                let mut sum: Word = 0;
                let dst = self.blk_mut(sb);
                for i in 0..WORDS_PER_BLOCK {
                    let r = obits[i] & dst.bits[i];
                    dst.bits[i] = r;
                    sum |= r;
                }
                if sum != 0 {
                    sb = self.blk(sb).next;
                }
                // An emptied block stays put; the next mismatch or the tail
                // trim unlinks it.
                ob = other.blk(ob).next;
            }
        }
        self.discard_tail(sb);
    }

    /// Set `self` to the intersection `x ∩ y`.
    ///
    /// Existing destination blocks are overwritten in place; the tail is
    /// trimmed or extended as needed. Passing the same set as both operands
    /// degenerates to [`copy_from`](SparseSet::copy_from).
    pub fn intersection(&mut self, x: &SparseSet, y: &SparseSet) {
        if ptr::eq(x, y) {
            self.copy_from(x);
            return;
        }
        self.init();
        let mut xb = x.first();
        let mut yb = y.first();
        let mut sb = self.first();
        while xb != HEAD && yb != HEAD {
            let xoff = x.blk(xb).offset;
            let yoff = y.blk(yb).offset;
            if xoff < yoff {
                xb = x.blk(xb).next;
                continue;
            }
            if xoff > yoff {
                yb = y.blk(yb).next;
                continue;
            }

            if sb == HEAD {
                sb = self.insert_block_before(sb);
            }
            let xbits = x.blk(xb).bits;
            let ybits = y.blk(yb).bits;
            let mut sum: Word = 0;
            let dst = self.blk_mut(sb);
            dst.offset = xoff;
            for i in 0..WORDS_PER_BLOCK {
                let r = xbits[i] & ybits[i];
                dst.bits[i] = r;
                sum |= r;
            }
            if sum != 0 {
                sb = self.blk(sb).next;
            }
            // An emptied block stays put to be overwritten by a later match.

            xb = x.blk(xb).next;
            yb = y.blk(yb).next;
        }
        self.discard_tail(sb);
    }

    /// Set `self` to the union `self ∪ other`, reporting whether `self` grew.
    pub fn union_with(&mut self, other: &SparseSet) -> bool {
        self.init();
        let mut changed = false;
        let mut ob = other.first();
        let mut sb = self.first();
        while ob != HEAD {
            let (ooff, obits) = {
                let b = other.blk(ob);
                (b.offset, b.bits)
            };
            if sb != HEAD && self.blk(sb).offset == ooff {
                let dst = self.blk_mut(sb);
                for i in 0..WORDS_PER_BLOCK {
                    if dst.bits[i] != obits[i] {
                        dst.bits[i] |= obits[i];
                        changed = true;
                    }
                }
                ob = other.blk(ob).next;
            } else if sb == HEAD || self.blk(sb).offset > ooff {
                // Missing here: splice in a copy of the other's block.
                sb = self.insert_block_before(sb);
                let dst = self.blk_mut(sb);
                dst.offset = ooff;
                dst.bits = obits;
                changed = true;
                ob = other.blk(ob).next;
            }
            sb = self.blk(sb).next;
        }
        changed
    }

    /// Set `self` to the union `x ∪ y`.
    pub fn union(&mut self, x: &SparseSet, y: &SparseSet) {
        if ptr::eq(x, y) {
            self.copy_from(x);
            return;
        }
        self.init();
        let mut xb = x.first();
        let mut yb = y.first();
        let mut sb = self.first();
        while xb != HEAD || yb != HEAD {
            if sb == HEAD {
                sb = self.insert_block_before(sb);
            }
            if yb == HEAD || (xb != HEAD && x.blk(xb).offset < y.blk(yb).offset) {
                let (off, bits) = {
                    let b = x.blk(xb);
                    (b.offset, b.bits)
                };
                let dst = self.blk_mut(sb);
                dst.offset = off;
                dst.bits = bits;
                xb = x.blk(xb).next;
            } else if xb == HEAD || (yb != HEAD && y.blk(yb).offset < x.blk(xb).offset) {
                let (off, bits) = {
                    let b = y.blk(yb);
                    (b.offset, b.bits)
                };
                let dst = self.blk_mut(sb);
                dst.offset = off;
                dst.bits = bits;
                yb = y.blk(yb).next;
            } else {
                let (xoff, xbits) = {
                    let b = x.blk(xb);
                    (b.offset, b.bits)
                };
                let ybits = y.blk(yb).bits;
                let dst = self.blk_mut(sb);
                dst.offset = xoff;
                for i in 0..WORDS_PER_BLOCK {
                    dst.bits[i] = xbits[i] | ybits[i];
                }
                xb = x.blk(xb).next;
                yb = y.blk(yb).next;
            }
            sb = self.blk(sb).next;
        }
        self.discard_tail(sb);
    }

    /// Set `self` to the difference `self ∖ other`.
    pub fn difference_with(&mut self, other: &SparseSet) {
        self.init();
        let mut ob = other.first();
        let mut sb = self.first();
        while ob != HEAD && sb != HEAD {
            let ooff = other.blk(ob).offset;
            let soff = self.blk(sb).offset;
            if ooff > soff {
                sb = self.blk(sb).next;
            } else if ooff < soff {
                ob = other.blk(ob).next;
            } else {
                let obits = other.blk(ob).bits;
                let mut sum: Word = 0;
                let dst = self.blk_mut(sb);
                for i in 0..WORDS_PER_BLOCK {
                    let r = dst.bits[i] & !obits[i];
                    dst.bits[i] = r;
                    sum |= r;
                }
                let stale = sb;
                sb = self.blk(sb).next;
                ob = other.blk(ob).next;
                if sum == 0 {
                    self.unlink(stale);
                }
            }
        }
    }

    /// Set `self` to the difference `x ∖ y`.
    ///
    /// Passing the same set as both operands clears `self`.
    pub fn difference(&mut self, x: &SparseSet, y: &SparseSet) {
        if ptr::eq(x, y) {
            self.clear();
            return;
        }
        self.init();
        let mut xb = x.first();
        let mut yb = y.first();
        let mut sb = self.first();
        while xb != HEAD && yb != HEAD {
            let xoff = x.blk(xb).offset;
            let yoff = y.blk(yb).offset;
            if xoff > yoff {
                yb = y.blk(yb).next;
                continue;
            }

            if sb == HEAD {
                sb = self.insert_block_before(sb);
            }
            if xoff < yoff {
                // Nothing to subtract from this block.
                let xbits = x.blk(xb).bits;
                let dst = self.blk_mut(sb);
                dst.offset = xoff;
                dst.bits = xbits;
                sb = self.blk(sb).next;
            } else {
                let xbits = x.blk(xb).bits;
                let ybits = y.blk(yb).bits;
                let mut sum: Word = 0;
                let dst = self.blk_mut(sb);
                dst.offset = xoff;
                for i in 0..WORDS_PER_BLOCK {
                    let r = xbits[i] & !ybits[i];
                    dst.bits[i] = r;
                    sum |= r;
                }
                if sum != 0 {
                    sb = self.blk(sb).next;
                }
                yb = y.blk(yb).next;
            }
            xb = x.blk(xb).next;
        }

        // The rest of x survives unchanged.
        while xb != HEAD {
            if sb == HEAD {
                sb = self.insert_block_before(sb);
            }
            let (off, bits) = {
                let b = x.blk(xb);
                (b.offset, b.bits)
            };
            let dst = self.blk_mut(sb);
            dst.offset = off;
            dst.bits = bits;
            sb = self.blk(sb).next;
            xb = x.blk(xb).next;
        }
        self.discard_tail(sb);
    }
}

impl BitAnd for &SparseSet {
    type Output = SparseSet;

    /// Intersection of two sets as a new set.
    ///
    /// ```
    /// # use sparseset::SparseSet;
    /// let a: SparseSet = [1, 2, 3].into_iter().collect();
    /// let b: SparseSet = [2, 300].into_iter().collect();
    /// assert_eq!((&a & &b).to_string(), "{2}");
    /// ```
    fn bitand(self, rhs: &SparseSet) -> SparseSet {
        let mut s = SparseSet::new();
        s.intersection(self, rhs);
        s
    }
}

impl BitOr for &SparseSet {
    type Output = SparseSet;

    /// Union of two sets as a new set.
    ///
    /// ```
    /// # use sparseset::SparseSet;
    /// let a: SparseSet = [1, 2].into_iter().collect();
    /// let b: SparseSet = [2, 300].into_iter().collect();
    /// assert_eq!((&a | &b).to_string(), "{1 2 300}");
    /// ```
    fn bitor(self, rhs: &SparseSet) -> SparseSet {
        let mut s = SparseSet::new();
        s.union(self, rhs);
        s
    }
}

impl Sub for &SparseSet {
    type Output = SparseSet;

    /// Difference of two sets as a new set.
    ///
    /// ```
    /// # use sparseset::SparseSet;
    /// let a: SparseSet = [1, 2, 3].into_iter().collect();
    /// let b: SparseSet = [2].into_iter().collect();
    /// assert_eq!((&a - &b).to_string(), "{1 3}");
    /// ```
    fn sub(self, rhs: &SparseSet) -> SparseSet {
        let mut s = SparseSet::new();
        s.difference(self, rhs);
        s
    }
}

impl BitAndAssign<&SparseSet> for SparseSet {
    fn bitand_assign(&mut self, rhs: &SparseSet) {
        self.intersect_with(rhs);
    }
}

impl BitOrAssign<&SparseSet> for SparseSet {
    fn bitor_assign(&mut self, rhs: &SparseSet) {
        self.union_with(rhs);
    }
}

impl SubAssign<&SparseSet> for SparseSet {
    fn sub_assign(&mut self, rhs: &SparseSet) {
        self.difference_with(rhs);
    }
}
