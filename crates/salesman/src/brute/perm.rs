//! Lexicographic permutations without per-item allocation.

/// Walks every ordering of a sorted slice in lexicographic order.
///
/// `next_order` lends the current ordering instead of implementing `Iterator`,
/// so scoring a permutation never clones it.
#[derive(Clone, Debug)]
pub struct LexPermutations {
    items: Vec<usize>,
    started: bool,
    done: bool,
}

impl LexPermutations {
    /// `items` is sorted first, so the first ordering is the ascending one.
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        Self {
            items,
            started: false,
            done: false,
        }
    }

    pub fn next_order(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }
        if next_permutation(&mut self.items) {
            Some(&self.items)
        } else {
            self.done = true;
            None
        }
    }
}

/// Advance `v` to its lexicographic successor; false (and `v` untouched) on the last one.
fn next_permutation(v: &mut [usize]) -> bool {
    let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
        return false;
    };
    let pivot = i - 1;
    let Some(j) = (i..v.len()).rev().find(|&j| v[j] > v[pivot]) else {
        return false;
    };
    v.swap(pivot, j);
    v[i..].reverse();
    true
}
