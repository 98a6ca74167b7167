//! Exhaustive listing of selections.
//!
//! The output grows factorially with the pool size; callers keep pools small
//! (see [`MAX_ENUMERATION_ITEMS`](crate::MAX_ENUMERATION_ITEMS)).

/// All ordered selections of `r` items, in lexicographic order of item position.
///
/// `r == 0` yields one empty selection; `r > items.len()` yields none.
///
/// # Examples
///
/// ```
/// use statmaster_combinatorics::generate_permutations;
///
/// let perms = generate_permutations(&[1, 2, 3], 2);
/// assert_eq!(perms, vec![[1, 2], [1, 3], [2, 1], [2, 3], [3, 1], [3, 2]]);
/// ```
#[must_use]
pub fn generate_permutations<T: Clone>(items: &[T], r: usize) -> Vec<Vec<T>> {
    fn extend<T: Clone>(
        items: &[T],
        r: usize,
        used: &mut [bool],
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == r {
            out.push(current.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(items[i].clone());
            extend(items, r, used, current, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    if r <= items.len() {
        let mut used = vec![false; items.len()];
        extend(items, r, &mut used, &mut Vec::with_capacity(r), &mut out);
    }
    out
}

/// All unordered selections of `r` items, each listed once in pool order.
///
/// `r == 0` yields one empty selection; `r > items.len()` yields none.
#[must_use]
pub fn generate_combinations<T: Clone>(items: &[T], r: usize) -> Vec<Vec<T>> {
    fn extend<T: Clone>(
        items: &[T],
        start: usize,
        r: usize,
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == r {
            out.push(current.clone());
            return;
        }
        let remaining = r - current.len();
        for i in start..=items.len() - remaining {
            current.push(items[i].clone());
            extend(items, i + 1, r, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if r <= items.len() {
        extend(items, 0, r, &mut Vec::with_capacity(r), &mut out);
    }
    out
}
