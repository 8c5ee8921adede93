// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranking and unranking of k-subsets.
//!
//! Subsets of size k of the universe {0, 1, .., n-1} are numbered using the
//! combinatorial number system (see Theorem L pg. 260 Knuth 4a), the subset
//! `c_0 < c_1 < .. < c_{k-1}` has index `nck(c_0, 1) + nck(c_1, 2) + ..
//! + nck(c_{k-1}, k)`, so indices are dense in `[0, nck(n, k))`.
use crate::{Deck, Error, Hand, Result};

/// Largest universe size supported.
pub const MAX_N: usize = Deck::SIZE;

/// Largest subset size supported.
pub const MAX_K: usize = Hand::SIZE;

/// Creates table for nck(n, k) for n <= MAX_N and k <= MAX_K.
const fn make_nck() -> [[u32; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u32; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k, zero when n < k.
///
/// Panics if n > [MAX_N] or k > [MAX_K].
#[inline]
pub fn nck(n: usize, k: usize) -> u32 {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k]
}

fn check_size(n: usize, k: usize) -> Result<()> {
    if n > MAX_N || k > MAX_K || k > n {
        Err(Error::InvalidSubsetSize { n, k })
    } else {
        Ok(())
    }
}

/// Fills `out` with the k-subset at index `m`, with k the length of `out`.
fn nth_ksubset(mut m: u32, out: &mut [usize]) {
    for i in (0..out.len()).rev() {
        let mut l = i;
        while nck(l, i + 1) <= m {
            l += 1;
        }

        out[i] = l - 1;
        m -= nck(l - 1, i + 1);
    }
}

/// Returns the k-subset of {0, .., n-1} with index `m`.
///
/// The subset elements are strictly increasing, index 0 is `{0, .., k-1}` and
/// index `nck(n, k) - 1` is `{n-k, .., n-1}`.
pub fn unrank(m: u32, k: usize, n: usize) -> Result<Vec<usize>> {
    check_size(n, k)?;

    let count = nck(n, k);
    if m >= count {
        return Err(Error::IndexOutOfRange { index: m, count });
    }

    let mut out = vec![0; k];
    nth_ksubset(m, &mut out);
    Ok(out)
}

/// Returns the index of a subset of {0, .., n-1}, the inverse of [unrank].
///
/// The subset elements must be strictly increasing.
pub fn rank(subset: &[usize], n: usize) -> Result<u32> {
    check_size(n, subset.len())?;

    let increasing = subset.windows(2).all(|w| w[0] < w[1]);
    if !increasing || subset.last().is_some_and(|&c| c >= n) {
        return Err(Error::InvalidSubset(subset.to_vec()));
    }

    Ok(subset
        .iter()
        .enumerate()
        .map(|(i, &c)| nck(c, i + 1))
        .sum())
}

/// Returns the positions in the canonical deck of the hand with index `index`.
pub fn unrank_combination(index: u32) -> Result<[usize; Hand::SIZE]> {
    let count = nck(Deck::SIZE, Hand::SIZE);
    if index >= count {
        return Err(Error::IndexOutOfRange { index, count });
    }

    let mut out = [0; Hand::SIZE];
    nth_ksubset(index, &mut out);
    Ok(out)
}

/// Calls the given closure for `count` k-subsets starting from the nth k-subset.
///
/// Subsets are visited in index order, stopping after the last subset.
pub fn for_each_ksubset<F>(n: usize, k: usize, nth: u32, count: usize, mut f: F) -> Result<()>
where
    F: FnMut(&[usize]),
{
    check_size(n, k)?;
    if k == 0 {
        return Err(Error::InvalidSubsetSize { n, k });
    }

    let total = nck(n, k);
    if nth >= total {
        return Err(Error::IndexOutOfRange { index: nth, count: total });
    }

    if count == 0 {
        return Ok(());
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];
    nth_ksubset(nth, &mut c[1..=k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }

    Ok(())
}
