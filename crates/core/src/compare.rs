//! Ordering vectors by squared length.

use std::cmp::Ordering;

use crate::core_types::Vec3;
use crate::extensions::Vec3Ops;

/// Wrapper that orders vectors by squared length, so `<`, `>`, `min`, `max`
/// and sorting work without taking a square root.
///
/// Two vectors of equal length compare equal even when they point in
/// different directions.
///
/// ```
/// use vec_ops_core::{ByLen2, Vec3};
///
/// let a = Vec3::new(3.0, 4.0, 0.0);
/// let b = Vec3::new(1.0, 0.0, 0.0);
/// assert!(ByLen2(&a) > ByLen2(&b));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByLen2<'a>(pub &'a Vec3);

impl PartialEq for ByLen2<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByLen2<'_> {}

impl PartialOrd for ByLen2<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByLen2<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_len2(other.0)
    }
}
