/// Derived metrics.
///
/// `dashboard` reduces the three raw feed arrays into the headline
/// dashboard counters; `history` buckets incident records into chart
/// points. Both recompute from scratch on every call — there is no
/// caching or invalidation to reason about.

pub mod dashboard;
pub mod history;
