/// Severity classification.
///
/// Three independent classifiers, all pure and infallible: a gauge
/// reading ladder (`water_level`), a pump condition matcher (`pump`),
/// and a combined safety verdict (`safe_zone`). Malformed inputs
/// degrade to the mildest applicable bucket rather than erroring —
/// input sanity is the caller's responsibility.

pub mod pump;
pub mod safe_zone;
pub mod water_level;
