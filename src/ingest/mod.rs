/// Upstream feed clients.
///
/// One module per feed, each owning URL construction (where relevant),
/// the serde structures for that feed's envelope, and normalization
/// into the domain model. Shape differences between providers are
/// resolved here, at the boundary, never downstream.

pub mod alerts;
pub mod pumps;
pub mod usgs;
pub mod weather;

#[cfg(test)]
pub(crate) mod fixtures;
