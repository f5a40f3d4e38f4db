//! Marker types.

/// Marker type describing an entity joining a platform.
#[derive(Clone, Copy, Debug)]
pub struct Joining;
