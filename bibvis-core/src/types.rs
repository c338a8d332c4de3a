/// Identifier for a node in a [`crate::diagram::Diagram`].
///
/// This is an index into `Diagram::nodes`, and is only meaningful within
/// the lifetime of a given `Diagram` instance.
pub type NodeId = usize;

/// Identifier for a set in a [`crate::diagram::Diagram`].
///
/// Index into `Diagram::sets`, with the same lifetime caveat as [`NodeId`].
pub type SetId = usize;
