//! Element identities and ancestor walks over a host's element tree.
//!
//! The controller never touches a real document. Hosts describe parent links
//! through [`ElementTree`] and hand out [`ElementId`]s for the gesture origin,
//! the sheet root and the nested scroll region.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::warn;

/// Upper bound on ancestor hops, guarding against cyclic parent links.
const MAX_ANCESTOR_DEPTH: usize = 1024;

/// Stable identifier of one element in the host's tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wraps a host-side identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-side identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Parent lookup over the host's element tree.
pub trait ElementTree {
    /// Parent of `id`, or `None` at the document root.
    fn parent(&self, id: ElementId) -> Option<ElementId>;
}

/// An [`ElementTree`] backed by an explicit child-to-parent map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParentMap {
    parents: FxHashMap<ElementId, ElementId>,
}

impl ParentMap {
    /// Creates an empty tree where every element is a root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parent` as the parent of `child`, replacing any previous link.
    pub fn insert(&mut self, child: ElementId, parent: ElementId) -> &mut Self {
        self.parents.insert(child, parent);
        self
    }

    /// Builder form of [`Self::insert`].
    pub fn with(mut self, child: ElementId, parent: ElementId) -> Self {
        self.insert(child, parent);
        self
    }

    /// Removes the parent link of `child`.
    pub fn remove(&mut self, child: ElementId) -> Option<ElementId> {
        self.parents.remove(&child)
    }
}

impl ElementTree for ParentMap {
    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.parents.get(&id).copied()
    }
}

/// Elements visited on the way from a gesture origin to the sheet root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorPath {
    /// Visited elements, starting with the origin.
    pub nodes: SmallVec<[ElementId; 8]>,
    /// Whether the walk ended on the boundary element rather than the root.
    pub reached_boundary: bool,
}

impl AncestorPath {
    /// Whether `id` lies on the path.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains(&id)
    }
}

/// Walks from `from` up to and including `boundary`.
///
/// Reaching the document root without meeting `boundary` is not an error:
/// the partial path is returned with `reached_boundary == false`.
pub fn ancestor_path(tree: &dyn ElementTree, from: ElementId, boundary: ElementId) -> AncestorPath {
    let mut nodes = SmallVec::new();
    let mut current = Some(from);
    while let Some(id) = current {
        nodes.push(id);
        if id == boundary {
            return AncestorPath {
                nodes,
                reached_boundary: true,
            };
        }
        if nodes.len() >= MAX_ANCESTOR_DEPTH {
            warn!(
                "Ancestor walk from {from:?} exceeded {MAX_ANCESTOR_DEPTH} hops; the tree may be cyclic"
            );
            break;
        }
        current = tree.parent(id);
    }
    AncestorPath {
        nodes,
        reached_boundary: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: ElementId = ElementId::new(1);
    const SHEET: ElementId = ElementId::new(2);
    const LIST: ElementId = ElementId::new(3);
    const ROW: ElementId = ElementId::new(4);

    fn tree() -> ParentMap {
        ParentMap::new()
            .with(SHEET, ROOT)
            .with(LIST, SHEET)
            .with(ROW, LIST)
    }

    #[test]
    fn walks_up_to_the_boundary_inclusive() {
        let path = ancestor_path(&tree(), ROW, SHEET);
        assert!(path.reached_boundary);
        assert_eq!(path.nodes.as_slice(), &[ROW, LIST, SHEET]);
        assert!(path.contains(LIST));
        assert!(!path.contains(ROOT));
    }

    #[test]
    fn origin_equal_to_boundary_is_a_single_hop() {
        let path = ancestor_path(&tree(), SHEET, SHEET);
        assert!(path.reached_boundary);
        assert_eq!(path.nodes.as_slice(), &[SHEET]);
    }

    #[test]
    fn missing_boundary_returns_partial_path() {
        let detached = ElementId::new(99);
        let path = ancestor_path(&tree(), ROW, detached);
        assert!(!path.reached_boundary);
        assert_eq!(path.nodes.as_slice(), &[ROW, LIST, SHEET, ROOT]);
    }

    #[test]
    fn cyclic_trees_terminate() {
        let a = ElementId::new(10);
        let b = ElementId::new(11);
        let cyclic = ParentMap::new().with(a, b).with(b, a);
        let path = ancestor_path(&cyclic, a, SHEET);
        assert!(!path.reached_boundary);
        assert_eq!(path.nodes.len(), MAX_ANCESTOR_DEPTH);
    }
}
