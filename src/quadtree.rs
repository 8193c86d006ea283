use std::fmt;

use tracing::{debug, trace};

use crate::config::QuadtreeConfig;
use crate::entity::{City, Locate};
use crate::geometry::{Bounds, Quadrant};
use crate::list::List;
use crate::{Error, QuadtreeVisitor};

#[derive(Clone, Debug)]
struct Node {
    bounds: Bounds,
    depth: u32,
    /// Either all four children exist or none do.
    children: Option<[usize; 4]>,
    /// Indices into the entity list. Always empty once the node has split.
    entities: Vec<usize>,
}

impl Node {
    fn leaf(bounds: Bounds, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            children: None,
            entities: Vec::new(),
        }
    }
}

/// A point quadtree over a fixed region.
///
/// Entities are stored once in a list and referenced by index from the
/// leaves. A point lying exactly on a split line is contained by more than one
/// quadrant, so it is referenced from each of them and a query window
/// straddling that line reports it once per quadrant.
#[derive(Clone, Debug)]
pub struct Quadtree<T = City> {
    config: QuadtreeConfig,
    nodes: List<Node>,
    entities: List<T>,
}

impl<T> Quadtree<T> {
    const ROOT: usize = 0;

    /// Creates an empty tree covering `bounds`, splitting leaves that hold
    /// more than [`MAX_ENTITIES_PER_NODE`](crate::MAX_ENTITIES_PER_NODE) entities.
    pub fn new(bounds: Bounds) -> Self {
        Self::build(bounds, QuadtreeConfig::default())
    }

    pub fn with_config(bounds: Bounds, config: QuadtreeConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::build(bounds, config))
    }

    fn build(bounds: Bounds, config: QuadtreeConfig) -> Self {
        let mut nodes = List::new();
        let root = nodes.push(Node::leaf(bounds, 0));
        debug_assert_eq!(root, Self::ROOT);
        Self {
            config,
            nodes,
            entities: List::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.nodes.get(Self::ROOT).bounds
    }

    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    /// Number of entities retained by the tree. Entities dropped for lying
    /// outside the root bounds are not counted, and a boundary entity counts
    /// once however many leaves reference it.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every retained entity, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entities.iter()
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            tree: self,
            idx: Self::ROOT,
        }
    }

    /// Walks the tree depth first, visiting children in NW, NE, SW, SE order.
    pub fn traverse<V>(&self, visitor: &mut V)
    where
        V: QuadtreeVisitor<T>,
    {
        let mut to_process = vec![Self::ROOT];

        while let Some(idx) = to_process.pop() {
            let node = self.nodes.get(idx);
            match node.children {
                Some(children) => {
                    visitor.branch(node.depth, &node.bounds);
                    to_process.extend(children.iter().rev());
                }
                None => {
                    visitor.leaf(node.depth, &node.bounds);
                    for &entity_idx in &node.entities {
                        visitor.entity(self.entities.get(entity_idx));
                    }
                }
            }
        }
    }
}

impl<T: Locate> Quadtree<T> {
    /// Adds `entity` to every leaf whose bounds contain its position.
    ///
    /// An entity outside the root bounds is dropped without any signal.
    pub fn insert(&mut self, entity: T) {
        let position = entity.position();
        let root_bounds = self.bounds();
        if !root_bounds.contains(position) {
            trace!(
                x = position.x,
                y = position.y,
                ?root_bounds,
                "dropping entity outside of quadtree bounds"
            );
            return;
        }
        let entity_idx = self.entities.push(entity);
        self.node_insert(Self::ROOT, entity_idx);
    }

    /// Returns every entity whose position lies inside `range`, edges included.
    ///
    /// Results come out in depth-first order: a node's own entities, then its
    /// children in NW, NE, SW, SE order. An inverted `range` matches nothing.
    pub fn query(&self, range: &Bounds) -> Vec<&T> {
        let mut out = Vec::new();
        let mut to_process = vec![Self::ROOT];

        while let Some(idx) = to_process.pop() {
            let node = self.nodes.get(idx);
            if !node.bounds.intersects(range) {
                continue;
            }
            for &entity_idx in &node.entities {
                let entity = self.entities.get(entity_idx);
                if range.contains(entity.position()) {
                    out.push(entity);
                }
            }
            if let Some(children) = node.children {
                // Reversed so that NW is popped first.
                to_process.extend(children.iter().rev());
            }
        }
        out
    }

    fn node_insert(&mut self, start_node: usize, entity_idx: usize) {
        // LIFO with children pushed in reverse keeps the same visiting order
        // as descending recursively into NW, NE, SW, SE.
        let mut to_process = vec![(start_node, entity_idx)];

        while let Some((node_idx, entity_idx)) = to_process.pop() {
            let position = self.entities.get(entity_idx).position();
            let node = self.nodes.get_mut(node_idx);
            if !node.bounds.contains(position) {
                continue;
            }

            if let Some(children) = node.children {
                for &child in children.iter().rev() {
                    to_process.push((child, entity_idx));
                }
                continue;
            }

            node.entities.push(entity_idx);
            if node.entities.len() > self.config.max_entities_per_node
                && node.bounds.can_split()
                && self.config.below_max_depth(node.depth)
            {
                let displaced = self.split(node_idx);
                for &displaced_idx in displaced.iter().rev() {
                    to_process.push((node_idx, displaced_idx));
                }
            }
        }
    }

    /// Turns a leaf into a branch with four empty children and hands back the
    /// entities it held so they can be re-inserted from this node.
    fn split(&mut self, node_idx: usize) -> Vec<usize> {
        let (bounds, depth) = {
            let node = self.nodes.get(node_idx);
            (node.bounds, node.depth)
        };

        let nodes = &mut self.nodes;
        let children = bounds
            .quadrants()
            .map(|quadrant| nodes.push(Node::leaf(quadrant, depth + 1)));

        let node = self.nodes.get_mut(node_idx);
        node.children = Some(children);
        let displaced = std::mem::take(&mut node.entities);
        debug!(
            depth,
            ?bounds,
            displaced = displaced.len(),
            "splitting quadtree leaf"
        );
        displaced
    }
}

impl<T: Locate> Extend<T> for Quadtree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

/// Read-only handle on one node of a [`Quadtree`].
pub struct NodeRef<'a, T> {
    tree: &'a Quadtree<T>,
    idx: usize,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("idx", &self.idx)
            .field("bounds", &node.bounds)
            .field("depth", &node.depth)
            .field("is_leaf", &node.children.is_none())
            .field("entities", &node.entities.len())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn node(&self) -> &'a Node {
        self.tree.nodes.get(self.idx)
    }

    pub fn bounds(&self) -> Bounds {
        self.node().bounds
    }

    pub fn depth(&self) -> u32 {
        self.node().depth
    }

    pub fn is_leaf(&self) -> bool {
        self.node().children.is_none()
    }

    pub fn children(&self) -> Option<[NodeRef<'a, T>; 4]> {
        let tree = self.tree;
        self.node()
            .children
            .map(|children| children.map(|idx| NodeRef { tree, idx }))
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeRef<'a, T>> {
        self.children().map(|children| children[quadrant.index()])
    }

    /// Entities stored directly at this node. Empty for branches.
    pub fn entities(&self) -> impl Iterator<Item = &'a T> + 'a {
        let tree = self.tree;
        self.node()
            .entities
            .iter()
            .map(move |&entity_idx| tree.entities.get(entity_idx))
    }
}
