//! In-memory entity graphs shared by the traversal tests.

use std::{
    collections::{HashMap, HashSet},
    iter,
    ops::Range,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    vec,
};

use crate::graph::{EntityId, EntityIdentity, GraphNode, GraphResolutionError, RelationshipEnumerator};

#[derive(Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: &'static str,
}

pub type FixtureNode = GraphNode<Arc<Entity>, &'static str>;

#[derive(Debug, PartialEq, Eq)]
pub struct Item(pub u32);

pub type ItemNode = GraphNode<Arc<Item>, u32>;

/// The root has `count` children, each a brand-new allocation built when it is
/// pulled; every other entity is a leaf.
pub struct FreshItems {
    count: u32,
}

impl FreshItems {
    pub fn new(count: u32) -> Self {
        FreshItems { count }
    }
}

fn fresh_item(i: u32) -> (Arc<Item>, u32) {
    (Arc::new(Item(i)), i)
}

impl RelationshipEnumerator<Arc<Item>> for FreshItems {
    type Metadata = u32;
    type Children = iter::Map<Range<u32>, fn(u32) -> (Arc<Item>, u32)>;

    fn children(&self, node: &ItemNode) -> Result<Self::Children, GraphResolutionError> {
        let end = if node.is_root() { self.count } else { 0 };
        Ok((0..end).map(fresh_item as fn(u32) -> (Arc<Item>, u32)))
    }
}

/// Adjacency keyed by entity identity, so two entities with the same name are
/// still distinct nodes.
#[derive(Default)]
pub struct FixtureGraph {
    edges: HashMap<EntityId, Vec<(Arc<Entity>, &'static str)>>,
    unresolvable: HashSet<EntityId>,
    enumerations: AtomicUsize,
    pulls: Arc<AtomicUsize>,
}

impl FixtureGraph {
    pub fn entity(&mut self, name: &'static str) -> Arc<Entity> {
        Arc::new(Entity { name })
    }

    pub fn link(&mut self, from: &Arc<Entity>, relationship: &'static str, to: &Arc<Entity>) {
        self.edges
            .entry(from.entity_id())
            .or_default()
            .push((Arc::clone(to), relationship));
    }

    pub fn unresolvable(&mut self, entity: &Arc<Entity>) {
        self.unresolvable.insert(entity.entity_id());
    }

    /// Number of times the engine asked for a node's children.
    pub fn enumerations(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    /// Number of children the engine pulled out of the lazy sequences.
    pub fn pulls(&self) -> usize {
        self.pulls.load(Ordering::SeqCst)
    }
}

pub struct CountingChildren {
    inner: vec::IntoIter<(Arc<Entity>, &'static str)>,
    pulls: Arc<AtomicUsize>,
}

impl Iterator for CountingChildren {
    type Item = (Arc<Entity>, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.pulls.fetch_add(1, Ordering::SeqCst);
        Some(item)
    }
}

impl RelationshipEnumerator<Arc<Entity>> for FixtureGraph {
    type Metadata = &'static str;
    type Children = CountingChildren;

    fn children(&self, node: &FixtureNode) -> Result<Self::Children, GraphResolutionError> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        if self.unresolvable.contains(&node.id()) {
            return Err(GraphResolutionError::unresolved(node.entity().name));
        }
        let children = self.edges.get(&node.id()).cloned().unwrap_or_default();
        Ok(CountingChildren {
            inner: children.into_iter(),
            pulls: Arc::clone(&self.pulls),
        })
    }
}

/// R -> [A, B], A -> [C], B -> [C]
pub fn diamond() -> (FixtureGraph, Arc<Entity>) {
    let mut graph = FixtureGraph::default();
    let r = graph.entity("R");
    let a = graph.entity("A");
    let b = graph.entity("B");
    let c = graph.entity("C");
    graph.link(&r, "children", &a);
    graph.link(&r, "children", &b);
    graph.link(&a, "child", &c);
    graph.link(&b, "child", &c);
    (graph, r)
}

/// R -> R
pub fn self_loop() -> (FixtureGraph, Arc<Entity>) {
    let mut graph = FixtureGraph::default();
    let r = graph.entity("R");
    graph.link(&r, "self", &r);
    (graph, r)
}

/// A -> B, B -> A
pub fn two_cycle() -> (FixtureGraph, Arc<Entity>) {
    let mut graph = FixtureGraph::default();
    let a = graph.entity("A");
    let b = graph.entity("B");
    graph.link(&a, "partner", &b);
    graph.link(&b, "partner", &a);
    (graph, a)
}

/// An order aggregate with bidirectional links, shared products and a nested
/// collection:
///
/// ```text
/// Order -> Customer -> Address
///       -> Line1 -> Order (back-reference)
///                -> Product1 -> Category
///       -> Line2 -> Order (back-reference)
///                -> Product1
///                -> Product2 -> Category
/// Customer -> Order (back-reference)
/// ```
pub fn order_aggregate() -> (FixtureGraph, Arc<Entity>) {
    let mut graph = FixtureGraph::default();
    let order = graph.entity("Order");
    let customer = graph.entity("Customer");
    let address = graph.entity("Address");
    let line1 = graph.entity("Line1");
    let line2 = graph.entity("Line2");
    let product1 = graph.entity("Product1");
    let product2 = graph.entity("Product2");
    let category = graph.entity("Category");

    graph.link(&order, "customer", &customer);
    graph.link(&customer, "address", &address);
    graph.link(&customer, "orders", &order);
    graph.link(&order, "lines", &line1);
    graph.link(&order, "lines", &line2);
    graph.link(&line1, "order", &order);
    graph.link(&line1, "product", &product1);
    graph.link(&line2, "order", &order);
    graph.link(&line2, "product", &product1);
    graph.link(&line2, "product", &product2);
    graph.link(&product1, "category", &category);
    graph.link(&product2, "category", &category);
    (graph, order)
}

/// A complete binary tree of the given depth with no shared children.
pub fn binary_tree(depth: usize) -> (FixtureGraph, Arc<Entity>) {
    const NAMES: [&str; 2] = ["left", "right"];
    let mut graph = FixtureGraph::default();
    let root = graph.entity("node");
    let mut frontier = vec![Arc::clone(&root)];
    for _ in 0..depth {
        let mut next = Vec::new();
        for parent in &frontier {
            for side in NAMES {
                let child = graph.entity(side);
                graph.link(parent, side, &child);
                next.push(child);
            }
        }
        frontier = next;
    }
    (graph, root)
}

pub fn names(nodes: &[Arc<Entity>]) -> Vec<&'static str> {
    nodes.iter().map(|entity| entity.name).collect()
}
