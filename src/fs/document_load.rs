use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
    vec,
};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{EntityIdentity, GraphNode, GraphResolutionError, RelationshipEnumerator};

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("cannot read graph document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("root entity `{0}` is not declared in the document")]
    UnknownRoot(String),

    #[error("entity `{0}` is declared more than once")]
    DuplicateEntity(String),
}

/// On-disk shape of a graph document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub root: String,
    pub entities: Vec<EntityRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default)]
    pub relations: Vec<RelationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationRecord {
    pub name: String,
    pub target: Target,
}

/// A single-valued reference is written as a string, a collection as an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Reference(String),
    Collection(Vec<String>),
}

/// One entity instance of a loaded document.
#[derive(Debug, PartialEq, Eq)]
pub struct DocumentEntity {
    id: String,
}

impl DocumentEntity {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DocumentEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Reference,
    Collection,
}

/// Relationship metadata handed to visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub name: Arc<str>,
    pub kind: RelationKind,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RelationKind::Reference => write!(f, "{}", self.name),
            RelationKind::Collection => write!(f, "{}[]", self.name),
        }
    }
}

#[derive(Debug)]
struct ResolvedRelation {
    relation: Relation,
    targets: Vec<String>,
}

/// A loaded graph document.
///
/// # Invariants
/// - Every declared id maps to exactly one `Arc<DocumentEntity>`; the engine's
///   identity-based deduplication therefore coincides with id equality.
/// - Relationship targets are resolved when children are requested, so a document
///   may declare references to ids it never defines; traversal fails only if such a
///   reference is actually reached.
#[derive(Debug)]
pub struct DocumentGraph {
    root: Arc<DocumentEntity>,
    entities: HashMap<String, Arc<DocumentEntity>>,
    relations: HashMap<String, Vec<ResolvedRelation>>,
}

impl DocumentGraph {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading graph document");
        Self::load_from_reader(BufReader::new(File::open(path)?))
    }

    pub fn load_from_reader(reader: impl Read) -> Result<Self, DocumentError> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_document(document: GraphDocument) -> Result<Self, DocumentError> {
        let mut entities = HashMap::with_capacity(document.entities.len());
        let mut relations = HashMap::with_capacity(document.entities.len());

        for record in document.entities {
            if entities.contains_key(&record.id) {
                return Err(DocumentError::DuplicateEntity(record.id));
            }

            let resolved = record
                .relations
                .into_iter()
                .map(|relation| {
                    let name: Arc<str> = relation.name.into();
                    let (kind, targets) = match relation.target {
                        Target::Reference(id) => (RelationKind::Reference, vec![id]),
                        Target::Collection(ids) => (RelationKind::Collection, ids),
                    };
                    ResolvedRelation {
                        relation: Relation { name, kind },
                        targets,
                    }
                })
                .collect();

            let entity = Arc::new(DocumentEntity {
                id: record.id.clone(),
            });
            relations.insert(record.id.clone(), resolved);
            entities.insert(record.id, entity);
        }

        let root = entities
            .get(&document.root)
            .cloned()
            .ok_or(DocumentError::UnknownRoot(document.root))?;

        tracing::info!(
            root = root.id(),
            entities = entities.len(),
            "graph document loaded"
        );

        Ok(DocumentGraph {
            root,
            entities,
            relations,
        })
    }

    pub fn root(&self) -> Arc<DocumentEntity> {
        Arc::clone(&self.root)
    }

    pub fn entity(&self, id: &str) -> Option<Arc<DocumentEntity>> {
        self.entities.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl RelationshipEnumerator<Arc<DocumentEntity>> for DocumentGraph {
    type Metadata = Relation;
    type Children = vec::IntoIter<(Arc<DocumentEntity>, Relation)>;

    fn children(
        &self,
        node: &GraphNode<Arc<DocumentEntity>, Relation>,
    ) -> Result<Self::Children, GraphResolutionError> {
        let entity = node.entity();

        // an entity with the right id but from another document is a stranger here
        let known = self
            .entities
            .get(entity.id())
            .is_some_and(|own| own.entity_id() == node.id());
        let relations = match self.relations.get(entity.id()) {
            Some(relations) if known => relations,
            _ => return Err(GraphResolutionError::unresolved(entity.id())),
        };

        let mut children = Vec::new();
        for resolved in relations {
            for target in &resolved.targets {
                let child = self.entities.get(target).ok_or_else(|| {
                    GraphResolutionError::dangling(entity.id(), &resolved.relation)
                })?;
                children.push((Arc::clone(child), resolved.relation.clone()));
            }
        }
        Ok(children.into_iter())
    }
}
