use thiserror::Error;

/// Raised when the relationship enumerator cannot produce the relationships of an entity.
///
/// Surfaced to the caller immediately; the engine never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphResolutionError {
    #[error("no relationship information for entity {entity}")]
    UnresolvedEntity { entity: String },

    #[error("entity {entity} references unknown entity through `{relationship}`")]
    DanglingReference { entity: String, relationship: String },
}

impl GraphResolutionError {
    pub fn unresolved(entity: impl ToString) -> Self {
        GraphResolutionError::UnresolvedEntity {
            entity: entity.to_string(),
        }
    }

    pub fn dangling(entity: impl ToString, relationship: impl ToString) -> Self {
        GraphResolutionError::DanglingReference {
            entity: entity.to_string(),
            relationship: relationship.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity() {
        let err = GraphResolutionError::unresolved("order-7");
        assert_eq!(err.to_string(), "no relationship information for entity order-7");

        let err = GraphResolutionError::dangling("order-7", "lines");
        assert_eq!(
            err.to_string(),
            "entity order-7 references unknown entity through `lines`"
        );
    }

    use crate::graph::EntityId;

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = GraphResolutionError::unresolved(EntityId::new(16)).into();
        assert!(err.downcast_ref::<GraphResolutionError>().is_some());
        assert_eq!(err.to_string(), "no relationship information for entity 0x10");
    }
}
