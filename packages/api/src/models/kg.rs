//! # Knowledge graph
//!
//! The per-user graph from `GET /api/me/kg` and the condensed interest list from
//! `GET /api/me/kg/context`. Both are read-only and fetched on each profile visit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KgEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub weight: f64,
}

/// An edge between two entities. `from` and `to` carry entity names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KgRelationship {
    pub from: String,
    pub to: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub entities: Vec<KgEntity>,
    #[serde(default)]
    pub relationships: Vec<KgRelationship>,
    #[serde(default)]
    pub entity_count: u64,
    #[serde(default)]
    pub relationship_count: u64,
}

impl KnowledgeGraph {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities sorted by descending weight; ties keep server order.
    pub fn ranked_entities(&self) -> Vec<&KgEntity> {
        let mut ranked: Vec<&KgEntity> = self.entities.iter().collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }

    /// Entities grouped by type, each group ranked by weight.
    pub fn by_type(&self) -> BTreeMap<&str, Vec<&KgEntity>> {
        let mut groups: BTreeMap<&str, Vec<&KgEntity>> = BTreeMap::new();
        for entity in self.ranked_entities() {
            let kind = if entity.kind.is_empty() { "other" } else { entity.kind.as_str() };
            groups.entry(kind).or_default().push(entity);
        }
        groups
    }

    /// Relationships sorted by descending weight.
    pub fn ranked_relationships(&self) -> Vec<&KgRelationship> {
        let mut ranked: Vec<&KgRelationship> = self.relationships.iter().collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InterestTerm {
    pub term: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KgContext {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub has_context: bool,
    #[serde(default)]
    pub top_interests: Vec<InterestTerm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> KnowledgeGraph {
        serde_json::from_str(
            r#"{
                "user_id": "u1",
                "username": "ada",
                "entities": [
                    {"id":"e1","name":"Rust","type":"topic","weight":0.4},
                    {"id":"e2","name":"Mozilla","type":"organization","weight":0.9},
                    {"id":"e3","name":"WebAssembly","type":"topic","weight":0.7}
                ],
                "relationships": [
                    {"from":"Rust","to":"WebAssembly","type":"related_to","weight":0.5},
                    {"from":"Mozilla","to":"Rust","type":"created","weight":0.8}
                ],
                "entity_count": 3,
                "relationship_count": 2
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ranked_entities() {
        let g = graph();
        let names: Vec<&str> = g.ranked_entities().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Mozilla", "WebAssembly", "Rust"]);
    }

    #[test]
    fn test_grouped_by_type() {
        let g = graph();
        let groups = g.by_type();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["organization", "topic"]);
        let topics: Vec<&str> = groups["topic"].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(topics, vec!["WebAssembly", "Rust"]);
    }

    #[test]
    fn test_relationships_ranked_by_weight() {
        let g = graph();
        let ranked = g.ranked_relationships();
        assert_eq!(ranked[0].from, "Mozilla");
        assert_eq!(ranked[0].to, "Rust");
        assert_eq!(ranked[0].kind, "created");
        assert_eq!(ranked[1].from, "Rust");
    }
}
