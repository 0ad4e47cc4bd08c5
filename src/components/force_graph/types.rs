//! Graph data structures for input to the career graph component.

use std::fmt;

use serde::Deserialize;

/// What a node represents. Drives color, radius and label size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Role,
	Skill,
	Internship,
	/// Anything not recognized; rendered with the fallback style.
	#[serde(other)]
	Unknown,
}

impl Category {
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Role => "role",
			Category::Skill => "skill",
			Category::Internship => "internship",
			Category::Unknown => "unknown",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Informational domain grouping. Not used for layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Sector {
	#[serde(rename = "IT")]
	It,
	Finance,
	Engineering,
}

/// Relationship carried by an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
	/// Directed career progression, source precedes target.
	#[default]
	Pathway,
	/// Undirected relatedness.
	Similarity,
}

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Unique identifier, also used as the display label.
	pub id: String,
	#[serde(rename = "type")]
	pub category: Category,
	#[serde(default)]
	pub sector: Option<Sector>,
}

impl GraphNode {
	pub fn new(id: impl Into<String>, category: Category, sector: Option<Sector>) -> Self {
		Self {
			id: id.into(),
			category,
			sector,
		}
	}
}

/// A directed edge between two nodes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Missing kinds render like pathways.
	#[serde(rename = "type", default)]
	pub kind: Option<EdgeKind>,
}

impl GraphLink {
	pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			kind: Some(kind),
		}
	}

	pub fn effective_kind(&self) -> EdgeKind {
		self.kind.unwrap_or_default()
	}
}

/// Raw graph data as authored: nodes and links, not yet validated.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_authored_json() {
		let json = r#"{
			"nodes": [
				{ "id": "Python", "type": "skill", "sector": "IT" },
				{ "id": "Data Analyst", "type": "role" },
				{ "id": "Mentor", "type": "advisor" }
			],
			"links": [
				{ "source": "Python", "target": "Data Analyst", "type": "pathway" },
				{ "source": "Python", "target": "Mentor" }
			]
		}"#;
		let data: GraphData = serde_json::from_str(json).unwrap();

		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.nodes[0].sector, Some(Sector::It));
		assert_eq!(data.nodes[1].sector, None);
		assert_eq!(data.nodes[2].category, Category::Unknown);
		assert_eq!(data.links[0].kind, Some(EdgeKind::Pathway));
		assert_eq!(data.links[1].kind, None);
		assert_eq!(data.links[1].effective_kind(), EdgeKind::Pathway);
	}

	#[test]
	fn category_display_matches_serialized_name() {
		assert_eq!(Category::Internship.to_string(), "internship");
		assert_eq!(Category::Unknown.to_string(), "unknown");
	}
}
