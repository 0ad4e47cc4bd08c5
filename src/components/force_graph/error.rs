use thiserror::Error;

use super::types::Category;

/// Problems found while validating authored graph data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
	#[error("dataset contains no nodes")]
	Empty,
	#[error("node `{id}` is declared as both {first} and {second}")]
	ConflictingCategory {
		id: String,
		first: Category,
		second: Category,
	},
	#[error("link `{from}` -> `{to}` references unknown node `{missing}`")]
	DanglingEdge {
		from: String,
		to: String,
		missing: String,
	},
}
