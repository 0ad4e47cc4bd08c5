//! The builtin career dataset and load-time validation.
//!
//! Authored data may declare the same skill under several sectors (e.g. "Excel"
//! for both IT and Finance). [`CareerGraph::load`] folds those into one node and
//! rejects links that point at nodes that do not exist.

use std::collections::HashMap;

use log::debug;

use super::error::DatasetError;
use super::types::Category::{Internship, Role, Skill};
use super::types::EdgeKind::{Pathway, Similarity};
use super::types::Sector::{Engineering, Finance, It};
use super::types::{Category, EdgeKind, GraphData, GraphLink, GraphNode, Sector};

const NODES: &[(&str, Category, Sector)] = &[
	("Junior Data Analyst", Role, It),
	("Data Analyst", Role, It),
	("Data Scientist", Role, It),
	("Data Engineer", Role, It),
	("Machine Learning Engineer", Role, It),
	("AI Engineer", Role, It),
	("ML Ops Engineer", Role, It),
	("Cloud Architect", Role, It),
	("Data Platform Engineer", Role, It),
	("Frontend Developer", Role, It),
	("Backend Developer", Role, It),
	("Full Stack Developer", Role, It),
	("Software Architect", Role, It),
	("Excel", Skill, It),
	("SQL", Skill, It),
	("Python", Skill, It),
	("R Programming", Skill, It),
	("Data Visualization", Skill, It),
	("Machine Learning", Skill, It),
	("Statistics", Skill, It),
	("ETL", Skill, It),
	("Big Data", Skill, It),
	("Spark", Skill, It),
	("HTML/CSS", Skill, It),
	("JavaScript", Skill, It),
	("React", Skill, It),
	("Node.js", Skill, It),
	("Database Design", Skill, It),
	("Docker", Skill, It),
	("Kubernetes", Skill, It),
	("Cloud Computing", Skill, It),
	("Deep Learning", Skill, It),
	("Natural Language Processing", Skill, It),
	("Computer Vision", Skill, It),
	("TensorFlow", Skill, It),
	("PyTorch", Skill, It),
	("AWS", Skill, It),
	("Azure", Skill, It),
	("GCP", Skill, It),
	("Data Pipelines", Skill, It),
	("Kafka", Skill, It),
	("Airflow", Skill, It),
	("Financial Analyst", Role, Finance),
	("Senior Financial Analyst", Role, Finance),
	("Investment Banking Analyst", Role, Finance),
	("Portfolio Manager", Role, Finance),
	("Risk Manager", Role, Finance),
	("Financial Modeling", Skill, Finance),
	("Valuation", Skill, Finance),
	("Accounting", Skill, Finance),
	("Excel", Skill, Finance),
	("Risk Management", Skill, Finance),
	("Economics", Skill, Finance),
	("Financial Analysis", Skill, Finance),
	("DCF Modeling", Skill, Finance),
	("Equity Research", Skill, Finance),
	("Credit Analysis", Skill, Finance),
	("Mergers & Acquisitions", Skill, Finance),
	("Capital Markets", Skill, Finance),
	("Financial Reporting", Skill, Finance),
	("Bloomberg Terminal", Skill, Finance),
	("PowerBI", Skill, Finance),
	("Tableau", Skill, Finance),
	("Software Engineer", Role, Engineering),
	("Senior Software Engineer", Role, Engineering),
	("DevOps Engineer", Role, Engineering),
	("System Architect", Role, Engineering),
	("System Design", Skill, Engineering),
	("Cloud Computing", Skill, Engineering),
	("Docker", Skill, Engineering),
	("Kubernetes", Skill, Engineering),
	("CI/CD", Skill, Engineering),
	("Data Analytics Intern", Internship, It),
	("Software Dev Intern", Internship, It),
	("AI Research Intern", Internship, It),
	("Cloud Engineering Intern", Internship, It),
	("Data Platform Intern", Internship, It),
	("Finance Intern", Internship, Finance),
	("Engineering Intern", Internship, Engineering),
];

const LINKS: &[(&str, &str, EdgeKind)] = &[
	("Excel", "Junior Data Analyst", Pathway),
	("SQL", "Junior Data Analyst", Pathway),
	("Junior Data Analyst", "Data Analyst", Pathway),
	("Python", "Data Analyst", Pathway),
	("Data Analyst", "Data Scientist", Pathway),
	("Machine Learning", "Data Scientist", Pathway),
	("Statistics", "Data Scientist", Pathway),
	("Data Analyst", "Data Engineer", Pathway),
	("ETL", "Data Engineer", Pathway),
	("Big Data", "Data Engineer", Pathway),
	("Spark", "Data Engineer", Pathway),
	("Python", "AI Engineer", Pathway),
	("Machine Learning", "AI Engineer", Pathway),
	("Deep Learning", "AI Engineer", Pathway),
	("Natural Language Processing", "AI Engineer", Pathway),
	("Computer Vision", "AI Engineer", Pathway),
	("TensorFlow", "AI Engineer", Pathway),
	("PyTorch", "AI Engineer", Pathway),
	("AI Engineer", "ML Ops Engineer", Pathway),
	("Data Engineer", "ML Ops Engineer", Pathway),
	("ML Ops Engineer", "Cloud Architect", Pathway),
	("AWS", "Cloud Architect", Pathway),
	("Azure", "Cloud Architect", Pathway),
	("GCP", "Cloud Architect", Pathway),
	("Data Pipelines", "Data Platform Engineer", Pathway),
	("Kafka", "Data Platform Engineer", Pathway),
	("Airflow", "Data Platform Engineer", Pathway),
	("Cloud Architect", "Data Platform Engineer", Pathway),
	("Frontend Developer", "HTML/CSS", Pathway),
	("Frontend Developer", "JavaScript", Pathway),
	("Frontend Developer", "React", Pathway),
	("Backend Developer", "Node.js", Pathway),
	("Backend Developer", "Database Design", Pathway),
	("Frontend Developer", "Full Stack Developer", Pathway),
	("Backend Developer", "Full Stack Developer", Pathway),
	("Full Stack Developer", "Software Architect", Pathway),
	("Software Architect", "Docker", Pathway),
	("Software Architect", "Kubernetes", Pathway),
	("Software Architect", "Cloud Computing", Pathway),
	("Excel", "Financial Analyst", Pathway),
	("Financial Modeling", "Financial Analyst", Pathway),
	("Accounting", "Financial Analyst", Pathway),
	("Financial Analyst", "Senior Financial Analyst", Pathway),
	("Financial Analysis", "Senior Financial Analyst", Pathway),
	("DCF Modeling", "Senior Financial Analyst", Pathway),
	("Financial Reporting", "Senior Financial Analyst", Pathway),
	("PowerBI", "Senior Financial Analyst", Pathway),
	("Senior Financial Analyst", "Investment Banking Analyst", Pathway),
	("Valuation", "Investment Banking Analyst", Pathway),
	("Equity Research", "Investment Banking Analyst", Pathway),
	("Credit Analysis", "Investment Banking Analyst", Pathway),
	("Mergers & Acquisitions", "Investment Banking Analyst", Pathway),
	("Capital Markets", "Investment Banking Analyst", Pathway),
	("Risk Management", "Portfolio Manager", Pathway),
	("Economics", "Portfolio Manager", Pathway),
	("JavaScript", "Software Engineer", Pathway),
	("Python", "Software Engineer", Pathway),
	("System Design", "Software Engineer", Pathway),
	("Software Engineer", "Senior Software Engineer", Pathway),
	("Senior Software Engineer", "DevOps Engineer", Pathway),
	("Cloud Computing", "DevOps Engineer", Pathway),
	("Docker", "DevOps Engineer", Pathway),
	("Kubernetes", "DevOps Engineer", Pathway),
	("CI/CD", "DevOps Engineer", Pathway),
	("Junior Data Analyst", "Data Analytics Intern", Pathway),
	("Frontend Developer", "Software Dev Intern", Pathway),
	("Backend Developer", "Software Dev Intern", Pathway),
	("AI Engineer", "AI Research Intern", Pathway),
	("Cloud Architect", "Cloud Engineering Intern", Pathway),
	("Data Platform Engineer", "Data Platform Intern", Pathway),
	("Financial Analyst", "Finance Intern", Pathway),
	("Software Engineer", "Engineering Intern", Pathway),
	("Python", "Machine Learning", Similarity),
	("Deep Learning", "Machine Learning", Similarity),
	("PyTorch", "TensorFlow", Similarity),
	("AWS", "Azure", Similarity),
	("AWS", "GCP", Similarity),
	("ETL", "Data Pipelines", Similarity),
	("Docker", "Cloud Computing", Similarity),
	("Data Visualization", "Financial Modeling", Similarity),
	("Financial Modeling", "DCF Modeling", Similarity),
	("Financial Analysis", "Financial Reporting", Similarity),
	("PowerBI", "Tableau", Similarity),
	("Excel", "Financial Modeling", Similarity),
	("Valuation", "Equity Research", Similarity),
	("Mergers & Acquisitions", "Capital Markets", Similarity),
];

/// The hand-authored career graph, exactly as declared (duplicates included).
pub fn builtin_graph_data() -> GraphData {
	GraphData {
		nodes: NODES
			.iter()
			.map(|&(id, category, sector)| GraphNode::new(id, category, Some(sector)))
			.collect(),
		links: LINKS
			.iter()
			.map(|&(source, target, kind)| GraphLink::new(source, target, kind))
			.collect(),
	}
}

/// A validated, immutable graph: unique node ids and no dangling links.
#[derive(Clone, Debug, PartialEq)]
pub struct CareerGraph {
	nodes: Vec<GraphNode>,
	links: Vec<GraphLink>,
	index: HashMap<String, usize>,
}

impl CareerGraph {
	pub fn load(data: GraphData) -> Result<Self, DatasetError> {
		if data.nodes.is_empty() {
			return Err(DatasetError::Empty);
		}

		let mut nodes: Vec<GraphNode> = Vec::with_capacity(data.nodes.len());
		let mut index = HashMap::with_capacity(data.nodes.len());
		for node in data.nodes {
			match index.get(&node.id) {
				Some(&i) => {
					let existing: &GraphNode = &nodes[i];
					if existing.category != node.category {
						return Err(DatasetError::ConflictingCategory {
							id: node.id,
							first: existing.category,
							second: node.category,
						});
					}
					debug!(
						"merging duplicate node `{}` ({:?} kept, {:?} dropped)",
						node.id, existing.sector, node.sector
					);
				}
				None => {
					index.insert(node.id.clone(), nodes.len());
					nodes.push(node);
				}
			}
		}

		for link in &data.links {
			for end in [&link.source, &link.target] {
				if !index.contains_key(end) {
					return Err(DatasetError::DanglingEdge {
						from: link.source.clone(),
						to: link.target.clone(),
						missing: end.clone(),
					});
				}
			}
		}

		Ok(Self {
			nodes,
			links: data.links,
			index,
		})
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn links(&self) -> &[GraphLink] {
		&self.links
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}
}
