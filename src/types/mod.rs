//! 核心数据契约

pub mod document;
pub mod graph;

pub use document::{Document, DocumentSlot, SourceKind};
pub use graph::{GraphData, GraphLink, GraphNode};
