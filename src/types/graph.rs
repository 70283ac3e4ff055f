use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 关键词关系图中的一个节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphNode {
    pub id: String,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// 两个关键词之间的一条关联
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// 关键词关系图。节点集合唯一；连线允许重复或自环，仅语义上无意义，不作拒绝。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphData {
    /// 平凡图：每个关键词一个孤立节点，无连线
    pub fn trivial(keywords: &[String]) -> Self {
        let mut graph = GraphData::default();
        graph.ensure_nodes(keywords);
        graph
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// 将缺失的关键词并入为孤立节点，保证结果覆盖全部输入关键词
    pub fn ensure_nodes(&mut self, keywords: &[String]) {
        for keyword in keywords {
            if !self.contains_node(keyword) {
                self.nodes.push(GraphNode::new(keyword.clone()));
            }
        }
    }
}
