//! 共享上下文 - 流水线各代理间传递的累积分析记录

use serde::{Deserialize, Serialize};

use crate::types::Document;

/// 共享上下文中的一段内容
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContextSegment {
    /// 初始段：两篇文档的原文
    Documents { doc_a: String, doc_b: String },
    /// 单个代理产出的分析
    AgentAnalysis { agent_name: String, output: String },
}

/// 累积共享上下文。
/// 只追加不修改，渲染时按固定模板拼接全部片段。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContextLog {
    segments: Vec<ContextSegment>,
}

impl ContextLog {
    /// 以两篇文档初始化上下文
    pub fn for_documents(doc_a: &Document, doc_b: &Document) -> Self {
        Self {
            segments: vec![ContextSegment::Documents {
                doc_a: doc_a.content.clone(),
                doc_b: doc_b.content.clone(),
            }],
        }
    }

    /// 追加一个代理的分析结果
    pub fn append_analysis(&mut self, agent_name: &str, output: &str) {
        self.segments.push(ContextSegment::AgentAnalysis {
            agent_name: agent_name.to_string(),
            output: output.to_string(),
        });
    }

    /// 渲染当前上下文的完整文本。
    /// 相同片段序列始终产出相同文本，任何代理输出均原样保留。
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                ContextSegment::Documents { doc_a, doc_b } => {
                    rendered.push_str(&format!(
                        "Document A:\n---\n{}\n---\n\nDocument B:\n---\n{}\n---",
                        doc_a, doc_b
                    ));
                }
                ContextSegment::AgentAnalysis { agent_name, output } => {
                    rendered.push_str(&format!(
                        "\n\n--- Analysis from {} ---\n{}",
                        agent_name, output
                    ));
                }
            }
        }
        rendered
    }

    pub fn segments(&self) -> &[ContextSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
