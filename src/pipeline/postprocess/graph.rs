//! 后处理第二步：关键词关系图构建

use crate::config::LLMConfig;
use crate::i18n::TargetLanguage;
use crate::llm::client::{GenerationClient, GenerationRequest, StructuredOutcome, extract};
use crate::types::GraphData;
use crate::utils::truncate_chars;

/// 摘要作为图构建上下文时的截断长度（按字符计）
pub const SUMMARY_CONTEXT_CHARS: usize = 4000;

/// 构建第二步的提示词：给定摘要与完整关键词列表，要求找出5-10条最重要的关联
pub fn build_prompt(keywords: &[String], summary: &str) -> String {
    format!(
        "You are a knowledge graph builder. Given the summary of a document comparison \
         and the list of extracted keywords, identify the 5-10 most significant \
         relationships between the keywords.\n\n\
         Summary:\n{}\n\n\
         Keywords:\n{}",
        truncate_chars(summary, SUMMARY_CONTEXT_CHARS),
        keywords.join(", ")
    )
}

/// 执行第二步。
/// 关键词少于2个时直接返回平凡图，不发起生成调用；
/// 任何调用失败或结构违例都回退到平凡图，本步骤从不向上传播错误。
/// 有效响应中缺失的关键词会被并入为孤立节点。
pub async fn build_keyword_graph(
    client: &dyn GenerationClient,
    config: &LLMConfig,
    language: TargetLanguage,
    keywords: &[String],
    summary: &str,
) -> GraphData {
    if keywords.len() < 2 {
        return GraphData::trivial(keywords);
    }

    let prompt = language.apply_to(&build_prompt(keywords, summary));
    let request = GenerationRequest::with_config(config.model_efficient.clone(), prompt, config);

    match extract::<GraphData>(client, &request).await {
        StructuredOutcome::Valid(mut graph) => {
            graph.ensure_nodes(keywords);
            graph
        }
        StructuredOutcome::SchemaViolation { reason, .. } => {
            eprintln!("⚠️ 关系图响应结构无效（{}），回退到平凡图", reason);
            GraphData::trivial(keywords)
        }
        StructuredOutcome::CallFailed(e) => {
            eprintln!("⚠️ 关系图生成调用失败（{}），回退到平凡图", e);
            GraphData::trivial(keywords)
        }
    }
}
