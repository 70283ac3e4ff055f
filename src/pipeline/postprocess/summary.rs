//! 后处理第一步：整体摘要与关键词提取

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::LLMConfig;
use crate::i18n::TargetLanguage;
use crate::llm::client::{GenerationClient, GenerationRequest, StructuredOutcome, extract};
use crate::types::Document;
use crate::utils::truncate_chars;

/// 原始文档作为辅助上下文时的截断长度（按字符计）
pub const DOCUMENT_CONTEXT_CHARS: usize = 2000;

/// 提取的关键词数量上限
pub const KEYWORD_CAP: usize = 20;

/// 第一步的结构化响应：Markdown摘要 + 关键词列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryAndKeywords {
    pub summary: String,
    pub keywords: Vec<String>,
}

/// 构建第一步的提示词。
/// 两篇原始文档各截取前2000字符作为辅助上下文，分析全文不截断。
pub fn build_prompt(final_output: &str, doc_a: &Document, doc_b: &Document) -> String {
    format!(
        "Based on the following analysis of two documents, perform two tasks:\n\
         1. Write a comprehensive, well-structured summary of the entire analysis in Markdown format.\n\
         2. Extract the top {} most relevant keywords from the analysis.\n\n\
         Original Document A:\n{}\n\n\
         Original Document B:\n{}\n\n\
         Agent Analysis:\n{}",
        KEYWORD_CAP,
        truncate_chars(&doc_a.content, DOCUMENT_CONTEXT_CHARS),
        truncate_chars(&doc_b.content, DOCUMENT_CONTEXT_CHARS),
        final_output
    )
}

/// 发起第一步的结构化调用。
/// 本步骤没有恢复路径，调用失败与结构违例均由调用方作致命处理。
pub async fn summarize_and_extract(
    client: &dyn GenerationClient,
    config: &LLMConfig,
    language: TargetLanguage,
    final_output: &str,
    doc_a: &Document,
    doc_b: &Document,
) -> StructuredOutcome<SummaryAndKeywords> {
    let prompt = language.apply_to(&build_prompt(final_output, doc_a, doc_b));
    let request = GenerationRequest::with_config(config.model_powerful.clone(), prompt, config);
    extract::<SummaryAndKeywords>(client, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentSlot;

    #[test]
    fn test_prompt_contains_full_analysis_and_keyword_cap() {
        let a = Document::from_text(DocumentSlot::A, "alpha");
        let b = Document::from_text(DocumentSlot::B, "beta");
        let analysis = "x".repeat(5000);

        let prompt = build_prompt(&analysis, &a, &b);
        assert!(prompt.contains("top 20 most relevant keywords"));
        // The analysis text is never truncated
        assert!(prompt.contains(&analysis));
        assert!(prompt.contains("Original Document A:\nalpha"));
        assert!(prompt.contains("Original Document B:\nbeta"));
    }

    #[test]
    fn test_prompt_truncates_documents_to_2000_chars() {
        let long_a = "a".repeat(2500);
        let a = Document::from_text(DocumentSlot::A, long_a);
        let b = Document::from_text(DocumentSlot::B, "short");

        let prompt = build_prompt("analysis", &a, &b);
        assert!(prompt.contains(&"a".repeat(2000)));
        assert!(!prompt.contains(&"a".repeat(2001)));
    }

    #[test]
    fn test_response_shape_deserializes() {
        let parsed: SummaryAndKeywords =
            serde_json::from_str(r###"{"summary": "## Findings", "keywords": ["k1", "k2"]}"###)
                .unwrap();
        assert_eq!(parsed.summary, "## Findings");
        assert_eq!(parsed.keywords, vec!["k1".to_string(), "k2".to_string()]);
    }
}
