//! 后处理第三步：追问问题生成

use serde_json::Value;

use crate::config::LLMConfig;
use crate::error::GenerationError;
use crate::i18n::TargetLanguage;
use crate::llm::client::{GenerationClient, GenerationRequest};
use crate::utils::strip_code_fences;

/// 构建第三步的提示词：基于摘要生成3-5个有洞察力的追问
pub fn build_prompt(summary: &str) -> String {
    format!(
        "Based on the following summary of a document comparison, generate 3-5 insightful \
         follow-up questions that a user might have. These questions should prompt deeper \
         investigation or clarification. Return only a simple JSON array of strings.\n\n\
         Summary:\n{}",
        summary
    )
}

/// 执行第三步。
/// 主解析路径：响应按JSON数组解析，成功即返回（空数组也算成功）。
/// 回退路径：仅在解析失败时按行拆分，剥离行首的"- "并丢弃空行。
/// 调用本身失败时向上传播。
pub async fn generate_follow_ups(
    client: &dyn GenerationClient,
    config: &LLMConfig,
    language: TargetLanguage,
    summary: &str,
) -> Result<Vec<String>, GenerationError> {
    let prompt = language.apply_to(&build_prompt(summary));
    let request = GenerationRequest::with_config(config.model_efficient.clone(), prompt, config);

    let schema = serde_json::to_value(schemars::schema_for!(Vec<String>))
        .map_err(|e| GenerationError::new(format!("failed to build response schema: {}", e)))?;
    let raw = client.generate_structured(&request, &schema).await?;

    Ok(parse_questions(&raw))
}

/// 双路径解析：JSON数组优先，失败后逐行回退
pub fn parse_questions(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(strip_code_fences(raw)) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        // Parsed, but not an array: nothing usable to salvage
        Ok(_) => Vec::new(),
        Err(_) => raw
            .lines()
            .map(|line| line.strip_prefix("- ").unwrap_or(line))
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect(),
    }
}
