//! 生成调用的请求与结果类型

use serde::Serialize;

use crate::agents::AgentDefinition;
use crate::config::LLMConfig;
use crate::error::GenerationError;
use crate::llm::client::utils::reasoning_budget;

/// 一次文本生成调用的参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// 模型内部推理的token预算提示，仅对fast/flash族模型设置
    pub reasoning_budget: Option<u32>,
}

impl GenerationRequest {
    /// 按Agent定义构建请求，附带推理预算策略
    pub fn for_agent(agent: &AgentDefinition, prompt: String) -> Self {
        Self {
            model: agent.model.clone(),
            prompt,
            temperature: agent.temperature,
            max_tokens: agent.max_tokens,
            reasoning_budget: reasoning_budget(&agent.model, agent.max_tokens),
        }
    }

    /// 按全局LLM配置构建请求（后处理链等非Agent调用）
    pub fn with_config(model: impl Into<String>, prompt: String, config: &LLMConfig) -> Self {
        Self {
            model: model.into(),
            prompt,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            reasoning_budget: None,
        }
    }
}

/// 结构化生成调用的三态结果。
/// 各消费方依据自身策略处理：致命中止、平凡图回退或逐行解析回退。
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredOutcome<T> {
    /// 响应通过结构校验
    Valid(T),
    /// 收到响应但不符合期望结构
    SchemaViolation { raw: String, reason: String },
    /// 调用本身失败
    CallFailed(GenerationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flash_agent() -> AgentDefinition {
        AgentDefinition {
            name: "Fast".to_string(),
            description: String::new(),
            system_prompt: "prompt".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            max_tokens: 1500,
        }
    }

    #[test]
    fn test_for_agent_applies_budget_policy() {
        let request = GenerationRequest::for_agent(&flash_agent(), "task".to_string());
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 1500);
        assert_eq!(request.reasoning_budget, Some(375));
    }

    #[test]
    fn test_for_agent_skips_budget_for_pro_models() {
        let mut agent = flash_agent();
        agent.model = "gemini-2.5-pro".to_string();
        let request = GenerationRequest::for_agent(&agent, "task".to_string());
        assert_eq!(request.reasoning_budget, None);
    }

    #[test]
    fn test_with_config_never_sets_budget() {
        let config = LLMConfig::default();
        let request =
            GenerationRequest::with_config("gemini-2.5-flash", "prompt".to_string(), &config);
        assert_eq!(request.reasoning_budget, None);
        assert_eq!(request.temperature, config.temperature);
    }
}
