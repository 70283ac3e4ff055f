//! LLM客户端 - 提供统一的生成服务接口

use anyhow::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::config::LLMConfig;
use crate::error::GenerationError;
use crate::utils::strip_code_fences;

mod providers;
pub mod types;
pub mod utils;

use providers::ProviderClient;
pub use types::{GenerationRequest, StructuredOutcome};

/// 文本生成能力的统一接口。
/// 核心流水线只依赖此trait，真实provider与测试桩均通过它接入。
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// 自由文本生成
    async fn generate_text(&self, request: &GenerationRequest)
    -> Result<String, GenerationError>;

    /// 结构化生成：要求模型返回符合schema的JSON，返回原始响应文本。
    /// 结构约束是生成服务的尽力而为契约，各调用方自行解析并决定回退策略。
    async fn generate_structured(
        &self,
        request: &GenerationRequest,
        schema: &Value,
    ) -> Result<String, GenerationError>;
}

/// 发起一次结构化调用并按目标类型分类结果
pub async fn extract<T>(
    client: &dyn GenerationClient,
    request: &GenerationRequest,
) -> StructuredOutcome<T>
where
    T: JsonSchema + for<'a> Deserialize<'a>,
{
    let schema = match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(schema) => schema,
        Err(e) => {
            return StructuredOutcome::CallFailed(GenerationError::new(format!(
                "failed to build response schema: {}",
                e
            )));
        }
    };

    match client.generate_structured(request, &schema).await {
        Err(e) => StructuredOutcome::CallFailed(e),
        Ok(raw) => match serde_json::from_str::<T>(strip_code_fences(&raw)) {
            Ok(value) => StructuredOutcome::Valid(value),
            Err(e) => StructuredOutcome::SchemaViolation {
                raw,
                reason: e.to_string(),
            },
        },
    }
}

/// 基于rig的生成服务客户端
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(config)?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        let request = GenerationRequest::with_config(
            self.config.model_efficient.clone(),
            "Hello".to_string(),
            &self.config,
        );
        match self.generate_text(&request).await {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e.into())
            }
        }
    }

    async fn prompt_once(
        &self,
        request: &GenerationRequest,
        json_response: bool,
    ) -> Result<String, GenerationError> {
        let agent = self.client.create_agent(request, json_response);
        agent
            .prompt(&request.prompt)
            .await
            .map_err(|e| GenerationError::new(e.to_string()))
    }
}

#[async_trait]
impl GenerationClient for LLMClient {
    async fn generate_text(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        self.prompt_once(request, false).await
    }

    async fn generate_structured(
        &self,
        request: &GenerationRequest,
        schema: &Value,
    ) -> Result<String, GenerationError> {
        let constrained = GenerationRequest {
            prompt: format!(
                "{}\n\nReturn ONLY a single JSON value that conforms to the following JSON schema, with no extra commentary:\n{}",
                request.prompt, schema
            ),
            ..request.clone()
        };
        self.prompt_once(&constrained, true).await
    }
}
