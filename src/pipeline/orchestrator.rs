//! 流水线编排器 - 按顺序驱动激活的Agent子集

use crate::agents::AgentDefinition;
use crate::error::PipelineError;
use crate::i18n::TargetLanguage;
use crate::llm::client::{GenerationClient, GenerationRequest};
use crate::pipeline::context::ContextLog;
use crate::pipeline::state::RunTracker;
use crate::types::Document;

/// 流水线编排器。
/// 对冻结的Agent快照逐个发起生成调用，每个Agent的提示词包含
/// 此前全部Agent的产出；任何一次调用失败都会立即中止整个运行。
pub struct PipelineOrchestrator<'a> {
    client: &'a dyn GenerationClient,
    tracker: &'a RunTracker,
    language: TargetLanguage,
    verbose: bool,
}

impl<'a> PipelineOrchestrator<'a> {
    pub fn new(
        client: &'a dyn GenerationClient,
        tracker: &'a RunTracker,
        language: TargetLanguage,
        verbose: bool,
    ) -> Self {
        Self {
            client,
            tracker,
            language,
            verbose,
        }
    }

    /// 执行激活的Agent子集，返回最后一个Agent的产出。
    /// 进入守卫与初始化由tracker.try_begin原子完成；前置校验失败时
    /// 不发起任何生成调用。
    pub async fn run(
        &self,
        doc_a: &Document,
        doc_b: &Document,
        agents: &[AgentDefinition],
    ) -> Result<String, PipelineError> {
        let context = ContextLog::for_documents(doc_a, doc_b);
        self.tracker.try_begin(agents.len(), context).await?;

        if let Err(e) = validate_inputs(doc_a, doc_b, agents) {
            self.tracker.fail(e.user_message()).await;
            return Err(e);
        }

        println!("🚀 开始执行文档对比流水线（{}个代理）...", agents.len());

        let mut final_output = String::new();
        for (index, agent) in agents.iter().enumerate() {
            self.tracker.set_active_agent(index).await;
            println!("🤖 [{}/{}] {} 分析中...", index + 1, agents.len(), agent.name);

            let prompt = self.build_prompt(agent).await;
            let request = GenerationRequest::for_agent(agent, prompt);
            if self.verbose {
                println!(
                    "  📝 提示词 {} 字符，温度 {}，推理预算 {:?}",
                    request.prompt.chars().count(),
                    request.temperature,
                    request.reasoning_budget
                );
            }

            match self.client.generate_text(&request).await {
                Ok(output) => {
                    self.tracker
                        .record_agent_output(index, &agent.name, &output)
                        .await;
                    println!("✓ {} 分析完成", agent.name);
                    final_output = output;
                }
                Err(e) => {
                    let error = PipelineError::Generation {
                        stage: agent.name.clone(),
                        source: e,
                    };
                    eprintln!("❌ {} 分析失败: {}", agent.name, error);
                    self.tracker.fail(error.user_message()).await;
                    return Err(error);
                }
            }
        }

        self.tracker.begin_postprocess(&final_output).await;
        Ok(final_output)
    }

    /// 系统提示词 + 当前累积上下文的任务段
    async fn build_prompt(&self, agent: &AgentDefinition) -> String {
        let system_prompt = self.language.apply_to(&agent.system_prompt);
        format!(
            "{}\n\nTask:\n{}",
            system_prompt,
            self.tracker.context_text().await
        )
    }
}

/// §4.1前置校验：两篇文档去空白后非空，且至少有一个激活Agent
fn validate_inputs(
    doc_a: &Document,
    doc_b: &Document,
    agents: &[AgentDefinition],
) -> Result<(), PipelineError> {
    for doc in [doc_a, doc_b] {
        if doc.is_blank() {
            return Err(PipelineError::Validation(format!(
                "{} is blank",
                doc.slot
            )));
        }
    }
    if agents.is_empty() {
        return Err(PipelineError::Validation(
            "no active agents configured".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentSlot;

    fn agent(name: &str) -> AgentDefinition {
        AgentDefinition {
            name: name.to_string(),
            description: String::new(),
            system_prompt: "Analyze.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            max_tokens: 1000,
        }
    }

    #[test]
    fn test_validate_rejects_blank_documents() {
        let blank = Document::from_text(DocumentSlot::A, "   \n");
        let filled = Document::from_text(DocumentSlot::B, "text");
        let agents = vec![agent("One")];

        let error = validate_inputs(&blank, &filled, &agents).unwrap_err();
        assert!(matches!(error, PipelineError::Validation(_)));
        assert!(error.to_string().contains("Document A"));

        let blank_b = Document::from_text(DocumentSlot::B, "");
        let filled_a = Document::from_text(DocumentSlot::A, "text");
        let error = validate_inputs(&filled_a, &blank_b, &agents).unwrap_err();
        assert!(error.to_string().contains("Document B"));
    }

    #[test]
    fn test_validate_rejects_empty_roster() {
        let a = Document::from_text(DocumentSlot::A, "a");
        let b = Document::from_text(DocumentSlot::B, "b");
        let error = validate_inputs(&a, &b, &[]).unwrap_err();
        assert!(matches!(error, PipelineError::Validation(_)));
    }

    #[test]
    fn test_validate_accepts_filled_inputs() {
        let a = Document::from_text(DocumentSlot::A, "a");
        let b = Document::from_text(DocumentSlot::B, "b");
        assert!(validate_inputs(&a, &b, &[agent("One")]).is_ok());
    }
}
