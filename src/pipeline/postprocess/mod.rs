//! 后处理链 - 从最终分析衍生摘要、关键词、关系图与追问

use crate::config::LLMConfig;
use crate::error::PipelineError;
use crate::i18n::TargetLanguage;
use crate::llm::client::{GenerationClient, StructuredOutcome};
use crate::pipeline::state::RunTracker;
use crate::types::Document;

pub mod graph;
pub mod questions;
pub mod summary;

pub use summary::SummaryAndKeywords;

/// 三步后处理链，每步严格依赖前一步的结果。
/// 第一步失败致命；第二步自愈（回退到平凡图）；第三步仅调用失败时致命。
pub struct PostProcessChain<'a> {
    client: &'a dyn GenerationClient,
    tracker: &'a RunTracker,
    config: &'a LLMConfig,
    language: TargetLanguage,
}

impl<'a> PostProcessChain<'a> {
    pub fn new(
        client: &'a dyn GenerationClient,
        tracker: &'a RunTracker,
        config: &'a LLMConfig,
        language: TargetLanguage,
    ) -> Self {
        Self {
            client,
            tracker,
            config,
            language,
        }
    }

    /// 按序执行三个步骤，失败时标记运行失败并中止
    pub async fn run(
        &self,
        final_output: &str,
        doc_a: &Document,
        doc_b: &Document,
    ) -> Result<(), PipelineError> {
        println!("📊 后处理：摘要与关键词提取...");
        let SummaryAndKeywords { summary, keywords } = self
            .summarize(final_output, doc_a, doc_b)
            .await
            .inspect_err(|e| eprintln!("❌ 摘要提取失败: {}", e))?;
        self.tracker
            .set_summary_and_keywords(summary.clone(), keywords.clone())
            .await;

        // Step B runs only when Step A yielded at least one keyword
        if !keywords.is_empty() {
            println!("📊 后处理：构建关键词关系图...");
            let graph = graph::build_keyword_graph(
                self.client,
                self.config,
                self.language,
                &keywords,
                &summary,
            )
            .await;
            self.tracker.set_graph(graph).await;
        }

        println!("📊 后处理：生成追问问题...");
        let follow_ups = questions::generate_follow_ups(
            self.client,
            self.config,
            self.language,
            &summary,
        )
        .await
        .map_err(|e| {
            let error = PipelineError::Generation {
                stage: "follow-up questions".to_string(),
                source: e,
            };
            eprintln!("❌ 追问生成失败: {}", error);
            error
        })?;
        self.tracker.set_follow_ups(follow_ups).await;

        Ok(())
    }

    /// 第一步：致命语义——调用失败与结构违例都中止整条链
    async fn summarize(
        &self,
        final_output: &str,
        doc_a: &Document,
        doc_b: &Document,
    ) -> Result<SummaryAndKeywords, PipelineError> {
        let outcome = summary::summarize_and_extract(
            self.client,
            self.config,
            self.language,
            final_output,
            doc_a,
            doc_b,
        )
        .await;

        match outcome {
            StructuredOutcome::Valid(value) => Ok(value),
            StructuredOutcome::SchemaViolation { reason, .. } => {
                Err(PipelineError::MalformedResponse {
                    stage: "summary and keywords".to_string(),
                    reason,
                })
            }
            StructuredOutcome::CallFailed(e) => Err(PipelineError::Generation {
                stage: "summary and keywords".to_string(),
                source: e,
            }),
        }
    }
}
