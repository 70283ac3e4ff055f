//! 文档对比流水线

use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::ingest;
use crate::llm::client::LLMClient;
use crate::outlet;
use crate::session::ComparisonSession;
use crate::types::DocumentSlot;

pub mod context;
pub mod orchestrator;
pub mod postprocess;
pub mod state;

/// 启动文档对比工作流
pub async fn launch(config: &Config) -> Result<()> {
    let client = Arc::new(LLMClient::new(&config.llm)?);

    // 启动时检查模型连接
    client.check_connection().await?;

    let doc_a = ingest::load_document(DocumentSlot::A, &config.input_a)?;
    let doc_b = ingest::load_document(DocumentSlot::B, &config.input_b)?;

    let session = ComparisonSession::new(client, config)?;
    let run = session.execute(&doc_a, &doc_b).await?;

    outlet::save(config, &run)?;

    if let Some(summary) = &run.summary {
        println!("\n📋 摘要预览:\n{}", summary);
    }
    if !run.follow_up_questions.is_empty() {
        println!("\n❓ 建议追问:");
        for question in &run.follow_up_questions {
            println!("  - {}", question);
        }
    }

    Ok(())
}
