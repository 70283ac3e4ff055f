//! 比较会话 - 花名册、跟踪器与生成客户端的聚合门面

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::agents::{AgentDefinition, AgentRoster};
use crate::config::{Config, LLMConfig};
use crate::error::{PipelineError, RosterError};
use crate::i18n::TargetLanguage;
use crate::llm::client::GenerationClient;
use crate::pipeline::orchestrator::PipelineOrchestrator;
use crate::pipeline::postprocess::PostProcessChain;
use crate::pipeline::state::{Run, RunTracker};
use crate::types::Document;

/// 一次文档对比会话。
/// 持有可编辑的花名册与单个运行的跟踪器；运行期间花名册被锁定，
/// 编排器只操作运行开始时冻结的快照。
pub struct ComparisonSession {
    client: Arc<dyn GenerationClient>,
    roster: RwLock<AgentRoster>,
    tracker: RunTracker,
    llm_config: LLMConfig,
    language: TargetLanguage,
    verbose: bool,
}

impl ComparisonSession {
    /// 按配置构建会话。配置了[[agents]]时以其替换内置花名册，
    /// active_agents未设置时取内置默认激活数与花名册长度的较小者。
    pub fn new(client: Arc<dyn GenerationClient>, config: &Config) -> Result<Self, RosterError> {
        let roster = if config.agents.is_empty() {
            let mut roster = AgentRoster::with_defaults();
            if let Some(count) = config.active_agents {
                roster.set_active_count(count)?;
            }
            roster
        } else {
            let active = config
                .active_agents
                .unwrap_or_else(|| crate::agents::DEFAULT_ACTIVE_COUNT.min(config.agents.len()));
            AgentRoster::new(config.agents.clone(), active)?
        };

        Ok(Self {
            client,
            roster: RwLock::new(roster),
            tracker: RunTracker::new(),
            llm_config: config.llm.clone(),
            language: config.target_language,
            verbose: config.verbose,
        })
    }

    pub fn tracker(&self) -> &RunTracker {
        &self.tracker
    }

    /// 当前运行状态的一致快照（§4.3观察通道）
    pub async fn snapshot(&self) -> Run {
        self.tracker.snapshot().await
    }

    /// 原位替换一个花名册条目，运行期间拒绝编辑
    pub async fn update_agent(
        &self,
        index: usize,
        definition: AgentDefinition,
    ) -> Result<(), RosterError> {
        if self.tracker.status().await.is_running() {
            return Err(RosterError::LockedByRun);
        }
        self.roster.write().await.update_agent(index, definition)
    }

    /// 调整激活数量，运行期间拒绝编辑
    pub async fn set_active_count(&self, count: usize) -> Result<(), RosterError> {
        if self.tracker.status().await.is_running() {
            return Err(RosterError::LockedByRun);
        }
        self.roster.write().await.set_active_count(count)
    }

    pub async fn active_count(&self) -> usize {
        self.roster.read().await.active_count()
    }

    /// 执行一次完整运行：冻结快照 → 代理流水线 → 后处理链。
    /// 已有运行在进行中时返回RunInProgress且不影响该运行。
    pub async fn execute(
        &self,
        doc_a: &Document,
        doc_b: &Document,
    ) -> Result<Run, PipelineError> {
        let agents = self.roster.read().await.snapshot();

        let orchestrator = PipelineOrchestrator::new(
            self.client.as_ref(),
            &self.tracker,
            self.language,
            self.verbose,
        );
        let final_output = orchestrator.run(doc_a, doc_b, &agents).await?;

        let chain = PostProcessChain::new(
            self.client.as_ref(),
            &self.tracker,
            &self.llm_config,
            self.language,
        );
        if let Err(e) = chain.run(&final_output, doc_a, doc_b).await {
            self.tracker.fail(e.user_message()).await;
            return Err(e);
        }

        self.tracker.complete().await;
        println!("✅ 文档对比流水线执行完毕");
        Ok(self.tracker.snapshot().await)
    }

    /// 将会话重置为初始空闲状态。幂等；不触碰花名册。
    pub async fn reset(&self) {
        self.tracker.reset().await;
    }
}
