//! 执行状态跟踪 - 记录一次比较运行的全部可观测状态

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::PipelineError;
use crate::pipeline::context::ContextLog;
use crate::types::GraphData;

/// 运行状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    #[default]
    Idle,
    RunningAgents,
    RunningPostprocess,
    Done,
    Failed,
}

impl RunStatus {
    /// 是否处于运行中（代理阶段或后处理阶段）
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::RunningAgents | RunStatus::RunningPostprocess)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::RunningAgents => write!(f, "running_agents"),
            RunStatus::RunningPostprocess => write!(f, "running_postprocess"),
            RunStatus::Done => write!(f, "done"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

/// 单个代理的产出记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRecord {
    pub name: String,
    pub output: String,
}

/// 一次比较运行的完整状态快照
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Run {
    /// 当前状态
    pub status: RunStatus,

    /// 正在执行的代理下标（仅代理阶段有值）
    pub active_agent: Option<usize>,

    /// 按执行顺序排列的代理产出，未执行到的位置为空
    pub agent_outputs: Vec<Option<AgentRecord>>,

    /// 累积共享上下文
    pub context: ContextLog,

    /// 最后一个代理的产出，即流水线的最终分析
    pub final_output: Option<String>,

    /// 后处理：整体摘要
    pub summary: Option<String>,

    /// 后处理：关键词列表
    pub keywords: Vec<String>,

    /// 后处理：关键词关系图
    pub graph: Option<GraphData>,

    /// 后处理：追问问题列表
    pub follow_up_questions: Vec<String>,

    /// 失败时的错误描述
    pub error_message: Option<String>,
}

/// 运行状态跟踪器。
/// 内部以读写锁保护单个Run，所有状态迁移都在一次写锁内完成，
/// 观察者在任意时刻取得的快照都是一致的。
#[derive(Clone, Default)]
pub struct RunTracker {
    inner: Arc<RwLock<Run>>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取当前运行状态的一致快照
    pub async fn snapshot(&self) -> Run {
        self.inner.read().await.clone()
    }

    pub async fn status(&self) -> RunStatus {
        self.inner.read().await.status
    }

    /// 渲染当前共享上下文文本
    pub async fn context_text(&self) -> String {
        self.inner.read().await.context.render()
    }

    /// 尝试开始新的运行。检查与初始化在同一次写锁内完成，
    /// 并发调用时至多一个成功，其余得到RunInProgress。
    pub async fn try_begin(
        &self,
        agent_count: usize,
        context: ContextLog,
    ) -> Result<(), PipelineError> {
        let mut run = self.inner.write().await;
        if run.status.is_running() {
            return Err(PipelineError::RunInProgress);
        }
        *run = Run {
            status: RunStatus::RunningAgents,
            agent_outputs: vec![None; agent_count],
            context,
            ..Run::default()
        };
        Ok(())
    }

    /// 标记当前正在执行的代理
    pub async fn set_active_agent(&self, index: usize) {
        let mut run = self.inner.write().await;
        run.active_agent = Some(index);
    }

    /// 记录一个代理的产出。产出槽位写入与上下文追加在同一次迁移内完成。
    pub async fn record_agent_output(&self, index: usize, agent_name: &str, output: &str) {
        let mut run = self.inner.write().await;
        if let Some(slot) = run.agent_outputs.get_mut(index) {
            *slot = Some(AgentRecord {
                name: agent_name.to_string(),
                output: output.to_string(),
            });
        }
        run.context.append_analysis(agent_name, output);
    }

    /// 代理阶段结束，进入后处理阶段
    pub async fn begin_postprocess(&self, final_output: &str) {
        let mut run = self.inner.write().await;
        run.status = RunStatus::RunningPostprocess;
        run.active_agent = None;
        run.final_output = Some(final_output.to_string());
    }

    /// 记录后处理第一步的摘要与关键词（同一次迁移）
    pub async fn set_summary_and_keywords(&self, summary: String, keywords: Vec<String>) {
        let mut run = self.inner.write().await;
        run.summary = Some(summary);
        run.keywords = keywords;
    }

    /// 记录后处理第二步的关系图
    pub async fn set_graph(&self, graph: GraphData) {
        let mut run = self.inner.write().await;
        run.graph = Some(graph);
    }

    /// 记录后处理第三步的追问问题
    pub async fn set_follow_ups(&self, questions: Vec<String>) {
        let mut run = self.inner.write().await;
        run.follow_up_questions = questions;
    }

    /// 运行成功结束
    pub async fn complete(&self) {
        let mut run = self.inner.write().await;
        run.status = RunStatus::Done;
        run.active_agent = None;
    }

    /// 运行失败，保留已产出的部分结果供诊断
    pub async fn fail(&self, message: String) {
        let mut run = self.inner.write().await;
        run.status = RunStatus::Failed;
        run.active_agent = None;
        run.error_message = Some(message);
    }

    /// 重置为初始空闲状态，清空上一次运行的全部结果
    pub async fn reset(&self) {
        let mut run = self.inner.write().await;
        *run = Run::default();
    }
}
