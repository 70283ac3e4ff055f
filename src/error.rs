use thiserror::Error;

/// 生成服务调用错误（网络、鉴权、配额、服务端故障等）
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct GenerationError {
    pub message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 流水线执行错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// 前置校验失败，未发起任何生成调用
    #[error("validation failed: {0}")]
    Validation(String),

    /// 已有运行在进行中，拒绝并发执行
    #[error("a run is already in progress")]
    RunInProgress,

    /// 某个阶段的生成调用失败
    #[error("generation failed at {stage}: {source}")]
    Generation {
        stage: String,
        #[source]
        source: GenerationError,
    },

    /// 结构化响应不符合期望结构，且该阶段没有恢复路径
    #[error("malformed structured response at {stage}: {reason}")]
    MalformedResponse { stage: String, reason: String },
}

impl PipelineError {
    /// 写入Run.error_message的单条文案
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Agent花名册编辑校验错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("agent index {0} is out of bounds")]
    IndexOutOfBounds(usize),

    #[error("active agent count must be within 1..={max}, got {requested}")]
    InvalidActiveCount { requested: usize, max: usize },

    #[error("agent name must not be blank")]
    BlankName,

    #[error("duplicate agent name: {0}")]
    DuplicateName(String),

    #[error("temperature must be within [0, 1], got {0}")]
    TemperatureOutOfRange(f64),

    #[error("max_tokens must be at least 1")]
    ZeroMaxTokens,

    #[error("agent roster is locked while a run is in progress")]
    LockedByRun,
}
