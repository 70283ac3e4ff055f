//! LLM模块 - 生成服务接入

pub mod client;
