use crate::config::{Config, LLMProvider};
use crate::i18n::TargetLanguage;
use clap::Parser;
use std::path::PathBuf;

/// docpair-rs - 由Rust与AI驱动的文档对比分析引擎
#[derive(Parser, Debug)]
#[command(name = "docpair-rs")]
#[command(
    about = "Agentic document comparison engine. Runs a pair of documents through a configurable pipeline of LLM agents and derives a summary, keywords, a keyword relationship graph and follow-up questions."
)]
#[command(version)]
pub struct Args {
    /// 文档A路径
    pub input_a: Option<PathBuf>,

    /// 文档B路径
    pub input_b: Option<PathBuf>,

    /// 输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 激活的代理数量
    #[arg(short, long)]
    pub agents: Option<usize>,

    /// 是否同时导出运行状态JSON
    #[arg(long)]
    pub export_json: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 高能效模型，用于常规分析与后处理任务
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于复杂推理任务
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// LLM Provider (openai, anthropic, gemini, deepseek, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// 目标语言 (en, zh)
    #[arg(long)]
    pub target_language: Option<String>,
}

impl Args {
    /// 将CLI参数转换为配置：先加载配置文件（或默认值），再逐项应用CLI覆盖
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|e| {
                eprintln!(
                    "⚠️ 警告: 无法读取配置文件 {:?}（{}），使用默认配置",
                    config_path, e
                );
                Config::default()
            })
        } else {
            // 尝试从当前目录的默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("docpair.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|e| {
                    eprintln!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}（{}），使用默认配置",
                        default_config_path, e
                    );
                    Config::default()
                })
            } else {
                Config::default()
            }
        };

        // 文档路径：CLI位置参数优先
        if let Some(input_a) = self.input_a {
            config.input_a = input_a;
        }
        if let Some(input_b) = self.input_b {
            config.input_b = input_b;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model_efficient) = self.model_efficient {
            config.llm.model_efficient = model_efficient;
        }
        if let Some(model_powerful) = self.model_powerful {
            config.llm.model_powerful = model_powerful;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 目标语言配置
        if let Some(target_language_str) = self.target_language {
            if let Ok(target_language) = target_language_str.parse::<TargetLanguage>() {
                config.target_language = target_language;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的目标语言: {}，使用默认语言 (English)",
                    target_language_str
                );
            }
        }

        // 其他配置
        if let Some(agents) = self.agents {
            config.active_agents = Some(agents);
        }
        if self.export_json {
            config.export_json = true;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}
