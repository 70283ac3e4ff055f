use serde::{Deserialize, Serialize};

/// 目标语言类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::English => write!(f, "en"),
            TargetLanguage::Chinese => write!(f, "zh"),
        }
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" | "英文" => Ok(TargetLanguage::English),
            "zh" | "zh_tw" | "chinese" | "中文" => Ok(TargetLanguage::Chinese),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}

impl TargetLanguage {
    /// 获取语言的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Chinese => "中文",
        }
    }

    /// 附加到提示词末尾的响应语言指令。
    /// 英语是模型的默认输出语言，返回None以保持提示词与固定模板逐字节一致。
    pub fn prompt_instruction(&self) -> Option<&'static str> {
        match self {
            TargetLanguage::English => None,
            TargetLanguage::Chinese => {
                Some("请使用中文撰写全部分析内容，确保语言表达准确、专业、易于理解。")
            }
        }
    }

    /// 将语言指令拼接到系统提示词后（若有）
    pub fn apply_to(&self, prompt: &str) -> String {
        match self.prompt_instruction() {
            Some(instruction) => format!("{}\n\n{}", prompt, instruction),
            None => prompt.to_string(),
        }
    }
}
