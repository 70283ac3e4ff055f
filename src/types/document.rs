use serde::{Deserialize, Serialize};

/// 文档槽位，对应固定的两份输入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSlot {
    A,
    B,
}

impl DocumentSlot {
    /// 提示词模板中使用的标签
    pub fn label(&self) -> &'static str {
        match self {
            DocumentSlot::A => "A",
            DocumentSlot::B => "B",
        }
    }

    /// 文档编号（1或2）
    pub fn number(&self) -> u8 {
        match self {
            DocumentSlot::A => 1,
            DocumentSlot::B => 2,
        }
    }
}

impl std::fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document {}", self.label())
    }
}

/// 文档来源类型，仅作记录，不影响编排
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    #[default]
    PlainText,
    Markdown,
    Json,
    Pdf,
}

impl SourceKind {
    /// 根据文件扩展名归类，未知扩展名按纯文本处理
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "md" | "markdown" => SourceKind::Markdown,
            "json" => SourceKind::Json,
            "pdf" => SourceKind::Pdf,
            _ => SourceKind::PlainText,
        }
    }
}

/// 一份待对比的输入文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub slot: DocumentSlot,
    pub content: String,
    pub source_kind: SourceKind,
}

impl Document {
    pub fn new(slot: DocumentSlot, content: impl Into<String>, source_kind: SourceKind) -> Self {
        Self {
            slot,
            content: content.into(),
            source_kind,
        }
    }

    /// 以纯文本构造（粘贴文本、OCR结果等外部来源）
    pub fn from_text(slot: DocumentSlot, content: impl Into<String>) -> Self {
        Self::new(slot, content, SourceKind::PlainText)
    }

    /// 去除空白后内容是否为空
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
