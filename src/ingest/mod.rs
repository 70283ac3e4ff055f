//! 文档摄取 - 核心外部的输入协作方

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::types::{Document, DocumentSlot, SourceKind};

/// 从文件加载一篇文档。
/// 按扩展名归类sourceKind；pdf需要OCR提取，不在支持范围内，直接拒绝。
/// 空白内容校验属于核心的前置校验，不在摄取阶段做。
pub fn load_document(slot: DocumentSlot, path: &Path) -> Result<Document> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let source_kind = SourceKind::from_extension(extension);

    if source_kind == SourceKind::Pdf {
        bail!(
            "pdf input is not supported ({}): extract the text first and supply it as .txt or .md",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} from {}", slot, path.display()))?;

    println!("📄 已读取{}: {}（{} 字符）", slot, path.display(), content.chars().count());
    Ok(Document::new(slot, content, source_kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_plain_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "plain content").unwrap();

        let doc = load_document(DocumentSlot::A, &path).unwrap();
        assert_eq!(doc.slot, DocumentSlot::A);
        assert_eq!(doc.content, "plain content");
        assert_eq!(doc.source_kind, SourceKind::PlainText);
    }

    #[test]
    fn test_load_classifies_markdown_and_json() {
        let dir = TempDir::new().unwrap();
        let md = dir.path().join("b.md");
        std::fs::write(&md, "# heading").unwrap();
        let json = dir.path().join("b.json");
        std::fs::write(&json, "{}").unwrap();

        assert_eq!(
            load_document(DocumentSlot::B, &md).unwrap().source_kind,
            SourceKind::Markdown
        );
        assert_eq!(
            load_document(DocumentSlot::B, &json).unwrap().source_kind,
            SourceKind::Json
        );
    }

    #[test]
    fn test_load_unknown_extension_is_plain_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.log");
        std::fs::write(&path, "log line").unwrap();

        let doc = load_document(DocumentSlot::A, &path).unwrap();
        assert_eq!(doc.source_kind, SourceKind::PlainText);
    }

    #[test]
    fn test_load_rejects_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, "%PDF-1.4").unwrap();

        let error = load_document(DocumentSlot::A, &path).unwrap_err();
        assert!(error.to_string().contains("pdf"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_document(DocumentSlot::A, Path::new("/nonexistent/a.txt"));
        assert!(result.is_err());
    }
}
