//! 报告出口 - 将完成的运行渲染为Markdown报告

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::pipeline::state::Run;
use crate::types::GraphData;

/// 保存运行结果
pub fn save(config: &Config, run: &Run) -> Result<()> {
    let outlet = DiskOutlet::new(config.output_path.clone(), config.export_json);
    outlet.save(run)
}

pub trait Outlet {
    fn save(&self, run: &Run) -> Result<()>;
}

/// 磁盘出口：输出目录下写report.md，可选附带run.json
pub struct DiskOutlet {
    output_path: PathBuf,
    export_json: bool,
}

impl DiskOutlet {
    pub fn new(output_path: PathBuf, export_json: bool) -> Self {
        Self {
            output_path,
            export_json,
        }
    }
}

impl Outlet for DiskOutlet {
    fn save(&self, run: &Run) -> Result<()> {
        println!("\n🖊️ 报告存储中...");
        if self.output_path.exists() {
            fs::remove_dir_all(&self.output_path)
                .with_context(|| format!("Failed to clear {}", self.output_path.display()))?;
        }
        fs::create_dir_all(&self.output_path)
            .with_context(|| format!("Failed to create {}", self.output_path.display()))?;

        let report_path = self.output_path.join("report.md");
        fs::write(&report_path, render_report(run))
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        println!("💾 已保存报告: {}", report_path.display());

        if self.export_json {
            let json_path = self.output_path.join("run.json");
            let serialized =
                serde_json::to_string_pretty(run).context("Failed to serialize run state")?;
            fs::write(&json_path, serialized)
                .with_context(|| format!("Failed to write {}", json_path.display()))?;
            println!("💾 已保存运行状态: {}", json_path.display());
        }

        println!("💾 报告保存完成，输出目录: {}", self.output_path.display());
        Ok(())
    }
}

/// 渲染完整的Markdown报告
pub fn render_report(run: &Run) -> String {
    let mut report = String::new();
    report.push_str("# Document Comparison Report\n\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    report.push_str("## Summary\n\n");
    match &run.summary {
        Some(summary) => report.push_str(&format!("{}\n\n", summary)),
        None => report.push_str("_No summary was produced._\n\n"),
    }

    if !run.keywords.is_empty() {
        report.push_str("## Keywords\n\n");
        for keyword in &run.keywords {
            report.push_str(&format!("- {}\n", keyword));
        }
        report.push('\n');
    }

    if let Some(graph) = &run.graph {
        report.push_str("## Keyword Relationships\n\n");
        report.push_str(&render_mermaid(graph));
        report.push('\n');
    }

    if !run.follow_up_questions.is_empty() {
        report.push_str("## Follow-up Questions\n\n");
        for (index, question) in run.follow_up_questions.iter().enumerate() {
            report.push_str(&format!("{}. {}\n", index + 1, question));
        }
        report.push('\n');
    }

    report.push_str("## Appendix: Agent Analyses\n\n");
    for record in run.agent_outputs.iter().flatten() {
        report.push_str(&format!("### {}\n\n{}\n\n", record.name, record.output));
    }

    report
}

/// 将关系图渲染为mermaid代码块。
/// 节点id映射为n{i}以规避mermaid的标识符限制；端点不在节点集内的连线跳过。
pub fn render_mermaid(graph: &GraphData) -> String {
    let mut block = String::from("```mermaid\ngraph LR\n");

    let index_of = |id: &str| graph.nodes.iter().position(|node| node.id == id);
    for (index, node) in graph.nodes.iter().enumerate() {
        block.push_str(&format!("    n{}[\"{}\"]\n", index, node.id.replace('"', "'")));
    }
    for link in &graph.links {
        if let (Some(source), Some(target)) = (index_of(&link.source), index_of(&link.target)) {
            block.push_str(&format!("    n{} --- n{}\n", source, target));
        }
    }

    block.push_str("```\n");
    block
}
