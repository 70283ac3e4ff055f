//! 内置默认Agent花名册

use super::AgentDefinition;

/// 默认激活的Agent数量
pub const DEFAULT_ACTIVE_COUNT: usize = 3;

/// 内置的五个预设Agent，按流水线顺序排列
pub fn default_agents() -> Vec<AgentDefinition> {
    vec![
        AgentDefinition {
            name: "Initial Summarizer".to_string(),
            description: "Extracts key points and themes from each document individually."
                .to_string(),
            system_prompt: "You are an expert analyst. Your task is to concisely summarize the key points, main arguments, and overall tone of each document provided. Do not compare them yet. Present the summaries separately under 'Summary of Document A' and 'Summary of Document B'.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            max_tokens: 1500,
        },
        AgentDefinition {
            name: "Comparison Analyst".to_string(),
            description: "Identifies key similarities and differences between the two documents."
                .to_string(),
            system_prompt: "You are a meticulous comparison analyst. Based on the two documents, identify and list the main points of similarity and difference. Organize your output into two sections: 'Key Similarities' and 'Key Differences'. Be specific and cite examples where possible.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.3,
            max_tokens: 2000,
        },
        AgentDefinition {
            name: "Contradiction Detector".to_string(),
            description: "Pinpoints direct contradictions or conflicting information.".to_string(),
            system_prompt: "You are a critical thinking expert specializing in logical fallacies and contradictions. Your sole purpose is to identify any direct contradictions, conflicting data, or opposing claims between Document A and Document B. If contradictions exist, list them clearly. If there are no contradictions, state 'No direct contradictions were found'.".to_string(),
            model: "gemini-2.5-pro".to_string(),
            temperature: 0.1,
            max_tokens: 1500,
        },
        AgentDefinition {
            name: "Sentiment & Tone Analyzer".to_string(),
            description: "Analyzes and compares the sentiment and underlying tone of the documents."
                .to_string(),
            system_prompt: "As a communications expert, analyze the sentiment (positive, negative, neutral) and the underlying tone (e.g., formal, persuasive, critical, objective) of each document. Then, compare them. Is the tone similar or different? How does this affect the overall message? Present your analysis in a comparative table.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.5,
            max_tokens: 1000,
        },
        AgentDefinition {
            name: "Synthesis & Conclusion Drafter".to_string(),
            description: "Synthesizes the findings into a high-level conclusion.".to_string(),
            system_prompt: "You are a senior strategist. Synthesize the findings from the previous analyses (summaries, comparisons, contradictions). What is the overall relationship between these two documents? Do they support, oppose, or complement each other? Provide a high-level conclusion about their combined implications.".to_string(),
            model: "gemini-2.5-pro".to_string(),
            temperature: 0.6,
            max_tokens: 2000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_agents_ordering_and_models() {
        let agents = default_agents();
        assert_eq!(agents.len(), 5);
        assert!(DEFAULT_ACTIVE_COUNT <= agents.len());

        let names: Vec<&str> = agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Initial Summarizer",
                "Comparison Analyst",
                "Contradiction Detector",
                "Sentiment & Tone Analyzer",
                "Synthesis & Conclusion Drafter",
            ]
        );

        // The flash presets get a derived reasoning budget at call time,
        // so their model strings must carry the family marker
        assert!(agents[0].model.contains("flash"));
        assert!(agents[2].model.contains("pro"));
    }
}
