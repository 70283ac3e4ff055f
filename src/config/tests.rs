#[cfg(test)]
mod tests {
    use crate::config::{Config, LLMConfig, LLMProvider};
    use crate::i18n::TargetLanguage;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.input_a, PathBuf::new());
        assert_eq!(config.input_b, PathBuf::new());
        assert_eq!(config.output_path, PathBuf::from("./docpair.report"));
        assert_eq!(config.target_language, TargetLanguage::English);
        assert!(config.active_agents.is_none());
        assert!(config.agents.is_empty());
        assert!(!config.export_json);
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::Gemini);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "gemini".parse::<LLMProvider>().unwrap(),
            LLMProvider::Gemini
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );
        assert_eq!(
            "GEMINI".parse::<LLMProvider>().unwrap(),
            LLMProvider::Gemini
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Gemini.to_string(), "gemini");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::Gemini);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert_eq!(config.model_efficient, "gemini-2.5-flash");
        assert_eq!(config.model_powerful, "gemini-2.5-pro");
        assert_eq!(config.max_tokens, 8192);
        assert_eq!(config.temperature, 0.1);
    }

    #[test]
    fn test_from_file_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("docpair.toml");

        let content = r#"input_a = "./a.md"
input_b = "./b.md"
target_language = "zh"

[llm]
provider = "openai"
model_powerful = "gpt-4o"
"#;

        std::fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.input_a, PathBuf::from("./a.md"));
        assert_eq!(config.input_b, PathBuf::from("./b.md"));
        assert_eq!(config.target_language, TargetLanguage::Chinese);
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.model_powerful, "gpt-4o");
        // Unspecified fields fall back to defaults
        assert_eq!(config.output_path, PathBuf::from("./docpair.report"));
        assert_eq!(config.llm.model_efficient, "gemini-2.5-flash");
    }

    #[test]
    fn test_from_file_with_agents() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("docpair.toml");

        let content = r#"active_agents = 1

[[agents]]
name = "Fact Checker"
system_prompt = "Verify factual claims in both documents."
model = "gemini-2.5-pro"
temperature = 0.2
max_tokens = 1200

[[agents]]
name = "Style Reviewer"
system_prompt = "Compare the writing style of both documents."
"#;

        std::fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.active_agents, Some(1));
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.agents[0].name, "Fact Checker");
        assert_eq!(config.agents[0].temperature, 0.2);
        assert_eq!(config.agents[0].max_tokens, 1200);
        // Second agent relies on field defaults
        assert_eq!(config.agents[1].model, "gemini-2.5-flash");
        assert_eq!(config.agents[1].temperature, 0.3);
        assert_eq!(config.agents[1].max_tokens, 1500);
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Config::from_file(&PathBuf::from("/nonexistent/docpair.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("docpair.toml");

        std::fs::write(&config_path, "input_a = [unclosed").unwrap();

        let result = Config::from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_fields() {
        let mut config = Config::default();

        config.input_a = PathBuf::from("/docs/a.md");
        config.input_b = PathBuf::from("/docs/b.md");
        config.active_agents = Some(5);
        config.export_json = true;
        config.verbose = true;

        assert_eq!(config.input_a, PathBuf::from("/docs/a.md"));
        assert_eq!(config.input_b, PathBuf::from("/docs/b.md"));
        assert_eq!(config.active_agents, Some(5));
        assert!(config.export_json);
        assert!(config.verbose);
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let mut config = Config::default();
        config.input_a = PathBuf::from("a.txt");
        config.input_b = PathBuf::from("b.txt");
        config.llm.provider = LLMProvider::Anthropic;

        let serialized = toml::to_string(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.input_a, config.input_a);
        assert_eq!(restored.llm.provider, LLMProvider::Anthropic);
    }
}
