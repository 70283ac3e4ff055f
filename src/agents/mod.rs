//! Agent花名册 - 可编辑的流水线阶段配置

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::RosterError;

pub mod defaults;

pub use defaults::{DEFAULT_ACTIVE_COUNT, default_agents};

fn default_description() -> String {
    String::new()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> u32 {
    1500
}

/// 单个流水线阶段的Agent配置。
/// description仅用于展示，不会发送给生成服务。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    pub system_prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl AgentDefinition {
    /// 校验单个Agent定义的取值范围
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::BlankName);
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(RosterError::TemperatureOutOfRange(self.temperature));
        }
        if self.max_tokens == 0 {
            return Err(RosterError::ZeroMaxTokens);
        }
        Ok(())
    }
}

/// 有序的Agent花名册与激活数量。
/// 运行开始时编排器通过snapshot()取走激活子集的独立副本，
/// 运行期间对花名册的编辑不会影响进行中的运行。
#[derive(Debug, Clone)]
pub struct AgentRoster {
    agents: Vec<AgentDefinition>,
    active_count: usize,
}

impl AgentRoster {
    /// 从给定定义构建花名册，逐项校验并约束激活数量
    pub fn new(agents: Vec<AgentDefinition>, active_count: usize) -> Result<Self, RosterError> {
        let mut names = HashSet::new();
        for agent in &agents {
            agent.validate()?;
            if !names.insert(agent.name.clone()) {
                return Err(RosterError::DuplicateName(agent.name.clone()));
            }
        }
        if active_count < 1 || active_count > agents.len() {
            return Err(RosterError::InvalidActiveCount {
                requested: active_count,
                max: agents.len(),
            });
        }
        Ok(Self {
            agents,
            active_count,
        })
    }

    /// 内置默认花名册
    pub fn with_defaults() -> Self {
        Self {
            agents: default_agents(),
            active_count: DEFAULT_ACTIVE_COUNT,
        }
    }

    pub fn agents(&self) -> &[AgentDefinition] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// 原位替换一个条目，其余条目保持不变
    pub fn update_agent(
        &mut self,
        index: usize,
        definition: AgentDefinition,
    ) -> Result<(), RosterError> {
        if index >= self.agents.len() {
            return Err(RosterError::IndexOutOfBounds(index));
        }
        definition.validate()?;
        let duplicated = self
            .agents
            .iter()
            .enumerate()
            .any(|(i, agent)| i != index && agent.name == definition.name);
        if duplicated {
            return Err(RosterError::DuplicateName(definition.name));
        }
        self.agents[index] = definition;
        Ok(())
    }

    /// 调整激活数量，约束在 1..=len
    pub fn set_active_count(&mut self, count: usize) -> Result<(), RosterError> {
        if count < 1 || count > self.agents.len() {
            return Err(RosterError::InvalidActiveCount {
                requested: count,
                max: self.agents.len(),
            });
        }
        self.active_count = count;
        Ok(())
    }

    /// 运行开始时冻结的激活子集副本
    pub fn snapshot(&self) -> Vec<AgentDefinition> {
        self.agents[..self.active_count].to_vec()
    }
}

impl Default for AgentRoster {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_agent(name: &str) -> AgentDefinition {
        AgentDefinition {
            name: name.to_string(),
            description: String::new(),
            system_prompt: "You are a test agent.".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            max_tokens: 1000,
        }
    }

    #[test]
    fn test_default_roster_shape() {
        let roster = AgentRoster::with_defaults();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.active_count(), DEFAULT_ACTIVE_COUNT);
        assert_eq!(roster.agents()[0].name, "Initial Summarizer");
        // Built-in presets must themselves pass validation
        for agent in roster.agents() {
            assert!(agent.validate().is_ok());
        }
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = AgentRoster::new(vec![sample_agent("Same"), sample_agent("Same")], 1);
        assert_eq!(
            result.unwrap_err(),
            RosterError::DuplicateName("Same".to_string())
        );
    }

    #[test]
    fn test_new_rejects_bad_active_count() {
        let agents = vec![sample_agent("One"), sample_agent("Two")];
        assert!(matches!(
            AgentRoster::new(agents.clone(), 0),
            Err(RosterError::InvalidActiveCount {
                requested: 0,
                max: 2
            })
        ));
        assert!(matches!(
            AgentRoster::new(agents, 3),
            Err(RosterError::InvalidActiveCount {
                requested: 3,
                max: 2
            })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut agent = sample_agent("  ");
        agent.name = "   ".to_string();
        assert_eq!(agent.validate().unwrap_err(), RosterError::BlankName);
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut agent = sample_agent("Hot");
        agent.temperature = 1.5;
        assert_eq!(
            agent.validate().unwrap_err(),
            RosterError::TemperatureOutOfRange(1.5)
        );
    }

    #[test]
    fn test_validate_rejects_zero_max_tokens() {
        let mut agent = sample_agent("Empty");
        agent.max_tokens = 0;
        assert_eq!(agent.validate().unwrap_err(), RosterError::ZeroMaxTokens);
    }

    #[test]
    fn test_update_agent_replaces_in_place() {
        let mut roster = AgentRoster::with_defaults();
        let mut replacement = sample_agent("Rewritten Analyst");
        replacement.temperature = 0.9;
        roster.update_agent(1, replacement.clone()).unwrap();
        assert_eq!(roster.agents()[1], replacement);
        // Neighbours untouched
        assert_eq!(roster.agents()[0].name, "Initial Summarizer");
        assert_eq!(roster.agents()[2].name, "Contradiction Detector");
    }

    #[test]
    fn test_update_agent_rejects_out_of_bounds() {
        let mut roster = AgentRoster::with_defaults();
        assert_eq!(
            roster.update_agent(99, sample_agent("X")).unwrap_err(),
            RosterError::IndexOutOfBounds(99)
        );
    }

    #[test]
    fn test_update_agent_rejects_name_collision() {
        let mut roster = AgentRoster::with_defaults();
        let clash = sample_agent("Initial Summarizer");
        assert_eq!(
            roster.update_agent(1, clash).unwrap_err(),
            RosterError::DuplicateName("Initial Summarizer".to_string())
        );
    }

    #[test]
    fn test_update_agent_allows_keeping_own_name() {
        let mut roster = AgentRoster::with_defaults();
        let mut same_name = sample_agent("Initial Summarizer");
        same_name.temperature = 0.4;
        assert!(roster.update_agent(0, same_name).is_ok());
    }

    #[test]
    fn test_set_active_count_bounds() {
        let mut roster = AgentRoster::with_defaults();
        roster.set_active_count(5).unwrap();
        assert_eq!(roster.active_count(), 5);
        roster.set_active_count(1).unwrap();
        assert_eq!(roster.active_count(), 1);
        assert!(roster.set_active_count(0).is_err());
        assert!(roster.set_active_count(6).is_err());
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut roster = AgentRoster::with_defaults();
        roster.set_active_count(2).unwrap();
        let snapshot = roster.snapshot();
        assert_eq!(snapshot.len(), 2);

        // Later edits must not leak into the snapshot
        let mut edited = sample_agent("Edited");
        edited.system_prompt = "changed".to_string();
        roster.update_agent(0, edited).unwrap();
        assert_eq!(snapshot[0].name, "Initial Summarizer");
    }
}
