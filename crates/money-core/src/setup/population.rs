//! Population Setup
//!
//! Builds the fixed set of agents from the role repartition. Agents are
//! created role by role, so the agents of role `i` occupy a contiguous block
//! of indices.

use std::ops::{Index, IndexMut};

use money_events::{AgentRole, Good};

use crate::components::{Agent, Trader};
use crate::config::EconomyConfig;

#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
    role_counts: Vec<usize>,
}

impl Population {
    /// Spawn every agent of a validated configuration, holding its production good.
    pub fn new(config: &EconomyConfig) -> Self {
        let n_goods = config.n_goods();
        let mut agents = Vec::with_capacity(config.n_agents());

        for (role_index, &count) in config.repartition_of_roles.iter().enumerate() {
            let role = AgentRole::cyclic(role_index, n_goods);
            for _ in 0..count {
                agents.push(Agent::new(
                    config.agent_model,
                    role,
                    &config.storing_costs,
                    config.cognitive_parameters,
                ));
            }
        }

        Self {
            agents,
            role_counts: config.repartition_of_roles.clone(),
        }
    }

    pub fn n_goods(&self) -> usize {
        self.role_counts.len()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of agents whose consumption good is `consumption`.
    pub fn role_count(&self, consumption: Good) -> usize {
        self.role_counts.get(consumption.index()).copied().unwrap_or(0)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    /// Held good of every agent, by index.
    pub fn holdings(&self) -> Vec<Good> {
        self.agents.iter().map(|agent| agent.held_good()).collect()
    }
}

impl Index<usize> for Population {
    type Output = Agent;

    fn index(&self, index: usize) -> &Agent {
        &self.agents[index]
    }
}

impl IndexMut<usize> for Population {
    fn index_mut(&mut self, index: usize) -> &mut Agent {
        &mut self.agents[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentModel;

    fn config() -> EconomyConfig {
        EconomyConfig {
            repartition_of_roles: vec![2, 3, 1],
            storing_costs: vec![0.01, 0.04, 0.09],
            ..EconomyConfig::default()
        }
    }

    #[test]
    fn test_population_follows_repartition() {
        let population = Population::new(&config());
        assert_eq!(population.len(), 6);
        assert_eq!(population.n_goods(), 3);
        assert_eq!(population.role_count(Good(1)), 3);
        assert_eq!(population.role_count(Good(7)), 0);

        let consumption: Vec<usize> = population
            .agents()
            .iter()
            .map(|a| a.consumption_good().index())
            .collect();
        assert_eq!(consumption, vec![0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_agents_hold_their_production() {
        let population = Population::new(&config());
        for agent in population.agents() {
            assert_eq!(agent.held_good(), agent.production_good());
            assert_ne!(agent.production_good(), agent.consumption_good());
            assert_eq!(agent.model(), AgentModel::Frequentist);
        }
    }

    #[test]
    #[should_panic]
    fn test_indexing_past_the_population_panics() {
        let population = Population::new(&config());
        let _ = population[6].held_good();
    }
}
