//! Agent Components
//!
//! The capability every trading agent offers the market, and the closed set
//! of agent models a population can be made of.

use money_events::{AgentRole, Good};
use rand::Rng;

use super::adaptive::AdaptiveAgent;
use super::random::RandomAgent;
use crate::config::{AgentModel, CognitiveParameters};

/// What the market needs from an agent.
pub trait Trader {
    fn role(&self) -> AgentRole;

    fn held_good(&self) -> Good;

    /// Whether the agent consumed at the end of the last period
    fn consumed(&self) -> bool;

    /// Would the agent give its held good for `offered`?
    fn decide<R: Rng + ?Sized>(&mut self, offered: Good, rng: &mut R) -> bool;

    /// Both sides agreed: the agent now holds `new_good`.
    fn record_exchange(&mut self, new_good: Good);

    /// End of period: consume if holding the consumption good, then learn.
    /// Returns whether the agent consumed.
    fn consume(&mut self) -> bool;

    fn production_good(&self) -> Good {
        self.role().production
    }

    fn consumption_good(&self) -> Good {
        self.role().consumption
    }
}

/// A member of the population.
#[derive(Debug, Clone)]
pub enum Agent {
    Frequentist(AdaptiveAgent),
    Random(RandomAgent),
}

impl Agent {
    pub fn new(
        model: AgentModel,
        role: AgentRole,
        storing_costs: &[f64],
        params: CognitiveParameters,
    ) -> Self {
        match model {
            AgentModel::Frequentist => {
                Agent::Frequentist(AdaptiveAgent::new(role, storing_costs.to_vec(), params))
            }
            AgentModel::Random => Agent::Random(RandomAgent::new(role)),
        }
    }

    pub fn model(&self) -> AgentModel {
        match self {
            Agent::Frequentist(_) => AgentModel::Frequentist,
            Agent::Random(_) => AgentModel::Random,
        }
    }
}

impl Trader for Agent {
    fn role(&self) -> AgentRole {
        match self {
            Agent::Frequentist(agent) => agent.role(),
            Agent::Random(agent) => agent.role(),
        }
    }

    fn held_good(&self) -> Good {
        match self {
            Agent::Frequentist(agent) => agent.held_good(),
            Agent::Random(agent) => agent.held_good(),
        }
    }

    fn consumed(&self) -> bool {
        match self {
            Agent::Frequentist(agent) => agent.consumed(),
            Agent::Random(agent) => agent.consumed(),
        }
    }

    fn decide<R: Rng + ?Sized>(&mut self, offered: Good, rng: &mut R) -> bool {
        match self {
            Agent::Frequentist(agent) => agent.decide(offered, rng),
            Agent::Random(agent) => agent.decide(offered, rng),
        }
    }

    fn record_exchange(&mut self, new_good: Good) {
        match self {
            Agent::Frequentist(agent) => agent.record_exchange(new_good),
            Agent::Random(agent) => agent.record_exchange(new_good),
        }
    }

    fn consume(&mut self) -> bool {
        match self {
            Agent::Frequentist(agent) => agent.consume(),
            Agent::Random(agent) => agent.consume(),
        }
    }
}
