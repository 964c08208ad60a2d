//! Frequentist Agent
//!
//! An agent that learns, from a bounded window of its own experience, how
//! often it meets each (production, offered) situation and how often
//! accepting leaves it holding something other than its production good
//! once the period is over. When offered a good it neither
//! produces nor consumes, it compares the value of keeping its production
//! good with the value of holding the offered good as a medium of exchange:
//!
//! ```text
//! v(g) = u - storing_cost[g] / (acceptance(g, C) * encounter(g, C))
//! ```
//!
//! where `C` is its consumption good. A zero denominator means "no evidence"
//! and gives `v = 0`. Both values are squashed and fed to a softmax, and the
//! agent draws its answer from the resulting probabilities.

use money_events::{AgentRole, Good};
use rand::Rng;

use super::agent::Trader;
use super::beliefs::PairEstimates;
use crate::config::CognitiveParameters;
use crate::systems::choice::{softmax, squash, weighted_choice};

/// The last decision, kept until the end-of-period learning step.
#[derive(Debug, Clone, Copy)]
struct PendingTrade {
    offered: Good,
    accepted: bool,
}

#[derive(Debug, Clone)]
pub struct AdaptiveAgent {
    role: AgentRole,
    held: Good,
    consumed: bool,
    storing_costs: Vec<f64>,
    params: CognitiveParameters,
    encounters: PairEstimates,
    acceptances: PairEstimates,
    pending: Option<PendingTrade>,
}

impl AdaptiveAgent {
    pub fn new(role: AgentRole, storing_costs: Vec<f64>, params: CognitiveParameters) -> Self {
        let n_goods = storing_costs.len();
        Self {
            role,
            held: role.production,
            consumed: false,
            storing_costs,
            params,
            encounters: PairEstimates::new(n_goods, params.memory_span),
            acceptances: PairEstimates::new(n_goods, params.memory_span),
            pending: None,
        }
    }

    /// Learned frequency of being offered `to` while producing `from`.
    pub fn encounter_rate(&self, from: Good, to: Good) -> f64 {
        self.encounters.rate(from, to)
    }

    /// Learned frequency that accepting `to` while producing `from` left the
    /// agent holding something other than `from` after consumption.
    pub fn acceptance_rate(&self, from: Good, to: Good) -> f64 {
        self.acceptances.rate(from, to)
    }

    pub fn encounter_history_len(&self, from: Good, to: Good) -> usize {
        self.encounters.history_len(from, to)
    }

    pub fn acceptance_history_len(&self, from: Good, to: Good) -> usize {
        self.acceptances.history_len(from, to)
    }

    /// Expected net payoff of holding `good` while waiting to trade it for
    /// the consumption good.
    pub fn holding_value(&self, good: Good) -> f64 {
        let consumption = self.role.consumption;
        let success = self.acceptances.rate(good, consumption) * self.encounters.rate(good, consumption);
        if success > 0.0 {
            let cost = self.storing_costs.get(good.index()).copied().unwrap_or(0.0);
            self.params.u - cost / success
        } else {
            0.0
        }
    }

    /// Probabilities of `[refuse, accept]` for a medium-of-exchange offer.
    pub fn medium_probabilities(&self, offered: Good) -> [f64; 2] {
        let keep = squash(self.holding_value(self.role.production));
        let take = squash(self.holding_value(offered));
        let probs = softmax(&[keep, take], self.params.temp);
        [probs[0], probs[1]]
    }

    fn accept_medium<R: Rng + ?Sized>(&self, offered: Good, rng: &mut R) -> bool {
        weighted_choice(rng, &self.medium_probabilities(offered)) == 1
    }

    fn learn_from_encounter(&mut self, offered: Good) {
        self.encounters
            .observe_exclusive((self.role.production, offered));
    }

    /// Runs after consumption: a trade that ended in consumption has already
    /// returned the agent to its production good and counts as a failure.
    fn learn_from_result(&mut self) {
        let Some(trade) = self.pending.take() else {
            return;
        };
        if !trade.accepted {
            return;
        }
        let production = self.role.production;
        let successful = self.held != production;
        self.acceptances.observe(production, trade.offered, successful);
    }
}

impl Trader for AdaptiveAgent {
    fn role(&self) -> AgentRole {
        self.role
    }

    fn held_good(&self) -> Good {
        self.held
    }

    fn consumed(&self) -> bool {
        self.consumed
    }

    fn decide<R: Rng + ?Sized>(&mut self, offered: Good, rng: &mut R) -> bool {
        let accepted = if offered == self.role.consumption {
            true
        } else if offered == self.role.production {
            false
        } else {
            self.accept_medium(offered, rng)
        };

        self.pending = Some(PendingTrade { offered, accepted });
        self.learn_from_encounter(offered);

        accepted
    }

    fn record_exchange(&mut self, new_good: Good) {
        self.held = new_good;
    }

    fn consume(&mut self) -> bool {
        self.consumed = self.held == self.role.consumption;
        if self.consumed {
            self.held = self.role.production;
        }
        self.learn_from_result();
        self.consumed
    }
}
