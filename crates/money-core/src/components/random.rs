//! Random Agent
//!
//! Baseline without learning: takes its consumption good whenever offered,
//! and flips a fair coin for anything else.

use money_events::{AgentRole, Good};
use rand::Rng;

use super::agent::Trader;

#[derive(Debug, Clone)]
pub struct RandomAgent {
    role: AgentRole,
    held: Good,
    consumed: bool,
}

impl RandomAgent {
    pub fn new(role: AgentRole) -> Self {
        Self {
            role,
            held: role.production,
            consumed: false,
        }
    }
}

impl Trader for RandomAgent {
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
        offered == self.role.consumption || rng.gen_bool(0.5)
    }

    fn record_exchange(&mut self, new_good: Good) {
        self.held = new_good;
    }

    fn consume(&mut self) -> bool {
        self.consumed = self.held == self.role.consumption;
        if self.consumed {
            self.held = self.role.production;
        }
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_always_accepts_consumption_good() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agent = RandomAgent::new(AgentRole::cyclic(0, 3));
        for _ in 0..100 {
            assert!(agent.decide(Good(0), &mut rng));
        }
    }

    #[test]
    fn test_coin_flip_otherwise() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut agent = RandomAgent::new(AgentRole::cyclic(0, 3));
        let accepted = (0..10_000).filter(|_| agent.decide(Good(2), &mut rng)).count();
        assert!((4_500..5_500).contains(&accepted), "accepted {} of 10000", accepted);
    }

    #[test]
    fn test_consume_resets_to_production() {
        let mut agent = RandomAgent::new(AgentRole::cyclic(0, 3));
        assert!(!agent.consume());
        assert_eq!(agent.held_good(), Good(1));

        agent.record_exchange(Good(0));
        assert!(agent.consume());
        assert!(agent.consumed());
        assert_eq!(agent.held_good(), Good(1));
    }
}
