//! Agent Component
//!
//! An agent's histories are append-only: `activations[t]` and `actions[t]`
//! describe timestep `t` and are never rewritten once recorded.

use uuid::Uuid;

use super::ids::{AgentId, BehaviourId, BeliefId};

/// Activation per belief, indexed by `BeliefId`. Values stay within [-1, 1].
pub type ActivationSnapshot = Vec<f64>;

#[derive(Debug, Clone)]
pub struct Agent {
    pub uuid: Uuid,
    /// Social ties sorted by friend uuid. Populated in the second linking phase.
    pub friends: Vec<(AgentId, f64)>,
    /// Persistence coefficient per belief
    pub deltas: Vec<f64>,
    /// `performance[belief][behaviour]`: contribution of a belief's activation
    /// to a behaviour's score
    pub performance: Vec<Vec<f64>>,
    activations: Vec<ActivationSnapshot>,
    actions: Vec<BehaviourId>,
}

impl Agent {
    /// Create an agent without friends. Tables must already be dense.
    pub fn new(
        uuid: Uuid,
        deltas: Vec<f64>,
        performance: Vec<Vec<f64>>,
        activations: Vec<ActivationSnapshot>,
        actions: Vec<BehaviourId>,
    ) -> Self {
        Self {
            uuid,
            friends: Vec::new(),
            deltas,
            performance,
            activations,
            actions,
        }
    }

    pub fn delta(&self, belief: BeliefId) -> f64 {
        self.deltas[belief.index()]
    }

    pub fn performance(&self, belief: BeliefId, behaviour: BehaviourId) -> f64 {
        self.performance[belief.index()][behaviour.index()]
    }

    pub fn activations_at(&self, time: usize) -> Option<&[f64]> {
        self.activations.get(time).map(Vec::as_slice)
    }

    pub fn action_at(&self, time: usize) -> Option<BehaviourId> {
        self.actions.get(time).copied()
    }

    pub fn activation_history(&self) -> &[ActivationSnapshot] {
        &self.activations
    }

    pub fn action_history(&self) -> &[BehaviourId] {
        &self.actions
    }

    /// Record the snapshot for the next timestep
    pub fn push_activations(&mut self, snapshot: ActivationSnapshot) {
        self.activations.push(snapshot);
    }

    /// Record the chosen behaviour for the next timestep
    pub fn push_action(&mut self, behaviour: BehaviourId) {
        self.actions.push(behaviour);
    }
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Agent {}

impl std::hash::Hash for Agent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_agent() -> Agent {
        Agent::new(
            Uuid::from_u128(1),
            vec![0.5, 0.9],
            vec![vec![1.0, -1.0], vec![0.2, 0.3]],
            vec![vec![0.1, -0.2]],
            vec![BehaviourId(1)],
        )
    }

    #[test]
    fn test_history_access() {
        let mut agent = sample_agent();
        assert_eq!(agent.activations_at(0), Some(&[0.1, -0.2][..]));
        assert!(agent.activations_at(1).is_none());

        agent.push_activations(vec![0.3, 0.4]);
        agent.push_action(BehaviourId(0));

        assert_eq!(agent.activations_at(1), Some(&[0.3, 0.4][..]));
        assert_eq!(agent.action_at(1), Some(BehaviourId(0)));
        assert_eq!(agent.action_history().len(), 2);
    }

    #[test]
    fn test_tables() {
        let agent = sample_agent();
        assert_eq!(agent.delta(BeliefId(1)), 0.9);
        assert_eq!(agent.performance(BeliefId(0), BehaviourId(1)), -1.0);
    }

    #[test]
    fn test_identity_equality() {
        let mut a = sample_agent();
        let b = sample_agent();
        a.friends.push((AgentId(3), 1.0));
        a.push_action(BehaviourId(0));

        assert_eq!(a, b);
    }
}
