/*!
The split/backtrack search.

# Overview

At each node of the search:
1. If every active clause is satisfied, the node succeeds.
2. If some active clause is empty, the node fails.
   The conflict was found by the parent of the node, and so the node makes no update to conflict scores.
3. Units are propagated, and the node succeeds if every active clause is now satisfied.
4. An atom is chosen by the [selector](crate::heuristics::VariableSelector), and the atom is decided true.
   Units are propagated, and the search descends to a child node.
5. If the true branch fails, every mutation made since the decision is undone and the atom is decided false, with the same steps as the true branch.
6. If both branches fail, or no atom could be chosen, the node fails and the backtrack is counted.
   If the selector learns from conflicts, each conflict found by propagation at the node (including propagation immediately after a decision) is scored.

A conflict found by propagation at step 3 skips the split, and the node fails as in step 6.

As the second branch starts from the trail mark taken before the first decision, the second branch observes exactly the state observed by the first.

# Branches

Open splits are kept on an explicit stack of [branches](Branch), rather than on the call stack.
So, the depth of a search is limited by memory, and not by the stack of the calling thread.

# Limits

The depth of search is bounded by the [depth limit](crate::config::Config::depth_limit) of the configuration, and exceeding the bound is an error.
If a deadline is set, the deadline is checked on entry to each node.
*/

use crate::{
    context::GenericContext,
    formula::ClauseKey,
    heuristics::VariableSelector,
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err::{self, ErrorKind},
};

/// An open split.
struct Branch {
    /// The atom split on.
    atom: Atom,

    /// The polarity of the branch being explored.
    polarity: bool,

    /// The trail mark taken before the decision of the branch.
    mark: usize,

    /// The depth of the node of the split.
    depth: usize,

    /// Conflicts found at the node of the split.
    conflicts: Vec<ClauseKey>,
}

/// The outcome of entering a node.
enum Node {
    Satisfied,
    Failed,
    Split(Branch),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Searches for a satisfying valuation of the formula of the context, guided by `selector`.
    ///
    /// Returns true if a valuation was found, in which case the valuation is left on the formula.
    /// Otherwise, returns false with the formula as it was after the propagation of the first node.
    pub fn splitting<S: VariableSelector + ?Sized>(
        &mut self,
        selector: &mut S,
        depth: usize,
    ) -> Result<bool, ErrorKind> {
        let mut branches: Vec<Branch> = Vec::default();
        let mut node_depth = depth;

        'search_loop: loop {
            match self.enter_node(selector, node_depth)? {
                Node::Satisfied => return Ok(true),

                Node::Failed => {}

                Node::Split(mut branch) => {
                    self.take_branch(&mut branch)?;
                    node_depth = branch.depth + 1;
                    branches.push(branch);
                    continue 'search_loop;
                }
            }

            loop {
                let Some(branch) = branches.last_mut() else {
                    return Ok(false);
                };

                self.formula.backtrack_to(branch.mark);

                if branch.polarity {
                    branch.polarity = false;
                    self.take_branch(branch)?;
                    node_depth = branch.depth + 1;
                    continue 'search_loop;
                }

                if let Some(branch) = branches.pop() {
                    self.fail_node(selector, branch.depth, &branch.conflicts);
                }
            }
        }
    }

    /// Checks and propagates on entry to a node, and chooses an atom to split on, if needed.
    fn enter_node<S: VariableSelector + ?Sized>(
        &mut self,
        selector: &mut S,
        depth: usize,
    ) -> Result<Node, ErrorKind> {
        if self.formula.is_satisfied() {
            return Ok(Node::Satisfied);
        }
        if !self.formula.is_consistent() {
            return Ok(Node::Failed);
        }

        self.check_limits(depth)?;

        let mut conflicts: Vec<ClauseKey> = Vec::default();
        self.propagate(&mut conflicts)?;

        if self.formula.is_satisfied() {
            return Ok(Node::Satisfied);
        }

        let choice = match self.formula.is_consistent() {
            true => {
                let candidates = self.formula.unvalued_atoms().collect::<Vec<_>>();
                selector.select(&self.formula, &candidates)
            }
            false => None,
        };

        match choice {
            Some(atom) => {
                self.counters.splits += 1;
                Ok(Node::Split(Branch {
                    atom,
                    polarity: true,
                    mark: 0,
                    depth,
                    conflicts,
                }))
            }

            None => {
                self.fail_node(selector, depth, &conflicts);
                Ok(Node::Failed)
            }
        }
    }

    /// Marks the trail, then decides the atom of the branch with the polarity of the branch and propagates.
    fn take_branch(&mut self, branch: &mut Branch) -> Result<(), ErrorKind> {
        branch.mark = self.formula.trail_mark();

        log::trace!(target: targets::SEARCH, "Decision {} = {} at depth {}", branch.atom, branch.polarity, branch.depth);
        self.formula.decide(branch.atom, branch.polarity)?;
        self.propagate(&mut branch.conflicts)
    }

    /// Counts a backtrack from a node, and scores the conflicts of the node if the selector learns.
    fn fail_node<S: VariableSelector + ?Sized>(&mut self, selector: &S, depth: usize, conflicts: &[ClauseKey]) {
        self.counters.backtracks += 1;
        log::trace!(target: targets::SEARCH, "Backtrack from depth {depth} with {} conflicts", conflicts.len());

        if selector.learns_from_conflicts() && !conflicts.is_empty() {
            self.formula.score_conflicts(
                conflicts,
                self.config.vsids_bump.value,
                self.config.vsids_decay.value,
            );
        }
    }

    /// Propagates units, updates counters, and moves any conflicts found to `node_conflicts`.
    fn propagate(&mut self, node_conflicts: &mut Vec<ClauseKey>) -> Result<(), ErrorKind> {
        let valued = self.formula.propagate_units()?;
        self.counters.unit_propagations += valued;
        self.counters.conflicts += self.formula.conflicts.len();
        node_conflicts.append(&mut self.formula.conflicts);
        Ok(())
    }

    fn check_limits(&self, depth: usize) -> Result<(), ErrorKind> {
        if depth > self.config.depth_limit.value {
            log::warn!(target: targets::SEARCH, "Depth limit of {} exceeded", self.config.depth_limit.value);
            return Err(err::SearchError::DepthExhausted(depth).into());
        }

        if let Some(deadline) = self.deadline {
            if std::time::Instant::now() >= deadline {
                return Err(err::SearchError::TimeUp.into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        formula::Formula,
        heuristics::{MomSelector, VariableSelector, VsidsSelector},
        structures::atom::Atom,
        types::err::{self, ErrorKind},
    };

    /// Always chooses the first candidate, and records every choice.
    #[derive(Default)]
    struct FirstCandidate {
        choices: Vec<Atom>,
    }

    impl VariableSelector for FirstCandidate {
        fn select(&mut self, _formula: &Formula, candidates: &[Atom]) -> Option<Atom> {
            let choice = candidates.first().copied();
            if let Some(atom) = choice {
                self.choices.push(atom);
            }
            choice
        }
    }

    /// Always chooses the last candidate.
    struct LastCandidate;

    impl VariableSelector for LastCandidate {
        fn select(&mut self, _formula: &Formula, candidates: &[Atom]) -> Option<Atom> {
            candidates.last().copied()
        }
    }

    /// Never chooses.
    struct NoChoice;

    impl VariableSelector for NoChoice {
        fn select(&mut self, _formula: &Formula, _candidates: &[Atom]) -> Option<Atom> {
            None
        }
    }

    /// Disjoint binary clauses, so a decision on the last candidate satisfies at most one clause.
    fn disjoint_pairs(pairs: i32) -> Vec<Vec<i32>> {
        (0..pairs).map(|k| vec![2 * k + 1, 2 * k + 2]).collect()
    }

    fn context(clauses: Vec<Vec<i32>>, bound: Atom) -> Context {
        Context::from_formula(Config::default(), Formula::new(clauses, bound).unwrap())
    }

    #[test]
    fn satisfiable_by_split() {
        let mut the_context = context(vec![vec![1, 2], vec![-1, 2], vec![1, -2]], 2);
        let mut selector = FirstCandidate::default();

        assert_eq!(the_context.splitting(&mut selector, 0), Ok(true));
        assert_eq!(the_context.value_of(1), Some(true));
        assert_eq!(the_context.value_of(2), Some(true));
        assert_eq!(the_context.counters.splits, 1);
        assert_eq!(the_context.counters.backtracks, 0);
    }

    #[test]
    fn false_branch_after_failure() {
        // 1 true forces a conflict on 2.
        let mut the_context = context(vec![vec![-1, 2], vec![-1, -2], vec![1, 3]], 3);
        let mut selector = FirstCandidate::default();

        assert_eq!(the_context.splitting(&mut selector, 0), Ok(true));
        assert_eq!(the_context.value_of(1), Some(false));
        assert_eq!(the_context.value_of(3), Some(true));
        assert_eq!(selector.choices, vec![1]);
        assert_eq!(the_context.counters.conflicts, 1);
    }

    #[test]
    fn unsatisfiable_after_both_branches() {
        let mut the_context = context(vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]], 2);

        assert_eq!(the_context.splitting(&mut MomSelector::new(), 0), Ok(false));
        assert!(the_context.counters.backtracks >= 1);
        assert!(the_context.counters.conflicts >= 2);
    }

    #[test]
    fn conflicts_are_scored_on_backtrack() {
        let mut the_context = context(vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]], 2);

        assert_eq!(the_context.splitting(&mut VsidsSelector::new(), 0), Ok(false));
        assert!(the_context.formula.scores.score_of(2) > 0.0);
    }

    #[test]
    fn single_conflict_bumps_then_decays_once() {
        let mut the_context = context(vec![vec![1, 2], vec![-1], vec![-2]], 2);

        assert_eq!(the_context.splitting(&mut VsidsSelector::new(), 0), Ok(false));
        assert_eq!(the_context.counters.backtracks, 1);
        assert_eq!(the_context.counters.conflicts, 1);

        let expected = 1.0 * 0.95;
        assert_eq!(the_context.formula.scores.score_of(1), expected);
        assert_eq!(the_context.formula.scores.score_of(2), expected);
    }

    #[test]
    fn no_choice_fails_the_node() {
        let mut the_context = context(vec![vec![1, 2], vec![-1, -2]], 2);

        assert_eq!(the_context.splitting(&mut NoChoice, 0), Ok(false));
        assert_eq!(the_context.counters.splits, 0);
        assert_eq!(the_context.counters.backtracks, 1);
        assert_eq!(the_context.value_of(1), None);
        assert_eq!(the_context.value_of(2), None);
    }

    #[test]
    fn depth_is_bounded() {
        let mut config = Config::default();
        config.depth_limit.value = 1;
        let mut the_context = Context::from_formula(config, Formula::new(disjoint_pairs(4), 8).unwrap());

        assert_eq!(
            the_context.splitting(&mut LastCandidate, 0),
            Err(ErrorKind::Search(err::SearchError::DepthExhausted(2)))
        );
    }

    #[test]
    fn deep_search_on_a_small_stack() {
        let small_stack = 2 * 1024 * 1024;

        let deep = std::thread::Builder::new()
            .stack_size(small_stack)
            .spawn(|| {
                let mut the_context = context(disjoint_pairs(3000), 6000);
                let found = the_context.splitting(&mut LastCandidate, 0);
                (found, the_context.counters.splits)
            })
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(deep.0, Ok(true));
        assert!(deep.1 >= 3000);

        let bounded = std::thread::Builder::new()
            .stack_size(small_stack)
            .spawn(|| {
                let mut config = Config::default();
                config.depth_limit.value = 1000;
                let mut the_context =
                    Context::from_formula(config, Formula::new(disjoint_pairs(3000), 6000).unwrap());
                the_context.splitting(&mut LastCandidate, 0)
            })
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(
            bounded,
            Err(ErrorKind::Search(err::SearchError::DepthExhausted(1001)))
        );
    }
}
