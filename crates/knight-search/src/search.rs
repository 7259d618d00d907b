//! Breadth-first shortest path search.
//!
//! The engine is problem-agnostic: it only sees states through a
//! [`SearchProblem`], which supplies the goal test and the successor
//! function. Every transition costs the same, so a FIFO frontier explores
//! paths in order of length and the first goal discovered is a shortest one.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Goal test and successor function for a search over states of type `S`.
///
/// # Example
///
/// ```
/// use knight_search::{SearchProblem, ShortestPathSearch};
///
/// /// Count up from zero in steps of 1 or 3.
/// struct ReachTen;
///
/// impl SearchProblem<u32> for ReachTen {
///     type Successors = Vec<u32>;
///
///     fn is_goal(&self, state: &u32) -> bool {
///         *state == 10
///     }
///
///     fn successors(&self, state: &u32) -> Vec<u32> {
///         vec![state + 1, state + 3]
///     }
/// }
///
/// let path = ShortestPathSearch::new(0, &ReachTen).find_shortest_path();
/// assert_eq!(path, vec![0, 1, 4, 7, 10]);
/// ```
pub trait SearchProblem<S> {
    /// Ordered successors of a state.
    type Successors: IntoIterator<Item = S>;

    /// Returns true if `state` satisfies the goal.
    fn is_goal(&self, state: &S) -> bool;

    /// Returns the states reachable from `state` in one step.
    ///
    /// The search visits them in iteration order, which decides which of
    /// several equally short paths is returned.
    fn successors(&self, state: &S) -> Self::Successors;

    /// Upper bound on the number of distinct states, if known.
    ///
    /// Used only to pre-size the explored set.
    fn state_space_hint(&self) -> Option<usize> {
        None
    }
}

impl<S, P> SearchProblem<S> for &P
where
    P: SearchProblem<S> + ?Sized,
{
    type Successors = P::Successors;

    fn is_goal(&self, state: &S) -> bool {
        (**self).is_goal(state)
    }

    fn successors(&self, state: &S) -> Self::Successors {
        (**self).successors(state)
    }

    fn state_space_hint(&self) -> Option<usize> {
        (**self).state_space_hint()
    }
}

/// A [`SearchProblem`] built from a goal closure and a successor closure.
///
/// ```
/// use knight_search::{FnProblem, ShortestPathSearch};
///
/// let problem = FnProblem::new(|n: &i32| *n == -4, |n: &i32| [n - 2, n + 1]);
/// let path = ShortestPathSearch::new(0, &problem).find_shortest_path();
/// assert_eq!(path, vec![0, -2, -4]);
/// ```
pub struct FnProblem<S, G, F> {
    goal: G,
    successors: F,
    state_space: Option<usize>,
    _state: PhantomData<fn(&S)>,
}

impl<S, G, F> FnProblem<S, G, F> {
    /// Creates a problem from a goal test and a successor function.
    pub fn new(goal: G, successors: F) -> Self {
        FnProblem {
            goal,
            successors,
            state_space: None,
            _state: PhantomData,
        }
    }

    /// Sets the state space size hint.
    pub fn with_state_space(mut self, states: usize) -> Self {
        self.state_space = Some(states);
        self
    }
}

impl<S, I, G, F> SearchProblem<S> for FnProblem<S, G, F>
where
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    type Successors = I;

    fn is_goal(&self, state: &S) -> bool {
        (self.goal)(state)
    }

    fn successors(&self, state: &S) -> I {
        (self.successors)(state)
    }

    fn state_space_hint(&self) -> Option<usize> {
        self.state_space
    }
}

impl<S, G, F> fmt::Debug for FnProblem<S, G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem")
            .field("state_space", &self.state_space)
            .finish_non_exhaustive()
    }
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier entries popped and expanded.
    pub expanded: usize,
    /// Distinct states discovered, including the start.
    pub discovered: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Result of a search: the path found (empty if none) and its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<S> {
    /// States from start to goal, both included. Empty if no goal is reachable.
    pub path: Vec<S>,
    /// Search counters.
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    /// Returns true if a goal was reached.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of transitions in the path, or `None` if no goal was reached.
    pub fn moves(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Breadth-first search from a start state to any goal of a [`SearchProblem`].
///
/// States are marked explored when first discovered, so each state enters
/// the frontier at most once and the first path reaching it is a shortest
/// one. "No path" is a normal outcome, reported as an empty path.
pub struct ShortestPathSearch<'p, S, P: ?Sized> {
    start: S,
    problem: &'p P,
}

impl<'p, S, P> ShortestPathSearch<'p, S, P>
where
    S: Clone + Eq + Hash + fmt::Debug,
    P: SearchProblem<S> + ?Sized,
{
    /// Creates a search from `start` over `problem`.
    pub fn new(start: S, problem: &'p P) -> Self {
        ShortestPathSearch { start, problem }
    }

    /// Returns the start state.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Returns a shortest path from the start to a goal, or an empty path.
    pub fn find_shortest_path(&self) -> Vec<S> {
        self.run().path
    }

    /// Runs the search, returning the path together with its counters.
    pub fn run(&self) -> SearchOutcome<S> {
        tracing::debug!(start = ?self.start, "starting shortest path search");

        let mut stats = SearchStats {
            discovered: 1,
            ..SearchStats::default()
        };

        if self.problem.is_goal(&self.start) {
            tracing::debug!("start state is already a goal");
            return SearchOutcome {
                path: vec![self.start.clone()],
                stats,
            };
        }

        let mut explored: HashSet<S> =
            HashSet::with_capacity(self.problem.state_space_hint().unwrap_or_default());
        explored.insert(self.start.clone());

        let mut frontier: VecDeque<Vec<S>> = VecDeque::new();
        frontier.push_back(vec![self.start.clone()]);
        stats.max_frontier = 1;

        while let Some(path) = frontier.pop_front() {
            stats.expanded += 1;
            let Some(state) = path.last() else {
                continue;
            };
            tracing::trace!(?state, depth = path.len() - 1, "expanding");

            for next in self.problem.successors(state) {
                if explored.contains(&next) {
                    continue;
                }
                explored.insert(next.clone());
                stats.discovered += 1;

                let is_goal = self.problem.is_goal(&next);
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);

                if is_goal {
                    tracing::debug!(
                        moves = extended.len() - 1,
                        expanded = stats.expanded,
                        discovered = stats.discovered,
                        "goal reached"
                    );
                    return SearchOutcome {
                        path: extended,
                        stats,
                    };
                }

                frontier.push_back(extended);
                stats.max_frontier = stats.max_frontier.max(frontier.len());
            }
        }

        tracing::debug!(
            expanded = stats.expanded,
            discovered = stats.discovered,
            "frontier exhausted without reaching a goal"
        );
        SearchOutcome {
            path: Vec::new(),
            stats,
        }
    }
}

impl<S: fmt::Debug, P: ?Sized> fmt::Debug for ShortestPathSearch<'_, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPathSearch")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`ShortestPathSearch::find_shortest_path`].
pub fn shortest_path<S, P>(start: S, problem: &P) -> Vec<S>
where
    S: Clone + Eq + Hash + fmt::Debug,
    P: SearchProblem<S> + ?Sized,
{
    ShortestPathSearch::new(start, problem).find_shortest_path()
}
