//! Multi-start driver: randomized construction, bounded local search, and a
//! best-clique record that only ever grows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::error::SearchError;
use crate::graph::Graph;
use crate::moves::MoveEngine;

/// Swaps allowed per restart before it is cut off.
pub const DEFAULT_SWAP_BUDGET: usize = 100;

/// Configuration for [`CliqueSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Successful 1-for-1 swaps allowed per restart.
    pub swap_budget: usize,
    /// Seed for the owned generator; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            swap_budget: DEFAULT_SWAP_BUDGET,
            seed: None,
        }
    }
}

/// Result of one construct-then-improve trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestartOutcome {
    /// Final clique, ascending.
    pub clique: Vec<usize>,
    pub moves: usize,
    pub swaps: usize,
}

/// Totals for one [`CliqueSearch::run_search`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub restarts: usize,
    pub moves: usize,
    pub swaps: usize,
    /// Best size after the call, including earlier calls.
    pub best_size: usize,
    /// `(restart, size)` each time the record grew during this call.
    pub improvements: Vec<(usize, usize)>,
}

/// Keeps the first of two equally large cliques.
fn keep_larger(best: Vec<usize>, candidate: Vec<usize>) -> Vec<usize> {
    if candidate.len() > best.len() {
        candidate
    } else {
        best
    }
}

/// Multi-start local search for large cliques in one graph.
///
/// Owns its generator, so a fixed seed reproduces the whole trajectory.
/// Partition storage is allocated once and reset between restarts.
#[derive(Debug)]
pub struct CliqueSearch<'g, R = StdRng> {
    engine: MoveEngine<'g>,
    rng: R,
    config: SearchConfig,
    best: Vec<usize>,
}

impl<'g> CliqueSearch<'g, StdRng> {
    pub fn new(graph: &'g Graph, config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(graph, config, rng)
    }
}

impl<'g, R: Rng> CliqueSearch<'g, R> {
    pub fn with_rng(graph: &'g Graph, config: SearchConfig, rng: R) -> Self {
        Self {
            engine: MoveEngine::new(graph),
            rng,
            config,
            best: Vec::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.engine.graph()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Largest clique found so far, ascending.
    pub fn best_clique(&self) -> &[usize] {
        &self.best
    }

    pub fn verify_best(&self) -> bool {
        self.graph().verify(&self.best)
    }

    /// Runs `restarts` independent trials and folds them into the best-clique
    /// record. A strictly larger clique replaces the record; ties keep the
    /// earlier one.
    ///
    /// # Errors
    /// Returns [`SearchError`] when `restarts` or `randomization` is zero.
    #[instrument(level = "debug", skip(self))]
    pub fn run_search(
        &mut self,
        restarts: usize,
        randomization: usize,
    ) -> Result<SearchSummary, SearchError> {
        if restarts == 0 {
            return Err(SearchError::ZeroRestarts);
        }
        if randomization == 0 {
            return Err(SearchError::ZeroRandomization);
        }

        let mut summary = SearchSummary {
            restarts,
            ..SearchSummary::default()
        };
        let initial = std::mem::take(&mut self.best);
        let best = (0..restarts).fold(initial, |best, restart| {
            let outcome = self.restart(randomization);
            debug!(
                restart,
                size = outcome.clique.len(),
                moves = outcome.moves,
                swaps = outcome.swaps,
                "restart finished"
            );
            summary.moves += outcome.moves;
            summary.swaps += outcome.swaps;
            if outcome.clique.len() > best.len() {
                info!(restart, size = outcome.clique.len(), "best clique improved");
                summary.improvements.push((restart, outcome.clique.len()));
            }
            keep_larger(best, outcome.clique)
        });
        self.best = best;
        summary.best_size = self.best.len();
        info!(
            restarts,
            best = summary.best_size,
            moves = summary.moves,
            swaps = summary.swaps,
            "search finished"
        );
        Ok(summary)
    }

    /// One trial: reset, construct, then take free insertions first and
    /// 1-for-1 swaps otherwise, until neither applies or the swap budget is
    /// spent.
    pub fn restart(&mut self, randomization: usize) -> RestartOutcome {
        self.engine.reset();
        self.engine.construct(&mut self.rng, randomization);

        let mut moves = 0;
        let mut swaps = 0;
        while swaps < self.config.swap_budget {
            if self.engine.try_move() {
                moves += 1;
            } else if self.engine.swap_one_to_one().is_some() {
                swaps += 1;
            } else {
                break;
            }
        }

        let mut clique = self.engine.index().clique().to_vec();
        clique.sort_unstable();
        RestartOutcome {
            clique,
            moves,
            swaps,
        }
    }
}
