//! Monte Carlo Tree Search.
//!
//! Each iteration runs the four classic phases against a scratch copy of the
//! root position:
//!
//! 1. **Select** - descend from the root by UCT score until reaching a node
//!    that is not fully expanded or is terminal.
//! 2. **Expand** - add one child for the next untried legal move.
//! 3. **Simulate** - play random legal moves to a terminal state.
//! 4. **Backpropagate** - update visit counts and values up to the root,
//!    flipping the result's sign every ply.
//!
//! The loop is bounded by a wall-clock deadline checked between iterations;
//! a single iteration is never interrupted mid-playout. The chosen move is
//! the root child with the most visits.

mod playout;
mod tt;

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Move};
use tt::TranspositionTable;

/// UCT exploration constant; balances trying promising moves against
/// sampling rarely visited ones.
const UCT_EXPLORATION: f64 = std::f64::consts::SQRT_2;

/// How often intermediate progress is reported.
const PROGRESS_INTERVAL: u64 = 8192;

/// One node of the search tree.
///
/// The tree lives in an index arena: children own nothing, they are indices
/// into the `Search`'s node vector, and parent links are indices back the
/// other way. Dropping the arena drops every node without recursion.
struct Node {
    parent: Option<usize>,
    /// The move that led from the parent to this node; null at the root
    mv: Move,
    children: Vec<usize>,
    visits: u64,
    /// Accumulated playout results from the perspective of the player
    /// choosing this node at its parent
    value: f64,
}

impl Node {
    fn new(parent: Option<usize>, mv: Move) -> Self {
        Node {
            parent,
            mv,
            children: Vec::new(),
            visits: 0,
            value: 0.0,
        }
    }
}

/// Monte Carlo Tree Search driver. One instance can serve successive
/// searches; the tree and transposition table are rebuilt per call.
pub struct Search {
    nodes: Vec<Node>,
    tt: TranspositionTable,
    rng: StdRng,
}

impl Search {
    #[must_use]
    pub fn new() -> Self {
        Search {
            nodes: Vec::new(),
            tt: TranspositionTable::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A search with a fixed playout RNG seed, for reproducible results.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Search {
            nodes: Vec::new(),
            tt: TranspositionTable::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Search the position until the time limit elapses and return the most
    /// visited root move, or `None` if the position is terminal.
    pub fn find_best_move(&mut self, root_pos: &Board, time_limit: Duration) -> Option<Move> {
        self.reset(root_pos);

        let deadline = Instant::now() + time_limit;
        let mut iterations: u64 = 0;

        loop {
            self.run_iteration(root_pos);
            iterations += 1;

            if iterations % PROGRESS_INTERVAL == 0 {
                println!("info depth {iterations} nodes {}", self.tt.len());
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        println!("info depth {iterations} nodes {}", self.tt.len());
        self.best_root_move()
    }

    fn reset(&mut self, root_pos: &Board) {
        self.nodes.clear();
        self.nodes.push(Node::new(None, Move::null()));
        self.tt.clear();
        self.tt.store(root_pos.hash(), 0);
    }

    /// One select/expand/simulate/backpropagate pass.
    fn run_iteration(&mut self, root_pos: &Board) {
        let mut pos = root_pos.clone();
        let leaf = self.select(0, &mut pos);
        let expanded = self.expand(leaf, &mut pos);
        let result = playout::random_playout(&mut pos, &mut self.rng);
        self.backpropagate(expanded, result);
    }

    /// Descend from `node`, applying each chosen child's move to `pos`, until
    /// reaching a node with untried moves or no moves at all.
    fn select(&self, mut node: usize, pos: &mut Board) -> usize {
        loop {
            let legal_moves = pos.generate_legal_moves();

            if legal_moves.is_empty() || self.nodes[node].children.len() < legal_moves.len() {
                return node;
            }

            let parent_visits = self.nodes[node].visits;
            let mut best_child = None;
            let mut best_score = f64::NEG_INFINITY;
            for &child in &self.nodes[node].children {
                let score = self.uct_score(child, parent_visits);
                if score > best_score {
                    best_score = score;
                    best_child = Some(child);
                }
            }

            // Unreachable for a fully expanded node, but do not descend blind
            let Some(best_child) = best_child else {
                return node;
            };

            pos.make_move(self.nodes[best_child].mv);
            node = best_child;
        }
    }

    /// Create a child of `node` for its next untried legal move and apply
    /// that move to `pos`. Terminal nodes are returned unchanged.
    fn expand(&mut self, node: usize, pos: &mut Board) -> usize {
        let legal_moves = pos.generate_legal_moves();
        if legal_moves.is_empty() {
            return node;
        }

        let mv = legal_moves[self.nodes[node].children.len()];
        pos.make_move(mv);

        let child = self.nodes.len();
        self.nodes.push(Node::new(Some(node), mv));
        self.nodes[node].children.push(child);
        self.tt.store(pos.hash(), child);

        child
    }

    /// Walk parent links from `node` to the root. The playout scored the
    /// position for the side to move at `node`, so the sign flips before
    /// each value update: a node's value is held from the perspective of
    /// the player who picks it one ply up.
    fn backpropagate(&mut self, node: usize, mut result: f64) {
        let mut current = Some(node);
        while let Some(idx) = current {
            self.nodes[idx].visits += 1;
            result = -result;
            self.nodes[idx].value += result;
            current = self.nodes[idx].parent;
        }
    }

    /// UCT score of a child; unvisited children rank above everything.
    fn uct_score(&self, child: usize, parent_visits: u64) -> f64 {
        let node = &self.nodes[child];
        if node.visits == 0 {
            return f64::INFINITY;
        }
        let visits = node.visits as f64;
        let exploitation = node.value / visits;
        let exploration = UCT_EXPLORATION * ((parent_visits as f64).ln() / visits).sqrt();
        exploitation + exploration
    }

    /// The root child with the greatest visit count (robust-child rule);
    /// ties go to the first-created child.
    fn best_root_move(&self) -> Option<Move> {
        let mut best: Option<(u64, Move)> = None;
        for &child in &self.nodes[0].children {
            let node = &self.nodes[child];
            if best.map_or(true, |(visits, _)| node.visits > visits) {
                best = Some((node.visits, node.mv));
            }
        }
        best.map(|(_, mv)| mv)
    }
}

impl Default for Search {
    fn default() -> Self {
        Search::new()
    }
}
