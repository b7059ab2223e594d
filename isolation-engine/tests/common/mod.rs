//! Hand-built game trees for search tests.
//!
//! A `TreeGame` is a position in an explicit tree. The player to move at a node may
//! make one move per child; the other player has no moves listed. A node without
//! children is a finished game lost by its player to move.
#![allow(dead_code)]

use std::rc::Rc;

use rand::Rng;

use isolation_engine::coretypes::{Move, MoveList, Player};
use isolation_engine::error::{self, ErrorKind};
use isolation_engine::{Evaluate, GameState};

/// Child index used for moves that the position lists but cannot apply.
const DANGLING: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    active: Player,
    /// Static value of the node for Player::One.
    value: f64,
    children: Vec<(Move, usize)>,
}

#[derive(Debug, Clone)]
pub struct TreeGame {
    nodes: Rc<Vec<Node>>,
    idx: usize,
}

impl TreeGame {
    /// Static value of this node for Player::One.
    pub fn value(&self) -> f64 {
        self.node().value
    }

    fn node(&self) -> &Node {
        &self.nodes[self.idx]
    }
}

impl GameState for TreeGame {
    fn active_player(&self) -> Player {
        self.node().active
    }

    fn legal_moves(&self, player: Player) -> MoveList {
        if player == self.node().active {
            self.node().children.iter().map(|&(move_, _)| move_).collect()
        } else {
            MoveList::new()
        }
    }

    fn forecast(&self, move_: Move) -> error::Result<Self> {
        match self.node().children.iter().find(|(child_move, _)| *child_move == move_) {
            Some(&(_, idx)) if idx != DANGLING => Ok(Self {
                nodes: Rc::clone(&self.nodes),
                idx,
            }),
            _ => Err((ErrorKind::IllegalMove, move_).into()),
        }
    }

    fn is_winner(&self, player: Player) -> bool {
        self.node().children.is_empty() && self.node().active != player
    }

    fn is_loser(&self, player: Player) -> bool {
        self.node().children.is_empty() && self.node().active == player
    }

    fn location(&self, _player: Player) -> Option<Move> {
        None
    }

    fn width(&self) -> u32 {
        0
    }

    fn height(&self) -> u32 {
        0
    }
}

/// Evaluates a TreeGame by the static value stored on each node.
pub struct NodeValue;

impl Evaluate<TreeGame> for NodeValue {
    fn evaluate(&self, game: &TreeGame, player: Player) -> f64 {
        match player {
            Player::One => game.value(),
            Player::Two => -game.value(),
        }
    }
}

/// Builds a tree whose root, node 0, has Player::One to move.
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub const ROOT: usize = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                active: Player::One,
                value: 0.0,
                children: Vec::new(),
            }],
        }
    }

    /// Add a child reached by `move_` from `parent`, returning the child's index.
    pub fn child(&mut self, parent: usize, move_: (i32, i32), value: f64) -> usize {
        let idx = self.nodes.len();
        let active = self.nodes[parent].active.opponent();
        self.nodes.push(Node {
            active,
            value,
            children: Vec::new(),
        });
        self.nodes[parent].children.push((move_.into(), idx));
        idx
    }

    /// Add `count` children to `parent` with moves (0, 0), (0, 1), ... and the given value.
    pub fn children(&mut self, parent: usize, count: i32, value: f64) -> Vec<usize> {
        (0..count)
            .map(|col| self.child(parent, (0, col), value))
            .collect()
    }

    /// List a move at `parent` that cannot be applied.
    pub fn dangling(&mut self, parent: usize, move_: (i32, i32)) {
        self.nodes[parent].children.push((move_.into(), DANGLING));
    }

    pub fn build(self) -> TreeGame {
        TreeGame {
            nodes: Rc::new(self.nodes),
            idx: Self::ROOT,
        }
    }
}

/// A complete tree of the given depth. Each node has 1 to `max_branching` children
/// and a small integer value, so equal scores are common.
pub fn random_tree<R: Rng>(rng: &mut R, depth: u32, max_branching: i32) -> TreeGame {
    fn grow<R: Rng>(
        builder: &mut TreeBuilder,
        rng: &mut R,
        parent: usize,
        depth: u32,
        max_branching: i32,
    ) {
        if depth == 0 {
            return;
        }
        let count = rng.gen_range(1..=max_branching);
        for col in 0..count {
            let value = f64::from(rng.gen_range(-4i32..=4));
            let row = depth as i32;
            let child = builder.child(parent, (row, col), value);
            grow(builder, rng, child, depth - 1, max_branching);
        }
    }

    let mut builder = TreeBuilder::new();
    grow(&mut builder, rng, TreeBuilder::ROOT, depth, max_branching);
    builder.build()
}
