//! Lookup-tree test fixture
//!
//! A pure value-lookup game behind the `GameState` contract: inner nodes
//! offer one move per child, leaves have no moves and surface their stored
//! value through `utility`. This lets the searchers be exercised without a
//! real game, through the exact same interface a real game uses.
//!
//! Leaf values are stored from the first player's point of view; `utility`
//! negates for the second player. The fixture counts how many leaves a
//! search actually visited, which is how pruning is observed from outside.

#![allow(dead_code)]

use isolation_engine::{GameState, Move, Player, Score, SearchError, SearchResult};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
pub enum Node {
    Leaf(f64),
    Branch(Vec<Node>),
}

pub fn leaf(value: f64) -> Node {
    Node::Leaf(value)
}

pub fn branch(children: Vec<Node>) -> Node {
    Node::Branch(children)
}

/// A branch holding two leaves.
pub fn pair(a: f64, b: f64) -> Node {
    branch(vec![leaf(a), leaf(b)])
}

/// A position inside a lookup tree: the shared tree plus the path taken.
#[derive(Clone)]
pub struct TreeState {
    root: Rc<Node>,
    path: Vec<usize>,
    active: Player,
    leaf_visits: Rc<Cell<usize>>,
}

impl TreeState {
    pub fn new(root: Node) -> Self {
        TreeState {
            root: Rc::new(root),
            path: Vec::new(),
            active: Player::First,
            leaf_visits: Rc::new(Cell::new(0)),
        }
    }

    /// Leaves visited by any search over any state forked from this one.
    pub fn leaf_visits(&self) -> usize {
        self.leaf_visits.get()
    }

    fn node(&self) -> &Node {
        let mut node = self.root.as_ref();
        for &idx in &self.path {
            match node {
                Node::Branch(children) => node = &children[idx],
                Node::Leaf(_) => unreachable!("path descends through a leaf"),
            }
        }
        node
    }

    fn leaf_value_for(&self, player: Player) -> Option<f64> {
        match self.node() {
            Node::Leaf(value) => Some(match player {
                Player::First => *value,
                Player::Second => -*value,
            }),
            Node::Branch(_) => None,
        }
    }
}

impl GameState for TreeState {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, _player: Player) -> Vec<Move> {
        match self.node() {
            Node::Leaf(_) => Vec::new(),
            Node::Branch(children) => (0..children.len())
                .map(|idx| Move::new(idx as i8, 0))
                .collect(),
        }
    }

    fn forecast_move(&self, mv: Move) -> SearchResult<Self> {
        let child_count = match self.node() {
            Node::Branch(children) => children.len(),
            Node::Leaf(_) => 0,
        };
        if mv.row < 0 || mv.col != 0 || mv.row as usize >= child_count {
            return Err(SearchError::InvalidMove { mv });
        }
        let mut next = self.clone();
        next.path.push(mv.row as usize);
        next.active = self.active.opponent();
        Ok(next)
    }

    fn is_winner(&self, player: Player) -> bool {
        matches!(self.leaf_value_for(player), Some(value) if value > 0.0)
    }

    fn is_loser(&self, player: Player) -> bool {
        matches!(self.leaf_value_for(player), Some(value) if value < 0.0)
    }

    fn utility(&self, player: Player) -> Score {
        match self.leaf_value_for(player) {
            Some(value) => {
                self.leaf_visits.set(self.leaf_visits.get() + 1);
                value
            }
            None => 0.0,
        }
    }
}

/// The five-ply, 32-leaf tree used to observe pruning. Root is a MAX node;
/// its minimax value is -7 via the second top-level branch.
pub fn deep_tree() -> Node {
    branch(vec![
        branch(vec![
            branch(vec![
                branch(vec![pair(-1.0, 13.0), pair(1.0, 6.0)]),
                branch(vec![pair(-16.0, 13.0), pair(-13.0, -10.0)]),
            ]),
            branch(vec![
                branch(vec![pair(-4.0, 9.0), pair(-20.0, -13.0)]),
                branch(vec![pair(-16.0, -13.0), pair(-4.0, 11.0)]),
            ]),
        ]),
        branch(vec![
            branch(vec![
                branch(vec![pair(-14.0, -7.0), pair(0.0, 19.0)]),
                branch(vec![pair(-14.0, -7.0), pair(12.0, -15.0)]),
            ]),
            branch(vec![
                branch(vec![pair(2.0, -16.0), pair(-13.0, 4.0)]),
                branch(vec![pair(2.0, -1.0), pair(-5.0, -9.0)]),
            ]),
        ]),
    ])
}

/// A state collaborator that violates its own contract: it advertises a
/// legal move and then rejects the forecast for it.
pub struct BrokenState;

impl GameState for BrokenState {
    fn active_player(&self) -> Player {
        Player::First
    }

    fn legal_moves(&self, _player: Player) -> Vec<Move> {
        vec![Move::new(0, 0)]
    }

    fn forecast_move(&self, mv: Move) -> SearchResult<Self> {
        Err(SearchError::InvalidMove { mv })
    }

    fn is_winner(&self, _player: Player) -> bool {
        false
    }

    fn is_loser(&self, _player: Player) -> bool {
        false
    }

    fn utility(&self, _player: Player) -> Score {
        0.0
    }
}
