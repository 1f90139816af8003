//! Cube simulation, which manages the cube state, the move queue, the twist
//! animation, and the undo history.

use std::collections::VecDeque;

use cgmath::{Quaternion, Vector3};
use rand::Rng;
use strum::IntoEnumIterator;
use twistcube_core::{Cube, Face, GridPos, PieceId, Twist, TwistDirection, TwistModifier};
use web_time::Instant;

use crate::animations::{TwistAnimation, TwistAnimationState};

/// Maximum number of recorded moves kept for undo; the oldest entry is
/// evicted past this.
pub const UNDO_CAPACITY: usize = 200;

/// Default number of random moves in a shuffle.
pub const SHUFFLE_LENGTH: usize = 20;

/// One entry in the move queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PendingTwist {
    twist: Twist,
    record: bool,
}

/// Read-only per-piece render data.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceSnapshot {
    /// Piece identity.
    pub id: PieceId,
    /// Resting grid coordinate (not updated mid-animation).
    pub grid: GridPos,
    /// World position, including any in-flight animation.
    pub position: Vector3<f32>,
    /// World orientation, including any in-flight animation.
    pub rotation: Quaternion<f32>,
    /// Fixed sticker colors, indexed by home face slot.
    pub stickers: [Option<Face>; Face::COUNT],
}

/// Cube simulation: the engine behind every frontend.
///
/// Owns the cube state, the strictly-FIFO move queue, the twist animation
/// state, and the bounded undo history. Construct one per running puzzle;
/// there is no global state. All methods take `&self`/`&mut self` on a single
/// thread, and [`CubeSimulation::step`] is the only place piece transforms
/// change.
#[derive(Debug, Clone, Default)]
pub struct CubeSimulation {
    /// Latest committed cube state, not including the in-flight animation.
    cube: Cube,
    /// Pending moves, strictly FIFO. Never reordered, merged, or dropped.
    queue: VecDeque<PendingTwist>,
    /// Twist animation state.
    anim: TwistAnimationState,
    /// Recorded moves available to undo, oldest first.
    undo_stack: VecDeque<Twist>,
    /// Every committed twist, in completion order.
    completed: Vec<Twist>,
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the latest committed cube state.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Returns whether a twist is currently animating.
    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }

    /// Returns whether the queue is empty and no animation or cooldown is
    /// pending.
    pub fn is_settled(&self) -> bool {
        self.queue.is_empty() && self.anim.is_idle()
    }

    /// Returns the number of queued moves (not counting the one in flight).
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there is a recorded move available to undo.
    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns the number of recorded moves available to undo.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns every committed twist so far, in completion order.
    pub fn completed_twists(&self) -> &[Twist] {
        &self.completed
    }

    /// Enqueues a recorded quarter turn. Safe to call at any time: if a move
    /// is animating, the new move waits its turn, even on the same face.
    pub fn request_move(&mut self, face: Face, direction: TwistDirection) {
        self.enqueue(Twist::new(face, direction), true);
    }

    /// Enqueues a parsed move. A double move expands to two independently
    /// recorded clockwise quarter turns, so undoing it takes two undo calls.
    pub fn request_modified(&mut self, face: Face, modifier: TwistModifier) {
        for twist in modifier.expand(face) {
            self.enqueue(twist, true);
        }
    }

    fn enqueue(&mut self, twist: Twist, record: bool) {
        log::trace!("enqueueing {twist}{}", if record { "" } else { " (unrecorded)" });
        self.queue.push_back(PendingTwist { twist, record });
    }

    /// Enqueues `count` random moves, drawn as (face, modifier) pairs with
    /// double moves expanding to two turns. None are recorded. Silent no-op
    /// while a twist is animating.
    pub fn shuffle(&mut self, count: usize) {
        self.shuffle_with_rng(count, &mut rand::rng());
    }

    /// [`CubeSimulation::shuffle`] with a caller-provided RNG, for
    /// reproducible shuffles.
    pub fn shuffle_with_rng(&mut self, count: usize, rng: &mut impl Rng) {
        if self.is_animating() {
            log::debug!("shuffle ignored while animating");
            return;
        }
        let faces: Vec<Face> = Face::iter().collect();
        let modifiers = [
            TwistModifier::Plain,
            TwistModifier::Inverse,
            TwistModifier::Double,
        ];
        for _ in 0..count {
            let face = faces[rng.random_range(0..faces.len())];
            let modifier = modifiers[rng.random_range(0..modifiers.len())];
            for twist in modifier.expand(face) {
                self.enqueue(twist, false);
            }
        }
    }

    /// Undoes the most recent recorded move with a single unrecorded inverse
    /// turn. Silent no-op if the history is empty or a twist is animating;
    /// an in-flight animation is never interrupted or queued behind.
    pub fn undo(&mut self) {
        if self.is_animating() {
            log::debug!("undo ignored while animating");
            return;
        }
        let Some(twist) = self.undo_stack.pop_back() else {
            return;
        };
        self.enqueue(twist.rev(), false);
    }

    /// Advances the simulation to the frame at `now`. Commits the in-flight
    /// twist if it finished, then dequeues the next move once the inter-move
    /// delay has passed. Returns whether the puzzle must be redrawn.
    pub fn step(&mut self, now: Instant) -> bool {
        let mut needs_redraw = false;

        if let Some(anim) = self.anim.proceed(now) {
            self.commit(anim);
            // The committed layer just snapped to its resting state.
            needs_redraw = true;
        }

        if self.anim.is_idle() {
            if let Some(next) = self.queue.pop_front() {
                let pieces = self.cube.pieces_in_layer(next.twist.face);
                self.anim.begin(
                    TwistAnimation {
                        twist: next.twist,
                        record: next.record,
                        pieces,
                    },
                    now,
                );
            }
        }

        needs_redraw || self.anim.is_animating()
    }

    fn commit(&mut self, anim: TwistAnimation) {
        self.cube.twist(anim.twist);
        if anim.record {
            if self.undo_stack.len() == UNDO_CAPACITY {
                self.undo_stack.pop_front();
            }
            self.undo_stack.push_back(anim.twist);
        }
        self.completed.push(anim.twist);
        log::debug!("committed {}", anim.twist);
    }

    /// Returns render data for all 27 pieces at the frame `now`. Pieces of
    /// the twisting layer carry the eased partial rotation applied to their
    /// resting transform; everything else is at rest.
    pub fn piece_snapshots(&self, now: Instant) -> Vec<PieceSnapshot> {
        let animated = self
            .anim
            .current(now)
            .map(|(anim, eased)| (&anim.pieces, anim.twist.rotation(eased)));

        self.cube
            .ids()
            .map(|id| {
                let piece = &self.cube[id];
                let mut position = piece.position();
                let mut rotation = piece.rotation();
                if let Some((pieces, partial)) = &animated {
                    if pieces.contains(&id) {
                        position = *partial * position;
                        rotation = *partial * rotation;
                    }
                }
                PieceSnapshot {
                    id,
                    grid: piece.grid(),
                    position,
                    rotation,
                    stickers: *piece.stickers(),
                }
            })
            .collect()
    }
}
