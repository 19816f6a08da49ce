//! Reaction aggregation and toggle planning
//!
//! Counts are always derived from the reaction rows on read. The toggle
//! state machine per (post, user) is `none -> K` (insert), `K -> none`
//! (delete, same kind requested again) and `K -> K'` (update in place).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Reaction, ReactionKind};
use crate::value_objects::{PostId, UserId};

/// Per-kind tallies for one post, plus the viewer's own reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: u64,
    pub heart: u64,
    pub fire: u64,
    pub clap: u64,
    pub total: u64,
    pub user_reaction: Option<ReactionKind>,
}

impl ReactionCounts {
    /// Count for a single kind
    pub fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Heart => self.heart,
            ReactionKind::Fire => self.fire,
            ReactionKind::Clap => self.clap,
        }
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Fire => &mut self.fire,
            ReactionKind::Clap => &mut self.clap,
        }
    }

    /// Fold one reaction row into the tallies
    pub fn add(&mut self, reaction: &Reaction, viewer: Option<UserId>) {
        *self.slot_mut(reaction.kind) += 1;
        self.total += 1;
        if viewer == Some(reaction.user_id) {
            self.user_reaction = Some(reaction.kind);
        }
    }

    /// Apply the viewer's own toggle to counts computed before it
    pub fn apply(&mut self, transition: ReactionTransition) {
        match transition {
            ReactionTransition::Insert(kind) => {
                *self.slot_mut(kind) += 1;
                self.total += 1;
            }
            ReactionTransition::Remove(kind) => {
                let slot = self.slot_mut(kind);
                *slot = slot.saturating_sub(1);
                self.total = self.total.saturating_sub(1);
            }
            ReactionTransition::Switch { from, to } => {
                let slot = self.slot_mut(from);
                *slot = slot.saturating_sub(1);
                *self.slot_mut(to) += 1;
            }
        }
        self.user_reaction = transition.resulting_kind();
    }
}

/// Tally all reactions of one post
///
/// If several rows belong to the viewer, the last one decides
/// `user_reaction`.
pub fn compute_reaction_counts(reactions: &[Reaction], viewer: Option<UserId>) -> ReactionCounts {
    let mut counts = ReactionCounts::default();
    for reaction in reactions {
        counts.add(reaction, viewer);
    }
    counts
}

/// Tally reactions for several posts at once
///
/// Every requested post id gets an entry, zeroed when it has no reactions.
/// Reactions on posts that were not requested are ignored.
pub fn compute_reaction_counts_batch(
    reactions: &[Reaction],
    post_ids: &[PostId],
    viewer: Option<UserId>,
) -> HashMap<PostId, ReactionCounts> {
    let mut counts: HashMap<PostId, ReactionCounts> = post_ids
        .iter()
        .map(|id| (*id, ReactionCounts::default()))
        .collect();

    for reaction in reactions {
        if let Some(entry) = counts.get_mut(&reaction.post_id) {
            entry.add(reaction, viewer);
        }
    }
    counts
}

/// The write a toggle needs to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTransition {
    /// No reaction yet: insert a row
    Insert(ReactionKind),
    /// Same kind requested again: delete the row
    Remove(ReactionKind),
    /// Different kind requested: update the existing row in place
    Switch { from: ReactionKind, to: ReactionKind },
}

impl ReactionTransition {
    /// Decide the transition from the user's current reaction
    pub fn plan(current: Option<ReactionKind>, requested: ReactionKind) -> Self {
        match current {
            None => Self::Insert(requested),
            Some(kind) if kind == requested => Self::Remove(kind),
            Some(from) => Self::Switch {
                from,
                to: requested,
            },
        }
    }

    /// The user's reaction after the transition
    pub fn resulting_kind(&self) -> Option<ReactionKind> {
        match *self {
            Self::Insert(kind) | Self::Switch { to: kind, .. } => Some(kind),
            Self::Remove(_) => None,
        }
    }

    pub fn outcome(&self) -> ToggleOutcome {
        match self {
            Self::Remove(_) => ToggleOutcome {
                action: ToggleAction::Removed,
                kind: None,
            },
            _ => ToggleOutcome {
                action: ToggleAction::Added,
                kind: self.resulting_kind(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Result of a toggle as reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub kind: Option<ReactionKind>,
}
