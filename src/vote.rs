//! Like/dislike counter bookkeeping.
//!
//! A vote is applied to the local tally immediately and confirmed with the
//! server afterwards. `PendingVote` records the exact delta that was applied
//! so a failed confirmation can replay its inverse.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Like,
    Dislike,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub likes: i64,
    pub dislikes: i64,
}

impl VoteTally {
    pub fn apply(self, delta: VoteDelta) -> Self {
        Self {
            likes: self.likes.saturating_add(delta.likes),
            dislikes: self.dislikes.saturating_add(delta.dislikes),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteDelta {
    pub likes: i64,
    pub dislikes: i64,
}

impl VoteDelta {
    /// Counter changes for pressing `kind` when the visitor's standing vote
    /// is `prev`. Pressing the same button again withdraws the vote;
    /// pressing the other one moves it.
    pub fn for_ballot(kind: VoteKind, prev: Option<VoteKind>) -> Self {
        match (kind, prev) {
            (VoteKind::Like, Some(VoteKind::Like)) => Self { likes: -1, dislikes: 0 },
            (VoteKind::Like, Some(VoteKind::Dislike)) => Self { likes: 1, dislikes: -1 },
            (VoteKind::Like, None) => Self { likes: 1, dislikes: 0 },
            (VoteKind::Dislike, Some(VoteKind::Dislike)) => Self { likes: 0, dislikes: -1 },
            (VoteKind::Dislike, Some(VoteKind::Like)) => Self { likes: -1, dislikes: 1 },
            (VoteKind::Dislike, None) => Self { likes: 0, dislikes: 1 },
        }
    }

    pub fn inverse(self) -> Self {
        Self {
            likes: -self.likes,
            dislikes: -self.dislikes,
        }
    }
}

/// The visitor's vote after pressing `kind`.
pub fn next_user_vote(kind: VoteKind, prev: Option<VoteKind>) -> Option<VoteKind> {
    if prev == Some(kind) { None } else { Some(kind) }
}

/// The tally read on mount, unless the visitor has voted since. A vote's own
/// tally (tentative or confirmed) is newer than anything that GET returns.
pub fn initial_tally(fetched: VoteTally, ballots_cast: u32) -> Option<VoteTally> {
    (ballots_cast == 0).then_some(fetched)
}

/// Body of the POST that records a vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub vote_key: String,
    #[serde(rename = "type")]
    pub kind: VoteKind,
    pub prev_user_vote: Option<VoteKind>,
}

/// A vote applied locally but not yet confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingVote {
    pub request: VoteRequest,
    pub delta: VoteDelta,
    pub previous_user_vote: Option<VoteKind>,
    pub user_vote: Option<VoteKind>,
}

impl PendingVote {
    /// Applies the vote to `tally` and returns the tentative tally with the
    /// record needed to undo it.
    pub fn begin(
        vote_key: &str,
        tally: VoteTally,
        user_vote: Option<VoteKind>,
        kind: VoteKind,
    ) -> (VoteTally, Self) {
        let delta = VoteDelta::for_ballot(kind, user_vote);
        let pending = Self {
            request: VoteRequest {
                vote_key: vote_key.to_string(),
                kind,
                prev_user_vote: user_vote,
            },
            delta,
            previous_user_vote: user_vote,
            user_vote: next_user_vote(kind, user_vote),
        };
        (tally.apply(delta), pending)
    }

    /// Reverts the tentative change on `tally` and hands back the user vote
    /// that stood before it.
    pub fn rollback(&self, tally: VoteTally) -> (VoteTally, Option<VoteKind>) {
        (tally.apply(self.delta.inverse()), self.previous_user_vote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PREV: [Option<VoteKind>; 3] = [None, Some(VoteKind::Like), Some(VoteKind::Dislike)];

    #[test]
    fn switching_moves_one_vote() {
        let d = VoteDelta::for_ballot(VoteKind::Like, Some(VoteKind::Dislike));
        assert_eq!(d, VoteDelta { likes: 1, dislikes: -1 });
        let d = VoteDelta::for_ballot(VoteKind::Dislike, Some(VoteKind::Like));
        assert_eq!(d, VoteDelta { likes: -1, dislikes: 1 });
    }

    #[test]
    fn pressing_twice_withdraws() {
        let tally = VoteTally { likes: 4, dislikes: 1 };
        let (after_like, first) = PendingVote::begin("k", tally, None, VoteKind::Like);
        assert_eq!(after_like, VoteTally { likes: 5, dislikes: 1 });
        assert_eq!(first.user_vote, Some(VoteKind::Like));

        let (after_unlike, second) = PendingVote::begin("k", after_like, first.user_vote, VoteKind::Like);
        assert_eq!(after_unlike, tally);
        assert_eq!(second.user_vote, None);
    }

    #[test]
    fn rollback_restores_tally_and_user_vote() {
        let tally = VoteTally { likes: 10, dislikes: 3 };
        for prev in ALL_PREV {
            for kind in [VoteKind::Like, VoteKind::Dislike] {
                let (tentative, pending) = PendingVote::begin("k", tally, prev, kind);
                assert_eq!(pending.rollback(tentative), (tally, prev));
            }
        }
    }

    #[test]
    fn late_initial_fetch_does_not_overwrite_a_vote() {
        let fetched = VoteTally { likes: 7, dislikes: 2 };
        assert_eq!(initial_tally(fetched, 0), Some(fetched));

        let (tentative, _) = PendingVote::begin("k", fetched, None, VoteKind::Like);
        let shown = initial_tally(fetched, 1).unwrap_or(tentative);
        assert_eq!(shown, VoteTally { likes: 8, dislikes: 2 });
    }

    #[test]
    fn request_uses_wire_names() {
        let (_, pending) = PendingVote::begin("season-7", VoteTally::default(), None, VoteKind::Dislike);
        let json = serde_json::to_value(&pending.request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "voteKey": "season-7", "type": "dislike", "prevUserVote": null })
        );
    }
}
