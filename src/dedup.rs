//! Candidate filtering against the account's own timeline.

use std::collections::HashSet;

use crate::twitter::Status;

/// Selects the candidates the account has not already posted or retweeted.
///
/// A candidate is rejected when any of these holds:
///
/// 1. it is itself a retweet (the bot never retweets a retweet it found);
/// 2. its id matches one of the account's own tweets;
/// 3. it is the original behind one of the account's own retweets.
///
/// Pure function over its inputs: accepted candidates keep their relative
/// order from `found`, and the same inputs always yield the same result.
pub fn select_new(mine: &[Status], found: Vec<Status>) -> Vec<Status> {
    let own_ids: HashSet<u64> = mine.iter().map(|s| s.id).collect();
    let retweeted_ids: HashSet<u64> = mine
        .iter()
        .filter_map(|s| s.retweeted_status.as_ref().map(|original| original.id))
        .collect();

    found
        .into_iter()
        .filter(|candidate| {
            !candidate.is_retweet()
                && !own_ids.contains(&candidate.id)
                && !retweeted_ids.contains(&candidate.id)
        })
        .collect()
}
