//! The end-to-end retweet workflow.
//!
//! One [`RetweetBot::run`] call is one complete pass: fetch the account's own
//! timeline, search for candidates, drop everything already posted or
//! retweeted, then either report what would happen (simulation) or retweet
//! the survivors one by one with a fixed pause between actions. No state
//! survives across runs; the timeline is re-fetched fresh every time, which
//! is what keeps reruns from retweeting the same content twice.

use std::time::Duration;

use log::info;

use crate::config::Credentials;
use crate::dedup::select_new;
use crate::error::{Error, Result};
use crate::twitter::{
    fetch_own_timeline, retweet, search_tweets, TwitterSession, TIMELINE_MAX_TWEETS,
};

/// How many search results one run considers.
pub const SEARCH_COUNT: usize = 150;

/// Pause between consecutive retweet calls. A self-imposed pace, not a
/// reaction to observed throttling.
pub const PAUSE_BETWEEN_RETWEETS: Duration = Duration::from_millis(250);

/// Counts observed during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Tweets fetched from the account's own timeline
    pub own_count: usize,
    /// Candidates the search returned
    pub found_count: usize,
    /// Candidates that survived deduplication
    pub accepted_count: usize,
    /// Retweets actually performed (zero in simulation)
    pub retweeted_count: usize,
}

/// The search-and-retweet bot.
///
/// Owns its [`TwitterSession`] for the lifetime of the value; a single run
/// uses that one session for every call it makes.
#[derive(Debug)]
pub struct RetweetBot {
    session: TwitterSession,
    search_budget: usize,
    pause: Duration,
}

impl RetweetBot {
    /// Builds a bot from account credentials with the default search budget
    /// and pacing.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self::from_session(TwitterSession::new(credentials)?))
    }

    /// Builds a bot around an existing session.
    pub fn from_session(session: TwitterSession) -> Self {
        RetweetBot {
            session,
            search_budget: SEARCH_COUNT,
            pause: PAUSE_BETWEEN_RETWEETS,
        }
    }

    /// Overrides how many search results a run considers.
    pub fn with_search_budget(mut self, search_budget: usize) -> Self {
        self.search_budget = search_budget;
        self
    }

    /// Overrides the pause between consecutive retweets.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Runs one complete search-and-retweet pass.
    ///
    /// With `simulate` set, all fetching and filtering still happens and the
    /// resulting counts are reported, but nothing is retweeted.
    ///
    /// # Errors
    ///
    /// The first error from any step aborts the whole run: a failed fetch
    /// yields no partial result, and a failed retweet stops the loop before
    /// the next candidate.
    pub async fn run(
        &mut self,
        query: &str,
        lang: Option<&str>,
        simulate: bool,
    ) -> Result<RunReport> {
        if query.trim().is_empty() {
            return Err(Error::config("search query must not be blank"));
        }

        let mine = fetch_own_timeline(&self.session, None, TIMELINE_MAX_TWEETS).await?;
        let found = search_tweets(&mut self.session, query, lang, self.search_budget).await?;
        let found_count = found.len();

        let accepted = select_new(&mine, found);
        info!(
            "Run for '{}': {} own tweets, {} found, {} left to retweet",
            query,
            mine.len(),
            found_count,
            accepted.len()
        );

        let mut report = RunReport {
            own_count: mine.len(),
            found_count,
            accepted_count: accepted.len(),
            retweeted_count: 0,
        };

        if simulate {
            info!("Simulation mode: not retweeting");
            return Ok(report);
        }

        for (i, candidate) in accepted.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.pause).await;
            }
            retweet(&self.session, candidate.id).await?;
            report.retweeted_count += 1;
        }

        info!("Retweeted {} tweets", report.retweeted_count);
        Ok(report)
    }
}
