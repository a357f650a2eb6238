//! Contributor profile view.

use saferoute_insights::{initials, score_with, ContributorScore, IncidentAggregator, InsightsConfig};
use saferoute_types::{Incident, User};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ClientResult;
use crate::session::SessionProvider;
use crate::source::IncidentSource;

/// What the profile page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub user: User,
    pub initials: String,
    pub score: ContributorScore,
    /// The user's reports, newest first.
    pub reports: Vec<Incident>,
}

/// Load and score the signed-in user's contribution history.
#[instrument(skip_all)]
pub async fn load_profile<S, P>(
    source: &S,
    session: &P,
    config: &InsightsConfig,
) -> ClientResult<ProfileSnapshot>
where
    S: IncidentSource + ?Sized,
    P: SessionProvider + ?Sized,
{
    let user = session.require_user()?;
    let history = source.list_incidents_by_reporter(&user.id).await?;

    let score = score_with(&user, &history, &config.impact);
    let reports = IncidentAggregator::new(&history)
        .sorted_by_recency_descending()
        .into_iter()
        .cloned()
        .collect();

    debug!(
        user_id = %user.id,
        reports = history.len(),
        trust_level = %score.trust_level,
        "Profile loaded"
    );

    Ok(ProfileSnapshot {
        initials: initials(&user.name),
        user,
        score,
        reports,
    })
}
