//! Report submission.

use saferoute_types::{Incident, IncidentDraft};
use tracing::{info, instrument};

use crate::error::ClientResult;
use crate::session::SessionProvider;
use crate::source::IncidentSource;

/// Create an incident on behalf of the signed-in user.
///
/// Field validation belongs to the reporting form; the draft is forwarded
/// as-is.
#[instrument(
    skip_all,
    fields(category = ?draft.category, severity = %draft.severity)
)]
pub async fn submit_report<S, P>(
    source: &S,
    session: &P,
    draft: IncidentDraft,
) -> ClientResult<Incident>
where
    S: IncidentSource + ?Sized,
    P: SessionProvider + ?Sized,
{
    let user = session.require_user()?;
    let incident = source.create_incident(draft, Some(user.id)).await?;

    info!(incident_id = %incident.id, "Incident reported");
    Ok(incident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::session::LocalSession;
    use crate::source::InMemoryIncidentSource;
    use chrono::Utc;
    use saferoute_types::{Category, Coordinate, Severity, User};

    fn draft() -> IncidentDraft {
        IncidentDraft::new("Pickpocket on the L", Category::Theft, Severity::High)
            .with_description("Crowded train, wallet taken near the doors")
            .with_location("Clark/Lake", Coordinate::new(41.8858, -87.6316))
    }

    #[tokio::test]
    async fn test_signed_out_cannot_report() {
        let source = InMemoryIncidentSource::new();

        let err = submit_report(&source, &LocalSession::signed_out(), draft())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Unauthenticated));
        assert!(source.is_empty());
    }

    #[tokio::test]
    async fn test_reporter_is_signed_in_user() {
        let source = InMemoryIncidentSource::new();
        let user = User::new("Robin Park", "robin@example.com", Utc::now());
        let session = LocalSession::signed_in(user.clone());

        let incident = submit_report(&source, &session, draft()).await.unwrap();

        assert!(incident.is_reported_by(&user.id));
        assert_eq!(incident.location, "Clark/Lake");
        assert_eq!(source.len(), 1);
    }
}
