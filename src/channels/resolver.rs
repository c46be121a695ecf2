//! Resolution of channel arguments against the server
//!
//! Each reference is resolved independently and every failure is collected,
//! so one bad argument never hides the outcome of the others.

use crate::api::{Channel, ChannelApi};
use crate::channels::reference::ChannelReference;
use crate::channels::summary::{ResolutionError, ResolutionSummary, classify};
use crate::logging::Timer;
use futures::StreamExt;

/// Resolve every reference, one after another, in input order.
///
/// Returns the channels that resolved and, only if something failed, a
/// summary holding one error per failed reference.
pub async fn resolve_channels<C, S>(
    client: &C,
    references: &[S],
) -> (Vec<Channel>, Option<ResolutionSummary>)
where
    C: ChannelApi + ?Sized,
    S: AsRef<str>,
{
    let _timer = Timer::new("resolve_channels");

    let mut outcomes = Vec::with_capacity(references.len());
    for reference in references {
        outcomes.push(resolve_reference(client, reference.as_ref()).await);
    }

    partition_outcomes(outcomes)
}

/// Same result as [`resolve_channels`], with up to `limit` references in flight
pub async fn resolve_channels_concurrently<C, S>(
    client: &C,
    references: &[S],
    limit: usize,
) -> (Vec<Channel>, Option<ResolutionSummary>)
where
    C: ChannelApi + ?Sized,
    S: AsRef<str>,
{
    let _timer = Timer::new("resolve_channels_concurrently");

    // `buffered` yields in submission order, whatever order the lookups finish in
    let outcomes: Vec<_> = futures::stream::iter(
        references
            .iter()
            .map(|reference| resolve_reference(client, reference.as_ref())),
    )
    .buffered(limit.max(1))
    .collect()
    .await;

    partition_outcomes(outcomes)
}

/// Resolve a single reference, logging and discarding the failure
pub async fn resolve_channel<C>(client: &C, reference: &str) -> Option<Channel>
where
    C: ChannelApi + ?Sized,
{
    match resolve_reference(client, reference).await {
        Ok(channel) => Some(channel),
        Err(e) => {
            tracing::warn!(
                reference = %reference,
                error = %e,
                "Failed to resolve channel"
            );
            None
        }
    }
}

async fn resolve_reference<C>(client: &C, reference: &str) -> Result<Channel, ResolutionError>
where
    C: ChannelApi + ?Sized,
{
    match ChannelReference::parse(reference) {
        ChannelReference::PlainId(channel_id) => {
            tracing::debug!(channel_id = %channel_id, "Looking up channel by id");

            client
                .get_channel(channel_id, "")
                .await
                .map_err(|e| classify(reference, &e))
        }
        ChannelReference::TeamQualified {
            team_id,
            channel_name,
        } => {
            tracing::debug!(
                team_id = %team_id,
                channel = %channel_name,
                "Looking up channel by name"
            );

            client
                .get_team(team_id, "")
                .await
                .map_err(|e| classify(team_id, &e))?;

            client
                .get_channel_by_name_include_deleted(channel_name, team_id, "")
                .await
                .map_err(|e| classify(channel_name, &e))
        }
    }
}

fn partition_outcomes<I>(outcomes: I) -> (Vec<Channel>, Option<ResolutionSummary>)
where
    I: IntoIterator<Item = Result<Channel, ResolutionError>>,
{
    let mut channels = Vec::new();
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(channel) => channels.push(channel),
            Err(e) => {
                tracing::debug!(
                    reference = %e.reference(),
                    kind = ?e.kind(),
                    error = %e,
                    "Channel reference did not resolve"
                );
                errors.push(e);
            }
        }
    }

    tracing::info!(
        resolved = channels.len(),
        failed = errors.len(),
        "Resolved channel references"
    );

    (channels, ResolutionSummary::from_errors(errors))
}
