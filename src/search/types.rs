//! Fetch messages exchanged between the controller and its workers

use crate::provider::{BookRecord, ProviderError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier attached to every dispatched fetch, increasing per fetch kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two independent kinds of fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Book records for the result grid
    Results,
    /// Title suggestions for the search box
    Suggestions,
}

/// How responses of overlapping fetches of the same kind are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchPolicy {
    /// Whichever response resolves last overwrites the state
    #[default]
    LastResolved,
    /// Responses other than the most recently issued request are discarded
    LatestIssued,
}

impl fmt::Display for FetchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastResolved => write!(f, "last-resolved"),
            Self::LatestIssued => write!(f, "latest-issued"),
        }
    }
}

impl FromStr for FetchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-resolved" => Ok(Self::LastResolved),
            "latest-issued" => Ok(Self::LatestIssued),
            other => Err(format!(
                "unknown fetch policy '{other}', expected 'last-resolved' or 'latest-issued'"
            )),
        }
    }
}

/// A fetch the controller wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Result search by title and optional genre
    Results {
        /// Request identifier
        id: RequestId,
        /// Title text
        title: String,
        /// Subject filter, `None` when no genre is selected
        genre: Option<String>,
    },
    /// Title suggestions for a partial input
    Suggestions {
        /// Request identifier
        id: RequestId,
        /// Partial title
        partial: String,
        /// Maximum number of titles
        limit: usize,
    },
}

impl FetchRequest {
    /// Identifier of this request
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::Results { id, .. } | Self::Suggestions { id, .. } => *id,
        }
    }

    /// Kind of this request
    #[must_use]
    pub const fn kind(&self) -> FetchKind {
        match self {
            Self::Results { .. } => FetchKind::Results,
            Self::Suggestions { .. } => FetchKind::Suggestions,
        }
    }

    /// Build the failed outcome for this request
    #[must_use]
    pub fn fail(self, error: ProviderError) -> FetchOutcome {
        match self {
            Self::Results { id, .. } => FetchOutcome::Results {
                id,
                result: Err(error),
            },
            Self::Suggestions { id, .. } => FetchOutcome::Suggestions {
                id,
                result: Err(error),
            },
        }
    }
}

/// A completed fetch, posted back to the controller's thread
#[derive(Debug)]
pub enum FetchOutcome {
    /// Completion of a result search
    Results {
        /// Identifier of the originating request
        id: RequestId,
        /// Records or the provider failure
        result: Result<Vec<BookRecord>, ProviderError>,
    },
    /// Completion of a suggestion lookup
    Suggestions {
        /// Identifier of the originating request
        id: RequestId,
        /// Titles or the provider failure
        result: Result<Vec<String>, ProviderError>,
    },
}

impl FetchOutcome {
    /// Identifier of the originating request
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::Results { id, .. } | Self::Suggestions { id, .. } => *id,
        }
    }

    /// Kind of the originating request
    #[must_use]
    pub const fn kind(&self) -> FetchKind {
        match self {
            Self::Results { .. } => FetchKind::Results,
            Self::Suggestions { .. } => FetchKind::Suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_policy_round_trip_strings() {
        for policy in [FetchPolicy::LastResolved, FetchPolicy::LatestIssued] {
            assert_eq!(policy.to_string().parse::<FetchPolicy>().unwrap(), policy);
        }
        assert!("newest".parse::<FetchPolicy>().is_err());
    }

    #[test]
    fn test_fail_keeps_id_and_kind() {
        let request = FetchRequest::Suggestions {
            id: RequestId(7),
            partial: "dun".into(),
            limit: 5,
        };
        let outcome = request.fail(ProviderError::Aborted("gone".into()));

        assert_eq!(outcome.id(), RequestId(7));
        assert_eq!(outcome.kind(), FetchKind::Suggestions);
        assert!(matches!(outcome, FetchOutcome::Suggestions { result: Err(_), .. }));
    }

    #[test]
    fn test_request_id_display() {
        assert_eq!(RequestId(12).to_string(), "#12");
    }
}
