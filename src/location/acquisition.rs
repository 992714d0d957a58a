//! Coordinate acquisition.
//!
//! Wraps a [`PositionSource`] with a bounded wait and reuse of a recent fix.
//! Failures are terminal for the request; nothing is retried.

use std::time::{Duration, Instant};

use super::{Coordinates, LocationError};

/// Default time to wait for a position fix.
pub const DEFAULT_ACQUISITION_TIMEOUT: Duration = Duration::from_secs(10);

/// Default maximum age of a fix that may be reused instead of re-acquiring.
pub const DEFAULT_MAX_FIX_AGE: Duration = Duration::from_secs(5 * 60);

/// Trait for sources of the device position
pub trait PositionSource: Send + Sync {
    /// Whether this device can provide a position at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Acquire the current position.
    fn current_position(
        &self,
    ) -> impl std::future::Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// A position supplied by the user rather than measured.
///
/// Without coordinates every request is refused, the same as a user
/// declining a location prompt. The source itself is always supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualPosition(Option<Coordinates>);

impl ManualPosition {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self(coordinates)
    }

    /// A source that always reports `coordinates`.
    pub fn at(coordinates: Coordinates) -> Self {
        Self(Some(coordinates))
    }
}

impl PositionSource for ManualPosition {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.0
            .ok_or_else(|| LocationError::Denied("no coordinates provided".to_string()))
    }
}

/// Acquires coordinate fixes from a position source.
pub struct LocationAcquirer<P> {
    source: P,
    timeout: Duration,
    max_fix_age: Duration,
    last_fix: Option<(Coordinates, Instant)>,
}

impl<P: PositionSource> LocationAcquirer<P> {
    /// Create an acquirer with the default timeout and fix reuse window.
    pub fn new(source: P) -> Self {
        Self::with_limits(source, DEFAULT_ACQUISITION_TIMEOUT, DEFAULT_MAX_FIX_AGE)
    }

    /// Create an acquirer with explicit limits.
    pub fn with_limits(source: P, timeout: Duration, max_fix_age: Duration) -> Self {
        Self {
            source,
            timeout,
            max_fix_age,
            last_fix: None,
        }
    }

    /// Whether the underlying source can provide positions.
    pub fn is_supported(&self) -> bool {
        self.source.is_supported()
    }

    /// The most recent fix, if any.
    pub fn last_fix(&self) -> Option<Coordinates> {
        self.last_fix.map(|(coords, _)| coords)
    }

    /// Get a coordinate fix, reusing a recent one when possible.
    pub async fn acquire(&mut self) -> Result<Coordinates, LocationError> {
        if let Some((coords, at)) = self.last_fix {
            if at.elapsed() < self.max_fix_age {
                tracing::debug!("Reusing position fix from {:?} ago", at.elapsed());
                return Ok(coords);
            }
        }

        if !self.source.is_supported() {
            return Err(LocationError::Unsupported);
        }

        let coords = tokio::time::timeout(self.timeout, self.source.current_position())
            .await
            .map_err(|_| LocationError::Timeout(self.timeout.as_secs()))??;

        self.last_fix = Some((coords, Instant::now()));
        Ok(coords)
    }
}
