use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisBounds, DataPoint};
use crate::error::{LoadError, PlotResult};
use crate::render::Renderer;

use super::PlotEngine;

/// Marker for one point-set load request.
///
/// Only the most recently issued ticket may deliver; any earlier one is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Outcome of handing a finished load to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadDelivery {
    /// The points were installed and the layout reset.
    Applied { points_len: usize },
    /// A newer request (or a direct `set_points`) superseded this one.
    Stale,
}

impl<R: Renderer> PlotEngine<R> {
    /// Replaces the point set and resets bounds, layout and viewport.
    ///
    /// Points are sorted lexicographically and exact duplicates dropped. An
    /// empty set is accepted and renders nothing. Any in-flight load becomes
    /// stale. On error the previous point set and any pending load stay in
    /// place.
    pub fn set_points<I, P>(&mut self, points: I) -> PlotResult<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        let points = canonicalize_points(points.into_iter().map(Into::into).collect());
        self.install_points(points)?;
        self.latest_load = None;
        Ok(())
    }

    /// Issues a new load ticket, invalidating every earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_load_generation = self.next_load_generation.wrapping_add(1);
        let ticket = LoadTicket {
            generation: self.next_load_generation,
        };
        self.latest_load = Some(ticket);
        debug!(generation = ticket.generation, "point load requested");
        ticket
    }

    /// Accepts the single delivery of a load started with [`Self::begin_load`].
    ///
    /// Stale tickets are discarded whatever their result. A failure for the
    /// current ticket is returned to the host for reporting and leaves the
    /// displayed data untouched.
    pub fn deliver_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<DataPoint>, LoadError>,
    ) -> PlotResult<LoadDelivery> {
        if self.latest_load != Some(ticket) {
            debug!(
                generation = ticket.generation,
                latest = ?self.latest_load.map(LoadTicket::generation),
                "discarding stale point load"
            );
            return Ok(LoadDelivery::Stale);
        }
        self.latest_load = None;

        let points = match result {
            Ok(points) => points,
            Err(err) => {
                warn!(error = %err, generation = ticket.generation, "point load failed");
                return Err(err.into());
            }
        };

        let points = canonicalize_points(points);
        let points_len = points.len();
        self.install_points(points)?;
        Ok(LoadDelivery::Applied { points_len })
    }

    #[must_use]
    pub fn pending_load(&self) -> Option<LoadTicket> {
        self.latest_load
    }

    fn install_points(&mut self, points: Vec<DataPoint>) -> PlotResult<()> {
        let bounds = AxisBounds::from_points(&points);
        let layout = self.compute_layout(self.config.viewport, bounds)?;

        debug!(
            count = points.len(),
            bounds = ?bounds,
            "set plot points"
        );
        self.points = points;
        self.bounds = bounds;
        self.apply_layout(layout);
        Ok(())
    }
}

fn canonicalize_points(mut points: Vec<DataPoint>) -> Vec<DataPoint> {
    let original_len = points.len();
    points.sort_unstable();
    points.dedup();

    let duplicate_count = original_len - points.len();
    if duplicate_count > 0 {
        debug!(
            duplicate_count,
            canonical_count = points.len(),
            "dropped duplicate points"
        );
    }
    points
}
