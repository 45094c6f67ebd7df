//! Batch validation of survey records.
//!
//! Records arrive in area-grouped order: all rows for one area are
//! contiguous, and a change of area identifier closes the previous group.
//! For each group the validator builds the [`Area`] from the record's
//! diagonal corners, accumulates [`Sector`]s, and on leaving the group
//! checks that every sector is contained in the area and that no two
//! sectors overlap, emitting one verdict line per step through the
//! injected [`StatusSink`].

use crate::survey::{Area, Sector, SurveyRecord};
use crate::validator::report::{
    StatusSink, MESSAGE_INVALID_AREA_COORDINATES, MESSAGE_INVALID_SECTORS,
    MESSAGE_VALID_AREA_COORDINATES, MESSAGE_VALID_SECTORS,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Sequential validator for an ordered batch of survey records.
///
/// The pass is a plain synchronous loop; callers that want it off their
/// main thread run it on a blocking worker and consume events through a
/// channel-backed sink.
pub struct BatchValidator {
    cancel: CancellationToken,
}

impl BatchValidator {
    /// Creates a validator that runs to completion.
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
        }
    }

    /// Creates a validator that stops consuming records once `cancel` is
    /// triggered.
    ///
    /// Cancellation is cooperative and takes effect between records; an
    /// interrupted group emits no partial verdict.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Runs the batch pass over `records`, reporting to `sink`.
    ///
    /// Progress is reported after every record and once more on
    /// completion; verdict lines are emitted per group as described in the
    /// module docs.
    pub fn run<S: StatusSink>(&self, records: &[SurveyRecord], sink: &mut S) {
        let total = records.len() as u64;
        info!(records = total, "Starting survey validation");

        let mut group: Option<GroupState> = None;

        for (index, record) in records.iter().enumerate() {
            if self.cancel.is_cancelled() {
                info!(
                    processed = index,
                    total, "Validation cancelled; stopping batch pass"
                );
                return;
            }

            let starts_new_group = group
                .as_ref()
                .map_or(true, |g| g.area_id != record.area_id);

            if starts_new_group {
                if let Some(finished) = group.take() {
                    finished.validate(sink);
                }
                group = Some(GroupState::open(record, sink));
            }

            let [c1, c2, c3, c4] = record.sector_corners;
            if let Some(g) = group.as_mut() {
                g.sectors.push(Sector::new(&record.sector_id, c1, c2, c3, c4));
            }

            sink.progress((index + 1) as u64, total);
        }

        if let Some(finished) = group.take() {
            finished.validate(sink);
        }

        sink.progress(total, total);
        info!(records = total, "Finished survey validation");
    }
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulator for the group currently being read.
struct GroupState {
    area_id: String,
    /// None when the area definition was rejected; sectors still
    /// accumulate so the group consumes its records, but validation
    /// short-circuits to the invalid-sectors verdict.
    area: Option<Area>,
    sectors: Vec<Sector>,
}

impl GroupState {
    /// Opens a group for the record's area, emitting the area verdict.
    fn open<S: StatusSink>(record: &SurveyRecord, sink: &mut S) -> Self {
        sink.status(&format!("Area ID = {}", record.area_id));

        let area = match Area::from_diagonal(
            &record.area_id,
            record.area_corners[0],
            record.area_corners[1],
        ) {
            Ok(area) => {
                sink.status(MESSAGE_VALID_AREA_COORDINATES);
                Some(area)
            }
            Err(e) => {
                debug!(error = %e, "Rejected area definition");
                sink.status(MESSAGE_INVALID_AREA_COORDINATES);
                None
            }
        };

        Self {
            area_id: record.area_id.clone(),
            area,
            sectors: Vec::new(),
        }
    }

    /// Validates the accumulated sectors against the area and each other,
    /// emitting exactly one sector verdict.
    ///
    /// Containment is checked first, in accumulation order, stopping at
    /// the first sector outside the area; then every unordered pair
    /// (outer index ascending, inner ascending, i < j) is checked for
    /// overlap, stopping at the first hit.
    fn validate<S: StatusSink>(&self, sink: &mut S) {
        let Some(area) = &self.area else {
            debug!(
                area = %self.area_id,
                "No usable area definition; sectors cannot be validated"
            );
            sink.status(MESSAGE_INVALID_SECTORS);
            return;
        };

        for sector in &self.sectors {
            if !area.region().contains_region(sector.region()) {
                debug!(
                    area = %area.id(),
                    sector = %sector.id(),
                    "Sector is not fully contained in its area"
                );
                sink.status(MESSAGE_INVALID_SECTORS);
                return;
            }
        }

        for i in 0..self.sectors.len() {
            for j in (i + 1)..self.sectors.len() {
                if self.sectors[i].region().overlaps(self.sectors[j].region()) {
                    debug!(
                        area = %area.id(),
                        first = %self.sectors[i].id(),
                        second = %self.sectors[j].id(),
                        "Sectors overlap"
                    );
                    sink.status(MESSAGE_INVALID_SECTORS);
                    return;
                }
            }
        }

        sink.status(MESSAGE_VALID_SECTORS);
    }
}
