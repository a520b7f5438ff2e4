// festim-trace/src/collector.rs

use std::collections::BTreeMap;

use festim_core::ndarray::{ArrayD, Axis};
use festim_core::ops::concat;
use festim_core::value::get_value;
use festim_core::{FestimError, Record};

use crate::mode::{Mode, ModeFilter};

/// Named sample arrays, each with a leading batch axis.
pub type Samples = BTreeMap<String, ArrayD<f32>>;

/// How many samples a collector keeps.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSpec {
    /// Keep the first batch seen.
    Batch,
    /// Keep the first `n` rows across batches. `Count(0)` behaves like `Batch`.
    Count(usize),
    /// Use these samples and never collect.
    Fixed(Samples),
}

#[derive(Debug, Clone)]
enum CollectorState {
    Collecting {
        pending: BTreeMap<String, Vec<ArrayD<f32>>>,
        found: usize,
        /// 0 means single-batch mode.
        required: usize,
    },
    Finalized {
        data: Samples,
    },
}

/// Gathers a bounded number of samples from a stream of batches.
///
/// A collector starts out collecting and is finalized once, at the end of an
/// epoch in which it saw data. After that the finalized samples are reused
/// for every later epoch.
#[derive(Debug, Clone)]
pub struct SampleCollector {
    state: CollectorState,
}

impl SampleCollector {
    pub fn new(spec: &SampleSpec) -> Self {
        let state = match spec {
            SampleSpec::Batch => CollectorState::Collecting {
                pending: BTreeMap::new(),
                found: 0,
                required: 0,
            },
            SampleSpec::Count(n) => CollectorState::Collecting {
                pending: BTreeMap::new(),
                found: 0,
                required: *n,
            },
            SampleSpec::Fixed(data) => CollectorState::Finalized { data: data.clone() },
        };
        SampleCollector { state }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, CollectorState::Finalized { .. })
    }

    /// Rows collected so far; 0 once finalized.
    pub fn found(&self) -> usize {
        match &self.state {
            CollectorState::Collecting { found, .. } => *found,
            CollectorState::Finalized { .. } => 0,
        }
    }

    /// Whether the next batch would be kept.
    pub fn wants_more(&self) -> bool {
        match &self.state {
            CollectorState::Collecting { pending, found, required } => {
                if *required == 0 {
                    pending.is_empty()
                } else {
                    found < required
                }
            }
            CollectorState::Finalized { .. } => false,
        }
    }

    /// Stores the `keys` columns of `batch` if the collector still wants data.
    ///
    /// The row count of the last key is added to the number of samples found.
    ///
    /// # Errors
    /// * `FestimError::KeyNotFound` if `batch` lacks one of `keys`; nothing is stored.
    /// * Conversion errors from values that cannot become arrays.
    pub fn accumulate(&mut self, keys: &[String], batch: &Record) -> Result<(), FestimError> {
        if !self.wants_more() {
            return Ok(());
        }
        let mut columns = Vec::with_capacity(keys.len());
        let mut rows = 0;
        for key in keys {
            let array = get_value(batch, key)?.to_array()?;
            rows = array.shape().first().copied().unwrap_or(1);
            columns.push((key.clone(), array));
        }

        if let CollectorState::Collecting { pending, found, .. } = &mut self.state {
            for (key, array) in columns {
                pending.entry(key).or_default().push(array);
            }
            *found += rows;
            log::debug!("SampleCollector: collected {} rows ({} total)", rows, found);
        }
        Ok(())
    }

    /// Closes collection and returns the finalized samples.
    ///
    /// In capped mode the collected batches are concatenated and cut to the
    /// requested row count (fewer if the epoch ran short). In single-batch
    /// mode the first batch is kept. If nothing has been found yet the
    /// collector stays open and `None` is returned.
    ///
    /// # Errors
    /// Returns `FestimError::ShapeMismatch` if the collected batches of one
    /// key cannot be concatenated.
    pub fn finalize(&mut self) -> Result<Option<&Samples>, FestimError> {
        if let CollectorState::Collecting { pending, found, required } = &self.state {
            if *found == 0 {
                return Ok(None);
            }
            let data = finalize_pending(pending, *required)?;
            log::debug!("SampleCollector: finalized {} keys from {} rows", data.len(), found);
            self.state = CollectorState::Finalized { data };
        }
        Ok(self.data())
    }

    pub fn data(&self) -> Option<&Samples> {
        match &self.state {
            CollectorState::Finalized { data } => Some(data),
            CollectorState::Collecting { .. } => None,
        }
    }
}

fn finalize_pending(pending: &BTreeMap<String, Vec<ArrayD<f32>>>, required: usize) -> Result<Samples, FestimError> {
    let mut data = Samples::new();
    for (key, batches) in pending {
        let kept = if required > 0 {
            let all = concat(batches)?;
            let rows = required.min(all.len_of(Axis(0)));
            all.slice_axis(Axis(0), (0..rows).into()).to_owned()
        } else {
            match batches.first() {
                Some(first) => first.clone(),
                None => continue,
            }
        };
        data.insert(key.clone(), kept);
    }
    Ok(data)
}

/// One [`SampleCollector`] per mode a trace is active in.
#[derive(Debug, Clone)]
pub struct SaliencyCollectors {
    collectors: BTreeMap<Mode, SampleCollector>,
}

impl SaliencyCollectors {
    pub fn new(filter: &ModeFilter, spec: &SampleSpec) -> Self {
        SaliencyCollectors {
            collectors: filter.modes().map(|m| (m, SampleCollector::new(spec))).collect(),
        }
    }

    pub fn get(&self, mode: Mode) -> Option<&SampleCollector> {
        self.collectors.get(&mode)
    }

    pub fn get_mut(&mut self, mode: Mode) -> Option<&mut SampleCollector> {
        self.collectors.get_mut(&mode)
    }
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
