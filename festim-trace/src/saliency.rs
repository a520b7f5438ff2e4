// festim-trace/src/saliency.rs

//! # Saliency trace
//!
//! Collects a handful of samples per mode during an epoch and, at the end of
//! the epoch, asks a [`SaliencyNet`] for saliency masks over them. The
//! masks are returned as a [`SaliencyReport`] together with the samples,
//! the labels, and overlays of each mask on its sample.

use festim_core::ndarray::ArrayD;
use festim_core::{FestimError, Record};

use crate::blend::blend_saliency;
use crate::collector::{SaliencyCollectors, Samples};
use crate::config::SaliencyConfig;
use crate::mode::Mode;

/// Computes saliency masks for a model.
///
/// Every method receives the collected samples keyed by input name and
/// returns arrays keyed by output name. `get_masks` must also return the
/// model's predictions under each model output key.
pub trait SaliencyNet {
    fn get_masks(&self, samples: &Samples) -> Result<Samples, FestimError>;

    fn get_smoothed_masks(
        &self,
        samples: &Samples,
        nsamples: usize,
        nintegration: Option<usize>,
    ) -> Result<Samples, FestimError>;

    fn get_integrated_masks(&self, samples: &Samples, nsamples: usize) -> Result<Samples, FestimError>;
}

/// One entry of a [`SaliencyReport`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    Array(ArrayD<f32>),
    /// Class ids translated through a label mapping.
    Labels(Vec<String>),
}

impl ReportValue {
    pub fn as_array(&self) -> Option<&ArrayD<f32>> {
        match self {
            ReportValue::Array(a) => Some(a),
            ReportValue::Labels(_) => None,
        }
    }
}

/// Image-style report produced at the end of an epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyReport {
    /// Name the report is written under.
    pub name: String,
    pub colormap: &'static str,
    /// Entries in display order.
    pub entries: Vec<(String, ReportValue)>,
}

impl SaliencyReport {
    pub fn get(&self, key: &str) -> Option<&ReportValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Trace computing saliency maps for a model throughout training.
pub struct Saliency<N: SaliencyNet> {
    net: N,
    config: SaliencyConfig,
    collectors: SaliencyCollectors,
}

impl<N: SaliencyNet> Saliency<N> {
    /// # Errors
    /// Propagates [`SaliencyConfig::validate`] failures.
    pub fn new(net: N, config: SaliencyConfig) -> Result<Self, FestimError> {
        config.validate()?;
        let collectors = SaliencyCollectors::new(&config.mode, &config.samples);
        Ok(Saliency { net, config, collectors })
    }

    /// Keys read from each batch: the class key (if any) then the model inputs.
    pub fn inputs(&self) -> Vec<String> {
        self.config
            .class_key
            .iter()
            .chain(self.config.model_inputs.iter())
            .cloned()
            .collect()
    }

    pub fn outputs(&self) -> &[String] {
        &self.config.outputs
    }

    pub fn config(&self) -> &SaliencyConfig {
        &self.config
    }

    /// Feeds one batch to the collector of `mode`. Modes the trace is not
    /// active in are ignored.
    pub fn on_batch_end(&mut self, mode: Mode, batch: &Record) -> Result<(), FestimError> {
        let keys = self.inputs();
        match self.collectors.get_mut(mode) {
            Some(collector) => collector.accumulate(&keys, batch),
            None => Ok(()),
        }
    }

    /// Finalizes the samples of `mode` and builds the saliency report.
    ///
    /// Returns `Ok(None)` for inactive modes and when no samples were
    /// collected.
    pub fn on_epoch_end(&mut self, mode: Mode) -> Result<Option<SaliencyReport>, FestimError> {
        let samples = match self.collectors.get_mut(mode) {
            Some(collector) => match collector.finalize()? {
                Some(samples) => samples.clone(),
                None => {
                    log::warn!("Saliency: no samples collected in {} mode, skipping report", mode);
                    return Ok(None);
                }
            },
            None => return Ok(None),
        };

        let masks = self.net.get_masks(&samples)?;
        let smoothed = match self.config.smoothing {
            0 => None,
            n => Some(self.net.get_smoothed_masks(&samples, n, None)?),
        };
        let (integrated, smint) = match self.config.integrating.resolve(self.config.smoothing) {
            Some((n_integration, n_smoothing)) => {
                let integrated = self.net.get_integrated_masks(&samples, n_integration)?;
                let smint = if n_smoothing > 0 {
                    Some(self.net.get_smoothed_masks(&samples, n_smoothing, Some(n_integration))?)
                } else {
                    None
                };
                (Some(integrated), smint)
            }
            None => (None, None),
        };

        let report = self.arrange(&samples, &masks, smoothed.as_ref(), integrated.as_ref(), smint.as_ref())?;
        log::debug!("Saliency: {} mode report with {} entries", mode, report.entries.len());
        Ok(Some(report))
    }

    fn arrange(
        &self,
        samples: &Samples,
        masks: &Samples,
        smoothed: Option<&Samples>,
        integrated: Option<&Samples>,
        smint: Option<&Samples>,
    ) -> Result<SaliencyReport, FestimError> {
        let mut entries = Vec::new();
        let class_key = self.config.class_key.as_deref();

        if let Some(key) = class_key {
            entries.push((key.to_string(), self.classes(lookup(samples, key)?)?));
        }
        for key in &self.config.model_outputs {
            entries.push((key.clone(), self.classes(lookup(masks, key)?)?));
        }

        let best = smint.or(integrated).or(smoothed).unwrap_or(masks);
        for key in self.sample_keys(samples) {
            let value = lookup(samples, &key)?;
            entries.push((key.clone(), ReportValue::Array(value.clone())));
            for out in &self.config.outputs {
                let blended = blend_saliency(value, lookup(best, out)?)?;
                entries.push((format!("{} {}", key, out), ReportValue::Array(blended)));
            }
        }

        for out in &self.config.outputs {
            entries.push((out.clone(), ReportValue::Array(lookup(masks, out)?.clone())));
            let variants = [("Smoothed", smoothed), ("Integrated", integrated), ("SmInt", smint)];
            for (prefix, variant) in variants.into_iter().filter_map(|(p, v)| v.map(|v| (p, v))) {
                entries.push((format!("{} {}", prefix, out), ReportValue::Array(lookup(variant, out)?.clone())));
            }
        }

        Ok(SaliencyReport {
            name: self.config.outputs[0].clone(),
            colormap: "inferno",
            entries,
        })
    }

    /// Non-class sample keys: the model inputs in configured order, then any
    /// other keys of user-provided samples.
    fn sample_keys(&self, samples: &Samples) -> Vec<String> {
        let class_key = self.config.class_key.as_deref();
        let mut keys: Vec<String> = self
            .config
            .model_inputs
            .iter()
            .filter(|k| Some(k.as_str()) != class_key && samples.contains_key(k.as_str()))
            .cloned()
            .collect();
        for key in samples.keys() {
            if Some(key.as_str()) != class_key && !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }

    fn classes(&self, ids: &ArrayD<f32>) -> Result<ReportValue, FestimError> {
        match &self.config.label_mapping {
            Some(mapping) => Ok(ReportValue::Labels(mapping.apply(ids)?)),
            None => Ok(ReportValue::Array(ids.clone())),
        }
    }
}

fn lookup<'a>(map: &'a Samples, key: &str) -> Result<&'a ArrayD<f32>, FestimError> {
    map.get(key).ok_or_else(|| FestimError::KeyNotFound(key.to_string()))
}

#[cfg(test)]
#[path = "saliency_test.rs"]
mod tests;
