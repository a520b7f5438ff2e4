use festim_core::FestimError;

use crate::collector::SampleSpec;
use crate::labels::LabelMapping;
use crate::mode::ModeFilter;

/// Integrated-gradient settings of the saliency trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrating {
    /// `n` integration rounds; the smoothed-integrated variant reuses the
    /// trace's smoothing count. 0 disables integration.
    Rounds(usize),
    /// Integration rounds with their own smoothing count for the
    /// smoothed-integrated variant.
    WithSmoothing { integration: usize, smoothing: usize },
}

impl Integrating {
    /// Resolves to `(integration rounds, smoothing rounds)`, or `None` when disabled.
    pub fn resolve(&self, default_smoothing: usize) -> Option<(usize, usize)> {
        match *self {
            Integrating::Rounds(0) | Integrating::WithSmoothing { integration: 0, .. } => None,
            Integrating::Rounds(n) => Some((n, default_smoothing)),
            Integrating::WithSmoothing { integration, smoothing } => Some((integration, smoothing)),
        }
    }
}

impl Default for Integrating {
    fn default() -> Self {
        Integrating::WithSmoothing {
            integration: 100,
            smoothing: 6,
        }
    }
}

/// Configuration of the [`Saliency`](crate::Saliency) trace.
#[derive(Debug, Clone)]
pub struct SaliencyConfig {
    pub model_inputs: Vec<String>,
    pub model_outputs: Vec<String>,
    /// Key of the true labels, reported next to the predictions.
    pub class_key: Option<String>,
    pub label_mapping: Option<LabelMapping>,
    /// Names of the generated saliency outputs; the first also names the report.
    pub outputs: Vec<String>,
    pub samples: SampleSpec,
    pub mode: ModeFilter,
    /// Rounds of smoothing, 0 to disable.
    pub smoothing: usize,
    pub integrating: Integrating,
}

impl SaliencyConfig {
    pub fn new<I, O>(model_inputs: I, model_outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        SaliencyConfig {
            model_inputs: model_inputs.into_iter().map(Into::into).collect(),
            model_outputs: model_outputs.into_iter().map(Into::into).collect(),
            class_key: None,
            label_mapping: None,
            outputs: vec!["saliency".to_string()],
            samples: SampleSpec::Batch,
            mode: ModeFilter::default(),
            smoothing: 25,
            integrating: Integrating::default(),
        }
    }

    pub fn with_class_key(mut self, class_key: impl Into<String>) -> Self {
        self.class_key = Some(class_key.into());
        self
    }

    pub fn with_label_mapping(mut self, mapping: LabelMapping) -> Self {
        self.label_mapping = Some(mapping);
        self
    }

    pub fn with_outputs<O>(mut self, outputs: O) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
    {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_samples(mut self, samples: SampleSpec) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_mode(mut self, mode: ModeFilter) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_smoothing(mut self, smoothing: usize) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_integrating(mut self, integrating: Integrating) -> Self {
        self.integrating = integrating;
        self
    }

    /// # Errors
    /// Returns `FestimError::InvalidArgument` if there are no model inputs,
    /// no model outputs, or no output names.
    pub fn validate(&self) -> Result<(), FestimError> {
        if self.model_inputs.is_empty() {
            return Err(FestimError::InvalidArgument("saliency needs at least one model input".to_string()));
        }
        if self.model_outputs.is_empty() {
            return Err(FestimError::InvalidArgument("saliency needs at least one model output".to_string()));
        }
        if self.outputs.is_empty() {
            return Err(FestimError::InvalidArgument("saliency needs at least one output name".to_string()));
        }
        Ok(())
    }
}
