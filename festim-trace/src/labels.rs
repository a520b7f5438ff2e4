use std::collections::BTreeMap;

use festim_core::ndarray::ArrayD;
use festim_core::ops::squeeze;
use festim_core::FestimError;

/// Maps numeric class ids back to class names.
///
/// Built from `class name -> id` pairs. If two names share an id, the later
/// one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    by_id: BTreeMap<i64, String>,
}

impl LabelMapping {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        LabelMapping {
            by_id: classes.into_iter().map(|(name, id)| (id, name.into())).collect(),
        }
    }

    pub fn label(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Squeezes `ids` and replaces every element with its class name.
    ///
    /// # Errors
    /// Returns `FestimError::LabelNotMapped` for a non-integral id or an id
    /// with no class name.
    pub fn apply(&self, ids: &ArrayD<f32>) -> Result<Vec<String>, FestimError> {
        squeeze(ids)
            .iter()
            .map(|&v| {
                if !v.is_finite() || v.fract() != 0.0 {
                    return Err(FestimError::LabelNotMapped(v.to_string()));
                }
                let id = v as i64;
                self.label(id)
                    .map(str::to_string)
                    .ok_or_else(|| FestimError::LabelNotMapped(id.to_string()))
            })
            .collect()
    }
}
