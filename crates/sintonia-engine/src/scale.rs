//! Min-max feature scaling.

use serde::{Deserialize, Serialize};

use sintonia_core::model::{Features, NUMERIC_FIELD_NAMES, NUMERIC_FIELD_COUNT};
use sintonia_core::{Catalog, Error, Result};

/// Per-column min-max scale parameters.
///
/// `fit` is the only constructor, so an unfitted scaler cannot exist
/// and the parameters never change after construction. The scaler is
/// fit on the candidate pool only; the frontend catalog is transformed
/// with the same parameters to keep both collections on one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: [f64; NUMERIC_FIELD_COUNT],
    max: [f64; NUMERIC_FIELD_COUNT],
}

impl MinMaxScaler {
    /// Compute per-column min and max over the finite values of
    /// `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Normalization`] when the catalog is empty or a
    /// column holds no finite value at all.
    pub fn fit(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::Normalization(
                "cannot fit scaler on an empty catalog".to_string(),
            ));
        }

        let mut min = [f64::INFINITY; NUMERIC_FIELD_COUNT];
        let mut max = [f64::NEG_INFINITY; NUMERIC_FIELD_COUNT];

        for song in catalog.songs() {
            for (column, value) in song.features.to_array().into_iter().enumerate() {
                if value.is_finite() {
                    min[column] = min[column].min(value);
                    max[column] = max[column].max(value);
                }
            }
        }

        for column in 0..NUMERIC_FIELD_COUNT {
            if min[column] > max[column] {
                return Err(Error::Normalization(format!(
                    "column {} has no parseable values to fit on",
                    NUMERIC_FIELD_NAMES[column]
                )));
            }
        }

        log::debug!("fitted scaler on {} rows", catalog.len());
        Ok(Self { min, max })
    }

    /// Fitted minimum per column, in [`NUMERIC_FIELD_NAMES`] order.
    #[must_use]
    pub fn data_min(&self) -> &[f64; NUMERIC_FIELD_COUNT] {
        &self.min
    }

    /// Fitted maximum per column, in [`NUMERIC_FIELD_NAMES`] order.
    #[must_use]
    pub fn data_max(&self) -> &[f64; NUMERIC_FIELD_COUNT] {
        &self.max
    }

    fn scale(&self, column: usize, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        let range = self.max[column] - self.min[column];
        if range == 0.0 {
            // Zero-variance column: every fitted value maps to 0.
            0.0
        } else {
            (value - self.min[column]) / range
        }
    }

    /// Scale one song's features with the fitted parameters.
    ///
    /// Values inside the fitted range land in [0, 1]; values outside it
    /// (possible when the frontend catalog is not a strict subset of
    /// the pool) scale proportionally and may leave [0, 1]. NaN stays
    /// NaN.
    #[must_use]
    pub fn transform(&self, features: Features) -> Features {
        let mut values = features.to_array();
        for (column, value) in values.iter_mut().enumerate() {
            *value = self.scale(column, *value);
        }
        Features::from_array(values)
    }

    /// Scale every row of a catalog, preserving order and identity.
    #[must_use]
    pub fn transform_catalog(&self, catalog: Catalog) -> Catalog {
        catalog.map_features(|features| self.transform(features))
    }
}
