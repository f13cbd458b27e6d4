use gbdt::decision_tree::{Data, PredVec, ValueType};
use gbdt::gradient_boost::GBDT;

use crate::error::{CropMindError, CropMindResult};

/// Hold-out accuracy of the shipped model, reported with every recommendation.
pub const MODEL_ACCURACY: f64 = 99.32;

pub const FEATURE_COUNT: usize = 7;

/// Measurement order the classifier was trained with:
/// N, P, K, temperature, humidity, pH, rainfall.
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Class index to crop name, matching the label encoding of the
/// training dataset the shipped artifact was fitted on.
pub const CROP_LABELS: [&str; 22] = [
    "Apple", "Banana", "Blackgram", "Chickpea", "Coconut", "Coffee", "Cotton", "Grapes", "Jute",
    "Kidneybeans", "Lentil", "Maize", "Mango", "Mothbeans", "Mungbean", "Muskmelon", "Orange",
    "Papaya", "Pigeonpeas", "Pomegranate", "Rice", "Watermelon",
];

/// Pre-trained gradient boosted classifier loaded once at startup.
pub struct CropPredictor {
    model: GBDT,
}

impl CropPredictor {
    pub fn load(path: &str) -> CropMindResult<Self> {
        let model = GBDT::load_model(path).map_err(|e| {
            CropMindError::Model(format!("Failed to load model from {}: {}", path, e))
        })?;
        Ok(Self { model })
    }

    pub fn predict(&self, features: &FeatureRow) -> &'static str {
        let row = Data::new_test_data(features.iter().map(|v| *v as ValueType).collect(), None);
        let predictions: PredVec = self.model.predict(&vec![row]);
        label_for(predictions.first().copied().unwrap_or(0.0))
    }
}

// The model regresses the class index; anything outside the label range
// is clamped to the nearest valid crop.
fn label_for(raw: ValueType) -> &'static str {
    let idx = (raw.round().max(0.0) as usize).min(CROP_LABELS.len() - 1);
    CROP_LABELS[idx]
}

/// Hand-written fallback consulted when no trained artifact is present.
#[cfg(feature = "rule-fallback")]
pub fn rule_based_recommendation(features: &FeatureRow) -> &'static str {
    let [nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall] = *features;
    if nitrogen > 100.0 && temperature > 25.0 {
        "Cotton"
    } else if potassium > 50.0 && ph < 6.0 {
        "Rice"
    } else if phosphorus > 50.0 && humidity < 70.0 {
        "Wheat"
    } else if temperature < 20.0 && rainfall > 200.0 {
        "Grapes"
    } else {
        "Maize"
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use gbdt::config::Config;
    use gbdt::decision_tree::{Data, DataVec, ValueType};
    use gbdt::gradient_boost::GBDT;
    use std::path::Path;

    /// Fits a tiny model that always regresses to `label` and writes it to
    /// `path` in the format `CropPredictor::load` expects.
    pub fn train_constant_model(path: &Path, label: ValueType) {
        let mut cfg = Config::new();
        cfg.set_feature_size(super::FEATURE_COUNT);
        cfg.set_max_depth(3);
        cfg.set_iterations(5);
        cfg.set_shrinkage(1.0);
        cfg.set_loss("SquaredError");

        let mut training: DataVec = Vec::new();
        for i in 0..30 {
            let jitter = (i % 5) as ValueType;
            training.push(Data::new_training_data(
                vec![
                    90.0 + jitter,
                    40.0 + jitter,
                    40.0,
                    22.0,
                    80.0,
                    6.5,
                    200.0 + jitter,
                ],
                1.0,
                label,
                None,
            ));
        }

        let mut model = GBDT::new(&cfg);
        model.fit(&mut training);
        model
            .save_model(path.to_str().expect("model path is not valid UTF-8"))
            .expect("failed to save test model");
    }
}
