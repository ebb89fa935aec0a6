//! Fasttext classifier
use std::path::Path;

use ::fasttext::FastText;

use super::Classify;
use crate::error::Error;

const LABEL_PREFIX: &str = "__label__";

/// Clean the prediction label field from `__label__xx` into `xx`.
fn clean_label(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}

/// Holds a [fasttext::FastText] instance and its prediction threshold.
pub struct FastTextClassifier {
    predictor: FastText,
    pub threshold: f32,
}

impl FastTextClassifier {
    /// Load a fasttext model.
    ///
    /// `path` has to be a path to a `bin` file (`lid.176.bin` for example).
    pub fn new(path: &Path, threshold: f32) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::FastText(format!("no model at {:?}", path)));
        }
        let path = path
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid filepath for lid: {:?}", path)))?;
        let mut predictor = FastText::new();
        predictor.load_model(path).map_err(Error::FastText)?;

        Ok(Self {
            predictor,
            threshold,
        })
    }
}

impl Classify for FastTextClassifier {
    fn classify(&self, text: &str) -> Result<Option<String>, Error> {
        // fasttext predicts on a single line
        let text = text.replace('\n', " ").replace(char::from(0), "");
        let predictions = self
            .predictor
            .predict(&text, 1, self.threshold)
            .map_err(Error::FastText)?;

        Ok(predictions
            .first()
            .map(|prediction| clean_label(&prediction.label).to_string()))
    }
}
