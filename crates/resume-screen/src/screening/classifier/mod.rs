//! Statistical scoring strategy: a TF-IDF vectorizer plus a binary logistic
//! regression classifier trained once over the historical screening corpus.
//! Selected instead of, never layered on, the rule-based matcher.

mod dataset;
mod vectorizer;

pub use dataset::{bootstrap_corpus, load_corpus, load_corpus_from_path, LabeledResume};
pub use vectorizer::{TfIdfVectorizer, DEFAULT_MAX_VOCABULARY};

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

/// Errors raised while building the classifier. All are fatal at startup; the
/// engine never falls back to a degenerate model.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("training corpus is empty")]
    EmptyCorpus,
    #[error("training corpus has {0} distinct label(s); two are required")]
    InsufficientLabelDiversity(usize),
    #[error("training corpus has {0} distinct labels; the classifier is binary")]
    UnsupportedLabelCount(usize),
    #[error("failed to read training dataset: {0}")]
    Dataset(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Knobs for the gradient-descent fit. Defaults mirror the legacy setup.
#[derive(Debug, Clone, Copy)]
pub struct TrainingParams {
    pub max_vocabulary: usize,
    pub learning_rate: f32,
    pub epochs: usize,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            max_vocabulary: DEFAULT_MAX_VOCABULARY,
            learning_rate: 0.5,
            epochs: 200,
        }
    }
}

/// Predicted label plus the maximum posterior probability across the label
/// set.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

/// Binary logistic regression over TF-IDF features. Immutable once trained;
/// retraining produces a fresh model swapped in via [`ClassifierHandle`].
#[derive(Debug, Clone)]
pub struct ResumeClassifier {
    vectorizer: TfIdfVectorizer,
    weights: Vec<f32>,
    bias: f32,
    // labels[1] is the class the sigmoid output models.
    labels: [String; 2],
}

impl ResumeClassifier {
    pub fn train(
        corpus: &[LabeledResume],
        params: TrainingParams,
    ) -> Result<Self, TrainingError> {
        if corpus.is_empty() {
            return Err(TrainingError::EmptyCorpus);
        }

        let distinct: BTreeSet<&str> = corpus.iter().map(|resume| resume.label.as_str()).collect();
        match distinct.len() {
            0 | 1 => return Err(TrainingError::InsufficientLabelDiversity(distinct.len())),
            2 => {}
            other => return Err(TrainingError::UnsupportedLabelCount(other)),
        }

        let mut label_iter = distinct.into_iter();
        let labels = [
            label_iter.next().expect("two labels").to_string(),
            label_iter.next().expect("two labels").to_string(),
        ];

        let documents: Vec<String> = corpus.iter().map(|resume| resume.text.clone()).collect();
        let vectorizer = TfIdfVectorizer::fit(&documents, params.max_vocabulary);

        let features: Vec<Vec<f32>> = documents
            .iter()
            .map(|document| vectorizer.transform(document))
            .collect();
        let targets: Vec<f32> = corpus
            .iter()
            .map(|resume| if resume.label == labels[1] { 1.0 } else { 0.0 })
            .collect();

        let dimensions = vectorizer.vocabulary_len();
        let mut weights = vec![0.0f32; dimensions];
        let mut bias = 0.0f32;
        let sample_count = features.len() as f32;

        for _ in 0..params.epochs {
            let mut weight_gradient = vec![0.0f32; dimensions];
            let mut bias_gradient = 0.0f32;

            for (vector, target) in features.iter().zip(&targets) {
                let error = sigmoid(dot(&weights, vector) + bias) - target;
                for (gradient, value) in weight_gradient.iter_mut().zip(vector) {
                    *gradient += error * value;
                }
                bias_gradient += error;
            }

            for (weight, gradient) in weights.iter_mut().zip(&weight_gradient) {
                *weight -= params.learning_rate * gradient / sample_count;
            }
            bias -= params.learning_rate * bias_gradient / sample_count;
        }

        Ok(Self {
            vectorizer,
            weights,
            bias,
            labels,
        })
    }

    /// Vectorize the text and return the more probable label with its
    /// posterior probability. Deterministic for a fixed model.
    pub fn predict(&self, text: &str) -> Prediction {
        let vector = self.vectorizer.transform(text);
        let positive = sigmoid(dot(&self.weights, &vector) + self.bias);

        if positive >= 0.5 {
            Prediction {
                label: self.labels[1].clone(),
                confidence: positive,
            }
        } else {
            Prediction {
                label: self.labels[0].clone(),
                confidence: 1.0 - positive,
            }
        }
    }

    pub fn labels(&self) -> [&str; 2] {
        [self.labels[0].as_str(), self.labels[1].as_str()]
    }
}

fn dot(left: &[f32], right: &[f32]) -> f32 {
    left.iter().zip(right).map(|(a, b)| a * b).sum()
}

fn sigmoid(value: f32) -> f32 {
    1.0 / (1.0 + (-value).exp())
}

/// Shared handle to the trained model. Predictions read the current `Arc`;
/// retraining swaps the reference in one step so in-flight readers keep a
/// consistent model.
#[derive(Debug)]
pub struct ClassifierHandle {
    model: RwLock<Arc<ResumeClassifier>>,
}

impl ClassifierHandle {
    pub fn new(model: ResumeClassifier) -> Self {
        Self {
            model: RwLock::new(Arc::new(model)),
        }
    }

    pub fn current(&self) -> Arc<ResumeClassifier> {
        self.model.read().expect("classifier lock poisoned").clone()
    }

    /// Replace the model after a retrain. Readers holding the previous `Arc`
    /// finish against the old model.
    pub fn replace(&self, model: ResumeClassifier) {
        *self.model.write().expect("classifier lock poisoned") = Arc::new(model);
    }
}
