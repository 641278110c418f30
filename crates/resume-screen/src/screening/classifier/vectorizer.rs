use std::collections::{BTreeMap, HashMap};

/// Vocabulary cap matching the legacy vectorizer configuration.
pub const DEFAULT_MAX_VOCABULARY: usize = 5000;

/// English stop-words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "before", "being", "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your",
];

/// Term-frequency/inverse-document-frequency vectorizer over a capped
/// vocabulary, fit once on the training corpus and read-only afterwards.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Build the vocabulary from the corpus, keeping the `max_vocabulary`
    /// terms with the highest document frequency. Ties break alphabetically
    /// so fitting is deterministic.
    pub fn fit(documents: &[String], max_vocabulary: usize) -> Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for document in documents {
            let unique: std::collections::BTreeSet<String> =
                tokenize(document).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = document_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_vocabulary);
        ranked.sort_by(|a, b| a.0.cmp(&b.0));

        let document_count = documents.len();
        let mut terms = Vec::with_capacity(ranked.len());
        let mut index = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());

        for (position, (term, frequency)) in ranked.into_iter().enumerate() {
            // Smoothed IDF so unseen terms never divide by zero.
            let weight =
                (((1 + document_count) as f32) / ((1 + frequency) as f32)).ln() + 1.0;
            index.insert(term.clone(), position);
            terms.push(term);
            idf.push(weight);
        }

        Self { terms, index, idf }
    }

    /// Map text to an L2-normalized TF-IDF vector over the fitted vocabulary.
    /// Out-of-vocabulary tokens are dropped.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.terms.len()];

        for token in tokenize(text) {
            if let Some(&position) = self.index.get(&token) {
                vector[position] += 1.0;
            }
        }

        for (position, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[position];
        }

        let norm: f32 = vector.iter().map(|value| value * value).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }
}

/// Lowercase alphanumeric tokens; `+` and `#` stay attached so tokens like
/// `c++` and `c#` survive. Stop-words are dropped.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|character: char| !character.is_alphanumeric() && character != '+' && character != '#')
        .filter(|token| !token.is_empty())
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_drops_stop_words_and_keeps_symbols() {
        let tokens = tokenize("Expert in C++ and the Django framework");
        assert_eq!(tokens, vec!["expert", "c++", "django", "framework"]);
    }

    #[test]
    fn fit_caps_vocabulary_deterministically() {
        let documents = vec![
            "python sql docker".to_string(),
            "python sql".to_string(),
            "python aws".to_string(),
        ];

        let vectorizer = TfIdfVectorizer::fit(&documents, 2);

        // python (df=3) and sql (df=2) outrank aws and docker (df=1).
        assert_eq!(vectorizer.vocabulary_len(), 2);
        assert!(vectorizer.index.contains_key("python"));
        assert!(vectorizer.index.contains_key("sql"));
    }

    #[test]
    fn transform_is_l2_normalized() {
        let documents = vec!["python sql".to_string(), "python aws".to_string()];
        let vectorizer = TfIdfVectorizer::fit(&documents, 10);

        let vector = vectorizer.transform("python sql sql");
        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn transform_of_unknown_tokens_is_zero() {
        let documents = vec!["python sql".to_string()];
        let vectorizer = TfIdfVectorizer::fit(&documents, 10);

        let vector = vectorizer.transform("haskell prolog");
        assert!(vector.iter().all(|value| *value == 0.0));
    }
}
