// Copyright 2025 the haze-sentiment project authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Sentiment analysis pipeline
//! Predicts the three-class sentiment (Positive / Neutral / Negative) of a
//! tweet. By default the dependencies for the multilingual
//! `cardiffnlp/twitter-xlm-roberta-base-sentiment` checkpoint are downloaded to
//! the user's cache directory, under `~/.cache/.haze-sentiment`.
//!
//! The raw label tokens vary between checkpoint versions: some publish the
//! lowercase words `negative`/`neutral`/`positive`, others only the positional
//! placeholders `LABEL_0`/`LABEL_1`/`LABEL_2`. Both forms normalize to the same
//! canonical labels; an unrecognized token is passed through unchanged rather
//! than rejected, so a future checkpoint with a different label scheme degrades
//! to displaying its raw labels instead of failing.
//!
//! ```no_run
//! use haze_sentiment::pipelines::sentiment::SentimentModel;
//!
//! # fn main() -> anyhow::Result<()> {
//! let sentiment_model = SentimentModel::new(Default::default())?;
//! let input = [
//!     "Kabut asap makin parah di Riau",
//!     "I love sunny weather today",
//! ];
//! let output = sentiment_model.predict(&input);
//! # Ok(())
//! # }
//! ```

use crate::common::error::HazeSentimentError;
use crate::pipelines::common::TokenizerOption;
use crate::pipelines::sequence_classification::{
    SequenceClassificationConfig, SequenceClassificationModel,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Canonical sentiment label. Raw tokens outside the recognized vocabulary are
/// carried unchanged in the `Other` variant.
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    /// Unrecognized raw label token, passed through unchanged
    Other(String),
}

impl SentimentLabel {
    /// Normalize a raw label token. The token is lowercased before lookup;
    /// both the word forms (`negative`, `neutral`, `positive`) and the
    /// positional placeholders (`LABEL_0`, `LABEL_1`, `LABEL_2`) are
    /// recognized. Any other token is preserved as `Other`.
    pub fn from_raw(raw_label: &str) -> SentimentLabel {
        match raw_label.to_lowercase().as_str() {
            "negative" | "label_0" => SentimentLabel::Negative,
            "neutral" | "label_1" => SentimentLabel::Neutral,
            "positive" | "label_2" => SentimentLabel::Positive,
            _ => SentimentLabel::Other(raw_label.to_owned()),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Other(raw_label) => write!(f, "{}", raw_label),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Sentiment returned by the model.
pub struct Sentiment {
    /// Normalized sentiment label
    pub label: SentimentLabel,
    /// Confidence score of the winning class
    pub score: f64,
}

pub type SentimentConfig = SequenceClassificationConfig;

/// # SentimentModel to perform three-class sentiment analysis
pub struct SentimentModel {
    sequence_classification_model: SequenceClassificationModel,
}

impl SentimentModel {
    /// Build a new `SentimentModel`
    ///
    /// # Arguments
    ///
    /// * `sentiment_config` - `SentimentConfig` object containing the resource
    ///   references (model, vocabulary, configuration) and device placement (CPU/GPU)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use haze_sentiment::pipelines::sentiment::SentimentModel;
    ///
    /// let sentiment_model = SentimentModel::new(Default::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(sentiment_config: SentimentConfig) -> Result<SentimentModel, HazeSentimentError> {
        let sequence_classification_model = SequenceClassificationModel::new(sentiment_config)?;
        Ok(SentimentModel {
            sequence_classification_model,
        })
    }

    /// Build a new `SentimentModel` with a provided tokenizer.
    pub fn new_with_tokenizer(
        sentiment_config: SentimentConfig,
        tokenizer: TokenizerOption,
    ) -> Result<SentimentModel, HazeSentimentError> {
        let sequence_classification_model =
            SequenceClassificationModel::new_with_tokenizer(sentiment_config, tokenizer)?;
        Ok(SentimentModel {
            sequence_classification_model,
        })
    }

    /// Extract the sentiment for each text of an input batch. The texts are
    /// encoded and classified as a single batch; one `Sentiment` is returned
    /// per input, in input order.
    ///
    /// # Arguments
    ///
    /// * `input` - `&[&str]` Array of texts to extract the sentiment from.
    ///
    /// # Returns
    /// * `Vec<Sentiment>` Sentiments extracted from the texts.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use haze_sentiment::pipelines::sentiment::SentimentModel;
    ///
    /// let sentiment_model = SentimentModel::new(Default::default())?;
    ///
    /// let input = [
    ///     "Kebakaran hutan meluas, kabut asap menyelimuti kota",
    ///     "Finally some rain to clear the air!",
    /// ];
    ///
    /// let output = sentiment_model.predict(&input);
    /// # Ok(())
    /// # }
    /// ```
    pub fn predict<'a, S>(&self, input: S) -> Vec<Sentiment>
    where
        S: AsRef<[&'a str]>,
    {
        let labels = self.sequence_classification_model.predict(input);
        let mut sentiments = Vec::with_capacity(labels.len());
        for label in labels {
            sentiments.push(Sentiment {
                label: SentimentLabel::from_raw(&label.text),
                score: label.score,
            })
        }
        sentiments
    }

    /// Extract the sentiment for a single text, submitted as a one-element
    /// batch. Callers are expected to reject blank input before invoking the
    /// model; an empty string is encoded like any other text here.
    pub fn predict_one(&self, input: &str) -> Sentiment {
        let mut sentiments = self.predict([input]);
        sentiments.remove(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[ignore] // no need to run, compilation is enough to verify it is Send
    fn test() {
        let config = SentimentConfig::default();
        let _: Box<dyn Send> = Box::new(SentimentModel::new(config));
    }

    #[test]
    fn normalizes_word_labels() {
        assert_eq!(
            SentimentLabel::from_raw("negative"),
            SentimentLabel::Negative
        );
        assert_eq!(SentimentLabel::from_raw("neutral"), SentimentLabel::Neutral);
        assert_eq!(
            SentimentLabel::from_raw("positive"),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn normalizes_positional_labels() {
        assert_eq!(SentimentLabel::from_raw("LABEL_0"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw("LABEL_1"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_raw("LABEL_2"), SentimentLabel::Positive);
    }

    #[test]
    fn normalization_is_case_insensitive() {
        assert_eq!(
            SentimentLabel::from_raw("Positive"),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_raw("NEGATIVE"),
            SentimentLabel::Negative
        );
        assert_eq!(SentimentLabel::from_raw("label_1"), SentimentLabel::Neutral);
    }

    #[test]
    fn unrecognized_labels_pass_through() {
        assert_eq!(
            SentimentLabel::from_raw("LABEL_5"),
            SentimentLabel::Other("LABEL_5".to_string())
        );
        assert_eq!(SentimentLabel::from_raw("LABEL_5").to_string(), "LABEL_5");
    }

    #[test]
    fn canonical_labels_display_as_words() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }
}
