//! # Ready-to-use tweet analysis pipelines
//!
//! The pipelines in this module cover the two analyses the crate performs on a
//! tweet:
//!
//! #### 1. Sentiment classification
//! Three-class (Positive / Neutral / Negative) sentiment prediction through an
//! externally pre-trained transformer checkpoint, consumed as a TorchScript
//! trace. The default configuration targets the multilingual
//! `cardiffnlp/twitter-xlm-roberta-base-sentiment` checkpoint.
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
//!
//! #### 2. Disaster keyword detection
//! Substring scan of the tweet against a fixed Indonesian/English forest-fire
//! and haze vocabulary, used to flag disaster-relevant tweets. This is a pure
//! string operation with no model involved.
//!
//! ```
//! use haze_sentiment::pipelines::keywords::KeywordDetector;
//!
//! let detector = KeywordDetector::default();
//! let matches = detector.detect("Kabut asap makin parah di Riau");
//! assert!(matches.contains(&"kabut asap"));
//! ```

pub mod common;
pub mod keywords;
pub mod sentiment;
pub mod sequence_classification;
