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

//! Tweet-level sentiment classification with a disaster-relevance flag, for
//! research on public reaction to forest-fire and haze events.
//!
//! The crate wraps an externally pre-trained multilingual transformer
//! checkpoint (consumed as a TorchScript trace through [`tch`]) in a
//! ready-to-use sentiment pipeline, and pairs it with a fixed-vocabulary
//! disaster keyword detector. A terminal demo binary (`haze-demo`) renders
//! both analyses plus descriptive statistics over the TweetEval reference
//! corpus.
//!
//! # Quick start
//!
//! ```no_run
//! use haze_sentiment::pipelines::keywords::KeywordDetector;
//! use haze_sentiment::pipelines::sentiment::SentimentModel;
//!
//! # fn main() -> anyhow::Result<()> {
//! let sentiment_model = SentimentModel::new(Default::default())?;
//! let detector = KeywordDetector::default();
//!
//! let tweet = "Kabut asap makin parah di Riau";
//! let sentiment = sentiment_model.predict_one(tweet);
//! let keywords = detector.detect(tweet);
//!
//! println!("{} (score {:.3})", sentiment.label, sentiment.score);
//! println!("keywords: {}", keywords.join(", "));
//! # Ok(())
//! # }
//! ```
//!
//! # Loading models
//!
//! Model weights, configuration and vocabulary are referenced through
//! [`resources`]: local files or (with the default `remote` feature) URLs
//! downloaded and cached on first use. The classifier itself is an external
//! artifact; this crate implements no network architecture and performs no
//! training.

pub mod common;
pub mod datasets;
pub mod pipelines;

pub use common::config::Config;
pub use common::error::HazeSentimentError;
pub use common::resources;
