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

//! # TweetEval sentiment reference dataset
//! Loader for the TweetEval sentiment splits (`cardiffnlp/tweet_eval`),
//! exported as tab-separated files with a `text` and `label` column. The
//! dataset is only used by the overview/demo view for descriptive statistics
//! and keyword filtering; the sentiment pipeline never reads it.

use crate::common::error::HazeSentimentError;
use crate::pipelines::keywords::KeywordDetector;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// A single labeled tweet from the reference corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetExample {
    pub text: String,
    pub label: i64,
}

/// Train and test splits of the reference corpus.
#[derive(Debug)]
pub struct TweetEvalDataset {
    pub train: Vec<TweetExample>,
    pub test: Vec<TweetExample>,
}

/// A reference tweet retained by the keyword filter, tagged with the first
/// matching keyword.
#[derive(Debug)]
pub struct KeywordFilteredExample<'a> {
    pub text: &'a str,
    pub label: i64,
    pub keyword: &'a str,
}

/// Display name for a TweetEval integer label. Demo-only convenience: the
/// mapping shipped with the model configuration remains authoritative for
/// inference outputs.
pub fn label_name(label: i64) -> Option<&'static str> {
    match label {
        0 => Some("Negative"),
        1 => Some("Neutral"),
        2 => Some("Positive"),
        _ => None,
    }
}

fn read_split<P: AsRef<Path>>(path: P) -> Result<Vec<TweetExample>, HazeSentimentError> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .from_reader(file);
    let mut examples = Vec::new();
    for record in reader.deserialize() {
        let example: TweetExample = record?;
        examples.push(example);
    }
    Ok(examples)
}

impl TweetEvalDataset {
    /// Load the train and test splits from tab-separated files with a
    /// `text`/`label` header. A missing or malformed file is fatal to the
    /// caller's view; there is no partial load.
    pub fn from_tsv<P: AsRef<Path>>(
        train_path: P,
        test_path: P,
    ) -> Result<TweetEvalDataset, HazeSentimentError> {
        Ok(TweetEvalDataset {
            train: read_split(train_path)?,
            test: read_split(test_path)?,
        })
    }

    /// Reference tweets from the train split whose text contains a disaster
    /// keyword. Each retained row is tagged with only its first matching
    /// keyword, matching the single-tag-per-tweet presentation of the
    /// exploration view.
    pub fn filter_by_keywords<'a>(
        &'a self,
        detector: &'a KeywordDetector,
    ) -> Vec<KeywordFilteredExample<'a>> {
        self.train
            .iter()
            .filter_map(|example| {
                detector
                    .detect_first(&example.text)
                    .map(|keyword| KeywordFilteredExample {
                        text: &example.text,
                        label: example.label,
                        keyword,
                    })
            })
            .collect()
    }
}

/// Count of filtered rows per integer label, for the distribution summary of
/// the exploration view.
pub fn label_distribution(examples: &[KeywordFilteredExample]) -> HashMap<i64, usize> {
    let mut distribution = HashMap::new();
    for example in examples {
        *distribution.entry(example.label).or_insert(0) += 1;
    }
    distribution
}
