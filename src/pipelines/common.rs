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

//! # Common blocks for the classification pipeline
//! Tokenizer and model-configuration abstractions shared by the sequence
//! classification pipeline. The supported checkpoints are RoBERTa-family
//! models, so only the RoBERTa and XLM-RoBERTa tokenizers are wrapped here.

use crate::common::config::Config;
use crate::common::error::HazeSentimentError;
use rust_tokenizers::tokenizer::{
    MultiThreadedTokenizer, RobertaTokenizer, TruncationStrategy, XLMRobertaTokenizer,
};
use rust_tokenizers::vocab::{RobertaVocab, Vocab, XLMRobertaVocab};
use rust_tokenizers::TokenizedInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
/// # Identifies the type of model
pub enum ModelType {
    Roberta,
    XLMRoberta,
}

/// # Subset of a model configuration file relevant for classification
/// Carries the label-index-to-token mapping published with the checkpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Label mapping as provided by the model configuration, if any
    pub id2label: Option<HashMap<i64, String>>,
    /// Inverse label mapping, unused but kept for round-tripping configurations
    pub label2id: Option<HashMap<String, i64>>,
}

impl Config for ClassifierConfig {}

impl ClassifierConfig {
    /// Returns the label mapping for the checkpoint. The mapping shipped in the
    /// configuration file is authoritative; when it is absent the positional
    /// `LABEL_n` convention is synthesized so downstream normalization still
    /// applies for 3-class checkpoints.
    pub fn get_label_mapping(&self, num_labels: i64) -> HashMap<i64, String> {
        match &self.id2label {
            Some(mapping) if !mapping.is_empty() => mapping.clone(),
            _ => (0..num_labels)
                .map(|label_index| (label_index, format!("LABEL_{}", label_index)))
                .collect(),
        }
    }
}

/// # Abstraction over the supported tokenizers
pub enum TokenizerOption {
    /// RoBERTa tokenizer (BPE vocabulary and merges)
    Roberta(RobertaTokenizer),
    /// XLM-RoBERTa tokenizer (SentencePiece model)
    XLMRoberta(XLMRobertaTokenizer),
}

impl TokenizerOption {
    /// Interface method to load a tokenizer from file
    pub fn from_file(
        model_type: ModelType,
        vocab_path: &str,
        merges_path: Option<&str>,
        lower_case: bool,
        add_prefix_space: Option<bool>,
    ) -> Result<Self, HazeSentimentError> {
        let tokenizer = match model_type {
            ModelType::Roberta => {
                let merges_path = merges_path.ok_or_else(|| {
                    HazeSentimentError::InvalidConfigurationError(
                        "RoBERTa tokenizer requires a merges file".to_string(),
                    )
                })?;
                TokenizerOption::Roberta(RobertaTokenizer::from_file(
                    vocab_path,
                    merges_path,
                    lower_case,
                    add_prefix_space.unwrap_or(false),
                )?)
            }
            ModelType::XLMRoberta => {
                if add_prefix_space.is_some() {
                    return Err(HazeSentimentError::InvalidConfigurationError(format!(
                        "Optional input `add_prefix_space` set to value {} but cannot be used by {:?}",
                        add_prefix_space.unwrap(),
                        model_type
                    )));
                }
                TokenizerOption::XLMRoberta(XLMRobertaTokenizer::from_file(
                    vocab_path, lower_case,
                )?)
            }
        };
        Ok(tokenizer)
    }

    /// Returns the model type
    pub fn model_type(&self) -> ModelType {
        match *self {
            Self::Roberta(_) => ModelType::Roberta,
            Self::XLMRoberta(_) => ModelType::XLMRoberta,
        }
    }

    /// Interface method to encode a list of texts
    pub fn encode_list(
        &self,
        text_list: &[&str],
        max_len: usize,
        truncation_strategy: &TruncationStrategy,
        stride: usize,
    ) -> Vec<TokenizedInput> {
        match *self {
            Self::Roberta(ref tokenizer) => MultiThreadedTokenizer::encode_list(
                tokenizer,
                text_list,
                max_len,
                truncation_strategy,
                stride,
            ),
            Self::XLMRoberta(ref tokenizer) => MultiThreadedTokenizer::encode_list(
                tokenizer,
                text_list,
                max_len,
                truncation_strategy,
                stride,
            ),
        }
    }

    /// Interface method to access the padding token id
    pub fn get_pad_id(&self) -> Option<i64> {
        match *self {
            Self::Roberta(ref tokenizer) => Some(
                *MultiThreadedTokenizer::vocab(tokenizer)
                    .special_values
                    .get(RobertaVocab::pad_value())
                    .expect("PAD token not found in vocabulary"),
            ),
            Self::XLMRoberta(ref tokenizer) => Some(
                *MultiThreadedTokenizer::vocab(tokenizer)
                    .special_values
                    .get(XLMRobertaVocab::pad_value())
                    .expect("PAD token not found in vocabulary"),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn label_mapping_falls_back_to_positional_labels() {
        let config = ClassifierConfig {
            id2label: None,
            label2id: None,
        };
        let mapping = config.get_label_mapping(3);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get(&0).map(String::as_str), Some("LABEL_0"));
        assert_eq!(mapping.get(&2).map(String::as_str), Some("LABEL_2"));
    }

    #[test]
    fn label_mapping_from_configuration_is_authoritative() {
        let mut id2label = HashMap::new();
        id2label.insert(0, "negative".to_string());
        id2label.insert(1, "neutral".to_string());
        id2label.insert(2, "positive".to_string());
        let config = ClassifierConfig {
            id2label: Some(id2label),
            label2id: None,
        };
        let mapping = config.get_label_mapping(3);
        assert_eq!(mapping.get(&1).map(String::as_str), Some("neutral"));
    }
}
