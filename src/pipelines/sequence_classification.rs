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

//! # Sequence classification pipeline
//! Wraps an externally pre-trained sequence classification checkpoint, exported
//! as a TorchScript trace returning the class logits. The pipeline owns the
//! paired tokenizer and the label-index-to-token mapping read from the model
//! configuration; it performs no training and holds no mutable state after
//! load, so a loaded model can serve any number of `predict` calls.
//!
//! ```no_run
//! use haze_sentiment::pipelines::sequence_classification::SequenceClassificationModel;
//!
//! # fn main() -> anyhow::Result<()> {
//! let model = SequenceClassificationModel::new(Default::default())?;
//! let input = [
//!     "Kebakaran hutan meluas di Kalimantan",
//!     "What a beautiful morning!",
//! ];
//! let output = model.predict(&input);
//! # Ok(())
//! # }
//! ```

use crate::common::config::Config;
use crate::common::error::HazeSentimentError;
#[cfg(feature = "remote")]
use crate::common::resources::RemoteResource;
use crate::common::resources::ResourceProvider;
use crate::pipelines::common::{ClassifierConfig, ModelType, TokenizerOption};
use rust_tokenizers::tokenizer::TruncationStrategy;
use rust_tokenizers::TokenizedInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tch::{no_grad, CModule, Device, Kind, Tensor};

/// Pre-trained resources for the multilingual Twitter sentiment checkpoint.
/// The model resource points to a TorchScript export of the checkpoint; see the
/// crate README for the one-line tracing recipe.
pub struct TwitterXlmRobertaSentimentResources;

impl TwitterXlmRobertaSentimentResources {
    /// TorchScript trace of the classifier, returning the class logits
    pub const MODEL: (&'static str, &'static str) = (
        "twitter-xlm-roberta-sentiment/model",
        "https://huggingface.co/cardiffnlp/twitter-xlm-roberta-base-sentiment/resolve/main/traced_model.pt",
    );
    /// Model configuration, including the `id2label` mapping
    pub const CONFIG: (&'static str, &'static str) = (
        "twitter-xlm-roberta-sentiment/config",
        "https://huggingface.co/cardiffnlp/twitter-xlm-roberta-base-sentiment/resolve/main/config.json",
    );
    /// SentencePiece vocabulary for the paired tokenizer
    pub const VOCAB: (&'static str, &'static str) = (
        "twitter-xlm-roberta-sentiment/vocab",
        "https://huggingface.co/cardiffnlp/twitter-xlm-roberta-base-sentiment/resolve/main/sentencepiece.bpe.model",
    );
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Label predicted for an input text
pub struct Label {
    /// Raw label token from the model's label mapping
    pub text: String,
    /// Confidence score of the winning class
    pub score: f64,
    /// Winning class index
    pub id: i64,
    /// Position of the input in the submitted batch
    pub sentence: usize,
}

/// # Configuration for the sequence classification pipeline
/// Contains the resource references (weights, configuration, vocabulary),
/// tokenizer options and device placement.
pub struct SequenceClassificationConfig {
    /// Model type (governs which tokenizer is paired with the checkpoint)
    pub model_type: ModelType,
    /// TorchScript model weights resource
    pub model_resource: Box<dyn ResourceProvider + Send>,
    /// Model configuration resource
    pub config_resource: Box<dyn ResourceProvider + Send>,
    /// Tokenizer vocabulary resource
    pub vocab_resource: Box<dyn ResourceProvider + Send>,
    /// Optional merges resource (BPE tokenizers only)
    pub merges_resource: Option<Box<dyn ResourceProvider + Send>>,
    /// Flag indicating if the tokenizer should lower-case its input
    pub lower_case: bool,
    /// Flag indicating if the tokenizer should add a prefix space (BPE tokenizers only)
    pub add_prefix_space: Option<bool>,
    /// Device to place the model on (default: CUDA when available)
    pub device: Device,
    /// Maximum encoded sequence length; longer inputs are truncated
    pub max_length: usize,
    /// Number of output classes of the checkpoint
    pub num_labels: i64,
}

impl SequenceClassificationConfig {
    /// Instantiate a new configuration for a given checkpoint.
    pub fn new(
        model_type: ModelType,
        model_resource: Box<dyn ResourceProvider + Send>,
        config_resource: Box<dyn ResourceProvider + Send>,
        vocab_resource: Box<dyn ResourceProvider + Send>,
        merges_resource: Option<Box<dyn ResourceProvider + Send>>,
    ) -> SequenceClassificationConfig {
        SequenceClassificationConfig {
            model_type,
            model_resource,
            config_resource,
            vocab_resource,
            merges_resource,
            lower_case: false,
            add_prefix_space: None,
            device: Device::cuda_if_available(),
            max_length: 128,
            num_labels: 3,
        }
    }
}

#[cfg(feature = "remote")]
impl Default for SequenceClassificationConfig {
    /// Provides the multilingual Twitter sentiment checkpoint
    /// (`cardiffnlp/twitter-xlm-roberta-base-sentiment`)
    fn default() -> SequenceClassificationConfig {
        SequenceClassificationConfig::new(
            ModelType::XLMRoberta,
            Box::new(RemoteResource::from_pretrained(
                TwitterXlmRobertaSentimentResources::MODEL,
            )),
            Box::new(RemoteResource::from_pretrained(
                TwitterXlmRobertaSentimentResources::CONFIG,
            )),
            Box::new(RemoteResource::from_pretrained(
                TwitterXlmRobertaSentimentResources::VOCAB,
            )),
            None,
        )
    }
}

/// # SequenceClassificationModel for 3-class tweet classification
pub struct SequenceClassificationModel {
    tokenizer: TokenizerOption,
    classifier: CModule,
    label_mapping: HashMap<i64, String>,
    device: Device,
    max_length: usize,
}

impl SequenceClassificationModel {
    /// Build a new `SequenceClassificationModel`
    ///
    /// # Arguments
    ///
    /// * `config` - `SequenceClassificationConfig` object containing the resource
    ///   references (model, vocabulary, configuration) and device placement (CPU/GPU)
    pub fn new(
        config: SequenceClassificationConfig,
    ) -> Result<SequenceClassificationModel, HazeSentimentError> {
        let vocab_path = config.vocab_resource.get_local_path()?;
        let merges_path = config
            .merges_resource
            .as_ref()
            .map(|resource| resource.get_local_path())
            .transpose()?;

        let tokenizer = TokenizerOption::from_file(
            config.model_type,
            vocab_path.to_str().unwrap(),
            merges_path.as_deref().map(|path| path.to_str().unwrap()),
            config.lower_case,
            config.add_prefix_space,
        )?;
        Self::new_with_tokenizer(config, tokenizer)
    }

    /// Build a new `SequenceClassificationModel` with a provided tokenizer.
    pub fn new_with_tokenizer(
        config: SequenceClassificationConfig,
        tokenizer: TokenizerOption,
    ) -> Result<SequenceClassificationModel, HazeSentimentError> {
        let config_path = config.config_resource.get_local_path()?;
        let weights_path = config.model_resource.get_local_path()?;
        let device = config.device;

        let model_config = ClassifierConfig::from_file(config_path);
        let label_mapping = model_config.get_label_mapping(config.num_labels);
        let classifier = CModule::load_on_device(&weights_path, device)?;

        log::debug!(
            "loaded classifier from {:?} with {} output labels",
            weights_path,
            label_mapping.len()
        );
        Ok(SequenceClassificationModel {
            tokenizer,
            classifier,
            label_mapping,
            device,
            max_length: config.max_length,
        })
    }

    /// Get a reference to the model tokenizer.
    pub fn get_tokenizer(&self) -> &TokenizerOption {
        &self.tokenizer
    }

    /// Get a reference to the label mapping read from the model configuration.
    pub fn get_label_mapping(&self) -> &HashMap<i64, String> {
        &self.label_mapping
    }

    fn prepare_for_model(&self, input: &[&str]) -> (Tensor, Tensor) {
        let tokenized_input: Vec<TokenizedInput> = self.tokenizer.encode_list(
            input,
            self.max_length,
            &TruncationStrategy::LongestFirst,
            0,
        );
        let max_len = tokenized_input
            .iter()
            .map(|input| input.token_ids.len())
            .max()
            .unwrap_or(0);
        let pad_id = self
            .tokenizer
            .get_pad_id()
            .expect("The tokenizer used for sequence classification should contain a PAD id");

        let mut input_ids = Vec::with_capacity(tokenized_input.len());
        let mut attention_masks = Vec::with_capacity(tokenized_input.len());
        for tokenized in tokenized_input {
            let mut token_ids = tokenized.token_ids;
            let mut mask = vec![1i64; token_ids.len()];
            token_ids.extend(vec![pad_id; max_len - token_ids.len()]);
            mask.extend(vec![0i64; max_len - mask.len()]);
            input_ids.push(Tensor::of_slice(&token_ids));
            attention_masks.push(Tensor::of_slice(&mask));
        }
        (
            Tensor::stack(input_ids.as_slice(), 0).to(self.device),
            Tensor::stack(attention_masks.as_slice(), 0).to(self.device),
        )
    }

    /// Classify a batch of texts. The batch is encoded and submitted to the
    /// model as a whole; one `Label` is returned per input, in input order.
    /// A single text is classified by submitting a one-element batch; an empty
    /// batch yields an empty result without touching the model.
    ///
    /// Runtime failures in the forward pass are not recovered from and abort
    /// the current request, mirroring the single deterministic call contract.
    ///
    /// # Arguments
    ///
    /// * `input` - `&[&str]` Array of texts to classify.
    ///
    /// # Returns
    ///
    /// * `Vec<Label>` containing the winning label for each input text
    pub fn predict<'a, S>(&self, input: S) -> Vec<Label>
    where
        S: AsRef<[&'a str]>,
    {
        if input.as_ref().is_empty() {
            return Vec::new();
        }
        let (input_ids, attention_mask) = self.prepare_for_model(input.as_ref());
        let output = no_grad(|| {
            self.classifier
                .forward_ts(&[input_ids, attention_mask])
                .expect("Sequence classification forward pass failed")
        });
        let output = output.softmax(-1, Kind::Float).detach().to(Device::Cpu);
        // argmax keeps the first index on score ties
        let label_indices = output.argmax(-1, true).squeeze_dim(1);
        let scores = output
            .gather(1, &label_indices.unsqueeze(-1), false)
            .squeeze_dim(1);
        let label_indices = label_indices.iter::<i64>().unwrap().collect::<Vec<i64>>();
        let scores = scores.iter::<f64>().unwrap().collect::<Vec<f64>>();

        let mut labels: Vec<Label> = Vec::with_capacity(label_indices.len());
        for (sentence, (label_index, score)) in
            label_indices.into_iter().zip(scores.into_iter()).enumerate()
        {
            let text = self
                .label_mapping
                .get(&label_index)
                .cloned()
                .unwrap_or_else(|| format!("LABEL_{}", label_index));
            labels.push(Label {
                text,
                score,
                id: label_index,
                sentence,
            });
        }
        labels
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[ignore] // no need to run, compilation is enough to verify it is Send
    fn test() {
        let config = SequenceClassificationConfig::default();
        let _: Box<dyn Send> = Box::new(SequenceClassificationModel::new(config));
    }
}
