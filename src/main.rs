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

//! Terminal demo front-end: live tweet analysis plus a project overview page
//! over the TweetEval reference corpus. All user-facing strings and navigation
//! state live here; the library pipelines are pure collaborators.

use clap::{App, Arg};
use haze_sentiment::common::resources::{LocalResource, ResourceProvider};
use haze_sentiment::datasets::tweet_eval::{label_distribution, label_name, TweetEvalDataset};
use haze_sentiment::pipelines::common::ModelType;
use haze_sentiment::pipelines::keywords::KeywordDetector;
use haze_sentiment::pipelines::sentiment::{SentimentConfig, SentimentModel};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tch::Device;

/// Navigation state of the demo, owned here and nowhere else.
enum Page {
    Home,
    Overview,
}

fn local_resource(path: &str) -> Box<dyn ResourceProvider + Send> {
    Box::new(LocalResource::from(PathBuf::from(path)))
}

fn build_sentiment_config(matches: &clap::ArgMatches) -> SentimentConfig {
    let mut config = match (
        matches.value_of("weights"),
        matches.value_of("config"),
        matches.value_of("vocab"),
    ) {
        (Some(weights), Some(model_config), Some(vocab)) => SentimentConfig::new(
            ModelType::XLMRoberta,
            local_resource(weights),
            local_resource(model_config),
            local_resource(vocab),
            matches.value_of("merges").map(local_resource),
        ),
        _ => SentimentConfig::default(),
    };
    if matches.is_present("cpu") {
        config.device = Device::Cpu;
    }
    config
}

/// Returns `None` once stdin is exhausted.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn analyze_page(model: &SentimentModel, detector: &KeywordDetector) -> io::Result<()> {
    let tweet = match prompt("Tweet: ")? {
        Some(tweet) => tweet,
        None => return Ok(()),
    };
    if tweet.trim().is_empty() {
        // Blank input never reaches the model.
        warn!("empty input submitted");
        println!("Please enter some text first.");
        return Ok(());
    }

    let sentiment = model.predict_one(&tweet);
    println!("Sentiment: {} (score {:.3})", sentiment.label, sentiment.score);

    let keywords = detector.detect(&tweet);
    if keywords.is_empty() {
        println!("No forest-fire or haze keywords detected.");
    } else {
        println!("Keywords detected: {}", keywords.join(", "));
        println!("This tweet discusses forest fires or haze.");
    }
    Ok(())
}

fn overview_page(dataset: Option<&TweetEvalDataset>, detector: &KeywordDetector) {
    println!("== Project overview ==");
    println!("Three-class tweet sentiment (Positive / Neutral / Negative) from the");
    println!("multilingual cardiffnlp/twitter-xlm-roberta-base-sentiment checkpoint,");
    println!("encoded with truncation at 128 tokens; logits -> argmax -> label.");
    println!("A fixed Indonesian/English keyword list flags forest-fire/haze tweets.");
    println!();

    let dataset = match dataset {
        Some(dataset) => dataset,
        None => {
            println!("No reference dataset loaded (pass --train-data/--test-data).");
            return;
        }
    };

    let train_size = dataset.train.len();
    let test_size = dataset.test.len();
    let total = train_size + test_size;
    println!("TweetEval sentiment corpus:");
    println!(
        "  train: {} tweets ({:.1}%)",
        train_size,
        train_size as f64 / total as f64 * 100.0
    );
    println!(
        "  test:  {} tweets ({:.1}%)",
        test_size,
        test_size as f64 / total as f64 * 100.0
    );

    println!("\nSample tweets:");
    for example in dataset.train.iter().take(3) {
        println!(
            "  [{}] {}",
            label_name(example.label).unwrap_or("Unknown"),
            preview(&example.text)
        );
    }

    let filtered = dataset.filter_by_keywords(detector);
    println!(
        "\n{} train tweets contain a forest-fire/haze keyword:",
        filtered.len()
    );
    for example in filtered.iter().take(10) {
        println!(
            "  [{} / {}] {}",
            label_name(example.label).unwrap_or("Unknown"),
            example.keyword,
            preview(example.text)
        );
    }

    if !filtered.is_empty() {
        println!("\nSentiment distribution of the filtered tweets:");
        let distribution = label_distribution(&filtered);
        let mut labels: Vec<_> = distribution.iter().collect();
        labels.sort_by_key(|(label, _)| **label);
        for (label, count) in labels {
            println!(
                "  {}: {} tweets ({:.1}%)",
                label_name(*label).unwrap_or("Unknown"),
                count,
                *count as f64 / filtered.len() as f64 * 100.0
            );
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > 80 {
        let truncated: String = text.chars().take(77).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "haze_demo=info,haze_sentiment=debug");
    }
    pretty_env_logger::init();

    let matches = App::new("haze-demo")
        .about("Tweet sentiment analysis with forest-fire/haze keyword flagging")
        .arg(
            Arg::with_name("weights")
                .long("weights")
                .takes_value(true)
                .help("Path to a TorchScript export of the classifier"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .help("Path to the model config.json"),
        )
        .arg(
            Arg::with_name("vocab")
                .long("vocab")
                .takes_value(true)
                .help("Path to the tokenizer vocabulary (SentencePiece model)"),
        )
        .arg(
            Arg::with_name("merges")
                .long("merges")
                .takes_value(true)
                .help("Path to the BPE merges file (RoBERTa tokenizers only)"),
        )
        .arg(
            Arg::with_name("cpu")
                .long("cpu")
                .help("Force CPU inference even when CUDA is available"),
        )
        .arg(
            Arg::with_name("train-data")
                .long("train-data")
                .takes_value(true)
                .help("TweetEval train split (tab-separated, text/label header)"),
        )
        .arg(
            Arg::with_name("test-data")
                .long("test-data")
                .takes_value(true)
                .help("TweetEval test split (tab-separated, text/label header)"),
        )
        .get_matches();

    info!("loading sentiment model and tokenizer");
    // Loaded once per process; every analysis reuses the same read-only model.
    let model = SentimentModel::new(build_sentiment_config(&matches))?;
    let detector = KeywordDetector::default();
    info!("model ready");

    let dataset = match (matches.value_of("train-data"), matches.value_of("test-data")) {
        (Some(train_path), Some(test_path)) => {
            Some(TweetEvalDataset::from_tsv(train_path, test_path)?)
        }
        _ => None,
    };

    let mut page = Page::Home;
    loop {
        let choice = match prompt("\n[1] Analyze tweet  [2] Project overview  [q] Quit > ")? {
            Some(choice) => choice,
            None => break,
        };
        match choice.trim() {
            "1" => page = Page::Home,
            "2" => page = Page::Overview,
            "q" | "Q" => break,
            "" => continue,
            other => {
                println!("Unknown option: {}", other);
                continue;
            }
        }
        match page {
            Page::Home => analyze_page(&model, &detector)?,
            Page::Overview => overview_page(dataset.as_ref(), &detector),
        }
    }
    Ok(())
}
