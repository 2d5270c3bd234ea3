use anyhow::Result;
use haze_sentiment::datasets::tweet_eval::{label_distribution, label_name, TweetEvalDataset};
use haze_sentiment::pipelines::keywords::KeywordDetector;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_split(rows: &[(&str, i64)]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "text\tlabel")?;
    for (text, label) in rows {
        writeln!(file, "{}\t{}", text, label)?;
    }
    Ok(file)
}

#[test]
fn loads_train_and_test_splits() -> Result<()> {
    let train = write_split(&[
        ("Kebakaran hutan melanda Riau", 0),
        ("Cuaca hari ini biasa saja", 1),
        ("Udara segar setelah hujan", 2),
    ])?;
    let test = write_split(&[("The haze is terrible this week", 0)])?;

    let dataset = TweetEvalDataset::from_tsv(train.path(), test.path())?;

    assert_eq!(dataset.train.len(), 3);
    assert_eq!(dataset.test.len(), 1);
    assert_eq!(dataset.train[0].text, "Kebakaran hutan melanda Riau");
    assert_eq!(dataset.train[0].label, 0);
    assert_eq!(dataset.test[0].label, 0);
    Ok(())
}

#[test]
fn missing_split_file_is_an_error() {
    let result = TweetEvalDataset::from_tsv("no/such/train.tsv", "no/such/test.tsv");
    assert!(result.is_err());
}

#[test]
fn keyword_filter_tags_each_row_with_its_first_match() -> Result<()> {
    let train = write_split(&[
        ("Kebakaran hutan melanda Riau", 0),
        ("Udara segar setelah hujan", 2),
        ("Asap tebal menyelimuti kota", 0),
    ])?;
    let test = write_split(&[("placeholder", 1)])?;
    let dataset = TweetEvalDataset::from_tsv(train.path(), test.path())?;
    let detector = KeywordDetector::default();

    let filtered = dataset.filter_by_keywords(&detector);

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].keyword, "kebakaran hutan");
    // "asap" precedes "asap tebal" in the vocabulary, so it wins the single tag
    assert_eq!(filtered[1].keyword, "asap");
    assert_eq!(filtered[1].label, 0);
    Ok(())
}

#[test]
fn distribution_counts_filtered_rows_per_label() -> Result<()> {
    let train = write_split(&[
        ("Kabut asap di Palangkaraya", 0),
        ("Titik api terpantau lagi", 0),
        ("Hujan memadamkan kebakaran, syukurlah", 2),
    ])?;
    let test = write_split(&[("placeholder", 1)])?;
    let dataset = TweetEvalDataset::from_tsv(train.path(), test.path())?;
    let detector = KeywordDetector::default();

    let filtered = dataset.filter_by_keywords(&detector);
    let distribution = label_distribution(&filtered);

    assert_eq!(distribution.get(&0), Some(&2));
    assert_eq!(distribution.get(&2), Some(&1));
    assert_eq!(distribution.get(&1), None);
    Ok(())
}

#[test]
fn label_names_cover_the_three_classes() {
    assert_eq!(label_name(0), Some("Negative"));
    assert_eq!(label_name(1), Some("Neutral"));
    assert_eq!(label_name(2), Some("Positive"));
    assert_eq!(label_name(3), None);
    assert_eq!(label_name(-1), None);
}
