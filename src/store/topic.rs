//! JSON topic files, one per topic.
//!
//! A topic file is a JSON array of card records, each carrying `question`,
//! `interval`, `score` and `last_answered`. Loads are all-or-nothing: a
//! record missing a required field or breaking an invariant aborts the load
//! so a partially populated topic is never handed out. Saves go through a
//! temp file and a rename, so a failed write leaves the previous file
//! intact.

use crate::error::{Error, Result};
use crate::models::Card;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads a topic file. A missing file is an empty topic, not an error.
pub fn load_topic(path: &Path) -> Result<Vec<Card>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    let cards: Vec<Card> =
        serde_json::from_str(&contents).map_err(|e| Error::MalformedRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    for card in &cards {
        if card.interval == 0 {
            return Err(Error::MalformedRecord {
                path: path.to_path_buf(),
                reason: format!("card {:?} has interval 0", card.question),
            });
        }
    }

    debug!(path = %path.display(), cards = cards.len(), "loaded topic");
    Ok(cards)
}

/// Saves the full topic, overwriting `path` atomically via a temp file in
/// the same directory.
pub fn save_topic(cards: &[Card], path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(cards)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json_string.as_bytes())?;
    fs::rename(&tmp, path)?;

    debug!(path = %path.display(), cards = cards.len(), "saved topic");
    Ok(())
}

/// Lists the topic files (`*.json`) in `dir`, sorted by file name.
pub fn list_topics(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut topics: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    topics.sort();
    Ok(topics)
}

/// Bulk maintenance: resets every card in every topic under `dir` to
/// `score = 0`, `interval = 1`, `last_answered = now`. Returns the number
/// of topic files rewritten.
pub fn reset_topics(dir: &Path, now: DateTime<Utc>) -> Result<usize> {
    let topics = list_topics(dir)?;

    for path in &topics {
        let mut cards = load_topic(path)?;
        for card in &mut cards {
            card.score = 0;
            card.interval = 1;
            card.last_answered = now;
        }
        save_topic(&cards, path)?;
        info!(path = %path.display(), "reset topic");
    }

    Ok(topics.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_cards() -> Vec<Card> {
        vec![
            Card {
                question: "What is borrowing?".to_string(),
                interval: 2,
                score: 4,
                last_answered: "2026-08-10T08:00:00Z".parse().unwrap(),
            },
            Card {
                question: "What is a lifetime?".to_string(),
                interval: 1,
                score: 0,
                last_answered: "2026-08-20T19:30:00Z".parse().unwrap(),
            },
        ]
    }

    #[test]
    fn test_missing_file_is_an_empty_topic() {
        let dir = tempdir().unwrap();
        let cards = load_topic(&dir.path().join("nope.json")).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rust.json");
        let cards = sample_cards();

        save_topic(&cards, &path).unwrap();
        let loaded = load_topic(&path).unwrap();

        assert_eq!(cards, loaded);
    }

    #[test]
    fn test_missing_required_field_aborts_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"question":"q","score":1}]"#).unwrap();

        let err = load_topic(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn test_zero_interval_aborts_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"[{"question":"q","interval":0,"score":1,"last_answered":"2026-08-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let err = load_topic(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn test_missing_last_answered_is_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("old.json");
        fs::write(&path, r#"[{"question":"q","interval":3,"score":2}]"#).unwrap();

        let cards = load_topic(&path).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].interval, 3);
    }

    #[test]
    fn test_list_topics_finds_only_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let topics = list_topics(dir.path()).unwrap();
        assert_eq!(topics.len(), 2);
        assert!(topics.iter().all(|p| p.extension().unwrap() == "json"));
    }

    #[test]
    fn test_reset_rewrites_every_card() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rust.json");
        save_topic(&sample_cards(), &path).unwrap();

        let now = Utc::now();
        let count = reset_topics(dir.path(), now).unwrap();
        assert_eq!(count, 1);

        let cards = load_topic(&path).unwrap();
        for card in cards {
            assert_eq!(card.score, 0);
            assert_eq!(card.interval, 1);
            assert_eq!(card.last_answered, now);
        }
    }
}
