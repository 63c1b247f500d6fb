use std::fs;
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use Veridex::core::config::Config;
use Veridex::core::engine::Engine;
use Veridex::providers::{AiSignal, AiSignalClassifier, EmbeddingProvider};
use Veridex::scoring::risk::Verdict;
use Veridex::search::matcher::MatchFinder;

fn test_engine(dir: &TempDir) -> Engine {
    let config = Config {
        storage_path: dir.path().to_path_buf(),
        ..Config::default()
    };
    Engine::open(config).unwrap()
}

#[test]
fn scenario_identical_text_by_another_author_matches_at_one() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);

    let s1 = engine.ingest("def f(x): return x+1", "alice", "p1");
    let s2 = engine.ingest("def f(x): return x+1", "bob", "p1");

    let finder = MatchFinder::default();
    let matches = finder.find_similar(&s1.code, std::slice::from_ref(&s2), 0.9, Some("alice"));

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].submission.id, s2.id);
    assert_eq!(matches[0].score, 1.0);
}

#[test]
fn scenario_exclusion_applies_to_candidate_author() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);

    let s1 = engine.ingest("def f(x): return x+1", "alice", "p1");
    let s2 = engine.ingest("def f(x): return x+1", "bob", "p1");

    // Identical texts, but the candidate belongs to the excluded author
    let finder = MatchFinder::default();
    let matches = finder.find_similar(&s1.code, std::slice::from_ref(&s2), 0.9, Some("bob"));
    assert!(matches.is_empty());
}

#[test]
fn scenario_empty_query_never_matches() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);
    engine.ingest("def f(x): return x+1", "alice", "p1");

    for threshold in [0.1, 0.5, 0.9] {
        let check = engine.check_authenticity("", "carol", "p1", threshold);
        assert_eq!(check.max_score, 0.0);
        assert!(check.most_similar_id.is_none());
    }
}

#[test]
fn scenario_concurrent_inserts_both_survive() {
    let dir = TempDir::new().unwrap();
    let engine = Arc::new(test_engine(&dir));

    let handles: Vec<_> = ["alice", "bob"]
        .into_iter()
        .map(|author| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine.ingest(&format!("def solve(): return '{}'", author), author, "p1")
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(engine.list_for_problem("p1").len(), 2);

    // The snapshot on disk holds both records too
    drop(engine);
    let reopened = test_engine(&dir);
    assert_eq!(reopened.list_for_problem("p1").len(), 2);
}

#[test]
fn persistence_round_trip() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);
    let original = engine.ingest("fn main() { println!(\"hi\"); }", "alice", "rust-hello");
    drop(engine);

    let reopened = test_engine(&dir);
    let stored = reopened.list_for_problem("rust-hello");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, original.id);
    assert_eq!(stored[0].code, original.code);
    assert_eq!(stored[0].author_id, "alice");
    assert_eq!(stored[0].problem_id, "rust-hello");
}

#[test]
fn corrupt_snapshot_degrades_to_empty_store() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);
    engine.ingest("x = 1", "alice", "p1");
    drop(engine);

    fs::write(dir.path().join("submissions.json"), "{ not json").unwrap();

    // Starts empty instead of refusing to start, and keeps working
    let reopened = test_engine(&dir);
    assert!(reopened.list_for_problem("p1").is_empty());
    reopened.ingest("x = 2", "bob", "p1");
    assert_eq!(reopened.list_for_problem("p1").len(), 1);
}

#[test]
fn missing_ids_fall_back_to_sentinels() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);

    let submission = engine.ingest("x = 1", "", "");
    assert_eq!(submission.author_id, "anonymous");
    assert_eq!(submission.problem_id, "default");
    assert_eq!(engine.list_for_problem("default").len(), 1);
}

#[test]
fn snapshot_is_a_json_object_keyed_by_id() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);
    let submission = engine.ingest("x = 1", "alice", "p1");

    let raw = fs::read_to_string(dir.path().join("submissions.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value[submission.id.to_string()];
    assert_eq!(record["code"], "x = 1");
    assert_eq!(record["author_id"], "alice");
    assert_eq!(record["embedding"], serde_json::Value::Null);
}

struct FixedEmbeddings;

impl EmbeddingProvider for FixedEmbeddings {
    fn embed(&self, _text: &str) -> Option<Vec<f32>> {
        Some(vec![0.25, -0.5, 1.0])
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct FixedAiSignals {
    confidence: f64,
}

impl AiSignalClassifier for FixedAiSignals {
    fn detect(&self, _code: &str) -> Option<AiSignal> {
        Some(AiSignal {
            confidence: self.confidence,
            signals: vec!["uniform formatting".to_string()],
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[test]
fn embeddings_are_stored_and_reloaded() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        storage_path: dir.path().to_path_buf(),
        ..Config::default()
    };
    let engine = Engine::open_with_providers(
        config,
        Box::new(FixedEmbeddings),
        Box::new(FixedAiSignals { confidence: 0.0 }),
    )
    .unwrap();

    let submission = engine.ingest("x = 1", "alice", "p1");
    assert_eq!(submission.embedding, Some(vec![0.25, -0.5, 1.0]));
    drop(engine);

    let reopened = test_engine(&dir);
    let stored = reopened.list_for_problem("p1");
    assert_eq!(stored[0].embedding, Some(vec![0.25, -0.5, 1.0]));
}

#[test]
fn risk_takes_the_stronger_signal() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        storage_path: dir.path().to_path_buf(),
        ..Config::default()
    };
    let engine = Engine::open_with_providers(
        config,
        Box::new(FixedEmbeddings),
        Box::new(FixedAiSignals { confidence: 0.9 }),
    )
    .unwrap();

    // No cohort yet: risk comes entirely from the AI signal
    let report = engine.authenticity_report("def f(x): return x+1", "alice", "p1");
    assert_eq!(report.risk_score, 90.0);
    assert_eq!(report.verdict, Verdict::HighRisk);
    assert!(report.reasons.iter().any(|r| r.contains("uniform formatting")));

    // A verbatim copy by another author outscores the 0.9 signal
    let report = engine.authenticity_report("def f(x): return x+1", "bob", "p1");
    assert_eq!(report.risk_score, 100.0);
    assert_eq!(report.verdict, Verdict::HighRisk);
}

#[test]
fn check_authenticity_records_the_submission() {
    let dir = TempDir::new().unwrap();
    let engine = test_engine(&dir);

    engine.ingest("def f(x): return x+1", "alice", "p1");
    let check = engine.check_authenticity("def f(x): return x+1", "bob", "p1", 0.9);

    assert_eq!(check.max_score, 1.0);
    assert!(check.most_similar_id.is_some());
    // Bob's submission is on record after the check
    assert_eq!(engine.list_for_problem("p1").len(), 2);

    let stats = engine.stats();
    assert_eq!(stats.total_submissions, 2);
    assert_eq!(stats.distinct_problems, 1);
    assert_eq!(stats.distinct_authors, 2);
    assert!(stats.snapshot_size_bytes > 0);
}
