use tracing::info;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::StoreStats;
use crate::core::types::{Submission, SubmissionId};
use crate::providers::{AiSignalClassifier, DisabledAiSignals, DisabledEmbeddings, EmbeddingProvider};
use crate::scoring::risk::{self, AuthenticityReport};
use crate::scoring::scorer::CompositeScorer;
use crate::search::matcher::MatchFinder;
use crate::search::results;
use crate::storage::layout::StorageLayout;
use crate::storage::store::SubmissionStore;

/// Outcome of a similarity check for one submission
#[derive(Debug, Clone)]
pub struct AuthenticityCheck {
    pub max_score: f64,
    pub most_similar_id: Option<SubmissionId>,
}

/// Facade over the store, the match finder and the external collaborators.
/// Constructed once at process start; all operations go through it, the
/// underlying map is never exposed.
pub struct Engine {
    config: Config,
    store: SubmissionStore,
    finder: MatchFinder,
    embeddings: Box<dyn EmbeddingProvider>,
    classifier: Box<dyn AiSignalClassifier>,
}

impl Engine {
    /// Open with both external collaborators disabled
    pub fn open(config: Config) -> Result<Self> {
        Self::open_with_providers(config, Box::new(DisabledEmbeddings), Box::new(DisabledAiSignals))
    }

    pub fn open_with_providers(
        config: Config,
        embeddings: Box<dyn EmbeddingProvider>,
        classifier: Box<dyn AiSignalClassifier>,
    ) -> Result<Self> {
        let storage = StorageLayout::new(config.storage_path.clone())?;
        let store = SubmissionStore::open(storage);
        let finder = MatchFinder::new(CompositeScorer::new(
            config.structural_weight,
            config.sequence_weight,
        ));

        info!(
            path = %config.storage_path.display(),
            submissions = store.len(),
            embeddings = embeddings.name(),
            classifier = classifier.name(),
            "authenticity engine open"
        );

        Ok(Engine {
            config,
            store,
            finder,
            embeddings,
            classifier,
        })
    }

    /// Store a submission. An unavailable embedding provider never fails
    /// the ingest; the record simply carries no embedding.
    pub fn ingest(&self, code: &str, author_id: &str, problem_id: &str) -> Submission {
        let embedding = self.embeddings.embed(code);
        self.store.insert(code, author_id, problem_id, embedding)
    }

    pub fn list_for_problem(&self, problem_id: &str) -> Vec<Submission> {
        self.store.query_by_problem(problem_id)
    }

    /// Ingest the submission, then report the strongest match among stored
    /// peers on the same problem. The submitting author's own history is
    /// excluded from the comparison.
    pub fn check_authenticity(
        &self,
        code: &str,
        author_id: &str,
        problem_id: &str,
        threshold: f64,
    ) -> AuthenticityCheck {
        let submission = self.ingest(code, author_id, problem_id);
        let candidates = self.store.query_by_problem(&submission.problem_id);
        let matches = self.finder.find_similar(
            code,
            &candidates,
            threshold,
            Some(&submission.author_id),
        );

        let best = results::best_match(&matches);
        AuthenticityCheck {
            max_score: best.map(|m| m.score).unwrap_or(0.0),
            most_similar_id: best.map(|m| m.submission.id),
        }
    }

    /// Full advisory report: the similarity check at the configured
    /// threshold, folded with the external AI signal through the max rule.
    /// Always returns a best-effort result; authenticity is advisory, not
    /// a gate.
    pub fn authenticity_report(
        &self,
        code: &str,
        author_id: &str,
        problem_id: &str,
    ) -> AuthenticityReport {
        let check = self.check_authenticity(
            code,
            author_id,
            problem_id,
            self.config.similarity_threshold,
        );
        let signal = self.classifier.detect(code);

        let mut reasons = Vec::new();
        if let Some(id) = check.most_similar_id {
            reasons.push(format!(
                "matches stored submission {} at {:.2}",
                id, check.max_score
            ));
        }
        if let Some(signal) = &signal {
            reasons.extend(signal.signals.iter().cloned());
        }

        let risk_score = risk::risk_score(check.max_score, signal.map(|s| s.confidence));
        let verdict = risk::verdict_for(
            risk_score,
            self.config.high_risk_score,
            self.config.suspect_risk_score,
        );

        AuthenticityReport {
            risk_score,
            verdict,
            reasons,
        }
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
