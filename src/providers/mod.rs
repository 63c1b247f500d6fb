use serde::{Serialize, Deserialize};

/// External text-embedding collaborator. `None` means no embedding is
/// available; ingestion must proceed without one.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Option<Vec<f32>>;

    fn name(&self) -> &str;
}

/// External AI-generation classifier. Consumed only at the decision-policy
/// boundary; its heuristics are not reproduced in this crate.
pub trait AiSignalClassifier: Send + Sync {
    fn detect(&self, code: &str) -> Option<AiSignal>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSignal {
    pub confidence: f64,          // in [0, 1]
    pub signals: Vec<String>,     // human-readable indicators
}

/// Stand-in when no embedding provider is configured
pub struct DisabledEmbeddings;

impl EmbeddingProvider for DisabledEmbeddings {
    fn embed(&self, _text: &str) -> Option<Vec<f32>> {
        None
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Stand-in when no AI-signal classifier is configured
pub struct DisabledAiSignals;

impl AiSignalClassifier for DisabledAiSignals {
    fn detect(&self, _code: &str) -> Option<AiSignal> {
        None
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
