pub mod core;
pub mod analysis;
pub mod scoring;
pub mod storage;
pub mod search;
pub mod providers;

/*
┌────────────────────────────────────────────────────────────────────────┐
│                       VERIDEX STRUCT ARCHITECTURE                      │
└────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE ──────────────────────────────────┐
│  struct Engine                                                         │
│  ┌──────────────────────────────────────────────────────────────────┐  │
│  │ config: Config                       // Thresholds and weights   │  │
│  │ store: SubmissionStore               // Map + JSON snapshot      │  │
│  │ finder: MatchFinder                  // Cohort near-dup scan     │  │
│  │ embeddings: Box<dyn EmbeddingProvider>   // External, optional   │  │
│  │ classifier: Box<dyn AiSignalClassifier>  // External, optional   │  │
│  └──────────────────────────────────────────────────────────────────┘  │
│  ingest ──────────────► store.insert (write-through snapshot)          │
│  list_for_problem ────► store.query_by_problem                         │
│  check_authenticity ──► ingest, then finder.find_similar over peers    │
│  authenticity_report ─► check + AI signal, risk = max of the two       │
└────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── SCORING ────────────────────────────────┐
│  CompositeScorer = 0.3 * TokenOverlapScorer (Jaccard on token sets)    │
│                  + 0.7 * SequenceScorer (matching-blocks ratio)        │
│  Token sets come from analysis::FeatureExtractor, which lexes with a   │
│  tolerant SourceTokenizer and drops literals/comments/whitespace.      │
└────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── STORAGE ────────────────────────────────┐
│  SubmissionStore                                                       │
│    submissions: RwLock<HashMap<SubmissionId, Submission>>              │
│    one writer section = map mutation + full-snapshot persist           │
│    snapshot: pretty JSON, temp-then-rename, corrupt file ⇒ empty store │
└────────────────────────────────────────────────────────────────────────┘
*/
