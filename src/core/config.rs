use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: PathBuf,

    // Similarity metric
    pub similarity_threshold: f64,   // Minimum composite score to report a match
    pub structural_weight: f64,      // Weight of the token-overlap term
    pub sequence_weight: f64,        // Weight of the order-sensitive term

    // Risk verdict cut-offs on the 0-100 scale
    pub high_risk_score: f64,
    pub suspect_risk_score: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from("./data"),

            similarity_threshold: 0.85,
            structural_weight: 0.3,
            sequence_weight: 0.7,

            high_risk_score: 85.0,
            suspect_risk_score: 50.0,
        }
    }
}
