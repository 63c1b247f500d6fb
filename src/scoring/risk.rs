use serde::{Serialize, Deserialize};

/// Coarse reading of a risk score, for display alongside grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    HighRisk,
    Suspect,
    Clear,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighRisk => write!(f, "HIGH RISK"),
            Self::Suspect => write!(f, "SUSPECT"),
            Self::Clear => write!(f, "CLEAR"),
        }
    }
}

/// Advisory authenticity result. Never gates or reduces a correctness or
/// quality score computed elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticityReport {
    pub risk_score: f64,          // 0-100
    pub verdict: Verdict,
    pub reasons: Vec<String>,
}

/// Decision policy: report the stronger of "looks copied" and "looks
/// machine-generated" on a 0-100 scale. Absent AI-signal data counts as
/// confidence 0, not as an error.
pub fn risk_score(top_match_score: f64, ai_confidence: Option<f64>) -> f64 {
    let copied = top_match_score * 100.0;
    let generated = ai_confidence.unwrap_or(0.0) * 100.0;
    copied.max(generated)
}

pub fn verdict_for(risk: f64, high_cutoff: f64, suspect_cutoff: f64) -> Verdict {
    if risk >= high_cutoff {
        Verdict::HighRisk
    } else if risk >= suspect_cutoff {
        Verdict::Suspect
    } else {
        Verdict::Clear
    }
}
