use std::collections::HashSet;
use crate::analysis::token::TokenType;
use crate::analysis::tokenizer::{SourceTokenizer, Tokenizer};

/// Lexical features of one code text. Derived fresh per comparison, never
/// cached or persisted.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    pub tokens: HashSet<String>,       // identifiers + operators/punctuation
    pub identifiers: HashSet<String>,  // name-like subset of tokens
    pub line_count: usize,
}

/// Turns raw source text into a comparable `FeatureSet`
pub struct FeatureExtractor {
    pub tokenizer: Box<dyn Tokenizer>,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        FeatureExtractor {
            tokenizer: Box::new(SourceTokenizer::default()),
        }
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        FeatureExtractor { tokenizer }
    }

    /// Literals, whitespace and comments never reach the feature sets, so
    /// shared boilerplate headers cannot inflate similarity. Line count is
    /// taken from the raw text, independent of how far tokenization got.
    pub fn extract(&self, code: &str) -> FeatureSet {
        let mut features = FeatureSet {
            tokens: HashSet::new(),
            identifiers: HashSet::new(),
            line_count: code.lines().count(),
        };

        for token in self.tokenizer.tokenize(code) {
            match token.token_type {
                TokenType::Identifier => {
                    features.identifiers.insert(token.text.clone());
                    features.tokens.insert(token.text);
                }
                TokenType::Operator | TokenType::Punctuation => {
                    features.tokens.insert(token.text);
                }
                TokenType::Number | TokenType::StringLiteral | TokenType::Comment => {}
            }
        }

        features
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        FeatureExtractor::new()
    }
}
