use serde::{Serialize, Deserialize};

/// Source lexeme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text
    pub position: u32,     // Position in the token stream
    pub offset: usize,     // Byte offset in original text
    pub length: usize,     // Token length in bytes
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Identifier,
    Number,
    StringLiteral,
    Operator,
    Punctuation,
    Comment,
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize, token_type: TokenType) -> Self {
        let length = text.len();
        Token {
            text,
            position,
            offset,
            length,
            token_type,
        }
    }
}
