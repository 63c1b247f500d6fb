use crate::analysis::token::{Token, TokenType};

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

// Operators matched greedily, longest first
const OPERATORS3: &[&str] = &["===", "!==", "**=", "<<=", ">>=", "..."];
const OPERATORS2: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "->", "=>", "+=", "-=", "*=", "/=",
    "%=", "**", "<<", ">>", "::", "++", "--", "|=", "&=", "^=", ":=", "..",
];
const PUNCTUATION: &[char] = &['(', ')', '[', ']', '{', '}', ',', ';', ':', '.'];

/// Tolerant source-code tokenizer. Not tied to one language: it understands
/// `//`, `#` and `/* */` comments, quoted strings with escapes, numbers,
/// identifiers, and multi-character operators. An unterminated string or
/// block comment truncates the stream instead of failing it, so a partial
/// token stream is always a valid result.
#[derive(Clone)]
pub struct SourceTokenizer {
    pub max_token_length: usize,
}

impl Default for SourceTokenizer {
    fn default() -> Self {
        SourceTokenizer {
            max_token_length: 255,
        }
    }
}

impl Tokenizer for SourceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut i = 0;

        let mut push = |tokens: &mut Vec<Token>, text: String, offset: usize, token_type: TokenType| {
            if text.len() <= self.max_token_length {
                tokens.push(Token::new(text, position, offset, token_type));
                position += 1;
            }
        };

        while i < chars.len() {
            let (offset, c) = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            // Line comments: `//` and `#`
            if c == '#' || (c == '/' && matches!(chars.get(i + 1), Some((_, '/')))) {
                while i < chars.len() && chars[i].1 != '\n' {
                    i += 1;
                }
                let end = chars.get(i).map(|(o, _)| *o).unwrap_or(text.len());
                push(&mut tokens, text[offset..end].to_string(), offset, TokenType::Comment);
                continue;
            }

            // Block comments: `/* ... */`; unterminated truncates the stream
            if c == '/' && matches!(chars.get(i + 1), Some((_, '*'))) {
                let mut j = i + 2;
                loop {
                    match (chars.get(j), chars.get(j + 1)) {
                        (Some((_, '*')), Some((_, '/'))) => break,
                        (Some(_), _) => j += 1,
                        (None, _) => return tokens,
                    }
                }
                let end = chars.get(j + 2).map(|(o, _)| *o).unwrap_or(text.len());
                push(&mut tokens, text[offset..end].to_string(), offset, TokenType::Comment);
                i = j + 2;
                continue;
            }

            // String literals; unterminated truncates the stream
            if c == '"' || c == '\'' {
                let mut j = i + 1;
                loop {
                    match chars.get(j) {
                        Some((_, '\\')) => j += 2,
                        Some((_, q)) if *q == c => break,
                        Some(_) => j += 1,
                        None => return tokens,
                    }
                }
                let end = chars.get(j + 1).map(|(o, _)| *o).unwrap_or(text.len());
                push(&mut tokens, text[offset..end].to_string(), offset, TokenType::StringLiteral);
                i = j + 1;
                continue;
            }

            // Numbers (loose: digits, separators, exponent letters)
            if c.is_ascii_digit() {
                let mut j = i;
                while j < chars.len() {
                    let ch = chars[j].1;
                    if ch.is_alphanumeric() || ch == '.' || ch == '_' {
                        j += 1;
                    } else {
                        break;
                    }
                }
                let end = chars.get(j).map(|(o, _)| *o).unwrap_or(text.len());
                push(&mut tokens, text[offset..end].to_string(), offset, TokenType::Number);
                i = j;
                continue;
            }

            // Identifiers
            if c.is_alphabetic() || c == '_' {
                let mut j = i;
                while j < chars.len() {
                    let ch = chars[j].1;
                    if ch.is_alphanumeric() || ch == '_' {
                        j += 1;
                    } else {
                        break;
                    }
                }
                let end = chars.get(j).map(|(o, _)| *o).unwrap_or(text.len());
                push(&mut tokens, text[offset..end].to_string(), offset, TokenType::Identifier);
                i = j;
                continue;
            }

            // Operators and punctuation, longest operator first
            let rest = &text[offset..];
            if let Some(op) = OPERATORS3.iter().find(|op| rest.starts_with(**op)) {
                push(&mut tokens, op.to_string(), offset, TokenType::Operator);
                i += 3;
                continue;
            }
            if let Some(op) = OPERATORS2.iter().find(|op| rest.starts_with(**op)) {
                push(&mut tokens, op.to_string(), offset, TokenType::Operator);
                i += 2;
                continue;
            }
            let token_type = if PUNCTUATION.contains(&c) {
                TokenType::Punctuation
            } else {
                TokenType::Operator
            };
            push(&mut tokens, c.to_string(), offset, token_type);
            i += 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "source"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(Self {
            max_token_length: self.max_token_length,
        })
    }
}
