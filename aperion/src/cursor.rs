use crate::internal::{TokenKind as T, *};

/// The parser's only mutable state: one offset into a shared, read-only
/// source buffer.
#[derive(Debug)]
pub struct Cursor<'src> {
  src: &'src str,
  pos: usize,
}

impl<'src> Cursor<'src> {
  pub fn new(src: &'src str) -> Cursor<'src> {
    assert!(src.len() <= u32::MAX as usize);
    Cursor { src, pos: 0 }
  }

  /// The nth upcoming token (1-based), replaying the lexer from successive
  /// offsets without moving the cursor.
  pub fn peek(&self, n: usize) -> Token {
    assert!(n >= 1, "lookahead depth must be at least 1");
    let mut token = token_at(self.src, self.pos);
    for _ in 1..n {
      token = token_at(self.src, token.end());
    }
    token
  }

  pub fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
    let token = token_at(self.src, self.pos);
    if token.kind != expected {
      return Err(match token.kind {
        T::Error => ParseError::UnexpectedCharacter(token),
        _ => ParseError::UnexpectedToken { expected, found: token },
      });
    }
    self.pos = token.end();
    Ok(token)
  }
}
