use crate::internal::{TokenKind as T, *};

/// Next token at or after `pos`. Pure: no lexer state survives the call, so
/// the cursor can replay it from any offset for lookahead.
pub fn token_at(src: &str, mut pos: usize) -> Token {
  let bytes = src.as_bytes();
  loop {
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
      pos += 1;
    }
    if pos + 1 < bytes.len() && bytes[pos] == b'/' && bytes[pos + 1] == b'/' {
      while pos < bytes.len() && bytes[pos] != b'\n' {
        pos += 1;
      }
      continue;
    }
    break;
  }
  if pos >= bytes.len() {
    return Token::new(T::Eof, pos as u32, 0);
  }
  let start = pos;
  match bytes[pos] {
    b if b.is_ascii_alphabetic() || b == b'_' => {
      while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
        pos += 1;
      }
      Token::new(T::Ident, start as u32, (pos - start) as u32)
    }
    b if b.is_ascii_digit() => {
      while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
      }
      Token::new(T::Number, start as u32, (pos - start) as u32)
    }
    b => match TokenKind::from_punct(b) {
      Some(kind) => Token::new(kind, start as u32, 1),
      None => {
        // one whole character, so the error span stays on a utf8 boundary
        let len = src[start..].chars().next().map_or(1, char::len_utf8);
        Token::new(T::Error, start as u32, len as u32)
      }
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn lex_all(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
      let token = token_at(src, pos);
      pos = token.end();
      let done = token.kind == T::Eof;
      tokens.push(token);
      if done {
        break;
      }
    }
    tokens
  }

  #[test]
  fn punctuation_and_whitespace() {
    let src = "+ -*/:=\t.,;(){}#%^\n";
    let cases: &[(T, u32, &str)] = &[
      (T::Plus, 0, "+"),
      (T::Minus, 2, "-"),
      (T::Star, 3, "*"),
      (T::Slash, 4, "/"),
      (T::Colon, 5, ":"),
      (T::Assign, 6, "="),
      (T::Dot, 8, "."),
      (T::Comma, 9, ","),
      (T::Semicolon, 10, ";"),
      (T::LParen, 11, "("),
      (T::RParen, 12, ")"),
      (T::LBrace, 13, "{"),
      (T::RBrace, 14, "}"),
      (T::Hash, 15, "#"),
      (T::Percent, 16, "%"),
      (T::Caret, 17, "^"),
      (T::Eof, 19, ""),
    ];
    let mut pos = 0;
    for (kind, offset, lexeme) in cases {
      let token = token_at(src, pos);
      assert_eq!(token.kind, *kind);
      assert_eq!(token.offset, *offset);
      assert_eq!(token.lexeme(src), *lexeme);
      pos = token.end();
    }
  }

  #[test]
  fn identifiers_numbers_and_comments() {
    let src = "foo _bar9 42 // note\nx1 7\r\n";
    let cases: &[(T, u32, &str)] = &[
      (T::Ident, 0, "foo"),
      (T::Ident, 4, "_bar9"),
      (T::Number, 10, "42"),
      (T::Ident, 21, "x1"),
      (T::Number, 24, "7"),
      (T::Eof, 27, ""),
    ];
    let mut pos = 0;
    for (kind, offset, lexeme) in cases {
      let token = token_at(src, pos);
      assert_eq!(token.kind, *kind);
      assert_eq!(token.offset, *offset);
      assert_eq!(token.lexeme(src), *lexeme);
      pos = token.end();
    }
  }

  #[test]
  fn comment_at_end_of_input() {
    let src = "x // trailing";
    assert_eq!(token_at(src, 0), Token::new(T::Ident, 0, 1));
    assert_eq!(token_at(src, 1), Token::new(T::Eof, 13, 0));
  }

  #[test]
  fn unrecognized_characters() {
    let tokens = lex_all("a ? !");
    assert_eq!(
      tokens,
      vec![
        Token::new(T::Ident, 0, 1),
        Token::new(T::Error, 2, 1),
        Token::new(T::Error, 4, 1),
        Token::new(T::Eof, 5, 0),
      ]
    );
  }

  #[test]
  fn every_in_bounds_offset_yields_a_token() {
    let src = "foo = bar(1, .two) // tail";
    for pos in 0..=src.len() {
      let token = token_at(src, pos);
      if token.kind == T::Eof {
        assert_eq!(token.len, 0);
      } else {
        assert!(token.len >= 1);
      }
    }
  }

  #[test]
  fn past_the_end_is_end_of_input() {
    assert_eq!(token_at("ab", 2).kind, T::Eof);
    assert_eq!(token_at("ab", 100).kind, T::Eof);
    assert_eq!(token_at("", 0), Token::new(T::Eof, 0, 0));
  }
}
