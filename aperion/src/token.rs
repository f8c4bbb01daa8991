#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Ident,
  Number,
  Plus,
  Minus,
  Star,
  Slash,
  Percent,
  Caret,
  Colon,
  Assign,
  Dot,
  Comma,
  Semicolon,
  LParen,
  RParen,
  LBrace,
  RBrace,
  Hash,
  Eof,
  Error,
}

impl TokenKind {
  pub const fn from_punct(byte: u8) -> Option<TokenKind> {
    match byte {
      b'+' => Some(TokenKind::Plus),
      b'-' => Some(TokenKind::Minus),
      b'*' => Some(TokenKind::Star),
      b'/' => Some(TokenKind::Slash),
      b'%' => Some(TokenKind::Percent),
      b'^' => Some(TokenKind::Caret),
      b':' => Some(TokenKind::Colon),
      b'=' => Some(TokenKind::Assign),
      b'.' => Some(TokenKind::Dot),
      b',' => Some(TokenKind::Comma),
      b';' => Some(TokenKind::Semicolon),
      b'(' => Some(TokenKind::LParen),
      b')' => Some(TokenKind::RParen),
      b'{' => Some(TokenKind::LBrace),
      b'}' => Some(TokenKind::RBrace),
      b'#' => Some(TokenKind::Hash),
      _ => None,
    }
  }
}

impl std::fmt::Display for TokenKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      TokenKind::Ident => "identifier",
      TokenKind::Number => "number",
      TokenKind::Plus => "'+'",
      TokenKind::Minus => "'-'",
      TokenKind::Star => "'*'",
      TokenKind::Slash => "'/'",
      TokenKind::Percent => "'%'",
      TokenKind::Caret => "'^'",
      TokenKind::Colon => "':'",
      TokenKind::Assign => "'='",
      TokenKind::Dot => "'.'",
      TokenKind::Comma => "','",
      TokenKind::Semicolon => "';'",
      TokenKind::LParen => "'('",
      TokenKind::RParen => "')'",
      TokenKind::LBrace => "'{'",
      TokenKind::RBrace => "'}'",
      TokenKind::Hash => "'#'",
      TokenKind::Eof => "end of input",
      TokenKind::Error => "unrecognized character",
    };
    f.write_str(s)
  }
}

/// A span into the source buffer; never owns its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub offset: u32,
  pub len: u32,
}

impl Token {
  pub const fn new(kind: TokenKind, offset: u32, len: u32) -> Self {
    Token { kind, offset, len }
  }

  pub fn lexeme<'a>(&self, src: &'a str) -> &'a str {
    &src[self.offset as usize..(self.offset + self.len) as usize]
  }

  pub const fn end(&self) -> usize {
    (self.offset + self.len) as usize
  }
}
