use crate::internal::{TokenKind as T, *};
use ParseError as E;

#[derive(Debug)]
pub struct Parser<'src> {
  cursor: Cursor<'src>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
  UnexpectedCharacter(Token),
  UnexpectedToken { expected: TokenKind, found: Token },
  UnsupportedConstruct(Token),
  MalformedDeclaration(Token),
}

impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      E::UnexpectedCharacter(token) => {
        write!(f, "unrecognized character at offset {}", token.offset)
      }
      E::UnexpectedToken { expected, found } => {
        write!(f, "expected {expected}, got {}", found.kind)
      }
      E::UnsupportedConstruct(token) => write!(f, "no grammar rule matches {}", token.kind),
      E::MalformedDeclaration(token) => write!(
        f,
        "declaration at offset {} must have a type or a value",
        token.offset
      ),
    }
  }
}

impl<'src> Parser<'src> {
  pub fn new(src: &'src str) -> Parser<'src> {
    #[cfg(test)]
    configure_test_tracing();

    Parser { cursor: Cursor::new(src) }
  }

  #[instrument(skip_all)]
  pub fn parse_module(mut self) -> Result<Module, ParseError> {
    trace!("Parser::parse_module()");
    let mut items = Vec::new();
    while self.cursor.peek(1).kind != T::Eof {
      items.push(self.parse_item()?);
    }
    self.cursor.eat(T::Eof)?;
    Ok(Module { items })
  }

  #[instrument(skip_all)]
  fn parse_item(&mut self) -> Result<Item, ParseError> {
    // a second token of `:` or `=` means a statement is starting
    match self.cursor.peek(2).kind {
      T::Colon | T::Assign => Ok(Item::Stmt(self.parse_stmt()?)),
      _ => Ok(Item::Expr(self.parse_expr()?)),
    }
  }

  #[instrument(skip_all)]
  fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
    // `name = (` followed by `)` or by a parameter with `:`/`=` at the
    // fifth token is a procedure; the window is fixed at five tokens
    if self.cursor.peek(2).kind == T::Assign
      && self.cursor.peek(3).kind == T::LParen
      && (self.cursor.peek(4).kind == T::RParen
        || matches!(self.cursor.peek(5).kind, T::Colon | T::Assign))
    {
      return Ok(Stmt::Procedure(self.parse_procedure()?));
    }
    if matches!(self.cursor.peek(2).kind, T::Colon | T::Assign) {
      return Ok(Stmt::Declaration(self.parse_declaration()?));
    }
    Err(self.unsupported())
  }

  #[instrument(skip_all)]
  fn parse_procedure(&mut self) -> Result<Procedure, ParseError> {
    let name = self.cursor.eat(T::Ident)?;
    self.cursor.eat(T::Assign)?;
    self.cursor.eat(T::LParen)?;
    let params = self.parse_declaration_list()?;
    self.cursor.eat(T::RParen)?;
    let return_type = self.parse_expr()?;
    let mut attributes = Vec::new();
    if self.cursor.peek(1).kind == T::Hash {
      self.cursor.eat(T::Hash)?;
      self.cursor.eat(T::LParen)?;
      attributes = self.parse_declaration_list()?;
      self.cursor.eat(T::RParen)?;
    }
    let body = self.parse_block()?;
    Ok(Procedure { name, params, return_type, attributes, body })
  }

  fn parse_declaration_list(&mut self) -> Result<Vec<Declaration>, ParseError> {
    let mut decls = Vec::new();
    while self.cursor.peek(1).kind != T::RParen {
      decls.push(self.parse_declaration()?);
      if self.cursor.peek(1).kind == T::Comma {
        self.cursor.eat(T::Comma)?;
      } else {
        break;
      }
    }
    Ok(decls)
  }

  #[instrument(skip_all)]
  fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
    let name = self.cursor.eat(T::Ident)?;
    let mut typespec = None;
    if self.cursor.peek(1).kind == T::Colon {
      self.cursor.eat(T::Colon)?;
      typespec = Some(self.parse_expr()?);
    }
    let mut init = None;
    if self.cursor.peek(1).kind == T::Assign {
      self.cursor.eat(T::Assign)?;
      init = Some(self.parse_expr()?);
    }
    if typespec.is_none() && init.is_none() {
      return Err(E::MalformedDeclaration(name));
    }
    Ok(Declaration { name, typespec, init })
  }

  #[instrument(skip_all)]
  fn parse_block(&mut self) -> Result<Block, ParseError> {
    self.cursor.eat(T::LBrace)?;
    let mut items = Vec::new();
    while self.cursor.peek(1).kind != T::RBrace {
      items.push(self.parse_item()?);
    }
    self.cursor.eat(T::RBrace)?;
    Ok(Block { items })
  }

  #[instrument(skip_all)]
  fn parse_expr(&mut self) -> Result<Expr, ParseError> {
    let mut lhs = self.parse_term()?;
    while matches!(self.cursor.peek(1).kind, T::Plus | T::Minus) {
      let op_kind = self.cursor.peek(1).kind;
      let op = self.cursor.eat(op_kind)?;
      let rhs = self.parse_term()?;
      lhs = Expr::Binary(Binary::new(lhs, op, rhs));
    }
    Ok(lhs)
  }

  #[instrument(skip_all)]
  fn parse_term(&mut self) -> Result<Expr, ParseError> {
    let mut lhs = self.parse_factor()?;
    while matches!(self.cursor.peek(1).kind, T::Star | T::Slash | T::Percent) {
      let op_kind = self.cursor.peek(1).kind;
      let op = self.cursor.eat(op_kind)?;
      let rhs = self.parse_factor()?;
      lhs = Expr::Binary(Binary::new(lhs, op, rhs));
    }
    Ok(lhs)
  }

  #[instrument(skip_all)]
  fn parse_factor(&mut self) -> Result<Expr, ParseError> {
    let expr = match self.cursor.peek(1).kind {
      T::Ident => Expr::Variable(self.cursor.eat(T::Ident)?),
      T::Dot => {
        self.cursor.eat(T::Dot)?;
        Expr::EnumLiteral(self.cursor.eat(T::Ident)?)
      }
      T::Number => Expr::Number(self.cursor.eat(T::Number)?),
      _ => return Err(self.unsupported()),
    };
    if self.cursor.peek(1).kind != T::LParen {
      return Ok(expr);
    }
    self.cursor.eat(T::LParen)?;
    let mut args = Vec::new();
    while self.cursor.peek(1).kind != T::RParen {
      // an argument is a named declaration exactly when its 2nd token is `=`
      if self.cursor.peek(2).kind == T::Assign {
        args.push(Arg::Named(self.parse_declaration()?));
      } else {
        args.push(Arg::Plain(self.parse_expr()?));
      }
      if self.cursor.peek(1).kind == T::Comma {
        self.cursor.eat(T::Comma)?;
      } else {
        break;
      }
    }
    self.cursor.eat(T::RParen)?;
    Ok(Expr::Call(Call { callee: Box::new(expr), args }))
  }

  fn unsupported(&self) -> ParseError {
    let token = self.cursor.peek(1);
    match token.kind {
      T::Error => E::UnexpectedCharacter(token),
      _ => E::UnsupportedConstruct(token),
    }
  }
}

#[cfg(test)]
static INIT: std::sync::Once = std::sync::Once::new();

#[cfg(test)]
fn configure_test_tracing() {
  use tracing_subscriber::fmt::format::FmtSpan;
  use tracing_subscriber::{EnvFilter, fmt};

  INIT.call_once(|| {
    let subscriber = fmt::Subscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_test_writer()
      .with_span_events(FmtSpan::ACTIVE)
      .finish();
    tracing::subscriber::set_global_default(subscriber)
      .expect("setting default tracing subscriber failed");
  });
}
