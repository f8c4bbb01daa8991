use crate::internal::*;

#[derive(Debug, PartialEq, Eq)]
pub struct Module {
  pub items: Vec<Item>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Block {
  pub items: Vec<Item>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Item {
  Stmt(Stmt),
  Expr(Expr),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Stmt {
  Block(Block),
  Procedure(Procedure),
  Declaration(Declaration),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Procedure {
  pub name: Token,
  pub params: Vec<Declaration>,
  pub return_type: Expr,
  pub attributes: Vec<Declaration>,
  pub body: Block,
}

/// Invariant: at least one of `typespec`/`init` is present.
#[derive(Debug, PartialEq, Eq)]
pub struct Declaration {
  pub name: Token,
  pub typespec: Option<Expr>,
  pub init: Option<Expr>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
  Number(Token),
  EnumLiteral(Token),
  Variable(Token),
  Call(Call),
  Binary(Binary),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Call {
  pub callee: Box<Expr>,
  pub args: Vec<Arg>,
}

/// A call argument: `name = expr` reuses the declaration shape.
#[derive(Debug, PartialEq, Eq)]
pub enum Arg {
  Named(Declaration),
  Plain(Expr),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Binary {
  pub lhs: Box<Expr>,
  pub op: Token,
  pub rhs: Box<Expr>,
}

impl Binary {
  pub fn new(lhs: Expr, op: Token, rhs: Expr) -> Binary {
    Binary {
      lhs: Box::new(lhs),
      op,
      rhs: Box::new(rhs),
    }
  }
}
