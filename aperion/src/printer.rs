use crate::internal::*;

/// Canonical rendering of a parsed module. Comments and the original layout
/// are gone by now; re-parsing the output yields the same tree.
pub fn render(module: &Module, src: &str) -> String {
  let mut printer = Printer { src, out: String::new() };
  printer.module(module);
  printer.out
}

struct Printer<'src> {
  src: &'src str,
  out: String,
}

impl Printer<'_> {
  fn module(&mut self, module: &Module) {
    for (i, item) in module.items.iter().enumerate() {
      if i > 0 {
        self.out.push('\n');
      }
      self.item(item);
    }
  }

  fn item(&mut self, item: &Item) {
    match item {
      Item::Stmt(stmt) => self.stmt(stmt),
      Item::Expr(expr) => self.expr(expr),
    }
  }

  fn stmt(&mut self, stmt: &Stmt) {
    match stmt {
      Stmt::Block(block) => self.block(block),
      Stmt::Procedure(procedure) => self.procedure(procedure),
      Stmt::Declaration(declaration) => self.declaration(declaration),
    }
  }

  fn block(&mut self, block: &Block) {
    self.out.push_str("{\n");
    for (i, item) in block.items.iter().enumerate() {
      if i > 0 {
        self.out.push('\n');
      }
      self.item(item);
    }
    self.out.push_str("\n}");
  }

  fn procedure(&mut self, procedure: &Procedure) {
    self.out.push_str(procedure.name.lexeme(self.src));
    self.out.push_str(" = (");
    self.declaration_list(&procedure.params);
    self.out.push_str(") ");
    self.expr(&procedure.return_type);
    self.out.push(' ');
    if !procedure.attributes.is_empty() {
      self.out.push_str("#(");
      self.declaration_list(&procedure.attributes);
      self.out.push_str(") ");
    }
    self.block(&procedure.body);
  }

  fn declaration_list(&mut self, decls: &[Declaration]) {
    for (i, decl) in decls.iter().enumerate() {
      if i > 0 {
        self.out.push_str(", ");
      }
      self.declaration(decl);
    }
  }

  fn declaration(&mut self, declaration: &Declaration) {
    self.out.push_str(declaration.name.lexeme(self.src));
    if let Some(typespec) = &declaration.typespec {
      self.out.push_str(": ");
      self.expr(typespec);
    }
    if let Some(init) = &declaration.init {
      self.out.push_str(" = ");
      self.expr(init);
    }
  }

  fn expr(&mut self, expr: &Expr) {
    match expr {
      Expr::Number(token) | Expr::Variable(token) => {
        self.out.push_str(token.lexeme(self.src));
      }
      Expr::EnumLiteral(token) => {
        self.out.push('.');
        self.out.push_str(token.lexeme(self.src));
      }
      Expr::Call(call) => {
        self.expr(&call.callee);
        self.out.push('(');
        for (i, arg) in call.args.iter().enumerate() {
          if i > 0 {
            self.out.push_str(", ");
          }
          match arg {
            Arg::Named(declaration) => self.declaration(declaration),
            Arg::Plain(expr) => self.expr(expr),
          }
        }
        self.out.push(')');
      }
      Expr::Binary(binary) => {
        self.expr(&binary.lhs);
        self.out.push(' ');
        self.out.push_str(binary.op.lexeme(self.src));
        self.out.push(' ');
        self.expr(&binary.rhs);
      }
    }
  }
}
