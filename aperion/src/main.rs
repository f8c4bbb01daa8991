use std::path::PathBuf;
use std::process::ExitCode;

use aperion::parser::Parser;
use aperion::printer;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let subscriber = fmt::Subscriber::builder()
    .with_env_filter(EnvFilter::from_default_env())
    .finish();
  tracing::subscriber::set_global_default(subscriber)
    .expect("setting default tracing subscriber failed");

  let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
    eprintln!("usage: aperion file.aperion");
    return ExitCode::FAILURE;
  };
  let src = match std::fs::read_to_string(&path) {
    Ok(src) => src,
    Err(err) => {
      eprintln!("{}: {err}", path.display());
      return ExitCode::FAILURE;
    }
  };
  match Parser::new(&src).parse_module() {
    Ok(module) => {
      println!("{}", printer::render(&module, &src));
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("parse error: {err}");
      ExitCode::FAILURE
    }
  }
}
