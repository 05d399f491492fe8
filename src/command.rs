//! Recognition of command lines.

use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "command.pest"]
struct ArgumentParser;

/// A recognized command. The argument-taking commands keep the raw text that
/// followed their keyword; it is validated when the command runs, after the
/// stack checks that precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
  Zero,
  IsCoeff,
  IsZero,
  Clone,
  Add,
  Mul,
  Neg,
  Sub,
  IsEq,
  Deg,
  Print,
  Pop,
  DegBy(&'a str),
  At(&'a str),
  Compose(&'a str),
}

impl<'a> Command<'a> {
  /// Matches a whole line against the keywords. Exact keywords win over the
  /// prefix keywords `DEG_BY`, `AT` and `COMPOSE`.
  pub fn recognize(line: &'a str) -> Option<Command<'a>> {
    let command = match line {
      "ZERO" => Command::Zero,
      "IS_COEFF" => Command::IsCoeff,
      "IS_ZERO" => Command::IsZero,
      "CLONE" => Command::Clone,
      "ADD" => Command::Add,
      "MUL" => Command::Mul,
      "NEG" => Command::Neg,
      "SUB" => Command::Sub,
      "IS_EQ" => Command::IsEq,
      "DEG" => Command::Deg,
      "PRINT" => Command::Print,
      "POP" => Command::Pop,
      _ => {
        if let Some(rest) = line.strip_prefix("DEG_BY") {
          Command::DegBy(rest)
        } else if let Some(rest) = line.strip_prefix("AT") {
          Command::At(rest)
        } else if let Some(rest) = line.strip_prefix("COMPOSE") {
          Command::Compose(rest)
        } else {
          return None;
        }
      }
    };
    Some(command)
  }

  pub fn keyword(&self) -> &'static str {
    match self {
      Command::Zero => "ZERO",
      Command::IsCoeff => "IS_COEFF",
      Command::IsZero => "IS_ZERO",
      Command::Clone => "CLONE",
      Command::Add => "ADD",
      Command::Mul => "MUL",
      Command::Neg => "NEG",
      Command::Sub => "SUB",
      Command::IsEq => "IS_EQ",
      Command::Deg => "DEG",
      Command::Print => "PRINT",
      Command::Pop => "POP",
      Command::DegBy(_) => "DEG_BY",
      Command::At(_) => "AT",
      Command::Compose(_) => "COMPOSE",
    }
  }
}

/// The literal of a `" -123"` style argument.
pub fn signed_argument(raw: &str) -> Option<&str> {
  argument(Rule::signed_argument, raw)
}

/// The literal of a `" 123"` style argument.
pub fn unsigned_argument(raw: &str) -> Option<&str> {
  argument(Rule::unsigned_argument, raw)
}

fn argument(rule: Rule, raw: &str) -> Option<&str> {
  let mut pairs = ArgumentParser::parse(rule, raw).ok()?;
  let literal = pairs.next()?.into_inner().next()?;
  Some(literal.as_str())
}
