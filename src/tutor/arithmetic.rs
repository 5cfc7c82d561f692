//! Answers plain calculations ("combien font 12 + 7 ?") before any other
//! stage gets to see the message.
//!
//! The evaluator is a small recursive-descent parser over integers and
//! decimals. It knows `+ - * / // **`, unary signs and parentheses, nothing
//! else: no names, no function calls.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{CLOSING, OPENING};

const OPERATORS: [char; 8] = ['+', '-', '*', '/', 'x', 'X', '×', '÷'];
const ALLOWED: &str = "0123456789+-*/(). ";

static EXPRESSION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9+\-*/().,\sxX×÷]+").expect("valid expression regex"));

static TIMES_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d)\s*x\s*(\d)").expect("valid multiplication regex"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) if x.abs() >= 1e16 => {
                // past f64's exact integers: exponent form, never a digit string
                let text = format!("{x:e}");
                match text.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{mantissa}e+{exp}")
                    }
                    _ => f.write_str(&text),
                }
            }
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("not an arithmetic expression")]
    NotArithmetic,
    #[error("syntax error at position {0}")]
    Syntax(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NotFinite,
}

/// Returns the formatted answer when `message` holds a calculation, `None`
/// when the next stage should handle it.
pub fn respond(message: &str) -> Option<String> {
    let expression = find_expression(message)?;
    match calculate(&expression) {
        Ok(result) => Some(format!(
            "{OPENING}\n\n**Calcul :** {expression}\n\n**Résultat :** {result}\n\n\
             **Explication :**\nJ'ai calculé l'expression mathématique que tu m'as donnée.\n\n{CLOSING}"
        )),
        Err(EvalError::DivisionByZero) => Some(format!(
            "{OPENING}\n\n**Calcul :** {expression}\n\n**Résultat :** impossible !\n\n\
             **Explication :**\nOn ne peut pas diviser un nombre par zéro : aucun nombre \
             multiplié par 0 ne redonne le nombre de départ.\n\
             Vérifie ton calcul et réessaie avec un autre diviseur.\n\n{CLOSING}"
        )),
        Err(EvalError::NotFinite) => Some(format!(
            "{OPENING}\n\n**Calcul :** {expression}\n\n**Résultat :** nombre trop grand !\n\n\
             **Explication :**\nLe résultat dépasse ce que je sais calculer.\n\
             Essaie avec des nombres plus petits.\n\n{CLOSING}"
        )),
        Err(_) => None,
    }
}

/// Picks the longest operator-and-digit run out of the message.
pub fn find_expression(message: &str) -> Option<String> {
    if !message.chars().any(|c| c.is_ascii_digit()) || !message.contains(OPERATORS) {
        return None;
    }
    EXPRESSION_RUN
        .find_iter(message)
        .map(|m| m.as_str().trim())
        .filter(|run| run.chars().any(|c| c.is_ascii_digit()))
        .max_by_key(|run| run.chars().count())
        .map(str::to_string)
}

/// Normalizes and evaluates an extracted expression.
pub fn calculate(expression: &str) -> Result<Number, EvalError> {
    let normalized = normalize(expression);
    if !normalized.contains(['+', '-', '*', '/']) || !normalized.chars().any(|c| c.is_ascii_digit())
    {
        return Err(EvalError::NotArithmetic);
    }
    let result = evaluate(&normalized)?;
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NotFinite)
    }
}

fn normalize(expression: &str) -> String {
    let mut expr = expression.replace('×', "*").replace('÷', "/").replace(',', ".");
    while TIMES_LETTER.is_match(&expr) {
        expr = TIMES_LETTER.replace_all(&expr, "${1}*${2}").into_owned();
    }
    expr.chars().filter(|c| ALLOWED.contains(*c)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(Number),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, EvalError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let token = match bytes[i] {
            b' ' => {
                i += 1;
                continue;
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 1;
                Token::DoubleStar
            }
            b'*' => Token::Star,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i += 1;
                Token::DoubleSlash
            }
            b'/' => Token::Slash,
            b'0'..=b'9' | b'.' => {
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                tokens.push((start, Token::Num(parse_literal(&input[start..i], start)?)));
                continue;
            }
            _ => return Err(EvalError::Syntax(start)),
        };
        tokens.push((start, token));
        i += 1;
    }
    Ok(tokens)
}

fn parse_literal(literal: &str, position: usize) -> Result<Number, EvalError> {
    if literal == "." || literal.matches('.').count() > 1 {
        return Err(EvalError::Syntax(position));
    }
    if literal.contains('.') {
        return literal
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| EvalError::Syntax(position));
    }
    match literal.parse::<i128>() {
        Ok(i) => Ok(Number::Int(i)),
        Err(_) => literal
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| EvalError::Syntax(position)),
    }
}

fn evaluate(input: &str) -> Result<Number, EvalError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0, end: input.len() };
    let value = parser.expr()?;
    match parser.tokens.get(parser.pos) {
        None => Ok(value),
        Some((at, _)) => Err(EvalError::Syntax(*at)),
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(_, t)| *t)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map(|(at, _)| *at).unwrap_or(self.end)
    }

    fn expr(&mut self) -> Result<Number, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value = add(value, self.term()?);
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value = sub(value, self.term()?);
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<Number, EvalError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value = mul(value, self.factor()?);
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value = div(value, self.factor()?)?;
                }
                Some(Token::DoubleSlash) => {
                    self.pos += 1;
                    value = floor_div(value, self.factor()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<Number, EvalError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.factor()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(negate(self.factor()?))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Number, EvalError> {
        let base = self.atom()?;
        if self.peek() == Some(Token::DoubleStar) {
            self.pos += 1;
            // right-associative, and the exponent may carry its own sign
            let exponent = self.factor()?;
            return pow(base, exponent);
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Number, EvalError> {
        let at = self.position();
        match self.peek() {
            Some(Token::Num(n)) => {
                self.pos += 1;
                Ok(n)
            }
            Some(Token::LParen) => {
                self.pos += 1;
                let value = self.expr()?;
                if self.peek() != Some(Token::RParen) {
                    return Err(EvalError::Syntax(self.position()));
                }
                self.pos += 1;
                Ok(value)
            }
            _ => Err(EvalError::Syntax(at)),
        }
    }
}

fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .unwrap_or(Number::Float(x as f64 + y as f64)),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

fn sub(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_sub(y)
            .map(Number::Int)
            .unwrap_or(Number::Float(x as f64 - y as f64)),
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

fn mul(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_mul(y)
            .map(Number::Int)
            .unwrap_or(Number::Float(x as f64 * y as f64)),
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

fn negate(a: Number) -> Number {
    match a {
        Number::Int(x) => x
            .checked_neg()
            .map(Number::Int)
            .unwrap_or(Number::Float(-(x as f64))),
        Number::Float(x) => Number::Float(-x),
    }
}

fn div(a: Number, b: Number) -> Result<Number, EvalError> {
    if b.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

fn floor_div(a: Number, b: Number) -> Result<Number, EvalError> {
    if b.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match x.checked_div(y) {
            Some(q) if x % y != 0 && ((x < 0) != (y < 0)) => Ok(Number::Int(q - 1)),
            Some(q) => Ok(Number::Int(q)),
            None => Ok(Number::Float((x as f64 / y as f64).floor())),
        },
        _ => Ok(Number::Float((a.as_f64() / b.as_f64()).floor())),
    }
}

fn pow(base: Number, exponent: Number) -> Result<Number, EvalError> {
    if base.is_zero() && exponent.as_f64() < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            let checked = u32::try_from(e).ok().and_then(|e| b.checked_pow(e));
            if let Some(value) = checked {
                return Ok(Number::Int(value));
            }
        }
    }
    Ok(Number::Float(base.as_f64().powf(exponent.as_f64())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_of(expression: &str) -> String {
        calculate(expression).expect("expression evaluates").to_string()
    }

    #[test]
    fn evaluates_simple_sums_and_quotients() {
        assert_eq!(result_of("12 + 7"), "19");
        assert_eq!(result_of("10 / 4"), "2.5");
        assert_eq!(result_of("6 / 3"), "2.0");
    }

    #[test]
    fn respects_precedence_and_parentheses() {
        assert_eq!(result_of("2 + 3 * 4"), "14");
        assert_eq!(result_of("(2 + 3) * 4"), "20");
        assert_eq!(result_of("-2 ** 2"), "-4");
        assert_eq!(result_of("2 ** 3 ** 2"), "512");
        assert_eq!(result_of("7 // 2"), "3");
        assert_eq!(result_of("-7 // 2"), "-4");
        assert_eq!(result_of("2 ** -1"), "0.5");
    }

    #[test]
    fn normalizes_french_notation() {
        assert_eq!(result_of("3 × 4"), "12");
        assert_eq!(result_of("9 ÷ 3"), "3.0");
        assert_eq!(result_of("1,5 + 1"), "2.5");
        assert_eq!(result_of("2x3x4"), "24");
        assert_eq!(result_of("5 X 5"), "25");
        let answer = respond("Combien font 5 X 5 ?").expect("uppercase times detected");
        assert!(answer.contains("**Résultat :** 25"));
    }

    #[test]
    fn extracts_the_calculation_from_a_sentence() {
        assert_eq!(find_expression("Combien font 12 + 7 ?").as_deref(), Some("12 + 7"));
        let answer = respond("Combien font 12 + 7 ?").expect("calculation detected");
        assert!(answer.contains("**Calcul :** 12 + 7"));
        assert!(answer.contains("**Résultat :** 19"));
    }

    #[test]
    fn messages_without_digits_never_trigger() {
        for message in ["bonjour", "c'est quoi + ou - ?", "x / y", "explique le pluriel", ""] {
            assert!(respond(message).is_none(), "{message:?} should fall through");
        }
    }

    #[test]
    fn digits_without_an_operator_fall_through() {
        assert!(respond("j'ai 3 chats").is_none());
        assert!(respond("exercice 2 s'il te plaît").is_none());
    }

    #[test]
    fn malformed_expressions_fall_through() {
        assert!(respond("5 +").is_none());
        assert!(respond("1.2.3 + 4").is_none());
        assert_eq!(calculate("(1 + 2"), Err(EvalError::Syntax(6)));
    }

    #[test]
    fn division_by_zero_gets_its_own_answer() {
        assert_eq!(calculate("1 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(calculate("1 // 0"), Err(EvalError::DivisionByZero));
        assert_eq!(calculate("0 ** -1"), Err(EvalError::DivisionByZero));
        let answer = respond("10 / 0").expect("division by zero is answered");
        assert!(answer.contains("diviser un nombre par zéro"));
    }

    #[test]
    fn large_integers_stay_exact() {
        assert_eq!(result_of("2 ** 100"), "1267650600228229401496703205376");
        assert_eq!(result_of("9223372036854775807 * 2"), "18446744073709551614");
        assert_eq!(result_of("9223372036854775807 + 1"), "9223372036854775808");
    }

    #[test]
    fn integers_past_exact_range_use_exponent_form() {
        let max = i128::MAX.to_string();
        assert_eq!(result_of(&format!("{max} + 1")), "1.7014118346046923e+38");
        assert_eq!(result_of("2 ** 200"), "1.6069380442589903e+60");
        assert_eq!(result_of("10.0 * 10000000000000000000"), "1e+20");
        assert_eq!(result_of("2.5 * 4"), "10.0");
    }

    #[test]
    fn results_too_large_are_explained() {
        assert_eq!(calculate("10 ** 400"), Err(EvalError::NotFinite));
        let answer = respond("10 ** 400").expect("overflow is answered");
        assert!(answer.contains("nombre trop grand"));
    }
}
