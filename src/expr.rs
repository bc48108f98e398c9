use crate::error::{Error, Result};
use crate::region::Region;

use nalgebra::Point3;

use std::iter::Peekable;
use std::str::Chars;

/// Boolean expression tree defining a cell's volume.
///
/// Leaves are indices into the owning cell's region list (0-based). The tree
/// is pure data; evaluation threads the query point through the recursion, so
/// a shared `Expr` can be evaluated from any number of threads at once.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Region(usize),
    Intersection(Box<Expr>, Box<Expr>),
    Union(Box<Expr>, Box<Expr>),
    Complement(Box<Expr>),
}

impl Expr {
    /// Evaluate the tree at `point`.
    ///
    /// Leaves must refer into `regions`; the `Cell` constructors guarantee
    /// this for any tree they accept.
    pub fn evaluate(&self, point: &Point3<f64>, regions: &[Region]) -> bool {
        match self {
            Expr::Region(index) => regions[*index].contains(point),
            Expr::Intersection(lhs, rhs) => {
                lhs.evaluate(point, regions) && rhs.evaluate(point, regions)
            }
            Expr::Union(lhs, rhs) => lhs.evaluate(point, regions) || rhs.evaluate(point, regions),
            Expr::Complement(inner) => !inner.evaluate(point, regions),
        }
    }

    /// Check that every leaf refers into a region list of length `count`.
    pub fn validate(&self, count: usize) -> Result<()> {
        match self {
            Expr::Region(index) => {
                if *index < count {
                    Ok(())
                } else {
                    Err(Error::RegionIndexOutOfRange {
                        index: *index,
                        count,
                    })
                }
            }
            Expr::Intersection(lhs, rhs) | Expr::Union(lhs, rhs) => {
                lhs.validate(count)?;
                rhs.validate(count)
            }
            Expr::Complement(inner) => inner.validate(count),
        }
    }

    /// Parse an infix cell definition into a tree.
    ///
    /// Region indices are decimal integers. `^`, `∧`, and `&` intersect, `|`
    /// and `∨` union, `~` and `¬` complement; complement binds tightest, then
    /// intersection, then union, with parentheses overriding. Whitespace is
    /// insignificant.
    pub fn parse(text: &str) -> Result<Expr> {
        Parser::new(text).parse()
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Parser<'a> {
        Parser {
            chars: text.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Expr> {
        let expr = self.union()?;
        self.skip_whitespace();
        match self.chars.next() {
            None => Ok(expr),
            Some(c) => Err(Error::ExpressionSyntax(format!("unexpected '{}'", c))),
        }
    }

    fn union(&mut self) -> Result<Expr> {
        let mut lhs = self.intersection()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some(&'|') | Some(&'∨') => {
                    self.chars.next();
                    let rhs = self.intersection()?;
                    lhs = Expr::Union(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn intersection(&mut self) -> Result<Expr> {
        let mut lhs = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some(&'^') | Some(&'∧') | Some(&'&') => {
                    self.chars.next();
                    let rhs = self.factor()?;
                    lhs = Expr::Intersection(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn factor(&mut self) -> Result<Expr> {
        self.skip_whitespace();
        match self.chars.peek() {
            Some(&'~') | Some(&'¬') => {
                self.chars.next();
                Ok(Expr::Complement(Box::new(self.factor()?)))
            }
            Some(&'(') => {
                self.chars.next();
                let inner = self.union()?;
                self.skip_whitespace();
                match self.chars.next() {
                    Some(')') => Ok(inner),
                    _ => Err(Error::ExpressionSyntax("expected ')'".to_string())),
                }
            }
            Some(&c) if c.is_ascii_digit() => self.index(),
            Some(&c) => Err(Error::ExpressionSyntax(format!("unexpected '{}'", c))),
            None => Err(Error::ExpressionSyntax(
                "unexpected end of expression".to_string(),
            )),
        }
    }

    fn index(&mut self) -> Result<Expr> {
        let mut digits = String::new();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.chars.next();
        }
        digits
            .parse::<usize>()
            .map(Expr::Region)
            .map_err(|_| Error::ExpressionSyntax(format!("bad region index '{}'", digits)))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }
}
