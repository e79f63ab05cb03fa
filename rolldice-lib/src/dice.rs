use crate::error::Result;
use crate::parser;
use crate::parser::Rule;
use crate::roll;
use crate::roller::RandomSource;
use crate::roller::Roller;
use pest::Parser;
use rand::Rng;

mod defaults {
    pub(crate) const ROLLS: u64 = 1;
    pub(crate) const DICE: u64 = 1;
    pub(crate) const FACES: u64 = 6;
    pub(crate) const MULTIPLIER: i64 = 1;
    pub(crate) const MODIFIER: i64 = 0;
    pub(crate) const DROP: u64 = 0;
}

/// Number of faces the `%` shorthand stands for
const PERCENT_FACES: u64 = 100;

/// A parsed dice string: how many roll groups to produce and the
/// parameters every group is subject to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    /// how many times to roll
    pub(crate) rolls: u64,
    /// number of dice to roll in each group
    pub(crate) dice: u64,
    /// number of sides the dice have
    pub(crate) faces: u64,
    /// value to multiply the summed result of each group by
    pub(crate) multiplier: i64,
    /// value to add to the result of each group
    pub(crate) modifier: i64,
    /// how many lowest die results to drop from each group
    pub(crate) drop: u64,
}

impl Dice {
    /// Parse a dice string in the format `[#x][#]d[#|%][*#][+#|-#][s#]`.
    ///
    /// Every component except the `d` is optional; an omitted component
    /// takes its default. A number after `*`, `+`, `-` or `s`, or before
    /// `x`, must be strictly positive, and `d0` is rejected while a bare
    /// `d` falls back to six faces.
    pub fn parse(input: &str) -> Result<Self> {
        let token = parser::Parser::parse(Rule::dice, input)?.next().unwrap();

        let mut rolls = defaults::ROLLS;
        let mut dice = defaults::DICE;
        let mut faces = defaults::FACES;
        let mut multiplier = defaults::MULTIPLIER;
        let mut modifier = defaults::MODIFIER;
        let mut drop = defaults::DROP;

        for pair in token.into_inner() {
            match pair.as_rule() {
                Rule::rolls => {
                    let n = parser::Parser::extract_value(pair)?;
                    if n == 0 {
                        return Err("can't roll 0 times".into());
                    }
                    rolls = n as u64;
                }
                Rule::count => {
                    let n = parser::Parser::extract_value(pair)?;
                    // an explicit count of 0 falls back to one die
                    if n > 0 {
                        dice = n as u64;
                    }
                }
                Rule::faces => {
                    let inner = pair.into_inner().next().unwrap();
                    faces = match inner.as_rule() {
                        Rule::percent => PERCENT_FACES,
                        Rule::number => {
                            let n = parser::Parser::extract_number(inner)?;
                            if n == 0 {
                                return Err("dice must have at least one face".into());
                            }
                            n as u64
                        }
                        _ => unreachable!("{:?}", inner),
                    };
                }
                Rule::multiplier => {
                    let n = parser::Parser::extract_value(pair)?;
                    if n == 0 {
                        return Err("multiplier must be positive".into());
                    }
                    multiplier = n;
                }
                Rule::modifier => {
                    let mut inner = pair.into_inner();
                    let sign = inner.next().unwrap();
                    let n = parser::Parser::extract_number(inner.next().unwrap())?;
                    if n == 0 {
                        return Err("modifier must be non-zero".into());
                    }
                    modifier = if sign.as_str() == "-" { -n } else { n };
                }
                Rule::drop => {
                    let n = parser::Parser::extract_value(pair)?;
                    if n == 0 {
                        return Err("can't drop 0 dice".into());
                    }
                    drop = n as u64;
                }
                Rule::EOI => (),
                _ => unreachable!("{:?}", pair),
            }
        }

        if drop >= dice {
            return Err(format!("can't drop {drop} dice out of {dice}").into());
        }

        Ok(Dice {
            rolls,
            dice,
            faces,
            multiplier,
            modifier,
            drop,
        })
    }

    /// Roll using the default Rng source
    pub fn roll(&self) -> roll::Outcome {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll using the provided Rng source
    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> roll::Outcome {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll using the provided source
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> roll::Outcome {
        Roller::eval(self, source)
    }
}
