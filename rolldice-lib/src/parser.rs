use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "rolldice.pest"]
pub struct Parser;

impl Parser {
    /// Read the number nested in a component pair such as `rolls` or `drop`
    pub(crate) fn extract_value(pair: Pair<Rule>) -> Result<i64> {
        Self::extract_number(pair.into_inner().next().unwrap())
    }

    /// Read a `number` pair; literals outside the signed 64-bit range are
    /// an overflow error, not a panic
    pub(crate) fn extract_number(pair: Pair<Rule>) -> Result<i64> {
        pair.as_str()
            .parse::<i64>()
            .map_err(|_| Error::Overflow(pair.as_str().to_owned()))
    }
}
