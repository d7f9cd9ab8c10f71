use crate::error::Error;
use ca_rules::ParseLife;
use std::str::FromStr;

/// An outer-totalistic rule: the next state of a cell depends only on
/// its own state and the number of its living neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    /// A dead cell with `n` living neighbors is born iff `birth[n]`.
    pub birth: [bool; 9],
    /// A living cell with `n` living neighbors survives iff `survival[n]`.
    pub survival: [bool; 9],
}

impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        b.into_iter().for_each(|n| birth[n as usize] = true);
        s.into_iter().for_each(|n| survival[n as usize] = true);
        Rule { birth, survival }
    }
}

/// Conway's Game of Life, B3/S23.
impl Default for Rule {
    fn default() -> Self {
        Rule::from_bs(vec![3], vec![2, 3])
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule = Rule::parse_rule(s)?;
        if rule.birth[0] {
            return Err(Error::B0Error);
        }
        Ok(rule)
    }
}
