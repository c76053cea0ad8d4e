//! Per-line sequence transformations

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::sequence::iupac::complement_base;

/// Reverse the characters of a sequence line
pub fn reverse(sequence: &str) -> String {
    sequence.chars().rev().collect()
}

/// Replace every base with its IUPAC complement, keeping order
pub fn complement(sequence: &str) -> String {
    sequence.chars().map(complement_base).collect()
}

/// Reverse complement, i.e. the opposite strand read 5' to 3'
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement_base).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Reverse,
    Complement,
    ReverseComplement,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Reverse,
        Operation::Complement,
        Operation::ReverseComplement,
    ];

    pub fn apply(self, sequence: &str) -> String {
        match self {
            Operation::Reverse => reverse(sequence),
            Operation::Complement => complement(sequence),
            Operation::ReverseComplement => reverse_complement(sequence),
        }
    }

    /// Name used when parsing and in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Reverse => "reverse",
            Operation::Complement => "complement",
            Operation::ReverseComplement => "reverse-complement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Reverse => "Reverse",
            Operation::Complement => "Complement",
            Operation::ReverseComplement => "Reverse Complement",
        }
    }

    /// Short demonstration shown on the operation trigger
    pub fn example(self) -> String {
        format!("ATCG → {}", self.apply("ATCG"))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError(String);

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown operation '{}', expected reverse, complement or reverse-complement",
            self.0
        )
    }
}

impl Error for ParseOperationError {}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reverse" => Ok(Operation::Reverse),
            "complement" => Ok(Operation::Complement),
            "reverse-complement" => Ok(Operation::ReverseComplement),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn iupac_seq(max_len: usize) -> impl Strategy<Value = String> {
        proptest::string::string_regex(&format!("[ATCGKMRYSWBDHVNatcgkmryswbdhvn]{{0,{max_len}}}"))
            .expect("valid regex")
    }

    proptest! {
        #[test]
        fn reverse_is_an_involution(s in iupac_seq(64)) {
            prop_assert_eq!(reverse(&reverse(&s)), s);
        }

        #[test]
        fn complement_is_an_involution(s in iupac_seq(64)) {
            prop_assert_eq!(complement(&complement(&s)), s);
        }

        #[test]
        fn reverse_complement_is_an_involution(s in iupac_seq(64)) {
            prop_assert_eq!(reverse_complement(&reverse_complement(&s)), s);
        }

        #[test]
        fn reverse_and_complement_commute(s in iupac_seq(64)) {
            let rc = reverse_complement(&s);
            prop_assert_eq!(&rc, &reverse(&complement(&s)));
            prop_assert_eq!(&rc, &complement(&reverse(&s)));
        }

        #[test]
        fn complement_is_total_over_any_text(s in "\\PC{0,64}") {
            let c = complement(&s);
            prop_assert_eq!(c.chars().count(), s.chars().count());
            prop_assert_eq!(complement(&c), s);
        }
    }
}
