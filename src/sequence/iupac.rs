//! IUPAC nucleotide codes and their base-pairing partners

/// Every recognized nucleotide symbol paired with its complement.
///
/// Ambiguity codes pair by complementing their underlying base set, so
/// `K` (G/T) pairs with `M` (A/C). `S`, `W` and `N` are their own partners.
const COMPLEMENT_PAIRS: [(char, char); 30] = [
    ('A', 'T'),
    ('T', 'A'),
    ('C', 'G'),
    ('G', 'C'),
    ('K', 'M'),
    ('M', 'K'),
    ('R', 'Y'),
    ('Y', 'R'),
    ('S', 'S'),
    ('W', 'W'),
    ('B', 'V'),
    ('V', 'B'),
    ('D', 'H'),
    ('H', 'D'),
    ('N', 'N'),
    ('a', 't'),
    ('t', 'a'),
    ('c', 'g'),
    ('g', 'c'),
    ('k', 'm'),
    ('m', 'k'),
    ('r', 'y'),
    ('y', 'r'),
    ('s', 's'),
    ('w', 'w'),
    ('b', 'v'),
    ('v', 'b'),
    ('d', 'h'),
    ('h', 'd'),
    ('n', 'n'),
];

/// Recognized nucleotide alphabet (upper case).
pub const NUCLEOTIDE_ALPHABET: &str = "ATCGKMRYSWBDHVN";

/// Return the IUPAC complement of a base, preserving case.
///
/// Characters outside the table come back unchanged, so this never fails.
pub fn complement_base(base: char) -> char {
    COMPLEMENT_PAIRS
        .iter()
        .find(|(symbol, _)| *symbol == base)
        .map(|&(_, partner)| partner)
        .unwrap_or(base)
}

/// Whether `c` is a recognized nucleotide symbol in either case.
pub fn is_nucleotide(c: char) -> bool {
    NUCLEOTIDE_ALPHABET.contains(c.to_ascii_uppercase())
}
