//! Compiled-in pseudo-steno track
//!
//! Single keys are drilled first as raw steno, in hand order with each
//! key's neighbour and their combination next to each other. The
//! pseudo-steno table then follows in table order.

use super::{Curriculum, CurriculumError, Group, MappingTable, Notation};

/// Chord → pseudo-steno display form
pub const PSEUDO_STENO: &[(&str, &str)] = &[
    ("*S", "-[ST]"),
    ("-B", "-B"),
    ("-BG", "-K"),
    ("-BGS", "-X"),
    ("-D", "-D"), // also -ed
    ("-F", "-F"),
    ("-FB", "-V"),
    ("-FP", "-[CH]"),
    ("-FPL", "-[MP"), // unbalanced bracket, left for the curriculum owner
    ("-G", "-G"), // also -ing
    ("-GS", "-[SH]"),
    ("-GT", "-[TH]"),
    ("-GZ", "-[SHUN]"), // or -ings
    ("-L", "-L"),
    ("-P", "-P"),
    ("-PB", "-N"),
    ("-PBLG", "-J"),
    ("-PL", "-M"),
    ("-R", "-R"),
    ("-S", "-S"),
    ("-SZ", "-[SS]"),
    ("-T", "-T"),
    ("-V", "-V"),
    ("-Z", "-Z"),
    ("A", "A"),
    ("AEU", "[AY]"),
    ("AO", "[OO]"), // only one-stroke words spelt "oo", otherwise AOU
    ("AOE", "[EE]"),
    ("AOEU", "[EYE]"),
    ("AOU", "[OOH]"),
    ("AU", "[AW]"),
    ("E", "E"),
    ("EU", "I"),
    ("H", "H"),
    ("HR", "L"),
    ("K", "K"),
    ("KH", "[CH]-"),
    ("KP", "X"),
    ("KPW", "[KN]-"),
    ("KR", "C"),
    ("KW", "Q"),
    ("KWR", "Y"),
    ("O", "O"),
    ("OE", "[OH]"),
    ("OU", "[OW]"),
    ("P", "P"),
    ("PH", "M"),
    ("PW", "B"),
    ("R", "R"),
    ("S", "S"),
    ("SKWR", "J"),
    ("SR", "V"),
    ("SWR", "Z-"),
    ("T", "T"),
    ("TK", "D"),
    ("TKPW", "G"),
    ("TP", "F"),
    ("TPH", "N"),
    ("U", "U"),
    ("W", "W"),
];

/// Order in which raw steno keys are introduced
pub const SINGLE_KEYS: &[&str] = &[
    "S-", "T-", "K-", "TK", "P-", "W-", "PW", "H-", "R-", "HR-", "*", "AO", "A-", "O-", "-E",
    "-U", "EU", "-F", "-R", "FR", "-P", "-B", "-PB", "-L", "-G", "LG", "-T", "-S", "-TS", "-D",
    "-Z", "DZ", "TD", "SZ",
];

/// Build the pseudo-steno mapping table
pub fn pseudo_steno() -> Result<MappingTable, CurriculumError> {
    MappingTable::from_pairs(PSEUDO_STENO.iter().copied())
}

/// The default curriculum: raw single keys, then the pseudo-steno table
pub fn curriculum() -> Result<Curriculum, CurriculumError> {
    let mapping = pseudo_steno()?;
    let pseudo_order: Vec<&str> = PSEUDO_STENO.iter().map(|&(chord, _)| chord).collect();

    let groups = vec![
        Group::new("single_key", Notation::Steno, SINGLE_KEYS),
        Group::new("multi_key", Notation::Steno, &[]),
        Group::new("pseudo", Notation::Pseudo, &pseudo_order),
        Group::new("multi_pseudo", Notation::Pseudo, &[]),
    ];

    Ok(Curriculum::new(mapping, groups))
}
