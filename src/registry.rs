//! Strategy registry: ASCII algorithm name → algorithm capability.
//!
//! Each algorithm is a zero-sized type with exactly one `const` instance,
//! so `lookup` returning a `&'static dyn Algorithm` costs nothing at
//! runtime — no factory, no mutable shared state to synchronize.

use crate::algo::{Algorithm, CountCliques3Plus, Euler, Hamilton, MaxClique, Mst};

const EULER: Euler = Euler;
const MST: Mst = Mst;
const MAXCLIQUE: MaxClique = MaxClique;
const COUNTCLQ3P: CountCliques3Plus = CountCliques3Plus;
const HAMILTON: Hamilton = Hamilton;

/// Look up an algorithm by its wire name. Unknown names return `None`; the
/// caller turns that into the `ERR unknown ALGO...` wire response.
pub fn lookup(name: &str) -> Option<&'static dyn Algorithm> {
    match name {
        "EULER" => Some(&EULER),
        "MST" => Some(&MST),
        "MAXCLIQUE" => Some(&MAXCLIQUE),
        "COUNTCLQ3P" => Some(&COUNTCLQ3P),
        "HAMILTON" => Some(&HAMILTON),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        for name in ["EULER", "MST", "MAXCLIQUE", "COUNTCLQ3P", "HAMILTON"] {
            let algo = lookup(name).expect("known algorithm name");
            assert_eq!(algo.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(lookup("BOGUS").is_none());
    }
}
