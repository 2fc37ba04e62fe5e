use shopping::Pantry;
use thiserror::Error;

use crate::io::IoError;

/// Errors from parsing a `--pantry` command-line spec.
#[derive(Error, Debug)]
pub enum PantrySpecError {
    #[error("bad pantry entry: {0} (expected name=amount:UNIT)")]
    BadEntry(String),

    #[error("bad amount: {0}")]
    BadAmount(String),

    #[error(transparent)]
    UnknownUnit(#[from] IoError),

    #[error(transparent)]
    Domain(#[from] shopping::ShoppingError),
}

/// Parses a pantry spec of comma-separated `name=amount:UNIT` entries,
/// e.g. `"milk=200:ML,egg=1:PCS"`. Blank input yields an empty pantry.
pub fn parse_pantry_spec(spec: &str) -> Result<Pantry, PantrySpecError> {
    let mut pantry = Pantry::new();

    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, rest) = entry
            .split_once('=')
            .ok_or_else(|| PantrySpecError::BadEntry(entry.to_string()))?;
        let (amount, unit) = rest
            .split_once(':')
            .ok_or_else(|| PantrySpecError::BadEntry(entry.to_string()))?;

        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| PantrySpecError::BadAmount(amount.trim().to_string()))?;
        let unit = crate::io::parse_unit(unit)?;

        pantry.add(name.trim(), amount, unit)?;
    }
    Ok(pantry)
}

#[cfg(test)]
mod tests {
    use recipe::Unit;

    use super::*;

    #[test]
    fn parses_multiple_entries() {
        let pantry = parse_pantry_spec("milk=200:ML, egg=1:pcs").unwrap();
        assert_eq!(pantry.amount_of("milk", Unit::Ml), 200.0);
        assert_eq!(pantry.amount_of("egg", Unit::Pcs), 1.0);
    }

    #[test]
    fn blank_spec_is_an_empty_pantry() {
        assert!(parse_pantry_spec("").unwrap().is_empty());
        assert!(parse_pantry_spec(" , ").unwrap().is_empty());
    }

    #[test]
    fn canonicalizes_units_on_entry() {
        let pantry = parse_pantry_spec("flour=2:KG").unwrap();
        assert_eq!(pantry.amount_of("flour", Unit::G), 2000.0);
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(
            parse_pantry_spec("milk200:ML"),
            Err(PantrySpecError::BadEntry(_))
        ));
        assert!(matches!(
            parse_pantry_spec("milk=200ML"),
            Err(PantrySpecError::BadEntry(_))
        ));
        assert!(matches!(
            parse_pantry_spec("milk=abc:ML"),
            Err(PantrySpecError::BadAmount(_))
        ));
        assert!(matches!(
            parse_pantry_spec("milk=200:CUP"),
            Err(PantrySpecError::UnknownUnit(_))
        ));
        assert!(matches!(
            parse_pantry_spec("milk=-5:ML"),
            Err(PantrySpecError::Domain(_))
        ));
    }
}
