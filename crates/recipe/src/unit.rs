use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Measurement units supported by the planner.
///
/// Units appear in ingredient, pantry, and shopping-list identities. Amounts
/// are stored internally in the canonical unit of each family, so `Kg` and
/// `L` inputs are converted on entry. Tokens parse case-insensitively
/// (`"kg"`, `"KG"`) and display as upper-case (`KG`).
#[derive(
    EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Unit {
    /// Pieces (count).
    Pcs,
    /// Grams (canonical mass unit).
    G,
    /// Kilograms.
    Kg,
    /// Milliliters (canonical volume unit).
    Ml,
    /// Liters.
    L,
}

/// Unit families. Units within a family are mutually convertible; units in
/// different families never merge, even for the same ingredient name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Count,
    Mass,
    Volume,
}

impl Unit {
    /// Family of this unit.
    pub fn family(self) -> Family {
        match self {
            Unit::Pcs => Family::Count,
            Unit::G | Unit::Kg => Family::Mass,
            Unit::Ml | Unit::L => Family::Volume,
        }
    }

    /// Canonical unit of this unit's family: PCS for count, G for mass,
    /// ML for volume.
    pub fn canonical(self) -> Unit {
        match self.family() {
            Family::Count => Unit::Pcs,
            Family::Mass => Unit::G,
            Family::Volume => Unit::Ml,
        }
    }

    /// Converts an amount from this unit to the canonical unit of its family.
    pub fn to_canonical(self, amount: f64) -> f64 {
        match self {
            Unit::Kg | Unit::L => amount * 1000.0,
            // Pcs, G, Ml are already canonical
            _ => amount,
        }
    }

    /// Whether two units are convertible, i.e. in the same family.
    pub fn convertible_with(self, other: Unit) -> bool {
        self.family() == other.family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_cover_all_units() {
        assert_eq!(Unit::Pcs.family(), Family::Count);
        assert_eq!(Unit::G.family(), Family::Mass);
        assert_eq!(Unit::Kg.family(), Family::Mass);
        assert_eq!(Unit::Ml.family(), Family::Volume);
        assert_eq!(Unit::L.family(), Family::Volume);
    }

    #[test]
    fn canonical_unit_per_family() {
        assert_eq!(Unit::Kg.canonical(), Unit::G);
        assert_eq!(Unit::L.canonical(), Unit::Ml);
        assert_eq!(Unit::Pcs.canonical(), Unit::Pcs);
        assert_eq!(Unit::G.canonical(), Unit::G);
        assert_eq!(Unit::Ml.canonical(), Unit::Ml);
    }

    #[test]
    fn to_canonical_scales_kg_and_l() {
        assert_eq!(Unit::Kg.to_canonical(1.5), 1500.0);
        assert_eq!(Unit::L.to_canonical(0.25), 250.0);
        assert_eq!(Unit::G.to_canonical(42.0), 42.0);
        assert_eq!(Unit::Pcs.to_canonical(3.0), 3.0);
    }

    #[test]
    fn to_canonical_is_idempotent_on_canonical_units() {
        let once = Unit::G.to_canonical(123.0);
        assert_eq!(Unit::G.to_canonical(once), once);
        let once = Unit::Ml.to_canonical(55.0);
        assert_eq!(Unit::Ml.to_canonical(once), once);
    }

    #[test]
    fn convertible_within_family_only() {
        assert!(Unit::G.convertible_with(Unit::Kg));
        assert!(Unit::Ml.convertible_with(Unit::L));
        assert!(!Unit::G.convertible_with(Unit::Ml));
        assert!(!Unit::Pcs.convertible_with(Unit::G));
    }

    #[test]
    fn tokens_parse_case_insensitively() {
        assert_eq!("kg".parse::<Unit>().unwrap(), Unit::Kg);
        assert_eq!("PCS".parse::<Unit>().unwrap(), Unit::Pcs);
        assert_eq!("Ml".parse::<Unit>().unwrap(), Unit::Ml);
        assert!("cup".parse::<Unit>().is_err());
    }

    #[test]
    fn displays_as_upper_case_token() {
        assert_eq!(Unit::Kg.to_string(), "KG");
        assert_eq!(Unit::Pcs.to_string(), "PCS");
    }
}
