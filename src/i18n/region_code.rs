pub struct RegionCode {}

impl RegionCode {
    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn jp() -> &'static str {
        "JP"
    }

    pub fn mx() -> &'static str {
        "MX"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
