use serde::Serialize;

/// Qualitative band for a total footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintLevel {
    Excellent,
    Good,
    Moderate,
    High,
}

impl FootprintLevel {
    pub fn for_total(total_footprint: f64) -> Self {
        if total_footprint < 50.0 {
            Self::Excellent
        } else if total_footprint < 100.0 {
            Self::Good
        } else if total_footprint < 200.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_use_half_open_upper_bounds() {
        assert_eq!(FootprintLevel::for_total(0.0), FootprintLevel::Excellent);
        assert_eq!(FootprintLevel::for_total(49.9), FootprintLevel::Excellent);
        assert_eq!(FootprintLevel::for_total(50.0), FootprintLevel::Good);
        assert_eq!(FootprintLevel::for_total(179.0), FootprintLevel::Moderate);
        assert_eq!(FootprintLevel::for_total(200.0), FootprintLevel::High);
        assert_eq!(FootprintLevel::High.label(), "High");
    }
}
