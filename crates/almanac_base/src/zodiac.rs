//! Western tropical zodiac sign from a birth month/day.
//!
//! Signs change on fixed calendar days; the year is never consulted.

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign with the given English name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A sign's strength and the matching caution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraitPair {
    pub strength: &'static str,
    pub caution: &'static str,
}

impl TraitPair {
    /// Pair used for names that are not a sign.
    pub const NEUTRAL: Self = Self {
        strength: "Neutral",
        caution: "Routine",
    };
}

/// For each Gregorian month: the first day of the later sign, the sign
/// before that day and the sign from that day on.
const BOUNDARIES: [(u32, ZodiacSign, ZodiacSign); 12] = [
    (20, ZodiacSign::Capricorn, ZodiacSign::Aquarius),
    (19, ZodiacSign::Aquarius, ZodiacSign::Pisces),
    (21, ZodiacSign::Pisces, ZodiacSign::Aries),
    (20, ZodiacSign::Aries, ZodiacSign::Taurus),
    (21, ZodiacSign::Taurus, ZodiacSign::Gemini),
    (22, ZodiacSign::Gemini, ZodiacSign::Cancer),
    (23, ZodiacSign::Cancer, ZodiacSign::Leo),
    (23, ZodiacSign::Leo, ZodiacSign::Virgo),
    (23, ZodiacSign::Virgo, ZodiacSign::Libra),
    (24, ZodiacSign::Libra, ZodiacSign::Scorpio),
    (23, ZodiacSign::Scorpio, ZodiacSign::Sagittarius),
    (22, ZodiacSign::Sagittarius, ZodiacSign::Capricorn),
];

/// Sign for a birth month/day.
///
/// A month outside 1..=12 yields Aries. The day is compared as given;
/// callers clamp it to the month.
pub fn resolve_zodiac(month: u32, day: u32) -> ZodiacSign {
    match month {
        1..=12 => {
            let (first, before, from) = BOUNDARIES[(month - 1) as usize];
            if day < first { before } else { from }
        }
        _ => ZodiacSign::Aries,
    }
}

/// Strength/caution pair of a sign.
pub const fn traits_for(sign: ZodiacSign) -> TraitPair {
    let (strength, caution) = match sign {
        ZodiacSign::Aries => ("Boldness", "Impatience"),
        ZodiacSign::Taurus => ("Stability", "Possessiveness"),
        ZodiacSign::Gemini => ("Wit", "Indecisiveness"),
        ZodiacSign::Cancer => ("Intuition", "Moody"),
        ZodiacSign::Leo => ("Confidence", "Arrogance"),
        ZodiacSign::Virgo => ("Detail-oriented", "Self-critical"),
        ZodiacSign::Libra => ("Charming", "Detached"),
        ZodiacSign::Scorpio => ("Passionate", "Secretive"),
        ZodiacSign::Sagittarius => ("Adventurous", "Reckless"),
        ZodiacSign::Capricorn => ("Ambitious", "Cold"),
        ZodiacSign::Aquarius => ("Innovative", "Unpredictable"),
        ZodiacSign::Pisces => ("Compassionate", "Oversensitive"),
    };
    TraitPair { strength, caution }
}

/// Trait pair by sign name; unknown names get [`TraitPair::NEUTRAL`].
pub fn traits_for_name(name: &str) -> TraitPair {
    ZodiacSign::from_name(name).map_or(TraitPair::NEUTRAL, traits_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn every_boundary() {
        let cases = [
            ((1, 19), ZodiacSign::Capricorn),
            ((1, 20), ZodiacSign::Aquarius),
            ((2, 18), ZodiacSign::Aquarius),
            ((2, 19), ZodiacSign::Pisces),
            ((3, 20), ZodiacSign::Pisces),
            ((3, 21), ZodiacSign::Aries),
            ((4, 19), ZodiacSign::Aries),
            ((4, 20), ZodiacSign::Taurus),
            ((5, 20), ZodiacSign::Taurus),
            ((5, 21), ZodiacSign::Gemini),
            ((6, 21), ZodiacSign::Gemini),
            ((6, 22), ZodiacSign::Cancer),
            ((7, 22), ZodiacSign::Cancer),
            ((7, 23), ZodiacSign::Leo),
            ((8, 22), ZodiacSign::Leo),
            ((8, 23), ZodiacSign::Virgo),
            ((9, 22), ZodiacSign::Virgo),
            ((9, 23), ZodiacSign::Libra),
            ((10, 23), ZodiacSign::Libra),
            ((10, 24), ZodiacSign::Scorpio),
            ((11, 22), ZodiacSign::Scorpio),
            ((11, 23), ZodiacSign::Sagittarius),
            ((12, 21), ZodiacSign::Sagittarius),
            ((12, 22), ZodiacSign::Capricorn),
        ];
        for ((m, d), sign) in cases {
            assert_eq!(resolve_zodiac(m, d), sign, "{m}-{d}");
        }
    }

    #[test]
    fn out_of_range_month_is_aries() {
        assert_eq!(resolve_zodiac(0, 10), ZodiacSign::Aries);
        assert_eq!(resolve_zodiac(13, 1), ZodiacSign::Aries);
    }

    #[test]
    fn traits() {
        assert_eq!(
            traits_for(ZodiacSign::Virgo),
            TraitPair {
                strength: "Detail-oriented",
                caution: "Self-critical"
            }
        );
        assert_eq!(traits_for_name("leo").strength, "Confidence");
        assert_eq!(traits_for_name("Ophiuchus"), TraitPair::NEUTRAL);
    }

    #[test]
    fn names_round_trip() {
        for s in ALL_SIGNS {
            assert_eq!(ZodiacSign::from_name(s.name()), Some(s));
        }
    }
}
