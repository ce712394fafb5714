// Ranking utilities
// Score-to-rank tables and the Danish reading-level descriptions

/// Sorted `(exclusive upper bound, rank)` pairs; scores past the last bound get `fallback`.
#[derive(Debug, Clone, Copy)]
pub struct RankTable {
    bounds: &'static [(f64, u8)],
    fallback: u8,
}

impl RankTable {
    pub const fn new(bounds: &'static [(f64, u8)], fallback: u8) -> Self {
        Self { bounds, fallback }
    }

    pub fn rank_for(&self, score: f64) -> u8 {
        self.bounds
            .iter()
            .find(|(upper, _)| score < *upper)
            .map(|(_, rank)| *rank)
            .unwrap_or(self.fallback)
    }
}

pub const SYNTACTIC_RANKS: RankTable = RankTable::new(
    &[
        (15.0, 1),
        (20.0, 2),
        (25.0, 3),
        (30.0, 4),
        (35.0, 5),
        (40.0, 6),
        (45.0, 7),
        (50.0, 8),
        (55.0, 9),
    ],
    10,
);

pub const TOTAL_RANKS: RankTable = RankTable::new(
    &[
        (10.0, 1),
        (15.0, 2),
        (20.0, 3),
        (25.0, 4),
        (30.0, 5),
        (35.0, 6),
        (40.0, 7),
        (45.0, 8),
        (50.0, 9),
    ],
    10,
);

/// Reading level for a rank. Anything outside 1-9 reads as the hardest level.
pub fn rank_description(rank: u8) -> &'static str {
    match rank {
        1 => "Meget let tekst for alle læsere, børnelitteratur.",
        2 => "Let tekst for øvede læsere, ugebladslitteratur.",
        3 => "Let tekst for erfarne læsere, simpel skønlitteratur.",
        4 => "Middel, dagblade og tidsskrifter.",
        5 => "Middel, let faglitteratur og populærvidenskabelige bøger.",
        6 => "Svær, akademisk niveau, videnskabelige artikler.",
        7 => "Svær, teknisk faglitteratur, specialistbøger.",
        8 => "Meget svær, kompleks akademisk eller teknisk tekst.",
        9 => "Ekstremt svær, teknisk, lovtekster og akademiske udgivelser.",
        _ => "Ekstremt svær, meget kompleks faglitteratur på højeste niveau.",
    }
}

/// Round half away from zero to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntactic_rank_boundaries() {
        assert_eq!(SYNTACTIC_RANKS.rank_for(0.0), 1);
        assert_eq!(SYNTACTIC_RANKS.rank_for(14.99), 1);
        assert_eq!(SYNTACTIC_RANKS.rank_for(15.0), 2);
        assert_eq!(SYNTACTIC_RANKS.rank_for(54.9), 9);
        assert_eq!(SYNTACTIC_RANKS.rank_for(55.0), 10);
        assert_eq!(SYNTACTIC_RANKS.rank_for(1000.0), 10);
    }

    #[test]
    fn test_total_rank_boundaries() {
        assert_eq!(TOTAL_RANKS.rank_for(9.9), 1);
        assert_eq!(TOTAL_RANKS.rank_for(10.0), 2);
        assert_eq!(TOTAL_RANKS.rank_for(32.0), 6);
        assert_eq!(TOTAL_RANKS.rank_for(49.99), 9);
        assert_eq!(TOTAL_RANKS.rank_for(50.0), 10);
    }

    #[test]
    fn test_rank_description_falls_through_to_hardest() {
        assert_eq!(rank_description(1), "Meget let tekst for alle læsere, børnelitteratur.");
        assert_eq!(rank_description(4), "Middel, dagblade og tidsskrifter.");
        let hardest = "Ekstremt svær, meget kompleks faglitteratur på højeste niveau.";
        assert_eq!(rank_description(10), hardest);
        assert_eq!(rank_description(0), hardest);
        assert_eq!(rank_description(42), hardest);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(7.0), 7.0);
        assert_eq!(round1(2.96), 3.0);
    }
}
