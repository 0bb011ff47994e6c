//! Slap patterns.
//!
//! A slap is legal when the pile shows one of the patterns below. Checks
//! read the pile from its top: the top two cards, then the top three, then
//! the top card against the oldest card on the pile.

use smallvec::SmallVec;

use crate::cards::{Card, Deck};

/// A pattern on the pile that makes a slap legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SlapRule {
    /// Top two cards share a rank.
    Doubles,
    /// Top two cards are a King and a Queen.
    KingQueen,
    /// Top two cards are a 6 and a 9.
    SixNine,
    /// Top card and third from top share a rank.
    Sandwich,
    /// King and Queen with one card between them.
    Divorce,
    /// Top three cards count up or down by one.
    Run,
    /// Top card shares a rank with the bottom card.
    TopBottom,
}

impl SlapRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SlapRule::Doubles => "doubles",
            SlapRule::KingQueen => "king-queen",
            SlapRule::SixNine => "six-nine",
            SlapRule::Sandwich => "sandwich",
            SlapRule::Divorce => "divorce",
            SlapRule::Run => "run",
            SlapRule::TopBottom => "top-bottom",
        }
    }
}

impl std::fmt::Display for SlapRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The cards slap rules look at.
struct Lookahead {
    top: Card,
    second: Card,
    third: Option<Card>,
    bottom: Card,
}

impl Lookahead {
    fn of(pile: &Deck) -> Option<Self> {
        Some(Self {
            top: pile.from_back(0)?,
            second: pile.from_back(1)?,
            third: pile.from_back(2),
            bottom: pile.front()?,
        })
    }

    fn rules(&self) -> impl Iterator<Item = SlapRule> + '_ {
        let Lookahead { top, second, third, bottom } = *self;
        let checks = [
            (SlapRule::Doubles, top.same_rank_as(second)),
            (SlapRule::KingQueen, top.forms_king_queen(second)),
            (SlapRule::SixNine, top.forms_six_nine(second)),
            (SlapRule::Sandwich, third.is_some_and(|t| top.same_rank_as(t))),
            (SlapRule::Divorce, third.is_some_and(|t| top.forms_king_queen(t))),
            (SlapRule::Run, third.is_some_and(|t| top.forms_run(second, t))),
            (SlapRule::TopBottom, top.same_rank_as(bottom)),
        ];
        checks.into_iter().filter(|&(_, hit)| hit).map(|(rule, _)| rule)
    }
}

/// The first pattern the pile shows, shallowest check first.
///
/// `None` means slapping now is a penalty. Piles of fewer than two cards
/// never match.
#[must_use]
pub fn matching_rule(pile: &Deck) -> Option<SlapRule> {
    Lookahead::of(pile)?.rules().next()
}

/// Every pattern the pile shows.
#[must_use]
pub fn matching_rules(pile: &Deck) -> SmallVec<[SlapRule; 4]> {
    Lookahead::of(pile).map_or_else(SmallVec::new, |look| look.rules().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    /// Build a pile from (rank, suit) pairs listed bottom to top.
    fn pile(cards: &[(u8, Suit)]) -> Deck {
        cards
            .iter()
            .map(|&(rank, suit)| Card::new(suit, rank).unwrap())
            .collect()
    }

    fn ranks(ranks: &[u8]) -> Deck {
        ranks.iter().map(|&r| Card::new(Suit::Clubs, r).unwrap()).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(matching_rule(&Deck::new()), None);
        assert_eq!(matching_rule(&pile(&[(6, Suit::Spades)])), None);
        assert!(matching_rules(&Deck::new()).is_empty());
    }

    #[test]
    fn test_doubles() {
        let p = pile(&[(7, Suit::Clubs), (9, Suit::Hearts), (9, Suit::Spades)]);
        assert_eq!(matching_rule(&p), Some(SlapRule::Doubles));
    }

    #[test]
    fn test_king_queen() {
        let p = pile(&[(5, Suit::Diamonds), (13, Suit::Clubs), (12, Suit::Hearts)]);
        assert_eq!(matching_rule(&p), Some(SlapRule::KingQueen));
    }

    #[test]
    fn test_six_nine() {
        assert_eq!(matching_rule(&ranks(&[2, 9, 6])), Some(SlapRule::SixNine));
        assert_eq!(matching_rule(&ranks(&[2, 6, 9])), Some(SlapRule::SixNine));
    }

    #[test]
    fn test_sandwich_and_divorce() {
        assert_eq!(matching_rule(&ranks(&[2, 4, 8, 4])), Some(SlapRule::Sandwich));
        assert_eq!(matching_rule(&ranks(&[2, 13, 5, 12])), Some(SlapRule::Divorce));
    }

    #[test]
    fn test_runs() {
        let p = pile(&[(7, Suit::Hearts), (8, Suit::Clubs), (9, Suit::Diamonds)]);
        assert_eq!(matching_rule(&p), Some(SlapRule::Run));
        assert_eq!(matching_rule(&ranks(&[2, 12, 11, 10])), Some(SlapRule::Run));
        assert_eq!(matching_rule(&ranks(&[5, 8, 7])), None);
    }

    #[test]
    fn test_top_bottom() {
        let p = pile(&[(3, Suit::Spades), (10, Suit::Hearts), (5, Suit::Clubs), (3, Suit::Hearts)]);
        assert_eq!(matching_rule(&p), Some(SlapRule::TopBottom));
        assert_eq!(matching_rules(&p).as_slice(), &[SlapRule::TopBottom]);
    }

    #[test]
    fn test_nothing_to_slap() {
        assert_eq!(matching_rule(&ranks(&[2, 5])), None);
        assert_eq!(matching_rule(&ranks(&[2, 5, 11, 7])), None);
    }

    #[test]
    fn test_multiple_matches() {
        // 9-9 on top and a 9 at the bottom: doubles, sandwich and top-bottom.
        let rules = matching_rules(&ranks(&[9, 9, 9]));
        assert_eq!(
            rules.as_slice(),
            &[SlapRule::Doubles, SlapRule::Sandwich, SlapRule::TopBottom]
        );
    }
}
