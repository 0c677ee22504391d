use crate::chess::Role;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(test)]
use proptest::sample::select;

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rules")]
pub struct ParseRulesError(ron::de::SpannedError);

/// Runtime configuration of a [`Game`][`crate::game::Game`].
///
/// Written in [RON], e.g. `(promotion: knight, king_adjacency: true)`.
/// Omitted fields take their default value.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// The piece a pawn is promoted to when the player does not choose one.
    ///
    /// Choosing a pawn or a king leaves the pawn unpromoted.
    #[cfg_attr(test, strategy(select(vec![Role::Knight, Role::Bishop, Role::Rook, Role::Queen])))]
    pub promotion: Role,

    /// Whether a king standing next to the opposing king is in check.
    pub king_adjacency: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            promotion: Role::Queen,
            king_adjacency: false,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_rules_is_an_identity(r: Rules) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[test]
    fn omitted_fields_take_default_values() {
        assert_eq!("()".parse(), Ok(Rules::default()));

        assert_eq!(
            "(promotion: knight)".parse(),
            Ok(Rules {
                promotion: Role::Knight,
                ..Rules::default()
            })
        );

        assert_eq!(
            "(king_adjacency: true)".parse(),
            Ok(Rules {
                king_adjacency: true,
                ..Rules::default()
            })
        );
    }

    #[test]
    fn default_rules_promote_to_queen_without_king_adjacency() {
        let rules = Rules::default();
        assert_eq!(rules.promotion, Role::Queen);
        assert!(!rules.king_adjacency);
    }

    #[proptest]
    fn parsing_rules_fails_for_unknown_fields(#[strategy("[a-z]{12,16}")] field: String) {
        assert!(format!("({}: true)", field).parse::<Rules>().is_err());
    }

    #[test]
    fn parsing_rules_fails_for_unknown_roles() {
        assert!("(promotion: archbishop)".parse::<Rules>().is_err());
    }
}
