//! Chart axis definitions.
//!
//! A range chart is a nested mapping over fixed axes: tournament stage,
//! seat position, opponent strength (opponent charts only), play style,
//! and stack-depth bucket. Each axis enum carries its canonical wire
//! string and a complete `ALL` table, which the skeleton generator and
//! validator both iterate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Tournament progression stage.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Stage {
    #[serde(rename = "early")]
    Early,
    #[serde(rename = "middle")]
    Middle,
    #[serde(rename = "pre-bubble")]
    PreBubble,
    #[serde(rename = "late")]
    Late,
    #[serde(rename = "pre-final")]
    PreFinal,
    #[serde(rename = "final")]
    Final,
}

impl Stage {
    pub const ALL: [Self; 6] = [
        Self::Early,
        Self::Middle,
        Self::PreBubble,
        Self::Late,
        Self::PreFinal,
        Self::Final,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Middle => "middle",
            Self::PreBubble => "pre-bubble",
            Self::Late => "late",
            Self::PreFinal => "pre-final",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seat position at the table.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Position {
    #[serde(rename = "UTG")]
    Utg,
    #[serde(rename = "UTG+1")]
    UtgPlusOne,
    #[serde(rename = "MP")]
    Mp,
    #[serde(rename = "HJ")]
    Hj,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "BTN")]
    Btn,
    #[serde(rename = "SB")]
    Sb,
    #[serde(rename = "BB")]
    Bb,
}

impl Position {
    pub const ALL: [Self; 8] = [
        Self::Utg,
        Self::UtgPlusOne,
        Self::Mp,
        Self::Hj,
        Self::Co,
        Self::Btn,
        Self::Sb,
        Self::Bb,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utg => "UTG",
            Self::UtgPlusOne => "UTG+1",
            Self::Mp => "MP",
            Self::Hj => "HJ",
            Self::Co => "CO",
            Self::Btn => "BTN",
            Self::Sb => "SB",
            Self::Bb => "BB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opponent profile bucket. Present only in opponent charts.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Fish,
    Amateur,
    Regular,
}

impl Strength {
    pub const ALL: [Self; 3] = [Self::Fish, Self::Amateur, Self::Regular];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Amateur => "amateur",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Play style the chart is tuned for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStyle {
    Tight,
    Balanced,
    Aggressor,
}

impl PlayStyle {
    pub const ALL: [Self; 3] = [Self::Tight, Self::Balanced, Self::Aggressor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Balanced => "balanced",
            Self::Aggressor => "aggressor",
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discretized big-blind depth. Deeper buckets unlock later raising
/// rounds, so each bucket's action set is a superset of the previous.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackBucket {
    VeryShort,
    Short,
    Medium,
    Big,
}

impl StackBucket {
    pub const ALL: [Self; 4] = [Self::VeryShort, Self::Short, Self::Medium, Self::Big];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryShort => "very_short",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Big => "big",
        }
    }

    /// Canonical action keys legal at this depth, in chart order.
    pub const fn actions(self) -> &'static [RangeAction] {
        use RangeAction::*;
        match self {
            Self::VeryShort => &[
                OpenRaise,
                PushRange,
                CallVsShove,
                DefenseVsOpen,
                ThreeBet,
                DefenseVsThreeBet,
            ],
            Self::Short => &[
                OpenRaise,
                PushRange,
                CallVsShove,
                DefenseVsOpen,
                ThreeBet,
                DefenseVsThreeBet,
                FourBet,
                DefenseVsFourBet,
            ],
            Self::Medium => &[
                OpenRaise,
                PushRange,
                CallVsShove,
                DefenseVsOpen,
                ThreeBet,
                DefenseVsThreeBet,
                FourBet,
                DefenseVsFourBet,
                FiveBet,
            ],
            Self::Big => &[
                OpenRaise,
                PushRange,
                CallVsShove,
                DefenseVsOpen,
                ThreeBet,
                DefenseVsThreeBet,
                FourBet,
                DefenseVsFourBet,
                FiveBet,
                DefenseVsFiveBet,
            ],
        }
    }
}

impl fmt::Display for StackBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chart action key. Leaf values under these keys are opaque
/// range-notation strings; the crate never parses hand notation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RangeAction {
    #[serde(rename = "open_raise")]
    OpenRaise,
    #[serde(rename = "push_range")]
    PushRange,
    #[serde(rename = "call_vs_shove")]
    CallVsShove,
    #[serde(rename = "defense_vs_open")]
    DefenseVsOpen,
    #[serde(rename = "3bet")]
    ThreeBet,
    #[serde(rename = "defense_vs_3bet")]
    DefenseVsThreeBet,
    #[serde(rename = "4bet")]
    FourBet,
    #[serde(rename = "defense_vs_4bet")]
    DefenseVsFourBet,
    #[serde(rename = "5bet")]
    FiveBet,
    #[serde(rename = "defense_vs_5bet")]
    DefenseVsFiveBet,
}

impl RangeAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenRaise => "open_raise",
            Self::PushRange => "push_range",
            Self::CallVsShove => "call_vs_shove",
            Self::DefenseVsOpen => "defense_vs_open",
            Self::ThreeBet => "3bet",
            Self::DefenseVsThreeBet => "defense_vs_3bet",
            Self::FourBet => "4bet",
            Self::DefenseVsFourBet => "defense_vs_4bet",
            Self::FiveBet => "5bet",
            Self::DefenseVsFiveBet => "defense_vs_5bet",
        }
    }
}

impl fmt::Display for RangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chart shape discriminant.
///
/// Hero charts index `stage → position → playStyle → bucket → action`;
/// opponent charts insert a `strength` level between position and play
/// style. Validation dispatches on this discriminant.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Hero,
    Opponent,
}

impl SchemaKind {
    pub const ALL: [Self; 2] = [Self::Hero, Self::Opponent];

    /// Infer the shape of a candidate document from its third nesting
    /// level: strength keys mean an opponent chart, play-style keys a
    /// hero chart. Returns `None` for anything else.
    pub fn detect(candidate: &Value) -> Option<Self> {
        let stages = candidate.as_object()?;
        let positions = stages.values().next()?.as_object()?;
        let third = positions.values().next()?.as_object()?;
        let first_key = third.keys().next()?;
        if Strength::ALL.iter().any(|s| s.as_str() == first_key) {
            Some(Self::Opponent)
        } else if PlayStyle::ALL.iter().any(|p| p.as_str() == first_key) {
            Some(Self::Hero)
        } else {
            None
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Hero => "hero",
            Self::Opponent => "opponent",
        };
        write!(f, "{repr}")
    }
}
