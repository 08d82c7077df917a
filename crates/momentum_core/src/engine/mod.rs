pub mod crowd;
pub mod meter;
pub mod modifiers;
pub mod rules;
pub mod system;

pub use crowd::CrowdNoiseController;
pub use meter::{MomentumMeter, MomentumTrend};
pub use modifiers::{
    AccuracyModifier, GameplayModifierService, Modifier, ModifierCore, PenaltyRiskModifier,
    ACCURACY_MODIFIER_ID, PENALTY_RISK_MODIFIER_ID,
};
pub use rules::MomentumRuleEngine;
pub use system::{EventOutcome, IgnoreReason, MomentumSnapshot, MomentumSystem, TeamMomentumSnapshot};
