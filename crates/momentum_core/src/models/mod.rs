pub mod event;
pub mod game_state;
pub mod rivalry;
pub mod team;

pub use event::{EventType, MomentumEvent};
pub use game_state::{GameState, QUARTER_SECONDS, REGULATION_QUARTERS};
pub use rivalry::RivalryProfile;
pub use team::{Team, TeamGameplayModifiers, TeamId, TeamRegistry};
