pub mod bet;
pub mod championship;
pub mod r#match;
pub mod team;
pub mod user;

pub use bet::Bet;
pub use championship::Championship;
pub use r#match::{Match, MatchStatus, Outcome};
pub use team::Team;
pub use user::User;
