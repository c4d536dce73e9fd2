pub mod card;
pub mod priority;
pub mod review;
pub mod selector;
pub mod session;

pub use card::Card;
pub use session::PracticeSession;
