mod user;

pub use user::{AgeBand, User, UserId};
