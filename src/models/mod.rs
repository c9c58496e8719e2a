pub mod book;
pub mod day;
pub mod user;
pub mod word;

pub use book::Book;
pub use day::{parse_days, Day, DayInfo};
pub use user::User;
pub use word::{Word, WordRecord, WordResult};
