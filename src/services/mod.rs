pub mod answer;
pub mod checklist;

pub use answer::derive_answer;
pub use checklist::build_check_list;
