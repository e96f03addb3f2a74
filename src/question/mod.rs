pub mod bank;
pub mod cleaning;
pub mod model;

pub use bank::{QuestionBank, QuestionBankError};
pub use model::Question;
