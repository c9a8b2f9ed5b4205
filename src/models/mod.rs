pub mod question;

pub use question::{
    option_label, Question, QuestionId, QuestionOption, QuestionSubmission, OPTION_COUNT,
    OPTION_LABELS,
};
