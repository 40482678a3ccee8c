mod interview_vm;
mod overview_vm;
mod problem_vm;
mod time_fmt;

pub use interview_vm::{InterviewCardVm, map_interview_card};
pub use overview_vm::{ApplicationRowVm, ProgressVm, map_application_row, map_progress};
pub use problem_vm::{ProblemRowVm, difficulty_class, map_problem_row, map_problem_rows};
pub use time_fmt::{format_date, format_time};
