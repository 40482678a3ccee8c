mod auth;
mod dashboard;
mod home;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::{LoginView, SignupView};
pub use dashboard::{
    CodingPanel, DashboardTab, DashboardView, InterviewsPanel, OverviewPanel, SoftSkillsPanel,
};
pub use home::HomeView;
pub use state::{ViewError, ViewState};
