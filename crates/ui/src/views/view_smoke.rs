use services::demo_user;

use super::test_harness::{ViewKind, render_view};

fn assert_contains(html: &str, expected: &str) {
    assert!(html.contains(expected), "missing {expected} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_team() {
    let html = render_view(ViewKind::Home, None);
    assert_contains(&html, "Ace Your SDE Placements");
    assert_contains(&html, "Start Preparing Now");
    assert_contains(&html, "Meet Our Team");
    assert_contains(&html, "Sarah Johnson");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_shows_demo_credentials() {
    let html = render_view(ViewKind::Login, None);
    assert_contains(&html, "Sign in to your account");
    assert_contains(&html, "Demo account: demo_user / password123");
    assert!(!html.contains("Invalid credentials"), "error shown before submit: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn signup_view_smoke_renders_all_fields() {
    let html = render_view(ViewKind::Signup, None);
    assert_contains(&html, "Create your account");
    for id in ["signup-name", "signup-email", "signup-username", "signup-password"] {
        assert_contains(&html, id);
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_guards_signed_out_visitors() {
    let html = render_view(ViewKind::Dashboard, None);
    assert_contains(&html, "You are not signed in");
    assert!(!html.contains("Welcome back"), "dashboard leaked: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_greets_user_and_opens_overview() {
    let html = render_view(ViewKind::Dashboard, Some(demo_user()));
    assert_contains(&html, "Welcome back, Demo User!");
    assert_contains(&html, "Coding Challenges");
    assert_contains(&html, "Your Study Plan");
    assert_contains(&html, "Progress Overview");
}

#[tokio::test(flavor = "current_thread")]
async fn overview_smoke_lists_applications_and_badges() {
    let html = render_view(ViewKind::Overview, Some(demo_user()));
    assert_contains(&html, "Earned Badges");
    assert_contains(&html, "Linked Lists");
    assert_contains(&html, "Next Step");
    assert_contains(&html, "Add Application");
}

#[tokio::test(flavor = "current_thread")]
async fn coding_smoke_lists_every_problem_without_selection() {
    let html = render_view(ViewKind::Coding, Some(demo_user()));
    assert_contains(&html, "Problems (5)");
    assert_contains(&html, "Two Sum");
    assert_contains(&html, "LRU Cache");
    assert_contains(&html, "Select a Problem");
    assert!(!html.contains("Run Code"), "editor shown without a problem: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn interviews_smoke_shows_scheduled_and_offers() {
    let html = render_view(ViewKind::Interviews, Some(demo_user()));
    assert_contains(&html, "Scheduled Interviews");
    assert_contains(&html, "Mar 25, 2025");
    assert_contains(&html, "AI-Powered Interview");
    assert_contains(&html, "Find a Partner");
    assert!(!html.contains("No scheduled interviews."), "empty state shown: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn soft_skills_smoke_lists_exercises() {
    let html = render_view(ViewKind::SoftSkills, Some(demo_user()));
    assert_contains(&html, "Soft Skills Training");
    assert_contains(&html, "Effective Communication Quiz");
    assert_contains(&html, "Leadership Style Analysis");
    assert_contains(&html, "Problem Solving");
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_switches_links_with_auth() {
    let signed_out = render_view(ViewKind::Header, None);
    assert_contains(&signed_out, "Sign Up");
    assert!(!signed_out.contains("Logout"), "logout shown while signed out: {signed_out}");

    let signed_in = render_view(ViewKind::Header, Some(demo_user()));
    assert_contains(&signed_in, "Dashboard");
    assert_contains(&signed_in, "Logout");
    assert!(!signed_in.contains("Sign Up"), "sign up shown while signed in: {signed_in}");
}
