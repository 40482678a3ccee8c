use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Coding Practice",
        description: "Access thousands of curated DSA problems with detailed solutions and explanations.",
    },
    Feature {
        title: "AI-Powered Learning",
        description: "Get personalized study plans and recommendations based on your progress.",
    },
    Feature {
        title: "Mock Interviews",
        description: "Practice with peers and AI-powered mock interviews to build confidence.",
    },
    Feature {
        title: "Application Tracker",
        description: "Never miss a deadline with our smart application tracking system.",
    },
    Feature {
        title: "Progress Analytics",
        description: "Track your improvement with detailed performance analytics.",
    },
    Feature {
        title: "Expert Mentorship",
        description: "Get guidance from industry professionals at top tech companies.",
    },
];

const TEAM: [(&str, &str); 4] = [
    ("Sarah Johnson", "Lead Developer"),
    ("Michael Chen", "Frontend Specialist"),
    ("Emily Rodriguez", "Backend Engineer"),
    ("David Kim", "UI/UX Designer"),
];

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { class: "hero-title",
                    "Ace Your SDE Placements"
                    span { class: "hero-accent", "With Confidence" }
                }
                p { class: "hero-subtitle",
                    "Your all-in-one platform for structured interview preparation, coding practice, and placement tracking."
                }
                Link { class: "btn btn-primary btn-lg", to: Route::Signup {}, "Start Preparing Now" }
            }
            section { class: "features",
                h2 { "Why Students Struggle with Placements" }
                p { class: "section-subtitle",
                    "Breaking into SDE roles is challenging. We help you overcome the common hurdles and prepare effectively."
                }
                div { class: "card-grid",
                    for feature in FEATURES.iter() {
                        div { class: "feature-card", key: "{feature.title}",
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }
            section { class: "team",
                h2 { "Meet Our Team" }
                p { class: "section-subtitle",
                    "Our talented developers work tirelessly to create the best learning experience for you."
                }
                div { class: "card-grid",
                    for (name, role) in TEAM {
                        div { class: "team-card", key: "{name}",
                            h3 { "{name}" }
                            p { "{role}" }
                        }
                    }
                }
            }
            section { class: "cta",
                h2 { "Ready to Transform Your Placement Prep?" }
                p { "Join thousands of students preparing smarter, not harder!" }
                Link { class: "btn btn-light btn-lg", to: Route::Signup {}, "Sign Up Now" }
            }
            footer { class: "site-footer",
                p { "\u{a9} 2025 SDE Placement Platform. All rights reserved." }
            }
        }
    }
}
