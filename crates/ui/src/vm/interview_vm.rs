use prep_core::model::{Interview, InterviewId, InterviewKind, MAX_RATING};

use super::time_fmt::{format_date, format_time};

/// UI-ready card for scheduled and completed interviews.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewCardVm {
    pub id: InterviewId,
    pub title: String,
    pub description: String,
    pub kind_icon: &'static str,
    pub date_label: Option<String>,
    pub time_label: Option<String>,
    pub stars: [bool; MAX_RATING],
    pub feedback: Option<String>,
}

#[must_use]
pub fn map_interview_card(interview: &Interview) -> InterviewCardVm {
    let kind_icon = match interview.kind {
        InterviewKind::Ai => "AI",
        InterviewKind::Peer => "Peer",
    };
    InterviewCardVm {
        id: interview.id,
        title: interview.title.clone(),
        description: interview.description.clone(),
        kind_icon,
        date_label: interview.scheduled_for.map(|at| format_date(at.date())),
        time_label: interview.scheduled_for.map(format_time),
        stars: interview
            .feedback
            .as_ref()
            .map_or([false; MAX_RATING], |feedback| feedback.stars()),
        feedback: interview.feedback.as_ref().map(|f| f.comments.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prep_core::model::{InterviewFeedback, InterviewStatus};

    #[test]
    fn completed_interview_shows_stars_and_schedule() {
        let interview = Interview {
            id: InterviewId::new(3),
            kind: InterviewKind::Ai,
            title: "Behavioral Interview".into(),
            description: String::new(),
            duration_minutes: 30,
            scheduled_for: NaiveDate::from_ymd_opt(2025, 3, 20)
                .unwrap()
                .and_hms_opt(10, 0, 0),
            status: InterviewStatus::Completed,
            feedback: Some(InterviewFeedback {
                rating: 4,
                comments: "Good".into(),
            }),
        };
        let card = map_interview_card(&interview);
        assert_eq!(card.stars, [true, true, true, true, false]);
        assert_eq!(card.date_label.as_deref(), Some("Mar 20, 2025"));
        assert_eq!(card.time_label.as_deref(), Some("10:00"));
        assert_eq!(card.feedback.as_deref(), Some("Good"));
    }
}
