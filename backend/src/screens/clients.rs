//! Client CRM screen: profile, preferences, job history and feedback.

use serde::{Deserialize, Serialize};

use crate::models::{ClientProfile, JobRecord};
use crate::services::metrics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientTab {
    /// Contact details and job history.
    #[default]
    Overview,
    Preferences,
    Feedback,
}

/// Feedback card content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub job_id: String,
    pub title: Option<String>,
    pub cleaner: String,
    pub rating: Option<u8>,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDetail {
    pub profile: ClientProfile,
    pub history: Vec<JobRecord>,
    pub average_rating: f64,
    /// Sum of completed job costs.
    pub total_spent: f64,
    pub feedback: Vec<FeedbackEntry>,
}

pub fn client_detail(client: &ClientProfile, history: &[JobRecord]) -> ClientDetail {
    ClientDetail {
        profile: client.clone(),
        history: history.to_vec(),
        average_rating: metrics::average_rating(history),
        total_spent: metrics::total_spend(history),
        feedback: metrics::feedback_entries(history)
            .into_iter()
            .map(|job| FeedbackEntry {
                job_id: job.id.to_string(),
                title: job.title.clone(),
                cleaner: job.cleaner.name.clone(),
                rating: job.rating.map(|r| r.value()),
                feedback: job.feedback.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

/// View state of the client CRM screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientScreen {
    pub active_tab: ClientTab,
    pub new_feedback: String,
}

impl ClientScreen {
    pub fn select_tab(&mut self, tab: ClientTab) {
        self.active_tab = tab;
    }

    pub fn set_feedback(&mut self, text: impl Into<String>) {
        self.new_feedback = text.into();
    }

    /// Take the typed feedback and clear the box. Blank input yields `None`.
    pub fn take_feedback(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.new_feedback);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientId, ClientPreferences, JobStatus};
    use crate::services::fixtures::{create_test_job, date, with_cost, with_rating};

    fn create_test_client() -> ClientProfile {
        ClientProfile {
            id: ClientId::new("1"),
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            address: "123 Main Street, Cityville, ST 12345".to_string(),
            avatar: None,
            join_date: date(2023, 6, 15),
            total_jobs: 24,
            preferences: ClientPreferences {
                pet_friendly: true,
                kitchen_focus: true,
                eco_friendly: false,
                deep_clean: true,
                special_instructions: "Careful around the antique furniture.".to_string(),
            },
        }
    }

    fn client_history() -> Vec<JobRecord> {
        let mut first = with_rating(
            with_cost(create_test_job("1", "s", JobStatus::Completed), 120.0),
            5,
        );
        first.feedback = Some("Excellent work!".to_string());
        first.title = Some("Weekly House Cleaning".to_string());
        let mut second = with_rating(
            with_cost(create_test_job("2", "m", JobStatus::Completed), 80.0),
            4,
        );
        second.feedback = Some("Good job overall.".to_string());
        let third = with_cost(create_test_job("3", "e", JobStatus::Scheduled), 120.0);
        vec![first, second, third]
    }

    #[test]
    fn test_client_detail_metrics() {
        let detail = client_detail(&create_test_client(), &client_history());
        assert_eq!(detail.average_rating, 4.5);
        assert_eq!(detail.total_spent, 200.0);
        assert_eq!(detail.feedback.len(), 2);
        assert_eq!(detail.feedback[0].title.as_deref(), Some("Weekly House Cleaning"));
        assert_eq!(detail.feedback[0].rating, Some(5));
        assert_eq!(detail.feedback[1].cleaner, "Cleaner m");
    }

    #[test]
    fn test_client_detail_without_history() {
        let detail = client_detail(&create_test_client(), &[]);
        assert_eq!(detail.average_rating, 0.0);
        assert_eq!(detail.total_spent, 0.0);
        assert!(detail.feedback.is_empty());
    }

    #[test]
    fn test_tabs_and_feedback_box() {
        let mut screen = ClientScreen::default();
        assert_eq!(screen.active_tab, ClientTab::Overview);
        screen.select_tab(ClientTab::Preferences);
        assert_eq!(screen.active_tab, ClientTab::Preferences);
        assert_eq!(
            serde_json::to_string(&screen.active_tab).unwrap(),
            "\"preferences\""
        );
        screen.select_tab(ClientTab::Feedback);
        assert_eq!(screen.active_tab, ClientTab::Feedback);

        screen.set_feedback("  Great service  ");
        assert_eq!(screen.take_feedback().as_deref(), Some("Great service"));
        assert!(screen.new_feedback.is_empty());

        screen.set_feedback("   ");
        assert!(screen.take_feedback().is_none());
    }
}
