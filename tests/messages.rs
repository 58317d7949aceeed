#[cfg(test)]
mod tests {
    use agenda::libs::messages::{error, success, Message};

    #[test]
    fn test_helper_message_strings() {
        assert_eq!(Message::RefreshCompleted.to_string(), "Refresh database successfully done");
        assert_eq!(Message::SeedCompleted.to_string(), "Seeding database successfully done");
    }

    #[test]
    fn test_parameterized_messages() {
        assert_eq!(Message::AppointmentsUpdated(3).to_string(), "Updated 3 appointment(s)");
        assert_eq!(
            Message::UserNotFound("Younesious".to_string()).to_string(),
            "User 'Younesious' not found"
        );
        assert!(Message::OwnerKindInvalid("calendars".to_string())
            .to_string()
            .contains("'calendars'"));
    }

    #[test]
    fn test_message_prefixes() {
        assert!(success(Message::RefreshCompleted).starts_with("✅ "));
        assert!(error(Message::DbPingFailed).starts_with("❌ "));
    }
}
