#[cfg(test)]
mod tests {
    use agenda::db::db::Db;
    use agenda::db::migrations::{Entity, SchemaManager};
    use agenda::db::seed::{seed_user, SeedUser};
    use agenda::db::users::Users;
    use agenda::libs::appointment::AppointmentWindow;
    use agenda::libs::config::DbConfig;
    use chrono::{TimeZone, Utc};
    use test_context::{test_context, AsyncTestContext};

    struct RangeQueryTestContext {
        db: Db,
    }

    impl AsyncTestContext for RangeQueryTestContext {
        async fn setup() -> Self {
            let db = Db::connect(&DbConfig::from_env()).await.unwrap();
            SchemaManager::new(&db).refresh(Entity::ALL).await.unwrap();
            RangeQueryTestContext { db }
        }
    }

    #[test_context(RangeQueryTestContext)]
    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL); run with --test-threads=1"]
    async fn test_range_scope_filters_by_window_subject_and_calendar(ctx: &mut RangeQueryTestContext) {
        let seeds = [
            // Both filters and the May window match
            ("Younesious", "Younes", "Mahmoudi", "Contest events", "HamkaranSystem", (2023, 5, 2)),
            ("Roozbehiano", "Roozbeh", "SharifN", "Contest events", "HamkaranSystem", (2023, 5, 25)),
            // Outside the window
            ("Matiniano", "Matin", "Moeenie", "Contest events", "HamkaranSystem", (2023, 4, 2)),
            // Calendar name does not contain the fragment
            ("Moieenious", "Alice", "Jones", "My Calendar", "HamkaranSystem", (2023, 4, 2)),
            // Different subject
            ("Ali", "Ali", "Jones", "Contest events", "quera", (2023, 4, 2)),
        ];
        for (username, first, last, calendar, subject, (y, m, d)) in seeds {
            let seed = SeedUser::new(
                username,
                first,
                last,
                calendar,
                subject,
                Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
            );
            seed_user(&ctx.db, &seed).await.unwrap();
        }

        let window = AppointmentWindow::new(
            Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 5, 31, 0, 0, 0).unwrap(),
        );

        let users = Users::new(&ctx.db);
        let usernames = users
            .usernames_with_appointment_between(&window, "HamkaranSystem", "Contest events")
            .await
            .unwrap();

        // Distinct usernames, ordered by username
        assert_eq!(usernames, vec!["Roozbehiano".to_string(), "Younesious".to_string()]);
    }

    #[test_context(RangeQueryTestContext)]
    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL); run with --test-threads=1"]
    async fn test_range_scope_window_bounds_are_inclusive(ctx: &mut RangeQueryTestContext) {
        let seed = SeedUser::new(
            "Younesious",
            "Younes",
            "Mahmoudi",
            "Contest events",
            "HamkaranSystem",
            Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
        );
        seed_user(&ctx.db, &seed).await.unwrap();

        // The appointment sits exactly on the lower bound
        let window = AppointmentWindow::new(
            Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 5, 31, 0, 0, 0).unwrap(),
        );

        let users = Users::new(&ctx.db);
        let usernames = users
            .usernames_with_appointment_between(&window, "HamkaranSystem", "Contest events")
            .await
            .unwrap();
        assert_eq!(usernames, vec!["Younesious".to_string()]);
    }
}
