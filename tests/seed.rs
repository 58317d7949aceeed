#[cfg(test)]
mod tests {
    use agenda::db::db::Db;
    use agenda::db::migrations::{Entity, SchemaManager};
    use agenda::db::seed::{seed_user, SeedUser};
    use agenda::db::users::Users;
    use agenda::libs::config::DbConfig;
    use chrono::{TimeZone, Utc};
    use test_context::{test_context, AsyncTestContext};

    struct SeedTestContext {
        db: Db,
    }

    impl AsyncTestContext for SeedTestContext {
        async fn setup() -> Self {
            let db = Db::connect(&DbConfig::from_env()).await.unwrap();
            SchemaManager::new(&db).refresh(Entity::ALL).await.unwrap();
            SeedTestContext { db }
        }
    }

    fn younes_seed() -> SeedUser {
        SeedUser::new(
            "Younesious",
            "Younes",
            "Mahmoudi",
            "QCalendar",
            "HamkaranSystem",
            Utc.with_ymd_and_hms(2023, 5, 2, 9, 30, 0).unwrap(),
        )
    }

    #[test_context(SeedTestContext)]
    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL); run with --test-threads=1"]
    async fn test_seed_user_creates_whole_graph(ctx: &mut SeedTestContext) {
        let seed = younes_seed();
        let message = seed_user(&ctx.db, &seed).await.unwrap();
        assert_eq!(message, "Seeding database successfully done");

        let users = Users::new(&ctx.db);
        let retrieved = users.fetch_with_calendar(&seed.username).await.unwrap();

        assert_eq!(retrieved.user.username, seed.username);
        assert_eq!(retrieved.user.first_name, seed.first_name);
        assert_eq!(retrieved.user.last_name, seed.last_name);

        assert_eq!(retrieved.calendar.name, seed.calendar_name);
        assert_eq!(retrieved.calendar.user_id, retrieved.user.id);

        // One appointment, matching subject and start time at second granularity
        assert_eq!(retrieved.appointments.len(), 1);
        let appointment = &retrieved.appointments[0];
        assert_eq!(appointment.subject, seed.appointment_subject);
        assert_eq!(appointment.start_time.timestamp(), seed.start_time.timestamp());
        assert_eq!(appointment.owner_id, retrieved.calendar.id);
        assert_eq!(appointment.owner_type, "calendar");
    }

    #[test_context(SeedTestContext)]
    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL); run with --test-threads=1"]
    async fn test_seed_registers_seeded_user_as_attendee(ctx: &mut SeedTestContext) {
        seed_user(&ctx.db, &younes_seed()).await.unwrap();

        let schema = SchemaManager::new(&ctx.db);
        assert_eq!(schema.row_count(&Entity::AppointmentUser).await.unwrap(), 1);
    }

    #[test_context(SeedTestContext)]
    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL); run with --test-threads=1"]
    async fn test_reseeding_duplicates_rows(ctx: &mut SeedTestContext) {
        // No uniqueness is enforced at this layer; identical seeds pile up
        let seed = younes_seed();
        seed_user(&ctx.db, &seed).await.unwrap();
        seed_user(&ctx.db, &seed).await.unwrap();

        let schema = SchemaManager::new(&ctx.db);
        assert_eq!(schema.row_count(&Entity::Users).await.unwrap(), 2);
        assert_eq!(schema.row_count(&Entity::Calendars).await.unwrap(), 2);
        assert_eq!(schema.row_count(&Entity::Appointments).await.unwrap(), 2);
    }
}
