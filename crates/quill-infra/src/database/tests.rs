#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quill_core::DomainError;
    use quill_core::domain::{Author, Post};
    use quill_core::error::RepoError;
    use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};
    use quill_core::services::{AuthorDraft, AuthorService};
    use quill_core::validation::{Field, Violation};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    use crate::database::entity::{author, post};
    use crate::database::postgres_repo::{PostgresAuthorRepository, PostgresPostRepository};

    fn author_model(id: i32, name: &str, phone: Option<&str>) -> author::Model {
        let now = chrono::Utc::now();
        author::Model {
            id,
            name: name.to_owned(),
            phone_number: phone.map(str::to_owned),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn post_model(id: i32, title: &str, category: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: title.to_owned(),
            content: "x".repeat(300),
            summary: "y".repeat(100),
            category: category.to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(1, "Top 10 Secrets", "Fiction")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i32>::find_by_id(&repo, 1)
            .await
            .unwrap();

        let post = result.unwrap();
        assert_eq!(post.id(), Some(1));
        assert_eq!(post.title(), "Top 10 Secrets");
        assert_eq!(post.content().len(), 300);
    }

    #[tokio::test]
    async fn test_find_posts_by_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(1, "Top Picks", "Non-Fiction"),
                post_model(3, "Guess Who", "Non-Fiction"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let posts = repo.find_by_category("Non-Fiction").await.unwrap();

        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.category() == "Non-Fiction"));
    }

    #[tokio::test]
    async fn test_find_author_by_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![author_model(
                4,
                "Jane Doe",
                Some("5551234567"),
            )]])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let author: Author = repo.find_by_name("Jane Doe").await.unwrap().unwrap();

        assert_eq!(author.id(), Some(4));
        assert_eq!(author.phone_number(), Some("5551234567"));
    }

    #[tokio::test]
    async fn test_find_author_by_phone_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<author::Model>::new()])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let result = repo.find_by_phone_number("5551234567").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let err = BaseRepository::<Author, i32>::delete(&repo, 9)
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_service_rejects_name_found_in_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![author_model(1, "Jane Doe", None)]])
            .into_connection();

        let service = AuthorService::new(Arc::new(PostgresAuthorRepository::new(db)));
        let err = service
            .create(AuthorDraft {
                name: Some("Jane Doe".to_string()),
                phone_number: None,
            })
            .await
            .unwrap_err();

        let err = err.as_validation().unwrap();
        assert_eq!(err.field, Field::AuthorName);
        assert_eq!(err.violation, Violation::Duplicate);
    }

    #[tokio::test]
    async fn test_unique_violation_on_insert_maps_to_duplicate() {
        // Both lookups come back empty, then the insert hits the unique index.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                Vec::<author::Model>::new(),
                Vec::<author::Model>::new(),
            ])
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                r#"duplicate key value violates unique constraint "authors_phone_number_key""#
                    .to_string(),
            ))])
            .into_connection();

        let service = AuthorService::new(Arc::new(PostgresAuthorRepository::new(db)));
        let err = service
            .create(AuthorDraft {
                name: Some("John Roe".to_string()),
                phone_number: Some("5551234567".to_string()),
            })
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(e) => {
                assert_eq!(e.field, Field::AuthorPhoneNumber);
                assert_eq!(e.violation, Violation::Duplicate);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
