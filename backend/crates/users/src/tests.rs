//! Unit tests for the users crate

use std::sync::{Arc, Mutex};

use crate::application::{
    CreateUserInput, CreateUserUseCase, FindUserUseCase, ListUsersUseCase, RemoveUserUseCase,
    UpdateUserInput, UpdateUserUseCase, UsersConfig,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{UsersError, UsersResult};
use kernel::id::UserId;

// ============================================================================
// In-memory fake repository
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UsersResult<()> {
        self.users
            .lock()
            .expect("lock poisoned")
            .push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> UsersResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UsersResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> UsersResult<bool> {
        Ok(self
            .users
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|u| u.email == *email))
    }

    async fn find_all(&self) -> UsersResult<Vec<User>> {
        Ok(self.users.lock().expect("lock poisoned").clone())
    }

    async fn update(&self, user: &User) -> UsersResult<bool> {
        let mut users = self.users.lock().expect("lock poisoned");
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, user_id: &UserId) -> UsersResult<bool> {
        let mut users = self.users.lock().expect("lock poisoned");
        let before = users.len();
        users.retain(|u| u.user_id != *user_id);
        Ok(users.len() < before)
    }
}

fn input(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> CreateUserInput {
    CreateUserInput {
        name: name.map(String::from),
        email: email.map(String::from),
        password: password.map(String::from),
    }
}

fn create_use_case(repo: Arc<InMemoryUserRepository>) -> CreateUserUseCase<InMemoryUserRepository> {
    CreateUserUseCase::new(repo, Arc::new(UsersConfig::default()))
}

// ============================================================================
// Creation validation
// ============================================================================

mod create_validation {
    use super::*;

    #[tokio::test]
    async fn reports_every_missing_field_together() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = create_use_case(repo);

        let result = use_case.execute(input(None, None, None)).await;
        match result {
            Err(UsersError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["name", "email", "password"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = create_use_case(repo);

        let result = use_case
            .execute(input(Some("Ada"), Some("not-an-email"), Some("S3cretPass!")))
            .await;
        assert!(matches!(result, Err(UsersError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn rejects_weak_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = create_use_case(repo);

        let result = use_case
            .execute(input(Some("Ada"), Some("a@b.com"), Some("short")))
            .await;
        assert!(matches!(result, Err(UsersError::PasswordValidation(_))));
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = create_use_case(repo.clone());

        use_case
            .execute(input(Some("Ada"), Some("a@b.com"), Some("S3cretPass!")))
            .await
            .unwrap();

        let result = create_use_case(repo)
            .execute(input(Some("Bob"), Some("a@b.com"), Some("0therPass!!")))
            .await;
        assert!(matches!(result, Err(UsersError::EmailTaken)));
    }
}

// ============================================================================
// Password handling
// ============================================================================

mod password_handling {
    use super::*;

    #[tokio::test]
    async fn persisted_password_is_hashed_and_verifies() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = create_use_case(repo.clone());

        let plaintext = "S3cretPass!";
        let user = use_case
            .execute(input(Some("Ada"), Some("a@b.com"), Some(plaintext)))
            .await
            .unwrap();

        let stored = repo.find_by_id(&user.user_id).await.unwrap().unwrap();

        // Stored value is not the plaintext
        assert_ne!(stored.password.as_phc_string(), plaintext);
        assert!(stored.password.as_phc_string().starts_with("$argon2id$"));

        // But it verifies against it
        let raw = RawPassword::new(plaintext.to_string()).unwrap();
        assert!(stored.password.verify(&raw, None));

        let wrong = RawPassword::new("WrongPass123!".to_string()).unwrap();
        assert!(!stored.password.verify(&wrong, None));
    }

    #[tokio::test]
    async fn pepper_is_applied_when_configured() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(UsersConfig::with_pepper(b"app_pepper".to_vec()));
        let use_case = CreateUserUseCase::new(repo.clone(), config);

        let user = use_case
            .execute(input(Some("Ada"), Some("a@b.com"), Some("S3cretPass!")))
            .await
            .unwrap();

        let raw = RawPassword::new("S3cretPass!".to_string()).unwrap();
        assert!(user.password.verify(&raw, Some(b"app_pepper")));
        assert!(!user.password.verify(&raw, None));
    }
}

// ============================================================================
// Password redaction at the boundary
// ============================================================================

mod redaction {
    use super::*;
    use crate::presentation::dto::UserResponse;

    #[tokio::test]
    async fn response_dto_never_contains_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = create_use_case(repo);

        let plaintext = "S3cretPass!";
        let user = use_case
            .execute(input(Some("Ada"), Some("a@b.com"), Some(plaintext)))
            .await
            .unwrap();
        let phc = user.password.as_phc_string().to_string();

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("passwordHash"));

        // Neither the plaintext nor the hash appears anywhere in the body
        let body = value.to_string();
        assert!(!body.contains(plaintext));
        assert!(!body.contains(&phc));
    }
}

// ============================================================================
// Lookup
// ============================================================================

mod lookup {
    use super::*;

    #[tokio::test]
    async fn find_by_email_returns_exact_match_only() {
        let repo = Arc::new(InMemoryUserRepository::new());
        create_use_case(repo.clone())
            .execute(input(Some("Ada"), Some("a@b.com"), Some("S3cretPass!")))
            .await
            .unwrap();

        let find = FindUserUseCase::new(repo);

        let email = Email::new("a@b.com").unwrap();
        let found = find.by_email(&email).await.unwrap();
        assert_eq!(found.unwrap().email.as_str(), "a@b.com");

        let other = Email::new("c@d.com").unwrap();
        assert!(find.by_email(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_absent_is_not_found() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let find = FindUserUseCase::new(repo);

        let result = find.by_id(&UserId::new()).await;
        assert!(matches!(result, Err(UsersError::UserNotFound)));
    }
}

// ============================================================================
// Update and remove
// ============================================================================

mod update_and_remove {
    use super::*;

    async fn seeded() -> (Arc<InMemoryUserRepository>, User) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = create_use_case(repo.clone())
            .execute(input(Some("Ada"), Some("a@b.com"), Some("S3cretPass!")))
            .await
            .unwrap();
        (repo, user)
    }

    #[tokio::test]
    async fn partial_update_changes_only_supplied_fields() {
        let (repo, user) = seeded().await;
        let use_case = UpdateUserUseCase::new(repo.clone());

        let updated = use_case
            .execute(
                &user.user_id,
                UpdateUserInput {
                    name: Some("Ada Lovelace".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.email.as_str(), "a@b.com");
    }

    #[tokio::test]
    async fn update_cannot_take_anothers_email() {
        let (repo, _) = seeded().await;
        let second = create_use_case(repo.clone())
            .execute(input(Some("Bob"), Some("c@d.com"), Some("0therPass!!")))
            .await
            .unwrap();

        let result = UpdateUserUseCase::new(repo)
            .execute(
                &second.user_id,
                UpdateUserInput {
                    name: None,
                    email: Some("a@b.com".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(UsersError::EmailTaken)));
    }

    #[tokio::test]
    async fn update_to_own_email_is_allowed() {
        let (repo, user) = seeded().await;

        let updated = UpdateUserUseCase::new(repo)
            .execute(
                &user.user_id,
                UpdateUserInput {
                    name: None,
                    email: Some("A@B.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email.as_str(), "a@b.com");
    }

    #[tokio::test]
    async fn remove_deletes_user() {
        let (repo, user) = seeded().await;

        RemoveUserUseCase::new(repo.clone())
            .execute(&user.user_id)
            .await
            .unwrap();

        assert!(ListUsersUseCase::new(repo).execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_absent_id_is_not_found() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let result = RemoveUserUseCase::new(repo).execute(&UserId::new()).await;
        assert!(matches!(result, Err(UsersError::UserNotFound)));
    }
}

// ============================================================================
// Error mapping
// ============================================================================

mod error_mapping {
    use super::*;
    use axum::http::StatusCode;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn status_codes() {
        assert_eq!(UsersError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(UsersError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            UsersError::MissingFields(vec!["email"]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UsersError::PasswordValidation("too short".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UsersError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_fields_map_names_every_field() {
        let err = UsersError::MissingFields(vec!["email", "password"]).into_app_error();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
        let fields = err.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("email", "email is missing".into()));
        assert_eq!(fields[1], ("password", "password is missing".into()));
    }
}
