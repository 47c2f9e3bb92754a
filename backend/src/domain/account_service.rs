//! Account registration and login backed by the user repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{AccountService, UserRepository};
use super::{Error, LoginCredentials, Registration, User};

const DUPLICATE_EMAIL_MESSAGE: &str = "User already exists";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// [`AccountService`] implementation over any [`UserRepository`].
#[derive(Clone)]
pub struct AccountServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl AccountServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        let duplicate = match registration.email.as_deref() {
            Some(email) => self.users.find_by_email(email).await?.is_some(),
            None => false,
        };
        if duplicate {
            debug!("registration rejected: email already registered");
            return Err(Error::invalid_request(DUPLICATE_EMAIL_MESSAGE));
        }
        let new_user = registration.into_new_user()?;
        let user = self.users.create(new_user).await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let (Some(email), Some(password)) = (credentials.email(), credentials.password()) else {
            debug!("login rejected: email or password missing");
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };
        match self.users.find_by_email(email).await? {
            Some(user) if user.password_matches(password) => Ok(user),
            _ => Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::RecordId;
    use crate::domain::ports::{MockUserRepository, UserPersistenceError};
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ada() -> User {
        User {
            id: RecordId::new(1),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "s3cret".to_owned(),
            photo: None,
            date_of_birth: None,
        }
    }

    fn new_ada() -> Registration {
        Registration {
            name: Some("Ada".to_owned()),
            email: Some("ada@example.com".to_owned()),
            password: Some("s3cret".to_owned()),
            photo: None,
            date_of_birth: Some("1990-05-17".to_owned()),
        }
    }

    fn service(repo: MockUserRepository) -> AccountServiceImpl {
        AccountServiceImpl::new(Arc::new(repo))
    }

    #[rstest]
    #[tokio::test]
    async fn register_creates_unknown_email(ada: User) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("ada@example.com"))
            .times(1)
            .return_once(|_| Ok(None));
        let created = ada.clone();
        repo.expect_create()
            .withf(|new_user| new_user.date_of_birth == NaiveDate::from_ymd_opt(1990, 5, 17))
            .times(1)
            .return_once(move |_| Ok(created));

        let user = service(repo).register(new_ada()).await.expect("registered");
        assert_eq!(user, ada);
    }

    #[rstest]
    #[tokio::test]
    async fn register_rejects_duplicate_email(ada: User) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(move |_| Ok(Some(ada)));
        repo.expect_create().times(0);

        let err = service(repo)
            .register(new_ada())
            .await
            .expect_err("duplicate email");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "User already exists");
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_wins_over_an_unreadable_date(ada: User) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(move |_| Ok(Some(ada)));
        repo.expect_create().times(0);

        let err = service(repo)
            .register(Registration {
                date_of_birth: Some("not-a-date".to_owned()),
                ..new_ada()
            })
            .await
            .expect_err("duplicate email");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "User already exists");
    }

    #[rstest]
    #[tokio::test]
    async fn unreadable_date_for_a_new_email_is_internal() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().return_once(|_| Ok(None));
        repo.expect_create().times(0);

        let err = service(repo)
            .register(Registration {
                date_of_birth: Some("not-a-date".to_owned()),
                ..new_ada()
            })
            .await
            .expect_err("bad date");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.message().contains("not-a-date"));
    }

    #[rstest]
    #[tokio::test]
    async fn registration_without_email_skips_the_lookup_and_reaches_the_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().times(0);
        repo.expect_create()
            .withf(|new_user| new_user.email.is_none())
            .times(1)
            .return_once(|_| {
                Err(UserPersistenceError::query(
                    "null value in column \"email\" of relation \"users\" violates not-null constraint",
                ))
            });

        let err = service(repo)
            .register(Registration {
                email: None,
                ..new_ada()
            })
            .await
            .expect_err("store rejects the insert");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.message().contains("not-null constraint"));
    }

    #[rstest]
    #[case(LoginCredentials::from_parts(Some("ada@example.com".to_owned()), None))]
    #[case(LoginCredentials::from_parts(None, Some("s3cret".to_owned())))]
    #[case(LoginCredentials::default())]
    #[tokio::test]
    async fn absent_credentials_are_a_plain_mismatch(#[case] credentials: LoginCredentials) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().times(0);

        let err = service(repo)
            .login(&credentials)
            .await
            .expect_err("absent credentials");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[rstest]
    #[tokio::test]
    async fn register_surfaces_store_failures_verbatim() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .return_once(|_| Err(UserPersistenceError::connection("refused")));

        let err = service(repo)
            .register(new_ada())
            .await
            .expect_err("store failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(
            err.message(),
            "user repository connection failed: refused"
        );
    }

    #[rstest]
    #[case("ada@example.com", "s3cret", true)]
    #[case("ada@example.com", "wrong", false)]
    #[case("bob@example.com", "s3cret", false)]
    #[tokio::test]
    async fn login_requires_matching_email_and_password(
        ada: User,
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(move |lookup| {
            Ok((lookup == ada.email).then(|| ada.clone()))
        });

        let result = service(repo)
            .login(&LoginCredentials::new(email, password))
            .await;
        match (should_succeed, result) {
            (true, Ok(user)) => assert_eq!(user.name, "Ada"),
            (false, Err(err)) => {
                assert_eq!(err.code(), ErrorCode::Unauthorized);
                assert_eq!(err.message(), "Invalid credentials");
            }
            (expected, other) => panic!("expected success={expected}, got {other:?}"),
        }
    }
}
