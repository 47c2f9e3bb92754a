//! User account data model.
//!
//! Accounts are identified by a store-assigned [`RecordId`] and looked up by
//! email, which the store keeps unique. Passwords are held and compared as
//! submitted plain text.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::RecordId;
use super::missing_column::{MissingColumn, required};

/// A persisted user account.
///
/// `User` deliberately does not implement `Serialize`: responses are built
/// from explicit projections so the password never leaves the process.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl User {
    /// Exact, case-sensitive comparison against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("photo", &self.photo)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

/// Registration fields as submitted, before the date of birth is read.
///
/// The account service checks for a duplicate email before converting this
/// into a [`NewUser`], so a known email wins over an unreadable date.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
    pub date_of_birth: Option<String>,
}

impl Registration {
    /// Read the submitted date of birth.
    ///
    /// # Errors
    /// Returns [`DateOfBirthError`] when the date cannot be read.
    pub fn into_new_user(self) -> Result<NewUser, DateOfBirthError> {
        let date_of_birth = self
            .date_of_birth
            .as_deref()
            .map(parse_date_of_birth)
            .transpose()?;
        Ok(NewUser {
            name: self.name,
            email: self.email,
            password: self.password,
            photo: self.photo,
            date_of_birth,
        })
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("photo", &self.photo)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

/// Account fields handed to the store.
///
/// `name`, `email` and `password` are required columns; unset values are
/// passed through so the insert reports the violation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl NewUser {
    /// Attach the identifier assigned by the store.
    ///
    /// # Errors
    /// Returns the first required column left unset, in table order.
    pub fn into_user(self, id: RecordId) -> Result<User, MissingColumn> {
        Ok(User {
            id,
            name: required(self.name, "users", "name")?,
            email: required(self.email, "users", "email")?,
            password: required(self.password, "users", "password")?,
            photo: self.photo,
            date_of_birth: self.date_of_birth,
        })
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("photo", &self.photo)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

/// Email and password submitted to the login endpoint.
///
/// Either may be absent; an absent value never matches an account.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Option<String>,
    password: Option<String>,
}

impl LoginCredentials {
    /// Bundle submitted credentials. No normalisation is applied.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_parts(Some(email.into()), Some(password.into()))
    }

    /// Bundle credentials where either field may be missing.
    #[must_use]
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Self {
        Self { email, password }
    }

    /// Submitted email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Submitted password.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raised when a submitted date of birth cannot be read as a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dateOfBirth `{raw}`: not a recognisable date")]
pub struct DateOfBirthError {
    raw: String,
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Convert a textual date of birth into a calendar date.
///
/// Accepts the common forms a browser `Date` understands:
/// - `YYYY-MM-DD`, `MM/DD/YYYY` and `YYYY/MM/DD`;
/// - month names, as in `May 17, 1990` or `17 May 1990`;
/// - RFC 3339 and RFC 2822 timestamps, keeping the date in the timestamp's
///   own offset;
/// - `YYYY-MM-DDTHH:MM[:SS]` without an offset.
///
/// # Examples
/// ```
/// use backend::domain::parse_date_of_birth;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(1990, 5, 17);
/// assert_eq!(parse_date_of_birth("1990-05-17").ok(), expected);
/// assert_eq!(parse_date_of_birth("05/17/1990").ok(), expected);
/// assert_eq!(parse_date_of_birth("1990-05-17T00:00:00Z").ok(), expected);
/// assert!(parse_date_of_birth("yesterday").is_err());
/// ```
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, DateOfBirthError> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
                .map(|ts| ts.date_naive())
                .ok()
        })
        .or_else(|| {
            LOCAL_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|ts| ts.date())
        })
        .ok_or_else(|| DateOfBirthError {
            raw: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn sample_user() -> User {
        User {
            id: RecordId::new(1),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "s3cret".to_owned(),
            photo: None,
            date_of_birth: None,
        }
    }

    #[rstest]
    #[case("s3cret", true)]
    #[case("S3cret", false)]
    #[case("s3cret ", false)]
    #[case("", false)]
    fn password_comparison_is_exact(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(sample_user().password_matches(candidate), expected);
    }

    #[rstest]
    fn debug_output_redacts_passwords() {
        let rendered = format!("{:?}", sample_user());
        assert!(!rendered.contains("s3cret"));

        let creds = LoginCredentials::new("ada@example.com", "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[rstest]
    fn registration_reads_the_date_only_on_conversion() {
        let registration = Registration {
            email: Some("ada@example.com".to_owned()),
            date_of_birth: Some("not-a-date".to_owned()),
            ..Registration::default()
        };
        assert!(registration.clone().into_new_user().is_err());

        let new_user = Registration {
            date_of_birth: None,
            ..registration
        }
        .into_new_user()
        .expect("no date to read");
        assert_eq!(new_user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(new_user.date_of_birth, None);
    }

    #[rstest]
    fn new_users_without_a_password_name_the_column() {
        let err = NewUser {
            name: Some("Ada".to_owned()),
            email: Some("ada@example.com".to_owned()),
            ..NewUser::default()
        }
        .into_user(RecordId::new(1))
        .expect_err("password missing");
        assert_eq!(err.column(), "password");
    }

    #[rstest]
    #[case("2001-02-03", 2001, 2, 3)]
    #[case(" 2001-02-03 ", 2001, 2, 3)]
    #[case("2001-02-03T23:30:00+02:00", 2001, 2, 3)]
    #[case("02/03/2001", 2001, 2, 3)]
    #[case("2001/02/03", 2001, 2, 3)]
    #[case("February 3, 2001", 2001, 2, 3)]
    #[case("Feb 3 2001", 2001, 2, 3)]
    #[case("3 February 2001", 2001, 2, 3)]
    #[case("Sat, 03 Feb 2001 09:00:00 +0000", 2001, 2, 3)]
    #[case("2001-02-03T09:15", 2001, 2, 3)]
    fn date_of_birth_accepts_dates_and_timestamps(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let parsed = parse_date_of_birth(raw).expect("valid date of birth");
        assert_eq!(Some(parsed), NaiveDate::from_ymd_opt(year, month, day));
    }

    #[rstest]
    #[case("")]
    #[case("13/02/2001")]
    #[case("2001-13-01")]
    #[case("next tuesday")]
    fn date_of_birth_rejects_unreadable_input(#[case] raw: &str) {
        let error = parse_date_of_birth(raw).expect_err("invalid date of birth");
        assert!(error.to_string().contains("invalid dateOfBirth"));
    }
}
