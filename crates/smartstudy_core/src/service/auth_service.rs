//! Registration, login and profile updates.
//!
//! # Responsibility
//! - Validate credentials and keep usernames unique.
//! - Save onboarding/settings profiles and seed courses for the stream.
//!
//! # Invariants
//! - A failed registration leaves the users table untouched.
//! - New credentials are stored hashed; legacy plaintext is upgraded on
//!   the first successful login.

use crate::model::user::{StudyProfile, UserRecord};
use crate::service::course_service::{CourseError, CourseService};
use crate::service::password::{hash_password, is_hashed, verify_password};
use crate::store::{RecordStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum AuthError {
    EmptyUsername,
    EmptyPassword,
    UsernameTaken(String),
    InvalidCredentials,
    UserNotFound(String),
    /// Onboarding requires class, board, stream and goal.
    IncompleteProfile,
    PasswordHash(String),
    Course(CourseError),
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username is required"),
            Self::EmptyPassword => write!(f, "password is required"),
            Self::UsernameTaken(username) => write!(f, "username `{username}` already exists"),
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::UserNotFound(username) => write!(f, "user not found: {username}"),
            Self::IncompleteProfile => write!(f, "class, board, stream and goal are required"),
            Self::PasswordHash(message) => write!(f, "cannot hash password: {message}"),
            Self::Course(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Course(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CourseError> for AuthError {
    fn from(value: CourseError) -> Self {
        match value {
            CourseError::Store(err) => Self::Store(err),
            other => Self::Course(other),
        }
    }
}

pub struct AuthService<'store> {
    store: &'store RecordStore,
}

impl<'store> AuthService<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }

    pub fn user_exists(&self, username: &str) -> Result<bool, AuthError> {
        Ok(self.find_user(username)?.is_some())
    }

    pub fn find_user(&self, username: &str) -> Result<Option<UserRecord>, AuthError> {
        Ok(self
            .store
            .load::<UserRecord>()?
            .into_iter()
            .find(|user| user.username == username))
    }

    /// Creates an account that still needs onboarding.
    ///
    /// The username is trimmed; the password is taken verbatim.
    pub fn register(&self, username: &str, password: &str) -> Result<UserRecord, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if self.user_exists(username)? {
            warn!("event=register module=auth status=rejected reason=username_taken");
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let hashed = hash_password(password).map_err(AuthError::PasswordHash)?;
        let user = UserRecord::registered(username, hashed);
        self.store.append(&user)?;
        info!("event=register module=auth status=ok");
        Ok(user)
    }

    /// Returns the matching account or `InvalidCredentials`.
    pub fn login(&self, username: &str, password: &str) -> Result<UserRecord, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let mut users = self.store.load::<UserRecord>()?;
        let Some(user) = users
            .iter_mut()
            .find(|user| user.username == username && verify_password(password, &user.password))
        else {
            warn!("event=login module=auth status=rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if !is_hashed(&user.password) {
            match hash_password(password) {
                Ok(hashed) => {
                    user.password = hashed;
                    let upgraded = user.clone();
                    self.store.save(&users)?;
                    info!("event=login module=auth status=ok credential_upgrade=true");
                    return Ok(upgraded);
                }
                Err(err) => {
                    warn!("event=credential_upgrade module=auth status=error error={err}");
                }
            }
        }

        info!("event=login module=auth status=ok");
        Ok(user.clone())
    }

    /// Saves the first-run profile, clears the onboarding flag and seeds
    /// courses for the chosen stream.
    pub fn complete_onboarding(
        &self,
        username: &str,
        profile: &StudyProfile,
    ) -> Result<UserRecord, AuthError> {
        if !profile.is_complete() {
            return Err(AuthError::IncompleteProfile);
        }
        let user = self.write_profile(username, profile, true)?;
        CourseService::new(self.store).ensure_courses(
            username,
            &profile.class_name,
            &profile.stream,
        )?;
        Ok(user)
    }

    /// Settings save: blank fields are allowed and stored as-is.
    pub fn update_profile(
        &self,
        username: &str,
        profile: &StudyProfile,
    ) -> Result<UserRecord, AuthError> {
        let user = self.write_profile(username, profile, false)?;
        CourseService::new(self.store).ensure_courses(
            username,
            &profile.class_name,
            &profile.stream,
        )?;
        Ok(user)
    }

    fn write_profile(
        &self,
        username: &str,
        profile: &StudyProfile,
        finish_onboarding: bool,
    ) -> Result<UserRecord, AuthError> {
        let mut users = self.store.load::<UserRecord>()?;
        let mut updated = None;
        for user in users.iter_mut().filter(|user| user.username == username) {
            user.apply_profile(profile);
            if finish_onboarding {
                user.needs_onboarding = false;
            }
            updated = Some(user.clone());
        }
        let updated = updated.ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;
        self.store.save(&users)?;
        info!("event=save_profile module=auth status=ok onboarding={finish_onboarding}");
        Ok(updated)
    }
}
