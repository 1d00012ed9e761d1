//! Local sign-in. The signed-in user's id lives under the `current_user`
//! meta key; there are no passwords since the database belongs to one OS
//! account.

use rusqlite::Connection;
use thiserror::Error;

use crate::db::repository::{MetaRepo, ProfileRepo, UserRepo};
use crate::models::{Profile, User};

pub const CURRENT_USER_KEY: &str = "current_user";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid username '{0}': use 3-32 letters, digits, '_', '.' or '-'")]
    InvalidUsername(String),

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("no account named '{0}', run `fitpulse signup {0}` first")]
    UnknownUser(String),

    #[error("not signed in, run `fitpulse login <username>` first")]
    NotSignedIn,

    #[error("session storage failed: {0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for SessionError {
    fn from(err: anyhow::Error) -> Self {
        SessionError::Storage(err)
    }
}

pub fn validate_username(username: &str) -> Result<(), SessionError> {
    let len = username.chars().count();
    let allowed = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if !(3..=32).contains(&len) || !allowed {
        return Err(SessionError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Creates the account and its profile, then signs it in.
pub fn sign_up(
    conn: &Connection,
    username: &str,
    full_name: Option<&str>,
) -> Result<User, SessionError> {
    let username = username.trim();
    validate_username(username)?;
    if UserRepo::find_by_username(conn, username)?.is_some() {
        return Err(SessionError::UsernameTaken(username.to_string()));
    }

    let user = UserRepo::create(conn, username)?;
    let mut profile = Profile::empty(user.id);
    profile.full_name = full_name.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
    ProfileRepo::upsert(conn, &profile)?;

    MetaRepo::set(conn, CURRENT_USER_KEY, &user.id.to_string())?;
    log::info!("Created account '{}'", user.username);
    Ok(user)
}

pub fn sign_in(conn: &Connection, username: &str) -> Result<User, SessionError> {
    let username = username.trim();
    let user = UserRepo::find_by_username(conn, username)?
        .ok_or_else(|| SessionError::UnknownUser(username.to_string()))?;
    MetaRepo::set(conn, CURRENT_USER_KEY, &user.id.to_string())?;
    log::info!("Signed in as '{}'", user.username);
    Ok(user)
}

pub fn sign_out(conn: &Connection) -> Result<(), SessionError> {
    MetaRepo::delete(conn, CURRENT_USER_KEY)?;
    Ok(())
}

/// The signed-in user, if any. A session pointing at a deleted user is cleared.
pub fn current_user(conn: &Connection) -> Result<Option<User>, SessionError> {
    let Some(raw) = MetaRepo::get(conn, CURRENT_USER_KEY)? else {
        return Ok(None);
    };
    let user = match raw.parse::<i64>() {
        Ok(id) => UserRepo::get(conn, id)?,
        Err(_) => None,
    };
    if user.is_none() {
        log::warn!("Dropping stale session '{}'", raw);
        sign_out(conn)?;
    }
    Ok(user)
}

pub fn require_user(conn: &Connection) -> Result<User, SessionError> {
    current_user(conn)?.ok_or(SessionError::NotSignedIn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;

    #[test]
    fn username_rules() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("lift.more_2-day").is_ok());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("émile").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
        assert!(validate_username(&"x".repeat(32)).is_ok());
    }

    #[test]
    fn sign_up_signs_in_and_stores_name() {
        let conn = open_test_db();
        let user = sign_up(&conn, "  jordan ", Some("Jordan Lee")).unwrap();
        assert_eq!(user.username, "jordan");
        assert_eq!(current_user(&conn).unwrap(), Some(user.clone()));

        let profile = ProfileRepo::get(&conn, user.id).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Jordan Lee"));
    }

    #[test]
    fn duplicate_sign_up_fails() {
        let conn = open_test_db();
        sign_up(&conn, "jordan", None).unwrap();
        assert!(matches!(
            sign_up(&conn, "Jordan", None),
            Err(SessionError::UsernameTaken(_))
        ));
    }

    #[test]
    fn sign_in_and_out() {
        let conn = open_test_db();
        let first = sign_up(&conn, "first", None).unwrap();
        let second = sign_up(&conn, "second", None).unwrap();
        assert_eq!(require_user(&conn).unwrap(), second);

        assert_eq!(sign_in(&conn, "first").unwrap(), first);
        assert_eq!(require_user(&conn).unwrap(), first);

        sign_out(&conn).unwrap();
        assert!(current_user(&conn).unwrap().is_none());
        assert!(matches!(require_user(&conn), Err(SessionError::NotSignedIn)));
        assert!(matches!(
            sign_in(&conn, "nobody"),
            Err(SessionError::UnknownUser(_))
        ));
    }

    #[test]
    fn stale_session_is_dropped() {
        let conn = open_test_db();
        MetaRepo::set(&conn, CURRENT_USER_KEY, "999").unwrap();
        assert!(current_user(&conn).unwrap().is_none());
        assert_eq!(MetaRepo::get(&conn, CURRENT_USER_KEY).unwrap(), None);
    }
}
