//! Account business logic - registration, login verification, and password
//! change against a guild's account store.
//!
//! Passwords are hashed with argon2 using a fresh random salt per hash; the
//! stored encoded string carries the salt, so verification only needs the
//! stored value and the candidate password.

use crate::{
    entities::{Account, account},
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

/// Minimum password length accepted by the registration modal.
pub const MIN_PASSWORD_LEN: usize = 3;
/// Maximum password length accepted by the registration modal.
pub const MAX_PASSWORD_LEN: usize = 12;

fn validate_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        Ok(())
    } else {
        Err(Error::InvalidPassword {
            reason: format!("must be {MIN_PASSWORD_LEN}-{MAX_PASSWORD_LEN} characters"),
        })
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt: [u8; 16] = rand::random();
    argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())
        .map_err(Into::into)
}

fn verify_password(encoded: &str, password: &str) -> Result<bool> {
    argon2::verify_encoded(encoded, password.as_bytes()).map_err(Into::into)
}

/// Creates an account row for `user_id` with a salted hash of `password`.
///
/// Fails with [`Error::AccountAlreadyExists`] if the user already registered
/// in this guild, and [`Error::InvalidPassword`] if the password is outside
/// the accepted length range.
pub async fn register(
    db: &DatabaseConnection,
    user_id: &str,
    password: &str,
) -> Result<account::Model> {
    validate_password(password)?;

    if Account::find_by_id(user_id).one(db).await?.is_some() {
        return Err(Error::AccountAlreadyExists {
            user_id: user_id.to_string(),
        });
    }

    let row = account::ActiveModel {
        user_id: Set(user_id.to_string()),
        hashed_password: Set(hash_password(password)?),
    };
    Ok(row.insert(db).await?)
}

/// Checks `password` against the stored hash for `user_id`.
///
/// Fails with [`Error::AccountNotFound`] when no row exists and
/// [`Error::IncorrectPassword`] on a mismatch.
pub async fn verify_login(db: &DatabaseConnection, user_id: &str, password: &str) -> Result<()> {
    let row = Account::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            user_id: user_id.to_string(),
        })?;

    if verify_password(&row.hashed_password, password)? {
        Ok(())
    } else {
        Err(Error::IncorrectPassword)
    }
}

/// Replaces the stored hash for `user_id` after verifying `old_password`.
///
/// The old password must match the stored hash before anything is written;
/// the new password goes through the same validation as registration.
pub async fn change_password(
    db: &DatabaseConnection,
    user_id: &str,
    old_password: &str,
    new_password: &str,
) -> Result<()> {
    validate_password(new_password)?;

    let row = Account::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            user_id: user_id.to_string(),
        })?;

    if !verify_password(&row.hashed_password, old_password)? {
        return Err(Error::IncorrectPassword);
    }

    let mut active = row.into_active_model();
    active.hashed_password = Set(hash_password(new_password)?);
    active.update(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_account, setup_test_db};

    #[tokio::test]
    async fn test_register_rejects_out_of_range_passwords() -> Result<()> {
        let db = setup_test_db().await?;

        let result = register(&db, "100", "ab").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPassword { reason: _ }
        ));

        let result = register(&db, "100", "thirteen chars").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPassword { reason: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_twice_reports_existing_account() -> Result<()> {
        let db = setup_test_db().await?;

        register(&db, "100", "hunter2").await?;
        let result = register(&db, "100", "hunter2").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AccountAlreadyExists { user_id } if user_id == "100"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_after_register() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_account(&db, "100", "hunter2").await?;
        verify_login(&db, "100", "hunter2").await?;

        let result = verify_login(&db, "100", "hunter3").await;
        assert!(matches!(result.unwrap_err(), Error::IncorrectPassword));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_without_account() -> Result<()> {
        let db = setup_test_db().await?;

        let result = verify_login(&db, "100", "hunter2").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AccountNotFound { user_id } if user_id == "100"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_change_password_requires_matching_old_password() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_account(&db, "100", "hunter2").await?;
        let result = change_password(&db, "100", "wrong", "hunter3").await;
        assert!(matches!(result.unwrap_err(), Error::IncorrectPassword));

        // The stored hash is untouched after the failed attempt
        verify_login(&db, "100", "hunter2").await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_change_password_updates_stored_hash() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_account(&db, "100", "hunter2").await?;
        change_password(&db, "100", "hunter2", "hunter3").await?;

        verify_login(&db, "100", "hunter3").await?;
        let result = verify_login(&db, "100", "hunter2").await;
        assert!(matches!(result.unwrap_err(), Error::IncorrectPassword));

        Ok(())
    }

    #[tokio::test]
    async fn test_change_password_without_account() -> Result<()> {
        let db = setup_test_db().await?;

        let result = change_password(&db, "100", "hunter2", "hunter3").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AccountNotFound { user_id } if user_id == "100"
        ));

        Ok(())
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        // Fresh salt per hash, so encodings differ but both verify
        assert_ne!(first, second);
        assert!(verify_password(&first, "hunter2").unwrap());
        assert!(verify_password(&second, "hunter2").unwrap());
    }
}
