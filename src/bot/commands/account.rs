//! Account Discord commands - register, login, and change-password.
//!
//! Passwords are collected through modals so they never appear in channel
//! history, and every reply is ephemeral. These commands are guild-only
//! because each guild has its own account store.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::ApplicationContext,
        core::account,
        errors::{Error, Result},
    };
    use poise::Modal;
    use sea_orm::DatabaseConnection;

    #[derive(Debug, Modal)]
    #[name = "Create an account"]
    struct RegisterModal {
        #[name = "Password"]
        #[placeholder = "3-12 characters"]
        #[min_length = 3]
        #[max_length = 12]
        password: String,
    }

    #[derive(Debug, Modal)]
    #[name = "Log in"]
    struct LoginModal {
        #[name = "Password"]
        #[min_length = 3]
        #[max_length = 12]
        password: String,
    }

    #[derive(Debug, Modal)]
    #[name = "Change your password"]
    struct ChangePasswordModal {
        #[name = "Current password"]
        #[min_length = 3]
        #[max_length = 12]
        old_password: String,
        #[name = "New password"]
        #[placeholder = "3-12 characters"]
        #[min_length = 3]
        #[max_length = 12]
        new_password: String,
    }

    /// Opens (lazily) the account store for the guild this interaction came from.
    async fn guild_store(ctx: ApplicationContext<'_>) -> Result<DatabaseConnection> {
        let guild_id = ctx.guild_id().ok_or(Error::GuildOnly)?;
        ctx.data().stores.get(guild_id.get()).await
    }

    async fn reply_ephemeral(ctx: ApplicationContext<'_>, content: impl Into<String>) -> Result<()> {
        ctx.send(
            poise::CreateReply::default()
                .content(content.into())
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Creates an account for the invoker, keyed by their Discord user id.
    #[poise::command(slash_command, guild_only)]
    pub async fn register(ctx: ApplicationContext<'_>) -> Result<()> {
        let Some(input) = RegisterModal::execute(ctx).await? else {
            return Ok(());
        };

        let db = guild_store(ctx).await?;
        let user_id = ctx.author().id.to_string();

        match account::register(&db, &user_id, &input.password).await {
            Ok(_) => {
                reply_ephemeral(ctx, "Account created! You can now /login with your password.")
                    .await
            }
            Err(err @ (Error::AccountAlreadyExists { .. } | Error::InvalidPassword { .. })) => {
                reply_ephemeral(ctx, err.to_string()).await
            }
            // Storage errors go through the framework error handler
            Err(other) => Err(other),
        }
    }

    /// Checks the supplied password against the invoker's account.
    #[poise::command(slash_command, guild_only)]
    pub async fn login(ctx: ApplicationContext<'_>) -> Result<()> {
        let Some(input) = LoginModal::execute(ctx).await? else {
            return Ok(());
        };

        let db = guild_store(ctx).await?;
        let user_id = ctx.author().id.to_string();

        match account::verify_login(&db, &user_id, &input.password).await {
            Ok(()) => reply_ephemeral(ctx, "Logged in successfully!").await,
            Err(err @ (Error::AccountNotFound { .. } | Error::IncorrectPassword)) => {
                reply_ephemeral(ctx, err.to_string()).await
            }
            Err(other) => Err(other),
        }
    }

    /// Replaces the invoker's password after verifying the current one.
    #[poise::command(slash_command, guild_only, rename = "change-password")]
    pub async fn change_password(ctx: ApplicationContext<'_>) -> Result<()> {
        let Some(input) = ChangePasswordModal::execute(ctx).await? else {
            return Ok(());
        };

        let db = guild_store(ctx).await?;
        let user_id = ctx.author().id.to_string();

        match account::change_password(&db, &user_id, &input.old_password, &input.new_password)
            .await
        {
            Ok(()) => reply_ephemeral(ctx, "Password changed!").await,
            Err(
                err @ (Error::AccountNotFound { .. }
                | Error::IncorrectPassword
                | Error::InvalidPassword { .. }),
            ) => reply_ephemeral(ctx, err.to_string()).await,
            Err(other) => Err(other),
        }
    }
}

// Re-export all commands
pub use inner::*;
