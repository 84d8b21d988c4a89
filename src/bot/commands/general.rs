//! General Discord commands - hello, about, time, help, and create-scrim.
//! These are stateless responders with no database access.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, core::timestamp, errors::Result};
    use poise::serenity_prelude as serenity;

    const ABOUT_BLURB: &str = "Xenon Esports is an org that started to create a community \
        that shows love and respect to each other. Check out our website for more info here: \
        https://xenonesportsgg.com";

    /// Greets the user and points them at /about.
    #[poise::command(slash_command)]
    pub async fn hello(ctx: Context<'_>) -> Result<()> {
        ctx.say("Hi, Welcome to Xenon Esports! Use the /about command to learn more about us.")
            .await?;
        Ok(())
    }

    /// DMs the invoker an org blurb, then confirms in-channel.
    #[poise::command(slash_command)]
    pub async fn about(ctx: Context<'_>) -> Result<()> {
        ctx.author()
            .direct_message(
                ctx.serenity_context(),
                serenity::CreateMessage::new().content(ABOUT_BLURB),
            )
            .await?;
        ctx.say("I have sent you a DM with information about Xenon Esports.")
            .await?;
        Ok(())
    }

    /// Replies with the current time as a Discord-native timestamp, in each viewer's local timezone.
    #[poise::command(slash_command)]
    pub async fn time(ctx: Context<'_>) -> Result<()> {
        let now = chrono::Utc::now();
        ctx.say(format!(
            "The current time is {}",
            timestamp::discord_timestamp(now)
        ))
        .await?;
        Ok(())
    }

    /// Displays an embed listing every available command.
    #[poise::command(slash_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let embed = serenity::CreateEmbed::new()
            .title("Xenon Esports Bot Commands")
            .description("Here are the available commands:")
            .field("/hello", "Replies with a greeting message.", false)
            .field(
                "/about",
                "Sends a DM with information about Xenon Esports.",
                false,
            )
            .field("/time", "Replies with the current time.", false)
            .field(
                "/create-scrim",
                "Schedule a scrim by providing the time.",
                false,
            )
            .field("/register", "Create an account with a password.", false)
            .field("/login", "Check your password against your account.", false)
            .field("/change-password", "Replace your account password.", false)
            .field("/rank", "Look up a player's competitive rating.", false)
            .field("/help", "Displays this help message.", false)
            .footer(serenity::CreateEmbedFooter::new(
                "Use the commands by typing / followed by the command name.",
            ));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Echoes the supplied scrim time back. Nothing is persisted.
    #[poise::command(slash_command, rename = "create-scrim")]
    pub async fn create_scrim(
        ctx: Context<'_>,
        #[description = "When is the scrim?"] when: String,
    ) -> Result<()> {
        ctx.say(format!("Scrim scheduled for {when}")).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
