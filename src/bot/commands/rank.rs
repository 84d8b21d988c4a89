//! Rank lookup command, backed by the profile-page scrape in [`crate::core::rank`].

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::Context,
        core::rank,
        errors::{Error, Result},
    };
    use tracing::warn;

    /// Looks up a player's competitive rating from their public profile page.
    #[poise::command(slash_command)]
    pub async fn rank(
        ctx: Context<'_>,
        #[description = "Profile username to look up"] username: String,
    ) -> Result<()> {
        // The external fetch can outlast the 3-second interaction window
        ctx.defer().await?;

        match rank::fetch_rating(&ctx.data().http, &username).await {
            Ok(rating) => {
                ctx.say(format!("{username} is currently rated {rating}."))
                    .await?;
            }
            Err(Error::RatingNotFound { username }) => {
                ctx.say(format!("Couldn't find a rating for {username}."))
                    .await?;
            }
            Err(Error::Http(err)) => {
                warn!("Rank lookup for '{}' failed: {}", username, err);
                ctx.say("Rank lookup failed. Please try again later.").await?;
            }
            Err(other) => return Err(other),
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
