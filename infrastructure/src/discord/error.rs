use domain::ports::discord::DiscordError;
use ::serenity::http::HttpError;
use tracing::debug;

pub const UNKNOWN_MESSAGE: isize = 10008;
const UNKNOWN_INTERACTION: isize = 10062;
const MISSING_PERMISSIONS: isize = 50013;

pub fn discord_json_error_code(error: &::serenity::Error) -> Option<isize> {
    match error {
        ::serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.error.code)
        }
        _ => None,
    }
}

pub fn serenity_to_domain_error(error: ::serenity::Error) -> DiscordError {
    match discord_json_error_code(&error) {
        Some(UNKNOWN_MESSAGE) => DiscordError::UnknownMessage,
        Some(UNKNOWN_INTERACTION) => DiscordError::UnknownInteraction,
        Some(MISSING_PERMISSIONS) => DiscordError::MissingPermissions,
        code => {
            debug!(code, error = %error, "Unmapped Discord error");
            DiscordError::Unavailable(Box::new(error))
        }
    }
}
