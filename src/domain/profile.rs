use serde::Deserialize;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Password, ProfileId, ShortCode, UserId, VasId};

/// Environment variables read by [`AccountProfile::from_env`].
pub const ENV_USERNAME: &str = "WIRE2AIR_USERNAME";
pub const ENV_PASSWORD: &str = "WIRE2AIR_PASSWORD";
pub const ENV_PROFILE_ID: &str = "WIRE2AIR_PROFILE_ID";
pub const ENV_VASID: &str = "WIRE2AIR_VASID";
pub const ENV_SHORT_CODE: &str = "WIRE2AIR_SHORT_CODE";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account credentials and routing identifiers shared by every gateway call.
///
/// Built once and never mutated; the client only ever reads it.
pub struct AccountProfile {
    username: UserId,
    password: Password,
    profile_id: ProfileId,
    vasid: VasId,
    short_code: ShortCode,
}

/// Profile ids, vasids and short codes show up as JSON numbers as often as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ConfigValue {
    Int(u64),
    String(String),
}

impl ConfigValue {
    fn into_string(self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::String(value) => value,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileConfig {
    username: String,
    password: String,
    profile_id: ConfigValue,
    vasid: ConfigValue,
    short_code: ConfigValue,
}

impl AccountProfile {
    pub fn new(
        username: UserId,
        password: Password,
        profile_id: ProfileId,
        vasid: VasId,
        short_code: ShortCode,
    ) -> Self {
        Self {
            username,
            password,
            profile_id,
            vasid,
            short_code,
        }
    }

    /// Parse a profile from a JSON object with exactly the keys `username`,
    /// `password`, `profile_id`, `vasid` and `short_code`.
    ///
    /// Unknown or missing keys are rejected, as is any empty value.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let config: ProfileConfig =
            serde_json::from_str(json).map_err(|err| ValidationError::InvalidConfig {
                message: err.to_string(),
            })?;

        Ok(Self {
            username: UserId::new(config.username)?,
            password: Password::new(config.password)?,
            profile_id: ProfileId::new(config.profile_id.into_string())?,
            vasid: VasId::new(config.vasid.into_string())?,
            short_code: ShortCode::new(config.short_code.into_string())?,
        })
    }

    /// Read the profile from the `WIRE2AIR_*` environment variables.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| ValidationError::InvalidConfig {
                message: format!("{key} is not set"),
            })
        };

        Ok(Self {
            username: UserId::new(require(ENV_USERNAME)?)?,
            password: Password::new(require(ENV_PASSWORD)?)?,
            profile_id: ProfileId::new(require(ENV_PROFILE_ID)?)?,
            vasid: VasId::new(require(ENV_VASID)?)?,
            short_code: ShortCode::new(require(ENV_SHORT_CODE)?)?,
        })
    }

    pub fn username(&self) -> &UserId {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn profile_id(&self) -> &ProfileId {
        &self.profile_id
    }

    pub fn vasid(&self) -> &VasId {
        &self.vasid
    }

    /// Default originating short code.
    pub fn short_code(&self) -> &ShortCode {
        &self.short_code
    }
}
