use crate::domain::{AccountProfile, Password, ProfileId, UserId, VasId};

pub type FormParams = Vec<(String, String)>;

pub fn push(params: &mut FormParams, key: &str, value: &str) {
    params.push((key.to_owned(), value.to_owned()));
}

pub fn push_credentials(params: &mut FormParams, profile: &AccountProfile) {
    push(params, UserId::FIELD, profile.username().as_str());
    push(params, Password::FIELD, profile.password().as_str());
}

/// `USERID`, `PASSWORD`, `VASID` and, when asked, `PROFILEID`.
pub fn push_account(params: &mut FormParams, profile: &AccountProfile, with_profile_id: bool) {
    push_credentials(params, profile);
    push(params, VasId::FIELD, profile.vasid().as_str());
    if with_profile_id {
        push(params, ProfileId::FIELD, profile.profile_id().as_str());
    }
}

#[cfg(test)]
pub(crate) fn test_profile() -> AccountProfile {
    use crate::domain::ShortCode;

    AccountProfile::new(
        UserId::new("acme").unwrap(),
        Password::new("secret").unwrap(),
        ProfileId::new("42").unwrap(),
        VasId::new("12345").unwrap(),
        ShortCode::new("27126").unwrap(),
    )
}
