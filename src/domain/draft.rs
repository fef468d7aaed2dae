use super::{ProfilePatch, UserProfile};

/// The six editable fields of a profile draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Username,
    Phone,
    Email,
    City,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Username,
        ProfileField::Phone,
        ProfileField::Email,
        ProfileField::City,
    ];

    /// The four fields that must be non-blank for a submit to go through.
    #[allow(dead_code)]
    pub const REQUIRED: [ProfileField; 4] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Username,
        ProfileField::Phone,
    ];
}

/// In-progress edited copy of a profile, independent of the source record
/// until a submit succeeds. `Default` is the all-empty draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub city: String,
}

impl ProfileDraft {
    /// Copies a record into a fresh draft. Optional record fields populate
    /// as empty strings, never as absent values.
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            phone: user.phone.clone(),
            email: user.email.clone().unwrap_or_default(),
            city: user.city.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Username => &self.username,
            ProfileField::Phone => &self.phone,
            ProfileField::Email => &self.email,
            ProfileField::City => &self.city,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Username => self.username = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Email => self.email = value,
            ProfileField::City => self.city = value,
        }
    }

    /// Builds the sanitized patch for this draft: a blank email is omitted
    /// rather than sent as an empty string.
    pub fn to_patch(&self) -> ProfilePatch {
        let email = if self.email.trim().is_empty() {
            None
        } else {
            Some(self.email.clone())
        };
        ProfilePatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            phone: self.phone.clone(),
            email,
            city: self.city.clone(),
        }
    }
}
