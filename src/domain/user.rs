/// A stored user record as owned by the user store.
///
/// `email` and `city` are optional on the record; everything else is always
/// present.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone: String,
    pub email: Option<String>,
    pub city: Option<String>,
}

/// Sanitized payload sent to the update operation.
///
/// All edited fields are carried as-is except `email`: a blank email is
/// omitted (`None`) so the store never receives an empty email string —
/// blank means "unset", not "empty".
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePatch {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone: String,
    pub email: Option<String>,
    pub city: String,
}

impl UserProfile {
    /// Creates a record with the mandatory fields set and the optional ones
    /// absent.
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            phone: phone.into(),
            email: None,
            city: None,
        }
    }

    /// Applies an update patch to this record.
    ///
    /// Present fields overwrite unconditionally, including with an empty
    /// string. A `None` email leaves the stored email untouched (the key
    /// was omitted from the patch, not blanked).
    pub fn apply(&mut self, patch: ProfilePatch) {
        self.first_name = patch.first_name;
        self.last_name = patch.last_name;
        self.username = patch.username;
        self.phone = patch.phone;
        self.city = Some(patch.city);
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
    }
}
