//! User profile state
//!
//! The profile is plain state owned by the application root and handed to
//! the views that need it. It is never stored in a global.

use serde::{Deserialize, Serialize};

/// Email notification preferences shown on the profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    OrderStatuses,
    PasswordChanges,
    SpecialOffers,
    Newsletter,
}

impl Notification {
    /// Returns all notification kinds in display order.
    pub fn all() -> &'static [Notification] {
        &[
            Notification::OrderStatuses,
            Notification::PasswordChanges,
            Notification::SpecialOffers,
            Notification::Newsletter,
        ]
    }

    /// Checkbox label
    pub fn label(&self) -> &'static str {
        match self {
            Notification::OrderStatuses => "Order statuses",
            Notification::PasswordChanges => "Password changes",
            Notification::SpecialOffers => "Special offers",
            Notification::Newsletter => "Newsletter",
        }
    }
}

/// Editable text fields on the profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
}

impl ProfileField {
    /// Returns all editable fields in display order.
    pub fn all() -> &'static [ProfileField] {
        &[
            ProfileField::FirstName,
            ProfileField::LastName,
            ProfileField::Email,
            ProfileField::PhoneNumber,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::PhoneNumber => "Phone Number",
        }
    }
}

/// Personal information and preferences of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// Reference to an avatar image, empty when unset
    pub profile_image: String,
    /// Derived from the names; see `update_initials`
    pub initials: String,
    pub order_status: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
    pub is_onboarding_complete: bool,
}

impl UserProfile {
    /// Builds a profile for a user who has finished onboarding
    pub fn onboarded(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let mut profile = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            is_onboarding_complete: true,
            ..Self::default()
        };
        profile.update_initials();
        profile
    }

    /// Recomputes `initials` from the current names
    pub fn update_initials(&mut self) {
        self.initials = initials(&self.first_name, &self.last_name);
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::PhoneNumber => &self.phone_number,
        }
    }

    /// Mutable access to a text field. Call `update_initials` after editing
    /// a name.
    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::PhoneNumber => &mut self.phone_number,
        }
    }

    /// Replaces a text field and keeps the initials in sync
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
        self.update_initials();
    }

    pub fn is_enabled(&self, notification: Notification) -> bool {
        match notification {
            Notification::OrderStatuses => self.order_status,
            Notification::PasswordChanges => self.password_changes,
            Notification::SpecialOffers => self.special_offers,
            Notification::Newsletter => self.newsletter,
        }
    }

    /// Flips one notification preference
    pub fn toggle(&mut self, notification: Notification) {
        let flag = match notification {
            Notification::OrderStatuses => &mut self.order_status,
            Notification::PasswordChanges => &mut self.password_changes,
            Notification::SpecialOffers => &mut self.special_offers,
            Notification::Newsletter => &mut self.newsletter,
        };
        *flag = !*flag;
    }

    /// Clears all profile data, as on log out
    pub fn log_out(&mut self) {
        *self = Self::default();
    }

    /// Name shown in the header, falling back to the email
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Input that receives keystrokes on the onboarding form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingField {
    #[default]
    FirstName,
    Email,
}

/// First name and email collected before the menu is shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub first_name: String,
    pub email: String,
    pub focus: OnboardingField,
}

impl OnboardingForm {
    /// The input under the cursor
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            OnboardingField::FirstName => &mut self.first_name,
            OnboardingField::Email => &mut self.email,
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            OnboardingField::FirstName => OnboardingField::Email,
            OnboardingField::Email => OnboardingField::FirstName,
        };
    }

    /// Both inputs hold something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Builds the onboarded profile, or `None` while the form is incomplete
    pub fn to_profile(&self) -> Option<UserProfile> {
        self.is_complete()
            .then(|| UserProfile::onboarded(self.first_name.trim(), "", self.email.trim()))
    }
}

/// First letter of each trimmed name, upper-cased
pub fn initials(first_name: &str, last_name: &str) -> String {
    [first_name, last_name]
        .iter()
        .filter_map(|name| name.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
