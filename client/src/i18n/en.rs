//! English translation table.

use super::{Common, Invite, Login, Translations};

pub const EN: Translations = Translations {
    common: Common {
        email: "Email",
        password: "Password",
        sign_in: "Sign in",
    },
    login: Login {
        title: "Sign in to Homiq",
        subtitle: "Manage buildings, units, and readings",
        error: "Login failed",
    },
    invite: Invite {
        welcome: "Welcome to Homiq",
        set_password_message: "Set a password to finish activating your account",
        new_password: "New password",
        confirm_password: "Confirm password",
        activate_account: "Activate account",
        activating: "Activating…",
        password_match_error: "Passwords do not match",
        password_length_error: "Password must be at least 8 characters",
        failed_to_accept: "Failed to accept the invite",
        invalid_invite: "This invite link is invalid or has expired",
    },
};
