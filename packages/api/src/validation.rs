//! Form checks run before a request is built.
//!
//! Limits follow what the backend enforces, so most mistakes are caught
//! inline instead of round-tripping as a 422. Signup asks for 8-character
//! passwords, stricter than the backend's 6.

use crate::error::ValidationError;
use crate::models::{LoginRequest, OpportunityCreate, SignupRequest};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const TITLE_MIN: usize = 5;
pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MIN: usize = 20;
pub const APPLICATION_MESSAGE_MIN: usize = 10;

fn char_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// `local@domain.tld` with no whitespace.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    let valid = !email.chars().any(char::is_whitespace)
        && email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("email", "Please enter a valid email"))
    }
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    validate_email(&request.email)?;
    if request.password.is_empty() {
        return Err(ValidationError::new("password", "Password is required"));
    }
    Ok(())
}

pub fn validate_signup(request: &SignupRequest) -> Result<(), ValidationError> {
    if request.full_name.trim().is_empty() {
        return Err(ValidationError::new("full_name", "Name is required"));
    }
    let username = char_len(&request.username);
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&username) {
        return Err(ValidationError::new(
            "username",
            format!("Username must be {USERNAME_MIN}-{USERNAME_MAX} characters"),
        ));
    }
    validate_email(&request.email)?;
    if request.password.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::new(
            "password",
            format!("Password must be at least {PASSWORD_MIN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_opportunity(data: &OpportunityCreate) -> Result<(), ValidationError> {
    let title = char_len(&data.title);
    if !(TITLE_MIN..=TITLE_MAX).contains(&title) {
        return Err(ValidationError::new(
            "title",
            format!("Title must be {TITLE_MIN}-{TITLE_MAX} characters"),
        ));
    }
    if char_len(&data.description) < DESCRIPTION_MIN {
        return Err(ValidationError::new(
            "description",
            format!("Description must be at least {DESCRIPTION_MIN} characters"),
        ));
    }
    if data.bounty_amount.is_some_and(|amount| amount < 0) {
        return Err(ValidationError::new("bounty_amount", "Bounty cannot be negative"));
    }
    Ok(())
}

/// Parse an optional bounty field. Blank means no bounty.
pub fn parse_bounty(input: &str) -> Result<Option<i64>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<i64>() {
        Ok(amount) if amount >= 0 => Ok(Some(amount)),
        _ => Err(ValidationError::new(
            "bounty_amount",
            "Bounty must be a whole, non-negative amount",
        )),
    }
}

pub fn validate_application_message(message: &str) -> Result<(), ValidationError> {
    if char_len(message) < APPLICATION_MESSAGE_MIN {
        return Err(ValidationError::new(
            "message",
            format!("Message must be at least {APPLICATION_MESSAGE_MIN} characters"),
        ));
    }
    Ok(())
}
