//! Client-side validation for the registration and login forms. These checks
//! exist for early feedback only; the API revalidates everything.

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_fullname(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Full name is required.")
    } else {
        Ok(())
    }
}

/// Light-weight email shape check: one `@` with a dotted domain.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("Enter a valid email address.");
    };
    let domain_ok = domain.split_once('.').is_some_and(|(host, tld)| {
        !host.is_empty() && !tld.is_empty()
    });
    if local.is_empty() || domain.contains('@') || domain.contains(' ') || !domain_ok {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

/// Accepts a 10-digit mobile number starting with 6-9.
pub fn validate_phone(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    let first_ok = chars.next().is_some_and(|c| ('6'..='9').contains(&c));
    if trimmed.len() == 10 && first_ok && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Enter a valid 10-digit mobile number.")
    }
}

pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.len() < MIN_PASSWORD_LENGTH {
        Err("Password must be at least 6 characters.")
    } else {
        Ok(())
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullname_rejects_blank_input() {
        assert!(validate_fullname("Ada Lovelace").is_ok());
        assert!(validate_fullname("   ").is_err());
    }

    #[test]
    fn email_requires_a_dotted_domain() {
        assert!(validate_email("ada@acme.io").is_ok());
        assert!(validate_email(" ada@acme.co.in ").is_ok());
        assert!(validate_email("ada").is_err());
        assert!(validate_email("ada@acme").is_err());
        assert!(validate_email("@acme.io").is_err());
        assert!(validate_email("ada@acme.").is_err());
        assert!(validate_email("ada@ac me.io").is_err());
    }

    #[test]
    fn phone_matches_ten_digit_mobiles() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("6000000001").is_ok());
        assert!(validate_phone("5876543210").is_err());
        assert!(validate_phone("98765").is_err());
        assert!(validate_phone("98765432100").is_err());
        assert!(validate_phone("98765x3210").is_err());
    }

    #[test]
    fn password_enforces_minimum_length() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("five5").is_err());
    }

    #[test]
    fn confirmation_must_match() {
        assert!(validate_confirmation("secret1", "secret1").is_ok());
        assert!(validate_confirmation("secret1", "secret2").is_err());
    }
}
