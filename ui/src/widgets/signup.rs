//! Client-side notification signup. Nothing is sent anywhere; a valid
//! address just earns a local acknowledgement.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Acknowledged { email: String },
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    acknowledged: Vec<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, raw: &str) -> SignupOutcome {
        let email = raw.trim();
        if !looks_like_email(email) {
            return SignupOutcome::Invalid;
        }
        let email = email.to_string();
        if !self.acknowledged.contains(&email) {
            self.acknowledged.push(email.clone());
        }
        SignupOutcome::Acknowledged { email }
    }

    /// Addresses acknowledged this session.
    pub fn acknowledged(&self) -> &[String] {
        &self.acknowledged
    }
}

/// `local@domain.tld`, no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
