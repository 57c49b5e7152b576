//! Shared fixtures for unit tests.

use crate::net::types::{Account, Identity, Member, StartupProfile};

pub fn account(username: &str) -> Account {
    Account {
        id: Some(1),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: String::new(),
        last_name: String::new(),
        date_joined: None,
    }
}

pub fn backer(username: &str) -> Identity {
    Identity::Backer { member: Member { account: account(username), ..Member::default() } }
}

pub fn startup_owner(username: &str, company: &str) -> Identity {
    Identity::StartupOwner {
        member: Member { account: account(username), ..Member::default() },
        startup: StartupProfile {
            id: Some(9),
            company_name: company.to_owned(),
            category: "tech".to_owned(),
            description: "Builds things".to_owned(),
            website: None,
            is_verified: true,
            total_raised: 0.0,
        },
    }
}
