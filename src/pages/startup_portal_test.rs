use super::*;
use crate::test_support::{backer, startup_owner};

#[test]
fn greeting_names_the_company() {
    assert_eq!(portal_greeting(&startup_owner("grace", "Compilers Inc")), "Welcome back, Compilers Inc.");
}

#[test]
fn greeting_without_company_is_generic() {
    assert_eq!(portal_greeting(&backer("ada")), "Welcome back.");
    assert_eq!(portal_greeting(&startup_owner("grace", "")), "Welcome back.");
}
