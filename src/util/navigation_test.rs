#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn logout_path_matches_the_server_route() {
    assert_eq!(LOGOUT_PATH, "/logout");
}

#[test]
fn redirect_is_a_noop_outside_the_browser() {
    redirect(LOGOUT_PATH);
    redirect("/dashboard");
}
