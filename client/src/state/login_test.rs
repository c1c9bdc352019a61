use super::*;
use std::cell::{Cell, RefCell};

use console_model::{ApiErrorBody, ErrorKind};
use futures::executor::block_on;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "correct-horse";

#[derive(Default)]
struct FakeAuth {
    sign_in_calls: Cell<usize>,
}

impl AuthClient for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<()> {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Ok(())
        } else {
            Err(ApiErrorBody::new(ErrorKind::Unauthorized, "Invalid login credentials"))
        }
    }

    async fn sign_out(&self) -> ApiResult<()> {
        Ok(())
    }
}

fn form(email: &str, password: &str) -> RefCell<LoginForm> {
    RefCell::new(LoginForm { email: email.into(), password: password.into(), ..LoginForm::default() })
}

#[test]
fn validate_login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input("  admin@example.com ", "pw"),
        Ok(("admin@example.com".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("a@b.c", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn wrong_password_shows_message_and_keeps_fields() {
    let auth = FakeAuth::default();
    let form = form(ADMIN_EMAIL, "wrongpass");
    let navigations = Cell::new(0);

    block_on(submit_login(&auth, &form, || navigations.set(navigations.get() + 1)));

    let state = form.borrow();
    assert_eq!(state.error.as_deref(), Some("Invalid login credentials"));
    assert_eq!(state.email, ADMIN_EMAIL);
    assert_eq!(state.password, "wrongpass");
    assert!(!state.busy);
    assert_eq!(navigations.get(), 0);
}

#[test]
fn success_navigates_exactly_once() {
    let auth = FakeAuth::default();
    let form = form(ADMIN_EMAIL, ADMIN_PASSWORD);
    let navigations = Cell::new(0);

    block_on(submit_login(&auth, &form, || navigations.set(navigations.get() + 1)));
    // A second submit after success is ignored while navigation is pending.
    block_on(submit_login(&auth, &form, || navigations.set(navigations.get() + 1)));

    assert_eq!(navigations.get(), 1);
    assert_eq!(auth.sign_in_calls.get(), 1);
    assert_eq!(form.borrow().notice.as_deref(), Some(LOGIN_SUCCESS_NOTICE));
}

#[test]
fn blank_fields_never_reach_auth() {
    let auth = FakeAuth::default();
    let form = form("", "");

    block_on(submit_login(&auth, &form, || panic!("must not navigate")));

    assert_eq!(auth.sign_in_calls.get(), 0);
    assert_eq!(form.borrow().error.as_deref(), Some(MISSING_CREDENTIALS));
}

#[test]
fn begin_submit_ignored_while_busy() {
    let mut state = LoginForm { email: ADMIN_EMAIL.into(), password: "x".into(), ..LoginForm::default() };
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
}

#[test]
fn retry_after_failure_clears_previous_error() {
    let mut state = LoginForm { email: ADMIN_EMAIL.into(), password: "x".into(), ..LoginForm::default() };
    state.begin_submit();
    state.finish_submit(Err(ApiErrorBody::new(ErrorKind::Unauthorized, "Invalid login credentials")));
    assert!(state.begin_submit().is_some());
    assert_eq!(state.error, None);
}
