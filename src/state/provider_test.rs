use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

use super::*;
use crate::state::auth::AuthPhase;

fn admin() -> AdminIdentity {
    AdminIdentity {
        id: "a1".to_owned(),
        username: "ops".to_owned(),
        email: None,
        role: None,
    }
}

#[test]
fn new_provider_is_initializing() {
    let provider = AuthStateProvider::new();
    assert_eq!(provider.state().phase(), AuthPhase::Initializing);
    assert_eq!(provider.resolution(), Resolution::NotStarted);
}

#[tokio::test]
async fn resolve_publishes_identity() {
    let provider = AuthStateProvider::new();
    assert!(provider.resolve(|| async { Ok(Some(admin())) }).await);
    assert_eq!(provider.state(), AuthState::resolved(Some(admin())));
    assert_eq!(provider.resolution(), Resolution::Settled);
}

#[tokio::test]
async fn failure_resolves_to_absent() {
    let provider = AuthStateProvider::new();
    provider
        .resolve(|| async { Err(ResolutionFailure::Transport("offline".to_owned())) })
        .await;
    assert_eq!(provider.state(), AuthState::resolved(None));
}

#[tokio::test]
async fn resolve_runs_at_most_once() {
    let provider = AuthStateProvider::new();
    let calls = Rc::new(RefCell::new(0));

    for _ in 0..3 {
        let calls = Rc::clone(&calls);
        provider
            .resolve(move || async move {
                *calls.borrow_mut() += 1;
                Ok(None)
            })
            .await;
    }
    assert_eq!(*calls.borrow(), 1);
}

#[tokio::test]
async fn concurrent_resolve_only_checks_once() {
    let provider = AuthStateProvider::new();
    let (tx, rx) = oneshot::channel::<()>();
    let calls = Rc::new(RefCell::new(0));

    let c1 = Rc::clone(&calls);
    let first = provider.resolve(move || async move {
        *c1.borrow_mut() += 1;
        let _ = rx.await;
        Ok(Some(admin()))
    });
    let c2 = Rc::clone(&calls);
    let second = async {
        let ran = provider
            .resolve(move || async move {
                *c2.borrow_mut() += 1;
                Ok(None)
            })
            .await;
        let _ = tx.send(());
        ran
    };

    let (first_ran, second_ran) = futures::join!(first, second);
    assert!(first_ran);
    assert!(!second_ran);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(provider.state(), AuthState::resolved(Some(admin())));
}

#[tokio::test]
async fn explicit_login_during_pending_check_wins() {
    let provider = AuthStateProvider::new();
    let (tx, rx) = oneshot::channel::<()>();

    let check = provider.resolve(move || async move {
        let _ = rx.await;
        Ok(None)
    });
    let login = async {
        provider.set_identity(Some(admin()));
        let _ = tx.send(());
    };
    futures::join!(check, login);

    assert_eq!(provider.state(), AuthState::resolved(Some(admin())));
}

#[test]
fn set_identity_none_stays_resolved() {
    let provider = AuthStateProvider::new();
    provider.set_identity(Some(admin()));
    provider.set_identity(None);
    assert_eq!(provider.state().phase(), AuthPhase::Resolved);
    assert!(provider.state().identity().is_none());
}

#[tokio::test]
async fn subscribers_see_resolution() {
    let provider = AuthStateProvider::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let _sub = provider.reader().subscribe(move |s| log.borrow_mut().push(s.clone()));

    provider.resolve(|| async { Ok(Some(admin())) }).await;
    assert_eq!(*seen.borrow(), [AuthState::resolved(Some(admin()))]);
}
