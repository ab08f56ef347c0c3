//! Property-based tests for the push task core.
//!
//! These tests use proptest to verify the resolver and refspec-assembly
//! invariants hold across randomly generated inputs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use capstan::task::credentials::{self, CredentialsHandle, PasswordCredentials};
use capstan::task::remote::{self, RemoteSpec};
use capstan::transport::{refspecs, PushRequest};

/// Strategy for plausible remote names (also exercises odd-but-legal ones).
fn remote_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._/-]{1,40}"
}

/// Strategy for optional credential fields, including empty strings.
fn credential_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9!#-Z]{1,20}".prop_map(Some),
    ]
}

fn request(push_tags: bool, push_all: bool, force: bool) -> PushRequest {
    PushRequest {
        remote: "origin".to_string(),
        credentials: CredentialsHandle::Interactive,
        push_tags,
        push_all,
        force,
    }
}

proptest! {
    /// A literal remote always resolves to exactly itself.
    #[test]
    fn literal_remote_resolves_verbatim(name in remote_name()) {
        let spec = RemoteSpec::literal(name.clone());
        prop_assert_eq!(remote::resolve(Some(&spec)).unwrap(), name);
    }

    /// A deferred remote is evaluated exactly once per resolution and
    /// yields its string-coerced result.
    #[test]
    fn deferred_remote_evaluates_once(name in remote_name()) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let value = name.clone();
        let spec = RemoteSpec::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            value.clone()
        });

        prop_assert_eq!(remote::resolve(Some(&spec)).unwrap(), name);
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    /// Explicit credentials are selected exactly when both fields are
    /// present and non-empty; everything else is interactive.
    #[test]
    fn credential_selection_invariant(
        username in credential_field(),
        password in credential_field(),
    ) {
        let stored = PasswordCredentials {
            username: username.clone(),
            password: password.clone(),
        };
        let handle = credentials::resolve(Some(&stored));

        let both_set = username.as_deref().is_some_and(|u| !u.is_empty())
            && password.as_deref().is_some_and(|p| !p.is_empty());

        match handle {
            CredentialsHandle::Explicit { username: u, password: p } => {
                prop_assert!(both_set);
                prop_assert_eq!(Some(u), username);
                prop_assert_eq!(Some(p), password);
            }
            CredentialsHandle::Interactive => prop_assert!(!both_set),
        }
    }

    /// Force prefixes every refspec with '+'; without force none carry it.
    #[test]
    fn force_marks_every_refspec(
        push_tags in any::<bool>(),
        push_all in any::<bool>(),
        force in any::<bool>(),
        branch in "[a-zA-Z0-9._-]{1,30}",
    ) {
        let specs = refspecs(&request(push_tags, push_all, force), &branch);
        for spec in &specs {
            prop_assert_eq!(spec.starts_with('+'), force, "spec: {}", spec);
        }
    }

    /// Scope composition: tags add one spec on top of the branch scope,
    /// and push_all swaps the single branch for the heads wildcard.
    #[test]
    fn scope_composition(
        push_tags in any::<bool>(),
        push_all in any::<bool>(),
        branch in "[a-zA-Z0-9._-]{1,30}",
    ) {
        let specs = refspecs(&request(push_tags, push_all, false), &branch);

        prop_assert_eq!(specs.len(), 1 + usize::from(push_tags));
        prop_assert_eq!(
            specs.iter().any(|s| s.contains("refs/tags/*")),
            push_tags
        );
        if push_all {
            prop_assert!(specs[0].contains("refs/heads/*"));
        } else {
            let expected = format!("refs/heads/{}", branch);
            prop_assert!(specs[0].contains(&expected));
        }
    }
}
