//! Runtime permission planning for a stream session.

use belvedere_core::MediaIntent;
use belvedere_interface::{PermissionChecker, PermissionStore};
use derive_getters::Getters;
use std::cell::RefCell;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Permission needed to read device media.
pub const READ_EXTERNAL_STORAGE: &str = "android.permission.READ_EXTERNAL_STORAGE";

/// In-memory [`PermissionStore`].
#[derive(Debug, Default)]
pub struct MemoryPermissionStore {
    never_ask: RefCell<BTreeSet<String>>,
}

impl MemoryPermissionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Permissions marked never-ask, sorted.
    pub fn never_ask_permissions(&self) -> Vec<String> {
        self.never_ask.borrow().iter().cloned().collect()
    }
}

impl PermissionStore for MemoryPermissionStore {
    fn never_ask_again(&self, permission: &str) {
        self.never_ask.borrow_mut().insert(permission.to_string());
    }

    fn should_never_ask(&self, permission: &str) -> bool {
        self.never_ask.borrow().contains(permission)
    }
}

/// What a session may show and which permissions it still has to request.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PermissionPlan {
    /// Available intents whose permission, if any, is granted.
    granted_intents: Vec<MediaIntent>,
    /// Permissions to request, without duplicates.
    to_request: Vec<String>,
    /// Whether device media may be read.
    can_show_stream: bool,
}

impl PermissionPlan {
    /// Whether the user has to be prompted before the session can proceed.
    pub fn needs_request(&self) -> bool {
        !self.to_request.is_empty()
    }

    /// Whether nothing can be shown and nothing can be asked for.
    pub fn is_blocked(&self) -> bool {
        !self.can_show_stream && self.to_request.is_empty()
    }
}

/// Work out which permissions a session needs.
///
/// Permissions the user marked never-ask are not requested again.
///
/// # Examples
///
/// ```
/// use belvedere_interface::{PermissionChecker, PermissionStore};
/// use belvedere_stream::{MemoryPermissionStore, READ_EXTERNAL_STORAGE, plan_permissions};
///
/// struct NothingGranted;
///
/// impl PermissionChecker for NothingGranted {
///     fn is_granted(&self, _permission: &str) -> bool {
///         false
///     }
/// }
///
/// let store = MemoryPermissionStore::new();
/// let plan = plan_permissions(&[], &NothingGranted, &store);
/// assert_eq!(plan.to_request(), &vec![READ_EXTERNAL_STORAGE.to_string()]);
///
/// store.never_ask_again(READ_EXTERNAL_STORAGE);
/// let plan = plan_permissions(&[], &NothingGranted, &store);
/// assert!(plan.is_blocked());
/// ```
#[instrument(skip_all, fields(intents = intents.len()))]
pub fn plan_permissions(
    intents: &[MediaIntent],
    checker: &dyn PermissionChecker,
    store: &dyn PermissionStore,
) -> PermissionPlan {
    let can_show_stream = checker.is_granted(READ_EXTERNAL_STORAGE);
    let mut to_request: Vec<String> = Vec::new();

    if !can_show_stream && !store.should_never_ask(READ_EXTERNAL_STORAGE) {
        to_request.push(READ_EXTERNAL_STORAGE.to_string());
    }

    for intent in intents {
        let Some(permission) = intent.permission().as_deref() else {
            continue;
        };
        if permission.is_empty()
            || !intent.is_available()
            || store.should_never_ask(permission)
            || checker.is_granted(permission)
        {
            continue;
        }
        if !to_request.iter().any(|requested| requested == permission) {
            to_request.push(permission.to_string());
        }
    }

    let granted_intents: Vec<MediaIntent> = intents
        .iter()
        .filter(|intent| intent.is_available())
        .filter(|intent| match intent.permission().as_deref() {
            None | Some("") => true,
            Some(permission) => checker.is_granted(permission),
        })
        .cloned()
        .collect();

    debug!(
        can_show_stream,
        to_request = to_request.len(),
        granted = granted_intents.len(),
        "Planned permissions"
    );

    PermissionPlan {
        granted_intents,
        to_request,
        can_show_stream,
    }
}

/// Persist the permissions the user asked not to be prompted for again.
pub fn record_permission_result(store: &dyn PermissionStore, dont_ask_again: &[String]) {
    for permission in dont_ask_again {
        debug!(permission = %permission, "Marking permission never-ask");
        store.never_ask_again(permission);
    }
}
