//! Global session store
//!
//! `PortalState` is the single source of truth for session-scoped data. It is
//! only ever changed through [`Action`] values passed to [`reduce`], a pure
//! function from `(state, action)` to the next snapshot. [`Store`] owns the
//! current snapshot and is the only writer.
//!
//! `unread_count` is derived: every notification transition recomputes it
//! from the collection, it is never patched incrementally.

use chrono::NaiveDate;

use crate::types::{count_unread, Notification, Service, SupportTicket, User};

/// Session-scoped application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalState {
    /// Signed-in user, `None` when logged out
    pub user: Option<User>,
    pub services: Vec<Service>,
    /// Newest first
    pub tickets: Vec<SupportTicket>,
    /// Newest first
    pub notifications: Vec<Notification>,
    /// Always equal to the number of notifications with `read == false`
    pub unread_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl PortalState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn ticket(&self, id: &str) -> Option<&SupportTicket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn active_services(&self) -> impl Iterator<Item = &Service> {
        self.services
            .iter()
            .filter(|s| s.status == crate::types::ServiceStatus::Active)
    }

    /// Services expiring within the warning window, soonest first
    pub fn expiring_services(&self, today: NaiveDate) -> Vec<&Service> {
        let mut expiring: Vec<&Service> = self
            .services
            .iter()
            .filter(|s| s.is_expiring_soon(today))
            .collect();
        expiring.sort_by_key(|s| s.expiry_date);
        expiring
    }

    pub fn domains(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.is_domain())
    }

    pub fn open_tickets(&self) -> impl Iterator<Item = &SupportTicket> {
        self.tickets.iter().filter(|t| t.status.is_open())
    }
}

/// The closed set of state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetUser(User),
    /// Ends the session: clears the user and every session collection
    ClearUser,
    SetNotifications(Vec<Notification>),
    AddNotification(Notification),
    UpdateNotification(Notification),
    SetServices(Vec<Service>),
    UpdateService(Service),
    SetTickets(Vec<SupportTicket>),
    AddTicket(SupportTicket),
    UpdateTicket(SupportTicket),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    /// Variant name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "SetUser",
            Self::ClearUser => "ClearUser",
            Self::SetNotifications(_) => "SetNotifications",
            Self::AddNotification(_) => "AddNotification",
            Self::UpdateNotification(_) => "UpdateNotification",
            Self::SetServices(_) => "SetServices",
            Self::UpdateService(_) => "UpdateService",
            Self::SetTickets(_) => "SetTickets",
            Self::AddTicket(_) => "AddTicket",
            Self::UpdateTicket(_) => "UpdateTicket",
            Self::SetLoading(_) => "SetLoading",
            Self::SetError(_) => "SetError",
        }
    }
}

/// Items that live in id-keyed collections
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Service {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for SupportTicket {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Notification {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Keep the first occurrence of every id
fn dedup_by_id<T: Keyed>(items: Vec<T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.key().to_string()))
        .collect()
}

/// Insert at the front, dropping any existing entry with the same id
fn prepend<T: Keyed>(items: &mut Vec<T>, item: T) {
    items.retain(|existing| existing.key() != item.key());
    items.insert(0, item);
}

/// Replace the entry with the same id in place; unknown ids are ignored
fn replace<T: Keyed>(items: &mut [T], item: T) {
    if let Some(slot) = items.iter_mut().find(|existing| existing.key() == item.key()) {
        *slot = item;
    }
}

/// Pure state transition
pub fn reduce(state: &PortalState, action: Action) -> PortalState {
    let mut next = state.clone();

    match action {
        Action::SetUser(user) => {
            next.user = Some(user);
        }
        Action::ClearUser => {
            next = PortalState::default();
        }
        Action::SetNotifications(notifications) => {
            next.notifications = dedup_by_id(notifications);
            next.unread_count = count_unread(&next.notifications);
        }
        Action::AddNotification(notification) => {
            prepend(&mut next.notifications, notification);
            next.unread_count = count_unread(&next.notifications);
        }
        Action::UpdateNotification(notification) => {
            replace(&mut next.notifications, notification);
            next.unread_count = count_unread(&next.notifications);
        }
        Action::SetServices(services) => {
            next.services = dedup_by_id(services);
        }
        Action::UpdateService(service) => {
            replace(&mut next.services, service);
        }
        Action::SetTickets(tickets) => {
            next.tickets = dedup_by_id(tickets);
        }
        Action::AddTicket(ticket) => {
            prepend(&mut next.tickets, ticket);
        }
        Action::UpdateTicket(ticket) => {
            replace(&mut next.tickets, ticket);
        }
        Action::SetLoading(loading) => {
            next.loading = loading;
        }
        Action::SetError(error) => {
            next.error = error;
        }
    }

    next
}

/// Owner of the current state snapshot
#[derive(Debug, Default)]
pub struct Store {
    state: PortalState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot (duplicate ids dropped, derived count recomputed)
    pub fn with_state(mut state: PortalState) -> Self {
        state.services = dedup_by_id(state.services);
        state.tickets = dedup_by_id(state.tickets);
        state.notifications = dedup_by_id(state.notifications);
        state.unread_count = count_unread(&state.notifications);
        Self { state }
    }

    /// Current snapshot
    pub fn state(&self) -> &PortalState {
        &self.state
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {}", action.name());
        self.state = reduce(&self.state, action);
    }

    // ===== dispatch helpers =====

    pub fn set_user(&mut self, user: User) {
        self.dispatch(Action::SetUser(user));
    }

    pub fn clear_user(&mut self) {
        self.dispatch(Action::ClearUser);
    }

    pub fn set_notifications(&mut self, notifications: Vec<Notification>) {
        self.dispatch(Action::SetNotifications(notifications));
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.dispatch(Action::AddNotification(notification));
    }

    pub fn update_notification(&mut self, notification: Notification) {
        self.dispatch(Action::UpdateNotification(notification));
    }

    /// Mark one notification read; returns `false` when the id is unknown or already read
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        let Some(mut notification) = self
            .state
            .notifications
            .iter()
            .find(|n| n.id == id && !n.read)
            .cloned()
        else {
            return false;
        };
        notification.read = true;
        self.dispatch(Action::UpdateNotification(notification));
        true
    }

    pub fn set_services(&mut self, services: Vec<Service>) {
        self.dispatch(Action::SetServices(services));
    }

    pub fn update_service(&mut self, service: Service) {
        self.dispatch(Action::UpdateService(service));
    }

    pub fn set_tickets(&mut self, tickets: Vec<SupportTicket>) {
        self.dispatch(Action::SetTickets(tickets));
    }

    pub fn add_ticket(&mut self, ticket: SupportTicket) {
        self.dispatch(Action::AddTicket(ticket));
    }

    pub fn update_ticket(&mut self, ticket: SupportTicket) {
        self.dispatch(Action::UpdateTicket(ticket));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{notification, service, test_user, ticket};

    fn assert_unread_invariant(state: &PortalState) {
        assert_eq!(
            state.unread_count,
            state.notifications.iter().filter(|n| !n.read).count()
        );
    }

    #[test]
    fn unread_count_tracks_every_notification_action() {
        let mut store = Store::new();

        store.set_notifications(vec![
            notification("n1", false),
            notification("n2", true),
            notification("n3", false),
        ]);
        assert_eq!(store.state().unread_count, 2);
        assert_unread_invariant(store.state());

        store.add_notification(notification("n4", false));
        assert_eq!(store.state().unread_count, 3);
        assert_unread_invariant(store.state());

        store.update_notification(notification("n1", true));
        assert_eq!(store.state().unread_count, 2);
        assert_unread_invariant(store.state());

        assert!(store.mark_notification_read("n3"));
        assert!(!store.mark_notification_read("n3"));
        assert!(!store.mark_notification_read("missing"));
        assert_eq!(store.state().unread_count, 1);
        assert_unread_invariant(store.state());

        store.clear_user();
        assert_eq!(store.state().unread_count, 0);
        assert_unread_invariant(store.state());
    }

    #[test]
    fn add_notification_with_existing_id_replaces_it() {
        let mut store = Store::new();
        store.set_notifications(vec![notification("n1", false)]);
        store.add_notification(notification("n1", true));

        assert_eq!(store.state().notifications.len(), 1);
        assert_eq!(store.state().unread_count, 0);
    }

    #[test]
    fn set_collections_drop_duplicate_ids() {
        let mut store = Store::new();
        store.set_services(vec![service("s1", true), service("s1", false), service("s2", true)]);
        assert_eq!(store.state().services.len(), 2);
        assert!(store.state().services[0].auto_renew);

        store.set_notifications(vec![notification("n1", false), notification("n1", false)]);
        assert_eq!(store.state().notifications.len(), 1);
        assert_eq!(store.state().unread_count, 1);
    }

    #[test]
    fn update_service_touches_only_that_service() {
        let mut store = Store::new();
        store.set_services(vec![service("s1", true), service("s2", true), service("s3", false)]);
        let before = store.state().clone();

        let mut toggled = service("s2", true);
        toggled.auto_renew = false;
        store.update_service(toggled);

        let after = store.state();
        assert!(!after.service("s2").unwrap().auto_renew);
        assert_eq!(after.service("s1"), before.service("s1"));
        assert_eq!(after.service("s3"), before.service("s3"));
        assert_eq!(after.services.len(), 3);
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let mut store = Store::new();
        store.set_services(vec![service("s1", true)]);
        let before = store.state().clone();
        store.update_service(service("ghost", false));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn add_ticket_goes_to_front() {
        let mut store = Store::new();
        store.set_tickets(vec![ticket("t1"), ticket("t2")]);
        store.add_ticket(ticket("t3"));

        let ids: Vec<&str> = store.state().tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t1", "t2"]);
    }

    #[test]
    fn reduce_is_pure() {
        let state = PortalState::default();
        let next = reduce(&state, Action::SetLoading(true));
        assert!(!state.loading);
        assert!(next.loading);

        let again = reduce(&state, Action::SetLoading(true));
        assert_eq!(next, again);
    }

    #[test]
    fn clear_user_resets_session() {
        let mut store = Store::new();
        store.set_user(test_user());
        store.set_services(vec![service("s1", true)]);
        store.set_tickets(vec![ticket("t1")]);
        store.set_error(Some("boom".to_string()));
        assert!(store.state().is_authenticated());

        store.clear_user();
        assert_eq!(store.state(), &PortalState::default());
    }

    #[test]
    fn with_state_recomputes_unread_count() {
        let state = PortalState {
            notifications: vec![notification("n1", false), notification("n2", false)],
            unread_count: 99,
            ..PortalState::default()
        };
        let store = Store::with_state(state);
        assert_eq!(store.state().unread_count, 2);
    }

    #[test]
    fn with_state_drops_duplicate_ids() {
        let state = PortalState {
            services: vec![service("s1", true), service("s1", false)],
            tickets: vec![ticket("t1"), ticket("t1"), ticket("t2")],
            notifications: vec![notification("n1", false), notification("n1", false)],
            ..PortalState::default()
        };
        let store = Store::with_state(state);
        assert_eq!(store.state().services.len(), 1);
        assert!(store.state().services[0].auto_renew);
        assert_eq!(store.state().tickets.len(), 2);
        assert_eq!(store.state().notifications.len(), 1);
        assert_eq!(store.state().unread_count, 1);
    }
}
