//! Session provider: who is using dotlog right now.

use crate::db::session::{clear_session, load_session_owner, save_session_owner};
use crate::errors::AppResult;
use crate::models::owner::Owner;
use rusqlite::Connection;

pub type SubscriptionId = usize;
pub type Listener = Box<dyn FnMut(Option<&Owner>)>;

pub trait SessionProvider {
    /// The signed-in identity, or `None`.
    fn current_user(&self) -> Option<Owner>;

    /// Register a callback fired every time the identity changes.
    fn subscribe(&mut self, listener: Listener) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Identity kept in the local database's `session` table.
#[derive(Default)]
pub struct LocalSession {
    current: Option<Owner>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl LocalSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn with_user(owner: Owner) -> Self {
        Self {
            current: Some(owner),
            ..Self::default()
        }
    }

    /// Pick up whoever signed in last on this database.
    pub fn restore(conn: &Connection) -> AppResult<Self> {
        let current = load_session_owner(conn)?;
        Ok(Self {
            current,
            ..Self::default()
        })
    }

    pub fn sign_in(&mut self, conn: &Connection, owner: Owner) -> AppResult<()> {
        save_session_owner(conn, &owner)?;
        self.set_user(Some(owner));
        Ok(())
    }

    pub fn sign_out(&mut self, conn: &Connection) -> AppResult<()> {
        clear_session(conn)?;
        self.set_user(None);
        Ok(())
    }

    /// Change the identity for this process only (e.g. `--user`).
    pub fn set_user(&mut self, owner: Option<Owner>) {
        if self.current == owner {
            return;
        }
        self.current = owner;

        let current = self.current.as_ref();
        for (_, listener) in self.listeners.iter_mut() {
            listener(current);
        }
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<Owner> {
        self.current.clone()
    }

    fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn sign_in_persists_and_notifies() {
        let pool = DbPool::open_in_memory().unwrap();
        let mut session = LocalSession::restore(&pool.conn).unwrap();
        assert_eq!(session.current_user(), None);

        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        session.subscribe(Box::new(move |o| {
            sink.borrow_mut().push(o.map(|o| o.to_string()));
        }));

        let alice = Owner::parse("alice").unwrap();
        session.sign_in(&pool.conn, alice.clone()).unwrap();
        // Same identity again: no notification.
        session.sign_in(&pool.conn, alice.clone()).unwrap();
        assert_eq!(session.current_user(), Some(alice.clone()));

        let restored = LocalSession::restore(&pool.conn).unwrap();
        assert_eq!(restored.current_user(), Some(alice));

        session.sign_out(&pool.conn).unwrap();
        assert_eq!(LocalSession::restore(&pool.conn).unwrap().current_user(), None);

        assert_eq!(*seen.borrow(), vec![Some("alice".to_string()), None]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut session = LocalSession::signed_out();
        let calls = Rc::new(RefCell::new(0));

        let c = Rc::clone(&calls);
        let id = session.subscribe(Box::new(move |_| *c.borrow_mut() += 1));
        session.set_user(Some(Owner::parse("bob").unwrap()));
        session.unsubscribe(id);
        session.set_user(None);

        assert_eq!(*calls.borrow(), 1);
    }
}
