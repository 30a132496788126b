//! Composition of session, repository and calendar aggregation.
//!
//! The dashboard asks the session provider who is signed in, fetches that
//! user's entries and turns them into a [`DashboardView`]. A failed fetch
//! leaves the previous view in place.

use crate::core::calendar::{build_day_index, build_grid, recent_entries};
use crate::core::repository::EntryRepository;
use crate::core::session::SessionProvider;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::calendar::CalendarGrid;
use crate::models::entry::Entry;
use crate::models::owner::Owner;
use chrono::NaiveDate;
use std::cell::Cell;
use std::rc::Rc;

/// Everything needed to draw one screen.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub owner: Owner,
    pub reference: NaiveDate,
    pub grid: CalendarGrid,
    pub recent: Vec<Entry>,
    pub total: usize,
}

impl DashboardView {
    pub fn build(
        owner: Owner,
        entries: &[Entry],
        reference: NaiveDate,
        recent_limit: usize,
    ) -> Self {
        let index = build_day_index(entries);
        Self {
            owner,
            reference,
            grid: build_grid(&index, reference),
            recent: recent_entries(entries, recent_limit).to_vec(),
            total: entries.len(),
        }
    }
}

pub struct Dashboard<P: SessionProvider, S: RecordStore> {
    session: P,
    repo: EntryRepository<S>,
    recent_limit: usize,
    view: Option<DashboardView>,
    identity_changed: Rc<Cell<bool>>,
}

impl<P: SessionProvider, S: RecordStore> Dashboard<P, S> {
    pub fn new(mut session: P, repo: EntryRepository<S>, recent_limit: usize) -> Self {
        let identity_changed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&identity_changed);
        session.subscribe(Box::new(move |_| flag.set(true)));

        Self {
            session,
            repo,
            recent_limit,
            view: None,
            identity_changed,
        }
    }

    /// The signed-in owner, or `InvalidInput` when nobody is.
    pub fn owner(&self) -> AppResult<Owner> {
        self.session.current_user().ok_or_else(|| {
            AppError::invalid("not signed in (run `dotlog login <name>` or pass --user)")
        })
    }

    /// Refetch entries and rebuild the view for `reference`.
    ///
    /// On `StoreUnavailable` the previously fetched view is kept and the
    /// error is returned; call [`Dashboard::view`] to keep displaying it.
    pub fn refresh(&mut self, reference: NaiveDate) -> AppResult<&DashboardView> {
        self.discard_stale_view();
        let owner = self.owner()?;

        let entries = self.repo.list_entries(&owner)?;
        let view = DashboardView::build(owner, &entries, reference, self.recent_limit);
        Ok(&*self.view.insert(view))
    }

    /// Last successfully built view, if any, as long as it still belongs
    /// to the signed-in user.
    pub fn view(&self) -> Option<&DashboardView> {
        if self.identity_changed.get() {
            return None;
        }
        let current = self.session.current_user()?;
        self.view.as_ref().filter(|v| v.owner == current)
    }

    fn discard_stale_view(&mut self) {
        if self.identity_changed.replace(false) {
            self.view = None;
        }
    }

    /// Save the signed-in user's rating for `date`. The view is not
    /// rebuilt; call [`Dashboard::refresh`] afterwards.
    pub fn save(&mut self, date: NaiveDate, level: i64, note: Option<&str>) -> AppResult<Entry> {
        let owner = self.owner()?;
        self.repo.upsert_entry(&owner, date, level, note)
    }

    /// All entries of the signed-in user, newest first.
    pub fn entries(&self) -> AppResult<Vec<Entry>> {
        let owner = self.owner()?;
        self.repo.list_entries(&owner)
    }

    pub fn entry(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        let owner = self.owner()?;
        self.repo.get_entry(&owner, date)
    }

    pub fn session_mut(&mut self) -> &mut P {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::LocalSession;
    use crate::models::level::Level;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// In-memory store that can be switched offline.
    #[derive(Default)]
    struct FlakyStore {
        rows: RefCell<BTreeMap<(String, NaiveDate), Entry>>,
        offline: Rc<Cell<bool>>,
        next_id: Cell<i64>,
    }

    impl FlakyStore {
        fn check(&self) -> AppResult<()> {
            if self.offline.get() {
                Err(AppError::StoreUnavailable(rusqlite::Error::InvalidQuery))
            } else {
                Ok(())
            }
        }
    }

    impl RecordStore for FlakyStore {
        fn select_by_owner(&self, owner: &Owner) -> AppResult<Vec<Entry>> {
            self.check()?;
            let mut out: Vec<Entry> = self
                .rows
                .borrow()
                .values()
                .filter(|e| &e.owner == owner)
                .cloned()
                .collect();
            out.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(out)
        }

        fn select_one(&self, owner: &Owner, date: NaiveDate) -> AppResult<Option<Entry>> {
            self.check()?;
            Ok(self
                .rows
                .borrow()
                .get(&(owner.to_string(), date))
                .cloned())
        }

        fn select_range(
            &self,
            owner: &Owner,
            start: NaiveDate,
            end: NaiveDate,
        ) -> AppResult<Vec<Entry>> {
            let mut out = self.select_by_owner(owner)?;
            out.retain(|e| e.date >= start && e.date <= end);
            out.reverse();
            Ok(out)
        }

        fn upsert_on_conflict(
            &mut self,
            owner: &Owner,
            date: NaiveDate,
            level: Level,
            note: Option<&str>,
        ) -> AppResult<Entry> {
            self.check()?;
            let mut rows = self.rows.borrow_mut();
            let id = self.next_id.get() + 1;
            let entry = rows
                .entry((owner.to_string(), date))
                .or_insert_with(|| Entry {
                    id,
                    owner: owner.clone(),
                    date,
                    level,
                    note: None,
                    created_at: String::new(),
                    updated_at: String::new(),
                });
            if entry.id == id {
                self.next_id.set(id);
            }
            entry.level = level;
            entry.note = note.map(str::to_string);
            Ok(entry.clone())
        }
    }

    fn dashboard(user: Option<&str>) -> (Dashboard<LocalSession, FlakyStore>, Rc<Cell<bool>>) {
        let store = FlakyStore::default();
        let offline = Rc::clone(&store.offline);
        let session = match user {
            Some(name) => LocalSession::with_user(Owner::parse(name).unwrap()),
            None => LocalSession::signed_out(),
        };
        (Dashboard::new(session, EntryRepository::new(store), 10), offline)
    }

    #[test]
    fn refuses_to_work_without_a_user() {
        let (mut dash, _) = dashboard(None);

        assert!(matches!(
            dash.refresh(d("2024-06-15")),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            dash.save(d("2024-06-15"), 3, None),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn save_then_refresh_shows_the_entry() {
        let (mut dash, _) = dashboard(Some("alice"));

        dash.save(d("2024-06-15"), 4, Some("picnic")).unwrap();
        dash.save(d("2024-06-14"), 1, None).unwrap();

        let view = dash.refresh(d("2024-06-15")).unwrap();
        assert_eq!(view.total, 2);
        assert_eq!(view.recent[0].date, d("2024-06-15"));
        assert_eq!(view.grid.weeks()[51][6].level, 4);
        assert_eq!(view.grid.weeks()[51][5].level, 1);
    }

    #[test]
    fn failed_refresh_keeps_previous_view() {
        let (mut dash, offline) = dashboard(Some("alice"));
        dash.save(d("2024-06-15"), 5, None).unwrap();
        dash.refresh(d("2024-06-15")).unwrap();

        offline.set(true);
        let err = dash.refresh(d("2024-06-16")).unwrap_err();
        assert!(err.is_store_unavailable());

        let kept = dash.view().expect("previous view is kept");
        assert_eq!(kept.reference, d("2024-06-15"));
        assert_eq!(kept.grid.filled(), 1);
    }

    #[test]
    fn identity_change_discards_the_old_view() {
        let (mut dash, offline) = dashboard(Some("alice"));
        dash.save(d("2024-06-15"), 5, None).unwrap();
        dash.refresh(d("2024-06-15")).unwrap();

        dash.session_mut()
            .set_user(Some(Owner::parse("bob").unwrap()));
        offline.set(true);
        assert!(dash.refresh(d("2024-06-15")).is_err());
        assert!(dash.view().is_none());

        offline.set(false);
        let view = dash.refresh(d("2024-06-15")).unwrap();
        assert_eq!(view.owner.as_str(), "bob");
        assert_eq!(view.total, 0);
    }

    #[test]
    fn signed_out_or_switched_user_never_sees_old_view() {
        let (mut dash, _) = dashboard(Some("alice"));
        dash.save(d("2024-06-15"), 2, Some("secret")).unwrap();
        dash.refresh(d("2024-06-15")).unwrap();
        assert!(dash.view().is_some());

        dash.session_mut().set_user(None);
        assert!(dash.view().is_none());
        assert!(dash.refresh(d("2024-06-15")).is_err());
        assert!(dash.view().is_none());

        dash.session_mut()
            .set_user(Some(Owner::parse("bob").unwrap()));
        assert!(dash.view().is_none());

        let view = dash.refresh(d("2024-06-15")).unwrap();
        assert_eq!(view.owner.as_str(), "bob");
        assert!(view.recent.is_empty());
    }
}
