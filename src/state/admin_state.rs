// ============================================================================
// ADMIN STATE - dashboard state tree (Rc<RefCell> + change subscribers)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{CabBooking, Car, CarForm, LoginRequest, SelfDriveBooking, User};
use crate::services::routes;
use crate::state::SessionState;

/// Panel shown in the main area. Switching has no side effect beyond visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Users,
    CabBookings,
    SelfDriveBookings,
    CarForm,
    CarList,
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 5] = [
        Section::Users,
        Section::CabBookings,
        Section::SelfDriveBookings,
        Section::CarForm,
        Section::CarList,
    ];

    pub fn label(self, editing_car: bool) -> &'static str {
        match self {
            Section::Users => "Users",
            Section::CabBookings => "Cab Bookings",
            Section::SelfDriveBookings => "Self-Drive Bookings",
            Section::CarForm if editing_car => "Edit Car",
            Section::CarForm => "Add Car",
            Section::CarList => "Manage Cars",
        }
    }
}

/// The four remote collections mirrored by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Users,
    Cars,
    CabBookings,
    SelfDriveBookings,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Users,
        CollectionKind::Cars,
        CollectionKind::CabBookings,
        CollectionKind::SelfDriveBookings,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            CollectionKind::Users => routes::USERS,
            CollectionKind::Cars => routes::CARS,
            CollectionKind::CabBookings => routes::BOOKINGS,
            CollectionKind::SelfDriveBookings => routes::SELF_DRIVE_BOOKINGS,
        }
    }

    /// Noun used in alerts ("Failed to fetch self-drive bookings")
    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::Users => "users",
            CollectionKind::Cars => "cars",
            CollectionKind::CabBookings => "bookings",
            CollectionKind::SelfDriveBookings => "self-drive bookings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Holds the `loading` flag for one operation; the flag drops with it
#[derive(Debug)]
#[must_use = "the loading flag is released as soon as the guard is dropped"]
pub struct LoadingGuard {
    flag: Rc<RefCell<bool>>,
}

impl LoadingGuard {
    pub fn release(self) {}
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        *self.flag.borrow_mut() = false;
    }
}

#[derive(Clone)]
pub struct AdminState {
    pub session: SessionState,
    pub section: Rc<RefCell<Section>>,

    pub users: Rc<RefCell<Vec<User>>>,
    pub cars: Rc<RefCell<Vec<Car>>>,
    pub bookings: Rc<RefCell<Vec<CabBooking>>>,
    pub self_drive_bookings: Rc<RefCell<Vec<SelfDriveBooking>>>,

    pub car_form: Rc<RefCell<CarForm>>,
    /// Bumped whenever the form is replaced; async image reads check it
    pub car_form_epoch: Rc<RefCell<u64>>,
    /// Login inputs, kept across re-renders
    pub login_draft: Rc<RefCell<LoginRequest>>,
    pub loading: Rc<RefCell<bool>>,
    pub notices: Rc<RefCell<Vec<Notice>>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AdminState {
    pub fn new(session: SessionState) -> Self {
        Self {
            session,
            section: Rc::new(RefCell::new(Section::default())),
            users: Rc::new(RefCell::new(Vec::new())),
            cars: Rc::new(RefCell::new(Vec::new())),
            bookings: Rc::new(RefCell::new(Vec::new())),
            self_drive_bookings: Rc::new(RefCell::new(Vec::new())),
            car_form: Rc::new(RefCell::new(CarForm::default())),
            car_form_epoch: Rc::new(RefCell::new(0)),
            login_draft: Rc::new(RefCell::new(LoginRequest::default())),
            loading: Rc::new(RefCell::new(false)),
            notices: Rc::new(RefCell::new(Vec::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_section(&self) -> Section {
        *self.section.borrow()
    }

    pub fn set_section(&self, section: Section) {
        *self.section.borrow_mut() = section;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Raises the `loading` flag, or returns `None` while another operation holds it
    pub fn begin_loading(&self) -> Option<LoadingGuard> {
        let mut flag = self.loading.borrow_mut();
        if *flag {
            return None;
        }
        *flag = true;
        Some(LoadingGuard {
            flag: self.loading.clone(),
        })
    }

    pub fn push_notice(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    pub fn dismiss_notice(&self, index: usize) {
        let mut notices = self.notices.borrow_mut();
        if index < notices.len() {
            notices.remove(index);
        }
    }

    pub fn get_notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn collection_len(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Users => self.users.borrow().len(),
            CollectionKind::Cars => self.cars.borrow().len(),
            CollectionKind::CabBookings => self.bookings.borrow().len(),
            CollectionKind::SelfDriveBookings => self.self_drive_bookings.borrow().len(),
        }
    }

    pub fn car_form_epoch(&self) -> u64 {
        *self.car_form_epoch.borrow()
    }

    /// Installs a new form; pending image reads for the old one become stale
    pub fn replace_car_form(&self, form: CarForm) {
        *self.car_form.borrow_mut() = form;
        *self.car_form_epoch.borrow_mut() += 1;
    }

    /// Drops every fetched record
    pub fn clear_collections(&self) {
        self.users.borrow_mut().clear();
        self.cars.borrow_mut().clear();
        self.bookings.borrow_mut().clear();
        self.self_drive_bookings.borrow_mut().clear();
    }

    /// Back to the post-login defaults: empty collections, blank form, Users panel
    pub fn reset_dashboard(&self) {
        self.clear_collections();
        self.replace_car_form(CarForm::default());
        self.set_section(Section::default());
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        // Snapshot so a callback may subscribe without a double borrow
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}
