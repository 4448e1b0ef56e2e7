use crate::api::{AttendanceRecord, DashboardStats, Employee, EmployeeField, NewEmployee};
use chrono::NaiveDate;
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Everything the admin panel renders. Only [`AdminState::apply`] mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub employees: Vec<Employee>,
    pub attendance: HashMap<i64, Vec<AttendanceRecord>>,
    pub attendance_errors: HashMap<i64, String>,
    pub stats: DashboardStats,
    pub filter_date: Option<NaiveDate>,
    pub selected_dates: HashMap<i64, NaiveDate>,
    pub form: NewEmployee,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            attendance: HashMap::new(),
            attendance_errors: HashMap::new(),
            stats: DashboardStats::default(),
            filter_date: None,
            selected_dates: HashMap::new(),
            form: NewEmployee::default(),
            // The first reload is issued on mount.
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    ReloadStarted,
    ReloadSucceeded {
        generation: u64,
        employees: Vec<Employee>,
        stats: DashboardStats,
    },
    ReloadFailed {
        generation: u64,
        message: String,
    },
    ReloadFinished {
        generation: u64,
    },
    AttendanceLoaded {
        generation: u64,
        employee_id: i64,
        records: Vec<AttendanceRecord>,
    },
    AttendanceFailed {
        generation: u64,
        employee_id: i64,
        message: String,
    },
    FilterChanged(Option<NaiveDate>),
    SelectedDateChanged {
        employee_id: i64,
        date: NaiveDate,
    },
    FormEdited {
        field: EmployeeField,
        value: String,
    },
    FormCleared,
}

impl AdminState {
    pub fn apply(&mut self, action: AdminAction) {
        match action {
            AdminAction::ReloadStarted => {
                self.generation = self.generation.wrapping_add(1);
                self.loading = true;
            }
            AdminAction::ReloadSucceeded {
                generation,
                employees,
                stats,
            } => {
                if !self.is_current(generation) {
                    return;
                }
                self.attendance
                    .retain(|id, _| employees.iter().any(|e| e.id == *id));
                self.attendance_errors
                    .retain(|id, _| employees.iter().any(|e| e.id == *id));
                self.selected_dates
                    .retain(|id, _| employees.iter().any(|e| e.id == *id));
                self.employees = employees;
                self.stats = stats;
                self.error = None;
            }
            AdminAction::ReloadFailed {
                generation,
                message,
            } => {
                if self.is_current(generation) {
                    self.error = Some(message);
                }
            }
            AdminAction::ReloadFinished { generation } => {
                if self.is_current(generation) {
                    self.loading = false;
                }
            }
            AdminAction::AttendanceLoaded {
                generation,
                employee_id,
                records,
            } => {
                if !self.is_current(generation) || !self.has_employee(employee_id) {
                    return;
                }
                self.attendance_errors.remove(&employee_id);
                self.attendance.insert(employee_id, records);
            }
            AdminAction::AttendanceFailed {
                generation,
                employee_id,
                message,
            } => {
                if self.is_current(generation) && self.has_employee(employee_id) {
                    self.attendance_errors.insert(employee_id, message);
                }
            }
            AdminAction::FilterChanged(date) => self.filter_date = date,
            AdminAction::SelectedDateChanged { employee_id, date } => {
                self.selected_dates.insert(employee_id, date);
            }
            AdminAction::FormEdited { field, value } => self.form.set_field(field, value),
            AdminAction::FormCleared => self.form = NewEmployee::default(),
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn has_employee(&self, employee_id: i64) -> bool {
        self.employees.iter().any(|e| e.id == employee_id)
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn attendance_for(&self, employee_id: i64) -> &[AttendanceRecord] {
        self.attendance
            .get(&employee_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Date used when marking attendance: the card's picked date, else today.
    pub fn resolved_date(&self, employee_id: i64, today: NaiveDate) -> NaiveDate {
        self.selected_dates
            .get(&employee_id)
            .copied()
            .unwrap_or(today)
            .min(today)
    }
}

/// Where the orchestration in `pages::admin::sync` reads and writes admin state.
pub trait AdminStore: Clone + 'static {
    fn dispatch(&self, action: AdminAction);
    fn with_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R;
}

impl AdminStore for RwSignal<AdminState> {
    fn dispatch(&self, action: AdminAction) {
        self.update(|state| state.apply(action));
    }

    fn with_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        self.with_untracked(f)
    }
}

impl AdminStore for Rc<RefCell<AdminState>> {
    fn dispatch(&self, action: AdminAction) {
        self.borrow_mut().apply(action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        f(&self.borrow())
    }
}

pub fn use_admin_state() -> RwSignal<AdminState> {
    match use_context::<RwSignal<AdminState>>() {
        Some(state) => state,
        None => {
            let state = create_rw_signal(AdminState::default());
            provide_context(state);
            state
        }
    }
}
