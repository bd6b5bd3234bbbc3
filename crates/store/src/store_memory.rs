//! In-memory directory and audit log for tests.

use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{
    Error, Result,
    store::{AuditLog, EmployeeDirectory},
    types::{AcknowledgmentEvent, EmployeeRecord},
};

/// In-memory store backed by `Vec`s. No persistence — for tests only.
#[derive(Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<EmployeeRecord>>,
    events: Mutex<Vec<AcknowledgmentEvent>>,
    fail_appends: AtomicBool,
    fail_lookups: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<EmployeeRecord>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Self::default()
        }
    }

    /// Snapshot of all appended events, oldest first.
    pub fn events(&self) -> Vec<AcknowledgmentEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Snapshot of the directory, for asserting identity backfills.
    pub fn employees(&self) -> Vec<EmployeeRecord> {
        self.employees
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Make subsequent [`AuditLog::append`] calls fail, to exercise the
    /// write-failure path.
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent directory reads fail, to exercise the
    /// lookup-failure path.
    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    fn check_lookups(&self) -> Result<()> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(Error::message("lookup failed (injected)"));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeDirectory for MemoryStore {
    async fn find_by_telegram_id(
        &self,
        telegram_user_id: &str,
    ) -> Result<Option<EmployeeRecord>> {
        self.check_lookups()?;
        let employees = self.employees.lock().unwrap_or_else(|e| e.into_inner());
        Ok(employees
            .iter()
            .find(|e| e.telegram_user_id.as_deref() == Some(telegram_user_id))
            .cloned())
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Option<EmployeeRecord>> {
        self.check_lookups()?;
        let wanted = full_name.to_lowercase();
        let employees = self.employees.lock().unwrap_or_else(|e| e.into_inner());
        Ok(employees
            .iter()
            .find(|e| e.full_name.to_lowercase() == wanted)
            .cloned())
    }

    async fn all_names(&self) -> Result<Vec<String>> {
        self.check_lookups()?;
        let employees = self.employees.lock().unwrap_or_else(|e| e.into_inner());
        Ok(employees.iter().map(|e| e.full_name.clone()).collect())
    }

    async fn record_telegram_identity(
        &self,
        employee_id: i64,
        telegram_user_id: &str,
        telegram_username: Option<&str>,
    ) -> Result<()> {
        let mut employees = self.employees.lock().unwrap_or_else(|e| e.into_inner());
        let Some(employee) = employees.iter_mut().find(|e| e.id == employee_id) else {
            return Err(Error::message(format!("employee not found: {employee_id}")));
        };
        employee.telegram_user_id = Some(telegram_user_id.to_string());
        employee.telegram_username = telegram_username.map(str::to_string);
        Ok(())
    }
}

#[async_trait]
impl AuditLog for MemoryStore {
    async fn append(&self, event: &AcknowledgmentEvent) -> Result<i64> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(Error::message("append failed (injected)"));
        }
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event.clone());
        Ok(events.len() as i64)
    }

    async fn has_acknowledged(&self, employee_id: i64, handbook_version: &str) -> Result<bool> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        Ok(events.iter().any(|e| {
            e.employee_id == Some(employee_id) && e.handbook_version == handbook_version
        }))
    }
}
