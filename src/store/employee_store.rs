//! The in-memory employee store and its flat-file persistence.
//!
//! The store is the system of record for one session or batch job: an
//! explicit value owned by whatever composes the engine, never global
//! state. Bulk loads are tolerant — a bad row is skipped, counted, and
//! reported, but never aborts the load. Saving rewrites the whole
//! backing file through a temporary sibling so a failed save leaves the
//! prior copy undisturbed.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::codec::{
    parse_attendance_row, parse_roster_row, parse_saved_row, serialize_employee,
};
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::resolver;

/// One row excluded from a bulk load, with enough context to audit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// The 1-based line number in the source text.
    pub line: usize,
    /// The raw row content.
    pub content: String,
    /// Why the row was excluded.
    pub reason: String,
}

/// Diagnostics returned by every bulk load.
///
/// Exclusions are observable here (and logged as warnings), never
/// silently swallowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of rows successfully loaded.
    pub loaded: usize,
    /// The rows that were excluded, in input order.
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// Returns the number of rows excluded from the load.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// The in-memory set of employees with their attendance ledgers.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::store::EmployeeStore;
/// use rust_decimal::Decimal;
///
/// let mut store = EmployeeStore::new();
/// store
///     .add_employee(Employee::new("10001", "Maria", "Reyes", Decimal::new(12500, 2)))
///     .unwrap();
///
/// assert!(store.resolve("10001").is_some());
/// assert!(store.resolve("reyes").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the employees in load order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of employees in the store.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Adds an employee, rejecting a duplicate ID.
    pub fn add_employee(&mut self, employee: Employee) -> PayrollResult<()> {
        if self.employees.iter().any(|e| e.id == employee.id) {
            return Err(PayrollError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("duplicate employee ID '{}'", employee.id),
            });
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Resolves a loosely-formatted ID or name fragment to an employee.
    ///
    /// See [`resolve`](crate::store::resolve) for the strategy ladder.
    /// A miss is a normal outcome, not an error.
    pub fn resolve(&self, query: &str) -> Option<&Employee> {
        resolver::resolve(&self.employees, query)
    }

    /// Mutable form of [`resolve`], for rate/allowance edits and
    /// attendance writes.
    pub fn resolve_mut(&mut self, query: &str) -> Option<&mut Employee> {
        resolver::resolve_index(&self.employees, query).map(|index| &mut self.employees[index])
    }

    /// Loads the roster feed, skipping the header row.
    ///
    /// Malformed rows and duplicate IDs are skipped and reported; the
    /// load itself never fails.
    pub fn load_roster(&mut self, content: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            if line_number == 1 || line.trim().is_empty() {
                continue;
            }

            match parse_roster_row(line_number, line).and_then(|e| self.add_employee(e)) {
                Ok(()) => report.loaded += 1,
                Err(error) => skip_row(&mut report, line_number, line, &error),
            }
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "roster load complete"
        );
        report
    }

    /// Loads the attendance feed, skipping the header row.
    ///
    /// Each punch row is matched to an employee by ID through the
    /// resolver, falling back to the row's name when the ID misses.
    /// Unmatched rows are skipped and reported alongside malformed ones.
    pub fn load_attendance(&mut self, content: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            if line_number == 1 || line.trim().is_empty() {
                continue;
            }

            let row = match parse_attendance_row(line_number, line) {
                Ok(row) => row,
                Err(error) => {
                    skip_row(&mut report, line_number, line, &error);
                    continue;
                }
            };

            let full_name = format!("{} {}", row.first_name, row.last_name);
            let matched = resolver::resolve_index(&self.employees, &row.employee_id)
                .or_else(|| resolver::resolve_index(&self.employees, &full_name));

            let Some(index) = matched else {
                let reason = format!(
                    "no employee matches ID '{}' or name '{}'",
                    row.employee_id, full_name
                );
                warn!(line = line_number, %reason, "skipping attendance row");
                report.skipped.push(SkippedRow {
                    line: line_number,
                    content: line.to_string(),
                    reason,
                });
                continue;
            };

            let ledger = &mut self.employees[index].attendance;
            if let Some(login) = row.login {
                ledger.record_login(row.date, login);
            }
            if let Some(logout) = row.logout {
                ledger.record_logout(row.date, logout);
            }
            report.loaded += 1;
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "attendance load complete"
        );
        report
    }

    /// Loads employees previously written by [`save_to`](Self::save_to).
    ///
    /// The save schema has no header row. Malformed rows and duplicate
    /// IDs are skipped and reported.
    pub fn load_saved(&mut self, content: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match parse_saved_row(line_number, line).and_then(|e| self.add_employee(e)) {
                Ok(()) => report.loaded += 1,
                Err(error) => skip_row(&mut report, line_number, line, &error),
            }
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "saved-store load complete"
        );
        report
    }

    /// Reads the roster feed from a file. See [`load_roster`](Self::load_roster).
    pub fn load_roster_file<P: AsRef<Path>>(&mut self, path: P) -> PayrollResult<LoadReport> {
        let content = fs::read_to_string(path)?;
        Ok(self.load_roster(&content))
    }

    /// Reads the attendance feed from a file. See [`load_attendance`](Self::load_attendance).
    pub fn load_attendance_file<P: AsRef<Path>>(&mut self, path: P) -> PayrollResult<LoadReport> {
        let content = fs::read_to_string(path)?;
        Ok(self.load_attendance(&content))
    }

    /// Reads a saved store from a file. See [`load_saved`](Self::load_saved).
    pub fn load_saved_file<P: AsRef<Path>>(&mut self, path: P) -> PayrollResult<LoadReport> {
        let content = fs::read_to_string(path)?;
        Ok(self.load_saved(&content))
    }

    /// Saves every employee to the given path in the save schema.
    ///
    /// The rewrite is all-or-nothing: rows are written to a temporary
    /// sibling file which is renamed over the target only once the write
    /// has succeeded, so a mid-save failure leaves the previous on-disk
    /// copy untouched.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> PayrollResult<()> {
        let path = path.as_ref();
        let mut contents = String::new();
        for employee in &self.employees {
            contents.push_str(&serialize_employee(employee));
            contents.push('\n');
        }

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })?;
        fs::rename(&tmp, path)?;

        debug!(employees = self.employees.len(), path = %path.display(), "store saved");
        Ok(())
    }
}

fn skip_row(report: &mut LoadReport, line_number: usize, line: &str, error: &PayrollError) {
    let reason = error.to_string();
    warn!(line = line_number, %reason, "skipping row");
    report.skipped.push(SkippedRow {
        line: line_number,
        content: line.to_string(),
        reason,
    });
}
