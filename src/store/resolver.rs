//! Tolerant employee identity resolution.
//!
//! The roster and attendance feeds are maintained by different people,
//! so the same employee ID arrives with and without leading zeros, and
//! sometimes only a name fragment is available. Resolution runs a fixed
//! ladder of strategies and stops at the first hit, which keeps the
//! tolerance deterministic: every caller gets the same answer for the
//! same query, and a total miss is an ordinary `None`, never an error.

use crate::models::Employee;

/// Resolves a query string against the employee set.
///
/// Strategy order, first match wins:
/// 1. exact string equality against the stored ID;
/// 2. for integer queries, equality against the query zero-padded to
///    five digits;
/// 3. for integer queries, numeric equality against the stored ID
///    re-parsed as an integer (absorbs zero-padding drift on the stored
///    side);
/// 4. case-insensitive substring match against the employee's full name.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::store::resolve;
/// use rust_decimal::Decimal;
///
/// let employees = vec![Employee::new("00007", "Jose", "Santos", Decimal::ZERO)];
///
/// assert!(resolve(&employees, "00007").is_some());
/// assert!(resolve(&employees, "7").is_some());
/// assert!(resolve(&employees, "santos").is_some());
/// assert!(resolve(&employees, "99").is_none());
/// ```
pub fn resolve<'a>(employees: &'a [Employee], query: &str) -> Option<&'a Employee> {
    resolve_index(employees, query).map(|index| &employees[index])
}

/// Index-returning form of [`resolve`], for callers that need to mutate
/// the matched employee.
pub(crate) fn resolve_index(employees: &[Employee], query: &str) -> Option<usize> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(index) = employees.iter().position(|e| e.id == query) {
        return Some(index);
    }

    if let Ok(numeric) = query.parse::<i64>() {
        let padded = format!("{numeric:05}");
        if let Some(index) = employees.iter().position(|e| e.id == padded) {
            return Some(index);
        }
        if let Some(index) = employees
            .iter()
            .position(|e| e.id.parse::<i64>() == Ok(numeric))
        {
            return Some(index);
        }
    }

    let needle = query.to_lowercase();
    employees
        .iter()
        .position(|e| e.full_name().to_lowercase().contains(&needle))
}
