//! Reporting hierarchy resolution
//!
//! Resolves the flat manager references in the store into an ordered tree
//! view: every employee annotated with their depth below the nearest root and
//! the chain of display names leading down to them. The manager graph is
//! expected to be a forest but is never trusted to be one; a reporting cycle
//! surfaces as [`AnalyticsError::CycleDetected`] instead of an endless walk.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::warn;

use super::{AnalyticsError, AnalyticsResult};
use crate::directory::{Employee, EmployeeFilter, EmployeeId, RecordStore};

/// Separator between display names in a hierarchy path
pub const PATH_SEPARATOR: &str = " > ";

/// One employee's position in the resolved reporting hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgNode {
    pub employee: EmployeeId,

    /// Distance from the nearest root, roots at depth 1
    pub depth: u32,

    /// Display names from the root down to this employee,
    /// e.g. "Alice Nguyen > Bob Okafor"
    pub path: String,
}

/// Resolve the reporting hierarchy from the store's current employees.
///
/// Adjacency (manager to direct reports) is built once from the flat
/// employee list, then walked from the roots. Roots are employees without a
/// manager; a child's depth is its parent's plus one and its path is the
/// parent path extended with [`PATH_SEPARATOR`] and the child's display
/// name. Nodes come back sorted by depth, then path, then id.
pub fn resolve_hierarchy<S: RecordStore>(store: &S) -> AnalyticsResult<Vec<OrgNode>> {
    let employees = store.employees(&EmployeeFilter::default());

    let mut lookup: FxHashMap<EmployeeId, &Employee> = FxHashMap::default();
    let mut reports: FxHashMap<EmployeeId, Vec<EmployeeId>> = FxHashMap::default();
    let mut roots: Vec<EmployeeId> = Vec::new();
    for employee in &employees {
        lookup.insert(employee.id, employee);
        match employee.manager {
            Some(manager) => reports.entry(manager).or_default().push(employee.id),
            None => roots.push(employee.id),
        }
    }

    let mut nodes: Vec<OrgNode> = Vec::with_capacity(employees.len());
    let mut reached: FxHashSet<EmployeeId> = FxHashSet::default();
    let mut stack: Vec<(EmployeeId, u32, String)> = roots
        .iter()
        .map(|&id| (id, 1, lookup[&id].display_name()))
        .collect();
    while let Some((id, depth, path)) = stack.pop() {
        reached.insert(id);
        if let Some(children) = reports.get(&id) {
            for &child in children {
                let child_path = format!("{}{}{}", path, PATH_SEPARATOR, lookup[&child].display_name());
                stack.push((child, depth + 1, child_path));
            }
        }
        nodes.push(OrgNode {
            employee: id,
            depth,
            path,
        });
    }

    // Anyone not reached from a root sits on or below a manager cycle;
    // chase their manager chain to name the first employee it revisits.
    if nodes.len() != employees.len() {
        for employee in &employees {
            if reached.contains(&employee.id) {
                continue;
            }
            if let Some(hit) = first_revisited(employee.id, &lookup) {
                warn!(employee = %hit, "manager cycle detected");
                return Err(AnalyticsError::CycleDetected(hit));
            }
        }
    }

    nodes.sort_by(|a, b| {
        (a.depth, &a.path, a.employee).cmp(&(b.depth, &b.path, b.employee))
    });
    Ok(nodes)
}

/// Walk the manager chain upward from `start` until an employee repeats.
///
/// Returns `None` only when the chain terminates, which cannot happen for an
/// unreached employee whose references all resolve.
fn first_revisited(
    start: EmployeeId,
    lookup: &FxHashMap<EmployeeId, &Employee>,
) -> Option<EmployeeId> {
    let mut seen: FxHashSet<EmployeeId> = FxHashSet::default();
    let mut current = start;
    loop {
        if !seen.insert(current) {
            return Some(current);
        }
        current = lookup.get(&current)?.manager?;
    }
}
