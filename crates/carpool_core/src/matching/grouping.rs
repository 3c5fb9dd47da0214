use std::collections::HashMap;

use crate::model::Participant;

use super::types::{Assignment, GroupedResult};

/// Group assignments by driver.
///
/// Every driver appears exactly once, in driver order, including drivers with no
/// passengers. Passenger names keep their assignment order.
pub fn group_by_driver(drivers: &[Participant], assignments: &[Assignment]) -> Vec<GroupedResult> {
    let mut groups: Vec<GroupedResult> = drivers
        .iter()
        .map(|driver| GroupedResult {
            driver: driver.name.clone(),
            category: driver.category,
            passengers: Vec::new(),
        })
        .collect();

    let mut index_by_name: HashMap<&str, usize> = HashMap::with_capacity(drivers.len());
    for (idx, driver) in drivers.iter().enumerate() {
        index_by_name.entry(driver.name.as_str()).or_insert(idx);
    }

    for assignment in assignments {
        if let Some(&idx) = index_by_name.get(assignment.driver.as_str()) {
            groups[idx].passengers.push(assignment.passenger.clone());
        }
    }

    groups
}
