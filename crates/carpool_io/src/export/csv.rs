use carpool_core::{MatchOutcome, PoolMode};

use crate::error::Result;

pub(crate) fn export_groups_impl(
    outcome: &MatchOutcome,
    mode: PoolMode,
    file: std::fs::File,
) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(file);
    let with_category = mode.is_category_aware();

    if with_category {
        wtr.write_record(["Driver", "Category", "Passengers", "Passenger Count"])?;
    } else {
        wtr.write_record(["Driver", "Passengers", "Passenger Count"])?;
    }

    for group in &outcome.groups {
        let passengers = group.passengers_label();
        let count = group.passenger_count().to_string();
        if with_category {
            let category = group.category.map(|c| c.label()).unwrap_or_default();
            wtr.write_record([group.driver.as_str(), category, passengers.as_str(), count.as_str()])?;
        } else {
            wtr.write_record([group.driver.as_str(), passengers.as_str(), count.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
