use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::roadmap::builder::DayPlan;

/// Calendar placement of a roadmap day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDay {
    pub day: u8,
    pub date: NaiveDate,
    pub weekday: String,
}

/// Places day N of the plan on `today + N` days.
pub fn schedule_days(days: &[DayPlan], today: NaiveDate) -> Vec<ScheduledDay> {
    days.iter()
        .filter_map(|plan| {
            let date = today.checked_add_days(Days::new(u64::from(plan.day())))?;
            Some(ScheduledDay {
                day: plan.day(),
                date,
                weekday: date.format("%A").to_string(),
            })
        })
        .collect()
}
