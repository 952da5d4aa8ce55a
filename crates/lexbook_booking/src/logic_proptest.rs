#[cfg(test)]
mod tests {
    use crate::logic::{resolve, resolve_week, WEEK_VIEW_VISIBLE_SLOTS};
    use crate::models::{AvailabilityTemplate, Professional, ProfessionalId, TimeOfDay, Weekday};
    use crate::week::WeekWindow;
    use chrono::{Datelike, Duration, NaiveDate};
    use proptest::prelude::*;

    // Helper strategy: any minute of the day
    fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| TimeOfDay::new(h, m).unwrap())
    }

    // Helper strategy: a template where each weekday may be missing or hold
    // up to eight slots in arbitrary order
    fn any_template() -> impl Strategy<Value = AvailabilityTemplate> {
        prop::collection::vec(
            prop::option::of(prop::collection::vec(time_of_day(), 0..8)),
            7,
        )
        .prop_map(|days| -> AvailabilityTemplate {
            Weekday::ALL
                .iter()
                .zip(days)
                .filter_map(|(day, slots)| slots.map(|s| (*day, s)))
                .collect()
        })
    }

    // Helper strategy: dates a few centuries either side of 2000
    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (-200_000i64..200_000).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
        })
    }

    fn professional(availability: AvailabilityTemplate) -> Professional {
        Professional {
            id: ProfessionalId(1),
            name: "Test Attorney".to_string(),
            specialization: "General Practice".to_string(),
            experience: "1 year".to_string(),
            rating: 3.0,
            review_count: 0,
            languages: vec![],
            location: "Denver, CO".to_string(),
            avatar: None,
            availability,
        }
    }

    proptest! {
        // Test that resolve returns exactly the template list of the date's weekday
        #[test]
        fn test_resolve_draws_from_weekday_template(template in any_template(), date in any_date()) {
            let professional = professional(template.clone());
            let slots = resolve(&professional, date);

            prop_assert_eq!(slots, template.slots(Weekday::of(date)));
            for slot in slots {
                prop_assert!(template.slots(Weekday::of(date)).contains(slot));
            }
        }

        // Test that resolve is deterministic, order included
        #[test]
        fn test_resolve_is_deterministic(template in any_template(), date in any_date()) {
            let professional = professional(template);
            let first = resolve(&professional, date).to_vec();
            let second = resolve(&professional, date).to_vec();
            prop_assert_eq!(first, second);
        }

        // Test the overflow law of the week grid
        #[test]
        fn test_resolve_week_overflow_law(template in any_template(), date in any_date()) {
            let professional = professional(template);
            let week = WeekWindow::containing(date);
            let availability = resolve_week(&professional, &week);

            prop_assert_eq!(availability.days.len(), 7);
            for day in availability.iter() {
                let total = resolve(&professional, day.date).len();
                prop_assert_eq!(day.total, total);
                prop_assert_eq!(day.visible.len(), total.min(WEEK_VIEW_VISIBLE_SLOTS));
                prop_assert_eq!(day.overflow_count, total.saturating_sub(WEEK_VIEW_VISIBLE_SLOTS));
                prop_assert_eq!(&day.visible[..], &resolve(&professional, day.date)[..day.visible.len()]);
            }
        }

        // Test that the week window is Monday-aligned and round-trips
        #[test]
        fn test_week_window_alignment_and_round_trip(date in any_date(), steps in 0usize..20) {
            let week = WeekWindow::containing(date);
            prop_assert_eq!(week.week_start().weekday(), chrono::Weekday::Mon);
            prop_assert!(week.contains(date));
            prop_assert!(date - week.week_start() < Duration::days(7));

            prop_assert_eq!(week.next().prev(), week);
            prop_assert_eq!(week.prev().next(), week);
            prop_assert_eq!(week.next().week_start() - week.week_start(), Duration::days(7));

            let mut moved = week;
            for _ in 0..steps {
                moved = moved.next();
            }
            for _ in 0..steps {
                moved = moved.prev();
            }
            prop_assert_eq!(moved, week);
        }
    }
}
