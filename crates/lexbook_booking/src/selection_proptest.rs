#[cfg(test)]
mod tests {
    use crate::directory::AttorneyDirectory;
    use crate::error::BookingError;
    use crate::logic::resolve;
    use crate::models::{ProfessionalId, TimeOfDay};
    use crate::selection::SelectionState;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    enum Action {
        Professional(u32),
        Date(i64),
        ClearDate,
        Time(u32),
    }

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
    }

    // Ids 1..=3 exist, 4 does not; hours 7..=18 cover offered and unoffered slots
    fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (1u32..5).prop_map(Action::Professional),
            (-10i64..30).prop_map(Action::Date),
            Just(Action::ClearDate),
            (7u32..19).prop_map(Action::Time),
        ]
    }

    fn apply(selection: &mut SelectionState, action: &Action) -> Result<(), BookingError> {
        match action {
            Action::Professional(id) => selection.select_professional(ProfessionalId(*id)),
            Action::Date(offset) => {
                selection.select_date(base_date() + Duration::days(*offset));
                Ok(())
            }
            Action::ClearDate => {
                selection.clear_date();
                Ok(())
            }
            Action::Time(hour) => selection.select_time(TimeOfDay::new(*hour, 0).unwrap()),
        }
    }

    proptest! {
        // Test that any action sequence keeps the selected time resolvable
        #[test]
        fn test_time_always_resolvable(actions in prop::collection::vec(any_action(), 0..40)) {
            let mut selection = SelectionState::new(Arc::new(AttorneyDirectory::builtin())).unwrap();
            for action in &actions {
                let before = selection.snapshot();
                let revision = selection.revision();
                let result = apply(&mut selection, action);

                if result.is_err() {
                    prop_assert_eq!(selection.snapshot(), before);
                    prop_assert_eq!(selection.revision(), revision);
                }
                if let Some(time) = selection.selected_time() {
                    let date = selection.selected_date();
                    prop_assert!(date.is_some());
                    prop_assert!(resolve(selection.professional(), date.unwrap()).contains(&time));
                }
            }
        }

        // Test that date and professional changes always clear the time
        #[test]
        fn test_date_and_professional_clear_time(
            setup in prop::collection::vec(any_action(), 0..20),
            last in any_action(),
        ) {
            let mut selection = SelectionState::new(Arc::new(AttorneyDirectory::builtin())).unwrap();
            for action in &setup {
                let _ = apply(&mut selection, action);
            }
            let result = apply(&mut selection, &last);
            match last {
                Action::Date(_) | Action::ClearDate => {
                    prop_assert_eq!(selection.selected_time(), None);
                }
                Action::Professional(_) if result.is_ok() => {
                    prop_assert_eq!(selection.selected_time(), None);
                }
                _ => {}
            }
        }

        // Test that select_time succeeds exactly for resolved slots
        #[test]
        fn test_select_time_iff_resolved(id in 1u32..4, offset in -10i64..30, hour in 0u32..24) {
            let mut selection = SelectionState::new(Arc::new(AttorneyDirectory::builtin())).unwrap();
            selection.select_professional(ProfessionalId(id)).unwrap();
            let date = base_date() + Duration::days(offset);
            selection.select_date(date);

            let time = TimeOfDay::new(hour, 0).unwrap();
            let offered = resolve(selection.professional(), date).contains(&time);
            let result = selection.select_time(time);

            prop_assert_eq!(result.is_ok(), offered);
            if offered {
                prop_assert_eq!(selection.selected_time(), Some(time));
            } else {
                prop_assert_eq!(result, Err(BookingError::InvalidSelection { date, time }));
                prop_assert_eq!(selection.selected_time(), None);
            }
        }
    }
}
