//! Wizard step progression
//!
//! waste-type -> heavy-waste-detail -> skip-selection. The first transition
//! is guarded on a non-empty waste-type selection; a rejected attempt leaves
//! the step unchanged rather than raising, since it is a routine UI
//! condition (the host disables the advance action instead).

use skiphire_types::Step;

/// Whether the advance guard permits leaving `step`
pub fn can_advance(step: Step, selected_waste_count: usize) -> bool {
    match step {
        Step::WasteType => selected_waste_count > 0,
        Step::HeavyWasteDetail => true,
        Step::SkipSelection => false,
    }
}

/// Next step, honoring the advance guard. Returns the unchanged step when
/// the guard rejects or the flow is already at its terminal step.
pub fn advance(step: Step, selected_waste_count: usize) -> Step {
    match step {
        Step::WasteType if selected_waste_count > 0 => Step::HeavyWasteDetail,
        Step::WasteType => Step::WasteType,
        Step::HeavyWasteDetail => Step::SkipSelection,
        Step::SkipSelection => Step::SkipSelection,
    }
}

/// Previous step. Only the heavy-waste detail screen has a back edge within
/// the modeled flow; everything else stays put.
pub fn step_back(step: Step) -> Step {
    match step {
        Step::HeavyWasteDetail => Step::WasteType,
        Step::WasteType | Step::SkipSelection => step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_guarded_on_empty_selection() {
        assert_eq!(advance(Step::WasteType, 0), Step::WasteType);
        assert!(!can_advance(Step::WasteType, 0));
    }

    #[test]
    fn test_advance_with_selection() {
        assert_eq!(advance(Step::WasteType, 1), Step::HeavyWasteDetail);
        assert_eq!(advance(Step::HeavyWasteDetail, 0), Step::SkipSelection);
    }

    #[test]
    fn test_skip_selection_is_terminal() {
        assert_eq!(advance(Step::SkipSelection, 3), Step::SkipSelection);
    }

    #[test]
    fn test_back_edge() {
        assert_eq!(step_back(Step::HeavyWasteDetail), Step::WasteType);
        assert_eq!(step_back(Step::WasteType), Step::WasteType);
        assert_eq!(step_back(Step::SkipSelection), Step::SkipSelection);
    }
}
