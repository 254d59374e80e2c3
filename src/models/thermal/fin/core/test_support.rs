use super::{FinInputs, FinParameters, FinType, TipCondition};

/// Parameters at the control defaults with the given fin type and tip condition.
pub(super) fn params(fin_type: FinType, tip_condition: TipCondition) -> FinParameters {
    let defaults = FinParameters::from_inputs(&FinInputs::default())
        .expect("control defaults should be valid");
    FinParameters {
        fin_type,
        tip_condition,
        ..defaults
    }
}
