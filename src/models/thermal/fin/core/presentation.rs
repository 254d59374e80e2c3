//! Labels for plotting a fin temperature profile.

use super::{FinType, TipCondition};

/// Horizontal axis label for [`FinResult::profile_points`](super::FinResult::profile_points).
pub const X_AXIS_LABEL: &str = "Length along fin (m)";

/// Vertical axis label for [`FinResult::profile_points`](super::FinResult::profile_points).
pub const Y_AXIS_LABEL: &str = "Temperature (°C)";

/// Builds the plot title for a fin profile.
///
/// The tip condition always appears, even for geometries that ignore it.
///
/// ```
/// use twine_fins::models::thermal::fin::{FinType, TipCondition, plot_title};
///
/// assert_eq!(
///     plot_title(FinType::Pin, TipCondition::Convective),
///     "Pin Fin (Convective Tip) Temperature Distribution",
/// );
/// ```
#[must_use]
pub fn plot_title(fin_type: FinType, tip_condition: TipCondition) -> String {
    format!(
        "{} Fin ({} Tip) Temperature Distribution",
        fin_type.label(),
        tip_condition.label()
    )
}
