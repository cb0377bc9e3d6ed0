//! Which screen of a resource page is shown.

use crate::domain::common::RecordId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Create,
    Edit(RecordId),
    Overview(RecordId),
}

/// User actions that move between screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// "Create" button on the list
    Create,
    /// "Edit" on a list row or on the overview
    Edit(RecordId),
    /// "View" (eye) on a list row
    View(RecordId),
    /// Form saved successfully
    Submitted,
    /// Form cancelled
    Cancel,
    /// Back from the overview
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot apply '{event}' while on the {from} screen")]
pub struct ViewModeError {
    pub from: &'static str,
    pub event: &'static str,
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Edit(_) => "edit",
            Self::Overview(_) => "overview",
        }
    }

    /// Next mode for `event`, or an error when the event makes no sense here
    pub fn transition(&self, event: ViewEvent) -> Result<ViewMode, ViewModeError> {
        let next = match (self, &event) {
            (Self::List, ViewEvent::Create) => Self::Create,
            (Self::List, ViewEvent::Edit(id)) => Self::Edit(id.clone()),
            (Self::List, ViewEvent::View(id)) => Self::Overview(id.clone()),
            (Self::Create | Self::Edit(_), ViewEvent::Submitted | ViewEvent::Cancel) => Self::List,
            (Self::Overview(_), ViewEvent::Edit(id)) => Self::Edit(id.clone()),
            (Self::Overview(_), ViewEvent::Back) => Self::List,
            _ => {
                return Err(ViewModeError {
                    from: self.name(),
                    event: event.name(),
                })
            }
        };
        Ok(next)
    }
}

impl ViewEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit(_) => "edit",
            Self::View(_) => "view",
            Self::Submitted => "submitted",
            Self::Cancel => "cancel",
            Self::Back => "back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> RecordId {
        RecordId::Number(n)
    }

    #[test]
    fn test_initial_is_list() {
        assert_eq!(ViewMode::default(), ViewMode::List);
    }

    #[test]
    fn test_list_transitions() {
        let list = ViewMode::List;
        assert_eq!(list.transition(ViewEvent::Create), Ok(ViewMode::Create));
        assert_eq!(list.transition(ViewEvent::Edit(id(1))), Ok(ViewMode::Edit(id(1))));
        assert_eq!(
            list.transition(ViewEvent::View(id(2))),
            Ok(ViewMode::Overview(id(2)))
        );
        assert!(list.transition(ViewEvent::Back).is_err());
        assert!(list.transition(ViewEvent::Submitted).is_err());
    }

    #[test]
    fn test_forms_return_to_list() {
        for mode in [ViewMode::Create, ViewMode::Edit(id(3))] {
            assert_eq!(mode.transition(ViewEvent::Submitted), Ok(ViewMode::List));
            assert_eq!(mode.transition(ViewEvent::Cancel), Ok(ViewMode::List));
            assert!(mode.transition(ViewEvent::View(id(3))).is_err());
        }
    }

    #[test]
    fn test_overview_transitions() {
        let overview = ViewMode::Overview(id(4));
        assert_eq!(
            overview.transition(ViewEvent::Edit(id(4))),
            Ok(ViewMode::Edit(id(4)))
        );
        assert_eq!(overview.transition(ViewEvent::Back), Ok(ViewMode::List));

        let err = overview.transition(ViewEvent::Create).unwrap_err();
        assert_eq!(err.to_string(), "Cannot apply 'create' while on the overview screen");
    }
}
