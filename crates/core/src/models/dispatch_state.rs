/// Lifecycle of a [`crate::prelude::Dispatcher`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum DispatchState {
    #[default]
    Idle,
    Loading,
    Planning,
    PreflightCheck,
    Aborted,
    Dispatching,
    Completed,
}

impl DispatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Aborted | Self::Completed)
    }
}
