mod dispatcher_prepare;
mod dispatcher_run;

use crate::prelude::*;

use rand::{rngs::StdRng, SeedableRng};

/// Drives one run: loads and plans the batch, gates it on the balance, then
/// sends every transfer in order, one at a time.
#[derive(Getters, CopyGetters)]
pub struct Dispatcher<E> {
    #[getset(get = "pub")]
    parameters: DispatchParameters,

    executor: E,

    #[getset(get_copy = "pub")]
    state: DispatchState,

    rng: StdRng,
}

impl<E: TransferExecutor> Dispatcher<E> {
    pub fn new(parameters: DispatchParameters, executor: E) -> Self {
        let rng = match parameters.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            parameters,
            executor,
            state: DispatchState::default(),
            rng,
        }
    }

    /// Ends the run before any transfer was sent.
    fn abort(&mut self, cause: &Error) {
        error!("❌ Aborting before any transfer: {cause}");
        self.transition(DispatchState::Aborted);
    }

    fn transition(&mut self, next: DispatchState) {
        debug!("Dispatcher state: {} -> {}", self.state, next);
        self.state = next;
    }
}
