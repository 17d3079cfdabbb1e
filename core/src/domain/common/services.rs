use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    common::ports::Clock, customer::ports::CustomerRepository,
    preferences::ports::PreferenceRepository,
};

/// Aggregates the repositories every domain service is implemented on.
///
/// Mutating operations read the whole collection, modify it and write it back,
/// so they are serialized through `write_lock`.
#[derive(Clone)]
pub struct Service<CR, PR, CL>
where
    CR: CustomerRepository,
    PR: PreferenceRepository,
    CL: Clock,
{
    pub(crate) customer_repository: CR,
    pub(crate) preference_repository: PR,
    pub(crate) clock: CL,
    pub(crate) write_lock: Arc<Mutex<()>>,
}

impl<CR, PR, CL> Service<CR, PR, CL>
where
    CR: CustomerRepository,
    PR: PreferenceRepository,
    CL: Clock,
{
    pub fn new(customer_repository: CR, preference_repository: PR, clock: CL) -> Self {
        Self {
            customer_repository,
            preference_repository,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
