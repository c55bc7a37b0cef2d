use std::sync::Arc;

use actix_web::web::ThinData;

use crate::jobs::{JobProducer, JobProducerTrait};

/// Application state threaded through the HTTP layer.
///
/// Generic over the job producer so controllers can be exercised against a
/// mock in tests.
pub struct AppState<J: JobProducerTrait + 'static> {
    pub job_producer: Arc<J>,
}

impl<J: JobProducerTrait + 'static> AppState<J> {
    pub fn job_producer(&self) -> Arc<J> {
        self.job_producer.clone()
    }
}

impl<J: JobProducerTrait + 'static> Clone for AppState<J> {
    fn clone(&self) -> Self {
        Self {
            job_producer: self.job_producer.clone(),
        }
    }
}

pub type DefaultAppState = AppState<JobProducer>;
pub type ThinDataAppState<J> = ThinData<AppState<J>>;
