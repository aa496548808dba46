use std::sync::Arc;

use super::{ClientError, Transport, segment};
use crate::objects::channel::Channel;

#[derive(Clone)]
pub struct PointService {
    transport: Arc<Transport>,
}

impl PointService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /payment/points/{pointId}/channels` – payment channels enabled
    /// on the point of sale.
    pub async fn channels(&self, point_id: &str) -> Result<Vec<Channel>, ClientError> {
        let path = format!("/payment/points/{}/channels", segment(point_id));
        self.transport.get(&path).await
    }
}
