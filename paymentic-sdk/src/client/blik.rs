use std::sync::Arc;

use super::{ClientError, Transport, segment};
use crate::objects::blik::{ProcessBlikRequest, ProcessBlikResponse};

#[derive(Clone)]
pub struct BlikService {
    transport: Arc<Transport>,
}

impl BlikService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `POST /payment/points/{pointId}/transactions/{transactionId}/blik` –
    /// authorize a transaction with a BLIK code or alias.
    pub async fn process(
        &self,
        point_id: &str,
        transaction_id: &str,
        request: &ProcessBlikRequest,
    ) -> Result<ProcessBlikResponse, ClientError> {
        let path = format!(
            "/payment/points/{}/transactions/{}/blik",
            segment(point_id),
            segment(transaction_id)
        );
        self.transport.post(&path, request).await
    }
}
