//! Refund endpoints.

use std::sync::Arc;

use super::{ClientError, Transport, segment};
use crate::objects::refund::{CreateRefundRequest, CreateRefundResponse, Refund};

#[derive(Clone)]
pub struct RefundService {
    transport: Arc<Transport>,
}

impl RefundService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `POST /payment/points/{pointId}/transactions/{transactionId}/refunds`.
    pub async fn create(
        &self,
        point_id: &str,
        transaction_id: &str,
        request: &CreateRefundRequest,
    ) -> Result<CreateRefundResponse, ClientError> {
        crate::validation::validate_amount(&request.amount.to_string())?;
        let path = format!(
            "/payment/points/{}/transactions/{}/refunds",
            segment(point_id),
            segment(transaction_id)
        );
        self.transport.post(&path, request).await
    }

    /// `GET /payment/points/{pointId}/transactions/{transactionId}/refunds/{refundId}`.
    pub async fn get(
        &self,
        point_id: &str,
        transaction_id: &str,
        refund_id: &str,
    ) -> Result<Refund, ClientError> {
        let path = format!(
            "/payment/points/{}/transactions/{}/refunds/{}",
            segment(point_id),
            segment(transaction_id),
            segment(refund_id)
        );
        self.transport.get(&path).await
    }
}
