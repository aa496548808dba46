//! Transaction endpoints under `/payment/points/{pointId}/transactions`.

use std::sync::Arc;

use super::{ClientError, Transport, segment};
use crate::objects::transaction::{
    CreateTransactionRequest, CreateTransactionResponse, Transaction,
};

#[derive(Clone)]
pub struct TransactionService {
    transport: Arc<Transport>,
}

impl TransactionService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `POST /payment/points/{pointId}/transactions` – create a transaction.
    ///
    /// The request is validated locally first; an invalid request is
    /// rejected with [`ClientError::InvalidValue`] without a network call.
    pub async fn create(
        &self,
        point_id: &str,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, ClientError> {
        request.validate()?;
        let path = format!("/payment/points/{}/transactions", segment(point_id));
        self.transport.post(&path, request).await
    }

    /// `GET /payment/points/{pointId}/transactions/{transactionId}`.
    ///
    /// Nested value objects in the response are validated like outbound
    /// ones; a violation surfaces as [`ClientError::InvalidValue`].
    pub async fn get(
        &self,
        point_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction, ClientError> {
        let path = format!(
            "/payment/points/{}/transactions/{}",
            segment(point_id),
            segment(transaction_id)
        );
        let transaction: Transaction = self.transport.get(&path).await?;
        transaction.validate()?;
        Ok(transaction)
    }

    /// `PATCH /payment/points/{pointId}/transactions/{transactionId}/capture`
    /// – capture a pre-authorized transaction.
    pub async fn capture(&self, point_id: &str, transaction_id: &str) -> Result<(), ClientError> {
        let path = format!(
            "/payment/points/{}/transactions/{}/capture",
            segment(point_id),
            segment(transaction_id)
        );
        self.transport.patch(&path).await
    }
}
