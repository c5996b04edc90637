/*
[INPUT]:  Optional history filters and request signer
[OUTPUT]: Ordered list of typed transactions
[POS]:    HTTP layer - transaction history endpoint
[UPDATE]: When history filters, their signing order, or item shape change
*/

use tracing::{debug, warn};

use crate::http::{BetatransferClient, BetatransferError, Result};
use crate::types::{HistoryFilter, HistoryResponse, TokenQuery, Transaction};

const OPERATION: &str = "history";

impl BetatransferClient {
    /// Query transaction history with optional filters
    ///
    /// POST /api/history?token={token}
    /// Form: type, limit, status, address (present ones only), sign
    /// Signed values: present filters in the order type, limit, status, address
    ///
    /// Items keep the gateway's order. A single malformed item fails the
    /// whole call.
    pub async fn get_transaction_history(&self, filter: HistoryFilter) -> Result<Vec<Transaction>> {
        let params = filter.normalize()?;
        let sign = self.sign(&params.sign_values());
        let form = params.into_form(sign);
        let query = TokenQuery {
            token: self.public_token(),
            sign: None,
        };

        debug!(operation = OPERATION, path = self.history_url().path(), "POST");
        let builder = self
            .http()
            .post(self.history_url().clone())
            .query(&query)
            .form(&form);

        let response: HistoryResponse = self.send_json(OPERATION, builder).await?;
        let transactions = response
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Transaction>(item).map_err(|err| {
                    warn!(operation = OPERATION, index, error = %err, "history item does not match schema");
                    BetatransferError::protocol(OPERATION, format!("item {index}: {err}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(operation = OPERATION, count = transactions.len(), "history decoded");
        Ok(transactions)
    }
}
