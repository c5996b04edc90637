/*
[INPUT]:  Stored public token and request signer
[OUTPUT]: Account balances and lock flags
[POS]:    HTTP layer - account info endpoint
[UPDATE]: When the account-info response shape changes
*/

use tracing::debug;

use crate::auth::SignValue;
use crate::http::{BetatransferClient, Result};
use crate::types::{AccountInfo, AccountInfoResponse, TokenQuery};

const OPERATION: &str = "account_info";

impl BetatransferClient {
    /// Query merchant balances and account locks
    ///
    /// GET /api/account-info?token={token}&sign={sign}
    /// Signed values: [token]
    pub async fn get_account_info(&self) -> Result<AccountInfo> {
        let token = self.public_token();
        let sign = self.sign(&[SignValue::from(token)]);
        let query = TokenQuery {
            token,
            sign: Some(&sign),
        };

        debug!(operation = OPERATION, path = self.account_info_url().path(), "GET");
        let builder = self
            .http()
            .get(self.account_info_url().clone())
            .query(&query);

        let response: AccountInfoResponse = self.send_json(OPERATION, builder).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BetatransferClient, BetatransferError, ClientConfig, Credentials};
    use crate::types::Currency;
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BetatransferClient {
        BetatransferClient::with_config(
            Credentials::new("pub", "secret"),
            ClientConfig::with_base_url(server.uri()),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_account_info() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "balance": { "RUB": "1200.50", "USD": 15, "UAH": "0" },
            "balance_on_hold": { "RUB": "0", "USD": "2.5", "UAH": 40 },
            "account": { "lockWithdrawal": false, "lockAccount": true }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/account-info"))
            .and(query_param("token", "pub"))
            .and(query_param("sign", "aa80ed39b1cb48a910f2f8a32fbd4ce8"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let info = client_for(&server)
            .get_account_info()
            .await
            .expect("get_account_info failed");

        assert_eq!(info.balance.get(Currency::Rub), Decimal::new(120050, 2));
        assert_eq!(info.balance.get(Currency::Usd), Decimal::from(15));
        assert_eq!(info.balance.get(Currency::Uah), Decimal::ZERO);
        assert_eq!(info.balance_on_hold.get(Currency::Usd), Decimal::new(25, 1));
        assert_eq!(info.balance_on_hold.get(Currency::Uah), Decimal::from(40));
        assert!(!info.withdrawal_locked);
        assert!(info.account_locked);
    }

    #[tokio::test]
    async fn test_get_account_info_missing_account_section() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/account-info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "balance": { "RUB": 1, "USD": 2, "UAH": 3 },
                "balance_on_hold": { "RUB": 0, "USD": 0, "UAH": 0 }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).get_account_info().await.unwrap_err();

        assert!(err.is_protocol());
        match err {
            BetatransferError::Protocol { operation, message } => {
                assert_eq!(operation, "account_info");
                assert!(message.contains("account"));
            }
            other => panic!("Expected Protocol error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_account_info_error_status() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/account-info"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid sign"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_account_info().await.unwrap_err();

        assert!(err.is_transport());
        assert!(matches!(
            err,
            BetatransferError::Status { code: 403, ref message } if message == "invalid sign"
        ));
    }

    #[tokio::test]
    async fn test_get_account_info_non_json_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/account-info"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_account_info().await.unwrap_err();

        assert!(matches!(err, BetatransferError::InvalidJson(_)));
        assert!(err.is_transport());
    }
}
