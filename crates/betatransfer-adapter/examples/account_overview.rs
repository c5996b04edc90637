/*
[INPUT]:  Public and private merchant tokens (command-line arguments)
[OUTPUT]: Balances and the latest deposits printed to stdout
[POS]:    Examples - read-only gateway queries
[UPDATE]: When adding new read endpoints
*/

use betatransfer_adapter::*;

/// Example: query balances and recent successful deposits
///
/// Usage: cargo run --example account_overview -- <public_token> <private_token>
#[tokio::main]
async fn main() {
    println!("=== Betatransfer Account Overview ===\n");

    let mut args = std::env::args().skip(1);
    let (Some(public_token), Some(private_token)) = (args.next(), args.next()) else {
        eprintln!("usage: account_overview <public_token> <private_token>");
        return;
    };

    let client = match BetatransferClient::new(Credentials::new(public_token, private_token)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let filter = HistoryFilter::new()
        .limit(10)
        .transaction_type(TransactionType::Deposit)
        .status(TransactionStatus::Success);

    let (info, history) = tokio::join!(
        client.get_account_info(),
        client.get_transaction_history(filter)
    );

    match info {
        Ok(info) => {
            for (currency, amount) in info.balance.iter() {
                println!(
                    "{currency}: {amount} (on hold {})",
                    info.balance_on_hold.get(currency)
                );
            }
            println!(
                "withdrawals locked: {}, account locked: {}",
                info.withdrawal_locked, info.account_locked
            );
        }
        Err(e) => println!("✗ Account info error ({:?}): {}", e.kind(), e),
    }

    match history {
        Ok(transactions) => {
            println!("\nLast {} deposits:", transactions.len());
            for tx in transactions {
                println!(
                    "  #{} {} {} via {} [{}]",
                    tx.id, tx.amount, tx.currency, tx.payment_system, tx.status
                );
            }
        }
        Err(e) => println!("✗ History error ({:?}): {}", e.kind(), e),
    }

    client.close();
}
