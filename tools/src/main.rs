//! desk-runner: headless dashboard consumer for the fraud desk core.
//!
//! Usage:
//!   desk-runner --data-dir ./data
//!   desk-runner --data-dir ./data --ipc-mode

use anyhow::Result;
use chrono::Utc;
use frauddesk_core::{
    dashboard_service::{DashboardService, FraudMetrics},
    seed::SeedCatalog,
    store::{AlertStatus, Transaction, TransactionStore},
};
use std::env;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    UpdateStatus {
        transaction_id: String,
        status: String,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    metrics: FraudMetrics,
    transactions: Vec<Transaction>,
    high_risk: Vec<Transaction>,
    review_queue: Vec<Transaction>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    if !ipc_mode {
        println!("Fraud Desk — desk-runner");
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let seed = SeedCatalog::load(data_dir)?;
    let store = TransactionStore::from_seed(seed)?;
    let mut service = DashboardService::new(store);

    if ipc_mode {
        run_ipc_loop(&mut service)?;
    } else {
        print_summary(&service);
    }

    Ok(())
}

/// Line-delimited JSON over stdin/stdout for a UI shell. Every response
/// carries a freshly queried UiState — views are re-derived after each
/// mutation, never reused.
fn run_ipc_loop(service: &mut DashboardService) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                writeln!(stdout, "{}", serde_json::to_string(&build_ui_state(service))?)?;
            }
            IpcCommand::UpdateStatus {
                transaction_id,
                status,
            } => {
                match AlertStatus::from_str(&status)
                    .and_then(|s| service.update_alert_status(&transaction_id, s))
                {
                    Ok(_) => {
                        writeln!(
                            stdout,
                            "{}",
                            serde_json::to_string(&build_ui_state(service))?
                        )?;
                    }
                    Err(e) => {
                        log::warn!("update_status rejected: {e}");
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{}", err_json)?;
                    }
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(service: &DashboardService) -> UiState {
    UiState {
        metrics: service.metrics_at(Utc::now()),
        transactions: service.all_transactions(),
        high_risk: service.high_risk_transactions(),
        review_queue: service.transactions_for_review(),
    }
}

fn print_summary(service: &DashboardService) {
    let m = service.metrics_at(Utc::now());

    println!("=== FRAUD METRICS ===");
    println!("  transactions:     {}", m.total_transactions);
    println!("  high risk:        {}", m.high_risk_count);
    println!("  medium risk:      {}", m.medium_risk_count);
    println!("  low risk:         {}", m.low_risk_count);
    println!("  alerts to review: {}", m.alerts_to_review);
    println!("  fraudulent today: {}", m.fraudulent_today);
    println!("  fraud rate:       {:.1}%", m.fraud_rate_pct);
    println!("  avg amount:       ${:.2}", m.average_amount);

    println!();
    println!("=== HIGH RISK ===");
    print_table(&service.high_risk_transactions());

    println!();
    println!("=== REVIEW QUEUE ===");
    print_table(&service.transactions_for_review());
}

fn print_table(txns: &[Transaction]) {
    if txns.is_empty() {
        println!("  (none)");
        return;
    }
    for t in txns {
        let status = t
            .alert_status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {} | {:>9.2} | {:<17} | {} | score {:.2} | {} | {}",
            t.id,
            t.amount,
            t.txn_type,
            t.risk_level,
            t.risk_score,
            status,
            t.member_name,
        );
    }
}
