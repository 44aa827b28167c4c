//! Royalty wallet figures.

use crate::config::{AMUSE_EARNINGS, BASE_BALANCE, DISTROKID_EARNINGS};
use crate::providers::{ConnectedProviders, Provider};

/// Consolidated balance: base plus earnings synced from linked providers.
pub fn consolidated_balance(connected: &ConnectedProviders) -> f64 {
    connected
        .iter()
        .map(provider_earnings)
        .fold(BASE_BALANCE, |total, earned| total + earned)
}

fn provider_earnings(provider: Provider) -> f64 {
    match provider {
        Provider::Distrokid => DISTROKID_EARNINGS,
        Provider::Amuse => AMUSE_EARNINGS,
        Provider::Vevo => 0.0,
    }
}

/// `$ 354.75` style rendering.
pub fn format_balance(amount: f64) -> String {
    format!("$ {:.2}", amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Synced,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Synced => "Synced",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "text-emerald-400",
            TransactionStatus::Synced => "text-indigo-400",
        }
    }
}

/// Row of the unified history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub date: &'static str,
    pub source: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub status: TransactionStatus,
}

pub const HISTORY: [Transaction; 3] = [
    Transaction {
        date: "May 01, 2024",
        source: "OrbitX",
        description: "Fast Payout Withdrawal",
        amount: "- $ 150.00",
        status: TransactionStatus::Completed,
    },
    Transaction {
        date: "Apr 28, 2024",
        source: "Distrokid",
        description: "Catalog Sync Earnings",
        amount: "+ $ 42.10",
        status: TransactionStatus::Synced,
    },
    Transaction {
        date: "Apr 15, 2024",
        source: "OrbitX",
        description: "Monthly Royalty Payout",
        amount: "+ $ 62.25",
        status: TransactionStatus::Completed,
    },
];

/// Royalty advance modal. Requesting does nothing but close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceModal {
    pub open: bool,
}

impl AdvanceModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn request(&mut self) {
        log::info!("💸 Royalty advance requested");
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(names: &[&str]) -> ConnectedProviders {
        ConnectedProviders::from_names(names.iter().copied())
    }

    #[test]
    fn test_base_balance() {
        assert_eq!(format_balance(consolidated_balance(&connected(&[]))), "$ 212.25");
    }

    #[test]
    fn test_distrokid_only() {
        let balance = consolidated_balance(&connected(&["Distrokid"]));
        assert!((balance - 354.75).abs() < 1e-9);
        assert_eq!(format_balance(balance), "$ 354.75");
    }

    #[test]
    fn test_all_providers() {
        let balance = consolidated_balance(&connected(&["Vevo", "Amuse", "Distrokid"]));
        assert_eq!(format_balance(balance), "$ 438.95");
    }

    #[test]
    fn test_advance_modal() {
        let mut modal = AdvanceModal::default();
        modal.open();
        assert!(modal.open);
        modal.request();
        assert!(!modal.open);
    }

    #[test]
    fn test_history_rows() {
        assert_eq!(HISTORY.len(), 3);
        assert_eq!(HISTORY[1].status.label(), "Synced");
        assert!(HISTORY[0].amount.starts_with('-'));
    }
}
